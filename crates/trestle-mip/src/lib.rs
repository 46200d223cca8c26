// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Trestle MIP
//!
//! The abstract 0/1 integer model the assignment optimizer builds against:
//! binary variables with objective coefficients, linear constraint rows, a
//! maximizing linear objective, and a pluggable [`solver::MipSolver`]
//! interface that returns a status, not an error, when no solution exists.
//!
//! The crate also hosts the search-monitor infrastructure (time limits,
//! cooperative interruption, composition) shared by every solver
//! implementation.
//!
//! A malformed model (out-of-range variable, non-finite coefficient) is a
//! [`model::ModelError`]; infeasibility is a [`result::SolverResult`]
//! status. The two are never conflated.

pub mod model;
pub mod monitor;
pub mod num;
pub mod result;
pub mod solver;
