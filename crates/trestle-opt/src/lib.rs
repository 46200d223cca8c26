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

//! # Trestle Optimizer
//!
//! The assignment optimizer: turns a guest/table instance plus an
//! objective weight vector into a scored seating layout.
//!
//! A run builds a 0/1 integer model (one `x[g,t]` per guest/table pair,
//! AND-linked pair variables for every relevant guest relation), seeds the
//! exact branch-and-bound engine with a weight-aware greedy layout, and
//! extracts the optimal assignment. Whenever no usable solution comes back
//! (infeasible instance, time limit, interrupt), the run degrades to a
//! deterministic round-robin fallback layout instead of failing.

pub mod assignment;
pub mod error;
pub mod greedy;
pub mod optimizer;
pub mod pairs;

pub use error::OptimizeError;
pub use optimizer::{fallback_layout, optimize, optimize_with_options, OptimizeOptions};
