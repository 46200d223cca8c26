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

//! # Trestle Model
//!
//! **The Core Domain Model for the Trestle Seating Solver.**
//!
//! This crate defines the fundamental data structures used to represent a
//! seating instance: the guests to be seated, the capacity-bounded tables of
//! the venue, the objective weights that steer an optimization run, and the
//! resulting layout. It serves as the data interchange layer between the
//! problem definition (user input) and the optimization engine
//! (`trestle_opt`).
//!
//! ## Architecture
//!
//! * **`index`**: Strongly-typed wrappers (`GuestIndex`, `TableIndex`) to
//!   prevent logical indexing errors.
//! * **`guest`** / **`venue`**: Immutable guest and venue records. All fields
//!   are private; values are constructed once and read through accessors.
//! * **`category`**: Pure classification of a guest's group label into
//!   family/social/side attributes and a closeness rank.
//! * **`weights`**: The objective weight vector and its four required terms.
//! * **`layout`**: The seating layout produced by an optimization run plus
//!   the soft-constraint summary shape.
//! * **`instance`**: The plain `{guests, tables, settings}` record accepted
//!   at the outermost call boundary.
//!
//! ## Design Philosophy
//!
//! 1. **Immutability**: Guests and venues never change after construction;
//!    every optimization run shares them read-only.
//! 2. **Deterministic output**: Every map that crosses the API boundary is a
//!    `BTreeMap`, so serialized output and deduplication keys are stable.
//! 3. **Compatibility over cleverness**: Fields that the optimizer does not
//!    consume today (tags, must-sit-with lists, table constraint maps) are
//!    preserved verbatim for input/output compatibility.

pub mod category;
pub mod guest;
pub mod index;
pub mod instance;
pub mod layout;
pub mod venue;
pub mod weights;
