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

//! # Trestle Search
//!
//! The weight-space search controller. Starting from the base weight
//! configuration, each level expands every frontier state through a fixed
//! catalog of weight transformations ("thoughts"), re-optimizes once per
//! child, scores the children, and keeps a bounded frontier. All scored
//! states are accumulated; ranking and deduplication into a distinct
//! top-k list is a separate, caller-side step.
//!
//! With the `parallel` feature enabled, the per-level optimizer calls run
//! on a rayon pool; results keep their generation order, so the search
//! stays deterministic either way.

pub mod bfs;
pub mod rank;
pub mod state;
pub mod thought;

pub use bfs::{search, search_with_options, SearchOptions, SearchParams};
pub use rank::{select_top_k, RankedLayout};
pub use state::SearchState;
pub use thought::Thought;
