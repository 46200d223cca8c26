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

use crate::{
    model::BinaryModel,
    monitor::search_monitor::SearchMonitor,
    num::ObjectiveNumeric,
    result::SolveOutcome,
};

/// The pluggable solving strategy for [`BinaryModel`]s.
///
/// Implementations never fail with an error: the absence of a solution is a
/// status inside the returned [`SolveOutcome`]. The provided monitor is
/// consulted cooperatively; an implementation that honors it can be
/// time-bounded and interrupted from outside.
///
/// `warm_start` optionally seeds the search with a known-feasible 0/1
/// assignment; implementations must ignore a warm start that is not
/// feasible for the given model.
pub trait MipSolver<W>
where
    W: ObjectiveNumeric,
{
    /// Returns the display name of this solving strategy.
    fn name(&self) -> &str;

    /// Solves the given model.
    fn solve<M>(
        &mut self,
        model: &BinaryModel<W>,
        warm_start: Option<&[bool]>,
        monitor: M,
    ) -> SolveOutcome<W>
    where
        M: SearchMonitor<W>;
}
