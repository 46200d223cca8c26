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

use serde::{Deserialize, Serialize};
use trestle_model::{layout::Layout, weights::WeightVector};

/// A node of the weight-space search tree.
///
/// A state owns its weight vector and (for non-root states) the layout the
/// optimizer produced for it, plus a note naming the thought that created
/// it. The guests and venue are not part of the state: the whole search
/// shares them read-only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchState {
    weights: WeightVector,
    layout: Option<Layout>,
    notes: String,
}

impl SearchState {
    /// Creates the root state: base weights, no layout, empty note.
    #[inline]
    pub fn root() -> Self {
        Self {
            weights: WeightVector::default(),
            layout: None,
            notes: String::new(),
        }
    }

    /// Creates a child state produced by the named thought.
    #[inline]
    pub fn new<N>(weights: WeightVector, layout: Option<Layout>, notes: N) -> Self
    where
        N: Into<String>,
    {
        Self {
            weights,
            layout,
            notes: notes.into(),
        }
    }

    /// Returns the weight vector of this state.
    #[inline]
    pub fn weights(&self) -> &WeightVector {
        &self.weights
    }

    /// Returns the layout of this state, if one was computed.
    #[inline]
    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// Returns the note naming the thought that produced this state.
    #[inline]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Returns the evaluation value of this state: the layout score, or
    /// 0.0 when no layout exists.
    #[inline]
    pub fn value(&self) -> f64 {
        self.layout.as_ref().map_or(0.0, Layout::score)
    }

    /// Returns `true` if this state carries a layout with no hard
    /// violations recorded.
    ///
    /// The expansion loop never consults this predicate today (the
    /// constraint summary is always empty); it is kept for callers that
    /// want an explicit stopping condition.
    pub fn is_terminal(&self) -> bool {
        self.layout
            .as_ref()
            .and_then(Layout::summary)
            .is_some_and(|summary| summary.has_no_hard_violations())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_root_state_has_no_layout_and_zero_value() {
        let root = SearchState::root();
        assert!(root.layout().is_none());
        assert_eq!(root.value(), 0.0);
        assert_eq!(root.notes(), "");
        assert!(!root.is_terminal());
    }

    #[test]
    fn test_value_is_the_layout_score() {
        let layout = Layout::optimized(BTreeMap::new(), 2.25, BTreeMap::new());
        let state = SearchState::new(WeightVector::default(), Some(layout), "balance_all");
        assert_eq!(state.value(), 2.25);
        assert_eq!(state.notes(), "balance_all");
    }

    #[test]
    fn test_state_with_clean_layout_is_terminal() {
        let layout = Layout::optimized(BTreeMap::new(), 1.0, BTreeMap::new());
        let state = SearchState::new(WeightVector::default(), Some(layout), "modern_seating");
        assert!(state.is_terminal());
    }
}
