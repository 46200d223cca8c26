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

//! # Ranking & Deduplication
//!
//! Post-processes the accumulated scored states of a search run into a
//! distinct, ranked top-k list. Two layouts are duplicates when they share
//! the id tag and the exact same guest→table mapping; the walk is in
//! descending value order, so the first (highest-value) occurrence wins.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use trestle_model::{layout::Layout, weights::WeightVector};

use crate::state::SearchState;

/// One entry of the ranked top-k output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedLayout {
    value: f64,
    weights: WeightVector,
    notes: String,
    layout: Layout,
}

impl RankedLayout {
    /// Returns the evaluation value of the kept state.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the weight vector that produced the layout.
    #[inline]
    pub fn weights(&self) -> &WeightVector {
        &self.weights
    }

    /// Returns the name of the thought that produced the layout.
    #[inline]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Returns the layout itself.
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }
}

/// Selects the top `top_k` distinct layouts from the accumulated scored
/// states. States without a layout are skipped.
pub fn select_top_k(scored: &[(SearchState, f64)], top_k: usize) -> Vec<RankedLayout> {
    let mut order: Vec<usize> = (0..scored.len()).collect();
    order.sort_by(|a, b| scored[*b].1.total_cmp(&scored[*a].1));

    let mut seen = HashSet::new();
    let mut ranked = Vec::new();
    for index in order {
        if ranked.len() >= top_k {
            break;
        }
        let (state, value) = &scored[index];
        let Some(layout) = state.layout() else {
            continue;
        };
        if !seen.insert(layout.dedup_key()) {
            continue;
        }
        ranked.push(RankedLayout {
            value: *value,
            weights: state.weights().clone(),
            notes: state.notes().to_string(),
            layout: layout.clone(),
        });
    }
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn layout(pairs: &[(&str, &str)], score: f64) -> Layout {
        let assignments = pairs
            .iter()
            .map(|(g, t)| (g.to_string(), t.to_string()))
            .collect();
        Layout::optimized(assignments, score, BTreeMap::new())
    }

    fn state(layout: Option<Layout>, notes: &str) -> SearchState {
        SearchState::new(WeightVector::default(), layout, notes)
    }

    #[test]
    fn test_ranking_is_by_value_descending() {
        let scored = vec![
            (state(Some(layout(&[("g1", "t1")], 1.0)), "a"), 1.0),
            (state(Some(layout(&[("g1", "t2")], 3.0)), "b"), 3.0),
            (state(Some(layout(&[("g2", "t1")], 2.0)), "c"), 2.0),
        ];

        let ranked = select_top_k(&scored, 3);
        let notes: Vec<&str> = ranked.iter().map(RankedLayout::notes).collect();
        assert_eq!(notes, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_duplicate_assignments_keep_the_higher_value() {
        // Same mapping under different weights: one entry survives, the
        // higher-valued one.
        let scored = vec![
            (state(Some(layout(&[("g1", "t1")], 1.0)), "low"), 1.0),
            (state(Some(layout(&[("g1", "t1")], 2.0)), "high"), 2.0),
        ];

        let ranked = select_top_k(&scored, 2);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].notes(), "high");
        assert_eq!(ranked[0].value(), 2.0);
    }

    #[test]
    fn test_top_k_truncates() {
        let scored: Vec<(SearchState, f64)> = (0..5)
            .map(|i| {
                let score = i as f64;
                let table = format!("t{i}");
                let entry = state(Some(layout(&[("g1", table.as_str())], score)), "spread");
                (entry, score)
            })
            .collect();

        let ranked = select_top_k(&scored, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].value(), 4.0);
        assert_eq!(ranked[1].value(), 3.0);
    }

    #[test]
    fn test_states_without_layouts_are_skipped() {
        let scored = vec![
            (state(None, "root"), 5.0),
            (state(Some(layout(&[("g1", "t1")], 1.0)), "child"), 1.0),
        ];

        let ranked = select_top_k(&scored, 2);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].notes(), "child");
    }

    #[test]
    fn test_fallback_and_optimized_layouts_are_distinct() {
        // Same mapping but different id tags: both survive.
        let assignments: BTreeMap<String, String> =
            [("g1".to_string(), "t1".to_string())].into_iter().collect();
        let optimized = Layout::optimized(assignments.clone(), 1.0, BTreeMap::new());
        let fallback = Layout::fallback(assignments);

        let scored = vec![
            (state(Some(optimized), "opt"), 1.0),
            (state(Some(fallback), "dummy"), 0.0),
        ];
        let ranked = select_top_k(&scored, 2);
        assert_eq!(ranked.len(), 2);
    }
}
