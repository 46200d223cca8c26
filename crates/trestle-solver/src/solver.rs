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

use trestle_model::{
    guest::Guest,
    instance::SeatingInstance,
    layout::{ConstraintSummary, Layout},
    venue::VenueConfig,
    weights::WeightVector,
};
use trestle_opt::OptimizeError;
use trestle_search::{RankedLayout, SearchParams, SearchState};

/// Default number of distinct layouts returned to callers.
pub const DEFAULT_TOP_K: usize = 3;

/// Scores a single weight configuration. Total over well-formed input:
/// empty instances and failed solves return the fallback layout.
pub fn optimize(
    guests: &[Guest],
    venue: &VenueConfig,
    weights: &WeightVector,
) -> Result<(Layout, ConstraintSummary), OptimizeError> {
    trestle_opt::optimize(guests, venue, weights)
}

/// Explores the weight space around the base configuration and returns
/// every scored state. Ranking into a top-k list is a separate step, see
/// [`generate_layouts`].
pub fn search(
    instance: &SeatingInstance,
    params: &SearchParams,
) -> Result<Vec<(SearchState, f64)>, OptimizeError> {
    trestle_search::search(instance, params)
}

/// Runs the full pipeline: weight-space search, ranking by value, and
/// deduplication into at most `top_k` distinct layouts.
pub fn generate_layouts(
    instance: &SeatingInstance,
    params: &SearchParams,
    top_k: usize,
) -> Result<Vec<RankedLayout>, OptimizeError> {
    let scored = trestle_search::search(instance, params)?;
    Ok(trestle_search::select_top_k(&scored, top_k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use trestle_model::venue::Table;

    fn demo_instance() -> SeatingInstance {
        SeatingInstance::new(
            vec![
                Guest::new("g1", "Alice").with_group_id("family_a"),
                Guest::new("g2", "Bob").with_group_id("family_a"),
                Guest::new("g3", "Charlie").with_group_id("friends"),
                Guest::new("g4", "Dana").with_group_id("friends"),
            ],
            vec![
                Table::new("t1", "Table 1", 4),
                Table::new("t2", "Table 2", 4),
            ],
        )
    }

    fn occupancy(layout: &Layout) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for table_id in layout.assignments().values() {
            *counts.entry(table_id.as_str()).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_end_to_end_two_distinct_layouts() {
        let instance = demo_instance();
        let params = SearchParams {
            depth: 1,
            branching: 2,
            n_generate: 4,
            n_evaluate: 4,
        };

        let ranked = generate_layouts(&instance, &params, 2).expect("well-formed instance");
        assert_eq!(ranked.len(), 2);

        let mut seen_assignments = Vec::new();
        for entry in &ranked {
            let layout = entry.layout();
            assert_eq!(layout.assignments().len(), 4, "all guests assigned");
            for (_, count) in occupancy(layout) {
                assert!(count <= 4, "no capacity violation");
            }

            let keys: Vec<&str> = layout
                .objective_breakdown()
                .keys()
                .map(String::as_str)
                .collect();
            assert_eq!(
                keys,
                vec![
                    "family_cohesion",
                    "relationship_priority",
                    "side_mixing",
                    "social_group_cohesion"
                ]
            );

            assert!(!seen_assignments.contains(layout.assignments()));
            seen_assignments.push(layout.assignments().clone());
        }
    }

    #[test]
    fn test_end_to_end_no_tables_falls_back_to_placeholder() {
        let guests: Vec<Guest> = (1..=5)
            .map(|i| Guest::new(format!("g{i}"), format!("Guest {i}")))
            .collect();
        let venue = VenueConfig::new(Vec::new());

        let (layout, _summary) =
            optimize(&guests, &venue, &WeightVector::default()).expect("total call");

        assert_eq!(layout.id(), "dummy");
        assert_eq!(layout.score(), 0.0);
        assert_eq!(layout.assignments().len(), 5);
        assert!(layout.assignments().values().all(|table| table == "default"));
    }

    #[test]
    fn test_default_search_yields_at_most_top_k_layouts() {
        let instance = demo_instance();
        let ranked = generate_layouts(&instance, &SearchParams::default(), DEFAULT_TOP_K)
            .expect("well-formed instance");

        assert!(!ranked.is_empty());
        assert!(ranked.len() <= DEFAULT_TOP_K);

        // Ranked output is sorted by value and free of duplicates.
        for window in ranked.windows(2) {
            assert!(window[0].value() >= window[1].value());
            assert_ne!(
                window[0].layout().dedup_key(),
                window[1].layout().dedup_key()
            );
        }
    }

    #[test]
    fn test_search_accumulates_every_scored_state() {
        let instance = demo_instance();
        let scored = search(&instance, &SearchParams::default()).expect("well-formed instance");

        // depth 2, branching 4, one root: 4 + 16 evaluated states.
        assert_eq!(scored.len(), 20);
        assert!(scored.iter().all(|(state, _)| state.layout().is_some()));
    }
}
