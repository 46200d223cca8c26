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

//! # Bounded Breadth-First Expansion
//!
//! The search loop: for exactly `depth` levels, every frontier state is
//! expanded through the first `branching` of its first `n_generate`
//! catalog thoughts, each child triggers one optimizer run, the first
//! `n_evaluate` children per parent are scored (the rest are silently
//! dropped by the evaluation budget), and per parent the top `branching`
//! children by value carry over to the next frontier. Every evaluated
//! (state, value) pair is accumulated and returned; the last frontier is
//! discarded without further expansion, but its states were already
//! scored.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::atomic::AtomicBool;
use tracing::{debug, warn};
use trestle_model::{guest::Guest, instance::SeatingInstance, venue::VenueConfig};
use trestle_opt::{
    fallback_layout, optimize_with_options, optimizer::validate_instance, OptimizeError,
    OptimizeOptions,
};

use crate::{state::SearchState, thought::Thought};

/// The search-tree bounds. Defaults match the surrounding service layer:
/// depth 2, branching 4, four thoughts generated and evaluated.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SearchParams {
    /// Number of expansion levels.
    pub depth: usize,
    /// Children kept per parent, and the cap on thoughts actually applied.
    pub branching: usize,
    /// Candidate thoughts generated per state (prefix of the catalog).
    pub n_generate: usize,
    /// Evaluation budget: children scored per parent, in generation order.
    pub n_evaluate: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            depth: 2,
            branching: 4,
            n_generate: 4,
            n_evaluate: 4,
        }
    }
}

/// Per-run limits forwarded to every optimizer call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions<'a> {
    /// Wall-clock budget per optimizer call.
    pub solve_time_limit: Option<std::time::Duration>,
    /// Cooperative cancellation flag shared by all optimizer calls.
    pub cancel: Option<&'a AtomicBool>,
}

/// Runs the weight-space search over the given instance and returns every
/// scored state, in evaluation order.
///
/// Fails only on a malformed instance; a search over a well-formed
/// instance is total (optimizer failures degrade to fallback layouts).
pub fn search(
    instance: &SeatingInstance,
    params: &SearchParams,
) -> Result<Vec<(SearchState, f64)>, OptimizeError> {
    search_with_options(instance, params, &SearchOptions::default())
}

/// Runs the weight-space search with per-call solve limits.
pub fn search_with_options(
    instance: &SeatingInstance,
    params: &SearchParams,
    options: &SearchOptions<'_>,
) -> Result<Vec<(SearchState, f64)>, OptimizeError> {
    let venue = instance.to_venue();
    validate_instance(&instance.guests, venue.tables())?;

    let thoughts: Vec<Thought> = Thought::CATALOG
        .iter()
        .take(params.n_generate)
        .take(params.branching)
        .copied()
        .collect();

    let mut frontier = vec![SearchState::root()];
    let mut scored: Vec<(SearchState, f64)> = Vec::new();

    for level in 0..params.depth {
        let jobs: Vec<(usize, Thought)> = frontier
            .iter()
            .enumerate()
            .flat_map(|(parent, _)| thoughts.iter().map(move |thought| (parent, *thought)))
            .collect();

        let children = expand_jobs(&jobs, &frontier, &instance.guests, &venue, options);

        let mut per_parent: Vec<Vec<SearchState>> =
            (0..frontier.len()).map(|_| Vec::new()).collect();
        for (parent, child) in children {
            per_parent[parent].push(child);
        }

        let mut new_frontier = Vec::new();
        for children in per_parent {
            // Evaluation budget: only the first `n_evaluate` children are
            // scored; anything beyond is dropped.
            let evaluated: Vec<(SearchState, f64)> = children
                .into_iter()
                .take(params.n_evaluate)
                .map(|child| {
                    let value = child.value();
                    (child, value)
                })
                .collect();
            scored.extend(evaluated.iter().cloned());

            let mut ranked = evaluated;
            ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
            new_frontier.extend(
                ranked
                    .into_iter()
                    .take(params.branching)
                    .map(|(state, _)| state),
            );
        }

        debug!(
            level,
            frontier = new_frontier.len(),
            scored = scored.len(),
            "expanded search level"
        );
        frontier = new_frontier;
    }

    Ok(scored)
}

/// Expands one level of (parent, thought) jobs into child states,
/// preserving job order. With the `parallel` feature the optimizer calls
/// run concurrently; each child owns its weights and layout, so the jobs
/// are independent.
#[cfg(feature = "parallel")]
fn expand_jobs(
    jobs: &[(usize, Thought)],
    frontier: &[SearchState],
    guests: &[Guest],
    venue: &VenueConfig,
    options: &SearchOptions<'_>,
) -> Vec<(usize, SearchState)> {
    jobs.par_iter()
        .map(|(parent, thought)| {
            (
                *parent,
                expand_child(&frontier[*parent], *thought, guests, venue, options),
            )
        })
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn expand_jobs(
    jobs: &[(usize, Thought)],
    frontier: &[SearchState],
    guests: &[Guest],
    venue: &VenueConfig,
    options: &SearchOptions<'_>,
) -> Vec<(usize, SearchState)> {
    jobs.iter()
        .map(|(parent, thought)| {
            (
                *parent,
                expand_child(&frontier[*parent], *thought, guests, venue, options),
            )
        })
        .collect()
}

/// Applies one thought to a parent state and re-optimizes.
fn expand_child(
    parent: &SearchState,
    thought: Thought,
    guests: &[Guest],
    venue: &VenueConfig,
    options: &SearchOptions<'_>,
) -> SearchState {
    let weights = thought.apply(parent.weights());
    let optimize_options = OptimizeOptions {
        time_limit: options.solve_time_limit,
        cancel: options.cancel,
    };

    let (layout, _summary) = match optimize_with_options(guests, venue, &weights, &optimize_options)
    {
        Ok(result) => result,
        Err(error) => {
            // The instance was validated up front, so this is unreachable
            // in practice; degrade rather than poison the whole search.
            warn!(%error, thought = thought.as_str(), "optimizer rejected a search child");
            fallback_layout(guests, venue)
        }
    };

    SearchState::new(weights, Some(layout), thought.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
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

    #[test]
    fn test_single_level_scores_one_child_per_thought() {
        let params = SearchParams {
            depth: 1,
            branching: 2,
            n_generate: 4,
            n_evaluate: 4,
        };
        let scored = search(&demo_instance(), &params).expect("well-formed instance");

        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].0.notes(), "emphasize_family_cohesion");
        assert_eq!(scored[1].0.notes(), "emphasize_social_group_cohesion");
        for (state, value) in &scored {
            let layout = state.layout().expect("children carry layouts");
            assert_eq!(layout.assignments().len(), 4);
            assert_eq!(*value, layout.score());
        }
    }

    #[test]
    fn test_different_emphases_surface_different_seatings() {
        let params = SearchParams {
            depth: 1,
            branching: 2,
            n_generate: 4,
            n_evaluate: 4,
        };
        let scored = search(&demo_instance(), &params).expect("well-formed instance");

        let first = scored[0].0.layout().expect("layout").assignments().clone();
        let second = scored[1].0.layout().expect("layout").assignments().clone();
        assert_ne!(first, second);
    }

    #[test]
    fn test_evaluation_budget_drops_late_children() {
        let params = SearchParams {
            depth: 1,
            branching: 3,
            n_generate: 4,
            n_evaluate: 1,
        };
        let scored = search(&demo_instance(), &params).expect("well-formed instance");

        // Three children are generated but only the first is evaluated.
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].0.notes(), "emphasize_family_cohesion");
    }

    #[test]
    fn test_two_levels_accumulate_all_scored_states() {
        let params = SearchParams::default();
        let scored = search(&demo_instance(), &params).expect("well-formed instance");

        // Level one: 1 parent * 4 thoughts; level two: 4 parents * 4.
        assert_eq!(scored.len(), 20);
    }

    #[test]
    fn test_zero_depth_returns_no_scored_states() {
        let params = SearchParams {
            depth: 0,
            ..SearchParams::default()
        };
        let scored = search(&demo_instance(), &params).expect("well-formed instance");
        assert!(scored.is_empty());
    }

    #[test]
    fn test_malformed_instance_is_rejected_up_front() {
        let mut instance = demo_instance();
        instance.guests.push(Guest::new("g1", "Duplicate"));

        let err = search(&instance, &SearchParams::default()).unwrap_err();
        assert_eq!(err, OptimizeError::DuplicateGuestId("g1".to_string()));
    }

    #[test]
    fn test_empty_instance_searches_on_fallback_layouts() {
        let instance = SeatingInstance::new(Vec::new(), Vec::new());
        let params = SearchParams {
            depth: 1,
            branching: 2,
            n_generate: 2,
            n_evaluate: 2,
        };
        let scored = search(&instance, &params).expect("empty instance is not an error");

        assert_eq!(scored.len(), 2);
        for (state, value) in scored {
            assert!(state.layout().is_some_and(|layout| layout.is_fallback()));
            assert_eq!(value, 0.0);
        }
    }
}
