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

//! # Layout Generation
//!
//! The optimizer entry points. `optimize` is total over well-formed
//! instances: empty input takes the documented fallback fast-path, solver
//! failure of any kind (infeasibility, time limit, interrupt) degrades to
//! the round-robin fallback layout, and only malformed input (duplicate
//! ids, invalid weights) surfaces as an error.

use crate::{
    assignment::{build_assignment_model, AssignmentModel},
    error::OptimizeError,
    greedy::greedy_seed,
};
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use tracing::{debug, warn};
use trestle_bnb::bnb::BnbSolver;
use trestle_mip::{
    monitor::{
        composite::CompositeMonitor, interrupt::InterruptMonitor, time_limit::TimeLimitMonitor,
    },
    result::MipSolution,
    solver::MipSolver,
};
use trestle_model::{
    guest::Guest,
    index::{GuestIndex, TableIndex},
    layout::{ConstraintSummary, Layout},
    venue::{Table, VenueConfig},
    weights::{ObjectiveTerm, WeightVector},
};

/// The placeholder table id used by the fallback layout when the venue has
/// no tables at all.
pub const PLACEHOLDER_TABLE_ID: &str = "default";

/// Per-call solve limits. Both default to off.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimizeOptions<'a> {
    /// Wall-clock budget for the underlying solve. A run that exceeds it
    /// degrades to the fallback layout.
    pub time_limit: Option<std::time::Duration>,
    /// Cooperative cancellation flag. A cancelled run degrades to the
    /// fallback layout.
    pub cancel: Option<&'a AtomicBool>,
}

/// Generates a layout for the given instance and weights with default
/// options (no time limit, no cancellation).
pub fn optimize(
    guests: &[Guest],
    venue: &VenueConfig,
    weights: &WeightVector,
) -> Result<(Layout, ConstraintSummary), OptimizeError> {
    optimize_with_options(guests, venue, weights, &OptimizeOptions::default())
}

/// Generates a layout for the given instance and weights.
///
/// Never fails on infeasibility: any solve that does not end in a usable
/// solution returns the fallback layout. Errors are reserved for malformed
/// input.
pub fn optimize_with_options(
    guests: &[Guest],
    venue: &VenueConfig,
    weights: &WeightVector,
    options: &OptimizeOptions<'_>,
) -> Result<(Layout, ConstraintSummary), OptimizeError> {
    // Empty input is the documented fast-path, not an error.
    if guests.is_empty() || venue.num_tables() == 0 {
        return Ok(fallback_layout(guests, venue));
    }

    validate_instance(guests, venue.tables())?;
    let weights = weights.normalized();
    validate_weights(&weights)?;

    let assignment = build_assignment_model(guests, venue, &weights)?;
    debug!(
        num_guests = guests.len(),
        num_tables = venue.num_tables(),
        variables = assignment.model().num_variables(),
        constraints = assignment.model().num_constraints(),
        "assignment model built"
    );

    let seed = greedy_seed(guests, venue, &weights, &assignment);

    let mut monitor = CompositeMonitor::<f64>::new();
    if let Some(limit) = options.time_limit {
        // Assignment models are often small enough that the default
        // 16k-step clock filter would never fire; check every node.
        monitor.add_monitor(TimeLimitMonitor::with_clock_check_mask(limit, 0));
    }
    if let Some(flag) = options.cancel {
        monitor.add_monitor(InterruptMonitor::new(flag));
    }

    let outcome = BnbSolver::new().solve(assignment.model(), seed.as_deref(), monitor);
    let aborted = outcome.is_aborted();
    let reason = outcome.reason().clone();

    match outcome.into_solution() {
        // An aborted solve never surfaces its partial incumbent; the
        // cancellation contract promises the fallback instead.
        Some(solution) if !aborted => Ok(extract_layout(guests, venue, &assignment, &solution, &weights)),
        _ => {
            warn!(%reason, "optimization produced no usable solution; returning fallback layout");
            Ok(fallback_layout(guests, venue))
        }
    }
}

/// Round-robin fallback: guests are dealt to tables in input order,
/// cycling the table-id list. Deterministic for a fixed guest and table
/// order.
pub fn fallback_layout(guests: &[Guest], venue: &VenueConfig) -> (Layout, ConstraintSummary) {
    let table_ids: Vec<&str> = if venue.num_tables() == 0 {
        vec![PLACEHOLDER_TABLE_ID]
    } else {
        venue.tables().iter().map(Table::id).collect()
    };

    let mut assignments = BTreeMap::new();
    for (index, guest) in guests.iter().enumerate() {
        assignments.insert(
            guest.id().to_string(),
            table_ids[index % table_ids.len()].to_string(),
        );
    }

    (Layout::fallback(assignments), ConstraintSummary::empty())
}

/// Rejects instances with duplicate guest or table ids.
pub fn validate_instance(guests: &[Guest], tables: &[Table]) -> Result<(), OptimizeError> {
    let mut guest_ids = FxHashSet::default();
    for guest in guests {
        if !guest_ids.insert(guest.id()) {
            return Err(OptimizeError::DuplicateGuestId(guest.id().to_string()));
        }
    }
    let mut table_ids = FxHashSet::default();
    for table in tables {
        if !table_ids.insert(table.id()) {
            return Err(OptimizeError::DuplicateTableId(table.id().to_string()));
        }
    }
    Ok(())
}

fn validate_weights(weights: &WeightVector) -> Result<(), OptimizeError> {
    for term in ObjectiveTerm::ALL {
        let value = weights.weight(term);
        if !value.is_finite() || value < 0.0 {
            return Err(OptimizeError::InvalidWeight {
                term: term.as_str().to_string(),
                value,
            });
        }
    }
    Ok(())
}

fn extract_layout(
    guests: &[Guest],
    venue: &VenueConfig,
    assignment: &AssignmentModel,
    solution: &MipSolution<f64>,
    weights: &WeightVector,
) -> (Layout, ConstraintSummary) {
    let mut assignments = BTreeMap::new();
    for (guest_index, guest) in guests.iter().enumerate() {
        let seat = (0..venue.num_tables())
            .find(|table_index| {
                solution.value(assignment.x(
                    GuestIndex::new(guest_index),
                    TableIndex::new(*table_index),
                ))
            });
        if let Some(table_index) = seat {
            assignments.insert(
                guest.id().to_string(),
                venue.table(TableIndex::new(table_index)).id().to_string(),
            );
        }
    }
    debug_assert_eq!(
        assignments.len(),
        guests.len(),
        "a 0/1 solution must seat every guest exactly once"
    );

    let mut breakdown = BTreeMap::new();
    for term in ObjectiveTerm::ALL {
        breakdown.insert(term.as_str().to_string(), weights.weight(term));
    }

    (
        Layout::optimized(assignments, solution.objective_value(), breakdown),
        ConstraintSummary::empty(),
    )
}
