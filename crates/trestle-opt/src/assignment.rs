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

//! # Assignment Model Construction
//!
//! Builds the 0/1 integer model for one optimization run:
//!
//! * `x[g,t]` — guest `g` sits at table `t`. Objective coefficient:
//!   `w_priority · closeness_rank(g) · table_quality(t)`.
//! * one exactly-one row per guest and one capacity row per table,
//! * for every relevant relation pair and table, an AND-linked `y[g1,g2,t]`
//!   (`y ≤ x₁`, `y ≤ x₂`, `y ≥ x₁ + x₂ − 1`) whose objective coefficient is
//!   the weight of the pair's relation kind.
//!
//! Pair variables for a zero-weight relation kind are omitted entirely;
//! since their coefficient would be zero this never changes the optimum.

use crate::{
    error::OptimizeError,
    pairs::{relation_pairs, RelationKind, RelationPair},
};
use smallvec::smallvec;
use trestle_mip::model::{
    BinaryModel, BinaryModelBuilder, LinTerm, LinearConstraint, VarId,
};
use trestle_model::{
    category,
    guest::Guest,
    index::{GuestIndex, TableIndex},
    venue::VenueConfig,
    weights::{ObjectiveTerm, WeightVector},
};

/// The quality of a table by its position in the venue's table list.
/// Earlier-listed tables are higher quality; this positional bias steers
/// VIP-style seating.
#[inline]
pub fn table_quality(table_index: usize) -> f64 {
    1.0 / (1.0 + table_index as f64)
}

/// A pair variable together with the relation and table it stands for.
#[derive(Clone, Copy, Debug)]
pub struct PairVar {
    pub pair: RelationPair,
    pub table: TableIndex,
    pub var: VarId,
}

/// The assembled model for one optimization run, plus the variable maps
/// needed to seed and read back solutions.
pub struct AssignmentModel {
    model: BinaryModel<f64>,
    num_tables: usize,
    x: Vec<VarId>,
    pair_vars: Vec<PairVar>,
}

impl AssignmentModel {
    /// Returns the underlying binary model.
    #[inline]
    pub fn model(&self) -> &BinaryModel<f64> {
        &self.model
    }

    /// Returns the number of tables the model was built over.
    #[inline]
    pub fn num_tables(&self) -> usize {
        self.num_tables
    }

    /// Returns the number of guests the model was built over.
    #[inline]
    pub fn num_guests(&self) -> usize {
        if self.num_tables == 0 {
            0
        } else {
            self.x.len() / self.num_tables
        }
    }

    /// Returns the seating variable of a guest/table combination.
    #[inline]
    pub fn x(&self, guest: GuestIndex, table: TableIndex) -> VarId {
        self.x[guest.get() * self.num_tables + table.get()]
    }

    /// Returns all pair variables.
    #[inline]
    pub fn pair_vars(&self) -> &[PairVar] {
        &self.pair_vars
    }
}

fn relation_weight(weights: &WeightVector, kind: RelationKind) -> f64 {
    match kind {
        RelationKind::Family => weights.weight(ObjectiveTerm::FamilyCohesion),
        RelationKind::SocialGroup => weights.weight(ObjectiveTerm::SocialGroupCohesion),
        RelationKind::CrossSide => weights.weight(ObjectiveTerm::SideMixing),
    }
}

/// Builds the assignment model for the given instance and weight vector.
/// The weight vector is expected to be normalized (all four terms present).
pub fn build_assignment_model(
    guests: &[Guest],
    venue: &VenueConfig,
    weights: &WeightVector,
) -> Result<AssignmentModel, OptimizeError> {
    let num_guests = guests.len();
    let num_tables = venue.num_tables();
    let priority_weight = weights.weight(ObjectiveTerm::RelationshipPriority);

    let pairs = relation_pairs(guests);
    let scored_pairs: Vec<(RelationPair, f64)> = pairs
        .into_iter()
        .map(|pair| (pair, relation_weight(weights, pair.kind)))
        .filter(|(_, weight)| *weight != 0.0)
        .collect();

    let num_variables = num_guests * num_tables + scored_pairs.len() * num_tables;
    let num_rows = num_guests + num_tables + 3 * scored_pairs.len() * num_tables;
    let mut builder = BinaryModelBuilder::<f64>::with_capacity(num_variables, num_rows);

    // Seating variables, guest-major.
    let mut x = Vec::with_capacity(num_guests * num_tables);
    for guest in guests {
        let rank = guest
            .group_id()
            .map(category::closeness_rank)
            .unwrap_or(0);
        for (table_index, table) in venue.tables().iter().enumerate() {
            let coefficient = priority_weight * rank as f64 * table_quality(table_index);
            let var = builder.add_variable(
                format!("x[{},{}]", guest.id(), table.id()),
                coefficient,
            )?;
            x.push(var);
        }
    }

    let x_var = |guest: usize, table: usize| x[guest * num_tables + table];

    // Every guest sits at exactly one table.
    for (guest_index, guest) in guests.iter().enumerate() {
        let terms = (0..num_tables)
            .map(|table_index| LinTerm::new(x_var(guest_index, table_index), 1.0))
            .collect();
        builder.add_constraint(LinearConstraint::equal(
            format!("guest_{}", guest.id()),
            terms,
            1.0,
        ))?;
    }

    // No table beyond its capacity.
    for (table_index, table) in venue.tables().iter().enumerate() {
        let terms = (0..num_guests)
            .map(|guest_index| LinTerm::new(x_var(guest_index, table_index), 1.0))
            .collect();
        builder.add_constraint(LinearConstraint::at_most(
            format!("cap_{}", table.id()),
            terms,
            table.capacity() as f64,
        ))?;
    }

    // Pair variables with the standard AND-linearization.
    let mut pair_vars = Vec::with_capacity(scored_pairs.len() * num_tables);
    for (pair, weight) in &scored_pairs {
        let first_id = guests[pair.first.get()].id();
        let second_id = guests[pair.second.get()].id();
        for (table_index, table) in venue.tables().iter().enumerate() {
            let y = builder.add_variable(
                format!("y[{},{},{}]", first_id, second_id, table.id()),
                *weight,
            )?;
            let x1 = x_var(pair.first.get(), table_index);
            let x2 = x_var(pair.second.get(), table_index);

            builder.add_constraint(LinearConstraint::at_most(
                format!("y_le_first[{},{},{}]", first_id, second_id, table.id()),
                smallvec![LinTerm::new(y, 1.0), LinTerm::new(x1, -1.0)],
                0.0,
            ))?;
            builder.add_constraint(LinearConstraint::at_most(
                format!("y_le_second[{},{},{}]", first_id, second_id, table.id()),
                smallvec![LinTerm::new(y, 1.0), LinTerm::new(x2, -1.0)],
                0.0,
            ))?;
            builder.add_constraint(LinearConstraint::at_least(
                format!("y_ge_both[{},{},{}]", first_id, second_id, table.id()),
                smallvec![
                    LinTerm::new(y, 1.0),
                    LinTerm::new(x1, -1.0),
                    LinTerm::new(x2, -1.0)
                ],
                -1.0,
            ))?;

            pair_vars.push(PairVar {
                pair: *pair,
                table: TableIndex::new(table_index),
                var: y,
            });
        }
    }

    Ok(AssignmentModel {
        model: builder.build(),
        num_tables,
        x,
        pair_vars,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use trestle_model::venue::Table;

    fn family_guest(id: &str) -> Guest {
        Guest::new(id, id).with_group_id("Groom's Family")
    }

    fn venue(capacities: &[u32]) -> VenueConfig {
        VenueConfig::new(
            capacities
                .iter()
                .enumerate()
                .map(|(i, cap)| Table::new(format!("t{}", i + 1), format!("Table {}", i + 1), *cap))
                .collect(),
        )
    }

    #[test]
    fn test_table_quality_decreases_with_position() {
        assert_eq!(table_quality(0), 1.0);
        assert_eq!(table_quality(1), 0.5);
        assert!((table_quality(2) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_model_dimensions_for_small_instance() {
        let guests = vec![family_guest("g1"), family_guest("g2")];
        let model = build_assignment_model(&guests, &venue(&[4, 4]), &WeightVector::default())
            .expect("valid instance");

        // 2 guests * 2 tables seating vars + 1 family pair * 2 tables.
        assert_eq!(model.model().num_variables(), 6);
        // 2 exactly-one rows + 2 capacity rows + 3 linearization rows per
        // pair variable.
        assert_eq!(model.model().num_constraints(), 10);
        assert_eq!(model.num_guests(), 2);
        assert_eq!(model.num_tables(), 2);
        assert_eq!(model.pair_vars().len(), 2);
    }

    #[test]
    fn test_zero_weight_relations_are_omitted() {
        let guests = vec![family_guest("g1"), family_guest("g2")];
        let mut weights = WeightVector::default();
        weights.set(ObjectiveTerm::FamilyCohesion, 0.0);

        let model =
            build_assignment_model(&guests, &venue(&[4, 4]), &weights).expect("valid instance");
        assert_eq!(model.pair_vars().len(), 0);
        assert_eq!(model.model().num_variables(), 4);
    }

    #[test]
    fn test_priority_coefficients_follow_rank_and_quality() {
        let guests = vec![family_guest("g1")];
        let mut weights = WeightVector::default();
        weights.set(ObjectiveTerm::RelationshipPriority, 0.4);

        let model =
            build_assignment_model(&guests, &venue(&[2, 2]), &weights).expect("valid instance");

        // closeness rank of "Groom's Family" is 5.
        let first = model.x(GuestIndex::new(0), TableIndex::new(0));
        let second = model.x(GuestIndex::new(0), TableIndex::new(1));
        assert!((model.model().objective_coefficient(first) - 0.4 * 5.0).abs() < 1e-12);
        assert!((model.model().objective_coefficient(second) - 0.4 * 5.0 * 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_unlabeled_guests_have_zero_priority_coefficient() {
        let guests = vec![Guest::new("g1", "Solo")];
        let model = build_assignment_model(&guests, &venue(&[2]), &WeightVector::default())
            .expect("valid instance");
        let var = model.x(GuestIndex::new(0), TableIndex::new(0));
        assert_eq!(model.model().objective_coefficient(var), 0.0);
    }
}
