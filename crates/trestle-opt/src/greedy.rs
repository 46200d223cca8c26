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

//! # Greedy Warm Start
//!
//! A deterministic constructive heuristic that seeds the exact search with
//! a feasible incumbent. Category groups are placed in descending order of
//! their governing objective weight (ties keep first-appearance order);
//! each group goes to the table with the most free seats that fits it
//! whole (ties pick the lowest table index), and is split across the
//! emptiest tables only when no table fits it.
//!
//! Because the engine replaces its incumbent only on strict improvement,
//! the weight ordering here decides which of several co-optimal seatings a
//! run reports. Different weight emphases thus surface genuinely
//! different layouts.

use crate::assignment::AssignmentModel;
use fixedbitset::FixedBitSet;
use rustc_hash::FxHashMap;
use trestle_model::{
    category,
    guest::Guest,
    venue::VenueConfig,
    weights::{ObjectiveTerm, WeightVector},
};

struct CategoryGroup {
    members: Vec<usize>,
    weight: f64,
}

fn governing_weight(label: &str, weights: &WeightVector) -> f64 {
    if category::is_family(label) {
        weights.weight(ObjectiveTerm::FamilyCohesion)
    } else if category::is_social_group(label) {
        weights.weight(ObjectiveTerm::SocialGroupCohesion)
    } else {
        0.0
    }
}

/// Picks the table with the most free seats among those with at least
/// `needed` free, ties broken by the lowest index.
fn emptiest_table(free: &[u32], needed: u32) -> Option<usize> {
    free.iter()
        .enumerate()
        .filter(|(_, available)| **available >= needed && **available > 0)
        .max_by(|(index_a, free_a), (index_b, free_b)| {
            free_a.cmp(free_b).then(index_b.cmp(index_a))
        })
        .map(|(index, _)| index)
}

/// Builds a feasible 0/1 assignment for the given model, or `None` when
/// the venue cannot seat everyone.
pub fn greedy_seed(
    guests: &[Guest],
    venue: &VenueConfig,
    weights: &WeightVector,
    assignment: &AssignmentModel,
) -> Option<Vec<bool>> {
    let num_tables = venue.num_tables();
    if num_tables == 0 {
        return None;
    }
    let total_capacity: u64 = venue.tables().iter().map(|t| t.capacity() as u64).sum();
    if total_capacity < guests.len() as u64 {
        return None;
    }

    // Group guests by normalized category label, first-appearance order.
    // Unlabeled guests form singleton groups.
    let mut groups: Vec<CategoryGroup> = Vec::new();
    let mut group_by_label: FxHashMap<String, usize> = FxHashMap::default();
    for (guest_index, guest) in guests.iter().enumerate() {
        match guest.group_id() {
            Some(label) => {
                let key = label.trim().to_lowercase();
                match group_by_label.get(&key) {
                    Some(group_index) => groups[*group_index].members.push(guest_index),
                    None => {
                        group_by_label.insert(key, groups.len());
                        groups.push(CategoryGroup {
                            members: vec![guest_index],
                            weight: governing_weight(label, weights),
                        });
                    }
                }
            }
            None => groups.push(CategoryGroup {
                members: vec![guest_index],
                weight: 0.0,
            }),
        }
    }

    // Strongest-weighted groups claim tables first; the sort is stable so
    // equal weights keep input order.
    let mut order: Vec<usize> = (0..groups.len()).collect();
    order.sort_by(|a, b| groups[*b].weight.total_cmp(&groups[*a].weight));

    let mut free: Vec<u32> = venue.tables().iter().map(|t| t.capacity()).collect();
    let mut seats: Vec<usize> = vec![0; guests.len()];
    let mut seated = FixedBitSet::with_capacity(guests.len());

    for group_index in order {
        let group = &groups[group_index];
        match emptiest_table(&free, group.members.len() as u32) {
            Some(table_index) => {
                for guest_index in &group.members {
                    seats[*guest_index] = table_index;
                    seated.insert(*guest_index);
                }
                free[table_index] -= group.members.len() as u32;
            }
            None => {
                // No table fits the whole group: spread it over the
                // emptiest tables.
                for guest_index in &group.members {
                    let table_index = emptiest_table(&free, 1)?;
                    seats[*guest_index] = table_index;
                    seated.insert(*guest_index);
                    free[table_index] -= 1;
                }
            }
        }
    }
    debug_assert_eq!(
        seated.count_ones(..),
        guests.len(),
        "greedy seed left guests unseated"
    );

    // Translate the seating into model variable values.
    let mut values = vec![false; assignment.model().num_variables()];
    for (guest_index, table_index) in seats.iter().enumerate() {
        let var = assignment.x(
            trestle_model::index::GuestIndex::new(guest_index),
            trestle_model::index::TableIndex::new(*table_index),
        );
        values[var.get()] = true;
    }
    for pair_var in assignment.pair_vars() {
        let table = pair_var.table.get();
        let both_here = seats[pair_var.pair.first.get()] == table
            && seats[pair_var.pair.second.get()] == table;
        values[pair_var.var.get()] = both_here;
    }

    Some(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::build_assignment_model;
    use trestle_model::venue::Table;

    fn venue(capacities: &[u32]) -> VenueConfig {
        VenueConfig::new(
            capacities
                .iter()
                .enumerate()
                .map(|(i, cap)| Table::new(format!("t{}", i + 1), format!("Table {}", i + 1), *cap))
                .collect(),
        )
    }

    fn guest(id: &str, group: &str) -> Guest {
        Guest::new(id, id).with_group_id(group)
    }

    fn demo_guests() -> Vec<Guest> {
        vec![
            guest("g1", "family_a"),
            guest("g2", "family_a"),
            guest("g3", "friends"),
            guest("g4", "friends"),
        ]
    }

    fn seats_of(guests: &[Guest], venue: &VenueConfig, weights: &WeightVector) -> Vec<usize> {
        let assignment = build_assignment_model(guests, venue, weights).expect("valid instance");
        let values = greedy_seed(guests, venue, weights, &assignment).expect("seatable");
        assert!(assignment.model().is_feasible(&values));

        (0..guests.len())
            .map(|g| {
                (0..venue.num_tables())
                    .find(|t| {
                        values[assignment
                            .x(
                                trestle_model::index::GuestIndex::new(g),
                                trestle_model::index::TableIndex::new(*t),
                            )
                            .get()]
                    })
                    .expect("every guest is seated")
            })
            .collect()
    }

    #[test]
    fn test_strongest_group_claims_the_first_table() {
        let guests = demo_guests();
        let venue = venue(&[4, 4]);

        let mut family_first = WeightVector::default();
        family_first.set(ObjectiveTerm::FamilyCohesion, 0.75);
        assert_eq!(seats_of(&guests, &venue, &family_first), vec![0, 0, 1, 1]);

        let mut social_first = WeightVector::default();
        social_first.set(ObjectiveTerm::SocialGroupCohesion, 0.75);
        assert_eq!(seats_of(&guests, &venue, &social_first), vec![1, 1, 0, 0]);
    }

    #[test]
    fn test_equal_weights_keep_input_order() {
        let guests = demo_guests();
        let venue = venue(&[4, 4]);
        assert_eq!(
            seats_of(&guests, &venue, &WeightVector::default()),
            vec![0, 0, 1, 1]
        );
    }

    #[test]
    fn test_oversized_group_is_split_over_emptiest_tables() {
        let guests = vec![
            guest("g1", "family_a"),
            guest("g2", "family_a"),
            guest("g3", "family_a"),
        ];
        let venue = venue(&[2, 2]);
        let seats = seats_of(&guests, &venue, &WeightVector::default());

        let at_first = seats.iter().filter(|t| **t == 0).count();
        let at_second = seats.iter().filter(|t| **t == 1).count();
        assert_eq!(at_first + at_second, 3);
        assert!(at_first <= 2 && at_second <= 2);
    }

    #[test]
    fn test_insufficient_capacity_yields_no_seed() {
        let guests = demo_guests();
        let venue = venue(&[2, 1]);
        let assignment =
            build_assignment_model(&guests, &venue, &WeightVector::default()).expect("valid");
        assert!(greedy_seed(&guests, &venue, &WeightVector::default(), &assignment).is_none());
    }

    #[test]
    fn test_pair_variables_match_the_seating() {
        let guests = demo_guests();
        let venue = venue(&[4, 4]);
        let weights = WeightVector::default();
        let assignment = build_assignment_model(&guests, &venue, &weights).expect("valid");
        let values = greedy_seed(&guests, &venue, &weights, &assignment).expect("seatable");

        // Both cohesion pairs sit together, so exactly one y per pair is set.
        let set_pairs = assignment
            .pair_vars()
            .iter()
            .filter(|pv| values[pv.var.get()])
            .count();
        assert_eq!(set_pairs, 2);
    }
}
