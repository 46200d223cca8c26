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

//! # Relation Pair Generation
//!
//! Scans all unordered guest pairs once per optimization run and classifies
//! the ones the objective rewards: two guests of the same family category,
//! two guests of the same social category, or two guests from opposing
//! sides (excluding side-neutral categories).

use trestle_model::{category, guest::Guest, index::GuestIndex};

/// The relation that makes a guest pair relevant to the objective.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RelationKind {
    /// Both guests share the same family category.
    Family,
    /// Both guests share the same social category.
    SocialGroup,
    /// The guests belong to opposing sides.
    CrossSide,
}

/// An unordered pair of guests in a relevant relation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RelationPair {
    pub first: GuestIndex,
    pub second: GuestIndex,
    pub kind: RelationKind,
}

fn same_category(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

fn classify(a: &str, b: &str) -> Option<RelationKind> {
    if same_category(a, b) {
        if category::is_family(a) {
            return Some(RelationKind::Family);
        }
        if category::is_social_group(a) {
            return Some(RelationKind::SocialGroup);
        }
        return None;
    }

    let cross = (category::is_groom_side(a) && category::is_bride_side(b))
        || (category::is_bride_side(a) && category::is_groom_side(b));
    if cross {
        return Some(RelationKind::CrossSide);
    }
    None
}

/// Generates all relevant unordered guest pairs in input order.
/// Guests without a group label never pair.
pub fn relation_pairs(guests: &[Guest]) -> Vec<RelationPair> {
    let mut pairs = Vec::new();
    for (i, first) in guests.iter().enumerate() {
        let Some(label_a) = first.group_id() else {
            continue;
        };
        for (j, second) in guests.iter().enumerate().skip(i + 1) {
            let Some(label_b) = second.group_id() else {
                continue;
            };
            if let Some(kind) = classify(label_a, label_b) {
                pairs.push(RelationPair {
                    first: GuestIndex::new(i),
                    second: GuestIndex::new(j),
                    kind,
                });
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guest(id: &str, group: Option<&str>) -> Guest {
        let guest = Guest::new(id, id);
        match group {
            Some(label) => guest.with_group_id(label),
            None => guest,
        }
    }

    fn kinds(guests: &[Guest]) -> Vec<(usize, usize, RelationKind)> {
        relation_pairs(guests)
            .into_iter()
            .map(|p| (p.first.get(), p.second.get(), p.kind))
            .collect()
    }

    #[test]
    fn test_same_family_label_pairs() {
        let guests = [
            guest("g1", Some("Groom's Family")),
            guest("g2", Some("Groom's Family")),
            guest("g3", Some("Groom's Family")),
        ];
        assert_eq!(
            kinds(&guests),
            vec![
                (0, 1, RelationKind::Family),
                (0, 2, RelationKind::Family),
                (1, 2, RelationKind::Family),
            ]
        );
    }

    #[test]
    fn test_different_family_labels_do_not_pair_as_family() {
        // Same classification but different categories: these only relate
        // across sides.
        let guests = [
            guest("g1", Some("Groom's Family")),
            guest("g2", Some("Bride's Family")),
        ];
        assert_eq!(kinds(&guests), vec![(0, 1, RelationKind::CrossSide)]);
    }

    #[test]
    fn test_same_social_label_pairs() {
        let guests = [
            guest("g1", Some("friends")),
            guest("g2", Some("friends")),
        ];
        assert_eq!(kinds(&guests), vec![(0, 1, RelationKind::SocialGroup)]);
    }

    #[test]
    fn test_neutral_categories_are_excluded_from_cross_side() {
        let guests = [
            guest("g1", Some("Mutual Friends")),
            guest("g2", Some("Groom's Family")),
            guest("g3", Some("Family Friends")),
        ];
        // No opposing sides anywhere: mutual/family friends are neutral.
        assert!(kinds(&guests).is_empty());
    }

    #[test]
    fn test_cross_side_pairs_between_opposing_sides() {
        let guests = [
            guest("g1", Some("Groom's Friends")),
            guest("g2", Some("Bride's Work Colleagues")),
        ];
        assert_eq!(kinds(&guests), vec![(0, 1, RelationKind::CrossSide)]);
    }

    #[test]
    fn test_unlabeled_guests_never_pair() {
        let guests = [
            guest("g1", None),
            guest("g2", Some("Groom's Family")),
            guest("g3", None),
        ];
        assert!(kinds(&guests).is_empty());
    }

    #[test]
    fn test_label_comparison_ignores_case_and_whitespace() {
        let guests = [
            guest("g1", Some("  groom's family")),
            guest("g2", Some("GROOM'S FAMILY ")),
        ];
        assert_eq!(kinds(&guests), vec![(0, 1, RelationKind::Family)]);
    }
}
