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

//! # Thought Catalog
//!
//! The fixed, named weight transformations used as expansion operators.
//! Catalog order matters: a search that generates `n` thoughts always
//! takes the first `n` of [`Thought::CATALOG`].

use trestle_model::weights::{ObjectiveTerm, WeightVector};

/// A named weight-vector transformation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Thought {
    /// Family cohesion weight ×1.5, capped at 1.0.
    EmphasizeFamilyCohesion,
    /// Social cohesion weight ×1.5, capped at 1.0.
    EmphasizeSocialGroupCohesion,
    /// Side mixing weight ×1.5, capped at 1.0.
    EmphasizeSideMixing,
    /// Relationship priority weight ×1.5, capped at 1.0.
    EmphasizeRelationshipPriority,
    /// All entries set to their arithmetic mean.
    BalanceAll,
    /// High family cohesion, low side mixing.
    TraditionalSeating,
    /// More mixing, balanced priorities.
    ModernSeating,
}

impl Thought {
    /// The full catalog, in expansion order.
    pub const CATALOG: [Thought; 7] = [
        Thought::EmphasizeFamilyCohesion,
        Thought::EmphasizeSocialGroupCohesion,
        Thought::EmphasizeSideMixing,
        Thought::EmphasizeRelationshipPriority,
        Thought::BalanceAll,
        Thought::TraditionalSeating,
        Thought::ModernSeating,
    ];

    /// Returns the wire name of this thought.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Thought::EmphasizeFamilyCohesion => "emphasize_family_cohesion",
            Thought::EmphasizeSocialGroupCohesion => "emphasize_social_group_cohesion",
            Thought::EmphasizeSideMixing => "emphasize_side_mixing",
            Thought::EmphasizeRelationshipPriority => "emphasize_relationship_priority",
            Thought::BalanceAll => "balance_all",
            Thought::TraditionalSeating => "traditional_seating",
            Thought::ModernSeating => "modern_seating",
        }
    }

    /// Applies this transformation to a weight vector. Missing required
    /// terms default to 0.5 before the transformation takes effect.
    pub fn apply(&self, weights: &WeightVector) -> WeightVector {
        let mut next = weights.normalized();
        match self {
            Thought::EmphasizeFamilyCohesion => emphasize(&mut next, ObjectiveTerm::FamilyCohesion),
            Thought::EmphasizeSocialGroupCohesion => {
                emphasize(&mut next, ObjectiveTerm::SocialGroupCohesion)
            }
            Thought::EmphasizeSideMixing => emphasize(&mut next, ObjectiveTerm::SideMixing),
            Thought::EmphasizeRelationshipPriority => {
                emphasize(&mut next, ObjectiveTerm::RelationshipPriority)
            }
            Thought::BalanceAll => {
                let mean = next.mean();
                let names: Vec<String> = next.as_map().keys().cloned().collect();
                for name in names {
                    next.insert(name, mean);
                }
            }
            Thought::TraditionalSeating => {
                next.set(ObjectiveTerm::FamilyCohesion, 0.9);
                next.set(ObjectiveTerm::SocialGroupCohesion, 0.7);
                next.set(ObjectiveTerm::SideMixing, 0.1);
                next.set(ObjectiveTerm::RelationshipPriority, 0.8);
            }
            Thought::ModernSeating => {
                next.set(ObjectiveTerm::FamilyCohesion, 0.6);
                next.set(ObjectiveTerm::SocialGroupCohesion, 0.5);
                next.set(ObjectiveTerm::SideMixing, 0.7);
                next.set(ObjectiveTerm::RelationshipPriority, 0.6);
            }
        }
        next
    }
}

fn emphasize(weights: &mut WeightVector, term: ObjectiveTerm) {
    let boosted = (weights.weight(term) * 1.5).min(1.0);
    weights.set(term, boosted);
}

impl std::fmt::Display for Thought {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_names() {
        let names: Vec<&str> = Thought::CATALOG.iter().map(|t| t.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "emphasize_family_cohesion",
                "emphasize_social_group_cohesion",
                "emphasize_side_mixing",
                "emphasize_relationship_priority",
                "balance_all",
                "traditional_seating",
                "modern_seating",
            ]
        );
    }

    #[test]
    fn test_emphasize_multiplies_by_one_and_a_half() {
        let weights = WeightVector::default();
        let next = Thought::EmphasizeFamilyCohesion.apply(&weights);
        assert_eq!(next.weight(ObjectiveTerm::FamilyCohesion), 0.75);
        assert_eq!(next.weight(ObjectiveTerm::SocialGroupCohesion), 0.5);
    }

    #[test]
    fn test_emphasize_never_exceeds_one() {
        let mut weights = WeightVector::default();
        weights.set(ObjectiveTerm::SideMixing, 1.0);
        let next = Thought::EmphasizeSideMixing.apply(&weights);
        assert_eq!(next.weight(ObjectiveTerm::SideMixing), 1.0);

        weights.set(ObjectiveTerm::SideMixing, 0.8);
        let next = Thought::EmphasizeSideMixing.apply(&weights);
        assert_eq!(next.weight(ObjectiveTerm::SideMixing), 1.0);
    }

    #[test]
    fn test_apply_fills_missing_terms_first() {
        let empty = WeightVector::empty();
        let next = Thought::EmphasizeRelationshipPriority.apply(&empty);
        assert_eq!(next.weight(ObjectiveTerm::RelationshipPriority), 0.75);
        assert_eq!(next.weight(ObjectiveTerm::FamilyCohesion), 0.5);
        assert_eq!(next.len(), 4);
    }

    #[test]
    fn test_balance_all_averages_every_entry() {
        let mut weights = WeightVector::default();
        weights.set(ObjectiveTerm::FamilyCohesion, 0.9);
        weights.set(ObjectiveTerm::SideMixing, 0.1);

        let balanced = Thought::BalanceAll.apply(&weights);
        let expected = (0.9 + 0.5 + 0.1 + 0.5) / 4.0;
        for term in ObjectiveTerm::ALL {
            assert!((balanced.weight(term) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_balance_all_is_idempotent_once_balanced() {
        let mut weights = WeightVector::default();
        weights.set(ObjectiveTerm::FamilyCohesion, 0.9);

        let once = Thought::BalanceAll.apply(&weights);
        let twice = Thought::BalanceAll.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_fixed_presets() {
        let traditional = Thought::TraditionalSeating.apply(&WeightVector::default());
        assert_eq!(traditional.weight(ObjectiveTerm::FamilyCohesion), 0.9);
        assert_eq!(traditional.weight(ObjectiveTerm::SocialGroupCohesion), 0.7);
        assert_eq!(traditional.weight(ObjectiveTerm::SideMixing), 0.1);
        assert_eq!(traditional.weight(ObjectiveTerm::RelationshipPriority), 0.8);

        let modern = Thought::ModernSeating.apply(&WeightVector::default());
        assert_eq!(modern.weight(ObjectiveTerm::FamilyCohesion), 0.6);
        assert_eq!(modern.weight(ObjectiveTerm::SocialGroupCohesion), 0.5);
        assert_eq!(modern.weight(ObjectiveTerm::SideMixing), 0.7);
        assert_eq!(modern.weight(ObjectiveTerm::RelationshipPriority), 0.6);
    }
}
