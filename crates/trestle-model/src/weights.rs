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

//! # Objective Weights
//!
//! The weight vector steering a single optimization run. Four terms are
//! required; a missing required term defaults to `0.5` before use. The
//! vector may carry additional free-form entries (they participate in
//! averaging but are never consumed by the objective).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The default weight assumed for any required term that is absent.
pub const DEFAULT_WEIGHT: f64 = 0.5;

/// The four objective terms every optimization run scores.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum ObjectiveTerm {
    /// Rewards two guests of the same family category sharing a table.
    FamilyCohesion,
    /// Rewards two guests of the same social category sharing a table.
    SocialGroupCohesion,
    /// Rewards guests from opposing sides sharing a table.
    SideMixing,
    /// Biases close relations toward higher-quality (earlier-listed) tables.
    RelationshipPriority,
}

impl ObjectiveTerm {
    /// All four terms, in canonical order.
    pub const ALL: [ObjectiveTerm; 4] = [
        ObjectiveTerm::FamilyCohesion,
        ObjectiveTerm::SocialGroupCohesion,
        ObjectiveTerm::SideMixing,
        ObjectiveTerm::RelationshipPriority,
    ];

    /// Returns the wire name of this term.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ObjectiveTerm::FamilyCohesion => "family_cohesion",
            ObjectiveTerm::SocialGroupCohesion => "social_group_cohesion",
            ObjectiveTerm::SideMixing => "side_mixing",
            ObjectiveTerm::RelationshipPriority => "relationship_priority",
        }
    }
}

impl std::fmt::Display for ObjectiveTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A mapping from objective-term name to a non-negative real weight.
///
/// `WeightVector::default()` yields the base configuration: all four
/// required terms at [`DEFAULT_WEIGHT`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightVector {
    values: BTreeMap<String, f64>,
}

impl Default for WeightVector {
    fn default() -> Self {
        let mut values = BTreeMap::new();
        for term in ObjectiveTerm::ALL {
            values.insert(term.as_str().to_string(), DEFAULT_WEIGHT);
        }
        Self { values }
    }
}

impl WeightVector {
    /// Creates an empty weight vector (no entries at all).
    #[inline]
    pub fn empty() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Creates a weight vector from a raw name→weight map.
    #[inline]
    pub fn from_map(values: BTreeMap<String, f64>) -> Self {
        Self { values }
    }

    /// Returns the weight of a required term, defaulting to
    /// [`DEFAULT_WEIGHT`] when the entry is absent.
    #[inline]
    pub fn weight(&self, term: ObjectiveTerm) -> f64 {
        self.values
            .get(term.as_str())
            .copied()
            .unwrap_or(DEFAULT_WEIGHT)
    }

    /// Returns the raw entry for the given name, if present.
    #[inline]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Sets the weight of a required term.
    #[inline]
    pub fn set(&mut self, term: ObjectiveTerm, weight: f64) {
        self.values.insert(term.as_str().to_string(), weight);
    }

    /// Inserts a raw name→weight entry.
    #[inline]
    pub fn insert<K>(&mut self, name: K, weight: f64)
    where
        K: Into<String>,
    {
        self.values.insert(name.into(), weight);
    }

    /// Returns a copy of this vector with every required term present,
    /// filling absences with [`DEFAULT_WEIGHT`]. Extra entries are kept.
    pub fn normalized(&self) -> Self {
        let mut values = self.values.clone();
        for term in ObjectiveTerm::ALL {
            values
                .entry(term.as_str().to_string())
                .or_insert(DEFAULT_WEIGHT);
        }
        Self { values }
    }

    /// Returns the arithmetic mean over all entries of this vector.
    /// Returns [`DEFAULT_WEIGHT`] for an empty vector.
    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            return DEFAULT_WEIGHT;
        }
        self.values.values().sum::<f64>() / self.values.len() as f64
    }

    /// Returns the underlying name→weight map.
    #[inline]
    pub fn as_map(&self) -> &BTreeMap<String, f64> {
        &self.values
    }

    /// Returns the number of entries in this vector.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if this vector has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_all_required_terms_at_default_weight() {
        let weights = WeightVector::default();
        assert_eq!(weights.len(), 4);
        for term in ObjectiveTerm::ALL {
            assert_eq!(weights.weight(term), DEFAULT_WEIGHT);
        }
    }

    #[test]
    fn test_missing_required_term_defaults_before_use() {
        let weights = WeightVector::empty();
        assert_eq!(weights.get("family_cohesion"), None);
        assert_eq!(weights.weight(ObjectiveTerm::FamilyCohesion), DEFAULT_WEIGHT);
    }

    #[test]
    fn test_normalized_fills_missing_and_keeps_existing() {
        let mut weights = WeightVector::empty();
        weights.set(ObjectiveTerm::SideMixing, 0.9);

        let normalized = weights.normalized();
        assert_eq!(normalized.len(), 4);
        assert_eq!(normalized.get("side_mixing"), Some(0.9));
        assert_eq!(normalized.get("family_cohesion"), Some(DEFAULT_WEIGHT));
    }

    #[test]
    fn test_normalized_keeps_extra_entries() {
        let mut weights = WeightVector::default();
        weights.insert("table_rotation", 0.25);

        let normalized = weights.normalized();
        assert_eq!(normalized.len(), 5);
        assert_eq!(normalized.get("table_rotation"), Some(0.25));
    }

    #[test]
    fn test_mean_over_all_entries() {
        let mut weights = WeightVector::empty();
        weights.set(ObjectiveTerm::FamilyCohesion, 0.2);
        weights.set(ObjectiveTerm::SocialGroupCohesion, 0.4);
        assert!((weights.mean() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_mean_of_empty_vector_is_default_weight() {
        assert_eq!(WeightVector::empty().mean(), DEFAULT_WEIGHT);
    }

    #[test]
    fn test_term_wire_names() {
        let names: Vec<&str> = ObjectiveTerm::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "family_cohesion",
                "social_group_cohesion",
                "side_mixing",
                "relationship_priority"
            ]
        );
    }
}
