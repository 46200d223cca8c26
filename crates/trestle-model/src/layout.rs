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

//! # Seating Layout
//!
//! The output of a single optimization run: a guest→table assignment map,
//! the achieved score, and the objective-breakdown echo of the weights
//! used. The id tag distinguishes genuinely optimized layouts (`"opt"`)
//! from degraded round-robin fallbacks (`"dummy"`), so callers can surface
//! a best-effort indicator.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Id tag of a layout produced by a successful optimization.
pub const OPTIMIZED_TAG: &str = "opt";

/// Id tag of a degraded round-robin fallback layout.
pub const FALLBACK_TAG: &str = "dummy";

/// Satisfied/violated soft-constraint counters plus hard-violation
/// descriptions.
///
/// No soft-constraint accounting is computed today; the summary is always
/// empty in practice. The shape is preserved for API compatibility.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConstraintSummary {
    satisfied_soft: BTreeMap<String, u32>,
    violated_soft: BTreeMap<String, u32>,
    hard_violations: Vec<String>,
}

impl ConstraintSummary {
    /// Creates an empty summary.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the satisfied soft-constraint counters.
    #[inline]
    pub fn satisfied_soft(&self) -> &BTreeMap<String, u32> {
        &self.satisfied_soft
    }

    /// Returns the violated soft-constraint counters.
    #[inline]
    pub fn violated_soft(&self) -> &BTreeMap<String, u32> {
        &self.violated_soft
    }

    /// Returns the hard-violation descriptions.
    #[inline]
    pub fn hard_violations(&self) -> &[String] {
        &self.hard_violations
    }

    /// Returns `true` if no hard violations are recorded.
    #[inline]
    pub fn has_no_hard_violations(&self) -> bool {
        self.hard_violations.is_empty()
    }
}

/// The identity of a layout for deduplication: the id tag plus the sorted
/// assignment entries. Two layouts with the same tag and the exact same
/// guest→table mapping are duplicates.
pub type LayoutKey = (String, Vec<(String, String)>);

/// A scored seating layout. Immutable once produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    id: String,
    assignments: BTreeMap<String, String>,
    score: f64,
    objective_breakdown: BTreeMap<String, f64>,
    #[serde(default)]
    variant_label: Option<String>,
    #[serde(default)]
    variant_id: Option<String>,
    #[serde(default)]
    summary: Option<ConstraintSummary>,
}

impl Layout {
    /// Creates an optimized layout (`"opt"` tag) with the given assignment
    /// map, achieved score, and objective breakdown.
    #[inline]
    pub fn optimized(
        assignments: BTreeMap<String, String>,
        score: f64,
        objective_breakdown: BTreeMap<String, f64>,
    ) -> Self {
        Self {
            id: OPTIMIZED_TAG.to_string(),
            assignments,
            score,
            objective_breakdown,
            variant_label: None,
            variant_id: None,
            summary: Some(ConstraintSummary::empty()),
        }
    }

    /// Creates a degraded fallback layout (`"dummy"` tag): score zero and
    /// an empty objective breakdown.
    #[inline]
    pub fn fallback(assignments: BTreeMap<String, String>) -> Self {
        Self {
            id: FALLBACK_TAG.to_string(),
            assignments,
            score: 0.0,
            objective_breakdown: BTreeMap::new(),
            variant_label: None,
            variant_id: None,
            summary: Some(ConstraintSummary::empty()),
        }
    }

    /// Sets the variant label of this layout.
    #[inline]
    pub fn with_variant_label<L>(mut self, label: L) -> Self
    where
        L: Into<String>,
    {
        self.variant_label = Some(label.into());
        self
    }

    /// Sets the variant id of this layout.
    #[inline]
    pub fn with_variant_id<I>(mut self, id: I) -> Self
    where
        I: Into<String>,
    {
        self.variant_id = Some(id.into());
        self
    }

    /// Returns the id tag of this layout.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns `true` if this is a degraded fallback layout.
    #[inline]
    pub fn is_fallback(&self) -> bool {
        self.id == FALLBACK_TAG
    }

    /// Returns the guest-id → table-id assignment map.
    #[inline]
    pub fn assignments(&self) -> &BTreeMap<String, String> {
        &self.assignments
    }

    /// Returns the table assigned to the given guest, if any.
    #[inline]
    pub fn table_for_guest(&self, guest_id: &str) -> Option<&str> {
        self.assignments.get(guest_id).map(String::as_str)
    }

    /// Returns the scalar score of this layout.
    #[inline]
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Returns the objective breakdown: term name → the weight used for
    /// that term (not the realized contribution).
    #[inline]
    pub fn objective_breakdown(&self) -> &BTreeMap<String, f64> {
        &self.objective_breakdown
    }

    /// Returns the variant label, if any.
    #[inline]
    pub fn variant_label(&self) -> Option<&str> {
        self.variant_label.as_deref()
    }

    /// Returns the variant id, if any.
    #[inline]
    pub fn variant_id(&self) -> Option<&str> {
        self.variant_id.as_deref()
    }

    /// Returns the soft-constraint summary, if any.
    #[inline]
    pub fn summary(&self) -> Option<&ConstraintSummary> {
        self.summary.as_ref()
    }

    /// Returns the deduplication key of this layout: the id tag plus the
    /// assignment entries in sorted order.
    pub fn dedup_key(&self) -> LayoutKey {
        let entries = self
            .assignments
            .iter()
            .map(|(guest, table)| (guest.clone(), table.clone()))
            .collect();
        (self.id.clone(), entries)
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Layout(id={}, guests={}, score={:.4})",
            self.id,
            self.assignments.len(),
            self.score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignments(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(g, t)| (g.to_string(), t.to_string()))
            .collect()
    }

    #[test]
    fn test_optimized_layout_carries_tag_and_empty_summary() {
        let layout = Layout::optimized(assignments(&[("g1", "t1")]), 1.5, BTreeMap::new());
        assert_eq!(layout.id(), OPTIMIZED_TAG);
        assert!(!layout.is_fallback());
        assert_eq!(layout.score(), 1.5);
        assert!(layout
            .summary()
            .is_some_and(ConstraintSummary::has_no_hard_violations));
    }

    #[test]
    fn test_fallback_layout_has_zero_score_and_empty_breakdown() {
        let layout = Layout::fallback(assignments(&[("g1", "default")]));
        assert_eq!(layout.id(), FALLBACK_TAG);
        assert!(layout.is_fallback());
        assert_eq!(layout.score(), 0.0);
        assert!(layout.objective_breakdown().is_empty());
    }

    #[test]
    fn test_dedup_key_is_tag_plus_sorted_assignments() {
        let a = Layout::optimized(assignments(&[("g2", "t1"), ("g1", "t2")]), 1.0, BTreeMap::new());
        let b = Layout::optimized(assignments(&[("g1", "t2"), ("g2", "t1")]), 9.0, BTreeMap::new());

        // Same tag, same mapping: duplicates regardless of score.
        assert_eq!(a.dedup_key(), b.dedup_key());

        let c = Layout::fallback(assignments(&[("g1", "t2"), ("g2", "t1")]));
        assert_ne!(a.dedup_key(), c.dedup_key());
    }

    #[test]
    fn test_serde_round_trip_preserves_layout() {
        let mut breakdown = BTreeMap::new();
        breakdown.insert("family_cohesion".to_string(), 0.75);
        let layout = Layout::optimized(assignments(&[("g1", "t1"), ("g2", "t1")]), 0.75, breakdown)
            .with_variant_label("emphasize_family_cohesion");

        let json = serde_json::to_string(&layout).expect("layout should serialize");
        let back: Layout = serde_json::from_str(&json).expect("layout should deserialize");

        assert_eq!(back, layout);
        assert_eq!(back.table_for_guest("g2"), Some("t1"));
        assert_eq!(back.objective_breakdown().get("family_cohesion"), Some(&0.75));
    }
}
