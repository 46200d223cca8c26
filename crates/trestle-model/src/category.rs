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

//! # Category Classifier
//!
//! Pure, stateless classification of a guest's group label into the
//! attributes consumed by the objective: family membership, social-group
//! membership, side affiliation, and a closeness rank.
//!
//! Labels are normalized (trimmed, ASCII-lowercased) before every test.
//! Canonical labels are matched exactly; anything else falls through to a
//! keyword test so free-form spreadsheet categories (`family_a`,
//! `friends`) still classify for pair generation. Keyword-classified
//! labels never receive a closeness rank: the rank table is canonical-only.

/// Canonical family category labels: immediate, extended, and family friends.
pub const FAMILY_LABELS: [&str; 5] = [
    "groom's family",
    "bride's family",
    "groom's extended family",
    "bride's extended family",
    "family friends",
];

/// Canonical social category labels: friends, work colleagues, and
/// university friends.
pub const SOCIAL_LABELS: [&str; 7] = [
    "groom's friends",
    "bride's friends",
    "groom's work colleagues",
    "bride's work colleagues",
    "groom's university friends",
    "bride's university friends",
    "mutual friends",
];

/// Canonical groom-side affiliation labels.
pub const GROOM_SIDE_LABELS: [&str; 6] = [
    "groom's family",
    "groom's extended family",
    "groom's friends",
    "groom's work colleagues",
    "groom's university friends",
    "groom's side",
];

/// Canonical bride-side affiliation labels.
pub const BRIDE_SIDE_LABELS: [&str; 6] = [
    "bride's family",
    "bride's extended family",
    "bride's friends",
    "bride's work colleagues",
    "bride's university friends",
    "bride's side",
];

/// Labels that belong to neither side and are excluded from cross-side
/// pair generation.
pub const SIDE_NEUTRAL_LABELS: [&str; 2] = ["mutual friends", "family friends"];

fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Returns `true` if the label names a family category.
pub fn is_family(label: &str) -> bool {
    let normalized = normalize(label);
    FAMILY_LABELS.contains(&normalized.as_str()) || normalized.contains("family")
}

/// Returns `true` if the label names a social-group category.
///
/// Family always wins: a label that classifies as family ("family friends")
/// is never a social group, keeping the two sets disjoint.
pub fn is_social_group(label: &str) -> bool {
    if is_family(label) {
        return false;
    }
    let normalized = normalize(label);
    SOCIAL_LABELS.contains(&normalized.as_str())
        || normalized.contains("friend")
        || normalized.contains("colleague")
        || normalized.contains("university")
}

/// Returns `true` if the label is explicitly side-neutral.
pub fn is_side_neutral(label: &str) -> bool {
    let normalized = normalize(label);
    SIDE_NEUTRAL_LABELS.contains(&normalized.as_str())
}

/// Returns `true` if the label affiliates a guest with the groom's side.
/// Side-neutral labels never affiliate with a side.
pub fn is_groom_side(label: &str) -> bool {
    if is_side_neutral(label) {
        return false;
    }
    let normalized = normalize(label);
    GROOM_SIDE_LABELS.contains(&normalized.as_str()) || normalized.contains("groom")
}

/// Returns `true` if the label affiliates a guest with the bride's side.
/// Side-neutral labels never affiliate with a side.
pub fn is_bride_side(label: &str) -> bool {
    if is_side_neutral(label) {
        return false;
    }
    let normalized = normalize(label);
    BRIDE_SIDE_LABELS.contains(&normalized.as_str()) || normalized.contains("bride")
}

/// Returns the closeness rank of a category label.
///
/// The rank is a fixed table over the canonical labels, from immediate
/// family (5) down to a bare side affiliation (1). Unknown labels rank 0,
/// so the relationship-priority term never biases guests whose closeness
/// was never stated.
pub fn closeness_rank(label: &str) -> u32 {
    match normalize(label).as_str() {
        "groom's family" | "bride's family" => 5,
        "groom's extended family" | "bride's extended family" => 4,
        "family friends" | "groom's friends" | "bride's friends" | "mutual friends" => 3,
        "groom's work colleagues"
        | "bride's work colleagues"
        | "groom's university friends"
        | "bride's university friends" => 2,
        "groom's side" | "bride's side" => 1,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_family_labels_classify_as_family() {
        for label in FAMILY_LABELS {
            assert!(is_family(label), "expected '{label}' to be family");
            assert!(!is_social_group(label), "'{label}' must not be social");
        }
    }

    #[test]
    fn test_canonical_social_labels_classify_as_social() {
        for label in SOCIAL_LABELS {
            assert!(is_social_group(label), "expected '{label}' to be social");
            assert!(!is_family(label), "'{label}' must not be family");
        }
    }

    #[test]
    fn test_classification_is_case_and_whitespace_insensitive() {
        assert!(is_family("  Groom's Family  "));
        assert!(is_social_group("BRIDE'S WORK COLLEAGUES"));
        assert!(is_groom_side("Groom's Friends"));
    }

    #[test]
    fn test_free_form_labels_classify_by_keyword() {
        assert!(is_family("family_a"));
        assert!(is_social_group("friends"));
        assert!(is_social_group("old university crowd"));
        assert!(!is_family("friends"));
        assert!(!is_social_group("family_a"));
    }

    #[test]
    fn test_unknown_label_classifies_as_nothing() {
        assert!(!is_family("plus ones"));
        assert!(!is_social_group("plus ones"));
        assert!(!is_groom_side("plus ones"));
        assert!(!is_bride_side("plus ones"));
    }

    #[test]
    fn test_side_affiliation_and_neutrality() {
        assert!(is_groom_side("Groom's Family"));
        assert!(is_bride_side("Bride's University Friends"));
        assert!(!is_groom_side("Bride's Family"));

        // Neutral labels never join either side, even though "family
        // friends" would otherwise match the family keyword.
        for label in SIDE_NEUTRAL_LABELS {
            assert!(is_side_neutral(label));
            assert!(!is_groom_side(label));
            assert!(!is_bride_side(label));
        }
    }

    #[test]
    fn test_closeness_rank_table() {
        assert_eq!(closeness_rank("Groom's Family"), 5);
        assert_eq!(closeness_rank("Bride's Extended Family"), 4);
        assert_eq!(closeness_rank("Family Friends"), 3);
        assert_eq!(closeness_rank("Mutual Friends"), 3);
        assert_eq!(closeness_rank("Groom's Work Colleagues"), 2);
        assert_eq!(closeness_rank("Bride's University Friends"), 2);
        assert_eq!(closeness_rank("Groom's Side"), 1);
    }

    #[test]
    fn test_closeness_rank_is_zero_for_non_canonical_labels() {
        assert_eq!(closeness_rank("family_a"), 0);
        assert_eq!(closeness_rank("friends"), 0);
        assert_eq!(closeness_rank(""), 0);
    }
}
