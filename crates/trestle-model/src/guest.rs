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

use serde::{Deserialize, Serialize};

/// A single guest to be seated.
///
/// Guests are immutable once constructed. The optimizer consumes the group
/// label (via `trestle_model::category`) and the importance value; the
/// remaining fields are carried through for input/output compatibility.
///
/// The `must_sit_with` / `must_not_sit_with` lists are accepted and
/// preserved but are not enforced by the objective or constraints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    id: String,
    name: String,
    #[serde(default)]
    group_id: Option<String>,
    #[serde(default)]
    importance: u32,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    must_sit_with: Vec<String>,
    #[serde(default)]
    must_not_sit_with: Vec<String>,
}

impl Guest {
    /// Creates a new guest with the given unique identifier and display name.
    /// All optional attributes start empty.
    #[inline]
    pub fn new<I, N>(id: I, name: N) -> Self
    where
        I: Into<String>,
        N: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            group_id: None,
            importance: 0,
            tags: Vec::new(),
            must_sit_with: Vec::new(),
            must_not_sit_with: Vec::new(),
        }
    }

    /// Sets the group label (category) of this guest.
    #[inline]
    pub fn with_group_id<G>(mut self, group_id: G) -> Self
    where
        G: Into<String>,
    {
        self.group_id = Some(group_id.into());
        self
    }

    /// Sets the VIP importance of this guest.
    #[inline]
    pub fn with_importance(mut self, importance: u32) -> Self {
        self.importance = importance;
        self
    }

    /// Sets the free-form tags of this guest. Tags are not scored.
    #[inline]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Sets the declared must-sit-with guest ids. Declared, not enforced.
    #[inline]
    pub fn with_must_sit_with(mut self, ids: Vec<String>) -> Self {
        self.must_sit_with = ids;
        self
    }

    /// Sets the declared must-not-sit-with guest ids. Declared, not enforced.
    #[inline]
    pub fn with_must_not_sit_with(mut self, ids: Vec<String>) -> Self {
        self.must_not_sit_with = ids;
        self
    }

    /// Returns the unique identifier of this guest.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name of this guest.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the group label of this guest, if any.
    #[inline]
    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    /// Returns the VIP importance of this guest.
    #[inline]
    pub fn importance(&self) -> u32 {
        self.importance
    }

    /// Returns the free-form tags of this guest.
    #[inline]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the declared must-sit-with guest ids.
    #[inline]
    pub fn must_sit_with(&self) -> &[String] {
        &self.must_sit_with
    }

    /// Returns the declared must-not-sit-with guest ids.
    #[inline]
    pub fn must_not_sit_with(&self) -> &[String] {
        &self.must_not_sit_with
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_guest_has_empty_optional_attributes() {
        let guest = Guest::new("g1", "Alice");
        assert_eq!(guest.id(), "g1");
        assert_eq!(guest.name(), "Alice");
        assert_eq!(guest.group_id(), None);
        assert_eq!(guest.importance(), 0);
        assert!(guest.tags().is_empty());
        assert!(guest.must_sit_with().is_empty());
        assert!(guest.must_not_sit_with().is_empty());
    }

    #[test]
    fn test_builder_style_setters() {
        let guest = Guest::new("g2", "Bob")
            .with_group_id("Groom's Family")
            .with_importance(5)
            .with_tags(vec!["vegetarian".to_string()])
            .with_must_sit_with(vec!["g1".to_string()])
            .with_must_not_sit_with(vec!["g3".to_string()]);

        assert_eq!(guest.group_id(), Some("Groom's Family"));
        assert_eq!(guest.importance(), 5);
        assert_eq!(guest.tags(), ["vegetarian".to_string()]);
        assert_eq!(guest.must_sit_with(), ["g1".to_string()]);
        assert_eq!(guest.must_not_sit_with(), ["g3".to_string()]);
    }

    #[test]
    fn test_deserializes_with_missing_optional_fields() {
        let guest: Guest = serde_json::from_str(r#"{"id":"g1","name":"Alice"}"#)
            .expect("minimal guest payload should deserialize");
        assert_eq!(guest.id(), "g1");
        assert_eq!(guest.group_id(), None);
        assert_eq!(guest.importance(), 0);
    }
}
