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

use crate::{guest::Guest, venue::Table, venue::VenueConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The plain `{guests, tables, settings}` record accepted at the outermost
/// call boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SeatingInstance {
    #[serde(default)]
    pub guests: Vec<Guest>,
    #[serde(default)]
    pub tables: Vec<Table>,
    #[serde(default)]
    pub settings: BTreeMap<String, String>,
}

impl SeatingInstance {
    /// Creates a new instance from guests and tables with empty settings.
    #[inline]
    pub fn new(guests: Vec<Guest>, tables: Vec<Table>) -> Self {
        Self {
            guests,
            tables,
            settings: BTreeMap::new(),
        }
    }

    /// Builds the venue configuration owned by this instance.
    #[inline]
    pub fn to_venue(&self) -> VenueConfig {
        VenueConfig::new(self.tables.clone()).with_settings(self.settings.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_venue_preserves_tables_and_settings() {
        let mut instance = SeatingInstance::new(
            vec![Guest::new("g1", "Alice")],
            vec![Table::new("t1", "Table 1", 4), Table::new("t2", "Table 2", 6)],
        );
        instance
            .settings
            .insert("style".to_string(), "rustic".to_string());

        let venue = instance.to_venue();
        assert_eq!(venue.num_tables(), 2);
        assert_eq!(venue.tables()[0].id(), "t1");
        assert_eq!(venue.settings().get("style").map(String::as_str), Some("rustic"));
    }

    #[test]
    fn test_deserializes_from_plain_record() {
        let instance: SeatingInstance = serde_json::from_str(
            r#"{
                "guests": [{"id": "g1", "name": "Alice", "group_id": "family_a"}],
                "tables": [{"id": "t1", "name": "Table 1", "capacity": 4}]
            }"#,
        )
        .expect("plain record should deserialize");

        assert_eq!(instance.guests.len(), 1);
        assert_eq!(instance.tables.len(), 1);
        assert!(instance.settings.is_empty());
    }
}
