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

use crate::index::TableIndex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single capacity-bounded table.
///
/// The constraint map is opaque to the optimizer core; it is preserved for
/// round-tripping only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    id: String,
    name: String,
    capacity: u32,
    #[serde(default)]
    zone: Option<String>,
    #[serde(default)]
    constraints: BTreeMap<String, String>,
}

impl Table {
    /// Creates a new table with the given unique identifier, display name,
    /// and seat capacity.
    #[inline]
    pub fn new<I, N>(id: I, name: N, capacity: u32) -> Self
    where
        I: Into<String>,
        N: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            capacity,
            zone: None,
            constraints: BTreeMap::new(),
        }
    }

    /// Sets the zone label of this table.
    #[inline]
    pub fn with_zone<Z>(mut self, zone: Z) -> Self
    where
        Z: Into<String>,
    {
        self.zone = Some(zone.into());
        self
    }

    /// Sets the opaque constraint map of this table.
    #[inline]
    pub fn with_constraints(mut self, constraints: BTreeMap<String, String>) -> Self {
        self.constraints = constraints;
        self
    }

    /// Returns the unique identifier of this table.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name of this table.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the seat capacity of this table.
    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the zone label of this table, if any.
    #[inline]
    pub fn zone(&self) -> Option<&str> {
        self.zone.as_deref()
    }

    /// Returns the opaque constraint map of this table.
    #[inline]
    pub fn constraints(&self) -> &BTreeMap<String, String> {
        &self.constraints
    }
}

/// The venue configuration: an ordered list of tables plus an opaque
/// settings map.
///
/// Table order matters: the position of a table in the list determines its
/// quality rank for the relationship-priority objective term (earlier-listed
/// tables are considered higher quality).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct VenueConfig {
    tables: Vec<Table>,
    #[serde(default)]
    settings: BTreeMap<String, String>,
}

impl VenueConfig {
    /// Creates a new venue configuration from an ordered table list.
    #[inline]
    pub fn new(tables: Vec<Table>) -> Self {
        Self {
            tables,
            settings: BTreeMap::new(),
        }
    }

    /// Sets the opaque settings map of this venue.
    #[inline]
    pub fn with_settings(mut self, settings: BTreeMap<String, String>) -> Self {
        self.settings = settings;
        self
    }

    /// Returns the ordered table list.
    #[inline]
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Returns the number of tables in the venue.
    #[inline]
    pub fn num_tables(&self) -> usize {
        self.tables.len()
    }

    /// Returns the table at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `table_index` is out of bounds.
    #[inline]
    pub fn table(&self, table_index: TableIndex) -> &Table {
        let index = table_index.get();
        debug_assert!(
            index < self.tables.len(),
            "called `VenueConfig::table` with table index out of bounds: the len is {} but the index is {}",
            self.tables.len(),
            index
        );

        &self.tables[index]
    }

    /// Returns the opaque settings map of this venue.
    #[inline]
    pub fn settings(&self) -> &BTreeMap<String, String> {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_accessors() {
        let table = Table::new("t1", "Table 1", 8).with_zone("main");
        assert_eq!(table.id(), "t1");
        assert_eq!(table.name(), "Table 1");
        assert_eq!(table.capacity(), 8);
        assert_eq!(table.zone(), Some("main"));
        assert!(table.constraints().is_empty());
    }

    #[test]
    fn test_venue_preserves_table_order() {
        let venue = VenueConfig::new(vec![
            Table::new("t2", "Table 2", 4),
            Table::new("t1", "Table 1", 4),
        ]);

        assert_eq!(venue.num_tables(), 2);
        assert_eq!(venue.table(TableIndex::new(0)).id(), "t2");
        assert_eq!(venue.table(TableIndex::new(1)).id(), "t1");
    }

    #[test]
    fn test_empty_venue_is_valid() {
        let venue = VenueConfig::new(Vec::new());
        assert_eq!(venue.num_tables(), 0);
        assert!(venue.tables().is_empty());
    }
}
