//! Sparse records built from positional table rows.
//!
//! GTFS columns are mostly optional and feeds routinely leave them blank, so
//! a row becomes a map keyed by header name in which blank values simply do
//! not appear. Absent column and blank value are indistinguishable on
//! purpose: neither carries information.

use std::collections::HashMap;

use crate::table::Table;

/// One row paired with its table's header names.
///
/// Only non-empty values are present. Works with any header names, not just
/// the ones GTFS defines, so unknown extension columns ride along until a
/// caller asks for the names it knows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowRecord(HashMap<String, String>);

impl RowRecord {
    /// Look up a value by column name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Remove and return a value by column name.
    pub fn take(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Pair one row's values with header names by position.
///
/// Values beyond the header's width are dropped, and headers beyond the
/// row's width stay absent. When the same name occurs twice in the header,
/// the later column wins. Returns `None` when every value is blank; such
/// rows carry nothing worth keeping.
pub fn map_row(header: &[String], row: Vec<String>) -> Option<RowRecord> {
    let mut values = HashMap::new();
    for (name, value) in header.iter().zip(row) {
        if !value.is_empty() {
            values.insert(name.clone(), value);
        }
    }

    if values.is_empty() {
        None
    } else {
        Some(RowRecord(values))
    }
}

/// Map every row of a table, discarding the all-blank ones.
pub fn map_table(table: Table) -> Vec<RowRecord> {
    let Table { header, rows } = table;
    rows.into_iter()
        .filter_map(|row| map_row(&header, row))
        .collect()
}
