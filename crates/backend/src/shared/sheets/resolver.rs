//! Keyword-based column lookup.
//!
//! Ordered scan: the first column (in declaration order) whose normalized
//! name contains every required fragment and none of the excluded ones wins.
//! Ties are not disambiguated.

use super::normalize::normalize_header;

#[derive(Debug, Clone, Copy)]
pub struct ColumnQuery {
    pub required: &'static [&'static str],
    pub excluded: &'static [&'static str],
}

impl ColumnQuery {
    pub const fn new(required: &'static [&'static str]) -> Self {
        Self {
            required,
            excluded: &[],
        }
    }

    pub const fn excluding(self, excluded: &'static [&'static str]) -> Self {
        Self {
            required: self.required,
            excluded,
        }
    }

    /// Case- and accent-insensitive containment test.
    pub fn matches(&self, column: &str) -> bool {
        let name = normalize_header(column);
        self.required
            .iter()
            .all(|f| name.contains(normalize_header(f).as_str()))
            && !self
                .excluded
                .iter()
                .any(|f| name.contains(normalize_header(f).as_str()))
    }
}

/// First column of `columns` matching `query`.
pub fn find_column<'c>(columns: &'c [String], query: &ColumnQuery) -> Option<&'c str> {
    columns
        .iter()
        .find(|c| query.matches(c))
        .map(String::as_str)
}

/// Try each query in turn, returning the first hit.
pub fn find_first<'c>(columns: &'c [String], queries: &[ColumnQuery]) -> Option<&'c str> {
    queries.iter().find_map(|q| find_column(columns, q))
}
