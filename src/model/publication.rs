//! One bibliographic record, as exported by the source database.

use serde::{Deserialize, Serialize};

/// A single publication row. Immutable once loaded.
///
/// `year` and `cited_by` survive malformed cells as `None` / `0` rather than
/// poisoning the whole table; `author_ids` is present only when the export
/// carries an `Author(s) ID` column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub year: Option<i32>,
    pub source_title: String,
    pub cited_by: i64,
    pub link: String,
    /// Raw semicolon-delimited author string, exactly as exported.
    pub authors: String,
    /// Raw semicolon-delimited author-ID string, positionally aligned with
    /// `authors` when present.
    pub author_ids: Option<String>,
}

impl Publication {
    /// Split a semicolon-delimited cell into trimmed non-empty parts.
    pub fn split_semicolon(cell: &str) -> impl Iterator<Item = &str> {
        cell.split(';').map(str::trim).filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_semicolon_trims_and_drops_empty() {
        let parts: Vec<_> = Publication::split_semicolon("Ivanov I.; Petrov P. ;; ").collect();
        assert_eq!(parts, vec!["Ivanov I.", "Petrov P."]);
    }
}
