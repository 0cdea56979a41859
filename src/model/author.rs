//! Per-author and per-edge publication indexes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregated publications of one canonical author.
///
/// The five lists are positionally aligned: entry `i` of each describes the
/// same publication. Ordering follows the publication table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AuthorRecord {
    pub titles: Vec<String>,
    pub years: Vec<Option<i32>>,
    pub source_titles: Vec<String>,
    pub cited_by: Vec<i64>,
    pub links: Vec<String>,
    /// `None` only when the author has no publications, which should not
    /// occur after aggregation but must not crash.
    pub first_pub_year: Option<i32>,
    pub last_pub_year: Option<i32>,
}

/// Canonical author name → aggregated publications.
pub type AuthorIndex = BTreeMap<String, AuthorRecord>;

/// One jointly authored publication, as shown in the edge detail panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointPublication {
    pub title: String,
    pub year: Option<i32>,
    pub source_title: String,
    pub cited_by: i64,
    pub link: String,
}

/// Edge index (the numeric part of `edge-{index}`) → joint publications.
pub type CoauthorIndex = BTreeMap<usize, Vec<JointPublication>>;
