//! Author node in the co-authorship map.

use serde::{Deserialize, Serialize};

/// One author in the organization's precomputed co-authorship map.
///
/// Loaded from the node map file, then enriched in place by the assembler
/// (year range, color, max edge weight). Never mutated after assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorNode {
    pub id: i64,
    /// Canonical lowercase author name.
    pub label: String,
    /// Layout coordinates, rescaled during assembly.
    pub x: f64,
    pub y: f64,
    /// Community label precomputed upstream, >= 1.
    pub cluster: i64,
    pub links: f64,
    pub strength: f64,
    pub documents: f64,
    pub citations: f64,
    pub norm_citations: f64,
    pub avg_pub_year: f64,
    pub avg_citations: f64,
    pub avg_norm_citations: f64,
    /// Filled by the assembler.
    #[serde(default)]
    pub first_pub_year: Option<i32>,
    #[serde(default)]
    pub last_pub_year: Option<i32>,
    /// Max weight over all edges touching this node, 0 if isolated.
    #[serde(default)]
    pub max_edge_weight: i64,
    #[serde(default)]
    pub node_color: String,
}

impl AuthorNode {
    /// Numeric metric by contract column name, used for bounds computation.
    pub fn metric(&self, column: &str) -> Option<f64> {
        match column {
            "Links" => Some(self.links),
            "Strength" => Some(self.strength),
            "Documents" => Some(self.documents),
            "Citations" => Some(self.citations),
            "Norm_citations" => Some(self.norm_citations),
            "Avg_pub_year" => Some(self.avg_pub_year),
            "First_pub_year" => self.first_pub_year.map(f64::from),
            "Last_pub_year" => self.last_pub_year.map(f64::from),
            "Avg_citations" => Some(self.avg_citations),
            "Avg_norm_citations" => Some(self.avg_norm_citations),
            _ => None,
        }
    }
}
