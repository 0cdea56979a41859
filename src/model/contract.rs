//! The published contract consumed by the rendering layer.
//!
//! Field names on the element records are part of the wire contract (the
//! renderer selects on them), hence the explicit serde renames instead of a
//! blanket rename rule.

use super::{AuthorNode, Edge};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A node or edge element, in emission order (all nodes, then all edges).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Element {
    Node(NodeElement),
    Edge(EdgeElement),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeElement {
    pub data: NodeElementData,
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeElementData {
    /// Canonical label doubles as the element id.
    pub id: String,
    /// Display label, title-cased.
    pub label: String,
    /// Default sizing metric (mirrors `Links`).
    pub val: f64,
    #[serde(rename = "Links")]
    pub links: f64,
    #[serde(rename = "Strength")]
    pub strength: f64,
    #[serde(rename = "Documents")]
    pub documents: f64,
    #[serde(rename = "Citations")]
    pub citations: f64,
    #[serde(rename = "Norm_citations")]
    pub norm_citations: f64,
    #[serde(rename = "Avg_pub_year")]
    pub avg_pub_year: f64,
    #[serde(rename = "First_pub_year")]
    pub first_pub_year: Option<i32>,
    #[serde(rename = "Last_pub_year")]
    pub last_pub_year: Option<i32>,
    #[serde(rename = "Avg_citations")]
    pub avg_citations: f64,
    #[serde(rename = "Avg_norm_citations")]
    pub avg_norm_citations: f64,
    pub color: String,
    pub cluster: i64,
    pub max_edge_weight: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeElement {
    pub data: EdgeElementData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeElementData {
    pub id: String,
    pub source: String,
    pub target: String,
    pub weight: i64,
    pub color: String,
}

/// One stylesheet rule: a selector and its style properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleRule {
    pub selector: String,
    pub style: BTreeMap<String, serde_json::Value>,
}

/// Human-readable label ↔ machine column key, for the metric dropdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricBounds {
    pub min: f64,
    pub max: f64,
}

/// Everything the rendering layer needs for one organization.
///
/// Deserializing a cached copy must be observationally equal to a fresh
/// computation over unchanged sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkData {
    pub elements: Vec<Element>,
    pub stylesheet: Vec<StyleRule>,
    pub size_options: Vec<MetricOption>,
    pub color_options: Vec<MetricOption>,
    pub metrics_bounds: BTreeMap<String, MetricBounds>,
    pub nodes: Vec<AuthorNode>,
    pub edges: Vec<Edge>,
    pub num_publication: usize,
    pub num_cites: i64,
    pub h_index: usize,
    /// Full observed year range, inclusive.
    pub years: Vec<i32>,
    /// Publication count per entry of `years`, zero-filled.
    pub counts_publication_by_year: Vec<usize>,
}
