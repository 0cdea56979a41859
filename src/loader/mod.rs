//! Source loaders — parse raw export files into `model` tables.
//!
//! Pure parsing plus column renaming (raw export headers like
//! `weight<Links>` become `links`). Each loader converts its external row
//! shape into a `model` record at this boundary; nothing downstream sees
//! raw cells. Missing files surface as [`Error::Io`] and abort the run.

use std::path::Path;

use serde::Deserialize;

use crate::model::{AuthorNode, Publication, RawEdge};
use crate::{Error, Result};

// ============================================================================
// Publications (comma-separated, quoted, headered)
// ============================================================================

/// Raw publication row: every cell optional so a malformed export degrades
/// to missing values instead of aborting the table.
#[derive(Debug, Deserialize)]
struct PublicationRow {
    #[serde(rename = "Title", default)]
    title: Option<String>,
    #[serde(rename = "Year", default)]
    year: Option<String>,
    #[serde(rename = "Source title", default)]
    source_title: Option<String>,
    #[serde(rename = "Cited by", default)]
    cited_by: Option<String>,
    #[serde(rename = "Link", default)]
    link: Option<String>,
    #[serde(rename = "Authors", default)]
    authors: Option<String>,
    #[serde(rename = "Author(s) ID", default)]
    author_ids: Option<String>,
}

impl From<PublicationRow> for Publication {
    fn from(row: PublicationRow) -> Self {
        Publication {
            title: row.title.unwrap_or_default(),
            year: row.year.as_deref().and_then(parse_year),
            source_title: row.source_title.unwrap_or_default(),
            cited_by: row
                .cited_by
                .as_deref()
                .and_then(|v| v.trim().parse::<i64>().ok())
                .unwrap_or(0),
            link: row.link.unwrap_or_default(),
            authors: row.authors.unwrap_or_default(),
            author_ids: row.author_ids.filter(|v| !v.trim().is_empty()),
        }
    }
}

/// Years occasionally arrive as floats ("2019.0") in hand-edited exports.
fn parse_year(cell: &str) -> Option<i32> {
    let cell = cell.trim();
    cell.parse::<i32>()
        .ok()
        .or_else(|| cell.parse::<f64>().ok().map(|y| y as i32))
}

pub fn load_publications(path: &Path) -> Result<Vec<Publication>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| csv_error(path, e))?;
    let mut rows = Vec::new();
    for record in reader.deserialize::<PublicationRow>() {
        let row = record.map_err(|e| csv_error(path, e))?;
        rows.push(Publication::from(row));
    }
    Ok(rows)
}

// ============================================================================
// Node map (tab-separated, VOSviewer headers)
// ============================================================================

#[derive(Debug, Deserialize)]
struct NodeRow {
    id: i64,
    label: String,
    x: f64,
    y: f64,
    cluster: i64,
    #[serde(rename = "weight<Links>")]
    links: f64,
    #[serde(rename = "weight<Total link strength>")]
    strength: f64,
    #[serde(rename = "weight<Documents>")]
    documents: f64,
    #[serde(rename = "weight<Citations>")]
    citations: f64,
    #[serde(rename = "weight<Norm. citations>")]
    norm_citations: f64,
    #[serde(rename = "score<Avg. pub. year>")]
    avg_pub_year: f64,
    #[serde(rename = "score<Avg. citations>")]
    avg_citations: f64,
    #[serde(rename = "score<Avg. norm. citations>")]
    avg_norm_citations: f64,
}

impl From<NodeRow> for AuthorNode {
    fn from(row: NodeRow) -> Self {
        AuthorNode {
            id: row.id,
            label: row.label,
            x: row.x,
            y: row.y,
            cluster: row.cluster,
            links: row.links,
            strength: row.strength,
            documents: row.documents,
            citations: row.citations,
            norm_citations: row.norm_citations,
            avg_pub_year: row.avg_pub_year,
            avg_citations: row.avg_citations,
            avg_norm_citations: row.avg_norm_citations,
            first_pub_year: None,
            last_pub_year: None,
            max_edge_weight: 0,
            node_color: String::new(),
        }
    }
}

pub fn load_nodes(path: &Path) -> Result<Vec<AuthorNode>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;
    let mut nodes = Vec::new();
    for record in reader.deserialize::<NodeRow>() {
        let row = record.map_err(|e| csv_error(path, e))?;
        nodes.push(AuthorNode::from(row));
    }
    Ok(nodes)
}

// ============================================================================
// Edge list (tab-separated, headerless)
// ============================================================================

pub fn load_edges(path: &Path) -> Result<Vec<RawEdge>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;
    let mut edges = Vec::new();
    for record in reader.deserialize::<(i64, i64, i64)>() {
        let (first_author, second_author, weight) = record.map_err(|e| csv_error(path, e))?;
        edges.push(RawEdge {
            first_author,
            second_author,
            weight,
        });
    }
    Ok(edges)
}

// ============================================================================
// Shared error mapping
// ============================================================================

/// File-not-found keeps its io identity so callers can distinguish a missing
/// source from a malformed one; everything else becomes a parse error.
fn csv_error(path: &Path, err: csv::Error) -> Error {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io) => Error::Io(io),
        _ => Error::Parse {
            file: path.display().to_string(),
            message,
        },
    }
}
