//! Graph assembly — the render-ready contract.
//!
//! Merges the node and edge tables with the author aggregates, scales
//! coordinates, assigns cluster colors, computes the global aggregates and
//! emits elements, stylesheet, metric options and bounds.

use std::collections::BTreeMap;

use chrono::Datelike;
use hashbrown::HashMap;
use serde_json::json;

use super::metrics::{h_index, publication_years, total_citations};
use crate::model::{
    AuthorIndex, AuthorNode, Edge, EdgeElement, EdgeElementData, Element, MetricBounds,
    MetricOption, NetworkData, NodeElement, NodeElementData, Position, Publication, RawEdge,
    StyleRule,
};
use crate::{Error, Result};

/// Size metrics: contract column key and display label.
const SIZE_METRICS: [(&str, &str); 5] = [
    ("Links", "Количество связей"),
    ("Strength", "Индекс связанности"),
    ("Documents", "Число публикаций"),
    ("Citations", "Число цитирований"),
    ("Norm_citations", "Норм. цитирования"),
];

/// Color metrics: contract column key and display label.
const COLOR_METRICS: [(&str, &str); 5] = [
    ("Avg_pub_year", "Ср. год публикаций"),
    ("First_pub_year", "Год первой публикации"),
    ("Last_pub_year", "Год последней публикации"),
    ("Avg_citations", "Ср. число цитирований"),
    ("Avg_norm_citations", "Ср. норм. цитирования"),
];

/// Build the full published contract from the loaded tables.
pub fn assemble(
    publications: &[Publication],
    mut nodes: Vec<AuthorNode>,
    raw_edges: &[RawEdge],
    author_index: &AuthorIndex,
    palette: &[String],
) -> Result<NetworkData> {
    // Edge endpoints: author ids → canonical labels.
    let label_of: HashMap<i64, String> =
        nodes.iter().map(|n| (n.id, n.label.clone())).collect();
    let resolve = |id: i64| -> Result<String> {
        label_of
            .get(&id)
            .cloned()
            .ok_or(Error::UnknownAuthorId(id))
    };
    let endpoints: Vec<(String, String, i64)> = raw_edges
        .iter()
        .map(|e| Ok((resolve(e.first_author)?, resolve(e.second_author)?, e.weight)))
        .collect::<Result<_>>()?;

    // Max edge weight per node; isolates stay at 0.
    let mut max_weight: HashMap<&str, i64> = HashMap::new();
    for (source, target, weight) in &endpoints {
        for label in [source.as_str(), target.as_str()] {
            let entry = max_weight.entry(label).or_insert(0);
            *entry = (*entry).max(*weight);
        }
    }
    for node in &mut nodes {
        node.max_edge_weight = max_weight.get(node.label.as_str()).copied().unwrap_or(0);
    }
    drop(max_weight);

    // Impossible years from malformed source data.
    let year_now = f64::from(chrono::Local::now().year());
    for node in &mut nodes {
        if node.avg_pub_year > year_now {
            node.avg_pub_year = year_now;
        }
    }

    // Coordinates into the step-sized square.
    let xs = scale_coordinates(&nodes.iter().map(|n| n.x).collect::<Vec<_>>());
    let ys = scale_coordinates(&nodes.iter().map(|n| n.y).collect::<Vec<_>>());
    for (node, (x, y)) in nodes.iter_mut().zip(xs.into_iter().zip(ys)) {
        node.x = x;
        node.y = y;
    }

    // Cluster colors and publication year ranges.
    for node in &mut nodes {
        node.node_color = cluster_color(palette, node.cluster).to_string();
        if let Some(record) = author_index.get(&node.label) {
            node.first_pub_year = record.first_pub_year;
            node.last_pub_year = record.last_pub_year;
        }
    }

    // Finalized edges inherit the source node's cluster color.
    let color_of: HashMap<&str, &str> = nodes
        .iter()
        .map(|n| (n.label.as_str(), n.node_color.as_str()))
        .collect();
    let edges: Vec<Edge> = endpoints
        .into_iter()
        .enumerate()
        .map(|(index, (source, target, weight))| {
            let color = color_of
                .get(source.as_str())
                .map(|c| (*c).to_string())
                .ok_or_else(|| Error::Assemble(format!("edge source {source} has no node")))?;
            Ok(Edge {
                id: Edge::id_for(index),
                source,
                target,
                weight,
                color,
            })
        })
        .collect::<Result<_>>()?;
    drop(color_of);

    // Elements: all nodes, then all edges, in source order.
    let mut elements: Vec<Element> = Vec::with_capacity(nodes.len() + edges.len());
    for node in &nodes {
        elements.push(Element::Node(NodeElement {
            data: NodeElementData {
                id: node.label.clone(),
                label: title_case(&node.label),
                val: node.links,
                links: node.links,
                strength: node.strength,
                documents: node.documents,
                citations: node.citations,
                norm_citations: node.norm_citations,
                avg_pub_year: node.avg_pub_year,
                first_pub_year: node.first_pub_year,
                last_pub_year: node.last_pub_year,
                avg_citations: node.avg_citations,
                avg_norm_citations: node.avg_norm_citations,
                color: node.node_color.clone(),
                cluster: node.cluster,
                max_edge_weight: node.max_edge_weight,
            },
            position: Position { x: node.x, y: node.y },
        }));
    }
    for edge in &edges {
        elements.push(Element::Edge(EdgeElement {
            data: EdgeElementData {
                id: edge.id.clone(),
                source: edge.source.clone(),
                target: edge.target.clone(),
                weight: edge.weight,
                color: edge.color.clone(),
            },
        }));
    }

    let stylesheet = base_stylesheet(&nodes);
    let (size_options, color_options, metrics_bounds) = metric_options(&nodes);
    let (years, counts_publication_by_year) = publication_years(publications);
    let citation_counts: Vec<i64> = publications.iter().map(|p| p.cited_by).collect();

    Ok(NetworkData {
        elements,
        stylesheet,
        size_options,
        color_options,
        metrics_bounds,
        num_publication: publications.len(),
        num_cites: total_citations(publications),
        h_index: h_index(&citation_counts),
        years,
        counts_publication_by_year,
        nodes,
        edges,
    })
}

// ============================================================================
// Coordinate rescaling
// ============================================================================

/// Target span grows stepwise with node count so dense maps get room.
fn coordinate_span(count: usize) -> f64 {
    match count {
        0..100 => 1000.0,
        100..500 => 2000.0,
        500..1000 => 3000.0,
        1000..3000 => 4000.0,
        3000..4000 => 5000.0,
        _ => 6000.0,
    }
}

/// Linearly rescale into `[0, span]`. A constant series (or a single node)
/// has no usable extent and maps to the midpoint.
pub fn scale_coordinates(values: &[f64]) -> Vec<f64> {
    let span = coordinate_span(values.len());
    let old_min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let old_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if old_max <= old_min {
        return vec![span / 2.0; values.len()];
    }
    values
        .iter()
        .map(|v| (v - old_min) * span / (old_max - old_min))
        .collect()
}

// ============================================================================
// Cluster colors
// ============================================================================

/// Deterministic palette assignment: `(cluster - 1) mod len`, independent of
/// how many clusters exist.
pub fn cluster_color(palette: &[String], cluster: i64) -> &str {
    let index = (cluster - 1).rem_euclid(palette.len() as i64) as usize;
    &palette[index]
}

// ============================================================================
// Stylesheet, options, bounds
// ============================================================================

fn base_stylesheet(nodes: &[AuthorNode]) -> Vec<StyleRule> {
    let (val_min, val_max) = column_bounds(nodes, "Links");
    let node_style = BTreeMap::from([
        ("width".to_string(), json!(format!("mapData(val, {val_min}, {val_max}, 10, 40)"))),
        ("height".to_string(), json!(format!("mapData(val, {val_min}, {val_max}, 10, 40)"))),
        ("background-color".to_string(), json!("data(color)")),
        ("label".to_string(), json!("data(label)")),
        ("font-size".to_string(), json!(format!("mapData(val, {val_min}, {val_max}, 7, 17)"))),
        ("opacity".to_string(), json!(0.85)),
        ("text-halign".to_string(), json!("center")),
        ("text-valign".to_string(), json!("center")),
    ]);
    let edge_style = BTreeMap::from([
        ("width".to_string(), json!("1")),
        ("line-color".to_string(), json!("data(color)")),
        ("line-opacity".to_string(), json!(0.3)),
        ("opacity".to_string(), json!(0.7)),
        ("label".to_string(), json!("data(weight)")),
        ("font-size".to_string(), json!("6px")),
        ("text-rotation".to_string(), json!("autorotate")),
        ("text-background-color".to_string(), json!("#EEECE3")),
        ("text-background-opacity".to_string(), json!(0.6)),
        ("text-background-shape".to_string(), json!("roundrectangle")),
    ]);
    vec![
        StyleRule { selector: "node".to_string(), style: node_style },
        StyleRule { selector: "edge".to_string(), style: edge_style },
    ]
}

fn metric_options(
    nodes: &[AuthorNode],
) -> (Vec<MetricOption>, Vec<MetricOption>, BTreeMap<String, MetricBounds>) {
    let mut bounds = BTreeMap::new();
    let mut size_options = Vec::with_capacity(SIZE_METRICS.len());
    for (value, label) in SIZE_METRICS {
        size_options.push(MetricOption { label: label.to_string(), value: value.to_string() });
        let (min, max) = column_bounds(nodes, value);
        bounds.insert(value.to_string(), MetricBounds { min, max });
    }
    let mut color_options = Vec::with_capacity(COLOR_METRICS.len());
    for (value, label) in COLOR_METRICS {
        color_options.push(MetricOption { label: label.to_string(), value: value.to_string() });
        let (min, max) = column_bounds(nodes, value);
        bounds.insert(value.to_string(), MetricBounds { min, max });
    }
    (size_options, color_options, bounds)
}

/// Min/max over one metric column, skipping nodes where it is unset.
/// Degenerate (no values at all) collapses to 0 so the bounds stay finite.
fn column_bounds(nodes: &[AuthorNode], column: &str) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for node in nodes {
        if let Some(v) = node.metric(column) {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if min > max {
        (0.0, 0.0)
    } else {
        (min, max)
    }
}

// ============================================================================
// Display labels
// ============================================================================

/// Title-case a canonical lowercase name: first letter of every alphabetic
/// run uppercased, the rest lowercased.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
