//! End-to-end pipeline tests over the on-disk fixture organization.

mod common;

use academnet::model::Element;
use academnet::{Pipeline, PipelineConfig};
use common::{write_fixture_org, ORG};
use pretty_assertions::assert_eq;

fn fixture_pipeline() -> (tempfile::TempDir, Pipeline) {
    let dir = tempfile::tempdir().unwrap();
    write_fixture_org(dir.path());
    let pipeline = Pipeline::new(PipelineConfig::new(dir.path()));
    (dir, pipeline)
}

// ============================================================================
// 1. Aggregate scalars of the fixture
// ============================================================================

#[test]
fn aggregates_match_the_fixture() {
    let (_dir, pipeline) = fixture_pipeline();
    let network = pipeline.prepare(ORG).unwrap();

    assert_eq!(network.num_publication, 2);
    assert_eq!(network.num_cites, 13);
    // [10, 3]: two publications with >= 2 citations each.
    assert_eq!(network.h_index, 2);
    assert_eq!(network.years, vec![2019, 2020, 2021]);
    assert_eq!(network.counts_publication_by_year, vec![1, 0, 1]);
}

// ============================================================================
// 2. Nodes: enrichment, scaling, colors
// ============================================================================

#[test]
fn nodes_are_enriched_and_rescaled() {
    let (_dir, pipeline) = fixture_pipeline();
    let network = pipeline.prepare(ORG).unwrap();

    assert_eq!(network.nodes.len(), 3);

    // Three nodes → coordinate span 1000; x was [0, 1, 2].
    let xs: Vec<f64> = network.nodes.iter().map(|n| n.x).collect();
    assert_eq!(xs, vec![0.0, 500.0, 1000.0]);

    let petrov = network.nodes.iter().find(|n| n.label == "petrov p.").unwrap();
    assert_eq!(petrov.max_edge_weight, 1);
    assert_eq!(petrov.first_pub_year, Some(2019));
    assert_eq!(petrov.last_pub_year, Some(2021));
    // Cluster 1 → first palette entry.
    assert_eq!(petrov.node_color, "#E87757");

    let sidorov = network.nodes.iter().find(|n| n.label == "sidorov s.").unwrap();
    assert_eq!(sidorov.node_color, "#8DD4F6");
    assert_eq!(sidorov.first_pub_year, Some(2021));
}

// ============================================================================
// 3. Edges: labels, positional ids, inherited colors
// ============================================================================

#[test]
fn edges_resolve_labels_and_inherit_source_color() {
    let (_dir, pipeline) = fixture_pipeline();
    let network = pipeline.prepare(ORG).unwrap();

    assert_eq!(network.edges.len(), 2);
    let first = &network.edges[0];
    assert_eq!(first.id, "edge-0");
    assert_eq!(first.source, "ivanov i.");
    assert_eq!(first.target, "petrov p.");
    assert_eq!(first.weight, 1);
    assert_eq!(first.color, "#E87757");

    let second = &network.edges[1];
    assert_eq!(second.id, "edge-1");
    assert_eq!(second.source, "petrov p.");
    assert_eq!(second.target, "sidorov s.");
}

// ============================================================================
// 4. Elements: node records first, edge records after, display labels
// ============================================================================

#[test]
fn elements_are_nodes_then_edges() {
    let (_dir, pipeline) = fixture_pipeline();
    let network = pipeline.prepare(ORG).unwrap();

    assert_eq!(network.elements.len(), 5);
    match &network.elements[0] {
        Element::Node(node) => {
            assert_eq!(node.data.id, "ivanov i.");
            assert_eq!(node.data.label, "Ivanov I.");
            assert_eq!(node.data.val, 1.0);
        }
        Element::Edge(_) => panic!("expected node element first"),
    }
    match &network.elements[3] {
        Element::Edge(edge) => assert_eq!(edge.data.id, "edge-0"),
        Element::Node(_) => panic!("expected edge element after the nodes"),
    }
}

// ============================================================================
// 5. Stylesheet and metric options
// ============================================================================

#[test]
fn stylesheet_and_options_cover_the_metric_whitelists() {
    let (_dir, pipeline) = fixture_pipeline();
    let network = pipeline.prepare(ORG).unwrap();

    assert_eq!(network.stylesheet.len(), 2);
    assert_eq!(network.stylesheet[0].selector, "node");
    let width = network.stylesheet[0].style["width"].as_str().unwrap();
    assert_eq!(width, "mapData(val, 1, 2, 10, 40)");

    let size_keys: Vec<&str> =
        network.size_options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(
        size_keys,
        vec!["Links", "Strength", "Documents", "Citations", "Norm_citations"]
    );
    let color_keys: Vec<&str> =
        network.color_options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(
        color_keys,
        vec![
            "Avg_pub_year",
            "First_pub_year",
            "Last_pub_year",
            "Avg_citations",
            "Avg_norm_citations"
        ]
    );

    assert_eq!(network.metrics_bounds.len(), 10);
    let citations = &network.metrics_bounds["Citations"];
    assert_eq!(citations.min, 3.0);
    assert_eq!(citations.max, 13.0);
}

// ============================================================================
// 6. Coauthor index exactness
// ============================================================================

#[test]
fn coauthor_index_maps_each_edge_to_its_joint_publications() {
    let (_dir, pipeline) = fixture_pipeline();
    pipeline.prepare(ORG).unwrap();

    let coauthors = pipeline.cache().load_coauthors(ORG).unwrap();
    assert_eq!(coauthors.len(), 2);
    assert_eq!(coauthors[&0].len(), 1);
    assert_eq!(coauthors[&0][0].title, "P1");
    assert_eq!(coauthors[&1].len(), 1);
    assert_eq!(coauthors[&1][0].title, "P2");
}

// ============================================================================
// 7. Author index for the detail panel
// ============================================================================

#[test]
fn author_index_collects_publication_lists() {
    let (_dir, pipeline) = fixture_pipeline();
    pipeline.prepare(ORG).unwrap();

    let authors = pipeline.cache().load_authors(ORG).unwrap();
    let petrov = &authors["petrov p."];
    assert_eq!(petrov.titles, vec!["P1", "P2"]);
    assert_eq!(petrov.cited_by, vec![10, 3]);
    assert_eq!(petrov.first_pub_year, Some(2019));
    assert_eq!(petrov.last_pub_year, Some(2021));
}

// ============================================================================
// 8. Determinism: two cold runs agree byte for byte
// ============================================================================

#[test]
fn independent_runs_are_identical() {
    let (_dir, pipeline) = fixture_pipeline();
    let first = pipeline.prepare_uncached(ORG).unwrap();
    let second = pipeline.prepare_uncached(ORG).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
