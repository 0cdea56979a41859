//! Cache behavior: freshness probing, fallback, and its documented limits.

mod common;

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
// 1. Warm cache serves the same result
// ============================================================================

#[test]
fn second_call_is_served_from_cache_and_equal() {
    let (dir, pipeline) = fixture_pipeline();
    let cold = pipeline.prepare(ORG).unwrap();

    for artifact in ["cache.json", "cache_authors.json", "cache_coauthors.json"] {
        assert!(dir.path().join(ORG).join(artifact).exists());
    }

    let warm = pipeline.prepare(ORG).unwrap();
    assert_eq!(cold, warm);
}

// ============================================================================
// 2. Deleting a source invalidates the cache
// ============================================================================

#[test]
fn missing_source_forces_recomputation() {
    let (dir, pipeline) = fixture_pipeline();
    pipeline.prepare(ORG).unwrap();

    std::fs::remove_file(dir.path().join(ORG).join("network.txt")).unwrap();

    let paths = pipeline.config().org_paths(ORG);
    assert!(!pipeline.cache().is_valid(ORG, &paths));

    // Recomputation aborts on the missing edge list instead of serving the
    // stale cached object.
    let err = pipeline.prepare(ORG).unwrap_err();
    assert!(matches!(err, academnet::Error::Io(_)));
}

// ============================================================================
// 3. In-place edits are NOT detected (existence is the only signal)
// ============================================================================

#[test]
fn in_place_source_edit_serves_stale_data() {
    let (dir, pipeline) = fixture_pipeline();
    let cold = pipeline.prepare(ORG).unwrap();
    assert_eq!(cold.edges.len(), 2);

    // Add a third edge without touching the cache artifacts.
    std::fs::write(dir.path().join(ORG).join("network.txt"), "1\t2\t1\n2\t3\t1\n1\t3\t1\n")
        .unwrap();

    let stale = pipeline.prepare(ORG).unwrap();
    assert_eq!(stale.edges.len(), 2);

    // Deleting the full-result artifact picks the edit up.
    std::fs::remove_file(dir.path().join(ORG).join("cache.json")).unwrap();
    let fresh = pipeline.prepare(ORG).unwrap();
    assert_eq!(fresh.edges.len(), 3);
}

// ============================================================================
// 4. Unreadable artifact falls through to recomputation
// ============================================================================

#[test]
fn corrupt_cache_recomputes_instead_of_failing() {
    let (dir, pipeline) = fixture_pipeline();
    let cold = pipeline.prepare(ORG).unwrap();

    std::fs::write(dir.path().join(ORG).join("cache.json"), b"{ truncated").unwrap();

    let recovered = pipeline.prepare(ORG).unwrap();
    assert_eq!(cold, recovered);
}

// ============================================================================
// 5. Cached and fresh results are observationally equal
// ============================================================================

#[test]
fn cache_roundtrip_reproduces_fresh_computation() {
    let (_dir, pipeline) = fixture_pipeline();
    let fresh = pipeline.prepare_uncached(ORG).unwrap();
    pipeline.prepare(ORG).unwrap();
    let cached = pipeline.prepare(ORG).unwrap();
    assert_eq!(fresh, cached);
}
