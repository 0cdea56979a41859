//! Pipeline configuration — data layout, matching thresholds, palette.
//!
//! Everything the pipeline needs to know about its environment is carried
//! here explicitly. There is no ambient state: two [`PipelineConfig`]s with
//! different roots can run side by side in one process.

use std::path::{Path, PathBuf};

/// File names under `{data_root}/{org_id}/`.
pub const THESAURUS_FILE: &str = "thesaurus_authors.txt";
pub const PUBLICATIONS_FILE: &str = "publications.csv";
pub const NODES_FILE: &str = "map.txt";
pub const EDGES_FILE: &str = "network.txt";

/// Cluster palette cycled via `(cluster - 1) mod len`.
pub const DEFAULT_PALETTE: [&str; 30] = [
    "#E87757", "#8DD4F6", "#F7A978", "#5E9DBE", "#AD9281", "#F9CD94",
    "#CAD892", "#F0ACB7", "#A0BA46", "#EB5A6D", "#758D46", "#F2C6C7",
    "#BDBDBD", "#83A061", "#EEADA7", "#80E3CD", "#E7A396", "#3C8782",
    "#EBCFB2", "#BAB9E1", "#EACE84", "#CCCBF2", "#F9F4BC", "#F3C9E4",
    "#FAF5AF", "#D9A1C0", "#969A60", "#F8E5EB", "#DDE48E", "#ED6C84",
];

/// Thresholds for the fuzzy name-matching strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThesaurusConfig {
    /// Minimum TF-IDF cosine similarity between two surnames.
    pub similarity_threshold: f64,
    /// Maximum surname length difference still considered a variant pair.
    pub max_surname_len_diff: usize,
}

impl Default for ThesaurusConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.8,
            max_surname_len_diff: 3,
        }
    }
}

/// Top-level configuration for one pipeline instance.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory holding one subdirectory per organization.
    pub data_root: PathBuf,
    pub thesaurus: ThesaurusConfig,
    /// Cluster colors, cycled by cluster id.
    pub palette: Vec<String>,
}

impl PipelineConfig {
    pub fn new(data_root: impl Into<PathBuf>) -> Self {
        Self {
            data_root: data_root.into(),
            thesaurus: ThesaurusConfig::default(),
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn with_thesaurus(mut self, thesaurus: ThesaurusConfig) -> Self {
        self.thesaurus = thesaurus;
        self
    }

    /// Resolve the source file set for one organization.
    pub fn org_paths(&self, org_id: &str) -> OrgPaths {
        OrgPaths::new(self.data_root.join(org_id))
    }
}

/// Paths to the four read-only source files of one organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgPaths {
    pub dir: PathBuf,
    pub thesaurus: PathBuf,
    pub publications: PathBuf,
    pub nodes: PathBuf,
    pub edges: PathBuf,
}

impl OrgPaths {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            thesaurus: dir.join(THESAURUS_FILE),
            publications: dir.join(PUBLICATIONS_FILE),
            nodes: dir.join(NODES_FILE),
            edges: dir.join(EDGES_FILE),
            dir,
        }
    }

    /// All four source files, in a fixed order.
    pub fn sources(&self) -> [&Path; 4] {
        [
            self.thesaurus.as_path(),
            self.publications.as_path(),
            self.nodes.as_path(),
            self.edges.as_path(),
        ]
    }

    /// Cache validity leans on this: existence is the only freshness signal.
    pub fn sources_exist(&self) -> bool {
        self.sources().iter().all(|p| p.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn org_paths_layout() {
        let paths = PipelineConfig::new("/data").org_paths("14346");
        assert_eq!(paths.dir, PathBuf::from("/data/14346"));
        assert_eq!(paths.publications, PathBuf::from("/data/14346/publications.csv"));
        assert_eq!(paths.edges, PathBuf::from("/data/14346/network.txt"));
    }

    #[test]
    fn default_thresholds() {
        let cfg = ThesaurusConfig::default();
        assert_eq!(cfg.similarity_threshold, 0.8);
        assert_eq!(cfg.max_surname_len_diff, 3);
    }
}
