//! Cache layer — per-organization pipeline artifacts on disk.
//!
//! Three independent artifacts per organization: the full pipeline result,
//! the author→publications index and the edge→joint-publications index.
//! Existence is the only freshness signal; editing a source file in place
//! without deleting the cache serves stale data. That is a documented
//! limitation of the format, not something this layer papers over.
//!
//! The artifacts are not kept mutually consistent: each write is
//! independent, and a failed write leaves the others in place. Writes for
//! one organization are serialized behind a mutex so two same-process runs
//! cannot interleave on the same file.

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::config::OrgPaths;
use crate::model::{AuthorIndex, CoauthorIndex, NetworkData};
use crate::{Error, Result};

pub const NETWORK_ARTIFACT: &str = "cache.json";
pub const AUTHORS_ARTIFACT: &str = "cache_authors.json";
pub const COAUTHORS_ARTIFACT: &str = "cache_coauthors.json";

/// On-disk artifact store rooted at the pipeline data directory.
pub struct CacheStore {
    root: PathBuf,
    locks: Mutex<hashbrown::HashMap<String, Arc<Mutex<()>>>>,
}

impl CacheStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            locks: Mutex::new(hashbrown::HashMap::new()),
        }
    }

    fn artifact_path(&self, org_id: &str, name: &str) -> PathBuf {
        self.root.join(org_id).join(name)
    }

    fn org_lock(&self, org_id: &str) -> Arc<Mutex<()>> {
        self.locks
            .lock()
            .entry(org_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Cache validity: the three artifacts and all four source files exist.
    /// No timestamps, no content hashes.
    pub fn is_valid(&self, org_id: &str, sources: &OrgPaths) -> bool {
        let artifacts_exist = [NETWORK_ARTIFACT, AUTHORS_ARTIFACT, COAUTHORS_ARTIFACT]
            .iter()
            .all(|name| self.artifact_path(org_id, name).exists());
        artifacts_exist && sources.sources_exist()
    }

    // ========================================================================
    // Full pipeline result
    // ========================================================================

    /// `None` on any read or deserialization failure: the caller falls
    /// through to recomputation instead of surfacing the fault.
    pub fn load_network(&self, org_id: &str) -> Option<NetworkData> {
        match self.load_json(org_id, NETWORK_ARTIFACT) {
            Ok(data) => {
                debug!(org_id, "cache hit");
                Some(data)
            }
            Err(err) => {
                debug!(org_id, %err, "cache unreadable, recomputing");
                None
            }
        }
    }

    pub fn store_network(&self, org_id: &str, data: &NetworkData) -> Result<()> {
        self.store_json(org_id, NETWORK_ARTIFACT, data)
    }

    // ========================================================================
    // Secondary indexes (read by the detail panels downstream)
    // ========================================================================

    pub fn load_authors(&self, org_id: &str) -> Result<AuthorIndex> {
        self.load_json(org_id, AUTHORS_ARTIFACT)
    }

    pub fn store_authors(&self, org_id: &str, index: &AuthorIndex) -> Result<()> {
        self.store_json(org_id, AUTHORS_ARTIFACT, index)
    }

    pub fn load_coauthors(&self, org_id: &str) -> Result<CoauthorIndex> {
        self.load_json(org_id, COAUTHORS_ARTIFACT)
    }

    pub fn store_coauthors(&self, org_id: &str, index: &CoauthorIndex) -> Result<()> {
        self.store_json(org_id, COAUTHORS_ARTIFACT, index)
    }

    // ========================================================================
    // Shared JSON plumbing
    // ========================================================================

    fn load_json<T: DeserializeOwned>(&self, org_id: &str, name: &str) -> Result<T> {
        let path = self.artifact_path(org_id, name);
        let file = std::fs::File::open(&path)?;
        let data = serde_json::from_reader(std::io::BufReader::new(file))?;
        Ok(data)
    }

    fn store_json<T: Serialize>(&self, org_id: &str, name: &str, data: &T) -> Result<()> {
        let lock = self.org_lock(org_id);
        let _guard = lock.lock();

        let path = self.artifact_path(org_id, name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::File::create(&path)
            .map_err(|e| Error::Cache(format!("create {}: {e}", path.display())))?;
        serde_json::to_writer(std::io::BufWriter::new(file), data)?;
        Ok(())
    }
}
