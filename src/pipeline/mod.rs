//! Pipeline orchestration — from source files to the published contract.
//!
//! Stage order follows the data flow: thesaurus (built lazily on first
//! run) → loaders → author aggregation and coauthor pair indexing over the
//! same publication table → graph assembly → cache writes. Each run is
//! synchronous, single-threaded and idempotent given identical inputs.

mod assemble;
mod authors;
mod coauthors;
mod metrics;

pub use assemble::{assemble, cluster_color, scale_coordinates};
pub use authors::aggregate_authors;
pub use coauthors::build_coauthor_index;
pub use metrics::{h_index, publication_years, total_citations};

use tracing::{debug, warn};

use crate::cache::CacheStore;
use crate::config::PipelineConfig;
use crate::loader;
use crate::model::{AuthorIndex, CoauthorIndex, NetworkData};
use crate::thesaurus::{build_author_thesaurus, Thesaurus};
use crate::Result;

/// The primary entry point: a configured pipeline over one data root.
pub struct Pipeline {
    config: PipelineConfig,
    cache: CacheStore,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        let cache = CacheStore::new(&config.data_root);
        Self { config, cache }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The artifact store, also serving the detail-panel indexes.
    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    /// Prepare the network contract for one organization, serving from
    /// cache when the artifacts and all source files exist.
    ///
    /// Cache faults are explicitly non-fatal: an unreadable artifact falls
    /// through to recomputation, a failed write still returns the in-memory
    /// result.
    pub fn prepare(&self, org_id: &str) -> Result<NetworkData> {
        let paths = self.config.org_paths(org_id);
        if self.cache.is_valid(org_id, &paths) {
            if let Some(network) = self.cache.load_network(org_id) {
                return Ok(network);
            }
        } else {
            debug!(org_id, "cache invalid, recomputing");
        }

        let (network, author_index, coauthor_index) = self.compute(org_id)?;

        if let Err(err) = self.cache.store_authors(org_id, &author_index) {
            warn!(org_id, %err, "authors cache write failed");
        }
        if let Err(err) = self.cache.store_coauthors(org_id, &coauthor_index) {
            warn!(org_id, %err, "coauthors cache write failed");
        }
        if let Err(err) = self.cache.store_network(org_id, &network) {
            warn!(org_id, %err, "network cache write failed");
        }
        Ok(network)
    }

    /// Run the full computation without touching the cache. Two calls over
    /// unchanged sources produce identical results.
    pub fn prepare_uncached(&self, org_id: &str) -> Result<NetworkData> {
        self.compute(org_id).map(|(network, _, _)| network)
    }

    fn compute(&self, org_id: &str) -> Result<(NetworkData, AuthorIndex, CoauthorIndex)> {
        let paths = self.config.org_paths(org_id);

        let publications = loader::load_publications(&paths.publications)?;

        // The thesaurus is built once per organization and reused from disk
        // afterwards.
        let thesaurus = if paths.thesaurus.exists() {
            Thesaurus::load(&paths.thesaurus)?
        } else {
            let thesaurus = build_author_thesaurus(&publications, &self.config.thesaurus);
            thesaurus.save(&paths.thesaurus)?;
            thesaurus
        };

        let nodes = loader::load_nodes(&paths.nodes)?;
        let raw_edges = loader::load_edges(&paths.edges)?;

        let author_index = aggregate_authors(&publications, &thesaurus);
        let network = assemble(
            &publications,
            nodes,
            &raw_edges,
            &author_index,
            &self.config.palette,
        )?;
        let coauthor_index = build_coauthor_index(&publications, &thesaurus, &network.edges);

        Ok((network, author_index, coauthor_index))
    }
}
