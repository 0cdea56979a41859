//! # academnet — Co-authorship Network Preparation
//!
//! Turns raw bibliographic exports for one organization into a deduplicated
//! author graph with derived bibliometric statistics, ready to hand to a
//! rendering layer. Rendering itself is out of scope: the output of this
//! crate is a plain data contract ([`NetworkData`]).
//!
//! ## Design Principles
//!
//! 1. **Typed records**: `Publication`, `AuthorNode`, `Edge` cross all boundaries
//! 2. **Explicit configuration**: no ambient paths — a [`PipelineConfig`] is passed in
//! 3. **Cache faults never fail the caller**: probe/write outcomes are explicit
//!    `Result`s that the orchestrator chooses to ignore
//! 4. **Deterministic output**: identical inputs produce identical records
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use academnet::{Pipeline, PipelineConfig};
//!
//! # fn example() -> academnet::Result<()> {
//! let pipeline = Pipeline::new(PipelineConfig::new("org_data/processed"));
//! let network = pipeline.prepare("14346")?;
//! println!("{} publications, h-index {}", network.num_publication, network.h_index);
//! # Ok(())
//! # }
//! ```
//!
//! ## Pipeline Stages
//!
//! | Stage | Module | Description |
//! |-------|--------|-------------|
//! | Thesaurus | [`thesaurus`] | author-name variants → canonical identities |
//! | Loaders | [`loader`] | publications / node map / edge list parsing |
//! | Aggregation | [`pipeline`] | per-author publication lists and year ranges |
//! | Pair index | [`pipeline`] | edge id → jointly authored publications |
//! | Assembly | [`pipeline`] | elements, stylesheet, metrics, aggregates |
//! | Cache | [`cache`] | freshness-checked artifact store |

// ============================================================================
// Modules
// ============================================================================

pub mod cache;
pub mod config;
pub mod loader;
pub mod model;
pub mod orgs;
pub mod pipeline;
pub mod thesaurus;

// ============================================================================
// Re-exports: Model (the records)
// ============================================================================

pub use model::{
    AuthorNode, AuthorRecord, Edge, JointPublication, NetworkData, Publication, RawEdge,
};

// ============================================================================
// Re-exports: Configuration
// ============================================================================

pub use config::{OrgPaths, PipelineConfig};

// ============================================================================
// Re-exports: Pipeline entry point
// ============================================================================

pub use pipeline::Pipeline;

// ============================================================================
// Re-exports: Cache and thesaurus
// ============================================================================

pub use cache::CacheStore;
pub use thesaurus::Thesaurus;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("table parse error in {file}: {message}")]
    Parse { file: String, message: String },

    #[error("thesaurus error: {0}")]
    Thesaurus(String),

    #[error("unknown author id {0} in edge list")]
    UnknownAuthorId(i64),

    #[error("assembly error: {0}")]
    Assemble(String),

    #[error("cache error: {0}")]
    Cache(String),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
