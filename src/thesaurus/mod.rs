//! Author-name thesaurus — variant spellings resolved to canonical identities.
//!
//! The mapping is built once per organization (see
//! [`build_author_thesaurus`]), persisted as a two-column TSV, and rebuilt
//! lazily only when the file is absent.
//!
//! Invariant: replacement is idempotent. No canonical name is itself a key,
//! so `canonical(canonical(n)) == canonical(n)` for every name.

mod builder;
mod normalize;
mod tfidf;

pub use builder::build_author_thesaurus;
pub use normalize::{ready_form, surname_initials};
pub use tfidf::CharGramTfidf;

use std::path::Path;

use hashbrown::HashMap;
use serde::Deserialize;
use smallvec::SmallVec;

use crate::{Error, Result};

/// Variant spelling → canonical form, with first-insertion ordering preserved
/// for persistence.
#[derive(Debug, Clone, Default)]
pub struct Thesaurus {
    map: HashMap<String, String>,
    order: Vec<String>,
}

impl Thesaurus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a variant → canonical mapping. A repeated key keeps its
    /// position and takes the new canonical value.
    pub fn insert(&mut self, variant: impl Into<String>, canonical: impl Into<String>) {
        let variant = variant.into();
        if !self.map.contains_key(&variant) {
            self.order.push(variant.clone());
        }
        self.map.insert(variant, canonical.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Resolve one raw name; unmapped names are their own canonical form.
    pub fn canonical<'a>(&'a self, raw: &'a str) -> &'a str {
        self.map.get(raw).map(String::as_str).unwrap_or(raw)
    }

    /// Mappings in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order
            .iter()
            .map(|k| (k.as_str(), self.map[k].as_str()))
    }

    /// Explode a raw semicolon-delimited author cell into canonical
    /// lowercase names: strip any "et al." fragment, trim, resolve through
    /// the mapping, lowercase.
    pub fn standardize(&self, raw_authors: &str) -> SmallVec<[String; 8]> {
        raw_authors
            .split(';')
            .map(|part| {
                let name = part.replace("et al.", "");
                let name = name.trim();
                self.canonical(name).to_lowercase()
            })
            .collect()
    }

    // ========================================================================
    // Persistence (TSV, header `Label\tReplace by`)
    // ========================================================================

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_path(path)
            .map_err(|e| Error::Thesaurus(e.to_string()))?;
        writer
            .write_record(["Label", "Replace by"])
            .map_err(|e| Error::Thesaurus(e.to_string()))?;
        for (label, replace_by) in self.iter() {
            writer
                .write_record([label, replace_by])
                .map_err(|e| Error::Thesaurus(e.to_string()))?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        #[derive(Deserialize)]
        struct Row {
            #[serde(rename = "Label")]
            label: String,
            #[serde(rename = "Replace by")]
            replace_by: String,
        }

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .from_path(path)
            .map_err(|e| match e.into_kind() {
                csv::ErrorKind::Io(io) => Error::Io(io),
                other => Error::Thesaurus(format!("{other:?}")),
            })?;
        let mut thesaurus = Self::new();
        for record in reader.deserialize::<Row>() {
            let row = record.map_err(|e| Error::Thesaurus(e.to_string()))?;
            thesaurus.insert(row.label, row.replace_by);
        }
        Ok(thesaurus)
    }
}
