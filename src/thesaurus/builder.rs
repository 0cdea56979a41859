//! Thesaurus construction — two disambiguation strategies.
//!
//! When the export carries an `Author(s) ID` column the mapping is exact:
//! names are zipped positionally against IDs and the first spelling seen for
//! an ID becomes canonical. Without IDs the builder falls back to fuzzy
//! surname matching over normalized, transliterated names.
//!
//! The fuzzy scan is order-dependent by contract: indices are processed
//! ascending, the earlier name always wins as canonical, and a name that has
//! been mapped is never reconsidered on either side. Do not parallelize it.

use hashbrown::{HashMap, HashSet};
use tracing::info;

use super::normalize::{ready_form, surname_initials};
use super::tfidf::CharGramTfidf;
use super::Thesaurus;
use crate::config::ThesaurusConfig;
use crate::model::Publication;

/// Build the canonical-name mapping for one organization's publications.
pub fn build_author_thesaurus(
    publications: &[Publication],
    config: &ThesaurusConfig,
) -> Thesaurus {
    let use_ids = publications.iter().any(|p| p.author_ids.is_some());
    let thesaurus = if use_ids {
        id_based(publications)
    } else {
        fuzzy(publications, config)
    };
    info!(
        variants = thesaurus.len(),
        strategy = if use_ids { "id" } else { "fuzzy" },
        "author thesaurus built"
    );
    thesaurus
}

// ============================================================================
// ID-based strategy
// ============================================================================

/// Zip names against IDs row by row, truncating to the shorter list; the
/// first spelling seen for an ID is canonical, later differing spellings
/// become variants. A name already serving as some ID's canonical form is
/// never recorded as a variant, which keeps replacement idempotent.
fn id_based(publications: &[Publication]) -> Thesaurus {
    let mut id_to_canonical: HashMap<String, String> = HashMap::new();
    let mut canonicals: HashSet<String> = HashSet::new();
    let mut thesaurus = Thesaurus::new();

    for publication in publications {
        let Some(raw_ids) = publication.author_ids.as_deref() else {
            continue;
        };
        let names: Vec<&str> = Publication::split_semicolon(&publication.authors).collect();
        let ids = Publication::split_semicolon(raw_ids);

        for (aid, aname) in ids.zip(names) {
            match id_to_canonical.get(aid) {
                None => {
                    // Resolve through existing variants so a known variant
                    // never becomes a fresh canonical form.
                    let canonical = thesaurus.canonical(aname).to_string();
                    canonicals.insert(canonical.clone());
                    id_to_canonical.insert(aid.to_string(), canonical);
                }
                Some(canonical) => {
                    if aname != canonical.as_str() && !canonicals.contains(aname) {
                        let canonical = canonical.clone();
                        thesaurus.insert(aname, canonical);
                    }
                }
            }
        }
    }

    thesaurus
}

// ============================================================================
// Fuzzy strategy
// ============================================================================

/// Pairwise surname comparison over TF-IDF cosine similarity, gated by
/// initials compatibility, surname length difference, and the trailing-'a'
/// suffix heuristic. O(n²) over distinct names; acceptable because candidate
/// lists are bounded per organization.
fn fuzzy(publications: &[Publication], config: &ThesaurusConfig) -> Thesaurus {
    let names = distinct_author_names(publications);

    let ready: Vec<String> = names.iter().map(|n| ready_form(n)).collect();
    let (surnames, initials): (Vec<String>, Vec<String>) =
        ready.iter().map(|r| surname_initials(r)).unzip();

    let matrix = CharGramTfidf::fit(&surnames);

    let mut thesaurus = Thesaurus::new();
    for i in 0..names.len() {
        if thesaurus.contains(&names[i]) {
            continue;
        }
        for j in i + 1..names.len() {
            if thesaurus.contains(&names[j]) {
                continue;
            }
            if matrix.similarity(i, j) < config.similarity_threshold {
                continue;
            }
            if !initials_compatible(&initials[i], &initials[j]) {
                continue;
            }
            let (a, b) = (&surnames[i], &surnames[j]);
            if a.len().abs_diff(b.len()) > config.max_surname_len_diff {
                continue;
            }
            // Exactly one surname ending in 'a' signals a gendered suffix
            // pair — different people.
            if a.ends_with('a') != b.ends_with('a') {
                continue;
            }
            let canonical = names[i].clone();
            thesaurus.insert(names[j].clone(), canonical);
        }
    }

    thesaurus
}

/// Distinct trimmed author names in first-seen order, "et al." entries
/// dropped.
fn distinct_author_names(publications: &[Publication]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut names = Vec::new();
    for publication in publications {
        if publication.authors.trim().is_empty() {
            continue;
        }
        for part in publication.authors.split("; ") {
            let name = part.trim();
            if name.is_empty() || !seen.insert(name.to_string()) {
                continue;
            }
            let lower = name.to_lowercase();
            if lower.ends_with("et al.") || lower.ends_with("et al") {
                continue;
            }
            names.push(name.to_string());
        }
    }
    names
}

/// Initials compatibility: split on '.', the shorter list must be a prefix
/// of the longer; equal-length lists must match exactly.
fn initials_compatible(a: &str, b: &str) -> bool {
    let a_parts: Vec<&str> = a.split('.').collect();
    let b_parts: Vec<&str> = b.split('.').collect();
    if a_parts.len() == b_parts.len() {
        return a_parts == b_parts;
    }
    let (shorter, longer) = if a_parts.len() < b_parts.len() {
        (&a_parts, &b_parts)
    } else {
        (&b_parts, &a_parts)
    };
    shorter[..] == longer[..shorter.len()]
}
