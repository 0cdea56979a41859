//! Character 1–2-gram TF-IDF vectors with cosine similarity.
//!
//! Matches the conventional smoothed formulation: raw term counts,
//! `idf = ln((1 + n) / (1 + df)) + 1`, L2-normalized rows. Cosine between
//! two documents is then a sparse dot product.

use std::collections::BTreeMap;

use hashbrown::HashMap;

/// TF-IDF rows fitted over one document set.
pub struct CharGramTfidf {
    /// Per document: sorted `(term id, weight)` pairs, L2-normalized.
    rows: Vec<Vec<(u32, f64)>>,
}

impl CharGramTfidf {
    /// Fit over `docs`; vocabulary and ids are derived deterministically
    /// (terms sorted lexicographically).
    pub fn fit<S: AsRef<str>>(docs: &[S]) -> Self {
        let counts: Vec<HashMap<String, u32>> = docs
            .iter()
            .map(|d| char_gram_counts(d.as_ref()))
            .collect();

        // Document frequency per term, in sorted term order.
        let mut df: BTreeMap<&str, u32> = BTreeMap::new();
        for doc in &counts {
            for term in doc.keys() {
                *df.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        let n = docs.len() as f64;
        let mut term_ids: HashMap<&str, u32> = HashMap::with_capacity(df.len());
        let mut idf = Vec::with_capacity(df.len());
        for (id, (term, term_df)) in df.iter().enumerate() {
            term_ids.insert(*term, id as u32);
            idf.push(((1.0 + n) / (1.0 + f64::from(*term_df))).ln() + 1.0);
        }

        let rows = counts
            .iter()
            .map(|doc| {
                let mut row: Vec<(u32, f64)> = doc
                    .iter()
                    .map(|(term, tf)| {
                        let id = term_ids[term.as_str()];
                        (id, f64::from(*tf) * idf[id as usize])
                    })
                    .collect();
                row.sort_unstable_by_key(|(id, _)| *id);
                let norm = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    for (_, w) in &mut row {
                        *w /= norm;
                    }
                }
                row
            })
            .collect();

        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cosine similarity between documents `i` and `j`. An empty document
    /// has a zero vector and similarity 0 to everything.
    pub fn similarity(&self, i: usize, j: usize) -> f64 {
        let (a, b) = (&self.rows[i], &self.rows[j]);
        let (mut ai, mut bi) = (0, 0);
        let mut dot = 0.0;
        while ai < a.len() && bi < b.len() {
            match a[ai].0.cmp(&b[bi].0) {
                std::cmp::Ordering::Less => ai += 1,
                std::cmp::Ordering::Greater => bi += 1,
                std::cmp::Ordering::Equal => {
                    dot += a[ai].1 * b[bi].1;
                    ai += 1;
                    bi += 1;
                }
            }
        }
        dot
    }
}

/// Raw counts of all 1- and 2-grams of a string's characters.
fn char_gram_counts(doc: &str) -> HashMap<String, u32> {
    let chars: Vec<char> = doc.chars().collect();
    let mut counts = HashMap::new();
    for c in &chars {
        *counts.entry(c.to_string()).or_insert(0) += 1;
    }
    for pair in chars.windows(2) {
        *counts.entry(pair.iter().collect()).or_insert(0) += 1;
    }
    counts
}
