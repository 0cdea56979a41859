//! Organization-level bibliometric aggregates.

use crate::model::Publication;

/// h-index: the largest h such that h publications have >= h citations each.
pub fn h_index(citation_counts: &[i64]) -> usize {
    let mut counts = citation_counts.to_vec();
    counts.sort_unstable_by(|a, b| b.cmp(a));
    let mut h = 0;
    for (i, c) in counts.iter().enumerate() {
        let rank = (i + 1) as i64;
        if *c < rank {
            break;
        }
        h = i + 1;
    }
    h
}

/// Inclusive observed year range and per-year publication counts,
/// zero-filled for years with no publications. Publications without a year
/// are excluded from both.
pub fn publication_years(publications: &[Publication]) -> (Vec<i32>, Vec<usize>) {
    let observed: Vec<i32> = publications.iter().filter_map(|p| p.year).collect();
    let (Some(&min_year), Some(&max_year)) = (observed.iter().min(), observed.iter().max())
    else {
        return (Vec::new(), Vec::new());
    };

    let years: Vec<i32> = (min_year..=max_year).collect();
    let mut counts = vec![0usize; years.len()];
    for year in observed {
        counts[(year - min_year) as usize] += 1;
    }
    (years, counts)
}

/// Total citations over the publication table.
pub fn total_citations(publications: &[Publication]) -> i64 {
    publications.iter().map(|p| p.cited_by).sum()
}
