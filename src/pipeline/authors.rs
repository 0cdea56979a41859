//! Author aggregation — per-author publication lists and year ranges.

use crate::model::{AuthorIndex, AuthorRecord, Publication};
use crate::thesaurus::Thesaurus;

/// Group publications by canonical author.
///
/// Each raw author cell is exploded one-entry-per-author after thesaurus
/// standardization, so one paper contributes to every listed author. The
/// returned index iterates in author order, which keeps downstream output
/// deterministic.
pub fn aggregate_authors(publications: &[Publication], thesaurus: &Thesaurus) -> AuthorIndex {
    let mut index = AuthorIndex::new();
    for publication in publications {
        for author in thesaurus.standardize(&publication.authors) {
            let record = index.entry(author).or_insert_with(AuthorRecord::default);
            record.titles.push(publication.title.clone());
            record.years.push(publication.year);
            record.source_titles.push(publication.source_title.clone());
            record.cited_by.push(publication.cited_by);
            record.links.push(publication.link.clone());
        }
    }
    for record in index.values_mut() {
        record.first_pub_year = record.years.iter().flatten().min().copied();
        record.last_pub_year = record.years.iter().flatten().max().copied();
    }
    index
}
