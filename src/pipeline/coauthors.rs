//! Coauthor pair indexing — edge id → jointly authored publications.

use std::collections::BTreeSet;

use hashbrown::HashMap;

use crate::model::{CoauthorIndex, Edge, JointPublication, Publication};
use crate::thesaurus::Thesaurus;

/// For every publication, generate all unordered pairs of its standardized
/// authors and append the publication to each pair that corresponds to a
/// known edge.
///
/// Authors are deduplicated before pair generation, so a paper whose raw
/// spellings collapse to one canonical name cannot pair that name with
/// itself. This is the dominant cost of the pipeline:
/// O(publications × authors²).
pub fn build_coauthor_index(
    publications: &[Publication],
    thesaurus: &Thesaurus,
    edges: &[Edge],
) -> CoauthorIndex {
    // Sorted label pair → positional edge index.
    let mut pair_to_edge: HashMap<(&str, &str), usize> = HashMap::with_capacity(edges.len());
    for (index, edge) in edges.iter().enumerate() {
        let (a, b) = sorted_pair(&edge.source, &edge.target);
        pair_to_edge.insert((a, b), index);
    }

    let mut index = CoauthorIndex::new();
    for publication in publications {
        let authors: BTreeSet<String> =
            thesaurus.standardize(&publication.authors).into_iter().collect();
        let authors: Vec<&String> = authors.iter().collect();
        for i in 0..authors.len() {
            for j in i + 1..authors.len() {
                let Some(&edge_index) = pair_to_edge.get(&(authors[i].as_str(), authors[j].as_str()))
                else {
                    continue;
                };
                index.entry(edge_index).or_default().push(JointPublication {
                    title: publication.title.clone(),
                    year: publication.year,
                    source_title: publication.source_title.clone(),
                    cited_by: publication.cited_by,
                    link: publication.link.clone(),
                });
            }
        }
    }
    index
}

fn sorted_pair<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn publication(title: &str, authors: &str) -> Publication {
        Publication {
            title: title.into(),
            year: Some(2020),
            source_title: "J. Test".into(),
            cited_by: 2,
            link: String::new(),
            authors: authors.into(),
            author_ids: None,
        }
    }

    fn edge(index: usize, source: &str, target: &str) -> Edge {
        Edge {
            id: Edge::id_for(index),
            source: source.into(),
            target: target.into(),
            weight: 1,
            color: String::new(),
        }
    }

    #[test]
    fn joint_publications_land_on_their_edge() {
        let edges = vec![edge(0, "ivanov i.", "petrov p."), edge(1, "petrov p.", "sidorov s.")];
        let pubs = vec![
            publication("P1", "Ivanov I.; Petrov P."),
            publication("P2", "Petrov P.; Sidorov S."),
        ];
        let index = build_coauthor_index(&pubs, &Thesaurus::new(), &edges);

        assert_eq!(index[&0].len(), 1);
        assert_eq!(index[&0][0].title, "P1");
        assert_eq!(index[&1].len(), 1);
        assert_eq!(index[&1][0].title, "P2");
    }

    #[test]
    fn pair_order_in_the_edge_file_does_not_matter() {
        // Edge stored as (petrov, ivanov); pair generation sorts.
        let edges = vec![edge(0, "petrov p.", "ivanov i.")];
        let pubs = vec![publication("P1", "Ivanov I.; Petrov P.")];
        let index = build_coauthor_index(&pubs, &Thesaurus::new(), &edges);
        assert_eq!(index[&0].len(), 1);
    }

    #[test]
    fn collapsed_duplicate_authors_do_not_self_pair() {
        let mut thesaurus = Thesaurus::new();
        thesaurus.insert("Ivanov I.V.", "Ivanov I.");
        let edges = vec![edge(0, "ivanov i.", "ivanov i.")];
        let pubs = vec![publication("P1", "Ivanov I.; Ivanov I.V.")];
        let index = build_coauthor_index(&pubs, &thesaurus, &edges);
        assert!(index.is_empty());
    }

    #[test]
    fn unrelated_publications_stay_off_the_edge() {
        let edges = vec![edge(0, "ivanov i.", "petrov p.")];
        let pubs = vec![
            publication("P1", "Ivanov I.; Petrov P.; Sidorov S."),
            publication("P2", "Ivanov I.; Sidorov S."),
        ];
        let index = build_coauthor_index(&pubs, &Thesaurus::new(), &edges);
        assert_eq!(index[&0].len(), 1);
        assert_eq!(index[&0][0].title, "P1");
    }
}
