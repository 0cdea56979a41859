//! Collaboration edges.

use serde::{Deserialize, Serialize};

/// One row of the edge list file: two node ids and a joint publication count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEdge {
    pub first_author: i64,
    pub second_author: i64,
    pub weight: i64,
}

/// A finalized collaboration edge: endpoints resolved to canonical labels,
/// id assigned positionally, color inherited from the source node.
///
/// Edge ids are positional indices into the edge list, so they stay in
/// correspondence with the coauthor index only while both are produced by
/// the same run over the same source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    /// Joint publication count, >= 1.
    pub weight: i64,
    pub color: String,
}

impl Edge {
    /// Positional edge id, shared with the coauthor index keys.
    pub fn id_for(index: usize) -> String {
        format!("edge-{index}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_ids() {
        assert_eq!(Edge::id_for(0), "edge-0");
        assert_eq!(Edge::id_for(41), "edge-41");
    }
}
