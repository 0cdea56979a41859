//! The typed records that cross all pipeline boundaries.
//!
//! Source rows are validated into these structs at the load boundary;
//! downstream stages never see loosely-typed key/value rows.

mod author;
mod contract;
mod edge;
mod node;
mod publication;

pub use author::{AuthorIndex, AuthorRecord, CoauthorIndex, JointPublication};
pub use contract::{
    EdgeElement, EdgeElementData, Element, MetricBounds, MetricOption, NetworkData, NodeElement,
    NodeElementData, Position, StyleRule,
};
pub use edge::{Edge, RawEdge};
pub use node::AuthorNode;
pub use publication::Publication;
