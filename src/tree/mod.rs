//! Session document tree
//!
//! An arena-backed strict tree: nodes are owned by the [`Tree`] and
//! addressed through copyable [`NodeId`] handles. Children keep insertion
//! order, which is the nesting order of the serialized output. Nodes are
//! never reparented or deleted.

mod builder;
mod node;

pub use builder::{validate_contour, validate_window_layout};
pub use node::{Node, NodeId, PreOrder, Tree};
