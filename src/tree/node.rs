//! Arena node storage and navigation
//!
//! # Main Types
//!
//! - [`NodeId`] - Copyable index handle into the arena
//! - [`Node`] - One document node: id, kind, payload, position bookkeeping
//! - [`Tree`] - The arena itself, created with its root in place

use crate::types::{NodeData, NodeKind};

/// Handle to a node in a [`Tree`]
///
/// Plain arena index. Handles are only meaningful for the tree that
/// produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// A single node of the session document
#[derive(Debug, Clone)]
pub struct Node {
    /// String id, unique by construction (stem + per-parent index)
    pub id: String,
    pub kind: NodeKind,
    /// Payload consumed by the renderer; `None` renders as empty text
    pub data: Option<NodeData>,
    /// Number of ancestors; the root sits at depth 0
    pub depth: usize,
    /// Position among this node's siblings, assigned at attach
    pub sibling_index: usize,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

/// The session document tree
///
/// Created with its root already in place: an `Identification` node with
/// id `"root"` carrying the producing application name and version. All
/// other nodes are added through [`Tree::attach`](crate::tree::Tree::attach).
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Create a tree whose root identifies the producing application
    pub fn new(gui: impl Into<String>, version: impl Into<String>) -> Self {
        let root = Node {
            id: "root".to_string(),
            kind: NodeKind::Identification,
            data: Some(NodeData::Identification {
                gui: gui.into(),
                version: version.into(),
            }),
            depth: 0,
            sibling_index: 0,
            parent: None,
            children: Vec::new(),
        };
        Self { nodes: vec![root] }
    }

    /// Handle of the root node
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Borrow a node; panics only on a handle from another tree
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut Vec<Node> {
        &mut self.nodes
    }

    /// Total node count, root included; never zero
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn is_root(&self, id: NodeId) -> bool {
        self.node(id).parent.is_none()
    }

    /// Whether `id` is the final child of its parent
    ///
    /// The root has no parent and is never a last sibling.
    pub fn is_last_sibling(&self, id: NodeId) -> bool {
        match self.node(id).parent {
            Some(parent) => self.node(parent).children.last() == Some(&id),
            None => false,
        }
    }

    /// Walk from `id`'s parent up to the root
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&n| self.parent(n))
    }

    /// Depth-first pre-order walk starting at the root
    ///
    /// Children are visited in insertion order, so the walk matches the
    /// nesting order of the serialized output.
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder {
            tree: self,
            stack: vec![self.root()],
        }
    }

    /// Look a node up by its string id
    pub fn find(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.id == id)
            .map(NodeId)
    }

    /// Nearest ancestor of the given kind, starting from `id`'s parent
    pub fn ancestor_of_kind(&self, id: NodeId, kind: NodeKind) -> Option<NodeId> {
        self.ancestors(id).find(|&n| self.node(n).kind == kind)
    }

    /// Count of `kind` children already under `parent`
    ///
    /// Used to number repeated subtrees (`page0`, `page1`, ..) so that
    /// interleaved construction never produces colliding ids.
    pub fn kind_count(&self, parent: NodeId, kind: NodeKind) -> usize {
        self.children(parent)
            .iter()
            .filter(|&&c| self.node(c).kind == kind)
            .count()
    }
}

/// Iterator state for [`Tree::pre_order`]
pub struct PreOrder<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
}

impl Iterator for PreOrder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.stack.pop()?;
        for &child in self.tree.children(current).iter().rev() {
            self.stack.push(child);
        }
        Some(current)
    }
}
