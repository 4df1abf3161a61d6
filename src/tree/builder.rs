//! Tree construction and compatibility validation
//!
//! [`Tree::attach`] is the single mutation point of the document tree.
//! The two compatibility tables gate higher-level assembly: window count
//! versus layout configuration, and contour result type versus data
//! component. Both are checked before any node is attached, so a rejected
//! request leaves the tree untouched.

use tracing::debug;

use crate::error::{Result, SessionError};
use crate::tree::{Node, NodeId, Tree};
use crate::types::{NodeData, NodeKind};

impl Tree {
    /// Append a child under `parent`
    ///
    /// Depth and sibling index are assigned here and never change.
    /// Returns [`SessionError::InvalidParent`] when the handle does not
    /// refer to a node of this tree.
    pub fn attach(
        &mut self,
        parent: NodeId,
        id: impl Into<String>,
        kind: NodeKind,
        data: Option<NodeData>,
    ) -> Result<NodeId> {
        let id = id.into();
        if !self.contains(parent) {
            return Err(SessionError::InvalidParent(id));
        }
        let depth = self.node(parent).depth + 1;
        let sibling_index = self.children(parent).len();
        let child = NodeId(self.len());
        debug!(id = %id, kind = %kind, depth, "attaching node");
        self.push_node(Node {
            id,
            kind,
            data,
            depth,
            sibling_index,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.node_mut(parent).children.push(child);
        Ok(child)
    }

    pub(crate) fn push_node(&mut self, node: Node) {
        self.nodes_mut().push(node);
    }
}

/// Check a window count against a layout configuration number
///
/// The permitted pairs come straight from the session format: each layout
/// configuration tiles a fixed number of windows.
pub fn validate_window_layout(windows: usize, configuration: u32) -> Result<()> {
    let permitted = matches!(
        (windows, configuration),
        (1, 1)
            | (2, 2)
            | (2, 3)
            | (3, 4)
            | (3, 5)
            | (3, 6)
            | (3, 7)
            | (3, 8)
            | (3, 9)
            | (4, 10)
            | (6, 11)
            | (6, 12)
            | (9, 13)
            | (12, 14)
            | (12, 15)
            | (16, 16)
            | (4, 17)
            | (8, 18)
            | (4, 19)
            | (8, 20)
    );
    if permitted {
        Ok(())
    } else {
        Err(SessionError::InvalidLayoutConfiguration {
            windows,
            configuration,
        })
    }
}

/// Check a contour result type against a data component
pub fn validate_contour(result_type: &str, data_component: &str) -> Result<()> {
    let permitted = match result_type {
        "Displacement" => matches!(data_component, "Mag" | "X" | "Y" | "Z"),
        "Element Stresses (2D & 3D)" => {
            matches!(data_component, "Absolute Max Principal" | "vonMises")
        }
        _ => false,
    };
    if permitted {
        Ok(())
    } else {
        Err(SessionError::InvalidContourSpecification {
            result_type: result_type.to_string(),
            data_component: data_component.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_rejects_foreign_handle() {
        let mut tree = Tree::new("HyperWorks", "19");
        let bogus = NodeId(42);
        let err = tree
            .attach(bogus, "page0", NodeKind::Page, None)
            .unwrap_err();
        assert!(matches!(err, SessionError::InvalidParent(_)));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_layout_table_accepts_known_pairs() {
        for (windows, configuration) in [
            (1, 1),
            (2, 2),
            (2, 3),
            (3, 9),
            (4, 10),
            (6, 12),
            (9, 13),
            (12, 15),
            (16, 16),
            (4, 19),
            (8, 20),
        ] {
            assert!(validate_window_layout(windows, configuration).is_ok());
        }
    }

    #[test]
    fn test_layout_table_rejects_mismatches() {
        assert!(matches!(
            validate_window_layout(2, 1),
            Err(SessionError::InvalidLayoutConfiguration {
                windows: 2,
                configuration: 1,
            })
        ));
        assert!(validate_window_layout(5, 10).is_err());
        assert!(validate_window_layout(1, 0).is_err());
    }

    #[test]
    fn test_contour_table() {
        assert!(validate_contour("Displacement", "Mag").is_ok());
        assert!(validate_contour("Displacement", "Z").is_ok());
        assert!(validate_contour("Element Stresses (2D & 3D)", "vonMises").is_ok());
        assert!(validate_contour("Displacement", "vonMises").is_err());
        assert!(validate_contour("Displacement", "Foo").is_err());
        assert!(validate_contour("Velocity", "Mag").is_err());
    }
}
