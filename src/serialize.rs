//! Structural tree serialization
//!
//! Single pre-order pass over the document tree producing the output
//! lines. Containers open when first visited and close when their subtree
//! is exhausted: after emitting a childless node that is the last of its
//! siblings, the serializer emits the parent's close line and keeps
//! climbing while each ancestor is itself a last sibling. The root has no
//! parent link, so the climb always terminates and the root's (empty)
//! close line lands last.
//!
//! Serialization is infallible and side-effect free. Serializing an
//! unmutated tree twice yields identical output.

use tracing::error;

use crate::render::{render, Block};
use crate::tree::{NodeId, Tree};

/// Borrowing serializer over a finished tree
pub struct Serializer<'a> {
    tree: &'a Tree,
}

impl<'a> Serializer<'a> {
    pub fn new(tree: &'a Tree) -> Self {
        Self { tree }
    }

    /// Produce the output lines in nesting order
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.tree.len() * 2);
        for id in self.tree.pre_order() {
            let node = self.tree.node(id);
            let block = render(node);
            if !self.tree.children(id).is_empty() {
                // Container with content: close after the subtree.
                lines.push(block.open().to_string());
                continue;
            }
            match block {
                Block::Line(line) => lines.push(line),
                Block::Pair { open, close } => {
                    // Childless container still closes, adjacently.
                    lines.push(open);
                    lines.push(close);
                }
            }
            if self.tree.is_last_sibling(id) {
                self.close_ancestors(id, &mut lines);
            }
        }
        lines
    }

    /// Emit deferred closes after the last node of a subtree
    fn close_ancestors(&self, id: NodeId, lines: &mut Vec<String>) {
        let mut current = id;
        loop {
            let Some(parent) = self.tree.parent(current) else {
                break;
            };
            self.push_close(parent, lines);
            if !self.tree.is_last_sibling(parent) {
                break;
            }
            current = parent;
        }
    }

    fn push_close(&self, id: NodeId, lines: &mut Vec<String>) {
        let node = self.tree.node(id);
        match render(node) {
            Block::Pair { close, .. } => lines.push(close),
            Block::Line(_) => {
                // Renderer contract violation: a node with children must
                // render a pair. Skip the close instead of panicking.
                error!(id = %node.id, kind = %node.kind, "node with children rendered a single line");
            }
        }
    }

    /// Join the lines into the final document text
    pub fn to_output(&self) -> String {
        self.lines().join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Tree;
    use crate::types::{NodeData, NodeKind};

    #[test]
    fn test_minimal_session_end_to_end() {
        let mut tree = Tree::new("HyperWorks", "19");
        tree.attach(
            tree.root(),
            "sessiontitle0",
            NodeKind::SessionTitle,
            Some(NodeData::text("Demo")),
        )
        .unwrap();
        let page = tree
            .attach(tree.root(), "page0", NodeKind::Page, Some(NodeData::Index(0)))
            .unwrap();
        tree.attach(page, "active0", NodeKind::Active, None).unwrap();

        assert_eq!(
            Serializer::new(&tree).lines(),
            vec![
                "{ safe_quotes_on }\n*Id(\"HyperWorks\", \"19.*\")".to_string(),
                "# Session Title : Demo".to_string(),
                "*BeginPage() // Page 0".to_string(),
                "\t*IsActive()".to_string(),
                "*EndPage()".to_string(),
                "".to_string(),
            ]
        );
    }

    #[test]
    fn test_nested_containers_close_inside_out() {
        let mut tree = Tree::new("HyperWorks", "19");
        let page = tree
            .attach(tree.root(), "page0", NodeKind::Page, Some(NodeData::Index(0)))
            .unwrap();
        let animator = tree
            .attach(page, "animator0", NodeKind::Animator, Some(NodeData::text("Static")))
            .unwrap();
        tree.attach(
            animator,
            "increment0",
            NodeKind::Increment,
            Some(NodeData::text("Forward")),
        )
        .unwrap();

        assert_eq!(
            Serializer::new(&tree).lines(),
            vec![
                "{ safe_quotes_on }\n*Id(\"HyperWorks\", \"19.*\")".to_string(),
                "*BeginPage() // Page 0".to_string(),
                "\t*BeginAnimator(Static)".to_string(),
                "\t\t*Increment(Forward)".to_string(),
                "\t*EndAnimator()".to_string(),
                "*EndPage()".to_string(),
                "".to_string(),
            ]
        );
    }

    #[test]
    fn test_childless_container_closes_adjacently() {
        let mut tree = Tree::new("HyperWorks", "19");
        tree.attach(tree.root(), "palette0", NodeKind::Palette, None)
            .unwrap();
        let lines = Serializer::new(&tree).lines();
        assert_eq!(
            &lines[1..],
            &[
                "*BeginPalette()".to_string(),
                "*EndPalette()".to_string(),
                "".to_string(),
            ]
        );
    }

    #[test]
    fn test_close_walk_stops_at_non_last_sibling() {
        // page0 { animator0 { increment } } page1 { active }
        // The climb from increment closes animator0 and page0 but must
        // not close the root, because page0 has a following sibling.
        let mut tree = Tree::new("HyperWorks", "19");
        let page0 = tree
            .attach(tree.root(), "page0", NodeKind::Page, Some(NodeData::Index(0)))
            .unwrap();
        let animator = tree
            .attach(page0, "animator0", NodeKind::Animator, Some(NodeData::text("Static")))
            .unwrap();
        tree.attach(
            animator,
            "increment0",
            NodeKind::Increment,
            Some(NodeData::text("Forward")),
        )
        .unwrap();
        let page1 = tree
            .attach(tree.root(), "page1", NodeKind::Page, Some(NodeData::Index(1)))
            .unwrap();
        tree.attach(page1, "active0", NodeKind::Active, None).unwrap();

        assert_eq!(
            Serializer::new(&tree).lines(),
            vec![
                "{ safe_quotes_on }\n*Id(\"HyperWorks\", \"19.*\")".to_string(),
                "*BeginPage() // Page 0".to_string(),
                "\t*BeginAnimator(Static)".to_string(),
                "\t\t*Increment(Forward)".to_string(),
                "\t*EndAnimator()".to_string(),
                "*EndPage()".to_string(),
                "*BeginPage() // Page 1".to_string(),
                "\t*IsActive()".to_string(),
                "*EndPage()".to_string(),
                "".to_string(),
            ]
        );
    }

    #[test]
    fn test_serialization_is_repeatable() {
        let mut tree = Tree::new("HyperWorks", "19");
        let page = tree
            .attach(tree.root(), "page0", NodeKind::Page, Some(NodeData::Index(0)))
            .unwrap();
        tree.attach(page, "active0", NodeKind::Active, None).unwrap();
        let s = Serializer::new(&tree);
        assert_eq!(s.to_output(), s.to_output());
    }

    #[test]
    fn test_output_ends_with_blank_line() {
        let mut tree = Tree::new("HyperWorks", "19");
        let page = tree
            .attach(tree.root(), "page0", NodeKind::Page, Some(NodeData::Index(0)))
            .unwrap();
        tree.attach(page, "active0", NodeKind::Active, None).unwrap();
        assert!(Serializer::new(&tree).to_output().ends_with("*EndPage()\n"));
    }
}
