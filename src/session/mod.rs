//! Session assembly
//!
//! High-level construction of a session document: a [`Session`] owns the
//! tree and exposes `add_*` operations that attach whole subtrees (pages,
//! windows, graphics, models, results, parts, groups, contours, legends,
//! notes) with sensible defaults. Each operation returns handles exposing
//! every created [`NodeId`], so callers can retarget data afterwards with
//! the explicit update commands below.
//!
//! Subtree numbering is derived from the count of same-kind siblings at
//! attach time, so repeated or interleaved `add_*` calls never produce
//! colliding ids under one parent.

pub mod contours;
pub mod graphics;
pub mod models;
pub mod notes;
pub mod pages;
pub mod windows;

use std::path::Path;

use crate::error::{Result, SessionError};
use crate::serialize::Serializer;
use crate::tree::{NodeId, Tree};
use crate::types::{NodeData, NodeKind};
use crate::writer::SessionWriter;

pub use contours::{ContourHandle, ContourOptions, LegendHandle, LegendOptions};
pub use graphics::{GraphicHandle, GraphicOptions};
pub use models::{
    GroupHandle, GroupOptions, ModelHandle, ModelOptions, PartHandle, PartOptions,
    ResultHandle, ResultOptions,
};
pub use notes::{NoteHandle, NoteOptions};
pub use pages::{PageHandle, PageOptions};
pub use windows::{WindowHandle, WindowOptions};

/// A session document under construction
///
/// Created with the preamble in place: session title, graphics and
/// results file declarations, and the palette block.
pub struct Session {
    tree: Tree,
    session_title: NodeId,
}

impl Session {
    /// Start a session for the given application and input files
    ///
    /// `graphics` and `results` paths become the `GRAPHIC_FILE_i` and
    /// `RESULT_FILE_i` declarations, in order.
    pub fn new(
        gui: impl Into<String>,
        version: impl Into<String>,
        graphics: &[String],
        results: &[String],
    ) -> Result<Self> {
        let mut tree = Tree::new(gui, version);
        let root = tree.root();
        let session_title = tree.attach(
            root,
            "sessiontitle",
            NodeKind::SessionTitle,
            Some(NodeData::text("AutoSession 1")),
        )?;
        for (slot, path) in graphics.iter().enumerate() {
            tree.attach(
                root,
                format!("graphics_files{slot}"),
                NodeKind::GraphicFile,
                Some(NodeData::File {
                    slot,
                    path: path.clone(),
                }),
            )?;
        }
        for (slot, path) in results.iter().enumerate() {
            tree.attach(
                root,
                format!("results_files{slot}"),
                NodeKind::ResultFile,
                Some(NodeData::File {
                    slot,
                    path: path.clone(),
                }),
            )?;
        }
        tree.attach(root, "palette", NodeKind::Palette, None)?;
        Ok(Self {
            tree,
            session_title,
        })
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub(crate) fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    /// Replace the `# Session Title` line's text
    pub fn set_session_title(&mut self, title: impl Into<String>) {
        self.set_text(self.session_title, title);
    }

    /// Replace a node's payload through its handle
    pub fn set_data(&mut self, node: NodeId, data: NodeData) {
        self.tree.node_mut(node).data = Some(data);
    }

    /// Replace a node's payload with plain text
    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        self.set_data(node, NodeData::Text(text.into()));
    }

    /// Replace a payload addressed by string id
    ///
    /// Ids are only unique per parent, so this targets the first match in
    /// attach order. Unknown ids are a recoverable error.
    pub fn set_data_by_id(&mut self, id: &str, data: NodeData) -> Result<()> {
        let node = self
            .tree
            .find(id)
            .ok_or_else(|| SessionError::InvalidUpdateTarget(id.to_string()))?;
        self.set_data(node, data);
        Ok(())
    }

    /// Serialize the document to its textual form
    pub fn output(&self) -> String {
        Serializer::new(&self.tree).to_output()
    }

    /// Serialize and write the document to `path`
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        SessionWriter::new(path).write(&self.tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preamble_order() {
        let session = Session::new(
            "HyperWorks",
            "19",
            &["model.h3d".to_string()],
            &["model.h3d".to_string()],
        )
        .unwrap();
        let root = session.tree().root();
        let kinds: Vec<NodeKind> = session
            .tree()
            .children(root)
            .iter()
            .map(|&c| session.tree().node(c).kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::SessionTitle,
                NodeKind::GraphicFile,
                NodeKind::ResultFile,
                NodeKind::Palette,
            ]
        );
    }

    #[test]
    fn test_set_session_title() {
        let mut session = Session::new("HyperWorks", "19", &[], &[]).unwrap();
        session.set_session_title("Nightly run");
        assert!(session.output().contains("# Session Title : Nightly run"));
    }

    #[test]
    fn test_set_data_by_id_unknown_target() {
        let mut session = Session::new("HyperWorks", "19", &[], &[]).unwrap();
        let err = session
            .set_data_by_id("title9", NodeData::text("x"))
            .unwrap_err();
        assert!(matches!(err, SessionError::InvalidUpdateTarget(_)));
    }
}
