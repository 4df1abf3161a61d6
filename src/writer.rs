//! Session file output
//!
//! Joins the serialized lines with `\n` and writes them to disk in one
//! shot. The document's final blank line comes from the root's empty
//! close, not from a trailing separator added here.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::serialize::Serializer;
use crate::tree::Tree;

/// Writes a serialized session tree to a destination path
pub struct SessionWriter {
    destination: PathBuf,
}

impl SessionWriter {
    pub fn new(destination: impl AsRef<Path>) -> Self {
        Self {
            destination: destination.as_ref().to_path_buf(),
        }
    }

    /// Serialize the tree and write the document
    pub fn write(&self, tree: &Tree) -> Result<()> {
        let output = Serializer::new(tree).to_output();
        fs::write(&self.destination, output)?;
        info!(path = %self.destination.display(), "session file written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NodeData, NodeKind};

    #[test]
    fn test_write_round_trip() {
        let mut tree = Tree::new("HyperWorks", "19");
        let page = tree
            .attach(tree.root(), "page0", NodeKind::Page, Some(NodeData::Index(0)))
            .unwrap();
        tree.attach(page, "active0", NodeKind::Active, None).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.mvw");
        SessionWriter::new(&path).write(&tree).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, Serializer::new(&tree).to_output());
        assert!(written.ends_with('\n'));
    }

    #[test]
    fn test_write_to_missing_directory_errors() {
        let tree = Tree::new("HyperWorks", "19");
        let result = SessionWriter::new("/nonexistent/dir/session.mvw").write(&tree);
        assert!(result.is_err());
    }
}
