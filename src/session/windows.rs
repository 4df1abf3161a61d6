//! Window subtrees
//!
//! Windows live under a page. Adding windows first checks the window
//! count against the requested layout configuration and, on success,
//! rewrites the page's layout node to that configuration.

use crate::error::Result;
use crate::session::{PageHandle, Session};
use crate::tree::{validate_window_layout, NodeId};
use crate::types::{NodeData, NodeKind};

/// Defaults for newly added windows
#[derive(Debug, Clone)]
pub struct WindowOptions {
    pub export_format: String,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            export_format: "PNG".to_string(),
        }
    }
}

impl WindowOptions {
    pub fn with_export_format(mut self, format: impl Into<String>) -> Self {
        self.export_format = format.into();
        self
    }
}

/// Every node created for one window
#[derive(Debug, Clone, Copy)]
pub struct WindowHandle {
    pub root: NodeId,
    pub active: NodeId,
    pub export_format: NodeId,
}

impl Session {
    /// Add `count` windows under `page` using layout `configuration`
    ///
    /// Fails fast on an incompatible count/configuration pair; nothing is
    /// attached and the page keeps its previous layout.
    pub fn add_windows(
        &mut self,
        page: &PageHandle,
        count: usize,
        configuration: u32,
        options: &WindowOptions,
    ) -> Result<Vec<WindowHandle>> {
        validate_window_layout(count, configuration)?;
        self.set_text(page.layout, configuration.to_string());

        let mut handles = Vec::with_capacity(count);
        for _ in 0..count {
            let n = self.tree().kind_count(page.root, NodeKind::Window);
            let tree = self.tree_mut();

            let root = tree.attach(
                page.root,
                format!("window{n}"),
                NodeKind::Window,
                Some(NodeData::Index(n)),
            )?;
            let active = tree.attach(root, format!("active{n}"), NodeKind::Active, None)?;
            let export_format = tree.attach(
                root,
                format!("exportformat{n}"),
                NodeKind::ExportFormat,
                Some(NodeData::text(&options.export_format)),
            )?;

            handles.push(WindowHandle {
                root,
                active,
                export_format,
            });
        }
        Ok(handles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SessionError;
    use crate::session::PageOptions;

    fn session_with_page() -> (Session, PageHandle) {
        let mut session = Session::new("HyperWorks", "19", &[], &[]).unwrap();
        let pages = session.add_pages(1, &PageOptions::default()).unwrap();
        (session, pages[0])
    }

    #[test]
    fn test_add_windows_updates_page_layout() {
        let (mut session, page) = session_with_page();
        session
            .add_windows(&page, 2, 2, &WindowOptions::default())
            .unwrap();
        assert_eq!(
            session.tree().node(page.layout).data,
            Some(NodeData::text("2"))
        );
    }

    #[test]
    fn test_invalid_layout_attaches_nothing() {
        let (mut session, page) = session_with_page();
        let before = session.tree().len();
        let err = session
            .add_windows(&page, 2, 1, &WindowOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            SessionError::InvalidLayoutConfiguration {
                windows: 2,
                configuration: 1,
            }
        ));
        assert_eq!(session.tree().len(), before);
        assert_eq!(
            session.tree().node(page.layout).data,
            Some(NodeData::text("1"))
        );
    }

    #[test]
    fn test_window_block_output() {
        let (mut session, page) = session_with_page();
        session
            .add_windows(&page, 1, 1, &WindowOptions::default())
            .unwrap();
        let output = session.output();
        assert!(output.contains("\t*BeginWindow(Animation)         // Window 0"));
        assert!(output.contains("\t\t*ExportFormat(\"PNG\")"));
        assert!(output.contains("\t*EndWindow()"));
    }
}
