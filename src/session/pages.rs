//! Page subtrees
//!
//! A page carries the active marker, its display name and title, the
//! layout selector, and an animator block with playback settings. The
//! layout value starts at `1` and is rewritten when windows are added.

use crate::error::Result;
use crate::session::Session;
use crate::tree::NodeId;
use crate::types::{FontSpec, NodeData, NodeKind};

/// Defaults for newly added pages
#[derive(Debug, Clone)]
pub struct PageOptions {
    /// Display name, suffixed with the page number in the output
    pub name: String,
    pub title: String,
    pub title_font: FontSpec,
    pub animator: String,
    pub current_position: String,
    pub number_steps: String,
    pub increment: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            name: "Page".to_string(),
            title: "Untitled".to_string(),
            title_font: FontSpec::default(),
            animator: "Static".to_string(),
            current_position: "25".to_string(),
            number_steps: "25".to_string(),
            increment: "Forward, Frame, 1, BounceOff".to_string(),
        }
    }
}

impl PageOptions {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_title_font(mut self, font: FontSpec) -> Self {
        self.title_font = font;
        self
    }

    pub fn with_animator(mut self, animator: impl Into<String>) -> Self {
        self.animator = animator.into();
        self
    }
}

/// Every node created for one page
#[derive(Debug, Clone, Copy)]
pub struct PageHandle {
    pub root: NodeId,
    pub active: NodeId,
    pub name: NodeId,
    pub title: NodeId,
    pub title_font: NodeId,
    pub layout: NodeId,
    pub animator: NodeId,
    pub current_position: NodeId,
    pub number_steps: NodeId,
    pub increment: NodeId,
}

impl Session {
    /// Add `count` pages under the session root
    pub fn add_pages(&mut self, count: usize, options: &PageOptions) -> Result<Vec<PageHandle>> {
        let mut handles = Vec::with_capacity(count);
        for _ in 0..count {
            let session_root = self.tree().root();
            let n = self.tree().kind_count(session_root, NodeKind::Page);
            let tree = self.tree_mut();

            let root = tree.attach(
                session_root,
                format!("page{n}"),
                NodeKind::Page,
                Some(NodeData::Index(n)),
            )?;
            let active = tree.attach(root, format!("active{n}"), NodeKind::Active, None)?;
            let name = tree.attach(
                root,
                format!("name{n}"),
                NodeKind::Name,
                Some(NodeData::Text(format!("{} {n}", options.name))),
            )?;
            let title = tree.attach(
                root,
                format!("title{n}"),
                NodeKind::Title,
                Some(NodeData::text(&options.title)),
            )?;
            let title_font = tree.attach(
                root,
                format!("titlefont{n}"),
                NodeKind::TitleFont,
                Some(NodeData::Font(options.title_font.clone())),
            )?;
            let layout = tree.attach(
                root,
                format!("layout{n}"),
                NodeKind::Layout,
                Some(NodeData::text("1")),
            )?;
            let animator = tree.attach(
                root,
                format!("animator{n}"),
                NodeKind::Animator,
                Some(NodeData::text(&options.animator)),
            )?;
            let current_position = tree.attach(
                animator,
                format!("currentposition{n}"),
                NodeKind::CurrentPosition,
                Some(NodeData::text(&options.current_position)),
            )?;
            let number_steps = tree.attach(
                animator,
                format!("numbersteps{n}"),
                NodeKind::NumberSteps,
                Some(NodeData::text(&options.number_steps)),
            )?;
            let increment = tree.attach(
                animator,
                format!("increment{n}"),
                NodeKind::Increment,
                Some(NodeData::text(&options.increment)),
            )?;

            handles.push(PageHandle {
                root,
                active,
                name,
                title,
                title_font,
                layout,
                animator,
                current_position,
                number_steps,
                increment,
            });
        }
        Ok(handles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_numbering_continues_across_calls() {
        let mut session = Session::new("HyperWorks", "19", &[], &[]).unwrap();
        let first = session.add_pages(1, &PageOptions::default()).unwrap();
        let second = session.add_pages(2, &PageOptions::default()).unwrap();
        assert_eq!(session.tree().node(first[0].root).id, "page0");
        assert_eq!(session.tree().node(second[0].root).id, "page1");
        assert_eq!(session.tree().node(second[1].root).id, "page2");
    }

    #[test]
    fn test_page_name_carries_page_number() {
        let mut session = Session::new("HyperWorks", "19", &[], &[]).unwrap();
        let pages = session
            .add_pages(2, &PageOptions::default())
            .unwrap();
        assert_eq!(
            session.tree().node(pages[1].name).data,
            Some(NodeData::text("Page 1"))
        );
    }

    #[test]
    fn test_page_output_block() {
        let mut session = Session::new("HyperWorks", "19", &[], &[]).unwrap();
        session.add_pages(1, &PageOptions::default()).unwrap();
        let output = session.output();
        let expected = "\
*BeginPage() // Page 0
\t*IsActive()
\t*Name(\"Page 0\")
\t*Title(\"Untitled\", On)
\t*TitleFont(\"Arial\", 1, 0, 12)
\t*Layout(1)
\t*BeginAnimator(Static)
\t\t*CurrentPosition(25)
\t\t*NumberOfSteps(25)
\t\t*Increment(Forward, Frame, 1, BounceOff)
\t*EndAnimator()
*EndPage()";
        assert!(output.contains(expected), "output was:\n{output}");
    }
}
