//! Note subtrees
//!
//! Annotation blocks attached to a graphic. The default text is the
//! model-info loop template evaluated by the target application, with
//! literal `\n` escapes preserved in the payload.

use crate::error::Result;
use crate::session::{GraphicHandle, Session};
use crate::tree::NodeId;
use crate::types::{NodeData, NodeKind};

/// Defaults for newly added notes
#[derive(Debug, Clone)]
pub struct NoteOptions {
    pub note: String,
    pub transparent: String,
    pub auto_hide: String,
    pub anchor_to_screen: String,
    pub fill_color: String,
    pub text_color: String,
    pub attach: String,
    pub position: String,
    pub text: String,
    pub font: String,
    pub color: String,
    pub border_width: String,
    pub shape: String,
    pub alignment: String,
    pub anchor: String,
    pub title_flag: String,
}

impl Default for NoteOptions {
    fn default() -> Self {
        Self {
            note: "\"On\", \"Model Info\"".to_string(),
            transparent: "On".to_string(),
            auto_hide: "Off".to_string(),
            anchor_to_screen: "On".to_string(),
            fill_color: "31".to_string(),
            text_color: "1".to_string(),
            attach: "WINDOW".to_string(),
            position: "0.5, 0.5".to_string(),
            text: "{for (i = 0; i != numpts(window.modeltitlelist); ++i) }\\n{window.modelidlist[i]}: {window.modeltitlelist[i]}\\n{window.loadcaselist[i]} : {window.simulationsteplist[i]} : {window.framelist[i]}\\n{endloop}".to_string(),
            font: "\"noto sans\", \"regular\", \"regular\", 10".to_string(),
            color: "1".to_string(),
            border_width: "0".to_string(),
            shape: "Rectangle".to_string(),
            alignment: "Right".to_string(),
            anchor: "\"Right\", \"Top\"".to_string(),
            title_flag: "Yes".to_string(),
        }
    }
}

impl NoteOptions {
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_attach(mut self, attach: impl Into<String>) -> Self {
        self.attach = attach.into();
        self
    }
}

/// Every node created for one note
#[derive(Debug, Clone, Copy)]
pub struct NoteHandle {
    pub root: NodeId,
    pub transparent: NodeId,
    pub auto_hide: NodeId,
    pub anchor_to_screen: NodeId,
    pub fill_color: NodeId,
    pub text_color: NodeId,
    pub attach: NodeId,
    pub position: NodeId,
    pub text: NodeId,
    pub font: NodeId,
    pub color: NodeId,
    pub border_width: NodeId,
    pub shape: NodeId,
    pub alignment: NodeId,
    pub anchor: NodeId,
    pub title_flag: NodeId,
}

impl Session {
    /// Add `count` notes under `graphic`
    pub fn add_notes(
        &mut self,
        graphic: &GraphicHandle,
        count: usize,
        options: &NoteOptions,
    ) -> Result<Vec<NoteHandle>> {
        let mut handles = Vec::with_capacity(count);
        for _ in 0..count {
            let n = self.tree().kind_count(graphic.root, NodeKind::Note);
            let tree = self.tree_mut();

            let root = tree.attach(
                graphic.root,
                format!("note{n}"),
                NodeKind::Note,
                Some(NodeData::text(&options.note)),
            )?;
            let transparent = tree.attach(
                root,
                format!("transparent{n}"),
                NodeKind::Transparent,
                Some(NodeData::text(&options.transparent)),
            )?;
            let auto_hide = tree.attach(
                root,
                format!("autohide{n}"),
                NodeKind::AutoHide,
                Some(NodeData::text(&options.auto_hide)),
            )?;
            let anchor_to_screen = tree.attach(
                root,
                format!("anchortoscreen{n}"),
                NodeKind::AnchorToScreen,
                Some(NodeData::text(&options.anchor_to_screen)),
            )?;
            let fill_color = tree.attach(
                root,
                format!("fillcolor{n}"),
                NodeKind::FillColor,
                Some(NodeData::text(&options.fill_color)),
            )?;
            let text_color = tree.attach(
                root,
                format!("textcolor{n}"),
                NodeKind::TextColor,
                Some(NodeData::text(&options.text_color)),
            )?;
            let attach = tree.attach(
                root,
                format!("attach{n}"),
                NodeKind::Attach,
                Some(NodeData::text(&options.attach)),
            )?;
            let position = tree.attach(
                root,
                format!("position{n}"),
                NodeKind::Position,
                Some(NodeData::text(&options.position)),
            )?;
            let text = tree.attach(
                root,
                format!("text{n}"),
                NodeKind::Text,
                Some(NodeData::text(&options.text)),
            )?;
            let font = tree.attach(
                root,
                format!("font{n}"),
                NodeKind::Font,
                Some(NodeData::text(&options.font)),
            )?;
            let color = tree.attach(
                root,
                format!("color{n}"),
                NodeKind::Color,
                Some(NodeData::text(&options.color)),
            )?;
            let border_width = tree.attach(
                root,
                format!("borderwidth{n}"),
                NodeKind::BorderWidth,
                Some(NodeData::text(&options.border_width)),
            )?;
            let shape = tree.attach(
                root,
                format!("shape{n}"),
                NodeKind::Shape,
                Some(NodeData::text(&options.shape)),
            )?;
            let alignment = tree.attach(
                root,
                format!("notealignment{n}"),
                NodeKind::NoteAlignment,
                Some(NodeData::text(&options.alignment)),
            )?;
            let anchor = tree.attach(
                root,
                format!("noteanchor{n}"),
                NodeKind::NoteAnchor,
                Some(NodeData::text(&options.anchor)),
            )?;
            let title_flag = tree.attach(
                root,
                format!("titleflag{n}"),
                NodeKind::TitleFlag,
                Some(NodeData::text(&options.title_flag)),
            )?;

            handles.push(NoteHandle {
                root,
                transparent,
                auto_hide,
                anchor_to_screen,
                fill_color,
                text_color,
                attach,
                position,
                text,
                font,
                color,
                border_width,
                shape,
                alignment,
                anchor,
                title_flag,
            });
        }
        Ok(handles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{GraphicOptions, PageOptions, WindowOptions};

    fn session_with_graphic() -> (Session, GraphicHandle) {
        let mut session = Session::new("HyperWorks", "19", &[], &[]).unwrap();
        let pages = session.add_pages(1, &PageOptions::default()).unwrap();
        let windows = session
            .add_windows(&pages[0], 1, 1, &WindowOptions::default())
            .unwrap();
        let graphics = session
            .add_graphics(&windows[0], 1, &GraphicOptions::default())
            .unwrap();
        (session, graphics[0])
    }

    #[test]
    fn test_note_block_output() {
        let (mut session, graphic) = session_with_graphic();
        session
            .add_notes(&graphic, 1, &NoteOptions::default())
            .unwrap();
        let output = session.output();
        assert!(output.contains("*BeginNote(\"On\", \"Model Info\")"));
        assert!(output.contains("*Attach(\"WINDOW\")"));
        assert!(output.contains("*Font(\"noto sans\", \"regular\", \"regular\", 10)"));
        assert!(output.contains("*TitleFlag(\"Yes\")"));
        assert!(output.contains("*EndNote()"));
    }

    #[test]
    fn test_text_color_writes_fill_color_line() {
        let (mut session, graphic) = session_with_graphic();
        session
            .add_notes(&graphic, 1, &NoteOptions::default())
            .unwrap();
        let output = session.output();
        // fillcolor 31 and textcolor 1 both come out as *FillColor lines
        assert!(output.contains("*FillColor(31)"));
        assert!(output.contains("*FillColor(1)"));
    }

    #[test]
    fn test_note_parented_on_graphic() {
        let (mut session, graphic) = session_with_graphic();
        let notes = session
            .add_notes(&graphic, 1, &NoteOptions::default())
            .unwrap();
        assert_eq!(session.tree().parent(notes[0].root), Some(graphic.root));
    }
}
