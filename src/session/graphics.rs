//! Graphic subtrees
//!
//! A graphic lives under a window and holds the lighting, rotation step,
//! and a saved-view block wrapping the projection, view matrix, and
//! clipping region.

use crate::error::Result;
use crate::session::{Session, WindowHandle};
use crate::tree::NodeId;
use crate::types::{NodeData, NodeKind};

/// Defaults for newly added graphics
#[derive(Debug, Clone)]
pub struct GraphicOptions {
    pub light_info: String,
    pub rotation_angle: String,
    pub saved_view: String,
    pub projection_type: String,
    /// 4x4 view matrix, row major
    pub view: String,
    pub clipping_region: String,
}

impl Default for GraphicOptions {
    fn default() -> Self {
        Self {
            light_info: "0, 0, 1, 0, 0, 0, 64".to_string(),
            rotation_angle: "15".to_string(),
            saved_view: "Current View".to_string(),
            projection_type: "Orthographic".to_string(),
            view: "0.707107 0.353553 -0.612372 0.000000 -0.707107 0.353553 -0.612372 0.000000 0.000000 0.866025 0.500000 0.000000 0.000000 0.000000 0.000000 1.000000".to_string(),
            clipping_region: "-5.585992 6.464380 -2.172861 9.613941 -6.588268 2.100116".to_string(),
        }
    }
}

impl GraphicOptions {
    pub fn with_view(mut self, view: impl Into<String>) -> Self {
        self.view = view.into();
        self
    }

    pub fn with_rotation_angle(mut self, angle: impl Into<String>) -> Self {
        self.rotation_angle = angle.into();
        self
    }
}

/// Every node created for one graphic
#[derive(Debug, Clone, Copy)]
pub struct GraphicHandle {
    pub root: NodeId,
    pub light_info: NodeId,
    pub rotation_angle: NodeId,
    pub saved_view: NodeId,
    pub projection_type: NodeId,
    pub view: NodeId,
    pub clipping_region: NodeId,
}

impl Session {
    /// Add `count` graphics under `window`
    pub fn add_graphics(
        &mut self,
        window: &WindowHandle,
        count: usize,
        options: &GraphicOptions,
    ) -> Result<Vec<GraphicHandle>> {
        let mut handles = Vec::with_capacity(count);
        for _ in 0..count {
            let n = self.tree().kind_count(window.root, NodeKind::Graphic);
            let tree = self.tree_mut();

            let root = tree.attach(window.root, format!("graphic{n}"), NodeKind::Graphic, None)?;
            let light_info = tree.attach(
                root,
                format!("lightinfo{n}"),
                NodeKind::LightInfo,
                Some(NodeData::text(&options.light_info)),
            )?;
            let rotation_angle = tree.attach(
                root,
                format!("rotationangle{n}"),
                NodeKind::RotationAngle,
                Some(NodeData::text(&options.rotation_angle)),
            )?;
            let saved_view = tree.attach(
                root,
                format!("savedview{n}"),
                NodeKind::SavedView,
                Some(NodeData::text(&options.saved_view)),
            )?;
            let projection_type = tree.attach(
                saved_view,
                format!("projectiontype{n}"),
                NodeKind::ProjectionType,
                Some(NodeData::text(&options.projection_type)),
            )?;
            let view = tree.attach(
                saved_view,
                format!("view{n}"),
                NodeKind::View,
                Some(NodeData::text(&options.view)),
            )?;
            let clipping_region = tree.attach(
                saved_view,
                format!("clippingregion{n}"),
                NodeKind::ClippingRegion,
                Some(NodeData::text(&options.clipping_region)),
            )?;

            handles.push(GraphicHandle {
                root,
                light_info,
                rotation_angle,
                saved_view,
                projection_type,
                view,
                clipping_region,
            });
        }
        Ok(handles)
    }
}
