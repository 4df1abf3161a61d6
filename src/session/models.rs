//! Model subtrees and their result, part, and group children
//!
//! A model binds one of the declared graphics files into a graphic and
//! carries display state plus a deformed block. Results bind a declared
//! results file; parts and groups select geometry inside the model.

use crate::error::Result;
use crate::session::{GraphicHandle, Session};
use crate::tree::NodeId;
use crate::types::{NodeData, NodeKind};

/// Defaults for newly added models
#[derive(Debug, Clone)]
pub struct ModelOptions {
    /// Index into the session's declared graphics files
    pub graphic_slot: usize,
    pub color_by: String,
    pub color: String,
    pub deformed: String,
    pub scale_mode: String,
    pub scale: String,
    pub resolved_in_system: String,
    pub result_type: String,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            graphic_slot: 0,
            color_by: "Part".to_string(),
            color: "255 0  0".to_string(),
            deformed: String::new(),
            scale_mode: "ScaleFactor".to_string(),
            scale: "1.000000 1.000000 1.000000".to_string(),
            resolved_in_system: "0".to_string(),
            result_type: "Displacement".to_string(),
        }
    }
}

impl ModelOptions {
    pub fn with_graphic_slot(mut self, slot: usize) -> Self {
        self.graphic_slot = slot;
        self
    }

    pub fn with_scale(mut self, scale: impl Into<String>) -> Self {
        self.scale = scale.into();
        self
    }
}

/// Every node created for one model
#[derive(Debug, Clone, Copy)]
pub struct ModelHandle {
    pub root: NodeId,
    pub color_by: NodeId,
    pub color: NodeId,
    pub deformed: NodeId,
    pub scale_mode: NodeId,
    pub scale: NodeId,
    pub resolved_in_system: NodeId,
    pub result_type: NodeId,
}

/// Defaults for newly added results
#[derive(Debug, Clone)]
pub struct ResultOptions {
    /// Index into the session's declared results files
    pub result_slot: usize,
    pub current_subcase: String,
}

impl Default for ResultOptions {
    fn default() -> Self {
        Self {
            result_slot: 0,
            current_subcase: "1, 0".to_string(),
        }
    }
}

impl ResultOptions {
    pub fn with_current_subcase(mut self, subcase: impl Into<String>) -> Self {
        self.current_subcase = subcase.into();
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ResultHandle {
    pub root: NodeId,
    pub current_subcase: NodeId,
}

/// Defaults for newly added parts
///
/// The part payload is prefixed with the 1-based part number on attach.
#[derive(Debug, Clone)]
pub struct PartOptions {
    pub part: String,
    pub attribute: String,
}

impl Default for PartOptions {
    fn default() -> Self {
        Self {
            part: ", \"Global\", \"PART\", 0".to_string(),
            attribute: "On, IdOff, 6, Opa, Sha, Msh, InFit, InCut, InIso".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PartHandle {
    pub root: NodeId,
    pub attribute: NodeId,
}

/// Defaults for newly added groups
///
/// The group payload is prefixed with the quoted dimension on attach, and
/// the selection payload gets the 1-based group number appended.
#[derive(Debug, Clone)]
pub struct GroupOptions {
    pub group: String,
    pub selection: String,
}

impl Default for GroupOptions {
    fn default() -> Self {
        Self {
            group: "D Set\", \"Off\", \"Off\", \"  0   0 255\", 1, \"wire\"".to_string(),
            selection: "Part, SelectAll, \"User_Set\", ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GroupHandle {
    pub root: NodeId,
    pub selection: NodeId,
    pub add: NodeId,
}

impl Session {
    /// Add `count` models under `graphic`
    pub fn add_models(
        &mut self,
        graphic: &GraphicHandle,
        count: usize,
        options: &ModelOptions,
    ) -> Result<Vec<ModelHandle>> {
        let mut handles = Vec::with_capacity(count);
        for _ in 0..count {
            let n = self.tree().kind_count(graphic.root, NodeKind::Model);
            let tree = self.tree_mut();

            let root = tree.attach(
                graphic.root,
                format!("model{n}"),
                NodeKind::Model,
                Some(NodeData::Index(options.graphic_slot)),
            )?;
            let color_by = tree.attach(
                root,
                format!("colorby{n}"),
                NodeKind::ColorBy,
                Some(NodeData::text(&options.color_by)),
            )?;
            let color = tree.attach(
                root,
                format!("color{n}"),
                NodeKind::Color,
                Some(NodeData::text(&options.color)),
            )?;
            let deformed = tree.attach(
                root,
                format!("deformed{n}"),
                NodeKind::Deformed,
                Some(NodeData::text(&options.deformed)),
            )?;
            let scale_mode = tree.attach(
                deformed,
                format!("scalemode{n}"),
                NodeKind::ScaleMode,
                Some(NodeData::text(&options.scale_mode)),
            )?;
            let scale = tree.attach(
                deformed,
                format!("scale{n}"),
                NodeKind::Scale,
                Some(NodeData::text(&options.scale)),
            )?;
            let resolved_in_system = tree.attach(
                deformed,
                format!("resolvedinsystem{n}"),
                NodeKind::ResolvedInSystem,
                Some(NodeData::text(&options.resolved_in_system)),
            )?;
            let result_type = tree.attach(
                deformed,
                format!("resulttype{n}"),
                NodeKind::ResultType,
                Some(NodeData::text(&options.result_type)),
            )?;

            handles.push(ModelHandle {
                root,
                color_by,
                color,
                deformed,
                scale_mode,
                scale,
                resolved_in_system,
                result_type,
            });
        }
        Ok(handles)
    }

    /// Add `count` results under `model`
    pub fn add_results(
        &mut self,
        model: &ModelHandle,
        count: usize,
        options: &ResultOptions,
    ) -> Result<Vec<ResultHandle>> {
        let mut handles = Vec::with_capacity(count);
        for _ in 0..count {
            let n = self.tree().kind_count(model.root, NodeKind::Result);
            let tree = self.tree_mut();

            let root = tree.attach(
                model.root,
                format!("result{n}"),
                NodeKind::Result,
                Some(NodeData::Index(options.result_slot)),
            )?;
            let current_subcase = tree.attach(
                root,
                format!("currentsubcase{n}"),
                NodeKind::CurrentSubcase,
                Some(NodeData::text(&options.current_subcase)),
            )?;

            handles.push(ResultHandle {
                root,
                current_subcase,
            });
        }
        Ok(handles)
    }

    /// Add `count` parts under `model`
    pub fn add_parts(
        &mut self,
        model: &ModelHandle,
        count: usize,
        options: &PartOptions,
    ) -> Result<Vec<PartHandle>> {
        let mut handles = Vec::with_capacity(count);
        for _ in 0..count {
            let n = self.tree().kind_count(model.root, NodeKind::Part);
            let tree = self.tree_mut();

            let root = tree.attach(
                model.root,
                format!("part{n}"),
                NodeKind::Part,
                Some(NodeData::Text(format!("{}{}", n + 1, options.part))),
            )?;
            let attribute = tree.attach(
                root,
                format!("attribute{n}"),
                NodeKind::Attribute,
                Some(NodeData::text(&options.attribute)),
            )?;

            handles.push(PartHandle { root, attribute });
        }
        Ok(handles)
    }

    /// Add `count` groups of the given element dimension under `model`
    pub fn add_groups(
        &mut self,
        model: &ModelHandle,
        count: usize,
        dimension: u32,
        options: &GroupOptions,
    ) -> Result<Vec<GroupHandle>> {
        let mut handles = Vec::with_capacity(count);
        for _ in 0..count {
            let n = self.tree().kind_count(model.root, NodeKind::Group);
            let tree = self.tree_mut();

            let root = tree.attach(
                model.root,
                format!("group{n}"),
                NodeKind::Group,
                Some(NodeData::Text(format!("\"{dimension}{}", options.group))),
            )?;
            let selection = tree.attach(
                root,
                format!("groupselection{n}"),
                NodeKind::Selection,
                Some(NodeData::Text(format!("{}{}", options.selection, n + 1))),
            )?;
            let add = tree.attach(
                selection,
                format!("groupselectionadd{n}"),
                NodeKind::SelectionAdd,
                Some(NodeData::Text(format!("dimension == {dimension}"))),
            )?;

            handles.push(GroupHandle {
                root,
                selection,
                add,
            });
        }
        Ok(handles)
    }
}
