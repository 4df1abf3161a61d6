//! Contour and legend subtrees
//!
//! A contour plots a result quantity over a model. Its display options
//! node is parented on the enclosing graphic rather than on the contour
//! itself, so the typed ancestor walk locates that graphic from the model
//! handle. Legends hang off a contour; the two threshold nodes are also
//! parented on the contour.
//!
//! The result type and data component are checked against the contour
//! compatibility table before anything is attached, so a rejected contour
//! leaves the tree untouched.

use crate::error::{Result, SessionError};
use crate::session::{ModelHandle, Session};
use crate::tree::{validate_contour, NodeId};
use crate::types::{NodeData, NodeKind};

/// Defaults for newly added contours
#[derive(Debug, Clone)]
pub struct ContourOptions {
    pub selection: String,
    pub add: String,
    pub result_type: String,
    pub display_options: String,
    pub data_component: String,
    pub multiple_layers: String,
    pub layer: String,
    pub layer_filter: String,
    pub complex_filter: String,
    pub resolved_in_system: String,
    pub averaging_method: String,
    pub average_across_parts: String,
    pub show_midside_node_results: String,
    pub feature_angle_average: String,
    pub average_color: String,
    pub discrete_color: String,
}

impl Default for ContourOptions {
    fn default() -> Self {
        Self {
            selection: "Part, SelectAll, \"User_Set\", ".to_string(),
            add: "Displayed".to_string(),
            result_type: "Displacement".to_string(),
            display_options: "\"ContourOn\", \"LegendOn\", \"MeasuresOn\", \"NotesOn\""
                .to_string(),
            data_component: "Mag".to_string(),
            multiple_layers: "false".to_string(),
            layer: "Max".to_string(),
            layer_filter: "0".to_string(),
            complex_filter: "mag".to_string(),
            resolved_in_system: "-1".to_string(),
            averaging_method: "\"Simple\", -0.01".to_string(),
            average_across_parts: "Off".to_string(),
            show_midside_node_results: "On".to_string(),
            feature_angle_average: "Off, 50, On".to_string(),
            average_color: "yes".to_string(),
            discrete_color: "yes".to_string(),
        }
    }
}

impl ContourOptions {
    pub fn with_result_type(mut self, result_type: impl Into<String>) -> Self {
        self.result_type = result_type.into();
        self
    }

    pub fn with_data_component(mut self, component: impl Into<String>) -> Self {
        self.data_component = component.into();
        self
    }
}

/// Every node created for one contour
#[derive(Debug, Clone, Copy)]
pub struct ContourHandle {
    pub root: NodeId,
    pub selection: NodeId,
    pub add: NodeId,
    pub result_type: NodeId,
    /// Parented on the enclosing graphic, not on the contour
    pub display_options: NodeId,
    pub data_component: NodeId,
    pub multiple_layers: NodeId,
    pub layer: NodeId,
    pub layer_filter: NodeId,
    pub complex_filter: NodeId,
    pub resolved_in_system: NodeId,
    pub averaging_method: NodeId,
    pub average_across_parts: NodeId,
    pub show_midside_node_results: NodeId,
    pub feature_angle_average: NodeId,
    pub average_color: NodeId,
    pub discrete_color: NodeId,
}

/// Defaults for newly added legends
#[derive(Debug, Clone)]
pub struct LegendOptions {
    pub legend_type: String,
    pub num_cols: String,
    pub max_threshold: String,
    pub min_threshold: String,
    pub color_rgb: String,
    pub no_result_color: String,
    pub numbers: String,
    pub show_max: String,
    pub show_max_local: String,
    pub show_min: String,
    pub show_min_local: String,
    pub entity_label: String,
    pub show_by_model: String,
    pub position: String,
    pub background_color: String,
    pub transparency: String,
    pub filter: String,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            legend_type: "Static".to_string(),
            num_cols: "9".to_string(),
            max_threshold: "\"Off\", 1".to_string(),
            min_threshold: "Off, 0".to_string(),
            color_rgb: "\"0 0 200\", \"21 121 255\", \"0 199 221\", \"40 255 185\", \"57 255 0\", \"170 255 0\", \"255 227 0\", \"255 113 0\", \"255 0 0\"".to_string(),
            no_result_color: "192 192 192".to_string(),
            numbers: "\"show\", \"scientific\", 3".to_string(),
            show_max: "show".to_string(),
            show_max_local: "hide".to_string(),
            show_min: "show".to_string(),
            show_min_local: "hide".to_string(),
            entity_label: "show".to_string(),
            show_by_model: "hide".to_string(),
            position: "UpperLeft".to_string(),
            background_color: " 44  85 126".to_string(),
            transparency: "On".to_string(),
            filter: "LINEAR".to_string(),
        }
    }
}

impl LegendOptions {
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }
}

/// Every node created for one legend
#[derive(Debug, Clone, Copy)]
pub struct LegendHandle {
    pub root: NodeId,
    pub legend_type: NodeId,
    pub num_cols: NodeId,
    /// Parented on the contour, not on the legend
    pub max_threshold: NodeId,
    /// Parented on the contour, not on the legend
    pub min_threshold: NodeId,
    pub color_rgb: NodeId,
    pub no_result_color: NodeId,
    pub numbers: NodeId,
    pub show_max: NodeId,
    pub show_max_local: NodeId,
    pub show_min: NodeId,
    pub show_min_local: NodeId,
    pub entity_label: NodeId,
    pub show_by_model: NodeId,
    pub position: NodeId,
    pub background_color: NodeId,
    pub transparency: NodeId,
    pub filter: NodeId,
}

impl Session {
    /// Add `count` contours under `model`
    pub fn add_contours(
        &mut self,
        model: &ModelHandle,
        count: usize,
        options: &ContourOptions,
    ) -> Result<Vec<ContourHandle>> {
        validate_contour(&options.result_type, &options.data_component)?;
        let graphic = self
            .tree()
            .ancestor_of_kind(model.root, NodeKind::Graphic)
            .ok_or_else(|| {
                SessionError::InvalidParent(self.tree().node(model.root).id.clone())
            })?;

        let mut handles = Vec::with_capacity(count);
        for _ in 0..count {
            let n = self.tree().kind_count(model.root, NodeKind::Contour);
            let tree = self.tree_mut();

            let root = tree.attach(
                model.root,
                format!("contour{n}"),
                NodeKind::Contour,
                Some(NodeData::text("")),
            )?;
            let selection = tree.attach(
                root,
                format!("contourselection{n}"),
                NodeKind::Selection,
                Some(NodeData::Text(format!("{}{}", options.selection, n + 1))),
            )?;
            let add = tree.attach(
                selection,
                format!("contourselectionadd{n}"),
                NodeKind::SelectionAdd,
                Some(NodeData::text(&options.add)),
            )?;
            let result_type = tree.attach(
                root,
                format!("resulttype{n}"),
                NodeKind::ResultType,
                Some(NodeData::text(&options.result_type)),
            )?;
            let display_options = tree.attach(
                graphic,
                format!("displayoptions{n}"),
                NodeKind::DisplayOptions,
                Some(NodeData::text(&options.display_options)),
            )?;
            let data_component = tree.attach(
                root,
                format!("datacomponent{n}"),
                NodeKind::DataComponent,
                Some(NodeData::text(&options.data_component)),
            )?;
            let multiple_layers = tree.attach(
                root,
                format!("multiplelayers{n}"),
                NodeKind::MultipleLayers,
                Some(NodeData::text(&options.multiple_layers)),
            )?;
            let layer = tree.attach(
                root,
                format!("layer{n}"),
                NodeKind::Layer,
                Some(NodeData::text(&options.layer)),
            )?;
            let layer_filter = tree.attach(
                root,
                format!("layerfilter{n}"),
                NodeKind::LayerFilter,
                Some(NodeData::text(&options.layer_filter)),
            )?;
            let complex_filter = tree.attach(
                root,
                format!("complexfilter{n}"),
                NodeKind::ComplexFilter,
                Some(NodeData::text(&options.complex_filter)),
            )?;
            let resolved_in_system = tree.attach(
                root,
                format!("resolvedinsystem{n}"),
                NodeKind::ResolvedInSystem,
                Some(NodeData::text(&options.resolved_in_system)),
            )?;
            let averaging_method = tree.attach(
                root,
                format!("averagingmethod{n}"),
                NodeKind::AveragingMethod,
                Some(NodeData::text(&options.averaging_method)),
            )?;
            let average_across_parts = tree.attach(
                root,
                format!("averageacrossparts{n}"),
                NodeKind::AverageAcrossParts,
                Some(NodeData::text(&options.average_across_parts)),
            )?;
            let show_midside_node_results = tree.attach(
                root,
                format!("showmidsidenoderesults{n}"),
                NodeKind::ShowMidsideNodeResults,
                Some(NodeData::text(&options.show_midside_node_results)),
            )?;
            let feature_angle_average = tree.attach(
                root,
                format!("featureangleaverage{n}"),
                NodeKind::FeatureAngleAverage,
                Some(NodeData::text(&options.feature_angle_average)),
            )?;
            let average_color = tree.attach(
                root,
                format!("averagecolor{n}"),
                NodeKind::AverageColor,
                Some(NodeData::text(&options.average_color)),
            )?;
            let discrete_color = tree.attach(
                root,
                format!("discretecolor{n}"),
                NodeKind::DiscreteColor,
                Some(NodeData::text(&options.discrete_color)),
            )?;

            handles.push(ContourHandle {
                root,
                selection,
                add,
                result_type,
                display_options,
                data_component,
                multiple_layers,
                layer,
                layer_filter,
                complex_filter,
                resolved_in_system,
                averaging_method,
                average_across_parts,
                show_midside_node_results,
                feature_angle_average,
                average_color,
                discrete_color,
            });
        }
        Ok(handles)
    }

    /// Add `count` legends under `contour`
    pub fn add_legends(
        &mut self,
        contour: &ContourHandle,
        count: usize,
        options: &LegendOptions,
    ) -> Result<Vec<LegendHandle>> {
        let mut handles = Vec::with_capacity(count);
        for _ in 0..count {
            let n = self.tree().kind_count(contour.root, NodeKind::Legend);
            let tree = self.tree_mut();

            let root = tree.attach(
                contour.root,
                format!("legend{n}"),
                NodeKind::Legend,
                Some(NodeData::text("")),
            )?;
            let legend_type = tree.attach(
                root,
                format!("legendtype{n}"),
                NodeKind::LegendType,
                Some(NodeData::text(&options.legend_type)),
            )?;
            let num_cols = tree.attach(
                root,
                format!("numcols{n}"),
                NodeKind::NumCols,
                Some(NodeData::text(&options.num_cols)),
            )?;
            let max_threshold = tree.attach(
                contour.root,
                format!("legendmaxthreshold{n}"),
                NodeKind::LegendMaxThreshold,
                Some(NodeData::text(&options.max_threshold)),
            )?;
            let min_threshold = tree.attach(
                contour.root,
                format!("legendminthreshold{n}"),
                NodeKind::LegendMinThreshold,
                Some(NodeData::text(&options.min_threshold)),
            )?;
            let color_rgb = tree.attach(
                root,
                format!("colorrgb{n}"),
                NodeKind::ColorRgb,
                Some(NodeData::text(&options.color_rgb)),
            )?;
            let no_result_color = tree.attach(
                root,
                format!("noresultcolor{n}"),
                NodeKind::NoResultColor,
                Some(NodeData::text(&options.no_result_color)),
            )?;
            let numbers = tree.attach(
                root,
                format!("numbers{n}"),
                NodeKind::Numbers,
                Some(NodeData::text(&options.numbers)),
            )?;
            let show_max = tree.attach(
                root,
                format!("showmax{n}"),
                NodeKind::ShowMax,
                Some(NodeData::text(&options.show_max)),
            )?;
            let show_max_local = tree.attach(
                root,
                format!("showmaxlocal{n}"),
                NodeKind::ShowMaxLocal,
                Some(NodeData::text(&options.show_max_local)),
            )?;
            let show_min = tree.attach(
                root,
                format!("showmin{n}"),
                NodeKind::ShowMin,
                Some(NodeData::text(&options.show_min)),
            )?;
            let show_min_local = tree.attach(
                root,
                format!("showminlocal{n}"),
                NodeKind::ShowMinLocal,
                Some(NodeData::text(&options.show_min_local)),
            )?;
            let entity_label = tree.attach(
                root,
                format!("entitylabel{n}"),
                NodeKind::EntityLabel,
                Some(NodeData::text(&options.entity_label)),
            )?;
            let show_by_model = tree.attach(
                root,
                format!("showbymodel{n}"),
                NodeKind::ShowByModel,
                Some(NodeData::text(&options.show_by_model)),
            )?;
            let position = tree.attach(
                root,
                format!("legendposition{n}"),
                NodeKind::LegendPosition,
                Some(NodeData::text(&options.position)),
            )?;
            let background_color = tree.attach(
                root,
                format!("backgroundcolor{n}"),
                NodeKind::BackgroundColor,
                Some(NodeData::text(&options.background_color)),
            )?;
            let transparency = tree.attach(
                root,
                format!("transparency{n}"),
                NodeKind::Transparency,
                Some(NodeData::text(&options.transparency)),
            )?;
            let filter = tree.attach(
                root,
                format!("filter{n}"),
                NodeKind::Filter,
                Some(NodeData::text(&options.filter)),
            )?;

            handles.push(LegendHandle {
                root,
                legend_type,
                num_cols,
                max_threshold,
                min_threshold,
                color_rgb,
                no_result_color,
                numbers,
                show_max,
                show_max_local,
                show_min,
                show_min_local,
                entity_label,
                show_by_model,
                position,
                background_color,
                transparency,
                filter,
            });
        }
        Ok(handles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{
        GraphicOptions, ModelOptions, PageOptions, WindowOptions,
    };

    fn session_with_model() -> (Session, ModelHandle) {
        let mut session = Session::new(
            "HyperWorks",
            "19",
            &["model.h3d".to_string()],
            &["model.h3d".to_string()],
        )
        .unwrap();
        let pages = session.add_pages(1, &PageOptions::default()).unwrap();
        let windows = session
            .add_windows(&pages[0], 1, 1, &WindowOptions::default())
            .unwrap();
        let graphics = session
            .add_graphics(&windows[0], 1, &GraphicOptions::default())
            .unwrap();
        let models = session
            .add_models(&graphics[0], 1, &ModelOptions::default())
            .unwrap();
        (session, models[0])
    }

    #[test]
    fn test_invalid_contour_attaches_nothing() {
        let (mut session, model) = session_with_model();
        let before = session.tree().len();
        let options = ContourOptions::default().with_data_component("Foo");
        let err = session.add_contours(&model, 1, &options).unwrap_err();
        assert!(matches!(
            err,
            SessionError::InvalidContourSpecification { .. }
        ));
        assert_eq!(session.tree().len(), before);
    }

    #[test]
    fn test_display_options_parented_on_graphic() {
        let (mut session, model) = session_with_model();
        let contours = session
            .add_contours(&model, 1, &ContourOptions::default())
            .unwrap();
        let graphic = session
            .tree()
            .ancestor_of_kind(model.root, NodeKind::Graphic)
            .unwrap();
        assert_eq!(
            session.tree().parent(contours[0].display_options),
            Some(graphic)
        );
        assert_eq!(session.tree().parent(contours[0].root), Some(model.root));
    }

    #[test]
    fn test_contour_selection_is_numbered() {
        let (mut session, model) = session_with_model();
        let contours = session
            .add_contours(&model, 2, &ContourOptions::default())
            .unwrap();
        assert_eq!(
            session.tree().node(contours[1].selection).data,
            Some(NodeData::text("Part, SelectAll, \"User_Set\", 2"))
        );
    }

    #[test]
    fn test_stress_contour_accepts_von_mises() {
        let (mut session, model) = session_with_model();
        let options = ContourOptions::default()
            .with_result_type("Element Stresses (2D & 3D)")
            .with_data_component("vonMises");
        assert!(session.add_contours(&model, 1, &options).is_ok());
    }

    #[test]
    fn test_legend_thresholds_parented_on_contour() {
        let (mut session, model) = session_with_model();
        let contours = session
            .add_contours(&model, 1, &ContourOptions::default())
            .unwrap();
        let legends = session
            .add_legends(&contours[0], 1, &LegendOptions::default())
            .unwrap();
        let legend = legends[0];
        assert_eq!(
            session.tree().parent(legend.max_threshold),
            Some(contours[0].root)
        );
        assert_eq!(
            session.tree().parent(legend.min_threshold),
            Some(contours[0].root)
        );
        assert_eq!(session.tree().parent(legend.num_cols), Some(legend.root));
        let output = session.output();
        assert!(output.contains("*LegendMaxThreshold(\"Off\", 1)"));
        assert!(output.contains("*LegendPosition(\"UpperLeft\")"));
        assert!(output.contains("*BackGroundColor(\" 44  85 126\")"));
    }
}
