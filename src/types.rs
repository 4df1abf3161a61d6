//! Core data types for dotmvw
//!
//! This module contains the fundamental data structures used throughout
//! the crate for describing session document nodes.
//!
//! # Main Types
//!
//! - [`NodeKind`] - Closed enumeration of every tag kind the session format knows
//! - [`NodeData`] - Typed payload attached to a node and consumed by the renderer
//! - [`FontSpec`] - Font description used by title and note tags
//!
//! # Node Kinds
//!
//! Each variant corresponds to exactly one output template (see the
//! renderer). The enumeration is closed on purpose: adding a tag means
//! adding a variant, and the renderer's exhaustive match forces the
//! template to be written at the same time.

use serde::{Deserialize, Serialize};

/// The tag kind of a session document node
///
/// One variant per output template. Container kinds (those rendered as a
/// Begin/End pair) and leaf kinds (single line) are distinguished by the
/// renderer, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Session preamble: `{ safe_quotes_on }` plus the `*Id(..)` marker
    Identification,
    /// `# Session Title : ..` comment line
    SessionTitle,
    /// `{ GRAPHIC_FILE_n = ".." }` declaration
    GraphicFile,
    /// `{ RESULT_FILE_n = ".." }` declaration
    ResultFile,
    /// `*BeginPalette()` block
    Palette,
    /// `*BeginPage()` block
    Page,
    Active,
    Name,
    Title,
    TitleFont,
    Layout,
    /// `*BeginAnimator(..)` block
    Animator,
    CurrentPosition,
    NumberSteps,
    Increment,
    /// `*BeginWindow(Animation)` block
    Window,
    ExportFormat,
    /// `*BeginGraphic()` block
    Graphic,
    LightInfo,
    RotationAngle,
    /// `*BeginSavedView(..)` block
    SavedView,
    ProjectionType,
    View,
    ClippingRegion,
    /// `*BeginModel({GRAPHIC_FILE_n})` block
    Model,
    ColorBy,
    Color,
    GradientColor,
    SmallDeformation,
    /// `*BeginDeformed(..)` block
    Deformed,
    ScaleMode,
    Scale,
    ResolvedInSystem,
    ResultType,
    UndeformedMode,
    UndeformedColor,
    UndeformedTracking,
    /// `*BeginResult({RESULT_FILE_n})` block
    Result,
    CurrentSubcase,
    /// `*BeginPart(..)` block
    Part,
    Attribute,
    /// `*BeginGroup(..)` block
    Group,
    /// `*BeginSelection(..)` block (used under groups and contours alike)
    Selection,
    /// `*Add("..")` line under a selection
    SelectionAdd,
    /// `*Add("dimension == ..")` line
    Dimension,
    /// `*BeginContour(..)` block
    Contour,
    DisplayOptions,
    DataComponent,
    MultipleLayers,
    Layer,
    LayerFilter,
    ComplexFilter,
    AveragingMethod,
    AverageAcrossParts,
    ShowMidsideNodeResults,
    FeatureAngleAverage,
    AverageColor,
    DiscreteColor,
    /// `*BeginLegend(..)` block
    Legend,
    LegendType,
    NumCols,
    ColorRgb,
    NoResultColor,
    Numbers,
    ShowMax,
    ShowMaxLocal,
    ShowMin,
    ShowMinLocal,
    EntityLabel,
    ShowByModel,
    LegendPosition,
    BackgroundColor,
    Transparency,
    Filter,
    LegendMinThreshold,
    LegendMaxThreshold,
    /// `*BeginNote(..)` block
    Note,
    Transparent,
    AutoHide,
    AnchorToScreen,
    FillColor,
    TextColor,
    Attach,
    Position,
    Text,
    Font,
    BorderWidth,
    Shape,
    NoteAlignment,
    NoteAnchor,
    TitleFlag,
}

impl NodeKind {
    /// Lowercase stem used when composing node ids (e.g. `page0`, `title2`)
    pub fn stem(self) -> &'static str {
        match self {
            NodeKind::Identification => "root",
            NodeKind::SessionTitle => "sessiontitle",
            NodeKind::GraphicFile => "graphics_files",
            NodeKind::ResultFile => "results_files",
            NodeKind::Palette => "palette",
            NodeKind::Page => "page",
            NodeKind::Active => "active",
            NodeKind::Name => "name",
            NodeKind::Title => "title",
            NodeKind::TitleFont => "titlefont",
            NodeKind::Layout => "layout",
            NodeKind::Animator => "animator",
            NodeKind::CurrentPosition => "currentposition",
            NodeKind::NumberSteps => "numbersteps",
            NodeKind::Increment => "increment",
            NodeKind::Window => "window",
            NodeKind::ExportFormat => "exportformat",
            NodeKind::Graphic => "graphic",
            NodeKind::LightInfo => "lightinfo",
            NodeKind::RotationAngle => "rotationangle",
            NodeKind::SavedView => "savedview",
            NodeKind::ProjectionType => "projectiontype",
            NodeKind::View => "view",
            NodeKind::ClippingRegion => "clippingregion",
            NodeKind::Model => "model",
            NodeKind::ColorBy => "colorby",
            NodeKind::Color => "color",
            NodeKind::GradientColor => "gradientcolor",
            NodeKind::SmallDeformation => "smalldeformation",
            NodeKind::Deformed => "deformed",
            NodeKind::ScaleMode => "scalemode",
            NodeKind::Scale => "scale",
            NodeKind::ResolvedInSystem => "resolvedinsystem",
            NodeKind::ResultType => "resulttype",
            NodeKind::UndeformedMode => "undeformedmode",
            NodeKind::UndeformedColor => "undeformedcolor",
            NodeKind::UndeformedTracking => "undeformedtracking",
            NodeKind::Result => "result",
            NodeKind::CurrentSubcase => "currentsubcase",
            NodeKind::Part => "part",
            NodeKind::Attribute => "attribute",
            NodeKind::Group => "group",
            NodeKind::Selection => "selection",
            NodeKind::SelectionAdd => "selectionadd",
            NodeKind::Dimension => "dimension",
            NodeKind::Contour => "contour",
            NodeKind::DisplayOptions => "displayoptions",
            NodeKind::DataComponent => "datacomponent",
            NodeKind::MultipleLayers => "multiplelayers",
            NodeKind::Layer => "layer",
            NodeKind::LayerFilter => "layerfilter",
            NodeKind::ComplexFilter => "complexfilter",
            NodeKind::AveragingMethod => "averagingmethod",
            NodeKind::AverageAcrossParts => "averageacrossparts",
            NodeKind::ShowMidsideNodeResults => "showmidsidenoderesults",
            NodeKind::FeatureAngleAverage => "featureangleaverage",
            NodeKind::AverageColor => "averagecolor",
            NodeKind::DiscreteColor => "discretecolor",
            NodeKind::Legend => "legend",
            NodeKind::LegendType => "legendtype",
            NodeKind::NumCols => "numcols",
            NodeKind::ColorRgb => "colorrgb",
            NodeKind::NoResultColor => "noresultcolor",
            NodeKind::Numbers => "numbers",
            NodeKind::ShowMax => "showmax",
            NodeKind::ShowMaxLocal => "showmaxlocal",
            NodeKind::ShowMin => "showmin",
            NodeKind::ShowMinLocal => "showminlocal",
            NodeKind::EntityLabel => "entitylabel",
            NodeKind::ShowByModel => "showbymodel",
            NodeKind::LegendPosition => "legendposition",
            NodeKind::BackgroundColor => "backgroundcolor",
            NodeKind::Transparency => "transparency",
            NodeKind::Filter => "filter",
            NodeKind::LegendMinThreshold => "legendminthreshold",
            NodeKind::LegendMaxThreshold => "legendmaxthreshold",
            NodeKind::Note => "note",
            NodeKind::Transparent => "transparent",
            NodeKind::AutoHide => "autohide",
            NodeKind::AnchorToScreen => "anchortoscreen",
            NodeKind::FillColor => "fillcolor",
            NodeKind::TextColor => "textcolor",
            NodeKind::Attach => "attach",
            NodeKind::Position => "position",
            NodeKind::Text => "text",
            NodeKind::Font => "font",
            NodeKind::BorderWidth => "borderwidth",
            NodeKind::Shape => "shape",
            NodeKind::NoteAlignment => "notealignment",
            NodeKind::NoteAnchor => "noteanchor",
            NodeKind::TitleFlag => "titleflag",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.stem())
    }
}

/// Font description for `*TitleFont(..)` tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSpec {
    /// Font face name (e.g. "Arial")
    pub face: String,
    pub weight: u32,
    pub slant: u32,
    pub size: u32,
}

impl FontSpec {
    pub fn new(face: impl Into<String>, weight: u32, slant: u32, size: u32) -> Self {
        Self {
            face: face.into(),
            weight,
            slant,
            size,
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("Arial", 1, 0, 12)
    }
}

/// Typed payload attached to a node
///
/// The renderer decides how a payload is spliced into the output line.
/// Payloads are intentionally loose: the serializer is structural and will
/// faithfully emit whatever values are present, including empty ones.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    /// Free-form text spliced into the template
    Text(String),
    /// A numeric slot or ordinal (page number, window number, file slot)
    Index(usize),
    /// A declared graphics/results file: slot number plus path
    File { slot: usize, path: String },
    /// Font description
    Font(FontSpec),
    /// Session identification: producing application and version
    Identification { gui: String, version: String },
}

impl NodeData {
    /// Convenience constructor for text payloads
    pub fn text(value: impl Into<String>) -> Self {
        NodeData::Text(value.into())
    }
}
