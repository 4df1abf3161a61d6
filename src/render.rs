//! Per-node block rendering
//!
//! Maps a node to its textual [`Block`]: a single [`Block::Line`] for leaf
//! tags, or a [`Block::Pair`] of open/close lines for container tags. The
//! template table is the authority on the output bytes; the serializer
//! only decides ordering.
//!
//! Rendering is structural and never fails. A missing or mistyped payload
//! is spliced in as empty text; whatever values the node carries are
//! emitted as-is.
//!
//! Indentation is `depth - 1` tabs. The root and its direct children
//! (session title, file declarations, pages) sit flush left.

use crate::tree::Node;
use crate::types::NodeData;

/// The rendered form of one node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Leaf tag, a single output line
    Line(String),
    /// Container tag: an opening line and a deferred closing line
    Pair { open: String, close: String },
}

impl Block {
    /// The line emitted when the node is first visited
    pub fn open(&self) -> &str {
        match self {
            Block::Line(line) => line,
            Block::Pair { open, .. } => open,
        }
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, Block::Pair { .. })
    }
}

/// Text payload, or empty when missing or of another shape
fn text(node: &Node) -> &str {
    match &node.data {
        Some(NodeData::Text(s)) => s,
        _ => "",
    }
}

/// Index payload, or 0 when missing or of another shape
fn index(node: &Node) -> usize {
    match &node.data {
        Some(NodeData::Index(i)) => *i,
        _ => 0,
    }
}

/// Render one node to its block
pub fn render(node: &Node) -> Block {
    use crate::types::NodeKind::*;

    let t = "\t".repeat(node.depth.saturating_sub(1));
    let line = Block::Line;
    let pair = |open: String, close: String| Block::Pair { open, close };

    match node.kind {
        Identification => {
            let (gui, version) = match &node.data {
                Some(NodeData::Identification { gui, version }) => {
                    (gui.as_str(), version.as_str())
                }
                _ => ("", ""),
            };
            pair(
                format!("{{ safe_quotes_on }}\n*Id(\"{gui}\", \"{version}.*\")"),
                String::new(),
            )
        }
        SessionTitle => line(format!("{t}# Session Title : {}", text(node))),
        GraphicFile | ResultFile => {
            let (slot, path) = match &node.data {
                Some(NodeData::File { slot, path }) => (*slot, path.as_str()),
                _ => (0, ""),
            };
            let prefix = if node.kind == GraphicFile {
                "GRAPHIC_FILE"
            } else {
                "RESULT_FILE"
            };
            line(format!("{{ {prefix}_{slot} = \"{path}\"}}"))
        }
        Palette => pair("*BeginPalette()".to_string(), "*EndPalette()".to_string()),
        Page => pair(
            format!("*BeginPage() // Page {}", index(node)),
            "*EndPage()".to_string(),
        ),
        Active => line(format!("{t}*IsActive()")),
        Name => line(format!("{t}*Name(\"{}\")", text(node))),
        Title => line(format!("{t}*Title(\"{}\", On)", text(node))),
        TitleFont => {
            let font = match &node.data {
                Some(NodeData::Font(f)) => f.clone(),
                _ => crate::types::FontSpec::new("", 0, 0, 0),
            };
            line(format!(
                "{t}*TitleFont(\"{}\", {}, {}, {})",
                font.face, font.weight, font.slant, font.size
            ))
        }
        Layout => line(format!("{t}*Layout({})", text(node))),
        Animator => pair(
            format!("{t}*BeginAnimator({})", text(node)),
            format!("{t}*EndAnimator()"),
        ),
        CurrentPosition => line(format!("{t}*CurrentPosition({})", text(node))),
        NumberSteps => line(format!("{t}*NumberOfSteps({})", text(node))),
        Increment => line(format!("{t}*Increment({})", text(node))),
        Window => pair(
            format!("{t}*BeginWindow(Animation)         // Window {}", index(node)),
            format!("{t}*EndWindow()"),
        ),
        ExportFormat => line(format!("{t}*ExportFormat(\"{}\")", text(node))),
        Graphic => pair(format!("{t}*BeginGraphic()"), format!("{t}*EndGraphic()")),
        LightInfo => line(format!("{t}*LightInfo({})", text(node))),
        RotationAngle => line(format!("{t}*RotationAngle({})", text(node))),
        SavedView => pair(
            format!("{t}*BeginSavedView(\"{}\")", text(node)),
            format!("{t}*EndSavedView()"),
        ),
        ProjectionType => line(format!("{t}*ProjectionType(\"{}\")", text(node))),
        View => line(format!("{t}*View(\"{}\")", text(node))),
        ClippingRegion => line(format!("{t}*ClippingRegion(\"{}\")", text(node))),
        Model => pair(
            format!("{t}*BeginModel({{GRAPHIC_FILE_{}}})", index(node)),
            format!("{t}*EndModel()"),
        ),
        ColorBy => line(format!("{t}*ColorBy(\"{}\")", text(node))),
        Color => line(format!("{t}*Color(\"{}\")", text(node))),
        GradientColor => line(format!("{t}*GradientColor(\"{}\")", text(node))),
        SmallDeformation => line(format!("{t}*SmallDeformation(\"{}\")", text(node))),
        Deformed => pair(
            format!("{t}*BeginDeformed({})", text(node)),
            format!("{t}*EndDeformed()"),
        ),
        ScaleMode => line(format!("{t}*ScaleMode(\"{}\")", text(node))),
        Scale => line(format!("{t}*Scale(\"{}\")", text(node))),
        ResolvedInSystem => line(format!("{t}*ResolvedInSystem({})", text(node))),
        ResultType => line(format!("{t}*ResultType(\"{}\")", text(node))),
        UndeformedMode => line(format!("{t}*UndeformedMode(\"{}\")", text(node))),
        UndeformedColor => line(format!("{t}*UndeformedColor(\"{}\")", text(node))),
        UndeformedTracking => line(format!("{t}*UndeformedTracking(\"{}\")", text(node))),
        Result => pair(
            format!("{t}*BeginResult({{RESULT_FILE_{}}})", index(node)),
            format!("{t}*EndResult()"),
        ),
        CurrentSubcase => line(format!("{t}*CurrentSubcase({})", text(node))),
        Part => pair(
            format!("{t}*BeginPart({})", text(node)),
            format!("{t}*EndPart()"),
        ),
        Attribute => line(format!("{t}*Attribute({})", text(node))),
        Group => pair(
            format!("{t}*BeginGroup({})", text(node)),
            format!("{t}*EndGroup()"),
        ),
        Selection => pair(
            format!("{t}*BeginSelection({})", text(node)),
            format!("{t}*EndSelection()"),
        ),
        SelectionAdd => line(format!("{t}*Add(\"{}\")", text(node))),
        Dimension => line(format!("{t}*Add(\"dimension == {}\")", text(node))),
        Contour => pair(
            format!("{t}*BeginContour({})", text(node)),
            format!("{t}*EndContour()"),
        ),
        DisplayOptions => line(format!("{t}*DisplayOptions({})", text(node))),
        DataComponent => line(format!("{t}*DataComponent(\"{}\")", text(node))),
        MultipleLayers => line(format!("{t}*MultipleLayers(\"{}\")", text(node))),
        Layer => line(format!("{t}*Layer(\"{}\")", text(node))),
        LayerFilter => line(format!("{t}*LayerFilter({})", text(node))),
        ComplexFilter => line(format!("{t}*ComplexFilter(\"{}\")", text(node))),
        AveragingMethod => line(format!("{t}*AveragingMethod({})", text(node))),
        AverageAcrossParts => line(format!("{t}*AverageAcrossParts({})", text(node))),
        ShowMidsideNodeResults => {
            line(format!("{t}*ShowMidsideNodeResults({})", text(node)))
        }
        FeatureAngleAverage => line(format!("{t}*FeatureAngleAverage({})", text(node))),
        AverageColor => line(format!("{t}*AverageColor({})", text(node))),
        DiscreteColor => line(format!("{t}*DiscreteColor({})", text(node))),
        Legend => pair(
            format!("{t}*BeginLegend({})", text(node)),
            format!("{t}*EndLegend()"),
        ),
        LegendType => line(format!("{t}*LegendType(\"{}\")", text(node))),
        NumCols => line(format!("{t}*NumCols({})", text(node))),
        ColorRgb => line(format!("{t}*ColorRGB({})", text(node))),
        NoResultColor => line(format!("{t}*NoResultColor(\"{}\")", text(node))),
        Numbers => line(format!("{t}*Numbers({})", text(node))),
        ShowMax => line(format!("{t}*ShowMax(\"{}\")", text(node))),
        ShowMaxLocal => line(format!("{t}*ShowMaxLocal(\"{}\")", text(node))),
        ShowMin => line(format!("{t}*ShowMin(\"{}\")", text(node))),
        ShowMinLocal => line(format!("{t}*ShowMinLocal(\"{}\")", text(node))),
        EntityLabel => line(format!("{t}*EntityLabel(\"{}\")", text(node))),
        ShowByModel => line(format!("{t}*ShowByModel(\"{}\")", text(node))),
        LegendPosition => line(format!("{t}*LegendPosition(\"{}\")", text(node))),
        BackgroundColor => line(format!("{t}*BackGroundColor(\"{}\")", text(node))),
        Transparency => line(format!("{t}*Transparency(\"{}\")", text(node))),
        Filter => line(format!("{t}*Filter(\"{}\")", text(node))),
        LegendMinThreshold => line(format!("{t}*LegendMinThreshold({})", text(node))),
        LegendMaxThreshold => line(format!("{t}*LegendMaxThreshold({})", text(node))),
        Note => pair(
            format!("{t}*BeginNote({})", text(node)),
            format!("{t}*EndNote()"),
        ),
        Transparent => line(format!("{t}*Transparent(\"{}\")", text(node))),
        AutoHide => line(format!("{t}*AutoHide(\"{}\")", text(node))),
        AnchorToScreen => line(format!("{t}*AnchorToScreen(\"{}\")", text(node))),
        FillColor => line(format!("{t}*FillColor({})", text(node))),
        // The session format writes the text color through *FillColor as
        // well; keep the emitted bytes identical to established output.
        TextColor => line(format!("{t}*FillColor({})", text(node))),
        Attach => line(format!("{t}*Attach(\"{}\")", text(node))),
        Position => line(format!("{t}*Position({})", text(node))),
        Text => line(format!("{t}*Text(\"{}\")", text(node))),
        Font => line(format!("{t}*Font({})", text(node))),
        BorderWidth => line(format!("{t}*BorderWidth({})", text(node))),
        Shape => line(format!("{t}*Shape(\"{}\")", text(node))),
        NoteAlignment => line(format!("{t}*NoteAlignment(\"{}\")", text(node))),
        NoteAnchor => line(format!("{t}*NoteAnchor({})", text(node))),
        TitleFlag => line(format!("{t}*TitleFlag(\"{}\")", text(node))),
    }
}
