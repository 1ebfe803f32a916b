//! Output model: the renderer-ready visual graph.
//!
//! This is the binding contract for a scene-graph rendering layer: every
//! property is either fully computed or absent, and none of the values
//! require further interpretation of DOT attribute syntax.

use crate::attrgraph::{ArrowShapeKind, PolygonShape};
use crate::types::{Point, Rect, Size};

/// The projected graph: same topology as the input, visual properties only.
#[derive(Clone, Debug, Default)]
pub struct VisualGraph {
    pub css_id: Option<String>,
    /// Only set in emulated-layout mode.
    pub layout_algorithm: Option<LayoutHint>,
    pub nodes: Vec<VisualNode>,
    pub edges: Vec<VisualEdge>,
}

/// Visual properties of one node.
#[derive(Clone, Debug, Default)]
pub struct VisualNode {
    /// The source node identifier (stable key for the renderer).
    pub name: String,
    pub css_id: Option<String>,
    pub label: Option<String>,
    pub external_label: Option<String>,
    pub external_label_position: Option<Point>,
    pub shape: Option<VisualShape>,
    /// Style string for the shape, in the shape family's vocabulary.
    pub shape_style: Option<String>,
    pub size: Option<Size>,
    /// Top-left corner position.
    pub position: Option<Point>,
    pub tooltip: Option<String>,
    pub invisible: bool,
    /// Position was user-pinned; a layout run must not move this node.
    pub layout_irrelevant: bool,
}

/// Visual properties of one edge.
#[derive(Clone, Debug, Default)]
pub struct VisualEdge {
    pub source: String,
    pub target: String,
    pub css_id: Option<String>,
    pub label: Option<String>,
    pub external_label: Option<String>,
    /// Label at the tail end (`taillabel`).
    pub source_label: Option<String>,
    /// Label at the head end (`headlabel`).
    pub target_label: Option<String>,
    pub curve_style: Option<String>,
    pub source_decoration: Option<Decoration>,
    pub target_decoration: Option<Decoration>,
    pub source_decoration_style: Option<String>,
    pub target_decoration_style: Option<String>,
    pub router: Option<Router>,
    pub interpolator: Option<Interpolator>,
    pub start_point: Option<Point>,
    pub end_point: Option<Point>,
    /// Interior control points for the selected router.
    pub control_points: Option<Vec<Point>>,
    pub label_position: Option<Point>,
    pub external_label_position: Option<Point>,
    pub source_label_position: Option<Point>,
    pub target_label_position: Option<Point>,
    pub invisible: bool,
}

/// The rendering vocabulary a node shape belongs to.
#[derive(Clone, Debug, PartialEq)]
pub enum VisualShape {
    /// A stroked-outline geometry (ellipse is the DOT default).
    Polygon(PolygonShape),
    /// A bordered box whose content is laid out by the record label.
    Record { rounded: bool },
    /// An embedded-markup label acting as the whole shape.
    Html,
}

/// Which routing strategy the renderer should use for an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Router {
    Straight,
    Orthogonal,
}

/// Which curve interpolator the renderer should use for an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interpolator {
    Polyline,
    BSpline,
}

/// The layout-algorithm family inferred for emulated layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutHint {
    Radial,
    ForceDirected,
    Grid,
    Tree(TreeOrientation),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeOrientation {
    TopDown,
    LeftRight,
}

/// A directional end-cap for one edge end, fully computed: every primitive
/// carries its resolved outline and the whole decoration carries the style
/// applied uniformly to its sub-shapes.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Decoration {
    pub primitives: Vec<ArrowPrimitive>,
    pub css_style: Option<String>,
}

/// One arrow primitive, positioned in the decoration's local frame: the
/// origin is where the decoration touches the node, +x points back along
/// the edge, and the renderer rotates the whole frame onto the edge axis.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrowPrimitive {
    pub kind: ArrowShapeKind,
    pub geometry: PrimitiveGeometry,
    /// False for `o`-modified (outline-only) primitives.
    pub filled: bool,
}

/// Resolved outline of one arrow primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum PrimitiveGeometry {
    /// Closed outline.
    Polygon(Vec<Point>),
    /// Open stroke (vee, curve flanks).
    Polyline(Vec<Point>),
    /// Circular primitive (dot) given by its bounding rect.
    Ellipse(Rect),
}
