//! Input model: an attributed graph as produced by a DOT parser/validator.
//!
//! The engine consumes *already-parsed* typed attribute values; lexing and
//! semantic validation of the DOT language live upstream. Absence of any
//! attribute is a first-class value, never an error. The structures here
//! are read-only from the engine's perspective.

use std::collections::HashMap;

/// Whether the source graph was declared `digraph` or `graph`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphKind {
    Directed,
    Undirected,
}

/// A DOT graph with its graph-level attributes, nodes and edges.
#[derive(Clone, Debug)]
pub struct AttributedGraph {
    pub kind: GraphKind,
    pub attrs: AttrMap,
    pub nodes: Vec<AttrNode>,
    pub edges: Vec<AttrEdge>,
}

impl AttributedGraph {
    pub fn new(kind: GraphKind) -> Self {
        AttributedGraph {
            kind,
            attrs: AttrMap::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}

/// A node record. `name` is the DOT node identifier and doubles as the
/// default label (the `\N` escape).
#[derive(Clone, Debug)]
pub struct AttrNode {
    pub name: String,
    pub attrs: AttrMap,
}

impl AttrNode {
    pub fn new(name: impl Into<String>) -> Self {
        AttrNode {
            name: name.into(),
            attrs: AttrMap::new(),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: AttrValue) -> Self {
        self.attrs.insert(name, value);
        self
    }
}

/// An edge record between two named nodes.
#[derive(Clone, Debug)]
pub struct AttrEdge {
    pub source: String,
    pub target: String,
    pub attrs: AttrMap,
}

impl AttrEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        AttrEdge {
            source: source.into(),
            target: target.into(),
            attrs: AttrMap::new(),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: AttrValue) -> Self {
        self.attrs.insert(name, value);
        self
    }
}

/// Attribute name → typed value mapping for one element.
#[derive(Clone, Debug, Default)]
pub struct AttrMap {
    entries: HashMap<String, AttrValue>,
}

impl AttrMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: AttrValue) {
        self.entries.insert(name.into(), value);
    }

    pub fn with(mut self, name: impl Into<String>, value: AttrValue) -> Self {
        self.insert(name, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One typed attribute value.
///
/// Numeric attributes (`width`, `height`, `arrowsize`) travel as raw
/// strings, exactly as DOT carries them; the accessors parse them and
/// surface malformed values.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    /// Raw scalar string (also used for labels and numeric attributes).
    Str(String),
    /// An HTML-like label (`label=<...>`); rendered by its own layout.
    Html(String),
    Bool(bool),
    Color(Color),
    ColorList(Vec<Color>),
    Style(Style),
    Shape(NodeShape),
    Point(AttrPoint),
    SplineList(Vec<Spline>),
    ArrowType(ArrowType),
    Dir(DirType),
    Layout(LayoutEngine),
    Rankdir(Rankdir),
    Splines(SplinesMode),
    /// An escaped string broken into lines (tooltips).
    EscString(Vec<String>),
}

// ============================================================================
// Color domain
// ============================================================================

/// A single parsed DOT color value.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    /// `#rrggbb` with optional alpha.
    Rgb {
        r: u8,
        g: u8,
        b: u8,
        a: Option<u8>,
    },
    /// `h,s,v` components, each in [0, 1].
    Hsv { h: f64, s: f64, v: f64 },
    /// A name to be resolved against a color scheme.
    Named(String),
}

impl Color {
    pub fn named(name: impl Into<String>) -> Self {
        Color::Named(name.into())
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b, a: None }
    }
}

// ============================================================================
// Style domain
// ============================================================================

/// A parsed `style` attribute: an ordered list of style items.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Style {
    pub items: Vec<StyleItem>,
}

impl Style {
    pub fn of(names: &[&str]) -> Self {
        Style {
            items: names.iter().map(|n| StyleItem::new(*n)).collect(),
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name == name)
    }
}

/// One style keyword with its optional arguments (`setlinewidth(2)`).
#[derive(Clone, Debug, PartialEq)]
pub struct StyleItem {
    pub name: String,
    pub args: Vec<String>,
}

impl StyleItem {
    pub fn new(name: impl Into<String>) -> Self {
        StyleItem {
            name: name.into(),
            args: Vec::new(),
        }
    }
}

// ============================================================================
// Shape domain
// ============================================================================

/// A parsed node `shape` attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeShape {
    Polygon(PolygonShape),
    Record(RecordShape),
    /// A custom (user-defined) shape name; currently rendered like a box.
    Custom(String),
}

/// Polygon-based shapes share the stroked-outline style vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolygonShape {
    Box,
    Ellipse,
    Circle,
    Oval,
    Point,
    Triangle,
    InvTriangle,
    Diamond,
    Trapezium,
    InvTrapezium,
    Parallelogram,
    House,
    InvHouse,
    Pentagon,
    Hexagon,
    Septagon,
    Octagon,
    DoubleCircle,
    DoubleOctagon,
    Square,
    Star,
    None,
    Plaintext,
}

/// Record-based shapes share the bordered-box style vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordShape {
    Record,
    /// Record with rounded corners.
    MRecord,
}

// ============================================================================
// Geometry domain
// ============================================================================

/// A parsed DOT point. `input_only` corresponds to the `!` suffix: the
/// position was supplied by the user and a layout run must not move it.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct AttrPoint {
    pub x: f64,
    pub y: f64,
    pub input_only: bool,
}

impl AttrPoint {
    pub fn new(x: f64, y: f64) -> Self {
        AttrPoint {
            x,
            y,
            input_only: false,
        }
    }

    pub fn pinned(x: f64, y: f64) -> Self {
        AttrPoint {
            x,
            y,
            input_only: true,
        }
    }
}

/// One cubic B-spline segment of an edge's `pos` attribute: optional
/// explicit endpoints plus a non-empty ordered control point list.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Spline {
    pub start: Option<AttrPoint>,
    pub end: Option<AttrPoint>,
    pub control: Vec<AttrPoint>,
}

// ============================================================================
// Arrow domain
// ============================================================================

/// A parsed `arrowhead`/`arrowtail` attribute: up to four primitive shapes
/// stacked along the edge axis.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ArrowType {
    pub shapes: Vec<ArrowShape>,
}

impl ArrowType {
    pub fn single(kind: ArrowShapeKind) -> Self {
        ArrowType {
            shapes: vec![ArrowShape::new(kind)],
        }
    }
}

/// One arrow primitive with its modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrowShape {
    pub kind: ArrowShapeKind,
    /// `o` modifier: outline only, no fill.
    pub open: bool,
    /// `l`/`r` modifier: clip to one side of the edge axis.
    pub side: Option<ArrowSide>,
}

impl ArrowShape {
    pub fn new(kind: ArrowShapeKind) -> Self {
        ArrowShape {
            kind,
            open: false,
            side: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrowShapeKind {
    Normal,
    Inv,
    Dot,
    Vee,
    Tee,
    Box,
    Crow,
    Diamond,
    Curve,
    ICurve,
    None,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrowSide {
    Left,
    Right,
}

// ============================================================================
// Enumerated attributes
// ============================================================================

/// Edge `dir` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirType {
    Forward,
    Back,
    Both,
    None,
}

/// Graph `layout` attribute: the named Graphviz layout engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutEngine {
    Circo,
    Dot,
    Fdp,
    Neato,
    Osage,
    Patchwork,
    Sfdp,
    Twopi,
}

/// Graph `rankdir` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rankdir {
    TopBottom,
    LeftRight,
    BottomTop,
    RightLeft,
}

/// Graph `splines` attribute: the edge routing mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplinesMode {
    /// `splines=""` — no edges are drawn.
    Empty,
    None,
    Line,
    False,
    Polyline,
    Ortho,
    Curved,
    Compound,
    Spline,
    True,
}
