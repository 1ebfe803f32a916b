//! dotviz — projects DOT-attributed graphs into renderer-ready visual
//! graphs.
//!
//! The input is an [`attrgraph::AttributedGraph`]: the topology of a DOT
//! graph plus already-parsed, typed attribute values (parsing and semantic
//! validation of the DOT language live upstream). The output is a
//! [`visual::VisualGraph`]: the same topology annotated with concrete
//! geometry, style strings, arrow decorations and layout hints that a
//! scene-graph renderer can draw without interpreting any DOT syntax.
//!
//! The projection is pure and stateless per call: independent elements may
//! be converted concurrently, and failures are scoped — a malformed
//! attribute skips one property, an internal invariant breach aborts one
//! element, and the rest of the graph is unaffected.
//!
//! ```
//! use dotviz::attrgraph::{AttrEdge, AttrNode, AttributedGraph, GraphKind};
//! use dotviz::project::Options;
//!
//! let mut graph = AttributedGraph::new(GraphKind::Directed);
//! graph.nodes.push(AttrNode::new("a"));
//! graph.nodes.push(AttrNode::new("b"));
//! graph.edges.push(AttrEdge::new("a", "b"));
//!
//! let projected = dotviz::project(&graph, Options::default());
//! assert!(projected.is_clean());
//! // Directed edge without `dir`: the head gets the default arrow.
//! assert!(projected.value.edges[0].target_decoration.is_some());
//! ```

pub mod attrgraph;
pub mod errors;
pub mod log;
pub mod project;
pub mod types;
pub mod visual;

pub use errors::{InvariantViolation, MalformedAttribute, Projected, ProjectionDiagnostic};
pub use project::{CharWidthMeasurer, Defaults, Options, Projector, TextMeasurer};
pub use types::{Point, Rect, Size};
pub use visual::{VisualEdge, VisualGraph, VisualNode};

/// Project a graph with the default configuration and the built-in
/// proportional text measurer.
pub fn project(
    graph: &attrgraph::AttributedGraph,
    options: Options,
) -> Projected<visual::VisualGraph> {
    let measurer = CharWidthMeasurer::default();
    Projector::new(options, Defaults::default(), &measurer).project(graph)
}
