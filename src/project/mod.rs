//! The projection orchestrator.
//!
//! This module is organized into submodules:
//! - `accessors`: typed attribute getters over the input graph
//! - `color`: scheme palettes and color resolution
//! - `geometry`: spline waypoint reconstruction and orthogonal reduction
//! - `style`: shape-family style dispatch and arrow decorations
//! - `layout`: layout-hint selection for emulated layout
//! - `label`: text measurement seam and anchor placement
//! - `defaults`: immutable default tables
//!
//! [`Projector`] drives them in a fixed order per element: the graph
//! record first (so directionality and routing mode are known), then each
//! node, then each edge. Every conversion is a pure function of the
//! element's attributes, the options, and the owning graph's context.

pub mod accessors;
pub mod color;
pub mod defaults;
pub mod geometry;
pub mod label;
pub mod layout;
pub mod style;

pub use defaults::Defaults;
pub use label::{CharWidthMeasurer, TextMeasurer};

use crate::attrgraph::{
    AttrEdge, AttrNode, AttrValue, AttributedGraph, DirType, GraphKind, NodeShape, PolygonShape,
    RecordShape, SplinesMode,
};
use crate::errors::{InvariantViolation, MalformedAttribute, Projected, ProjectionDiagnostic};
use crate::types::{Point, Size};
use crate::visual::{Interpolator, Router, VisualEdge, VisualGraph, VisualNode, VisualShape};

use accessors::{
    get_arrow_type, get_bool, get_color, get_color_list, get_dir, get_esc_string, get_f64,
    get_layout, get_point, get_rankdir, get_shape, get_spline_list, get_splines_mode, get_str,
    get_style,
};
use color::ColorRef;
use geometry::{reconstruct_waypoints, reduce_orthogonal};
use label::to_top_left;
use style::{
    EdgeEnd, ShapeFamily, attach_if_directional, compute_decoration, default_decoration,
    edge_curve_style, is_filled, is_invisible, node_style_fragment, shape_family,
};

/// Projection options, immutable per call.
#[derive(Clone, Copy, Debug)]
pub struct Options {
    /// Compute visual size/position/curve geometry and a layout hint as if
    /// no native layout was run. When false, attribute-supplied geometry is
    /// trusted verbatim and no layout hint is emitted.
    pub emulate_layout: bool,
    /// Suppress consumption of position attributes even when present.
    pub ignore_positions: bool,
    /// Negate the Y component of every consumed coordinate.
    pub invert_y_axis: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            emulate_layout: true,
            ignore_positions: false,
            invert_y_axis: false,
        }
    }
}

/// The owning graph's context an edge conversion depends on.
#[derive(Clone, Copy, Debug)]
pub struct GraphContext {
    pub kind: GraphKind,
    pub splines: Option<SplinesMode>,
}

/// The attribute projection engine. Stateless per call; safe to share
/// across threads and to call concurrently on different inputs.
pub struct Projector<'m> {
    options: Options,
    defaults: Defaults,
    measurer: &'m dyn TextMeasurer,
}

/// Record a per-property failure and carry on with the absence path.
fn report<T>(
    result: Result<Option<T>, MalformedAttribute>,
    diags: &mut Vec<ProjectionDiagnostic>,
) -> Option<T> {
    match result {
        Ok(v) => v,
        Err(e) => {
            diags.push(e.into());
            None
        }
    }
}

/// Turn the `\n` escape into a real newline.
fn decode_label(text: &str) -> String {
    text.replace("\\n", "\n")
}

impl<'m> Projector<'m> {
    pub fn new(options: Options, defaults: Defaults, measurer: &'m dyn TextMeasurer) -> Self {
        Projector {
            options,
            defaults,
            measurer,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Project a whole attributed graph. Failures are scoped: a bad
    /// attribute skips one property, an invariant breach aborts one
    /// element, and siblings are unaffected either way.
    pub fn project(&self, graph: &AttributedGraph) -> Projected<VisualGraph> {
        let mut projected = self.project_graph_attrs(graph);
        let mut diags = std::mem::take(&mut projected.diagnostics);
        let mut visual = projected.value;

        let splines = report(
            get_splines_mode(&graph.attrs, "graph", "splines"),
            &mut diags,
        );
        let ctx = GraphContext {
            kind: graph.kind,
            splines,
        };

        for node in &graph.nodes {
            let p = self.project_node(node);
            diags.extend(p.diagnostics);
            visual.nodes.push(p.value);
        }
        for edge in &graph.edges {
            let p = self.project_edge(edge, &ctx);
            diags.extend(p.diagnostics);
            visual.edges.push(p.value);
        }

        crate::log::debug!(
            nodes = visual.nodes.len(),
            edges = visual.edges.len(),
            diagnostics = diags.len(),
            "projected attributed graph"
        );
        Projected {
            value: visual,
            diagnostics: diags,
        }
    }

    /// Project the graph-level record only (no nodes or edges).
    pub fn project_graph_attrs(&self, graph: &AttributedGraph) -> Projected<VisualGraph> {
        let mut diags = Vec::new();
        let mut visual = VisualGraph::default();

        visual.css_id = report(get_str(&graph.attrs, "graph", "id"), &mut diags)
            .map(str::to_string);

        // Only emulated mode infers a layout algorithm; in native mode the
        // attribute-supplied positions already are the layout.
        if self.options.emulate_layout {
            let engine = report(get_layout(&graph.attrs, "graph", "layout"), &mut diags);
            let rankdir = report(get_rankdir(&graph.attrs, "graph", "rankdir"), &mut diags);
            visual.layout_algorithm = Some(layout::select_layout(engine, rankdir));
        }

        Projected {
            value: visual,
            diagnostics: diags,
        }
    }

    pub fn project_node(&self, node: &AttrNode) -> Projected<VisualNode> {
        let mut diags = Vec::new();
        let el = format!("node '{}'", node.name);
        let attrs = &node.attrs;

        let mut visual = VisualNode {
            name: node.name.clone(),
            ..Default::default()
        };
        visual.css_id = report(get_str(attrs, &el, "id"), &mut diags).map(str::to_string);

        let style_attr = report(get_style(attrs, &el, "style"), &mut diags);
        if is_invisible(style_attr) {
            // Identity only; every other visual property stays unset.
            visual.invisible = true;
            return Projected {
                value: visual,
                diagnostics: diags,
            };
        }

        // Node position is interpreted as the center, so the size must be
        // known before positions can be converted.
        let declared = Size::new(
            report(get_f64(attrs, &el, "width"), &mut diags)
                .map(|w| w * 72.0)
                .unwrap_or(self.defaults.node_size.w),
            report(get_f64(attrs, &el, "height"), &mut diags)
                .map(|h| h * 72.0)
                .unwrap_or(self.defaults.node_size.h),
        );

        // An unset label means the node's name is its label (`\N`).
        let (label, html_label) = match attrs.get("label") {
            Some(AttrValue::Html(markup)) => (markup.clone(), true),
            _ => {
                let text = report(get_str(attrs, &el, "label"), &mut diags)
                    .map(decode_label)
                    .unwrap_or_else(|| node.name.clone());
                (text, false)
            }
        };

        let shape = report(get_shape(attrs, &el, "shape"), &mut diags);
        let family = shape_family(shape, html_label);

        let mut css = String::new();
        let scheme = report(get_str(attrs, &el, "colorscheme"), &mut diags);
        let stroke = report(get_color(attrs, &el, "color"), &mut diags);
        if let Some(c) = stroke {
            css.push_str(&format!("-fx-stroke: {};", color::to_css(scheme, c)));
        }
        if let Some(style) = style_attr {
            for item in &style.items {
                if let Some(fragment) = node_style_fragment(&item.name, family) {
                    css.push_str(fragment);
                }
            }
        }
        // fillcolor only applies once the style asks for it; the fallback
        // chain is fillcolor, then color, then the configured default.
        if is_filled(style_attr) {
            let fill = report(get_color_list(attrs, &el, "fillcolor"), &mut diags);
            let fallback = stroke.unwrap_or(&self.defaults.node_fill_color);
            if let Some(c) = color::resolve(scheme, fill.map(ColorRef::List), Some(fallback)) {
                css.push_str(&format!("-fx-fill: {c};"));
            }
        }

        let mut rounded = false;
        visual.shape = match family {
            ShapeFamily::Polygon => Some(VisualShape::Polygon(match shape {
                Some(NodeShape::Polygon(p)) => *p,
                _ => PolygonShape::Ellipse,
            })),
            ShapeFamily::Record => {
                rounded = matches!(shape, Some(NodeShape::Record(RecordShape::MRecord)));
                Some(VisualShape::Record { rounded })
            }
            ShapeFamily::Html => Some(VisualShape::Html),
            ShapeFamily::None => {
                if let Some(NodeShape::Custom(name)) = shape {
                    diags.push(ProjectionDiagnostic::Unsupported {
                        element: el.clone(),
                        what: format!("custom shape '{name}'"),
                    });
                }
                None
            }
        };

        if family == ShapeFamily::Record {
            // Record shapes render as bordered boxes, so the fill becomes a
            // background; Mrecord additionally rounds both border and fill.
            css = css.replace("-fx-fill", "-fx-background-color");
            if rounded {
                css.push_str("-fx-background-radius:10px;-fx-border-radius:10px;");
            }
            // Graphviz draws a solid border unless the style said otherwise.
            if !css.contains("-fx-border-style:") {
                css.push_str("-fx-border-style:solid;");
            }
        }
        if !css.is_empty() {
            visual.shape_style = Some(css);
        }

        // Record and HTML labels are consumed by the shape itself.
        let label_is_shape = matches!(family, ShapeFamily::Record | ShapeFamily::Html);
        if !label_is_shape {
            visual.label = Some(label.clone());
        }

        visual.external_label =
            report(get_str(attrs, &el, "xlabel"), &mut diags).map(str::to_string);

        // Emulated layout sizes the node to enclose its label; a record or
        // HTML label dictates its own extent, and fixedsize pins the
        // declared size regardless.
        let fixedsize = report(get_bool(attrs, &el, "fixedsize"), &mut diags).unwrap_or(false);
        let size = if self.options.emulate_layout && !fixedsize && !label_is_shape {
            declared.max(self.measurer.measure(&label))
        } else {
            declared
        };
        visual.size = Some(size);

        if !self.options.ignore_positions {
            if let Some(pos) = report(get_point(attrs, &el, "pos"), &mut diags) {
                visual.position = Some(to_top_left(
                    Point::new(pos.x, pos.y),
                    size,
                    self.options.invert_y_axis,
                ));
                // A user-pinned position must survive any layout run.
                visual.layout_irrelevant = pos.input_only;
            }
        }

        if let Some(lines) = report(get_esc_string(attrs, &el, "tooltip"), &mut diags) {
            visual.tooltip = Some(lines.join("\n"));
        }

        if !self.options.ignore_positions {
            if let Some(xlp) = report(get_point(attrs, &el, "xlp"), &mut diags) {
                if let Some(xlabel) = visual.external_label.clone() {
                    visual.external_label_position = Some(self.place_label(&xlabel, xlp));
                }
            }
        }

        Projected {
            value: visual,
            diagnostics: diags,
        }
    }

    pub fn project_edge(&self, edge: &AttrEdge, ctx: &GraphContext) -> Projected<VisualEdge> {
        let mut diags = Vec::new();
        let el = format!("edge '{} -> {}'", edge.source, edge.target);
        let attrs = &edge.attrs;

        let mut visual = VisualEdge {
            source: edge.source.clone(),
            target: edge.target.clone(),
            ..Default::default()
        };
        visual.css_id = report(get_str(attrs, &el, "id"), &mut diags).map(str::to_string);
        visual.label = report(get_str(attrs, &el, "label"), &mut diags).map(decode_label);
        visual.external_label =
            report(get_str(attrs, &el, "xlabel"), &mut diags).map(decode_label);
        visual.target_label =
            report(get_str(attrs, &el, "headlabel"), &mut diags).map(decode_label);
        visual.source_label =
            report(get_str(attrs, &el, "taillabel"), &mut diags).map(decode_label);

        let style_attr = report(get_style(attrs, &el, "style"), &mut diags);
        let curve = edge_curve_style(style_attr);
        if curve.invisible {
            visual.invisible = true;
        }
        let mut curve_css = curve.css;

        // Effective direction defaults to forward on directed graphs.
        let dir = report(get_dir(attrs, &el, "dir"), &mut diags).unwrap_or(match ctx.kind {
            GraphKind::Directed => DirType::Forward,
            GraphKind::Undirected => DirType::None,
        });

        let scheme = report(get_str(attrs, &el, "colorscheme"), &mut diags);
        let color_list = report(get_color_list(attrs, &el, "color"), &mut diags);
        let stroke = color::resolve(scheme, color_list.map(ColorRef::List), None);

        let mut source_deco_style = None;
        let mut target_deco_style = None;
        if let Some(c) = &stroke {
            let stroke_css = format!("-fx-stroke: {c};");
            curve_css.push_str(&stroke_css);
            // Decorations inherit the edge color on stroke and fill alike.
            let deco_css = format!("{stroke_css}-fx-fill: {c};");
            source_deco_style = Some(deco_css.clone());
            target_deco_style = Some(deco_css);
        }
        visual.curve_style = Some(curve_css);

        // An explicit fillcolor overrides the inherited decoration fill.
        let fillcolor = report(get_color(attrs, &el, "fillcolor"), &mut diags);
        if let Some(c) = fillcolor.map(|c| color::to_css(scheme, c)) {
            let fill_css = format!("-fx-fill: {c};");
            source_deco_style = Some(source_deco_style.unwrap_or_default() + &fill_css);
            target_deco_style = Some(target_deco_style.unwrap_or_default() + &fill_css);
        }

        let arrow_size =
            report(get_f64(attrs, &el, "arrowsize"), &mut diags).unwrap_or(self.defaults.arrow_size);

        // Decorations are always computed, then attached only when the
        // effective direction points at that end.
        let arrowhead = report(get_arrow_type(attrs, &el, "arrowhead"), &mut diags);
        let target_decoration = match arrowhead {
            Some(arrow) if !arrow.shapes.is_empty() => Some(compute_decoration(arrow, arrow_size)),
            // An empty or absent list synthesizes the default arrow on
            // directed graphs only.
            _ => (ctx.kind == GraphKind::Directed).then(|| default_decoration(arrow_size)),
        };
        if attach_if_directional(dir, EdgeEnd::Target) {
            if let Some(mut decoration) = target_decoration {
                decoration.css_style = target_deco_style.clone();
                visual.target_decoration = Some(decoration);
                visual.target_decoration_style = target_deco_style;
            }
        }

        let arrowtail = report(get_arrow_type(attrs, &el, "arrowtail"), &mut diags);
        let source_decoration = match arrowtail {
            Some(arrow) if !arrow.shapes.is_empty() => Some(compute_decoration(arrow, arrow_size)),
            _ => (ctx.kind == GraphKind::Directed).then(|| default_decoration(arrow_size)),
        };
        if attach_if_directional(dir, EdgeEnd::Source) {
            if let Some(mut decoration) = source_decoration {
                decoration.css_style = source_deco_style.clone();
                visual.source_decoration = Some(decoration);
                visual.source_decoration_style = source_deco_style;
            }
        }

        // Geometry is only consumed in native mode; emulated layout would
        // not match attribute-supplied curves anyway.
        if !self.options.emulate_layout {
            if matches!(ctx.splines, Some(SplinesMode::Empty) | Some(SplinesMode::None)) {
                visual.invisible = true;
            }

            if !self.options.ignore_positions {
                if let Some(splines) = report(get_spline_list(attrs, &el, "pos"), &mut diags) {
                    let waypoints =
                        reconstruct_waypoints(splines, self.options.invert_y_axis);
                    if waypoints.len() < 2 {
                        diags.push(
                            InvariantViolation::new(format!(
                                "{el}: spline list reconstructed to {} waypoints",
                                waypoints.len()
                            ))
                            .into(),
                        );
                        return Projected {
                            value: visual,
                            diagnostics: diags,
                        };
                    }
                    if let Err(e) =
                        self.route_edge(&mut visual, ctx, &el, &waypoints, &mut diags)
                    {
                        diags.push(e.into());
                        return Projected {
                            value: visual,
                            diagnostics: diags,
                        };
                    }
                }

                self.place_edge_labels(&mut visual, attrs, &el, &mut diags);
            }
        }

        Projected {
            value: visual,
            diagnostics: diags,
        }
    }

    /// Select router, interpolator and control-point subset for the
    /// routing mode given by the graph `splines` attribute.
    fn route_edge(
        &self,
        visual: &mut VisualEdge,
        ctx: &GraphContext,
        el: &str,
        waypoints: &[Point],
        diags: &mut Vec<ProjectionDiagnostic>,
    ) -> Result<(), InvariantViolation> {
        let first = waypoints[0];
        let last = waypoints[waypoints.len() - 1];
        let interior = || waypoints[1..waypoints.len() - 1].to_vec();

        match ctx.splines {
            Some(SplinesMode::Line) | Some(SplinesMode::False) => {
                // Straight connection, anchors only.
                visual.interpolator = Some(Interpolator::Polyline);
                visual.router = Some(Router::Straight);
                visual.start_point = Some(first);
                visual.end_point = Some(last);
            }
            Some(SplinesMode::Polyline) => {
                visual.interpolator = Some(Interpolator::Polyline);
                visual.router = Some(Router::Straight);
                visual.start_point = Some(first);
                visual.end_point = Some(last);
                visual.control_points = Some(interior());
            }
            Some(SplinesMode::Ortho) => {
                visual.interpolator = Some(Interpolator::Polyline);
                visual.router = Some(Router::Orthogonal);
                visual.start_point = Some(first);
                visual.end_point = Some(last);
                visual.control_points = Some(reduce_orthogonal(waypoints)?);
            }
            Some(SplinesMode::Compound) => {
                diags.push(ProjectionDiagnostic::Unsupported {
                    element: el.to_string(),
                    what: "splines=compound routing".to_string(),
                });
            }
            // spline, true, curved and unset all take the B-spline path.
            _ => {
                visual.interpolator = Some(Interpolator::BSpline);
                visual.router = Some(Router::Straight);
                visual.start_point = Some(first);
                visual.end_point = Some(last);
                // The anchors provide the first and last waypoints, so
                // they are not control points.
                visual.control_points = Some(interior());
            }
        }
        Ok(())
    }

    /// Convert the four optional label anchors; each needs both its text
    /// and its anchor attribute to be present.
    fn place_edge_labels(
        &self,
        visual: &mut VisualEdge,
        attrs: &crate::attrgraph::AttrMap,
        el: &str,
        diags: &mut Vec<ProjectionDiagnostic>,
    ) {
        if let Some(text) = visual.label.clone() {
            if let Some(anchor) = report(get_point(attrs, el, "lp"), diags) {
                visual.label_position = Some(self.place_label(&text, anchor));
            }
        }
        if let Some(text) = visual.external_label.clone() {
            if let Some(anchor) = report(get_point(attrs, el, "xlp"), diags) {
                visual.external_label_position = Some(self.place_label(&text, anchor));
            }
        }
        if let Some(text) = visual.target_label.clone() {
            if let Some(anchor) = report(get_point(attrs, el, "head_lp"), diags) {
                visual.target_label_position = Some(self.place_label(&text, anchor));
            }
        }
        if let Some(text) = visual.source_label.clone() {
            if let Some(anchor) = report(get_point(attrs, el, "tail_lp"), diags) {
                visual.source_label_position = Some(self.place_label(&text, anchor));
            }
        }
    }

    fn place_label(&self, text: &str, anchor: crate::attrgraph::AttrPoint) -> Point {
        let extent = self.measurer.measure(text);
        to_top_left(
            Point::new(anchor.x, anchor.y),
            extent,
            self.options.invert_y_axis,
        )
    }
}
