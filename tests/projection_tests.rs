//! End-to-end projection scenarios over whole attributed graphs.

use dotviz::attrgraph::{
    ArrowShape, ArrowShapeKind, ArrowType, AttrEdge, AttrNode, AttrPoint, AttrValue,
    AttributedGraph, Color, DirType, GraphKind, LayoutEngine, NodeShape, Rankdir, RecordShape,
    Spline, SplinesMode, Style,
};
use dotviz::project::defaults::ARROW_SLOT;
use dotviz::project::Options;
use dotviz::types::{Point, Size};
use dotviz::visual::{Interpolator, LayoutHint, Router, TreeOrientation, VisualShape};

fn native_options() -> Options {
    Options {
        emulate_layout: false,
        ..Options::default()
    }
}

#[test]
fn directed_edge_gets_default_head_decoration_only() {
    // digraph { a -> b } with no dir and no arrowhead.
    let mut graph = AttributedGraph::new(GraphKind::Directed);
    graph.nodes.push(AttrNode::new("a"));
    graph.nodes.push(AttrNode::new("b"));
    graph.edges.push(AttrEdge::new("a", "b"));

    let projected = dotviz::project(&graph, Options::default());
    assert!(projected.is_clean());

    let edge = &projected.value.edges[0];
    let head = edge.target_decoration.as_ref().expect("default head arrow");
    assert_eq!(head.primitives.len(), 1);
    assert_eq!(head.primitives[0].kind, ArrowShapeKind::Normal);
    assert!(edge.source_decoration.is_none());
    assert!(edge.source_decoration_style.is_none());
}

#[test]
fn undirected_edge_has_no_decorations() {
    let mut graph = AttributedGraph::new(GraphKind::Undirected);
    graph.nodes.push(AttrNode::new("a"));
    graph.nodes.push(AttrNode::new("b"));
    graph.edges.push(AttrEdge::new("a", "b"));

    let edge = &dotviz::project(&graph, Options::default()).value.edges[0];
    assert!(edge.target_decoration.is_none());
    assert!(edge.source_decoration.is_none());
}

#[test]
fn bare_node_projects_to_dot_defaults() {
    let mut graph = AttributedGraph::new(GraphKind::Directed);
    graph.nodes.push(AttrNode::new("n"));

    let node = &dotviz::project(&graph, Options::default()).value.nodes[0];
    assert_eq!(node.shape, Some(VisualShape::Polygon(dotviz::attrgraph::PolygonShape::Ellipse)));
    assert_eq!(node.label.as_deref(), Some("n"));
    assert_eq!(node.size, Some(Size::new(0.75 * 72.0, 0.5 * 72.0)));
}

#[test]
fn inverted_y_axis_flips_node_position() {
    // Node at center (5,5), size 10×10: top-left is (0,-10) when inverted.
    let mut graph = AttributedGraph::new(GraphKind::Directed);
    graph.nodes.push(
        AttrNode::new("n")
            .with("width", AttrValue::Str((10.0 / 72.0).to_string()))
            .with("height", AttrValue::Str((10.0 / 72.0).to_string()))
            .with("fixedsize", AttrValue::Bool(true))
            .with("pos", AttrValue::Point(AttrPoint::new(5.0, 5.0))),
    );

    let options = Options {
        invert_y_axis: true,
        ..Options::default()
    };
    let node = &dotviz::project(&graph, options).value.nodes[0];
    let pos = node.position.unwrap();
    assert!((pos.x - 0.0).abs() < 1e-9);
    assert!((pos.y - -10.0).abs() < 1e-9);
}

#[test]
fn ignore_positions_suppresses_all_anchors() {
    let mut graph = AttributedGraph::new(GraphKind::Directed);
    graph.nodes.push(
        AttrNode::new("n")
            .with("pos", AttrValue::Point(AttrPoint::new(5.0, 5.0)))
            .with("xlabel", AttrValue::Str("out".into()))
            .with("xlp", AttrValue::Point(AttrPoint::new(9.0, 9.0))),
    );

    let options = Options {
        ignore_positions: true,
        ..Options::default()
    };
    let node = &dotviz::project(&graph, options).value.nodes[0];
    assert!(node.position.is_none());
    assert!(node.external_label_position.is_none());
    assert_eq!(node.external_label.as_deref(), Some("out"));
}

#[test]
fn layout_hint_follows_engine_and_rankdir() {
    let mut graph = AttributedGraph::new(GraphKind::Directed);
    graph
        .attrs
        .insert("layout", AttrValue::Layout(LayoutEngine::Neato));
    assert_eq!(
        dotviz::project(&graph, Options::default())
            .value
            .layout_algorithm,
        Some(LayoutHint::Radial)
    );

    let mut tree = AttributedGraph::new(GraphKind::Directed);
    tree.attrs
        .insert("rankdir", AttrValue::Rankdir(Rankdir::LeftRight));
    assert_eq!(
        dotviz::project(&tree, Options::default())
            .value
            .layout_algorithm,
        Some(LayoutHint::Tree(TreeOrientation::LeftRight))
    );

    // Native mode never emits a layout hint.
    assert_eq!(
        dotviz::project(&graph, native_options()).value.layout_algorithm,
        None
    );
}

#[test]
fn ortho_splines_reduce_to_router_control_points() {
    let mut graph = AttributedGraph::new(GraphKind::Directed);
    graph
        .attrs
        .insert("splines", AttrValue::Splines(SplinesMode::Ortho));
    graph.nodes.push(AttrNode::new("a"));
    graph.nodes.push(AttrNode::new("b"));
    graph.edges.push(AttrEdge::new("a", "b").with(
        "pos",
        AttrValue::SplineList(vec![Spline {
            start: None,
            end: None,
            control: vec![
                AttrPoint::new(10.0, 10.0),
                AttrPoint::new(20.0, 10.0),
                AttrPoint::new(20.0, 20.0),
                AttrPoint::new(30.0, 20.0),
            ],
        }]),
    ));

    let edge = &dotviz::project(&graph, native_options()).value.edges[0];
    assert_eq!(edge.router, Some(Router::Orthogonal));
    assert_eq!(edge.start_point, Some(Point::new(10.0, 10.0)));
    assert_eq!(edge.end_point, Some(Point::new(30.0, 20.0)));
    assert_eq!(
        edge.control_points.as_deref(),
        Some(&[Point::new(20.0, 10.0), Point::new(20.0, 20.0)][..])
    );
}

#[test]
fn routing_mode_table() {
    let spline = Spline {
        start: None,
        end: None,
        control: vec![
            AttrPoint::new(0.0, 0.0),
            AttrPoint::new(10.0, 0.0),
            AttrPoint::new(20.0, 0.0),
        ],
    };
    let cases = [
        (Some(SplinesMode::Line), Some(Interpolator::Polyline), false),
        (Some(SplinesMode::False), Some(Interpolator::Polyline), false),
        (Some(SplinesMode::Polyline), Some(Interpolator::Polyline), true),
        (Some(SplinesMode::Spline), Some(Interpolator::BSpline), true),
        (None, Some(Interpolator::BSpline), true),
    ];
    for (mode, interpolator, has_controls) in cases {
        let mut graph = AttributedGraph::new(GraphKind::Directed);
        if let Some(mode) = mode {
            graph.attrs.insert("splines", AttrValue::Splines(mode));
        }
        graph
            .edges
            .push(AttrEdge::new("a", "b").with("pos", AttrValue::SplineList(vec![spline.clone()])));

        let edge = &dotviz::project(&graph, native_options()).value.edges[0];
        assert_eq!(edge.interpolator, interpolator, "mode {mode:?}");
        assert_eq!(edge.router, Some(Router::Straight), "mode {mode:?}");
        assert_eq!(edge.control_points.is_some(), has_controls, "mode {mode:?}");
    }
}

#[test]
fn compound_splines_are_recorded_as_unsupported() {
    let mut graph = AttributedGraph::new(GraphKind::Directed);
    graph
        .attrs
        .insert("splines", AttrValue::Splines(SplinesMode::Compound));
    graph.edges.push(AttrEdge::new("a", "b").with(
        "pos",
        AttrValue::SplineList(vec![Spline {
            start: None,
            end: None,
            control: vec![AttrPoint::new(0.0, 0.0), AttrPoint::new(5.0, 5.0)],
        }]),
    ));

    let projected = dotviz::project(&graph, native_options());
    assert!(!projected.is_clean());
    let edge = &projected.value.edges[0];
    assert!(edge.router.is_none());
    assert!(edge.control_points.is_none());
}

#[test]
fn empty_splines_hide_edges_in_native_mode() {
    let mut graph = AttributedGraph::new(GraphKind::Undirected);
    graph
        .attrs
        .insert("splines", AttrValue::Splines(SplinesMode::None));
    graph.edges.push(AttrEdge::new("a", "b"));

    assert!(dotviz::project(&graph, native_options()).value.edges[0].invisible);
    // Emulated mode leaves the edge visible.
    assert!(!dotviz::project(&graph, Options::default()).value.edges[0].invisible);
}

#[test]
fn edge_color_propagates_to_curve_and_decoration() {
    let mut graph = AttributedGraph::new(GraphKind::Directed);
    graph.edges.push(
        AttrEdge::new("a", "b")
            .with("color", AttrValue::Color(Color::named("red")))
            .with("dir", AttrValue::Dir(DirType::Both)),
    );

    let edge = &dotviz::project(&graph, Options::default()).value.edges[0];
    let curve = edge.curve_style.as_deref().unwrap();
    assert!(curve.contains("-fx-stroke: #ff0000;"));
    for style in [
        edge.target_decoration_style.as_deref().unwrap(),
        edge.source_decoration_style.as_deref().unwrap(),
    ] {
        assert!(style.contains("-fx-stroke: #ff0000;"));
        assert!(style.contains("-fx-fill: #ff0000;"));
    }
    let deco = edge.target_decoration.as_ref().unwrap();
    assert_eq!(deco.css_style.as_deref(), edge.target_decoration_style.as_deref());
}

#[test]
fn multivalued_color_list_uses_first_entry() {
    let mut graph = AttributedGraph::new(GraphKind::Directed);
    graph.edges.push(AttrEdge::new("a", "b").with(
        "color",
        AttrValue::ColorList(vec![Color::named("blue"), Color::named("red")]),
    ));

    let edge = &dotviz::project(&graph, Options::default()).value.edges[0];
    assert!(edge.curve_style.as_deref().unwrap().contains("-fx-stroke: #0000ff;"));
}

#[test]
fn explicit_arrowhead_overrides_the_default() {
    let mut graph = AttributedGraph::new(GraphKind::Directed);
    graph.edges.push(
        AttrEdge::new("a", "b")
            .with(
                "arrowhead",
                AttrValue::ArrowType(ArrowType {
                    shapes: vec![
                        ArrowShape::new(ArrowShapeKind::Diamond),
                        ArrowShape::new(ArrowShapeKind::Dot),
                    ],
                }),
            )
            .with("arrowsize", AttrValue::Str("2".into())),
    );

    let edge = &dotviz::project(&graph, Options::default()).value.edges[0];
    let deco = edge.target_decoration.as_ref().unwrap();
    assert_eq!(deco.primitives.len(), 2);
    assert_eq!(deco.primitives[0].kind, ArrowShapeKind::Diamond);
    // arrowsize=2 doubles each primitive's slot.
    match &deco.primitives[1].geometry {
        dotviz::visual::PrimitiveGeometry::Ellipse(rect) => assert!(rect.x >= 2.0 * ARROW_SLOT),
        other => panic!("dot should be an ellipse, got {other:?}"),
    }
}

#[test]
fn record_node_styles_use_border_vocabulary() {
    let mut graph = AttributedGraph::new(GraphKind::Directed);
    graph.nodes.push(
        AttrNode::new("r")
            .with("shape", AttrValue::Shape(NodeShape::Record(RecordShape::MRecord)))
            .with("style", AttrValue::Style(Style::of(&["filled", "bold"]))),
    );

    let node = &dotviz::project(&graph, Options::default()).value.nodes[0];
    assert_eq!(node.shape, Some(VisualShape::Record { rounded: true }));
    // Record labels are consumed by the shape.
    assert!(node.label.is_none());

    let style = node.shape_style.as_deref().unwrap();
    assert!(style.contains("-fx-border-width: 2;"));
    assert!(style.contains("-fx-background-color: #d3d3d3;"));
    assert!(style.contains("-fx-background-radius:10px;-fx-border-radius:10px;"));
    assert!(style.contains("-fx-border-style:solid;"));
    assert!(!style.contains("-fx-fill"));
}

#[test]
fn polygon_fill_chain_prefers_fillcolor_then_color() {
    let filled = Style::of(&["filled"]);
    let mut graph = AttributedGraph::new(GraphKind::Directed);
    graph.nodes.push(
        AttrNode::new("a")
            .with("style", AttrValue::Style(filled.clone()))
            .with("fillcolor", AttrValue::Color(Color::named("gold")))
            .with("color", AttrValue::Color(Color::named("red"))),
    );
    graph.nodes.push(
        AttrNode::new("b")
            .with("style", AttrValue::Style(filled.clone()))
            .with("color", AttrValue::Color(Color::named("red"))),
    );
    graph
        .nodes
        .push(AttrNode::new("c").with("style", AttrValue::Style(filled)));

    let nodes = dotviz::project(&graph, Options::default()).value.nodes;
    assert!(nodes[0].shape_style.as_deref().unwrap().contains("-fx-fill: #ffd700;"));
    assert!(nodes[1].shape_style.as_deref().unwrap().contains("-fx-fill: #ff0000;"));
    // Neither fillcolor nor color: the configured default fill applies.
    assert!(nodes[2].shape_style.as_deref().unwrap().contains("-fx-fill: #d3d3d3;"));
}

#[test]
fn labels_decode_newline_escapes() {
    let mut graph = AttributedGraph::new(GraphKind::Directed);
    graph
        .nodes
        .push(AttrNode::new("n").with("label", AttrValue::Str("two\\nlines".into())));
    graph
        .edges
        .push(AttrEdge::new("n", "n").with("label", AttrValue::Str("edge\\nlabel".into())));

    let projected = dotviz::project(&graph, Options::default()).value;
    assert_eq!(projected.nodes[0].label.as_deref(), Some("two\nlines"));
    assert_eq!(projected.edges[0].label.as_deref(), Some("edge\nlabel"));
}

#[test]
fn tooltip_lines_join_with_newlines() {
    let mut graph = AttributedGraph::new(GraphKind::Directed);
    graph.nodes.push(AttrNode::new("n").with(
        "tooltip",
        AttrValue::EscString(vec!["first".into(), "second".into()]),
    ));

    let node = &dotviz::project(&graph, Options::default()).value.nodes[0];
    assert_eq!(node.tooltip.as_deref(), Some("first\nsecond"));
}

#[test]
fn css_ids_pass_through_on_every_element_kind() {
    let mut graph = AttributedGraph::new(GraphKind::Directed);
    graph.attrs.insert("id", AttrValue::Str("g".into()));
    graph
        .nodes
        .push(AttrNode::new("n").with("id", AttrValue::Str("node-n".into())));
    graph
        .edges
        .push(AttrEdge::new("n", "n").with("id", AttrValue::Str("edge-n".into())));

    let projected = dotviz::project(&graph, Options::default()).value;
    assert_eq!(projected.css_id.as_deref(), Some("g"));
    assert_eq!(projected.nodes[0].css_id.as_deref(), Some("node-n"));
    assert_eq!(projected.edges[0].css_id.as_deref(), Some("edge-n"));
}

#[test]
fn edge_labels_place_only_with_text_and_anchor() {
    let mut graph = AttributedGraph::new(GraphKind::Directed);
    graph.edges.push(
        AttrEdge::new("a", "b")
            .with("label", AttrValue::Str("mid".into()))
            .with("lp", AttrValue::Point(AttrPoint::new(50.0, 50.0)))
            // Anchor without text: must not produce a position.
            .with("head_lp", AttrValue::Point(AttrPoint::new(90.0, 90.0))),
    );

    let edge = &dotviz::project(&graph, native_options()).value.edges[0];
    let lp = edge.label_position.expect("label has text and anchor");
    // Center-based anchor moved up-left by half the measured extent.
    assert!(lp.x < 50.0 && lp.y < 50.0);
    assert!(edge.target_label_position.is_none());
}

#[test]
fn pinned_position_marks_layout_irrelevant() {
    let mut graph = AttributedGraph::new(GraphKind::Directed);
    graph
        .nodes
        .push(AttrNode::new("n").with("pos", AttrValue::Point(AttrPoint::pinned(10.0, 10.0))));

    let node = &dotviz::project(&graph, Options::default()).value.nodes[0];
    assert!(node.layout_irrelevant);
}

#[test]
fn malformed_attributes_scope_to_one_property() {
    let mut graph = AttributedGraph::new(GraphKind::Directed);
    graph.nodes.push(
        AttrNode::new("n")
            .with("width", AttrValue::Str("not-a-number".into()))
            .with("label", AttrValue::Str("ok".into())),
    );
    graph.nodes.push(AttrNode::new("m"));

    let projected = dotviz::project(&graph, Options::default());
    assert_eq!(projected.diagnostics.len(), 1);
    // The failing node still converts its other properties.
    assert_eq!(projected.value.nodes[0].label.as_deref(), Some("ok"));
    assert_eq!(
        projected.value.nodes[0].size,
        Some(Size::new(0.75 * 72.0, 0.5 * 72.0))
    );
    // Sibling elements are unaffected.
    assert_eq!(projected.value.nodes[1].label.as_deref(), Some("m"));
}
