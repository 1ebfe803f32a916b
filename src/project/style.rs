//! Style and decoration mapping.
//!
//! Node style keywords dispatch on the shape family: record-based shapes
//! are bordered boxes (`-fx-border-*`), polygon-based shapes are stroked
//! outlines (`-fx-stroke-*`). Edge decorations are computed unconditionally
//! and attached only when the effective direction matches the end.

use glam::DVec2;

use crate::attrgraph::{
    ArrowShape, ArrowShapeKind, ArrowSide, ArrowType, DirType, NodeShape, Style,
};
use crate::types::{Point, Rect};
use crate::visual::{ArrowPrimitive, Decoration, PrimitiveGeometry};

use super::defaults::ARROW_SLOT;

/// The rendering vocabulary an element's shape belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeFamily {
    Polygon,
    Record,
    Html,
    /// Custom shapes: recognized but not rendered.
    None,
}

/// Determine the shape family. An HTML label overrides the shape: the
/// label markup acts as the whole shape.
pub fn shape_family(shape: Option<&NodeShape>, html_label: bool) -> ShapeFamily {
    if html_label {
        return ShapeFamily::Html;
    }
    match shape {
        // Ellipse is the default shape.
        None => ShapeFamily::Polygon,
        Some(NodeShape::Polygon(_)) => ShapeFamily::Polygon,
        Some(NodeShape::Record(_)) => ShapeFamily::Record,
        Some(NodeShape::Custom(_)) => ShapeFamily::None,
    }
}

/// Map one node style keyword to its family-specific style fragment.
///
/// Keywords without a rendering yet (rounded, striped, wedged, diagonals,
/// radial) are accepted and produce no output.
pub fn node_style_fragment(keyword: &str, family: ShapeFamily) -> Option<&'static str> {
    if family == ShapeFamily::Record {
        match keyword {
            "bold" => Some("-fx-border-width: 2;"),
            "dashed" => Some("-fx-border-style:dashed;"),
            "dotted" => Some("-fx-border-style:dotted;"),
            "solid" => Some("-fx-border-style:solid;"),
            _ => None,
        }
    } else {
        match keyword {
            "bold" => Some("-fx-stroke-width:2;"),
            "dashed" => Some("-fx-stroke-dash-array: 7 7;"),
            "dotted" => Some("-fx-stroke-dash-array: 1 6;"),
            "solid" => Some("-fx-stroke-width: 1;"),
            _ => None,
        }
    }
}

/// Computed curve style for an edge.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeCurveStyle {
    pub css: String,
    pub invisible: bool,
}

/// Map the edge style items to a curve style string. When no dash/width
/// style applies, the curve gets a plain butt line cap.
pub fn edge_curve_style(style: Option<&Style>) -> EdgeCurveStyle {
    let mut css = None;
    let mut invisible = false;
    if let Some(style) = style {
        for item in &style.items {
            match item.name.as_str() {
                "dashed" => css = css.or(Some("-fx-stroke-dash-array: 7 7;")),
                "dotted" => css = css.or(Some("-fx-stroke-dash-array: 1 7;")),
                "bold" => css = css.or(Some("-fx-stroke-width: 2;")),
                "invis" => invisible = true,
                // TODO: handle tapered edges
                _ => {}
            }
        }
    }
    EdgeCurveStyle {
        css: css.unwrap_or("-fx-stroke-line-cap: butt;").to_string(),
        invisible,
    }
}

pub fn is_invisible(style: Option<&Style>) -> bool {
    style.is_some_and(|s| s.has("invis"))
}

pub fn is_filled(style: Option<&Style>) -> bool {
    style.is_some_and(|s| s.has("filled"))
}

/// Which end of an edge a decoration belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeEnd {
    /// The tail (arrowtail decorations).
    Source,
    /// The head (arrowhead decorations).
    Target,
}

/// Whether a computed decoration may be attached at the given end. A
/// decoration that fails this check must not be emitted as a property.
pub fn attach_if_directional(dir: DirType, end: EdgeEnd) -> bool {
    match end {
        EdgeEnd::Target => matches!(dir, DirType::Forward | DirType::Both),
        EdgeEnd::Source => matches!(dir, DirType::Back | DirType::Both),
    }
}

/// The default decoration for directed graphs: a single filled normal
/// arrow scaled by `arrowsize`.
pub fn default_decoration(size: f64) -> Decoration {
    compute_decoration(&ArrowType::single(ArrowShapeKind::Normal), size)
}

/// Build the decoration geometry for an explicit arrow-shape list.
///
/// Primitives stack along the local +x axis (origin at the node, +x back
/// along the edge), each occupying a 10 × `size` slot. Fill and stroke
/// colors are applied uniformly by the orchestrator via `css_style`.
pub fn compute_decoration(arrow: &ArrowType, size: f64) -> Decoration {
    let slot = ARROW_SLOT * size;
    let mut primitives = Vec::new();
    let mut offset = 0.0;
    for shape in &arrow.shapes {
        if let Some(geometry) = primitive_geometry(shape, offset, slot) {
            primitives.push(ArrowPrimitive {
                kind: shape.kind,
                geometry,
                filled: !shape.open,
            });
        }
        offset += slot;
    }
    Decoration {
        primitives,
        css_style: None,
    }
}

fn primitive_geometry(shape: &ArrowShape, offset: f64, slot: f64) -> Option<PrimitiveGeometry> {
    // Half-width of a full-height primitive.
    let h = slot / 3.0;
    let o = DVec2::new(offset, 0.0);
    let poly = |pts: &[DVec2]| {
        PrimitiveGeometry::Polygon(pts.iter().map(|v| Point::from_vec(*v + o)).collect())
    };
    let line = |pts: &[DVec2]| {
        PrimitiveGeometry::Polyline(pts.iter().map(|v| Point::from_vec(*v + o)).collect())
    };

    let geometry = match shape.kind {
        ArrowShapeKind::Normal => poly(&[
            DVec2::new(0.0, 0.0),
            DVec2::new(slot, -h),
            DVec2::new(slot, h),
        ]),
        ArrowShapeKind::Inv => poly(&[
            DVec2::new(0.0, -h),
            DVec2::new(0.0, h),
            DVec2::new(slot, 0.0),
        ]),
        ArrowShapeKind::Dot => {
            let d = 0.6 * slot;
            PrimitiveGeometry::Ellipse(Rect::new(offset + (slot - d) / 2.0, -d / 2.0, d, d))
        }
        ArrowShapeKind::Vee => line(&[
            DVec2::new(slot, -h),
            DVec2::new(0.0, 0.0),
            DVec2::new(slot, h),
        ]),
        ArrowShapeKind::Tee => {
            let depth = 0.25 * slot;
            poly(&[
                DVec2::new(0.0, -h),
                DVec2::new(depth, -h),
                DVec2::new(depth, h),
                DVec2::new(0.0, h),
            ])
        }
        ArrowShapeKind::Box => poly(&[
            DVec2::new(0.0, -h),
            DVec2::new(slot, -h),
            DVec2::new(slot, h),
            DVec2::new(0.0, h),
        ]),
        ArrowShapeKind::Crow => poly(&[
            DVec2::new(0.0, 0.0),
            DVec2::new(slot, -h),
            DVec2::new(0.6 * slot, 0.0),
            DVec2::new(slot, h),
        ]),
        ArrowShapeKind::Diamond => poly(&[
            DVec2::new(0.0, 0.0),
            DVec2::new(0.5 * slot, -h),
            DVec2::new(slot, 0.0),
            DVec2::new(0.5 * slot, h),
        ]),
        // The renderer bows the flanks of curve primitives into an arc.
        ArrowShapeKind::Curve => line(&[
            DVec2::new(slot, -h),
            DVec2::new(0.0, 0.0),
            DVec2::new(slot, h),
        ]),
        ArrowShapeKind::ICurve => line(&[
            DVec2::new(0.0, -h),
            DVec2::new(slot, 0.0),
            DVec2::new(0.0, h),
        ]),
        // An empty slot: advances the offset, draws nothing.
        ArrowShapeKind::None => return None,
    };
    Some(match shape.side {
        Some(side) => clip_to_side(geometry, side),
        None => geometry,
    })
}

/// Clip a primitive to one side of the edge axis for the `l`/`r`
/// modifiers: the off-side half collapses onto the axis.
fn clip_to_side(geometry: PrimitiveGeometry, side: ArrowSide) -> PrimitiveGeometry {
    let clamp = |y: f64| match side {
        ArrowSide::Left => y.min(0.0),
        ArrowSide::Right => y.max(0.0),
    };
    match geometry {
        PrimitiveGeometry::Polygon(pts) => PrimitiveGeometry::Polygon(
            pts.into_iter().map(|p| Point::new(p.x, clamp(p.y))).collect(),
        ),
        PrimitiveGeometry::Polyline(pts) => PrimitiveGeometry::Polyline(
            pts.into_iter().map(|p| Point::new(p.x, clamp(p.y))).collect(),
        ),
        PrimitiveGeometry::Ellipse(rect) => {
            let half = Rect::new(rect.x, clamp(rect.y), rect.w, rect.h / 2.0);
            match side {
                ArrowSide::Left => PrimitiveGeometry::Ellipse(half),
                ArrowSide::Right => {
                    PrimitiveGeometry::Ellipse(Rect::new(rect.x, 0.0, rect.w, rect.h / 2.0))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn record_and_polygon_vocabularies_differ() {
        assert_eq!(
            node_style_fragment("bold", ShapeFamily::Record),
            Some("-fx-border-width: 2;")
        );
        assert_eq!(
            node_style_fragment("bold", ShapeFamily::Polygon),
            Some("-fx-stroke-width:2;")
        );
        assert_eq!(
            node_style_fragment("dotted", ShapeFamily::Record),
            Some("-fx-border-style:dotted;")
        );
        assert_eq!(
            node_style_fragment("dotted", ShapeFamily::Polygon),
            Some("-fx-stroke-dash-array: 1 6;")
        );
    }

    #[test]
    fn unimplemented_keywords_are_silent() {
        for kw in ["rounded", "striped", "wedged", "diagonals", "radial"] {
            assert_eq!(node_style_fragment(kw, ShapeFamily::Record), None);
            assert_eq!(node_style_fragment(kw, ShapeFamily::Polygon), None);
        }
    }

    #[test]
    fn edge_style_defaults_to_butt_cap() {
        let style = edge_curve_style(None);
        assert_snapshot!(style.css, @"-fx-stroke-line-cap: butt;");
        assert!(!style.invisible);
    }

    #[test]
    fn edge_dash_styles() {
        let dashed = edge_curve_style(Some(&Style::of(&["dashed"])));
        assert_snapshot!(dashed.css, @"-fx-stroke-dash-array: 7 7;");
        let dotted = edge_curve_style(Some(&Style::of(&["dotted"])));
        assert_snapshot!(dotted.css, @"-fx-stroke-dash-array: 1 7;");
        let bold = edge_curve_style(Some(&Style::of(&["bold"])));
        assert_snapshot!(bold.css, @"-fx-stroke-width: 2;");
    }

    #[test]
    fn invis_edge_style_keeps_default_css() {
        let style = edge_curve_style(Some(&Style::of(&["invis"])));
        assert!(style.invisible);
        assert_eq!(style.css, "-fx-stroke-line-cap: butt;");
    }

    #[test]
    fn attachment_follows_direction() {
        assert!(attach_if_directional(DirType::Forward, EdgeEnd::Target));
        assert!(!attach_if_directional(DirType::Forward, EdgeEnd::Source));
        assert!(attach_if_directional(DirType::Back, EdgeEnd::Source));
        assert!(!attach_if_directional(DirType::Back, EdgeEnd::Target));
        assert!(attach_if_directional(DirType::Both, EdgeEnd::Source));
        assert!(attach_if_directional(DirType::Both, EdgeEnd::Target));
        assert!(!attach_if_directional(DirType::None, EdgeEnd::Source));
        assert!(!attach_if_directional(DirType::None, EdgeEnd::Target));
    }

    #[test]
    fn default_decoration_is_one_filled_normal_arrow() {
        let deco = default_decoration(1.0);
        assert_eq!(deco.primitives.len(), 1);
        let prim = &deco.primitives[0];
        assert_eq!(prim.kind, ArrowShapeKind::Normal);
        assert!(prim.filled);
        let PrimitiveGeometry::Polygon(pts) = &prim.geometry else {
            panic!("normal arrow should be a polygon");
        };
        assert_eq!(pts[0], Point::new(0.0, 0.0));
        assert_eq!(pts[1].x, ARROW_SLOT);
    }

    #[test]
    fn arrowsize_scales_the_slot() {
        let deco = default_decoration(2.0);
        let PrimitiveGeometry::Polygon(pts) = &deco.primitives[0].geometry else {
            panic!()
        };
        assert_eq!(pts[1].x, 2.0 * ARROW_SLOT);
    }

    #[test]
    fn primitives_stack_along_the_axis() {
        let arrow = ArrowType {
            shapes: vec![
                ArrowShape::new(ArrowShapeKind::Inv),
                ArrowShape::new(ArrowShapeKind::Dot),
            ],
        };
        let deco = compute_decoration(&arrow, 1.0);
        assert_eq!(deco.primitives.len(), 2);
        let PrimitiveGeometry::Ellipse(rect) = &deco.primitives[1].geometry else {
            panic!("dot should be an ellipse");
        };
        assert!(rect.x >= ARROW_SLOT);
    }

    #[test]
    fn none_primitive_leaves_a_gap() {
        let arrow = ArrowType {
            shapes: vec![
                ArrowShape::new(ArrowShapeKind::None),
                ArrowShape::new(ArrowShapeKind::Normal),
            ],
        };
        let deco = compute_decoration(&arrow, 1.0);
        assert_eq!(deco.primitives.len(), 1);
        let PrimitiveGeometry::Polygon(pts) = &deco.primitives[0].geometry else {
            panic!()
        };
        assert_eq!(pts[0].x, ARROW_SLOT);
    }

    #[test]
    fn open_modifier_clears_fill() {
        let arrow = ArrowType {
            shapes: vec![ArrowShape {
                kind: ArrowShapeKind::Diamond,
                open: true,
                side: None,
            }],
        };
        let deco = compute_decoration(&arrow, 1.0);
        assert!(!deco.primitives[0].filled);
    }

    #[test]
    fn side_modifier_clips_the_off_side() {
        let arrow = ArrowType {
            shapes: vec![ArrowShape {
                kind: ArrowShapeKind::Normal,
                open: false,
                side: Some(ArrowSide::Left),
            }],
        };
        let deco = compute_decoration(&arrow, 1.0);
        let PrimitiveGeometry::Polygon(pts) = &deco.primitives[0].geometry else {
            panic!()
        };
        assert!(pts.iter().all(|p| p.y <= 0.0));
    }
}
