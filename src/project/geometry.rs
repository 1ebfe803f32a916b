//! Edge geometry reconstruction.
//!
//! DOT encodes an edge's curve as one or more B-spline segments with
//! optional explicit endpoints. The waypoint encoding used downstream is
//! deliberate: when a segment has no explicit start (end), its first (last)
//! control point appears *twice*, so the first and last waypoints always
//! act as the edge's anchor points.

use crate::attrgraph::Spline;
use crate::errors::InvariantViolation;
use crate::types::Point;

/// Rebuild the full ordered waypoint sequence from a spline list.
///
/// Per segment, in input order: `start ?? control[0]`, every control point,
/// `end ?? control[last]`. Y coordinates are negated when `invert_y`.
pub fn reconstruct_waypoints(splines: &[Spline], invert_y: bool) -> Vec<Point> {
    let y_sign = if invert_y { -1.0 } else { 1.0 };
    let mut waypoints = Vec::new();
    for spline in splines {
        let Some(first) = spline.control.first() else {
            // A spline without control points carries no geometry.
            continue;
        };
        let last = spline.control.last().unwrap_or(first);

        let start = spline.start.as_ref().unwrap_or(first);
        waypoints.push(Point::new(start.x, y_sign * start.y));

        for cp in &spline.control {
            waypoints.push(Point::new(cp.x, y_sign * cp.y));
        }

        let end = spline.end.as_ref().unwrap_or(last);
        waypoints.push(Point::new(end.x, y_sign * end.y));
    }
    waypoints
}

/// Reduce a waypoint sequence to the control points an orthogonal router
/// consumes.
///
/// Strips the anchor points, collapses redundant waypoints on straight
/// axis-aligned runs, then strips the anchor duplicates the encoding left
/// at either end of the interior. An interior of two or fewer points
/// reduces to no control points at all (the router only needs the
/// anchors); fewer than two waypoints is an engine bug upstream.
pub fn reduce_orthogonal(waypoints: &[Point]) -> Result<Vec<Point>, InvariantViolation> {
    if waypoints.len() < 2 {
        return Err(InvariantViolation::new(format!(
            "waypoint list must hold at least 2 points, got {}",
            waypoints.len()
        )));
    }
    let mut interior = waypoints[1..waypoints.len() - 1].to_vec();
    collapse_collinear(&mut interior);
    if interior.len() <= 2 {
        return Ok(Vec::new());
    }
    interior.remove(0);
    interior.pop();
    Ok(interior)
}

/// Remove every interior point sitting on a straight axis-aligned run,
/// scanning from the end-adjacent side toward the start-adjacent side.
/// Removal is keyed on exact coordinate equality, so the result depends
/// only on input order.
fn collapse_collinear(points: &mut Vec<Point>) {
    let mut i = points.len() as isize - 2;
    while i > 0 {
        let p = points[(i + 1) as usize];
        let q = points[i as usize];
        let r = points[(i - 1) as usize];
        if (p.x == q.x && q.x == r.x) || (p.y == q.y && q.y == r.y) {
            points.remove(i as usize);
        }
        i -= 1;
    }
}
