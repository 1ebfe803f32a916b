//! Default values and immutable configuration tables.
//!
//! DOT sizes are in length units of 1/72 of the renderer pixel scale; the
//! ×72 factor here matches the renderer's pixel convention and must be
//! preserved.

use crate::attrgraph::Color;
use crate::types::Size;

/// DOT's default node width (0.75 length units × 72 px).
pub const NODE_WIDTH: f64 = 0.75 * 72.0;
/// DOT's default node height (0.5 length units × 72 px).
pub const NODE_HEIGHT: f64 = 0.5 * 72.0;
/// Default `arrowsize` multiplier.
pub const ARROW_SIZE: f64 = 1.0;
/// Length of one arrow primitive's slot along the edge axis, in px,
/// before the `arrowsize` multiplier.
pub const ARROW_SLOT: f64 = 10.0;

/// Immutable per-engine configuration, constructed once and passed in
/// explicitly rather than living as ambient global state.
#[derive(Clone, Debug)]
pub struct Defaults {
    pub node_size: Size,
    /// Fill used for `style=filled` nodes with neither `fillcolor` nor
    /// `color` set.
    pub node_fill_color: Color,
    pub arrow_size: f64,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            node_size: Size::new(NODE_WIDTH, NODE_HEIGHT),
            node_fill_color: Color::named("lightgrey"),
            arrow_size: ARROW_SIZE,
        }
    }
}
