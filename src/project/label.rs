//! Label measurement seam and anchor placement.
//!
//! DOT anchors are center points; the renderer wants top-left corners.
//! Text extents come from an external measurement collaborator — the
//! engine never shapes text itself, but ships a deterministic
//! proportional-width measurer so it works standalone.

use crate::types::{Point, Size};

/// External text-measurement collaborator. Called only for labels that are
/// not record-based or embedded-markup (those lay themselves out).
pub trait TextMeasurer {
    fn measure(&self, text: &str) -> Size;
}

/// Convert a center-based anchor to the renderer's top-left convention,
/// optionally inverting the vertical axis of the source coordinate.
pub fn to_top_left(center: Point, extent: Size, invert_y: bool) -> Point {
    let y = if invert_y { -center.y } else { center.y };
    Point::new(center.x - extent.w / 2.0, y - extent.h / 2.0)
}

/// Proportional per-character advance widths for printable ASCII, in
/// hundredths of the average character cell.
#[rustfmt::skip]
const CHAR_WIDTHS: [u8; 95] = [
    45,  55,  62, 115,  90, 132, 125,  40,
    55,  55,  71, 115,  45,  48,  45,  50,
    91,  91,  91,  91,  91,  91,  91,  91,
    91,  91,  50,  50, 120, 120, 120,  78,
   142, 102, 105, 110, 115, 105,  98, 105,
   125,  58,  58, 107,  95, 145, 125, 115,
    95, 115, 107,  95,  97, 118, 102, 150,
   100,  93, 100,  58,  50,  58, 119,  72,
    72,  86,  92,  80,  92,  85,  52,  92,
    92,  47,  47,  88,  48, 135,  92,  86,
    92,  92,  69,  75,  58,  92,  80, 121,
    81,  80,  76,  91,  49,  91, 118,
];

/// Default measurer: proportional character widths against a nominal font
/// size, multi-line aware. Deterministic and font-independent; renderers
/// with real font metrics substitute their own [`TextMeasurer`].
#[derive(Clone, Copy, Debug)]
pub struct CharWidthMeasurer {
    pub font_size: f64,
}

impl CharWidthMeasurer {
    pub fn new(font_size: f64) -> Self {
        CharWidthMeasurer { font_size }
    }

    fn line_width(&self, line: &str) -> f64 {
        let mut hundredths: u32 = 0;
        for c in line.chars() {
            if (' '..='~').contains(&c) {
                hundredths += CHAR_WIDTHS[(c as usize) - 0x20] as u32;
            } else {
                hundredths += 100;
            }
        }
        // One character cell is 0.6 of the font size.
        f64::from(hundredths) / 100.0 * self.font_size * 0.6
    }
}

impl Default for CharWidthMeasurer {
    fn default() -> Self {
        // DOT's default font size in points.
        CharWidthMeasurer::new(14.0)
    }
}

impl TextMeasurer for CharWidthMeasurer {
    fn measure(&self, text: &str) -> Size {
        let line_height = self.font_size * 1.2;
        let mut width: f64 = 0.0;
        let mut lines = 0usize;
        for line in text.split('\n') {
            width = width.max(self.line_width(line));
            lines += 1;
        }
        Size::new(width, lines.max(1) as f64 * line_height)
    }
}
