//! Color scheme resolution.
//!
//! Maps a (scheme, color-or-color-list) pair to a single renderer color
//! string. Multi-valued color lists collapse to their first entry — the
//! renderer binding has no multi-color stroke concept. Scheme tables are
//! read-only statics built once; the resolver holds no other state.

use crate::attrgraph::Color;

/// A borrowed single color or color list, as callers hold either.
#[derive(Clone, Copy, Debug)]
pub enum ColorRef<'a> {
    Single(&'a Color),
    List(&'a [Color]),
}

/// Resolve a color attribute to a renderer color string.
///
/// If `value` is a list, its first entry is used; if `value` is absent (or
/// an empty list), `fallback` applies. The chosen color is resolved against
/// `scheme` (default `x11`); an unresolvable scheme or name falls back to
/// the color's literal form. Returns `None` only when both `value` and
/// `fallback` are absent.
pub fn resolve(
    scheme: Option<&str>,
    value: Option<ColorRef<'_>>,
    fallback: Option<&Color>,
) -> Option<String> {
    let chosen = match value {
        Some(ColorRef::Single(c)) => Some(c),
        Some(ColorRef::List(list)) => list.first(),
        None => None,
    };
    chosen.or(fallback).map(|c| to_css(scheme, c))
}

/// Render one color as a renderer color string.
pub fn to_css(scheme: Option<&str>, color: &Color) -> String {
    match color {
        Color::Rgb { r, g, b, a } => match a {
            Some(a) => format!("#{r:02x}{g:02x}{b:02x}{a:02x}"),
            None => format!("#{r:02x}{g:02x}{b:02x}"),
        },
        Color::Hsv { h, s, v } => {
            format!(
                "hsb({:.0}, {:.0}%, {:.0}%)",
                h * 360.0,
                s * 100.0,
                v * 100.0
            )
        }
        Color::Named(name) => {
            let lower = name.to_ascii_lowercase();
            palette_lookup(scheme.unwrap_or("x11"), &lower)
                .map(str::to_string)
                .unwrap_or(lower)
        }
    }
}

fn palette_lookup(scheme: &str, name: &str) -> Option<&'static str> {
    let overrides: &[(&str, &str)] = match scheme {
        "x11" | "" => X11_OVERRIDES,
        "svg" => SVG_OVERRIDES,
        // Unknown scheme: fall back to the literal name form.
        _ => return None,
    };
    overrides
        .iter()
        .chain(CSS_CORE.iter())
        .find(|(n, _)| *n == name)
        .map(|(_, hex)| *hex)
}

/// Named colors where the X11 and SVG palettes disagree.
const X11_OVERRIDES: &[(&str, &str)] = &[
    ("gray", "#bebebe"),
    ("grey", "#bebebe"),
    ("green", "#00ff00"),
    ("maroon", "#b03060"),
    ("purple", "#a020f0"),
];

const SVG_OVERRIDES: &[(&str, &str)] = &[
    ("gray", "#808080"),
    ("grey", "#808080"),
    ("green", "#008000"),
    ("maroon", "#800000"),
    ("purple", "#800080"),
];

/// The named colors both palettes share (the CSS core set plus the shades
/// DOT defaults rely on).
const CSS_CORE: &[(&str, &str)] = &[
    ("aliceblue", "#f0f8ff"),
    ("antiquewhite", "#faebd7"),
    ("aqua", "#00ffff"),
    ("aquamarine", "#7fffd4"),
    ("azure", "#f0ffff"),
    ("beige", "#f5f5dc"),
    ("bisque", "#ffe4c4"),
    ("black", "#000000"),
    ("blue", "#0000ff"),
    ("blueviolet", "#8a2be2"),
    ("brown", "#a52a2a"),
    ("burlywood", "#deb887"),
    ("cadetblue", "#5f9ea0"),
    ("chartreuse", "#7fff00"),
    ("chocolate", "#d2691e"),
    ("coral", "#ff7f50"),
    ("cornflowerblue", "#6495ed"),
    ("cornsilk", "#fff8dc"),
    ("crimson", "#dc143c"),
    ("cyan", "#00ffff"),
    ("darkblue", "#00008b"),
    ("darkcyan", "#008b8b"),
    ("darkgoldenrod", "#b8860b"),
    ("darkgray", "#a9a9a9"),
    ("darkgreen", "#006400"),
    ("darkgrey", "#a9a9a9"),
    ("darkkhaki", "#bdb76b"),
    ("darkmagenta", "#8b008b"),
    ("darkolivegreen", "#556b2f"),
    ("darkorange", "#ff8c00"),
    ("darkorchid", "#9932cc"),
    ("darkred", "#8b0000"),
    ("darksalmon", "#e9967a"),
    ("darkseagreen", "#8fbc8f"),
    ("darkslateblue", "#483d8b"),
    ("darkslategray", "#2f4f4f"),
    ("darkslategrey", "#2f4f4f"),
    ("darkturquoise", "#00ced1"),
    ("darkviolet", "#9400d3"),
    ("deeppink", "#ff1493"),
    ("deepskyblue", "#00bfff"),
    ("dimgray", "#696969"),
    ("dimgrey", "#696969"),
    ("dodgerblue", "#1e90ff"),
    ("firebrick", "#b22222"),
    ("floralwhite", "#fffaf0"),
    ("forestgreen", "#228b22"),
    ("fuchsia", "#ff00ff"),
    ("gainsboro", "#dcdcdc"),
    ("ghostwhite", "#f8f8ff"),
    ("gold", "#ffd700"),
    ("goldenrod", "#daa520"),
    ("greenyellow", "#adff2f"),
    ("honeydew", "#f0fff0"),
    ("hotpink", "#ff69b4"),
    ("indianred", "#cd5c5c"),
    ("indigo", "#4b0082"),
    ("ivory", "#fffff0"),
    ("khaki", "#f0e68c"),
    ("lavender", "#e6e6fa"),
    ("lavenderblush", "#fff0f5"),
    ("lawngreen", "#7cfc00"),
    ("lemonchiffon", "#fffacd"),
    ("lightblue", "#add8e6"),
    ("lightcoral", "#f08080"),
    ("lightcyan", "#e0ffff"),
    ("lightgoldenrodyellow", "#fafad2"),
    ("lightgray", "#d3d3d3"),
    ("lightgreen", "#90ee90"),
    ("lightgrey", "#d3d3d3"),
    ("lightpink", "#ffb6c1"),
    ("lightsalmon", "#ffa07a"),
    ("lightseagreen", "#20b2aa"),
    ("lightskyblue", "#87cefa"),
    ("lightslategray", "#778899"),
    ("lightslategrey", "#778899"),
    ("lightsteelblue", "#b0c4de"),
    ("lightyellow", "#ffffe0"),
    ("lime", "#00ff00"),
    ("limegreen", "#32cd32"),
    ("linen", "#faf0e6"),
    ("magenta", "#ff00ff"),
    ("mediumaquamarine", "#66cdaa"),
    ("mediumblue", "#0000cd"),
    ("mediumorchid", "#ba55d3"),
    ("mediumpurple", "#9370db"),
    ("mediumseagreen", "#3cb371"),
    ("mediumslateblue", "#7b68ee"),
    ("mediumspringgreen", "#00fa9a"),
    ("mediumturquoise", "#48d1cc"),
    ("mediumvioletred", "#c71585"),
    ("midnightblue", "#191970"),
    ("mintcream", "#f5fffa"),
    ("mistyrose", "#ffe4e1"),
    ("moccasin", "#ffe4b5"),
    ("navajowhite", "#ffdead"),
    ("navy", "#000080"),
    ("oldlace", "#fdf5e6"),
    ("olive", "#808000"),
    ("olivedrab", "#6b8e23"),
    ("orange", "#ffa500"),
    ("orangered", "#ff4500"),
    ("orchid", "#da70d6"),
    ("palegoldenrod", "#eee8aa"),
    ("palegreen", "#98fb98"),
    ("paleturquoise", "#afeeee"),
    ("palevioletred", "#db7093"),
    ("papayawhip", "#ffefd5"),
    ("peachpuff", "#ffdab9"),
    ("peru", "#cd853f"),
    ("pink", "#ffc0cb"),
    ("plum", "#dda0dd"),
    ("powderblue", "#b0e0e6"),
    ("red", "#ff0000"),
    ("rosybrown", "#bc8f8f"),
    ("royalblue", "#4169e1"),
    ("saddlebrown", "#8b4513"),
    ("salmon", "#fa8072"),
    ("sandybrown", "#f4a460"),
    ("seagreen", "#2e8b57"),
    ("seashell", "#fff5ee"),
    ("sienna", "#a0522d"),
    ("silver", "#c0c0c0"),
    ("skyblue", "#87ceeb"),
    ("slateblue", "#6a5acd"),
    ("slategray", "#708090"),
    ("slategrey", "#708090"),
    ("snow", "#fffafa"),
    ("springgreen", "#00ff7f"),
    ("steelblue", "#4682b4"),
    ("tan", "#d2b48c"),
    ("teal", "#008080"),
    ("thistle", "#d8bfd8"),
    ("tomato", "#ff6347"),
    ("turquoise", "#40e0d0"),
    ("violet", "#ee82ee"),
    ("wheat", "#f5deb3"),
    ("white", "#ffffff"),
    ("whitesmoke", "#f5f5f5"),
    ("yellow", "#ffff00"),
    ("yellowgreen", "#9acd32"),
];
