//! Typed attribute accessors.
//!
//! Pure lookups over an element's attribute map: a missing attribute is
//! `Ok(None)`, never an error. A present value of the wrong type (or a
//! numeric attribute that fails to parse) is a [`MalformedAttribute`] the
//! orchestrator must surface — default substitution is reserved strictly
//! for absence.

use crate::attrgraph::{
    ArrowType, AttrMap, AttrPoint, AttrValue, Color, DirType, LayoutEngine, NodeShape, Rankdir,
    Spline, SplinesMode, Style,
};
use crate::errors::MalformedAttribute;

fn wrong_type(
    element: &str,
    attribute: &'static str,
    value: &AttrValue,
    expected: &'static str,
) -> MalformedAttribute {
    MalformedAttribute {
        element: element.to_string(),
        attribute,
        value: format!("{value:?}"),
        expected,
    }
}

/// Shared shape of every accessor: match the expected variant, reject the
/// rest as malformed, pass absence through.
fn expect<'a, T>(
    attrs: &'a AttrMap,
    element: &str,
    name: &'static str,
    expected: &'static str,
    pick: impl FnOnce(&'a AttrValue) -> Option<T>,
) -> Result<Option<T>, MalformedAttribute> {
    match attrs.get(name) {
        None => Ok(None),
        Some(value) => match pick(value) {
            Some(v) => Ok(Some(v)),
            None => Err(wrong_type(element, name, value, expected)),
        },
    }
}

pub fn get_str<'a>(
    attrs: &'a AttrMap,
    element: &str,
    name: &'static str,
) -> Result<Option<&'a str>, MalformedAttribute> {
    expect(attrs, element, name, "string", |v| match v {
        AttrValue::Str(s) => Some(s.as_str()),
        _ => None,
    })
}

/// Numeric attributes travel as raw strings in DOT; parse here.
pub fn get_f64(
    attrs: &AttrMap,
    element: &str,
    name: &'static str,
) -> Result<Option<f64>, MalformedAttribute> {
    match attrs.get(name) {
        None => Ok(None),
        Some(AttrValue::Str(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| MalformedAttribute {
                element: element.to_string(),
                attribute: name,
                value: s.clone(),
                expected: "numeric",
            }),
        Some(other) => Err(wrong_type(element, name, other, "numeric")),
    }
}

pub fn get_bool(
    attrs: &AttrMap,
    element: &str,
    name: &'static str,
) -> Result<Option<bool>, MalformedAttribute> {
    expect(attrs, element, name, "boolean", |v| match v {
        AttrValue::Bool(b) => Some(*b),
        AttrValue::Str(s) => match s.as_str() {
            "true" | "yes" => Some(true),
            "false" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// A single color; accepts a color list by taking its first entry (empty
/// lists count as absent).
pub fn get_color<'a>(
    attrs: &'a AttrMap,
    element: &str,
    name: &'static str,
) -> Result<Option<&'a Color>, MalformedAttribute> {
    expect(attrs, element, name, "color", |v| match v {
        AttrValue::Color(c) => Some(Some(c)),
        AttrValue::ColorList(list) => Some(list.first()),
        _ => None,
    })
    .map(Option::flatten)
}

pub fn get_color_list<'a>(
    attrs: &'a AttrMap,
    element: &str,
    name: &'static str,
) -> Result<Option<&'a [Color]>, MalformedAttribute> {
    expect(attrs, element, name, "color list", |v| match v {
        AttrValue::ColorList(list) => Some(list.as_slice()),
        AttrValue::Color(c) => Some(std::slice::from_ref(c)),
        _ => None,
    })
}

pub fn get_style<'a>(
    attrs: &'a AttrMap,
    element: &str,
    name: &'static str,
) -> Result<Option<&'a Style>, MalformedAttribute> {
    expect(attrs, element, name, "style item list", |v| match v {
        AttrValue::Style(s) => Some(s),
        _ => None,
    })
}

pub fn get_shape<'a>(
    attrs: &'a AttrMap,
    element: &str,
    name: &'static str,
) -> Result<Option<&'a NodeShape>, MalformedAttribute> {
    expect(attrs, element, name, "shape", |v| match v {
        AttrValue::Shape(s) => Some(s),
        _ => None,
    })
}

pub fn get_point(
    attrs: &AttrMap,
    element: &str,
    name: &'static str,
) -> Result<Option<AttrPoint>, MalformedAttribute> {
    expect(attrs, element, name, "point", |v| match v {
        AttrValue::Point(p) => Some(*p),
        _ => None,
    })
}

pub fn get_spline_list<'a>(
    attrs: &'a AttrMap,
    element: &str,
    name: &'static str,
) -> Result<Option<&'a [Spline]>, MalformedAttribute> {
    expect(attrs, element, name, "spline list", |v| match v {
        AttrValue::SplineList(s) => Some(s.as_slice()),
        _ => None,
    })
}

pub fn get_arrow_type<'a>(
    attrs: &'a AttrMap,
    element: &str,
    name: &'static str,
) -> Result<Option<&'a ArrowType>, MalformedAttribute> {
    expect(attrs, element, name, "arrow type", |v| match v {
        AttrValue::ArrowType(a) => Some(a),
        _ => None,
    })
}

pub fn get_dir(
    attrs: &AttrMap,
    element: &str,
    name: &'static str,
) -> Result<Option<DirType>, MalformedAttribute> {
    expect(attrs, element, name, "direction", |v| match v {
        AttrValue::Dir(d) => Some(*d),
        _ => None,
    })
}

pub fn get_layout(
    attrs: &AttrMap,
    element: &str,
    name: &'static str,
) -> Result<Option<LayoutEngine>, MalformedAttribute> {
    expect(attrs, element, name, "layout engine", |v| match v {
        AttrValue::Layout(l) => Some(*l),
        _ => None,
    })
}

pub fn get_rankdir(
    attrs: &AttrMap,
    element: &str,
    name: &'static str,
) -> Result<Option<Rankdir>, MalformedAttribute> {
    expect(attrs, element, name, "rank direction", |v| match v {
        AttrValue::Rankdir(r) => Some(*r),
        _ => None,
    })
}

pub fn get_splines_mode(
    attrs: &AttrMap,
    element: &str,
    name: &'static str,
) -> Result<Option<SplinesMode>, MalformedAttribute> {
    expect(attrs, element, name, "splines mode", |v| match v {
        AttrValue::Splines(s) => Some(*s),
        _ => None,
    })
}

pub fn get_esc_string<'a>(
    attrs: &'a AttrMap,
    element: &str,
    name: &'static str,
) -> Result<Option<&'a [String]>, MalformedAttribute> {
    expect(attrs, element, name, "escaped string", |v| match v {
        AttrValue::EscString(lines) => Some(lines.as_slice()),
        _ => None,
    })
}
