//! Error and diagnostic types for the projection engine.
//!
//! Absence of an attribute is never an error; these types only cover
//! malformed presence, recognized-but-unimplemented combinations, and
//! internal contract breaches.

use miette::Diagnostic;
use thiserror::Error;

/// A present attribute failed to parse as its declared type.
///
/// Scoped to a single property of a single element: the orchestrator skips
/// the affected property, keeps converting the rest of the element, and
/// reports this alongside the best-effort result.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
#[error("malformed attribute '{attribute}' on {element}: {value:?} is not a valid {expected}")]
#[diagnostic(code(dotviz::malformed_attribute))]
pub struct MalformedAttribute {
    /// Display name of the offending element ("graph", "node 'a'", "edge 'a -> b'").
    pub element: String,
    pub attribute: &'static str,
    /// The raw value as found in the attribute map.
    pub value: String,
    /// What the accessor expected ("numeric", "color", "spline list", ...).
    pub expected: &'static str,
}

/// An internal contract breach (e.g. a waypoint list under 2 points).
///
/// Indicates an engine bug rather than bad input; fatal for the offending
/// element's conversion, never swallowed.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
#[error("projection invariant violated: {message}")]
#[diagnostic(code(dotviz::invariant_violation))]
pub struct InvariantViolation {
    pub message: String,
}

impl InvariantViolation {
    pub fn new(message: impl Into<String>) -> Self {
        InvariantViolation {
            message: message.into(),
        }
    }
}

/// A non-fatal problem encountered while projecting one element.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ProjectionDiagnostic {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Malformed(#[from] MalformedAttribute),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Invariant(#[from] InvariantViolation),

    /// A recognized style/shape/routing combination the engine deliberately
    /// does not render yet. Policy: the affected property is left unset.
    #[error("unsupported combination on {element}: {what}")]
    #[diagnostic(code(dotviz::unsupported_combination))]
    Unsupported { element: String, what: String },
}

/// A best-effort projection result: the value plus any non-fatal
/// diagnostics gathered while producing it.
#[derive(Debug, Clone)]
pub struct Projected<T> {
    pub value: T,
    pub diagnostics: Vec<ProjectionDiagnostic>,
}

impl<T> Projected<T> {
    /// A result with no diagnostics.
    pub fn clean(value: T) -> Self {
        Projected {
            value,
            diagnostics: Vec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
