//! Input validation errors.

use std::fmt;

/// Which endpoint of a dependency record a problem refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Parent,
    Child,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Parent => f.write_str("parent"),
            Side::Child => f.write_str("child"),
        }
    }
}

/// A dependency payload that violates the data contract.
///
/// `edge` is the zero-based position of the record in the input list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("expected a list of dependency records or an object with a 'dependencies' list")]
    UnexpectedPayload,

    #[error("dependency #{edge} is not an object")]
    MalformedRecord { edge: usize },

    #[error("dependency #{edge}: {side} endpoint is not an object")]
    MalformedEndpoint { edge: usize, side: Side },

    #[error("dependency #{edge} has no {side} endpoint")]
    MissingEndpoint { edge: usize, side: Side },

    #[error("dependency #{edge}: {side} endpoint is missing required field '{field}'")]
    MissingField {
        edge: usize,
        side: Side,
        field: &'static str,
    },

    #[error("dependency #{edge}: {side} endpoint field '{field}' must be {expected}")]
    InvalidField {
        edge: usize,
        side: Side,
        field: &'static str,
        expected: &'static str,
    },
}
