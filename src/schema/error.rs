//! Validation errors

use std::fmt;
use thiserror::Error;

use super::ContentKind;

/// Why a single field was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldErrorKind {
    #[error("required field is missing")]
    Missing,

    #[error("expected {expected}, found {found}")]
    WrongType {
        expected: &'static str,
        found: &'static str,
    },

    #[error("must not be empty")]
    Empty,

    #[error("{value:?} is not one of {}", .allowed.join(", "))]
    NotInSet {
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("{0:?} is not a valid calendar date")]
    InvalidDate(String),

    #[error("{0}")]
    Invalid(String),
}

/// A rejected field and the path that leads to it (`hero.links[1].color`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub path: String,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(path: impl Into<String>, kind: FieldErrorKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "<root>: {}", self.kind)
        } else {
            write!(f, "{}: {}", self.path, self.kind)
        }
    }
}

/// Every field a record failed on
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind} record: {}", format_errors(.errors))]
pub struct ValidationError {
    pub kind: ContentKind,
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Paths of the rejected fields, in the order they were found
    pub fn paths(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.path.as_str()).collect()
    }
}

fn format_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
