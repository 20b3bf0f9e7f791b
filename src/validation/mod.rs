use std::fmt;

use thiserror::Error;

use crate::path::TokenPath;

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    MalformedColor,
    UnknownShadeKey,
    IncompleteSemanticTriple,
    EmptyExtensionValue,
    UnknownSection,
    UnexpectedShape,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::MalformedColor => "malformed color",
            Self::UnknownShadeKey => "unknown shade key",
            Self::IncompleteSemanticTriple => "incomplete semantic triple",
            Self::EmptyExtensionValue => "empty extension value",
            Self::UnknownSection => "unknown section",
            Self::UnexpectedShape => "unexpected shape",
        };
        f.write_str(label)
    }
}

/// Rejection of a raw token document, pinned to the first offending node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {kind}: {reason}")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub path: TokenPath,
    pub reason: String,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, path: TokenPath, reason: impl Into<String>) -> Self {
        Self {
            kind,
            path,
            reason: reason.into(),
        }
    }

    pub fn malformed_color(path: TokenPath, reason: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::MalformedColor, path, reason)
    }

    pub fn unknown_shade_key(path: TokenPath, key: &str) -> Self {
        Self::new(
            ValidationErrorKind::UnknownShadeKey,
            path,
            format!("`{key}` is not one of 50, 100, 200, ..., 900"),
        )
    }

    pub fn incomplete_semantic_triple(path: TokenPath, reason: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::IncompleteSemanticTriple, path, reason)
    }

    pub fn empty_extension_value(path: TokenPath, reason: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::EmptyExtensionValue, path, reason)
    }

    pub fn unexpected_shape(path: TokenPath, reason: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::UnexpectedShape, path, reason)
    }
}

/// Short JSON type name used in rejection reasons.
pub(crate) fn describe_value(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "a mapping",
    }
}
