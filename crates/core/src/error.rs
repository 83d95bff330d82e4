//! Error taxonomy for slug generation and batch processing
//!
//! Slug failures are plain data: they are returned from `slugify` and stored
//! inside batch items. Only a failing line source surfaces as an error from
//! the batch engine.

use serde::Serialize;

/// Why a text could not be turned into a slug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The text was empty or contained only whitespace
    EmptyInput,
    /// The text had content, but none of it survived character filtering
    AllInvalidCharacters,
}

impl FailureKind {
    /// Human readable reason for the failure
    pub fn reason(&self) -> &'static str {
        match self {
            FailureKind::EmptyInput => "text consists only of whitespace",
            FailureKind::AllInvalidCharacters => "text contains only invalid characters",
        }
    }
}

/// A classified slug failure with the field and value that caused it
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("validation error: field '{field}' is invalid '{value}'. Reason: {}", .kind.reason())]
pub struct SlugError {
    pub kind: FailureKind,
    pub field: &'static str,
    pub value: String,
}

impl SlugError {
    pub fn new(kind: FailureKind, field: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            field,
            value: value.into(),
        }
    }

    /// Shorthand for the reason attached to `kind`
    pub fn reason(&self) -> &'static str {
        self.kind.reason()
    }
}

/// Errors produced by the core
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Slug(#[from] SlugError),

    /// The line source could not produce more data
    #[error("line source failed after line {line}: {source}")]
    LineSourceFault {
        /// Number of the last line read successfully (0 if none)
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Slug failure kind, if this is a slug failure
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Error::Slug(err) => Some(err.kind),
            Error::LineSourceFault { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_error_display_includes_field_value_and_reason() {
        let err = SlugError::new(FailureKind::AllInvalidCharacters, "text", "@#$");
        assert_eq!(
            err.to_string(),
            "validation error: field 'text' is invalid '@#$'. Reason: text contains only invalid characters"
        );
    }

    #[test]
    fn test_error_failure_kind() {
        let slug_err: Error = SlugError::new(FailureKind::EmptyInput, "text", "  ").into();
        assert_eq!(slug_err.failure_kind(), Some(FailureKind::EmptyInput));

        let fault = Error::LineSourceFault {
            line: 3,
            source: std::io::Error::other("disk gone"),
        };
        assert_eq!(fault.failure_kind(), None);
        assert_eq!(fault.to_string(), "line source failed after line 3: disk gone");
    }

    #[test]
    fn test_failure_kind_serializes_snake_case() {
        let json = serde_json::to_string(&FailureKind::AllInvalidCharacters).unwrap();
        assert_eq!(json, "\"all_invalid_characters\"");
    }
}
