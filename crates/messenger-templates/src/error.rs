//! Error types for the template builders
//!
//! Every failure is raised at the call that caused it. Only the
//! whole-document completeness checks wait for `finalize()`.

use std::fmt;
use thiserror::Error;

/// Main error type for template building
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A required argument was empty or blank
    #[error("Missing required field: {field}")]
    MissingRequiredField { field: String },

    /// A value failed its type-specific check (URL, number, date)
    #[error("Invalid format for {field}: expected {expected}, found '{actual}'")]
    InvalidFormat {
        field: String,
        expected: String,
        actual: String,
    },

    /// A string is longer than its hard cap
    #[error("{field} cannot be longer than {max} characters (found {actual})")]
    LengthExceeded {
        field: String,
        max: usize,
        actual: usize,
    },

    /// A bounded list is already full
    #[error("There can not be more than {max} {collection}")]
    CapacityExceeded { collection: String, max: usize },

    /// A cursor-dependent call was made before its target existed
    #[error("Add at least one {cursor} first")]
    CursorNotSet { cursor: String },

    /// The document is missing a required aggregate at finalize
    #[error("Template is incomplete: {missing}")]
    IncompleteDocument { missing: String },

    /// The builder already handed out its document
    #[error("{template} template has already been finalized and cannot be reused")]
    AlreadyFinalized { template: String },
}

/// Convenience type alias for Results using our error type
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Flat discriminant of [`TemplateError`], handy for matching in callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingRequiredField,
    InvalidFormat,
    LengthExceeded,
    CapacityExceeded,
    CursorNotSet,
    IncompleteDocument,
    AlreadyFinalized,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MissingRequiredField => write!(f, "missing_required_field"),
            ErrorKind::InvalidFormat => write!(f, "invalid_format"),
            ErrorKind::LengthExceeded => write!(f, "length_exceeded"),
            ErrorKind::CapacityExceeded => write!(f, "capacity_exceeded"),
            ErrorKind::CursorNotSet => write!(f, "cursor_not_set"),
            ErrorKind::IncompleteDocument => write!(f, "incomplete_document"),
            ErrorKind::AlreadyFinalized => write!(f, "already_finalized"),
        }
    }
}

impl TemplateError {
    /// Which kind of failure this is
    pub fn kind(&self) -> ErrorKind {
        match self {
            TemplateError::MissingRequiredField { .. } => ErrorKind::MissingRequiredField,
            TemplateError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            TemplateError::LengthExceeded { .. } => ErrorKind::LengthExceeded,
            TemplateError::CapacityExceeded { .. } => ErrorKind::CapacityExceeded,
            TemplateError::CursorNotSet { .. } => ErrorKind::CursorNotSet,
            TemplateError::IncompleteDocument { .. } => ErrorKind::IncompleteDocument,
            TemplateError::AlreadyFinalized { .. } => ErrorKind::AlreadyFinalized,
        }
    }

    pub fn missing<F: Into<String>>(field: F) -> Self {
        TemplateError::MissingRequiredField { field: field.into() }
    }

    pub fn invalid_format<F, E, A>(field: F, expected: E, actual: A) -> Self
    where
        F: Into<String>,
        E: Into<String>,
        A: Into<String>,
    {
        TemplateError::InvalidFormat {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn incomplete<M: Into<String>>(missing: M) -> Self {
        TemplateError::IncompleteDocument { missing: missing.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(TemplateError::missing("text").kind(), ErrorKind::MissingRequiredField);
        assert_eq!(
            TemplateError::invalid_format("url", "absolute URL", "nope").kind(),
            ErrorKind::InvalidFormat
        );
        assert_eq!(
            TemplateError::incomplete("at least one bubble").kind(),
            ErrorKind::IncompleteDocument
        );
    }

    #[test]
    fn test_display_messages() {
        let err = TemplateError::CapacityExceeded {
            collection: "quick replies".to_string(),
            max: 10,
        };
        assert_eq!(err.to_string(), "There can not be more than 10 quick replies");

        let err = TemplateError::LengthExceeded {
            field: "bubble.title".to_string(),
            max: 80,
            actual: 81,
        };
        assert!(err.to_string().contains("80 characters"));
        assert_eq!(ErrorKind::CursorNotSet.to_string(), "cursor_not_set");
    }
}
