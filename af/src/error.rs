//! Render error types

use thiserror::Error;

/// A field path that does not resolve against a parameter value or schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown field '{segment}' in path '{path}' (resolving against {owner})")]
pub struct PathError {
    /// The full dotted path being resolved
    pub path: String,
    /// The segment that failed to resolve
    pub segment: String,
    /// What the segment was looked up in (a record type name, or a scalar field)
    pub owner: String,
}

/// A directive applied to a field whose type it cannot handle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot apply {usage} to field '{path}' of type {found}")]
pub struct TypeMismatchError {
    /// The full dotted path of the field
    pub path: String,
    /// How the field was used, e.g. `gte 500` or `interpolation`
    pub usage: String,
    /// The type actually found at the path
    pub found: String,
}

/// Errors that can occur while defining or rendering a template
///
/// None of these are retryable: rendering is a pure function of its inputs, so
/// the same template and value produce the same failure every time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatchError),

    #[error("Invalid field path '{0}'")]
    InvalidPath(String),
}

impl RenderError {
    /// Check if this is an unresolved path
    pub fn is_path_error(&self) -> bool {
        matches!(self, RenderError::Path(_))
    }

    /// Check if this is an operator/type mismatch
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, RenderError::TypeMismatch(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_error_message() {
        let err = PathError {
            path: "Code.Lang".to_string(),
            segment: "Lang".to_string(),
            owner: "CodeSubmission".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("'Lang'"));
        assert!(msg.contains("Code.Lang"));
        assert!(msg.contains("CodeSubmission"));
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = TypeMismatchError {
            path: "Author".to_string(),
            usage: "gte 500".to_string(),
            found: "string".to_string(),
        };

        assert_eq!(err.to_string(), "Cannot apply gte 500 to field 'Author' of type string");
    }

    #[test]
    fn test_render_error_classification() {
        let err: RenderError = PathError {
            path: "Missing".to_string(),
            segment: "Missing".to_string(),
            owner: "AnswerQuestion".to_string(),
        }
        .into();
        assert!(err.is_path_error());
        assert!(!err.is_type_mismatch());

        let err = RenderError::InvalidPath("a..b".to_string());
        assert!(!err.is_path_error());
        assert!(err.to_string().contains("a..b"));
    }
}
