//! Dotted field paths such as `Code.Language`

use std::fmt;
use std::str::FromStr;

use crate::error::RenderError;

/// A parsed dotted field-access expression
///
/// Each segment names a field of the record reached so far. Segments are
/// non-empty and made of ASCII alphanumerics or `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    raw: String,
    segments: Vec<String>,
}

impl FieldPath {
    /// Parse a dotted path, rejecting empty paths and malformed segments
    pub fn parse(raw: &str) -> Result<Self, RenderError> {
        if raw.is_empty() {
            return Err(RenderError::InvalidPath(raw.to_string()));
        }

        let segments: Vec<String> = raw.split('.').map(str::to_string).collect();
        let well_formed = segments
            .iter()
            .all(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
        if !well_formed {
            return Err(RenderError::InvalidPath(raw.to_string()));
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The path segments in traversal order
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The path as written
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for FieldPath {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let path = FieldPath::parse("Topic").unwrap();
        assert_eq!(path.segments(), &["Topic".to_string()]);
        assert_eq!(path.to_string(), "Topic");
    }

    #[test]
    fn test_parse_nested() {
        let path: FieldPath = "Code.Language".parse().unwrap();
        assert_eq!(path.segments().len(), 2);
        assert_eq!(path.segments()[1], "Language");
        assert_eq!(path.as_str(), "Code.Language");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for raw in ["", ".", "Code.", ".Code", "Code..Language", "Code Language", "{{Topic}}"] {
            assert!(
                matches!(FieldPath::parse(raw), Err(RenderError::InvalidPath(_))),
                "expected '{}' to be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_parse_accepts_underscores_and_digits() {
        assert!(FieldPath::parse("ticket_id").is_ok());
        assert!(FieldPath::parse("File.Line2").is_ok());
    }
}
