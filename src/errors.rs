//! # Error Types
//!
//! Error handling for loading and rendering a refactoring cookbook.

use crate::cookbook::types::EntryField;
use std::fmt;

/// Error types that can occur while building or rendering a catalog.
///
/// None of these are retryable: every operation is deterministic, so the
/// same input always produces the same error.
#[derive(Debug)]
pub enum CookbookError {
    /// A source record is missing a required field, or the field is empty
    MalformedEntry {
        /// Entry name when known, otherwise the record position (`record #3`)
        entry: String,
        field: EntryField,
    },
    /// Two entries share a technique name
    DuplicateName(String),
    /// Lookup of a technique name that is not in the catalog
    NotFound(String),
    /// Two distinct names normalize to the same anchor
    AnchorCollision {
        anchor: String,
        first: String,
        second: String,
    },
    /// Source document is neither a valid YAML nor JSON catalog
    ParserError(String),
    /// I/O error reading a source or writing output
    Io(std::io::Error),
    /// Error walking a source directory
    WalkDir(walkdir::Error),
    /// Error parsing a YAML source document
    SerdeYaml(serde_yaml::Error),
    /// Error parsing a JSON source document
    SerdeJson(serde_json::Error),
}

impl fmt::Display for CookbookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CookbookError::MalformedEntry { entry, field } => {
                write!(f, "Malformed entry '{entry}': field '{field}' is missing or empty")
            }
            CookbookError::DuplicateName(name) => {
                write!(f, "Duplicate technique name: {name}")
            }
            CookbookError::NotFound(name) => write!(f, "Technique not found: {name}"),
            CookbookError::AnchorCollision {
                anchor,
                first,
                second,
            } => write!(
                f,
                "Anchor collision: '{first}' and '{second}' both normalize to '#{anchor}'"
            ),
            CookbookError::ParserError(msg) => write!(f, "Parser error: {msg}"),
            CookbookError::Io(err) => write!(f, "IO error: {err}"),
            CookbookError::WalkDir(err) => write!(f, "Directory traversal error: {err}"),
            CookbookError::SerdeYaml(err) => write!(f, "YAML parsing error: {err}"),
            CookbookError::SerdeJson(err) => write!(f, "JSON parsing error: {err}"),
        }
    }
}

impl std::error::Error for CookbookError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CookbookError::Io(err) => Some(err),
            CookbookError::WalkDir(err) => Some(err),
            CookbookError::SerdeYaml(err) => Some(err),
            CookbookError::SerdeJson(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CookbookError {
    fn from(err: std::io::Error) -> Self {
        CookbookError::Io(err)
    }
}

impl From<walkdir::Error> for CookbookError {
    fn from(err: walkdir::Error) -> Self {
        CookbookError::WalkDir(err)
    }
}

impl From<serde_yaml::Error> for CookbookError {
    fn from(err: serde_yaml::Error) -> Self {
        CookbookError::SerdeYaml(err)
    }
}

impl From<serde_json::Error> for CookbookError {
    fn from(err: serde_json::Error) -> Self {
        CookbookError::SerdeJson(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_entry_names_field() {
        let err = CookbookError::MalformedEntry {
            entry: "Extract Class".to_string(),
            field: EntryField::BeforeCode,
        };
        let msg = err.to_string();
        assert!(msg.contains("Extract Class"));
        assert!(msg.contains("beforeCode"));
    }

    #[test]
    fn test_anchor_collision_message() {
        let err = CookbookError::AnchorCollision {
            anchor: "extract-class".to_string(),
            first: "Extract Class".to_string(),
            second: "Extract  Class!".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Anchor collision: 'Extract Class' and 'Extract  Class!' both normalize to '#extract-class'"
        );
    }
}
