//! Error types for the scene reader and renderer

use crate::raytracer::config::shape::ShapeKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RaycastError {
    #[error("Could not access '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unexpected end of input on line number {line}")]
    UnexpectedEndOfInput { line: usize },

    #[error("Expected '{expected}' but found '{}' on line number {line}", .actual.escape_default())]
    UnexpectedCharacter {
        expected: char,
        actual: char,
        line: usize,
    },

    #[error("Strings longer than {max} characters are not supported (line number {line})")]
    StringTooLong { max: usize, line: usize },

    #[error("Strings with escape codes are not supported (line number {line})")]
    UnsupportedEscape { line: usize },

    #[error("Strings may only contain printable ASCII characters, found '{}' on line number {line}", .found.escape_default())]
    NonAsciiCharacter { found: char, line: usize },

    #[error("Number value not found on line number {line} (read '{literal}')")]
    MalformedNumber { literal: String, line: usize },

    #[error("Expected 'type' key but found '{found}' on line number {line}")]
    ExpectedTypeKey { found: String, line: usize },

    #[error("Unknown type '{value}' on line number {line}")]
    UnknownObjectType { value: String, line: usize },

    #[error("Unknown property '{key}' for 'camera' on line number {line}")]
    UnknownCameraField { key: String, line: usize },

    #[error("Unknown property '{key}' for '{kind}' on line number {line}")]
    UnknownProperty {
        key: String,
        kind: ShapeKind,
        line: usize,
    },

    #[error("Missing required property '{field}' for '{kind}' on line number {line}")]
    MissingRequiredField {
        field: &'static str,
        kind: ShapeKind,
        line: usize,
    },

    #[error("Expected ',' or '}}' but found '{}' on line number {line}", .actual.escape_default())]
    ExpectedCommaOrBrace { actual: char, line: usize },

    #[error("Expected ',' or ']' but found '{}' on line number {line}", .actual.escape_default())]
    ExpectedCommaOrBracket { actual: char, line: usize },

    #[error("Too many objects in scene: capacity is {capacity} (line number {line})")]
    SceneCapacityExceeded { capacity: usize, line: usize },

    #[error("Image width and height must be greater than zero, got {width}x{height}")]
    InvalidImageSize { width: u32, height: u32 },
}

impl RaycastError {
    /// Input line the reader stood on when the error was raised, if any.
    #[cfg(test)]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::UnexpectedEndOfInput { line }
            | Self::UnexpectedCharacter { line, .. }
            | Self::StringTooLong { line, .. }
            | Self::UnsupportedEscape { line }
            | Self::NonAsciiCharacter { line, .. }
            | Self::MalformedNumber { line, .. }
            | Self::ExpectedTypeKey { line, .. }
            | Self::UnknownObjectType { line, .. }
            | Self::UnknownCameraField { line, .. }
            | Self::UnknownProperty { line, .. }
            | Self::MissingRequiredField { line, .. }
            | Self::ExpectedCommaOrBrace { line, .. }
            | Self::ExpectedCommaOrBracket { line, .. }
            | Self::SceneCapacityExceeded { line, .. } => Some(*line),
            Self::Io { .. } | Self::Image(_) | Self::InvalidImageSize { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RaycastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_is_reported_for_parse_errors() {
        let err = RaycastError::UnexpectedCharacter {
            expected: ':',
            actual: '\n',
            line: 7,
        };
        assert_eq!(err.line(), Some(7));
        assert_eq!(
            err.to_string(),
            "Expected ':' but found '\\n' on line number 7"
        );
    }

    #[test]
    fn test_line_is_absent_for_boundary_errors() {
        let err = RaycastError::InvalidImageSize {
            width: 0,
            height: 10,
        };
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_missing_field_message_names_field_and_kind() {
        let err = RaycastError::MissingRequiredField {
            field: "radius",
            kind: ShapeKind::Sphere,
            line: 3,
        };
        assert_eq!(
            err.to_string(),
            "Missing required property 'radius' for 'sphere' on line number 3"
        );
    }
}
