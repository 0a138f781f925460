use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a validation finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Required key absent.
    MissingField,
    /// Present but the wrong node kind (mapping vs sequence vs scalar).
    WrongShape,
    /// Present scalar of the wrong inferred type.
    WrongScalarType,
    /// Well-typed value failing a grammar check.
    InvalidFormat,
    /// Well-typed value outside an accepted enumeration.
    UnsupportedValue,
    /// Numeric value outside an accepted bound.
    OutOfRange,
    /// Empty document or non-mapping root; nothing else can be checked.
    Structural,
}

/// A single violation found in a manifest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub file: String,
    /// 1-based source line, 0 when unknown.
    pub line: usize,
    pub kind: ErrorKind,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line > 0 {
            write!(f, "{}:{} {}", self.file, self.line, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// Result of validation: every error found, in check order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages only, in order. Handy for assertions.
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }
}

/// Error kind for parse failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    Syntax,
    Alias,
}

/// Produced by `parse` when the input is not well-formed YAML.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(line), Some(col)) = (self.line, self.column) {
            write!(f, "{}:{}: {}", line, col, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for ParseError {}

/// Combined error type for the `load` entry point.
#[derive(Clone, Debug)]
pub enum LintError {
    Parse(ParseError),
    Validation(ValidationError),
}

impl fmt::Display for LintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintError::Parse(e) => write!(f, "cannot unmarshal file content: {}", e),
            LintError::Validation(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for LintError {}
