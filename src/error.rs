//! Error types for wsdl-types
//!
//! This module defines all error types used throughout the library.
//! Every failure is fatal for the document being translated: there is no
//! partial result and nothing is retried.

use std::fmt;
use thiserror::Error;

/// Result type alias using wsdl-types Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for wsdl-types operations
#[derive(Error, Debug)]
pub enum Error {
    /// A structural node or required attribute of the schema is missing
    #[error("malformed schema: {0}")]
    MalformedSchema(#[from] MalformedSchemaError),

    /// A type reference is neither a known primitive nor a local type
    #[error("unknown type: {0}")]
    UnknownType(#[from] UnknownTypeError),

    /// XML parsing error
    #[error("XML error: {0}")]
    Xml(String),

    /// Limit exceeded error
    #[error("limit exceeded: {0}")]
    LimitExceeded(String),
}

impl Error {
    /// Returns true for structural schema failures
    pub fn is_malformed_schema(&self) -> bool {
        matches!(self, Error::MalformedSchema(_))
    }

    /// Returns true for unresolvable type references
    pub fn is_unknown_type(&self) -> bool {
        matches!(self, Error::UnknownType(_))
    }
}

/// A required schema node or attribute is missing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedSchemaError {
    /// Error message
    pub message: String,
    /// Path to the element where the problem was found
    pub path: Option<String>,
}

impl MalformedSchemaError {
    /// Create a new malformed schema error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
        }
    }

    /// Set the path where the problem was found
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl fmt::Display for MalformedSchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(ref path) = self.path {
            write!(f, "\n\nPath: {}", path)?;
        }

        Ok(())
    }
}

impl std::error::Error for MalformedSchemaError {}

/// A type attribute could not be mapped to a target type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTypeError {
    /// The type name as written in the schema
    pub type_name: String,
    /// Path to the element carrying the type reference
    pub path: Option<String>,
}

impl UnknownTypeError {
    /// Create a new unknown type error
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            path: None,
        }
    }

    /// Set the path of the element carrying the reference
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl fmt::Display for UnknownTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unexpected xml type '{}'", self.type_name)?;

        if let Some(ref path) = self.path {
            write!(f, "\n\nPath: {}", path)?;
        }

        Ok(())
    }
}

impl std::error::Error for UnknownTypeError {}
