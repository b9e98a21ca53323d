//! Error types for Hanyu.
//!
//! Realisation itself never fails; these errors come from tree construction,
//! serialization, and the command line.

use std::fmt;

use thiserror::Error;

use crate::category::Category;
use crate::node::NodeId;

/// Result type alias using the Hanyu error.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Hanyu operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unknown node error.
    #[must_use]
    pub fn unknown_node(id: NodeId) -> Self {
        Self::new(ErrorKind::UnknownNode(id))
    }

    /// Creates an error for an operation that needs a phrase.
    #[must_use]
    pub fn not_a_phrase(id: NodeId, actual: Category) -> Self {
        Self::new(ErrorKind::NotAPhrase { id, actual })
    }

    /// Creates an error for an operation that needs a coordination.
    #[must_use]
    pub fn not_a_coordination(id: NodeId, actual: Category) -> Self {
        Self::new(ErrorKind::NotACoordination { id, actual })
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Handle does not belong to the tree.
    #[error("unknown node: {0}")]
    UnknownNode(NodeId),

    /// Operation needs a phrase.
    #[error("node {id} is a {actual}, not a phrase")]
    NotAPhrase {
        /// The node that was addressed.
        id: NodeId,
        /// Its actual category.
        actual: Category,
    },

    /// Operation needs a coordination.
    #[error("node {id} is a {actual}, not a coordination")]
    NotACoordination {
        /// The node that was addressed.
        id: NodeId,
        /// Its actual category.
        actual: Category,
    },

    /// Bad input from a caller.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Encoding or decoding failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Filesystem failure.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// File or demo the tree came from.
    pub source: Option<String>,
    /// Chain of operations that led to the error.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
