//! Error types for draw calls.
//!
//! Every failure is raised before a single pixel is written. Errors fall
//! into two classes, see [`ErrorKind`].

use thiserror::Error;

/// Coarse classification of a [`DrawError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong arity, wrong element type, malformed structure or unknown
    /// argument name.
    Type,
    /// Structurally valid input that fails a semantic precondition.
    Value,
}

/// Error returned by draw operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DrawError {
    #[error("unknown draw operation '{0}'")]
    UnknownOperation(String),

    #[error("{op}() missing required argument '{param}'")]
    MissingArgument { op: &'static str, param: &'static str },

    #[error("{op}() got an unexpected keyword argument '{name}'")]
    UnexpectedKeyword { op: &'static str, name: String },

    #[error("{op}() got multiple values for argument '{param}'")]
    DuplicateArgument { op: &'static str, param: &'static str },

    #[error("{op}() takes at most {max} positional arguments ({given} given)")]
    TooManyArguments {
        op: &'static str,
        max: usize,
        given: usize,
    },

    #[error("argument '{param}' must be {expected}")]
    InvalidArgument {
        param: &'static str,
        expected: &'static str,
    },

    #[error("invalid color argument: {0}")]
    InvalidColor(String),

    #[error("points[{index}] must be a sequence of two numbers")]
    InvalidPoint { index: usize },

    #[error("{op}() requires at least {required} points ({given} given)")]
    TooFewPoints {
        op: &'static str,
        required: usize,
        given: usize,
    },
}

impl DrawError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DrawError::TooFewPoints { .. } => ErrorKind::Value,
            _ => ErrorKind::Type,
        }
    }

    pub fn is_type_error(&self) -> bool {
        self.kind() == ErrorKind::Type
    }

    pub fn is_value_error(&self) -> bool {
        self.kind() == ErrorKind::Value
    }
}

/// Result type alias for draw operations.
pub type DrawResult<T> = Result<T, DrawError>;
