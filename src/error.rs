//! Error types for Deriva operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Deriva operations.
///
/// Provides detailed context about failures including dimension mismatches,
/// invalid hyperparameters, and models queried before they are trained.
///
/// # Examples
///
/// ```
/// use deriva::error::DerivaError;
///
/// let err = DerivaError::DimensionMismatch {
///     expected: "features=3".to_string(),
///     actual: "2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum DerivaError {
    /// Feature-vector dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Model queried before its training window ever filled.
    NotReady {
        /// Samples currently held in the window
        have: usize,
        /// Window capacity that must be reached
        need: usize,
    },

    /// Class label outside the supported label set.
    InvalidLabel {
        /// Label that was provided
        label: usize,
        /// Number of classes the model supports
        n_classes: usize,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for DerivaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DerivaError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Feature dimension mismatch: expected {expected}, got {actual}"
                )
            }
            DerivaError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            DerivaError::NotReady { have, need } => {
                write!(
                    f,
                    "Model not ready: window holds {have} of {need} samples"
                )
            }
            DerivaError::InvalidLabel { label, n_classes } => {
                write!(
                    f,
                    "Invalid label {label}: this classifier supports {n_classes} classes"
                )
            }
            DerivaError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for DerivaError {}

impl From<&str> for DerivaError {
    fn from(msg: &str) -> Self {
        DerivaError::Other(msg.to_string())
    }
}

impl From<String> for DerivaError {
    fn from(msg: String) -> Self {
        DerivaError::Other(msg)
    }
}

impl DerivaError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::Other(format!("empty input: {context}"))
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for DerivaError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<DerivaError> for &str {
    fn eq(&self, other: &DerivaError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, DerivaError>;
