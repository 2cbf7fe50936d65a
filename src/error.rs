//! Error types for underbar.
//!
//! Most combinators are infallible: they work on types that already
//! guarantee a well-formed collection, and panics raised by caller-supplied
//! closures propagate unchanged. The few operations that talk to an injected
//! collaborator (a random source, a key serializer, a timer facility) report
//! failures through [`UnderbarError`].

use thiserror::Error;

/// A specialized `Result` type for underbar operations.
pub type Result<T> = std::result::Result<T, UnderbarError>;

/// Errors reported by underbar operations.
///
/// # Examples
///
/// ```rust
/// use underbar::UnderbarError;
///
/// let error = UnderbarError::InvalidArgument {
///     operation: "shuffle_with",
///     reason: "index 7 out of range 0..3".to_string(),
/// };
/// assert_eq!(
///     format!("{error}"),
///     "shuffle_with: invalid argument: index 7 out of range 0..3"
/// );
/// ```
#[derive(Debug, Error)]
pub enum UnderbarError {
    /// A caller-supplied value or collaborator violated the operation's contract.
    #[error("{operation}: invalid argument: {reason}")]
    InvalidArgument {
        /// The name of the operation that rejected the argument.
        operation: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// The argument list of a memoized call could not be turned into a cache key.
    #[cfg(feature = "function")]
    #[error("memoize: arguments could not be serialized: {0}")]
    Unserializable(#[from] serde_json::Error),

    /// No timer facility is available to run delayed calls.
    #[error("scheduler unavailable: {0}")]
    SchedulerUnavailable(String),
}

impl UnderbarError {
    /// Creates an [`UnderbarError::InvalidArgument`].
    pub fn invalid_argument(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation,
            reason: reason.into(),
        }
    }
}
