//! Typed error types for par-case.
//!
//! Callers at the dispatch boundary can match on the variant to tell a bad
//! method name apart from a bad argument.

use thiserror::Error;

/// An encoding name that this crate cannot case-map under.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("unsupported encoding '{0}'")]
    Unsupported(String),
}

/// Failure of a [`Dispatcher::call`](crate::Dispatcher::call).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The requested method is not part of the transformation catalog.
    #[error("unknown method '{0}'")]
    UnknownMethod(String),

    /// An argument had the wrong type.
    #[error("argument {index} must be {expected}, {found} given")]
    InvalidArgument {
        /// Zero-based position of the offending argument.
        index: usize,
        /// What the position accepts.
        expected: &'static str,
        /// Type name of the value actually received.
        found: &'static str,
    },

    /// The encoding argument named an unsupported encoding.
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}
