//! Error types for memcache

use std::fmt;

/// Message carried by [`Error::InvalidArgument`] when a negative capacity is requested
pub const ERR_MAX_SIZE: &str = "must provide a nonnegative size";

/// Result type alias for memcache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A construction argument was out of range
    InvalidArgument(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
