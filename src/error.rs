//! The error type used throughout the crate.

use thiserror::Error;

/// Errors produced while building, turning or comparing cubes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A colour grid read from outside the crate was malformed. Nothing was constructed, so the
    /// caller can simply ask again.
    #[error("invalid cube configuration: {0}")]
    InvalidConfiguration(String),
    /// A move name that is not in the move table. No cube was touched.
    #[error("unknown move [{0}]")]
    UnknownMove(String),
    /// An internal invariant of a cube no longer holds. This can only be caused by a bug in an
    /// earlier operation, so the current operation is abandoned.
    #[error("corrupted cube state: {0}")]
    CorruptedState(String),
}
