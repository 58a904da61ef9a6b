//! Error types for framewire operations.

use thiserror::Error;

/// Error type for encoding operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Growing the frame buffer failed.
    ///
    /// This is fatal: no partial message is produced and the previous
    /// buffer contents are unchanged.
    #[error("frame buffer allocation failed: requested {requested} bytes")]
    Allocation {
        /// Total allocation size that was requested, in bytes.
        requested: usize,
    },
}

/// Result type alias for framewire operations.
pub type Result<T> = std::result::Result<T, Error>;
