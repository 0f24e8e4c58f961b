//! Result and Error types for restools-cube

/// Type alias for `Result<T, cube::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `restools-cube` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Index range or stride outside what the cube can provide
    #[error("invalid range on axis {axis}: {reason}")]
    RangeError { axis: char, reason: String },

    /// Geometry parameters that can not describe a regular cube
    #[error("invalid cube geometry: {0}")]
    InvalidGeometry(String),

    /// Sample or line vector of the wrong length for the geometry
    #[error("inconsistent number of samples (expected {expected:?}, found {found:?})")]
    UnexpectedSampleCount { expected: usize, found: usize },

    /// Statistics over empty or undefined samples
    #[error("failed statistics on samples")]
    UtilsError(#[from] restools_utils::Error),
}
