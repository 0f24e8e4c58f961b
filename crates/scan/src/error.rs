//! Result and Error types for restools-scan

/// Type alias for `Result<T, scan::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `restools-scan` crate
///
/// None of these are transient. A malformed file stays malformed, so every
/// variant is returned straight to the caller and no partial index survives.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    /// Failure writing tabular output
    #[error("failed CSV operation")]
    CsvError(#[from] csv::Error),

    /// Index or date list bound too small, or a bound above the hard ceiling
    #[error("capacity of {limit} exceeded: {reason}")]
    CapacityExceeded { limit: usize, reason: String },

    /// Record header that can not be interpreted
    #[error("malformed record header at byte {offset}: {reason}")]
    MalformedHeader { offset: u64, reason: String },

    /// Declared content runs past the end of the stream
    #[error("truncated file at byte {offset} (needed {needed} bytes, found {available})")]
    TruncatedFile {
        offset: u64,
        needed: u64,
        available: u64,
    },

    /// More report step markers in the index than timesteps available
    #[error("report step marker {markers} has no matching timestep (only {timesteps} found)")]
    InconsistentTimeSeries { markers: usize, timesteps: usize },

    /// Dialect selector not recognised
    #[error("dialect \"{0}\" is not supported, expected one of ecl, roff")]
    UnsupportedDialect(String),
}
