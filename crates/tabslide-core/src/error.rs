//! Error types for the tabslide core.

use std::io;
use thiserror::Error;

/// Errors raised by the tab strip core.
///
/// The only failure the widget itself recognizes is a broken adapter
/// contract; every other questionable input (out-of-range indices, zero
/// tabs, zero duration) is clamped or degraded rather than rejected.
#[derive(Debug, Error)]
pub enum StripError {
    /// The adapter's view factory yielded no view for an index it
    /// advertised.
    ///
    /// This is a programmer error, raised synchronously during rebuild
    /// before any further tabs are added. It is not meant to be
    /// recovered from locally.
    #[error("adapter returned no view for index {0}")]
    AdapterContract(usize),

    /// A configuration file could not be parsed.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Underlying IO error bubbled up from config loading.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias using [`StripError`].
pub type StripResult<T> = Result<T, StripError>;
