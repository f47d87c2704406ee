//! Error types for paste operations
//!
//! Every variant is fatal. Its `Display` output is the single diagnostic
//! line printed before the process exits with status 1.

use std::io;
use thiserror::Error;

/// Usage line shown for any command-line error
pub const USAGE: &str = "usage: paste [-s] [-d list] file...";

/// Paste error type
#[derive(Error, Debug)]
pub enum PasteError {
    /// Bad command-line arguments
    #[error("usage: paste [-s] [-d list] file...")]
    Usage,

    /// Delimiter list is not valid in the working encoding
    #[error("invalid delimiter")]
    InvalidDelimiter,

    /// Delimiter list decoded to nothing
    #[error("no delimiters specified")]
    EmptyDelimiterSet,

    /// Named input could not be opened
    #[error("can't open '{name}': {source}")]
    Open {
        name: String,
        #[source]
        source: io::Error,
    },

    /// Input failed mid-stream
    #[error("'{name}' read error: {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },

    /// Output sink failed
    #[error("write error: {0}")]
    Write(#[source] io::Error),

    /// Setup could not reserve memory
    #[error("out of memory")]
    Allocation(#[from] std::collections::TryReserveError),
}

/// Result type for paste operations
pub type Result<T> = std::result::Result<T, PasteError>;
