//! Error types for gentleshred.

use std::fmt;

/// Errors that can occur while shredding a file.
#[derive(Debug)]
pub enum ShredError {
    /// An I/O error occurred while reading, seeking, or writing.
    Io(std::io::Error),

    /// A write reported zero bytes of progress while data remained.
    ///
    /// Unlike a zero-length read, which is ordinary end-of-stream, a write
    /// that makes no progress indicates a device or resource problem, so it
    /// is an error rather than a termination condition.
    WriteStalled {
        /// Bytes already written before the stall.
        written: usize,
        /// Total bytes the write was asked to transfer.
        requested: usize,
    },

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl fmt::Display for ShredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShredError::Io(e) => write!(f, "io error: {}", e),
            ShredError::WriteStalled { written, requested } => {
                write!(
                    f,
                    "write stalled after {} of {} bytes",
                    written, requested
                )
            }
            ShredError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
        }
    }
}

impl std::error::Error for ShredError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShredError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ShredError {
    fn from(e: std::io::Error) -> Self {
        ShredError::Io(e)
    }
}
