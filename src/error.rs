//! Error types for band averaging

use std::fmt;

/// Errors that can occur while building or running a band averager
#[derive(Debug, Clone, PartialEq)]
pub enum AveragerError {
    /// Invalid argument (bin count, sample rate, spectrum shape, band layout)
    InvalidArgument(String),
}

impl fmt::Display for AveragerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AveragerError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for AveragerError {}
