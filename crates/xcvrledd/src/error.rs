//! Error types for the transceiver LED engine

use crate::color::LedColor;
use thiserror::Error;

/// Transceiver LED engine errors.
///
/// None of these ever cross the subsystem boundary: the public entry points
/// log the failure and return normally, leaving the previously written
/// hardware state untouched.
#[derive(Error, Debug)]
pub enum LedError {
    /// A status record or status list did not have the expected shape
    #[error("malformed status input: {0}")]
    MalformedInput(String),

    /// Transceiver id missing from the hardware target mapping
    #[error("unknown transceiver id: {0}")]
    UnknownTransceiver(String),

    /// LED color missing from the caller-supplied register table
    #[error("no register value configured for LED color {0}")]
    UnknownColorMapping(LedColor),

    /// Hardware write failure
    #[error("error writing LED register to {target}: {source}")]
    Write {
        /// Target description (e.g. sysfs path)
        target: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for LED engine operations
pub type Result<T> = std::result::Result<T, LedError>;
