//! Hardware write targets for transceiver LEDs

use std::fs;
use std::io;
use std::path::PathBuf;

/// An opaque addressable location that drives one LED.
///
/// The engine treats targets as write-only: each commit is a full
/// overwrite of the register, with no read-modify-write dependency
/// on prior state.
pub trait LedTarget: Send + Sync {
    /// Target identity for diagnostics (e.g. a sysfs path)
    fn describe(&self) -> String;

    /// Write a register value to the hardware location
    fn write_register(&self, value: u32) -> io::Result<()>;
}

/// LED target backed by a sysfs attribute file.
///
/// The platform driver expects the register value written as a decimal
/// string.
#[derive(Clone, Debug)]
pub struct SysfsLedTarget {
    path: PathBuf,
}

impl SysfsLedTarget {
    /// Create a target for the given sysfs attribute path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LedTarget for SysfsLedTarget {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn write_register(&self, value: u32) -> io::Result<()> {
        fs::write(&self.path, value.to_string())
    }
}
