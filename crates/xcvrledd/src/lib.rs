//! Transceiver LED Status Aggregation Engine
//!
//! Turns raw, possibly partial, possibly conflicting per-port health
//! signals into a single physical indicator state per transceiver cage and
//! commits it to a hardware register.
//!
//! Pipeline per status-change event: normalize the raw records
//! ([`PortStatus`]), resolve each to a color ([`resolve`]), reduce the
//! breakout ports' colors to one ([`aggregate`]), then write the mapped
//! register value to the cage's [`LedTarget`]. The engine owns no state
//! beyond the two immutable tables supplied at construction; every update
//! is computed from scratch and written idempotently.
//!
//! Failures never reach the caller: malformed input, table lookup misses
//! and hardware write errors are logged and leave the previously written
//! register value in place.

pub mod aggregate;
pub mod color;
pub mod error;
pub mod led_control;
pub mod platform;
pub mod status;
pub mod target;

pub use aggregate::aggregate;
pub use color::{resolve, LedColor};
pub use error::{LedError, Result};
pub use led_control::LedControl;
pub use status::{LacpState, PortStatus};
pub use target::{LedTarget, SysfsLedTarget};
