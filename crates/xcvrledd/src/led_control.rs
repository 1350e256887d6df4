//! Transceiver LED control
//!
//! Drives one physical indicator per transceiver cage from the health
//! statuses of the logical breakout ports sharing that cage. The pipeline
//! per update is normalize -> resolve -> aggregate -> commit; nothing is
//! retained between invocations, so repeated identical input produces
//! repeated identical writes.

use crate::aggregate::aggregate;
use crate::color::{resolve, LedColor};
use crate::error::{LedError, Result};
use crate::status::PortStatus;
use crate::target::LedTarget;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error};

/// One transceiver's write target plus the lock that serializes
/// same-transceiver commits.
struct TargetSlot {
    target: Arc<dyn LedTarget>,
    write_lock: Mutex<()>,
}

/// Transceiver LED status aggregation engine.
///
/// Holds the two caller-supplied tables — transceiver id to hardware
/// target, and LED color to register value — both immutable after
/// construction. Construction commits [`LedColor::Off`] for every known
/// transceiver so the hardware starts in a defined state.
///
/// No failure ever propagates to the caller: lookup misses, malformed
/// input and hardware write errors are logged and leave the previously
/// written state untouched.
pub struct LedControl {
    targets: HashMap<String, TargetSlot>,
    register_lookup: HashMap<LedColor, u32>,
}

impl LedControl {
    /// Build the engine from the caller-supplied tables and drive every
    /// known LED to off.
    ///
    /// The register table may omit colors; a later commit of an omitted
    /// color is logged and skipped rather than treated as fatal.
    pub fn new(
        targets: HashMap<String, Arc<dyn LedTarget>>,
        register_lookup: HashMap<LedColor, u32>,
    ) -> Self {
        let control = Self {
            targets: targets
                .into_iter()
                .map(|(id, target)| {
                    (
                        id,
                        TargetSlot {
                            target,
                            write_lock: Mutex::new(()),
                        },
                    )
                })
                .collect(),
            register_lookup,
        };

        for tcvr_id in control.targets.keys() {
            control.commit(tcvr_id, LedColor::Off);
        }

        control
    }

    /// Transceiver ids known to the hardware target mapping
    pub fn transceivers_with_leds(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.targets.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Entry point for the port-state-change notifier.
    ///
    /// `statuses` is a JSON array of raw status records, one per breakout
    /// port under the transceiver. A malformed list or record aborts the
    /// whole update with no partial write. Always returns normally.
    pub fn on_port_status_change(&self, tcvr_id: &str, statuses: &Value) {
        match self.resolve_update(statuses) {
            Ok(color) => {
                debug!(transceiver = tcvr_id, color = %color, "resolved transceiver LED color");
                self.commit(tcvr_id, color);
            }
            Err(err) => {
                error!(transceiver = tcvr_id, error = %err, "failed to parse port statuses");
            }
        }
    }

    /// Commit a color to a transceiver's LED register.
    ///
    /// Lookup misses and write failures are logged and leave the previous
    /// hardware state unchanged. No retry.
    pub fn commit(&self, tcvr_id: &str, color: LedColor) {
        if let Err(err) = self.write_led(tcvr_id, color) {
            error!(
                transceiver = tcvr_id,
                color = %color,
                error = %err,
                "unable to update transceiver LED"
            );
        }
    }

    /// Run normalize -> resolve -> aggregate over a raw status list.
    fn resolve_update(&self, statuses: &Value) -> Result<LedColor> {
        let records = statuses.as_array().ok_or_else(|| {
            LedError::MalformedInput("expected a sequence of status records".to_string())
        })?;

        let mut colors = Vec::with_capacity(records.len());
        for raw in records {
            let status = PortStatus::from_raw(raw)?;
            colors.push(resolve(&status));
        }
        Ok(aggregate(&colors))
    }

    fn write_led(&self, tcvr_id: &str, color: LedColor) -> Result<()> {
        let slot = self
            .targets
            .get(tcvr_id)
            .ok_or_else(|| LedError::UnknownTransceiver(tcvr_id.to_string()))?;
        let value = *self
            .register_lookup
            .get(&color)
            .ok_or(LedError::UnknownColorMapping(color))?;

        // Serialize same-transceiver writes so concurrent callers observe
        // "last call wins" rather than a scheduling race. Different
        // transceivers are independent.
        let _guard = slot.write_lock.lock();
        slot.target
            .write_register(value)
            .map_err(|source| LedError::Write {
                target: slot.target.describe(),
                source,
            })
    }
}
