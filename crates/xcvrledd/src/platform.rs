//! AlpineVS platform wiring
//!
//! Production table values for the AlpineVS chassis: the register codes
//! understood by the gfpga platform driver and the sysfs attribute layout
//! for the 34 front-panel cages (32 OSFP, 2 SFP+).

use crate::color::LedColor;
use crate::target::{LedTarget, SysfsLedTarget};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Number of OSFP cages, numbered 1..=32
pub const OSFP_LED_COUNT: u32 = 32;
/// Number of SFP+ cages, numbered 33..=34
pub const SFP_PLUS_LED_COUNT: u32 = 2;

/// Register codes the gfpga platform driver maps to color/blink patterns.
pub fn register_lookup() -> HashMap<LedColor, u32> {
    HashMap::from([
        (LedColor::Off, 0x00),
        (LedColor::SteadyBlue, 0x01),
        (LedColor::SteadyAmber, 0x02),
        (LedColor::BlinkingBlue, 0x05),
        (LedColor::BlinkingAmber, 0x06),
    ])
}

/// Sysfs LED targets for every front-panel cage under the platform
/// device directory (normally `/usr/share/sonic/device/gfpga-platform`).
pub fn led_targets(device_dir: &Path) -> HashMap<String, Arc<dyn LedTarget>> {
    let mut targets: HashMap<String, Arc<dyn LedTarget>> = HashMap::new();
    for i in 1..=OSFP_LED_COUNT {
        targets.insert(
            i.to_string(),
            Arc::new(SysfsLedTarget::new(device_dir.join(format!("osfp_led_{i}_l")))),
        );
    }
    for i in OSFP_LED_COUNT + 1..=OSFP_LED_COUNT + SFP_PLUS_LED_COUNT {
        targets.insert(
            i.to_string(),
            Arc::new(SysfsLedTarget::new(
                device_dir.join(format!("sfp_plus_led_{i}_l")),
            )),
        );
    }
    targets
}
