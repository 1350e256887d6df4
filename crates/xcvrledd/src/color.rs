//! LED colors and the per-port color resolution cascade

use crate::status::{
    LacpState, PortStatus, ADMIN_STATUS_GOOD, HEALTH_STATUS_DEFAULT, HEALTH_STATUS_GOOD,
    OPER_STATUS_GOOD,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical indicator color/blink pattern for one transceiver cage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedColor {
    /// Indicator off: link down or no transceiver activity
    Off,
    /// Link up, LACP unblocked, health confirmed good
    SteadyBlue,
    /// Link up but LACP blocked or health not yet confirmed
    BlinkingBlue,
    /// Attention: administratively disabled, or breakout sub-ports disagree
    SteadyAmber,
    /// Attention: confirmed-bad health on an operationally up port
    BlinkingAmber,
}

impl LedColor {
    /// String form for state-facing output
    pub fn as_str(&self) -> &'static str {
        match self {
            LedColor::Off => "off",
            LedColor::SteadyBlue => "steady_blue",
            LedColor::BlinkingBlue => "blinking_blue",
            LedColor::SteadyAmber => "steady_amber",
            LedColor::BlinkingAmber => "blinking_amber",
        }
    }
}

impl fmt::Display for LedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve one normalized port status to one LED color.
///
/// The rules form a priority cascade and their order is load-bearing:
/// admin-down wins over everything, blinking blue ("up but unverified")
/// is checked before blinking amber ("up and confirmed bad"), so a port
/// with unknown health is never shown as confirmed bad.
pub fn resolve(status: &PortStatus) -> LedColor {
    if status.admin_status != ADMIN_STATUS_GOOD {
        return LedColor::SteadyAmber;
    }
    if status.oper_status != OPER_STATUS_GOOD {
        return LedColor::Off;
    }
    if status.lacp_state == LacpState::Blocked || status.health_ind == HEALTH_STATUS_DEFAULT {
        return LedColor::BlinkingBlue;
    }
    if status.health_ind != HEALTH_STATUS_GOOD {
        return LedColor::BlinkingAmber;
    }
    LedColor::SteadyBlue
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(admin: &str, oper: &str, lacp: LacpState, health: &str) -> PortStatus {
        PortStatus {
            admin_status: admin.to_string(),
            oper_status: oper.to_string(),
            lacp_state: lacp,
            health_ind: health.to_string(),
        }
    }

    #[test]
    fn test_admin_down_dominates() {
        // Regardless of the other fields
        assert_eq!(
            resolve(&status("down", "up", LacpState::Unblocked, "good")),
            LedColor::SteadyAmber
        );
        assert_eq!(
            resolve(&status("testing", "up", LacpState::Blocked, "bad")),
            LedColor::SteadyAmber
        );
    }

    #[test]
    fn test_link_down_is_off() {
        assert_eq!(
            resolve(&status("up", "down", LacpState::Unblocked, "good")),
            LedColor::Off
        );
        assert_eq!(
            resolve(&status("up", "down", LacpState::Blocked, "bad")),
            LedColor::Off
        );
    }

    #[test]
    fn test_healthy_link_is_steady_blue() {
        assert_eq!(
            resolve(&status("up", "up", LacpState::Unblocked, "good")),
            LedColor::SteadyBlue
        );
    }

    #[test]
    fn test_lacp_blocked_is_blinking_blue() {
        assert_eq!(
            resolve(&status("up", "up", LacpState::Blocked, "good")),
            LedColor::BlinkingBlue
        );
    }

    #[test]
    fn test_unknown_health_is_blinking_blue() {
        assert_eq!(
            resolve(&status("up", "up", LacpState::Unblocked, "unknown")),
            LedColor::BlinkingBlue
        );
    }

    #[test]
    fn test_confirmed_bad_health_is_blinking_amber() {
        assert_eq!(
            resolve(&status("up", "up", LacpState::Unblocked, "bad")),
            LedColor::BlinkingAmber
        );
    }

    #[test]
    fn test_unknown_health_wins_over_blocked_lacp() {
        // Both rule 3 triggers present: still blinking blue, never amber
        assert_eq!(
            resolve(&status("up", "up", LacpState::Blocked, "unknown")),
            LedColor::BlinkingBlue
        );
    }

    #[test]
    fn test_color_as_str() {
        assert_eq!(LedColor::BlinkingAmber.as_str(), "blinking_amber");
        assert_eq!(LedColor::Off.to_string(), "off");
    }
}
