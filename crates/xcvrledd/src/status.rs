//! Per-port status records and normalization
//!
//! Raw status records arrive from the port-state-change notifier as JSON
//! objects with string values, possibly with missing, null or empty fields.
//! Normalization fills each of the four recognized fields with its
//! documented default and decodes the LACP bitmask into a binary
//! blocked/unblocked classification.

use crate::error::{LedError, Result};
use serde_json::{Map, Value};
use tracing::warn;

/// Administrative status field key
pub const ADMIN_STATUS: &str = "admin_status";
/// Default administrative status
pub const ADMIN_STATUS_DEFAULT: &str = "down";
/// Administrative status value meaning the port is enabled
pub const ADMIN_STATUS_GOOD: &str = "up";

/// Operational status field key
pub const OPER_STATUS: &str = "oper_status";
/// Default operational status
pub const OPER_STATUS_DEFAULT: &str = "down";
/// Operational status value meaning the link is up
pub const OPER_STATUS_GOOD: &str = "up";

/// Health indication field key
pub const HEALTH_STATUS: &str = "health_ind";
/// Default health indication
pub const HEALTH_STATUS_DEFAULT: &str = "unknown";
/// Health indication value meaning the port is healthy
pub const HEALTH_STATUS_GOOD: &str = "good";

/// LACP state field key
pub const LACP_STATUS: &str = "lacp_state";
/// Raw LACP value for an already-resolved unblocked port (also the default)
pub const LACP_STATUS_DEFAULT: &str = "unblocked";
/// Raw LACP value for an already-resolved blocked port
pub const LACP_STATUS_BAD: &str = "blocked";

/// LACP bitmask bit: member link is collecting
pub const LACP_STATE_COLLECTING: u32 = 0x10;
/// LACP bitmask bit: member link is distributing
pub const LACP_STATE_DISTRIBUTING: u32 = 0x20;

/// Binary LACP participation state decoded from the raw record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LacpState {
    /// Both collecting and distributing bits are set
    Unblocked,
    /// The port is not fully participating in the aggregate
    Blocked,
}

impl LacpState {
    /// Decode an LACP state bitmask.
    ///
    /// A port is unblocked only if both the collecting and distributing
    /// bits are set.
    pub fn from_bitmask(bitmask: u32) -> Self {
        if bitmask & LACP_STATE_COLLECTING != 0 && bitmask & LACP_STATE_DISTRIBUTING != 0 {
            LacpState::Unblocked
        } else {
            LacpState::Blocked
        }
    }

    /// Decode a raw LACP field value.
    ///
    /// The notifier passes either an already-resolved category
    /// ("unblocked"/"blocked") or a decimal bitmask. An unparseable value
    /// is never reported as healthy and falls back to blocked.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            LACP_STATUS_DEFAULT => LacpState::Unblocked,
            LACP_STATUS_BAD => LacpState::Blocked,
            _ => match raw.parse::<u32>() {
                Ok(bitmask) => LacpState::from_bitmask(bitmask),
                Err(_) => {
                    warn!(value = raw, "unparseable LACP state, treating port as blocked");
                    LacpState::Blocked
                }
            },
        }
    }

    /// String form as used in status records
    pub fn as_str(&self) -> &'static str {
        match self {
            LacpState::Unblocked => LACP_STATUS_DEFAULT,
            LacpState::Blocked => LACP_STATUS_BAD,
        }
    }
}

/// Fully populated per-port status.
///
/// Produced by [`PortStatus::from_raw`]; every field is present and
/// non-empty after normalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortStatus {
    /// Administrative status ("up" or anything else)
    pub admin_status: String,
    /// Operational status ("up" or anything else)
    pub oper_status: String,
    /// Decoded LACP participation state
    pub lacp_state: LacpState,
    /// Health indication ("good", "unknown", or a known-bad value)
    pub health_ind: String,
}

impl PortStatus {
    /// Normalize a raw status record.
    ///
    /// Missing, null and empty fields take their documented default.
    /// Fails only if the record is not a mapping or a recognized field
    /// holds a non-string value; in that case the whole per-transceiver
    /// update is aborted by the caller.
    pub fn from_raw(raw: &Value) -> Result<Self> {
        let record = raw
            .as_object()
            .ok_or_else(|| LedError::MalformedInput("status record is not a mapping".to_string()))?;

        let lacp_state = match field(record, LACP_STATUS)? {
            Some(value) => LacpState::from_raw(value),
            None => LacpState::Unblocked,
        };

        Ok(Self {
            admin_status: field(record, ADMIN_STATUS)?
                .unwrap_or(ADMIN_STATUS_DEFAULT)
                .to_string(),
            oper_status: field(record, OPER_STATUS)?
                .unwrap_or(OPER_STATUS_DEFAULT)
                .to_string(),
            lacp_state,
            health_ind: field(record, HEALTH_STATUS)?
                .unwrap_or(HEALTH_STATUS_DEFAULT)
                .to_string(),
        })
    }
}

impl Default for PortStatus {
    fn default() -> Self {
        Self {
            admin_status: ADMIN_STATUS_DEFAULT.to_string(),
            oper_status: OPER_STATUS_DEFAULT.to_string(),
            lacp_state: LacpState::Unblocked,
            health_ind: HEALTH_STATUS_DEFAULT.to_string(),
        }
    }
}

/// Fetch a recognized field, mapping missing/null/empty to None.
fn field<'a>(record: &'a Map<String, Value>, key: &str) -> Result<Option<&'a str>> {
    match record.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) if value.is_empty() => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(other) => Err(LedError::MalformedInput(format!(
            "field {key} must be a string, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lacp_bitmask_both_bits_set() {
        assert_eq!(LacpState::from_bitmask(0x30), LacpState::Unblocked);
    }

    #[test]
    fn test_lacp_bitmask_collecting_only() {
        assert_eq!(LacpState::from_bitmask(0x10), LacpState::Blocked);
    }

    #[test]
    fn test_lacp_bitmask_distributing_only() {
        assert_eq!(LacpState::from_bitmask(0x20), LacpState::Blocked);
    }

    #[test]
    fn test_lacp_bitmask_zero() {
        assert_eq!(LacpState::from_bitmask(0), LacpState::Blocked);
    }

    #[test]
    fn test_lacp_raw_decimal_bitmask() {
        // 48 == 0x30
        assert_eq!(LacpState::from_raw("48"), LacpState::Unblocked);
        assert_eq!(LacpState::from_raw("16"), LacpState::Blocked);
    }

    #[test]
    fn test_lacp_raw_resolved_categories() {
        assert_eq!(LacpState::from_raw("unblocked"), LacpState::Unblocked);
        assert_eq!(LacpState::from_raw("blocked"), LacpState::Blocked);
    }

    #[test]
    fn test_lacp_raw_unparseable_is_blocked() {
        assert_eq!(LacpState::from_raw("distributing"), LacpState::Blocked);
        assert_eq!(LacpState::from_raw("-1"), LacpState::Blocked);
    }

    #[test]
    fn test_normalize_empty_record_uses_defaults() {
        let status = PortStatus::from_raw(&json!({})).unwrap();
        assert_eq!(status, PortStatus::default());
    }

    #[test]
    fn test_normalize_null_and_empty_fields_use_defaults() {
        let status = PortStatus::from_raw(&json!({
            "admin_status": null,
            "oper_status": "",
            "lacp_state": "",
            "health_ind": null,
        }))
        .unwrap();
        assert_eq!(status, PortStatus::default());
    }

    #[test]
    fn test_normalize_full_record() {
        let status = PortStatus::from_raw(&json!({
            "admin_status": "up",
            "oper_status": "up",
            "lacp_state": "48",
            "health_ind": "good",
        }))
        .unwrap();
        assert_eq!(status.admin_status, "up");
        assert_eq!(status.oper_status, "up");
        assert_eq!(status.lacp_state, LacpState::Unblocked);
        assert_eq!(status.health_ind, "good");
    }

    #[test]
    fn test_normalize_rejects_non_mapping() {
        assert!(PortStatus::from_raw(&json!("up")).is_err());
        assert!(PortStatus::from_raw(&json!(["up"])).is_err());
    }

    #[test]
    fn test_normalize_rejects_non_string_field() {
        assert!(PortStatus::from_raw(&json!({ "admin_status": 1 })).is_err());
    }
}
