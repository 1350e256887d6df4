//! Aggregation of breakout sub-port colors
//!
//! One physical cage can host several logical breakout ports but drives a
//! single indicator, so the per-port colors must be reduced to one.

use crate::color::LedColor;

/// Reduce the per-breakout-port colors for one cage to a single color.
///
/// Rules, in order: no sub-ports means off; a blinking-amber sub-port
/// dominates regardless of position; identical colors pass through;
/// any other disagreement is an attention condition shown as steady
/// amber, distinct from the blinking amber of a confirmed-bad sub-port.
pub fn aggregate(colors: &[LedColor]) -> LedColor {
    let Some((first, rest)) = colors.split_first() else {
        return LedColor::Off;
    };
    if colors.contains(&LedColor::BlinkingAmber) {
        return LedColor::BlinkingAmber;
    }
    if rest.iter().any(|color| color != first) {
        return LedColor::SteadyAmber;
    }
    *first
}
