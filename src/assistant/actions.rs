//! Suggested device actions derived from message text
//!
//! Rules are an if/else-if chain: the first rule whose keywords match
//! decides, so a message yields at most one action.

use super::types::{Action, NotificationLevel};
use regex::Regex;
use std::sync::LazyLock;

/// Thermostat range accepted for a `SetTemperature` suggestion, in °C
pub const TEMPERATURE_RANGE: std::ops::RangeInclusive<i64> = 15..=30;

static FIRST_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("integer pattern is valid"));

/// Derive suggested actions from an already-lowercased message
pub fn derive_actions(message: &str) -> Vec<Action> {
    let mut actions = Vec::new();

    if message.contains("light") {
        // A lights message that is neither on nor off stops here
        if message.contains("on") {
            actions.push(Action::ToggleLights { desired_state: true });
        } else if message.contains("off") {
            actions.push(Action::ToggleLights { desired_state: false });
        }
    } else if message.contains("security") {
        actions.push(Action::notify(
            "Security system checked",
            NotificationLevel::Success,
        ));
    } else if message.contains("temperature") || message.contains("thermostat") {
        if let Some(celsius) = first_integer(message).filter(|t| TEMPERATURE_RANGE.contains(t)) {
            actions.push(Action::SetTemperature { celsius });
        }
    } else if message.contains("demo") {
        actions.push(Action::notify("Demo mode activated!", NotificationLevel::Info));
    }

    actions
}

/// First run of ASCII digits in the message. Runs too long for `i64` count as
/// out of range.
fn first_integer(message: &str) -> Option<i64> {
    FIRST_INTEGER
        .find(message)
        .and_then(|m| m.as_str().parse().ok())
}
