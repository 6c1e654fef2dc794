//! Property-based tests for the keyword rules
//!
//! These check invariants that must hold for any message text:
//! - Lights on/off messages yield exactly one toggle action
//! - Only in-range temperatures are suggested
//! - Action derivation is pure
//! - The prompt window never exceeds the history limit

use super::actions::{derive_actions, TEMPERATURE_RANGE};
use super::fallback::generate_fallback;
use super::prompt::build_messages;
use super::types::{Action, ConversationTurn};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// Strategies
// ============================================================================

/// Filler text free of the letter `o`, so it cannot smuggle in "on"/"off"
fn arb_filler() -> impl Strategy<Value = String> {
    "[a-np-z ,.!?]{0,30}"
}

/// Lowercase chat text, anything goes
fn arb_message() -> impl Strategy<Value = String> {
    "[a-z0-9 ,.!?]{0,80}"
}

fn arb_turn() -> impl Strategy<Value = ConversationTurn> {
    (any::<bool>(), "[a-zA-Z ]{1,20}").prop_map(|(is_user, text)| {
        if is_user {
            ConversationTurn::user(text)
        } else {
            ConversationTurn::assistant(text)
        }
    })
}

proptest! {
    /// Any message with "turn on" and "light" asks for lights on
    #[test]
    fn prop_turn_on_light(prefix in arb_message(), middle in arb_message(), suffix in arb_message()) {
        let message = format!("{prefix}turn on{middle}light{suffix}");
        prop_assert_eq!(
            derive_actions(&message),
            vec![Action::ToggleLights { desired_state: true }]
        );
    }

    /// "turn off" + "lights" asks for lights off when nothing else says "on"
    #[test]
    fn prop_turn_off_lights(prefix in arb_filler(), middle in arb_filler(), suffix in arb_filler()) {
        let message = format!("{prefix}turn off{middle}lights{suffix}");
        prop_assert_eq!(
            derive_actions(&message),
            vec![Action::ToggleLights { desired_state: false }]
        );
    }

    /// Derivation is a pure function of the text
    #[test]
    fn prop_derive_actions_idempotent(message in arb_message()) {
        prop_assert_eq!(derive_actions(&message), derive_actions(&message));
    }

    /// At most one action per message, and temperatures stay in range
    #[test]
    fn prop_single_action_in_range(message in arb_message()) {
        let actions = derive_actions(&message);
        prop_assert!(actions.len() <= 1);
        if let Some(Action::SetTemperature { celsius }) = actions.first() {
            prop_assert!(TEMPERATURE_RANGE.contains(celsius));
        }
    }

    /// A thermostat request with a number is suggested iff the number is in range
    #[test]
    fn prop_thermostat_number(n in 0i64..200) {
        let message = format!("set the thermostat to {n}");
        let actions = derive_actions(&message);
        if TEMPERATURE_RANGE.contains(&n) {
            prop_assert_eq!(actions, vec![Action::SetTemperature { celsius: n }]);
        } else {
            prop_assert!(actions.is_empty());
        }
    }

    /// The fallback always says something, whatever the message
    #[test]
    fn prop_fallback_non_empty(message in arb_message(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let text = generate_fallback(&message, &[], &mut rng);
        prop_assert!(!text.trim().is_empty());
    }

    /// Prompt carries system + min(len, limit) turns + the new message
    #[test]
    fn prop_prompt_window(
        history in proptest::collection::vec(arb_turn(), 0..30),
        limit in 0usize..15,
    ) {
        let messages = build_messages("now", &history, limit);
        let kept = history.len().min(limit);
        prop_assert_eq!(messages.len(), kept + 2);

        let expected = &history[history.len() - kept..];
        for (sent, turn) in messages[1..=kept].iter().zip(expected) {
            prop_assert_eq!(&sent.content, &turn.text);
        }
        prop_assert_eq!(messages.last().map(|m| m.content.as_str()), Some("now"));
    }
}
