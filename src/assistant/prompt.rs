//! Prompt construction for the remote completion attempt

use super::types::{ConversationTurn, Sender};
use crate::llm::PromptMessage;

/// Persona instruction sent as the first message of every prompt
pub const SYSTEM_PROMPT: &str = r"You are SafeNest AI Assistant, a smart home and architecture expert. Help users with:

SMART HOME CONTROL:
• Control lights, temperature, security systems
• Monitor energy usage and optimization
• Manage IoT devices and automation
• Provide device status and troubleshooting

ARCHITECTURE & DESIGN:
• Generate floor plans and design suggestions
• Recommend materials and layouts
• Building code compliance assistance
• Cost estimation and project planning

COMMUNICATION STYLE:
• Be helpful, professional, and concise
• Use emojis appropriately (🏠🔒⚡🏗️)
• Provide actionable advice
• Focus on smart home and architecture topics
• When asked about device control, mention you can execute actions

Respond naturally and be ready to help with any smart home or architecture questions.";

/// The most recent `max_turns` turns, oldest first
pub fn recent_turns(history: &[ConversationTurn], max_turns: usize) -> &[ConversationTurn] {
    let start = history.len().saturating_sub(max_turns);
    &history[start..]
}

/// System instruction, windowed history, then the new message as a user turn
pub fn build_messages(
    message: &str,
    history: &[ConversationTurn],
    max_turns: usize,
) -> Vec<PromptMessage> {
    let window = recent_turns(history, max_turns);
    let mut messages = Vec::with_capacity(window.len() + 2);

    messages.push(PromptMessage::system(SYSTEM_PROMPT));
    for turn in window {
        messages.push(match turn.sender {
            Sender::User => PromptMessage::user(turn.text.clone()),
            Sender::Assistant => PromptMessage::assistant(turn.text.clone()),
        });
    }
    messages.push(PromptMessage::user(message));

    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::PromptRole;

    fn history(n: usize) -> Vec<ConversationTurn> {
        (0..n)
            .map(|i| {
                if i % 2 == 0 {
                    ConversationTurn::user(format!("question {i}"))
                } else {
                    ConversationTurn::assistant(format!("answer {i}"))
                }
            })
            .collect()
    }

    #[test]
    fn test_empty_history() {
        let messages = build_messages("Hello", &[], 10);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, PromptRole::System);
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(messages[1], PromptMessage::user("Hello"));
    }

    #[test]
    fn test_history_truncated_to_most_recent() {
        let turns = history(15);
        let messages = build_messages("latest", &turns, 10);

        // system + 10 turns + new message
        assert_eq!(messages.len(), 12);
        assert_eq!(messages[1].content, "answer 5");
        assert_eq!(messages[10].content, "question 14");
        assert_eq!(messages[11], PromptMessage::user("latest"));
    }

    #[test]
    fn test_roles_follow_sender() {
        let messages = build_messages("next", &history(2), 10);
        assert_eq!(messages[1].role, PromptRole::User);
        assert_eq!(messages[2].role, PromptRole::Assistant);
    }

    #[test]
    fn test_zero_window_drops_history() {
        let messages = build_messages("only this", &history(4), 0);
        assert_eq!(messages.len(), 2);
    }
}
