//! SafeNest chat assistant
//!
//! Accepts a chat message plus recent history, asks the remote completion
//! provider for a reply, and falls back to keyword-driven canned replies when
//! that fails. Suggested device actions are derived from the message text
//! independently of which path produced the reply.

mod actions;
mod config;
mod dispatcher;
mod fallback;
mod prompt;
mod types;

#[cfg(test)]
mod proptests;
#[cfg(test)]
pub(crate) mod testing;

#[allow(unused_imports)] // Public API re-exports
pub use actions::derive_actions;
pub use config::AssistantConfig;
pub use dispatcher::ChatDispatcher;
#[allow(unused_imports)]
pub use fallback::generate_fallback;
pub use types::*;
