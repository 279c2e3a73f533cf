//! `sleigh-message` — flavor-text messages from a local language model.
//!
//! The tracker can ask a locally running Ollama instance for a short
//! in-character message from Santa.  This crate owns the whole exchange:
//! composing the prompt from a journey snapshot, the blocking HTTP call,
//! and the canned fallback used whenever the service is unreachable.  The
//! simulator never depends on any of this — the only coupling is that
//! [`MessageContext`] reads figures out of a finished snapshot.
//!
//! | Module     | Contents                                            |
//! |------------|-----------------------------------------------------|
//! | [`client`] | `MessageSource`, `OllamaClient`, `message_or_fallback` |
//! | [`prompt`] | `MessageContext`, prompt composition                |
//! | [`error`]  | `MessageError`, `MessageResult`                     |

pub mod client;
pub mod error;
pub mod prompt;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use client::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, FROSTY_FALLBACK, MessageSource, OllamaClient,
    message_or_fallback,
};
pub use error::{MessageError, MessageResult};
pub use prompt::{MessageContext, group_thousands};
