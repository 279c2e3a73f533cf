//! Error types for sleigh-message.

use thiserror::Error;

/// Errors from fetching a Santa message.
///
/// Callers that only want best-effort flavor text should go through
/// [`message_or_fallback`][crate::message_or_fallback], which absorbs all
/// of these into the canned fallback string.
#[derive(Debug, Error)]
pub enum MessageError {
    /// Transport-level failure reaching the generation service.
    #[error("generation service unreachable: {0}")]
    Http(#[from] ureq::Error),

    /// The service answered but the body could not be decoded.
    #[error("malformed generation response: {0}")]
    Decode(#[from] std::io::Error),

    /// The service answered with an empty completion.
    #[error("generation service returned an empty message")]
    Empty,
}

/// Alias for `Result<T, MessageError>`.
pub type MessageResult<T> = Result<T, MessageError>;
