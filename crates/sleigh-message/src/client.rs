//! Blocking client for a local Ollama instance.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{MessageContext, MessageError, MessageResult};

/// Default Ollama endpoint (`ollama serve` on the same machine).
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Default model tag.
pub const DEFAULT_MODEL: &str = "llama3.2";

/// Shown whenever the generation service cannot produce a message.
pub const FROSTY_FALLBACK: &str = "Ho ho ho! My magic connection seems to be a bit \
    frosty right now. Make sure Ollama is running (ollama serve) and you have \
    llama3.2 installed! 🎅";

/// A source of Santa messages.
///
/// The application only ever wires up one implementation, but the seam
/// keeps it testable without a running model server.
pub trait MessageSource {
    /// Produce one in-character message for the given journey context.
    fn fetch(&self, ctx: &MessageContext) -> MessageResult<String>;
}

// ── Ollama wire types ─────────────────────────────────────────────────────────

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f64,
    num_predict: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

// ── OllamaClient ──────────────────────────────────────────────────────────────

/// Talks to Ollama's `/api/generate` endpoint, non-streaming.
pub struct OllamaClient {
    agent: ureq::Agent,
    base_url: String,
    model: String,
}

impl OllamaClient {
    /// Client against `base_url` (no trailing slash) using `model`.
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        // Generation on a small local model can take tens of seconds.
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(60))
            .build();
        Self {
            agent,
            base_url: base_url.into(),
            model: model.into(),
        }
    }
}

impl Default for OllamaClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_MODEL)
    }
}

impl MessageSource for OllamaClient {
    fn fetch(&self, ctx: &MessageContext) -> MessageResult<String> {
        let url = format!("{}/api/generate", self.base_url);
        let prompt = ctx.prompt();
        let request = GenerateRequest {
            model: &self.model,
            prompt: &prompt,
            stream: false,
            options: GenerateOptions {
                temperature: 0.8,
                num_predict: 150,
            },
        };

        let response: GenerateResponse = self.agent.post(&url).send_json(&request)?.into_json()?;

        let message = response.response.trim().to_string();
        if message.is_empty() {
            return Err(MessageError::Empty);
        }
        Ok(message)
    }
}

/// Fetch a message, falling back to [`FROSTY_FALLBACK`] on any failure.
///
/// The failure itself is logged at `warn` — flavor text is never worth
/// surfacing an error to the user for.
pub fn message_or_fallback<S: MessageSource>(source: &S, ctx: &MessageContext) -> String {
    match source.fetch(ctx) {
        Ok(message) => message,
        Err(err) => {
            log::warn!("santa message fetch failed: {err}");
            FROSTY_FALLBACK.to_string()
        }
    }
}
