//! Text-generation provider abstraction.
//!
//! The AI operation only needs "submit prompt, receive text or failure",
//! so providers sit behind a single-method trait with a mock for tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Trait for text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a completion for the prompt.
    ///
    /// `Ok(None)` means the call succeeded but the response carried no
    /// text. Exactly one attempt is made; retries are the caller's call.
    async fn generate(&self, prompt: &str) -> Result<Option<String>, ProviderError>;
}
