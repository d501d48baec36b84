//! Mock provider implementation for testing and keyless local runs.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;

/// Mock text provider: canned text, empty responses, or forced failures.
pub struct MockTextProvider {
    response: Option<String>,
    fail: bool,
}

impl MockTextProvider {
    pub fn with_response(text: &str) -> Self {
        Self {
            response: Some(text.to_string()),
            fail: false,
        }
    }

    /// Succeeds but yields no text.
    pub fn empty() -> Self {
        Self {
            response: None,
            fail: false,
        }
    }

    /// Fails every call, as a dead network would.
    pub fn failing() -> Self {
        Self {
            response: None,
            fail: true,
        }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, _prompt: &str) -> Result<Option<String>, ProviderError> {
        if self.fail {
            return Err(ProviderError::NetworkError(
                "mock transport failure".to_string(),
            ));
        }
        Ok(self.response.clone())
    }
}
