//! OpenAI adapter configuration.

use std::fmt;
use std::time::Duration;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default multimodal chat model.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for the OpenAI article generator.
#[derive(Clone)]
pub struct OpenAiConfig {
    /// API key. Generation fails without one; everything else keeps working.
    pub api_key: Option<String>,
    /// API base URL, without a trailing slash.
    pub base_url: String,
    /// Chat model name.
    pub model: String,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl OpenAiConfig {
    /// Create a configuration with default endpoint, model and timeout.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.is_empty()),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the chat model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the HTTP timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Chat completions endpoint.
    #[must_use]
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = OpenAiConfig::new(Some("sk-test".to_string()));
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert!(config.has_api_key());
    }

    #[test]
    fn empty_key_counts_as_missing() {
        assert!(!OpenAiConfig::new(Some(String::new())).has_api_key());
        assert!(!OpenAiConfig::new(None).has_api_key());
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let config = OpenAiConfig::new(None).with_base_url("http://localhost:8080/v1/");
        assert_eq!(
            config.chat_completions_url(),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn builder_overrides() {
        let config = OpenAiConfig::new(None)
            .with_model("gpt-4o-mini")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn debug_redacts_key() {
        let config = OpenAiConfig::new(Some("sk-secret".to_string()));
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
