//! OpenAI article generator implementing `ArticleGeneratorPort`.

use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::{ArticleError, ArticleGeneratorPort, ArticleRequest};

use super::api_types::{ChatCompletionRequest, ChatCompletionResponse, OpenAiErrorResponse};
use super::config::OpenAiConfig;
use super::error::OpenAiError;

/// Article generator backed by the OpenAI chat completions API.
///
/// Each call is a single request: no retries.
#[derive(Debug, Clone)]
pub struct OpenAiArticleGenerator {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiArticleGenerator {
    /// Create a new generator.
    pub fn new(config: OpenAiConfig) -> Result<Self, OpenAiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| OpenAiError::Http(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Model used for generation.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Send one chat completion and return the first choice's text.
    async fn complete(&self, request: &ArticleRequest) -> Result<String, OpenAiError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(OpenAiError::MissingApiKey)?;

        let body = ChatCompletionRequest::user_text_and_image(
            &self.config.model,
            request.prompt(),
            request.photo_data_url(),
        );

        tracing::debug!(
            model = %self.config.model,
            url = %self.config.chat_completions_url(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.config.chat_completions_url())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| OpenAiError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| OpenAiError::Network(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<OpenAiErrorResponse>(&text)
                .map_or(text, |err| err.error.message);
            return Err(OpenAiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str::<ChatCompletionResponse>(&text)
            .map_err(|e| OpenAiError::JsonParse(e.to_string()))?
            .into_first_content()
            .ok_or(OpenAiError::EmptyCompletion)
    }
}

#[async_trait]
impl ArticleGeneratorPort for OpenAiArticleGenerator {
    async fn generate(&self, request: &ArticleRequest) -> Result<String, ArticleError> {
        self.complete(request).await.map_err(ArticleError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ArticleRequest {
        ArticleRequest {
            hotel_name: "Grand Hotel".to_string(),
            description: "Landmark".to_string(),
            reviews: vec![],
            rating: "4".to_string(),
            photo: "aGVsbG8=".to_string(),
        }
    }

    #[test]
    fn exposes_configured_model() {
        let generator =
            OpenAiArticleGenerator::new(OpenAiConfig::new(None).with_model("gpt-4o-mini"))
                .unwrap();
        assert_eq!(generator.model(), "gpt-4o-mini");
    }

    #[tokio::test]
    async fn missing_key_fails_without_network() {
        let generator = OpenAiArticleGenerator::new(
            OpenAiConfig::new(None).with_base_url("http://127.0.0.1:9"),
        )
        .unwrap();

        let err = generator.generate(&request()).await.unwrap_err();

        assert_eq!(err, ArticleError::MissingCredentials);
    }
}
