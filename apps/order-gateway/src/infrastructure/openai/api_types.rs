//! OpenAI chat completions wire types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Request Types
// ============================================================================

/// Chat completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    /// Model name.
    pub model: String,
    /// Conversation messages.
    pub messages: Vec<ChatMessage>,
}

/// A single chat message with multimodal content.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    /// Message role.
    pub role: &'static str,
    /// Content parts.
    pub content: Vec<ContentPart>,
}

/// A content part: text or an image reference.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Plain text.
    Text {
        /// The text.
        text: String,
    },
    /// Image by URL (including `data:` URLs).
    ImageUrl {
        /// The image reference.
        image_url: ImageUrl,
    },
}

/// Image reference.
#[derive(Debug, Clone, Serialize)]
pub struct ImageUrl {
    /// Image URL.
    pub url: String,
}

impl ChatCompletionRequest {
    /// One user message carrying `text` and an image.
    #[must_use]
    pub fn user_text_and_image(model: &str, text: String, image_url: String) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![ChatMessage {
                role: "user",
                content: vec![
                    ContentPart::Text { text },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl { url: image_url },
                    },
                ],
            }],
        }
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// Chat completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    /// Completion choices.
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// A completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// Generated message.
    pub message: ResponseMessage,
}

/// Generated message.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    /// Message text. Absent for refusals and tool calls.
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Text of the first choice, if any.
    #[must_use]
    pub fn into_first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
    }
}

/// Error envelope returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiErrorResponse {
    /// Error details.
    pub error: OpenAiErrorBody,
}

/// Error details.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiErrorBody {
    /// Error message.
    pub message: String,
}
