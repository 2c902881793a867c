//! Article Generator Port (Driven Port)
//!
//! Interface for turning hotel details and a photo into promotional text.

use async_trait::async_trait;
use thiserror::Error;

/// Hotel details handed to the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRequest {
    /// Hotel name.
    pub hotel_name: String,
    /// Free-form hotel description.
    pub description: String,
    /// Guest reviews, one per entry.
    pub reviews: Vec<String>,
    /// Rating, rendered as sent.
    pub rating: String,
    /// Base64-encoded JPEG photo of the hotel.
    pub photo: String,
}

impl ArticleRequest {
    /// Instruction text sent alongside the photo.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!(
            "Here is the information and the image of the hotel, please generate an article \
             promoting this hotel. Hotel Name {}, Description: {}, Reviews: {}, Rating: {}",
            self.hotel_name,
            self.description,
            self.reviews.join("\n"),
            self.rating,
        )
    }

    /// The photo as a `data:` URL.
    #[must_use]
    pub fn photo_data_url(&self) -> String {
        format!("data:image/jpeg;base64,{}", self.photo)
    }
}

/// Article generation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArticleError {
    /// No credentials configured for the provider.
    #[error("Language model API key is not configured")]
    MissingCredentials,

    /// The provider could not be reached.
    #[error("Language model connection error: {message}")]
    ConnectionError {
        /// Error details.
        message: String,
    },

    /// The provider answered with an error status.
    #[error("Language model error ({status}): {message}")]
    ProviderError {
        /// HTTP status code.
        status: u16,
        /// Provider message.
        message: String,
    },

    /// The provider answered with something that is not an article.
    #[error("Invalid language model response: {message}")]
    InvalidResponse {
        /// Error details.
        message: String,
    },
}

/// Port for article generation.
#[async_trait]
pub trait ArticleGeneratorPort: Send + Sync {
    /// Generate a promotional article for the hotel.
    async fn generate(&self, request: &ArticleRequest) -> Result<String, ArticleError>;
}
