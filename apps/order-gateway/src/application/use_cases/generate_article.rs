//! Generate Article Use Case

use std::sync::Arc;

use crate::application::ports::{ArticleError, ArticleGeneratorPort, ArticleRequest};

/// Use case for generating a hotel promotion article.
pub struct GenerateArticleUseCase<G>
where
    G: ArticleGeneratorPort,
{
    generator: Arc<G>,
}

impl<G> GenerateArticleUseCase<G>
where
    G: ArticleGeneratorPort,
{
    /// Create a new `GenerateArticleUseCase`.
    pub const fn new(generator: Arc<G>) -> Self {
        Self { generator }
    }

    /// Generate the article for `request`.
    pub async fn execute(&self, request: ArticleRequest) -> Result<String, ArticleError> {
        tracing::info!(
            hotel_name = %request.hotel_name,
            reviews = request.reviews.len(),
            photo_bytes = request.photo.len(),
            "Generating travel article"
        );

        match self.generator.generate(&request).await {
            Ok(article) => {
                tracing::info!(
                    hotel_name = %request.hotel_name,
                    article_chars = article.chars().count(),
                    "Travel article generated"
                );
                Ok(article)
            }
            Err(e) => {
                tracing::warn!(
                    hotel_name = %request.hotel_name,
                    error = %e,
                    "Travel article generation failed"
                );
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    // Records the prompt it was asked to expand.
    struct MockGenerator {
        result: Result<String, ArticleError>,
        prompts: Mutex<Vec<String>>,
    }

    impl MockGenerator {
        fn returning(result: Result<String, ArticleError>) -> Self {
            Self {
                result,
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ArticleGeneratorPort for MockGenerator {
        async fn generate(&self, request: &ArticleRequest) -> Result<String, ArticleError> {
            self.prompts.lock().unwrap().push(request.prompt());
            self.result.clone()
        }
    }

    fn request() -> ArticleRequest {
        ArticleRequest {
            hotel_name: "Grand Hotel".to_string(),
            description: "Landmark".to_string(),
            reviews: vec!["Great".to_string()],
            rating: "5".to_string(),
            photo: "aGVsbG8=".to_string(),
        }
    }

    #[tokio::test]
    async fn returns_generated_article() {
        let generator = Arc::new(MockGenerator::returning(Ok("A lovely stay".to_string())));
        let use_case = GenerateArticleUseCase::new(Arc::clone(&generator));

        let article = use_case.execute(request()).await.unwrap();

        assert_eq!(article, "A lovely stay");
        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Hotel Name Grand Hotel"));
    }

    #[tokio::test]
    async fn propagates_generator_error() {
        let generator = Arc::new(MockGenerator::returning(Err(
            ArticleError::MissingCredentials,
        )));
        let use_case = GenerateArticleUseCase::new(generator);

        let err = use_case.execute(request()).await.unwrap_err();

        assert_eq!(err, ArticleError::MissingCredentials);
    }
}
