//! Application Use Cases

mod generate_article;

pub use generate_article::GenerateArticleUseCase;
