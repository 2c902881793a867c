//! Application Layer
//!
//! Orchestrates domain logic. It defines:
//!
//! - **Ports**: Interfaces for external systems (`ArticleGeneratorPort`)
//! - **Services**: `OrderService`, the validate-then-convert pipeline
//! - **Use Cases**: `GenerateArticleUseCase`

pub mod ports;
pub mod services;
pub mod use_cases;

pub use ports::*;
pub use services::*;
pub use use_cases::*;
