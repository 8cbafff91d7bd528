pub mod audit;
pub mod config;
pub mod error;
pub mod gemini;
pub mod paths;
pub mod request;

// Re-export commonly used types
pub use config::Credential;
pub use error::{RephraseError, Result};
pub use gemini::{GeminiClient, RephraseService};
pub use request::RephraseRequest;
