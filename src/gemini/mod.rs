//! Gemini - the generative-language service behind rephrasing
//!
//! - **RephraseService**: the seam the dispatcher talks to
//! - **GeminiClient**: blocking HTTP implementation of `generateContent`
//!
//! # Usage
//!
//! ```ignore
//! use rephrase::gemini::{self, GeminiClient};
//!
//! let client = GeminiClient::new(&gemini::api_base(), gemini::MODEL, credential)?;
//! let text = gemini::dispatch(&client, &request)?;
//! ```

mod internal;

use crate::error::Result;
use crate::request::RephraseRequest;

pub use internal::{
    Candidate, Content, GeminiClient, GenerateContentRequest, GenerateContentResponse, Part,
    PromptFeedback,
};

/// Fixed model identifier
pub const MODEL: &str = "gemini-2.5-flash";

/// Default service base URL
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variable overriding the service base URL
pub const ENV_API_BASE: &str = "REPHRASE_API_BASE";

/// A service that rephrases text given a system and a user instruction.
pub trait RephraseService {
    /// Perform exactly one call and return the produced text.
    fn generate(&self, system_instruction: &str, user_instruction: &str) -> Result<String>;
}

/// Service base URL, honoring `REPHRASE_API_BASE`
pub fn api_base() -> String {
    std::env::var(ENV_API_BASE)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

/// Send one request through `service`. No retries.
pub fn dispatch(service: &dyn RephraseService, request: &RephraseRequest) -> Result<String> {
    service.generate(&request.system_instruction(), &request.user_instruction())
}
