//! Internal HTTP client implementation for the Gemini service

use reqwest::blocking::Client as HttpClient;
use serde::{Deserialize, Serialize};

use super::RephraseService;
use crate::config::Credential;
use crate::error::{RephraseError, Result};

/// Blocking Gemini `generateContent` client
pub struct GeminiClient {
    base_url: String,
    model: String,
    credential: Credential,
    http: HttpClient,
}

impl GeminiClient {
    /// Create a client for `base_url` (e.g. `https://host/v1beta`) and `model`.
    pub fn new(base_url: &str, model: &str, credential: Credential) -> Result<Self> {
        let http = HttpClient::builder()
            .user_agent(concat!("rephrase/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                RephraseError::ExternalCallFailed(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self::with_http(base_url, model, credential, http))
    }

    /// Create a client on top of an already configured HTTP client.
    pub fn with_http(base_url: &str, model: &str, credential: Credential, http: HttpClient) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            credential,
            http,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

impl RephraseService for GeminiClient {
    fn generate(&self, system_instruction: &str, user_instruction: &str) -> Result<String> {
        let url = self.endpoint();
        log::debug!("POST {url}");

        let body = GenerateContentRequest::new(system_instruction, user_instruction);
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", self.credential.expose())
            .json(&body)
            .send()
            .map_err(|e| RephraseError::ExternalCallFailed(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| RephraseError::ExternalCallFailed(e.to_string()))?;

        if !status.is_success() {
            return Err(RephraseError::ExternalCallFailed(describe_failure(
                status.as_u16(),
                &text,
            )));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text).map_err(|e| {
            RephraseError::ExternalCallFailed(format!("Failed to parse response: {e}"))
        })?;

        parsed.text().ok_or_else(|| {
            RephraseError::ExternalCallFailed(format!(
                "No text in response{}",
                parsed
                    .prompt_feedback
                    .and_then(|f| f.block_reason)
                    .map(|r| format!(" (blocked: {r})"))
                    .unwrap_or_default()
            ))
        })
    }
}

/// Build a failure description from a non-success status and its body
fn describe_failure(status: u16, body: &str) -> String {
    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => {
            let e = envelope.error;
            match e.status {
                Some(kind) => format!("{} {}. {}", status, kind, e.message),
                None => format!("{} {}", status, e.message),
            }
        }
        Err(_) if body.trim().is_empty() => format!("HTTP {status}"),
        Err(_) => format!("HTTP {status}: {}", body.trim()),
    }
}

/// `generateContent` request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    pub fn new(system_instruction: &str, user_instruction: &str) -> Self {
        Self {
            system_instruction: Content {
                role: None,
                parts: vec![Part::text(system_instruction)],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::text(user_instruction)],
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
        }
    }
}

/// `generateContent` response body (only the fields we consume)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    /// Text parts of the first candidate, joined in order
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let parts: Vec<&str> = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.concat())
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}
