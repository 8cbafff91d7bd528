//! Request construction.
//!
//! The service is prompted by natural-language convention, not structured
//! fields, so the instruction wording below is part of the contract.

use crate::error::{RephraseError, Result};

/// Tone used when none is supplied or the supplied one is blank
pub const DEFAULT_TONE: &str = "neutral";

/// Directive preceding the literal input text in the user instruction.
/// The trailing `: \n` marks where the input begins.
pub const USER_DIRECTIVE: &str = "Please rephrase the following text. ONLY reply with the rephrased text, no explanations or extra commentary: \n";

/// Tokens that keep logging enabled when passed explicitly
const LOG_TOKENS: [&str; 2] = ["yes", "log"];

/// A validated rephrase request, built once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RephraseRequest {
    text: String,
    tone: String,
    log_enabled: bool,
}

impl RephraseRequest {
    /// Build a request from raw command-line values.
    ///
    /// `text` is required and must be non-blank. `tone` falls back to
    /// [`DEFAULT_TONE`]. Logging stays on unless `log_token` is given and is
    /// not `yes`/`log` (case-insensitive).
    pub fn from_args(
        text: Option<&str>,
        tone: Option<&str>,
        log_token: Option<&str>,
    ) -> Result<Self> {
        let text = text
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(RephraseError::Usage)?;

        let tone = tone
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TONE);

        Ok(Self {
            text: text.to_string(),
            tone: tone.to_string(),
            log_enabled: log_token.map_or(true, is_log_token),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tone(&self) -> &str {
        &self.tone
    }

    pub fn log_enabled(&self) -> bool {
        self.log_enabled
    }

    pub fn system_instruction(&self) -> String {
        system_instruction(&self.tone)
    }

    pub fn user_instruction(&self) -> String {
        user_instruction(&self.text)
    }
}

/// `You are a helpful assistant who rephrases text in a {tone} tone.`
pub fn system_instruction(tone: &str) -> String {
    format!("You are a helpful assistant who rephrases text in a {tone} tone.")
}

pub fn user_instruction(text: &str) -> String {
    format!("{USER_DIRECTIVE}{text}")
}

fn is_log_token(token: &str) -> bool {
    let token = token.trim();
    LOG_TOKENS.iter().any(|t| token.eq_ignore_ascii_case(t))
}
