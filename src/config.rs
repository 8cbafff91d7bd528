//! Credential loader.
//!
//! Reads `credentials/gemini.json` and extracts the `api_key` field.
//! Plaintext secrets never leave this module except through [`Credential`],
//! whose `Debug` output is redacted.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{RephraseError, Result};

/// Name of the field holding the service secret
pub const API_KEY_FIELD: &str = "api_key";

/// The service secret. Loaded once, never mutated.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Load the credential from a JSON file.
///
/// Fails with `ConfigNotFound` when the file is missing, `ConfigMalformed`
/// when it is not a JSON object and `ConfigIncomplete` when `api_key` is
/// absent, not a string, or blank.
pub fn load_credential(path: &Path) -> Result<Credential> {
    log::debug!("loading credential from {}", path.display());

    let raw = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => RephraseError::ConfigNotFound(path.to_path_buf()),
        _ => RephraseError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    parse_credential(&raw, path)
}

fn parse_credential(raw: &str, path: &Path) -> Result<Credential> {
    let object: Map<String, Value> =
        serde_json::from_str(raw).map_err(|e| RephraseError::ConfigMalformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    match object.get(API_KEY_FIELD).and_then(Value::as_str) {
        Some(key) if !key.trim().is_empty() => Ok(Credential::new(key.trim())),
        _ => Err(RephraseError::ConfigIncomplete(path.to_path_buf())),
    }
}
