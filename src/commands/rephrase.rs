//! The rephrase command: one request, one call, one optional log record.

use std::io::Write;
use std::path::Path;

use rephrase::audit;
use rephrase::config;
use rephrase::gemini::{self, GeminiClient, RephraseService};
use rephrase::paths;
use rephrase::request::RephraseRequest;
use rephrase::{RephraseError, Result};

/// Run the command from raw positional arguments.
///
/// Arguments are validated before the credential is read, so a missing
/// text never touches the filesystem or the network.
pub fn execute(text: Option<&str>, tone: Option<&str>, log_token: Option<&str>) -> Result<()> {
    let request = RephraseRequest::from_args(text, tone, log_token)?;

    let base = paths::base_dir();
    log::debug!("base directory: {}", base.display());

    let credential = config::load_credential(&paths::credentials_path(&base))?;
    let client = GeminiClient::new(&gemini::api_base(), gemini::MODEL, credential)?;
    log::debug!("model {} at {}", gemini::MODEL, client.endpoint());

    let stdout = std::io::stdout();
    run(&client, &request, &paths::log_path(&base), &mut stdout.lock())
}

/// Dispatch `request` through `service`, log it, and emit the result.
///
/// Nothing is logged or emitted when the call fails. A logging failure
/// is reported as a warning and does not stop the result from being emitted.
pub fn run(
    service: &dyn RephraseService,
    request: &RephraseRequest,
    log_path: &Path,
    out: &mut impl Write,
) -> Result<()> {
    let result = gemini::dispatch(service, request)?;

    if request.log_enabled() {
        if let Err(e) = audit::append_record(log_path, request.text(), &result) {
            log::warn!("{e}");
        }
    }

    writeln!(out, "{result}")
        .and_then(|_| out.flush())
        .map_err(|source| RephraseError::Io {
            path: "<stdout>".into(),
            source,
        })
}
