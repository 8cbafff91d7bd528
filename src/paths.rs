//! Single source of truth for the rephrase filesystem layout.
//!
//! This module defines WHERE data lives. It has no I/O beyond locating the
//! running executable, and no business logic.
//!
//! ```text
//! <base>/
//! ├── bin/rephrase             # The executable
//! ├── credentials/
//! │   └── gemini.json          # {"api_key": "..."}
//! └── log/
//!     └── log.txt              # Append-only audit log
//! ```
//!
//! `<base>` is the parent of the executable's directory, unless
//! `REPHRASE_HOME` is set.

use std::path::{Path, PathBuf};

/// Environment variable overriding the base directory
pub const ENV_HOME: &str = "REPHRASE_HOME";

/// Base directory holding `credentials/` and `log/`.
pub fn base_dir() -> PathBuf {
    if let Some(home) = std::env::var_os(ENV_HOME).filter(|v| !v.is_empty()) {
        return PathBuf::from(home);
    }

    std::env::current_exe()
        .ok()
        .and_then(|exe| base_from_exe(&exe))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Parent of the directory containing `exe`.
fn base_from_exe(exe: &Path) -> Option<PathBuf> {
    exe.parent()?.parent().map(Path::to_path_buf)
}

/// Credentials directory: `<base>/credentials/`
pub fn credentials_dir(base: &Path) -> PathBuf {
    base.join("credentials")
}

/// Credential file: `<base>/credentials/gemini.json`
pub fn credentials_path(base: &Path) -> PathBuf {
    credentials_dir(base).join("gemini.json")
}

/// Log directory: `<base>/log/`
pub fn log_dir(base: &Path) -> PathBuf {
    base.join("log")
}

/// Audit log file: `<base>/log/log.txt`
pub fn log_path(base: &Path) -> PathBuf {
    log_dir(base).join("log.txt")
}
