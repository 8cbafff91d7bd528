use anyhow::Result;
use clap::Parser;

use rephrase::RephraseError;

mod commands;

/// Environment variable holding the diagnostic log filter
const ENV_LOG: &str = "REPHRASE_LOG";

#[derive(Parser)]
#[command(
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "Rephrase text in a chosen tone using Gemini",
    long_about = None,
    after_help = "Example:\n  rephrase \"Hello world\" professional log"
)]
struct Cli {
    /// Text to rephrase
    #[arg(allow_hyphen_values = true)]
    text: Option<String>,

    /// Tone of the rephrased text (formal, casual, friendly, professional, humorous, etc.)
    tone: Option<String>,

    /// Keep the audit log on: "yes" or "log". Any other value disables it
    enable_log: Option<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(ENV_LOG, "warn")).init();

    let cli = Cli::parse();

    match commands::rephrase::execute(
        cli.text.as_deref(),
        cli.tone.as_deref(),
        cli.enable_log.as_deref(),
    ) {
        Ok(()) => Ok(()),
        Err(RephraseError::Usage) => {
            // Usage guidance goes to stdout, like --help
            println!("{}", RephraseError::Usage);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
