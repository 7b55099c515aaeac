//! CLI command implementations

mod sentences;
mod type_session;

pub use sentences::SentencesArgs;
pub use type_session::TypeArgs;

/// Output format shared by the commands
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON object
    Json,
}

/// Initialize logging based on a verbosity count
pub(crate) fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init()
        .ok();
}
