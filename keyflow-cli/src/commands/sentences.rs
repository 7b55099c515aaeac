//! Sentences command implementation

use super::{init_logging, OutputFormat};
use anyhow::Result;
use clap::Args;
use keyflow_core::SentenceDelimiters;

/// Arguments for the sentences command
#[derive(Debug, Args)]
pub struct SentencesArgs {
    /// The text before the cursor to analyze
    #[arg(value_name = "BEFORE")]
    pub before: String,

    /// Custom sentence delimiters
    #[arg(short, long, value_name = "DELIM")]
    pub delimiters: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SentencesArgs {
    /// Execute the sentences command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose);

        let delims = if self.delimiters.is_empty() {
            SentenceDelimiters::default()
        } else {
            SentenceDelimiters::custom(self.delimiters.clone())?
        };
        log::debug!("Delimiters: {:?}", delims.as_slice());

        let ended = delims.is_last_sentence_ended(&self.before);
        let ended_ws = delims.is_last_sentence_ended_with_trailing_whitespace(&self.before);
        let last = delims.last_sentence(&self.before);

        match self.format {
            OutputFormat::Text => {
                println!("last sentence ended: {ended}");
                println!("with trailing whitespace: {ended_ws}");
                match &last {
                    Some(sentence) => println!("sentence in progress: {sentence:?}"),
                    None => println!("sentence in progress: none"),
                }
            }
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "last_sentence_ended": ended,
                    "last_sentence_ended_with_trailing_whitespace": ended_ws,
                    "last_sentence": last,
                });
                println!("{value}");
            }
        }
        Ok(())
    }
}
