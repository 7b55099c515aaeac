//! Type command implementation
//!
//! Turns each input character into a key action, dispatches it
//! through the standard gesture table, and prints the resulting
//! buffer. With `--autocapitalize`, letters at the start of a new
//! sentence are shifted the way the `Auto` shift state would shift
//! them on a device.

use super::{init_logging, OutputFormat};
use anyhow::Result;
use clap::Args;
use keyflow_core::{Gesture, KeyAction};
use keyflow_engine::{run_standard_action, BufferDocument, KeyboardController, SentenceOps};

/// Arguments for the type command
#[derive(Debug, Args)]
pub struct TypeArgs {
    /// Text to type, one release gesture per character
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Backspace presses to apply after typing
    #[arg(short, long, default_value_t = 0)]
    pub backspaces: usize,

    /// End the sentence after typing (trim trailing spaces, insert ". ")
    #[arg(short, long)]
    pub end_sentence: bool,

    /// Uppercase letters at the start of a new sentence
    #[arg(short, long)]
    pub autocapitalize: bool,

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

impl TypeArgs {
    /// Execute the type command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose);
        log::info!("Typing {} characters", self.text.chars().count());

        let ops = if self.delimiters.is_empty() {
            SentenceOps::new()
        } else {
            SentenceOps::with_delimiters(self.delimiters.clone())?
        };

        let mut doc = BufferDocument::new();
        for ch in self.text.chars() {
            let ch = if self.autocapitalize
                && ch.is_lowercase()
                && ops.is_cursor_at_new_sentence_with_trailing_whitespace(&doc)
            {
                ch.to_uppercase().to_string()
            } else {
                ch.to_string()
            };
            let action = action_for_char(&ch);
            log::debug!("Dispatching {action:?}");
            run_standard_action(
                &action,
                Gesture::Release,
                Some(&mut doc as &mut dyn KeyboardController),
            );
        }

        for _ in 0..self.backspaces {
            run_standard_action(
                &KeyAction::Backspace,
                Gesture::Press,
                Some(&mut doc as &mut dyn KeyboardController),
            );
        }

        if self.end_sentence {
            ops.end_sentence(&mut doc);
        }

        match self.format {
            OutputFormat::Text => println!("{}", doc.text()),
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "text": doc.text(),
                    "cursor": doc.cursor(),
                    "new_sentence": ops.is_cursor_at_new_sentence(&doc),
                });
                println!("{value}");
            }
        }
        Ok(())
    }
}

fn action_for_char(ch: &str) -> KeyAction {
    match ch {
        " " => KeyAction::Space,
        "\n" => KeyAction::Primary,
        "\t" => KeyAction::Tab,
        _ => KeyAction::Character(ch.to_string()),
    }
}
