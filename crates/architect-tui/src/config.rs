use std::path::PathBuf;

use architect_core::preferences::{DEFAULT_FOCUS, DEFAULT_LANGUAGE};
use architect_core::{RenderPreferences, ReviewMode};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "prompt-architect", about = "Guided prompt builder")]
pub struct TuiConfig {
    /// Language the final answer should be produced in
    #[arg(long, env = "ARCHITECT_LANGUAGE", default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Review mode: structured, mentor or critical
    #[arg(long, env = "ARCHITECT_REVIEW_MODE", default_value = "structured")]
    pub review_mode: String,

    /// Comma-separated focus tags. Pass an empty string to start with none.
    #[arg(long, env = "ARCHITECT_FOCUS", value_delimiter = ',')]
    pub focus: Option<Vec<String>>,

    /// Write logs to this file (the terminal is taken by the UI)
    #[arg(long, env = "ARCHITECT_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Never touch the system clipboard
    #[arg(long)]
    pub no_clipboard: bool,

    /// Print the final prompt to stdout on exit
    #[arg(long)]
    pub print: bool,

    /// Print the session view as JSON to stdout on exit
    #[arg(long)]
    pub dump_json: bool,
}

impl TuiConfig {
    /// Initial preference panel state. Unknown review modes fall back to structured.
    pub fn preferences(&self) -> RenderPreferences {
        let focus = match &self.focus {
            Some(tags) => {
                let mut focus: Vec<String> = Vec::new();
                for tag in tags.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
                    if !focus.iter().any(|f| f == tag) {
                        focus.push(tag.to_string());
                    }
                }
                focus
            }
            None => DEFAULT_FOCUS.iter().map(|s| s.to_string()).collect(),
        };

        let language = match self.language.trim() {
            "" => DEFAULT_LANGUAGE.to_string(),
            lang => lang.to_string(),
        };

        RenderPreferences {
            focus,
            language,
            review_mode: ReviewMode::from_id(self.review_mode.trim()),
        }
    }
}
