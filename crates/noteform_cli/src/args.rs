//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "noteform")]
#[command(version, about = "Checklist and form-session probes for noteform_core", long_about = None)]
pub struct Cli {
    /// JSON file overriding form configuration defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Absolute directory for rolling log files (logging stays off when omitted)
    #[arg(long, global = true)]
    pub log_dir: Option<String>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print checklist totals of a markdown file as JSON
    Count {
        file: PathBuf,
    },
    /// Print the markdown file with checklist items rendered as checkboxes
    Render {
        file: PathBuf,
    },
    /// Flip one checklist item in place
    Toggle {
        file: PathBuf,
        /// Zero-based checklist item index
        index: usize,
        /// Print the result instead of rewriting the file
        #[arg(long)]
        dry_run: bool,
    },
    /// Run a scripted form session against a console host
    Smoke {
        /// Markdown body typed into the editor
        #[arg(long, default_value = "- [ ] buy milk\n- [x] call mom\n- [ ] write notes")]
        text: String,
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "1")]
        notebook: String,
        /// Mode menu clicks, applied in order
        #[arg(
            long = "mode",
            value_delimiter = ',',
            default_values_t = ["preview".to_string(), "fullscreen".to_string()]
        )]
        modes: Vec<String>,
        /// Scroll offset reported after each mode click
        #[arg(long, default_value_t = 300)]
        scroll: i64,
    },
}
