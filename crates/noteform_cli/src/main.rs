//! CLI entry point.
//!
//! # Responsibility
//! - Run checklist operations over markdown files.
//! - Drive one scripted form session to exercise core wiring end to end.

mod args;
mod host;

use args::{Cli, Commands};
use clap::Parser;
use host::ConsoleHost;
use log::info;
use noteform_core::{
    count_tasks, default_log_level, init_logging, render_tasks, toggle_task, Collaborators,
    FormConfig, FormViewError, NoteFormView, KEY_ENTER,
};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::rc::Rc;

#[derive(Debug)]
enum CliError {
    Io(PathBuf, std::io::Error),
    Json(serde_json::Error),
    Logging(String),
    View(FormViewError),
    TaskNotFound { file: PathBuf, index: usize },
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(path, err) => write!(f, "{}: {err}", path.display()),
            Self::Json(err) => write!(f, "json error: {err}"),
            Self::Logging(message) => write!(f, "logging setup failed: {message}"),
            Self::View(err) => write!(f, "{err}"),
            Self::TaskNotFound { file, index } => {
                write!(f, "{} has no checklist item {index}", file.display())
            }
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(_, err) => Some(err),
            Self::Json(err) => Some(err),
            Self::View(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<FormViewError> for CliError {
    fn from(value: FormViewError) -> Self {
        Self::View(value)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CountOutput {
    task_all: usize,
    task_completed: usize,
    task_pending: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).map_err(CliError::Logging)?;
    }
    let config = load_config(cli.config.as_deref())?;

    match &cli.command {
        Commands::Count { file } => {
            let summary = count_tasks(&read_file(file)?);
            let output = CountOutput {
                task_all: summary.total,
                task_completed: summary.completed,
                task_pending: summary.pending(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::Render { file } => {
            print!("{}", render_tasks(&read_file(file)?));
        }
        Commands::Toggle {
            file,
            index,
            dry_run,
        } => {
            let updated = toggle_file(file, *index, *dry_run)?;
            if *dry_run {
                print!("{updated}");
            }
        }
        Commands::Smoke {
            text,
            title,
            notebook,
            modes,
            scroll,
        } => {
            for line in run_smoke(config, text, title, notebook, modes, *scroll)? {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<FormConfig, CliError> {
    match path {
        Some(path) => Ok(serde_json::from_str(&read_file(path)?)?),
        None => Ok(FormConfig::default()),
    }
}

fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|err| CliError::Io(path.to_path_buf(), err))
}

fn toggle_file(file: &Path, index: usize, dry_run: bool) -> Result<String, CliError> {
    let updated = toggle_task(&read_file(file)?, index).ok_or_else(|| CliError::TaskNotFound {
        file: file.to_path_buf(),
        index,
    })?;
    if !dry_run {
        std::fs::write(file, &updated).map_err(|err| CliError::Io(file.to_path_buf(), err))?;
        info!("event=task_toggle module=cli status=ok index={index}");
    }
    Ok(updated)
}

fn run_smoke(
    config: FormConfig,
    text: &str,
    title: &str,
    notebook: &str,
    modes: &[String],
    scroll: i64,
) -> Result<Vec<String>, CliError> {
    let host = Rc::new(ConsoleHost::new(text, title, notebook));
    let collaborators = Collaborators {
        editor: host.clone(),
        fields: host.clone(),
        styling: host.clone(),
        tags: host.clone(),
        events: host.clone(),
        pipeline: host.clone(),
        scroll: host.clone(),
        shortcuts: host.clone(),
    };

    let mut view = NoteFormView::activate(collaborators, None, config)?;
    view.on_shown();
    let mut lines = host.drain_trace();
    for mode in modes {
        let applied = view.on_mode_select(Some(mode.as_str()));
        let state = view.on_scroll(Some(scroll));
        lines.extend(host.drain_trace());
        lines.push(format!(
            "mode    {applied} stuck={} offset={}",
            state.stuck, state.applied_offset
        ));
    }
    view.on_keyup(KEY_ENTER);
    view.on_teardown();
    lines.extend(host.drain_trace());
    Ok(lines)
}
