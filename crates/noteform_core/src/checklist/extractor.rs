//! Checklist token recognition, counting and rendering.
//!
//! # Responsibility
//! - Recognize line-level checklist tokens (`- [ ]`, `* [x]`, `+ [X]`).
//! - Count total/completed items at save time.
//! - Rewrite tokens into interactive checkbox markup for the preview.
//! - Flip one item in raw text when the preview reports a toggle.
//!
//! # Invariants
//! - Only the raw token syntax is recognized; rendered checkboxes never match,
//!   so every operation is idempotent on already rendered text.
//! - Lines without a token are passed through byte-for-byte.
//! - Token indices are zero-based and follow document order.

use crate::model::snapshot::ChecklistSummary;
use once_cell::sync::Lazy;
use regex::Regex;

/// Indent, bullet, one space, bracketed state, then whitespace or end of line.
static TASK_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([ \t]*)([-*+]) \[([ xX])\](?:\s|$)").expect("valid task token regex")
});

/// One recognized checklist token on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskToken<'a> {
    /// Zero-based token index in document order.
    pub index: usize,
    pub indent: &'a str,
    pub bullet: &'a str,
    pub done: bool,
    /// Byte offset of the state character within the line.
    state_at: usize,
    /// Byte offset right after the closing bracket.
    token_end: usize,
}

/// Counts recognized tokens and how many are marked done.
pub fn count_tasks(text: &str) -> ChecklistSummary {
    tokenized_lines(text).fold(ChecklistSummary::default(), |mut summary, (_, token)| {
        if let Some(token) = token {
            summary.total += 1;
            if token.done {
                summary.completed += 1;
            }
        }
        summary
    })
}

/// Replaces every token with an interactive checkbox, leaving other text intact.
pub fn render_tasks(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for (line, token) in tokenized_lines(text) {
        match token {
            Some(token) => {
                out.push_str(token.indent);
                out.push_str(token.bullet);
                out.push_str(" <input type=\"checkbox\" data-task=\"");
                out.push_str(&token.index.to_string());
                out.push('"');
                if token.done {
                    out.push_str(" checked");
                }
                out.push('>');
                out.push_str(&line[token.token_end..]);
            }
            None => out.push_str(line),
        }
    }
    out
}

/// Flips the token at `index` between pending and done.
///
/// Returns `None` when `text` has no token with that index.
pub fn toggle_task(text: &str, index: usize) -> Option<String> {
    let mut out = String::with_capacity(text.len());
    let mut found = false;
    for (line, token) in tokenized_lines(text) {
        match token {
            Some(token) if token.index == index => {
                found = true;
                out.push_str(&line[..token.state_at]);
                out.push(if token.done { ' ' } else { 'x' });
                out.push_str(&line[token.state_at + 1..]);
            }
            _ => out.push_str(line),
        }
    }
    found.then_some(out)
}

/// Lists every token in document order.
pub fn list_tasks(text: &str) -> Vec<TaskToken<'_>> {
    tokenized_lines(text).filter_map(|(_, token)| token).collect()
}

/// Splits `text` into lines (terminators kept) paired with their token.
fn tokenized_lines(text: &str) -> impl Iterator<Item = (&str, Option<TaskToken<'_>>)> {
    let mut next_index = 0usize;
    text.split_inclusive('\n').map(move |line| {
        let token = parse_token(line, next_index);
        if token.is_some() {
            next_index += 1;
        }
        (line, token)
    })
}

fn parse_token(line: &str, index: usize) -> Option<TaskToken<'_>> {
    let caps = TASK_TOKEN_RE.captures(line)?;
    let indent = caps.get(1)?.as_str();
    let bullet = caps.get(2)?.as_str();
    let state = caps.get(3)?;
    Some(TaskToken {
        index,
        indent,
        bullet,
        done: state.as_str() != " ",
        state_at: state.start(),
        token_end: state.end() + 1,
    })
}
