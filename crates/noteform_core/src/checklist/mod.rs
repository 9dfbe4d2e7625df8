//! Checklist extraction over raw note markup.
//!
//! # Responsibility
//! - Derive completion statistics from markup at save time.
//! - Provide the checklist normalization stage for preview rendering.
//!
//! # Invariants
//! - The stage holds no state shared with other stages.

pub mod extractor;

use crate::render::pipeline::NormalizationStage;

pub use extractor::{count_tasks, list_tasks, render_tasks, toggle_task, TaskToken};

/// Stage name under which the checklist transform is registered.
pub const CHECKLIST_STAGE_NAME: &str = "checklist";

/// Normalization stage rewriting checklist tokens into checkboxes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChecklistStage;

impl NormalizationStage for ChecklistStage {
    fn name(&self) -> &str {
        CHECKLIST_STAGE_NAME
    }

    fn apply(&self, text: &str) -> String {
        render_tasks(text)
    }
}
