//! Core logic of the note editing surface.
//! This crate is the single source of truth for presentation-mode, checklist
//! and save-payload invariants; UI widgets plug in through traits.

pub mod checklist;
pub mod config;
pub mod logging;
pub mod model;
pub mod render;
pub mod view;

pub use checklist::{
    count_tasks, list_tasks, render_tasks, toggle_task, ChecklistStage, TaskToken,
    CHECKLIST_STAGE_NAME,
};
pub use config::{ConfigError, FormConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::mode::{Directive, DirectiveSet, PresentationMode, Region};
pub use model::snapshot::{ChecklistSummary, ExistingNote, NoteId, NoteSnapshot, NotebookId};
pub use render::pipeline::{MarkupPipeline, NormalizationStage, PipelineError, StageChain};
pub use view::{
    toolbar_scroll_state, Collaborators, EditorSurface, FormEvent, FormFields, FormViewError,
    KeyAction, ModeController, NoteEvents, NoteFormView, SaveCoordinator, ScrollEvents,
    ScrollState, ScrollTracker, Shortcuts, Styling, SubscriptionId, TagWidget, KEY_ENTER,
    KEY_ESCAPE,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
