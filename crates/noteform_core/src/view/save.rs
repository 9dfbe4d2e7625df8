//! Save coordination and key-up shortcuts.
//!
//! # Responsibility
//! - Assemble a `NoteSnapshot` from the current form and editor state.
//! - Map key-up codes on the title input to save/cancel actions.
//!
//! # Invariants
//! - Snapshot assembly never fails; malformed input is defaulted.
//! - Checklist counts are computed from the trimmed raw text, not the preview.
//! - The coordinator emits events only; it never persists or validates.

use crate::checklist::count_tasks;
use crate::model::snapshot::{NoteId, NoteSnapshot, NotebookId};
use crate::view::collaborators::{EditorSurface, FormEvent, FormFields, NoteEvents, TagWidget};
use log::info;

pub const KEY_ENTER: u32 = 13;
pub const KEY_ESCAPE: u32 = 27;

/// Action bound to a key-up code on the title input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Save,
    Cancel,
}

impl KeyAction {
    pub fn from_key_code(key_code: u32) -> Option<Self> {
        match key_code {
            KEY_ENTER => Some(Self::Save),
            KEY_ESCAPE => Some(Self::Cancel),
            _ => None,
        }
    }
}

/// Reads form state and builds save payloads.
#[derive(Debug, Clone)]
pub struct SaveCoordinator {
    note_id: Option<NoteId>,
    untitled_title: String,
}

impl SaveCoordinator {
    pub fn new(note_id: Option<NoteId>, untitled_title: impl Into<String>) -> Self {
        Self {
            note_id,
            untitled_title: untitled_title.into(),
        }
    }

    pub fn note_id(&self) -> Option<NoteId> {
        self.note_id
    }

    /// Builds a snapshot from the collaborators' current values.
    pub fn snapshot(
        &self,
        editor: &dyn EditorSurface,
        fields: &dyn FormFields,
        tags: &dyn TagWidget,
    ) -> NoteSnapshot {
        let content = editor.current_text().trim().to_string();
        let title = match fields.title().trim() {
            "" => self.untitled_title.clone(),
            trimmed => trimmed.to_string(),
        };
        let notebook_id = NotebookId::parse(&fields.notebook_id());
        let summary = count_tasks(&content);

        NoteSnapshot {
            title,
            content,
            notebook_id,
            tags: tags.selected_tags(),
            task_all: summary.total,
            task_completed: summary.completed,
        }
    }

    /// Assembles a snapshot and emits it as a save event.
    pub fn save(
        &self,
        editor: &dyn EditorSurface,
        fields: &dyn FormFields,
        tags: &dyn TagWidget,
        events: &dyn NoteEvents,
    ) -> NoteSnapshot {
        let snapshot = self.snapshot(editor, fields, tags);
        info!(
            "event=note_save module=view status=emitted existing={} content_len={} tags={} task_all={} task_completed={} notebook_nan={}",
            self.note_id.is_some(),
            snapshot.content.len(),
            snapshot.tags.len(),
            snapshot.task_all,
            snapshot.task_completed,
            snapshot.notebook_id.is_nan()
        );
        events.emit(FormEvent::Save {
            note_id: self.note_id,
            snapshot: snapshot.clone(),
        });
        snapshot
    }

    /// Emits the cancel/redirect event. No other state changes.
    pub fn redirect(&self, events: &dyn NoteEvents) {
        info!("event=note_redirect module=view status=emitted");
        events.emit(FormEvent::Redirect);
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyAction, KEY_ENTER, KEY_ESCAPE};

    #[test]
    fn only_enter_and_escape_are_bound() {
        assert_eq!(KeyAction::from_key_code(KEY_ENTER), Some(KeyAction::Save));
        assert_eq!(KeyAction::from_key_code(KEY_ESCAPE), Some(KeyAction::Cancel));
        assert_eq!(KeyAction::from_key_code(65), None);
        assert_eq!(KeyAction::from_key_code(0), None);
    }
}
