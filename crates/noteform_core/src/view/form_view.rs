//! Note form view facade.
//!
//! # Responsibility
//! - Wire the mode controller, scroll tracker and save coordinator to the
//!   host view's events.
//! - Own view-lifetime resources (checklist stage, scroll subscription,
//!   shortcut pause).
//!
//! # Invariants
//! - A mode transition recomputes the toolbar state before returning.
//! - Teardown is idempotent and also runs on drop.
//! - After teardown the normal directive set is applied, the toolbar is
//!   unstuck and every acquired resource is released.
//! - Scroll events after teardown have no styling effect.

use crate::checklist::{toggle_task, ChecklistStage};
use crate::config::{ConfigError, FormConfig};
use crate::model::mode::PresentationMode;
use crate::model::snapshot::{ExistingNote, NoteSnapshot};
use crate::render::pipeline::PipelineError;
use crate::view::collaborators::Collaborators;
use crate::view::mode_controller::ModeController;
use crate::view::save::{KeyAction, SaveCoordinator};
use crate::view::scroll_tracker::{ScrollState, ScrollTracker};
use crate::view::subscription::{ScrollSubscription, ShortcutPause, StageRegistration};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// View activation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormViewError {
    Config(ConfigError),
    Pipeline(PipelineError),
}

impl Display for FormViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid form config: {err}"),
            Self::Pipeline(err) => write!(f, "preview pipeline setup failed: {err}"),
        }
    }
}

impl Error for FormViewError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Pipeline(err) => Some(err),
        }
    }
}

impl From<ConfigError> for FormViewError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<PipelineError> for FormViewError {
    fn from(value: PipelineError) -> Self {
        Self::Pipeline(value)
    }
}

/// Active note form session.
pub struct NoteFormView {
    collaborators: Collaborators,
    config: FormConfig,
    modes: ModeController,
    scroll: ScrollTracker,
    saver: SaveCoordinator,
    checklist_stage: Option<StageRegistration>,
    scroll_subscription: Option<ScrollSubscription>,
    shortcut_pause: Option<ShortcutPause>,
}

impl NoteFormView {
    /// Activates a form view for a new note (`existing == None`) or an
    /// existing one.
    ///
    /// # Errors
    /// - Returns an error when `config` is invalid.
    /// - Returns an error when the checklist stage cannot be registered.
    pub fn activate(
        collaborators: Collaborators,
        existing: Option<ExistingNote>,
        config: FormConfig,
    ) -> Result<Self, FormViewError> {
        config.validate()?;
        let checklist_stage =
            StageRegistration::acquire(collaborators.pipeline.clone(), Box::new(ChecklistStage))?;

        let shortcut_pause = ShortcutPause::acquire(collaborators.shortcuts.clone());
        let scroll_subscription = ScrollSubscription::acquire(collaborators.scroll.clone());

        let note_id = existing.as_ref().map(|note| note.id);
        if let Some(note) = &existing {
            for tag in &note.tags {
                collaborators.tags.add_tag(tag);
            }
        }

        let mut view = Self {
            saver: SaveCoordinator::new(note_id, config.untitled_title.clone()),
            scroll: ScrollTracker::new(&config),
            modes: ModeController::new(),
            config,
            collaborators,
            checklist_stage: Some(checklist_stage),
            scroll_subscription: Some(scroll_subscription),
            shortcut_pause: Some(shortcut_pause),
        };
        view.enter_mode(PresentationMode::Normal);

        info!(
            "event=form_activate module=view status=ok existing={} seeded_tags={}",
            note_id.is_some(),
            existing.map(|note| note.tags.len()).unwrap_or(0)
        );
        Ok(view)
    }

    pub fn mode(&self) -> PresentationMode {
        self.modes.mode()
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll.state()
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Whether the view still holds its resources.
    pub fn is_active(&self) -> bool {
        self.scroll_subscription.is_some()
    }

    /// Handles a mode-menu click.
    pub fn on_mode_select(&mut self, mode_name: Option<&str>) -> PresentationMode {
        let target = PresentationMode::from_name(mode_name);
        if mode_name.is_some() && target == PresentationMode::Normal {
            debug!("event=mode_select module=view status=fallback requested_known=false");
        }
        self.enter_mode(target);
        target
    }

    /// Handles a scroll event of the content container.
    pub fn on_scroll(&mut self, offset: Option<i64>) -> ScrollState {
        if !self.is_active() {
            debug!("event=scroll module=view status=ignored reason=inactive");
            return ScrollState::UNSTUCK;
        }
        self.scroll.on_scroll(
            offset,
            self.modes.mode(),
            self.collaborators.styling.as_ref(),
        )
    }

    /// Handles the save button.
    pub fn on_save_requested(&self) -> NoteSnapshot {
        self.saver.save(
            self.collaborators.editor.as_ref(),
            self.collaborators.fields.as_ref(),
            self.collaborators.tags.as_ref(),
            self.collaborators.events.as_ref(),
        )
    }

    /// Handles the cancel button.
    pub fn on_cancel_requested(&self) {
        self.saver.redirect(self.collaborators.events.as_ref());
    }

    /// Handles key-up on the title input.
    pub fn on_keyup(&self, key_code: u32) -> Option<KeyAction> {
        let action = KeyAction::from_key_code(key_code)?;
        match action {
            KeyAction::Save => {
                self.on_save_requested();
            }
            KeyAction::Cancel => self.on_cancel_requested(),
        }
        Some(action)
    }

    /// Renders the preview once the view is shown.
    pub fn on_shown(&self) {
        self.collaborators.pipeline.render(&self.config.preview_target);
    }

    /// Writes a checkbox toggle from the preview back into the raw text.
    ///
    /// Returns `false` when the editor text has no checklist item `index`.
    pub fn on_task_toggled(&self, index: usize) -> bool {
        let text = self.collaborators.editor.current_text();
        match toggle_task(&text, index) {
            Some(updated) => {
                self.collaborators.editor.set_text(&updated);
                self.collaborators.pipeline.render(&self.config.preview_target);
                true
            }
            None => {
                warn!("event=task_toggle module=view status=missing index={index}");
                false
            }
        }
    }

    /// Restores normal mode and releases view resources.
    pub fn on_teardown(&mut self) {
        if !self.is_active() {
            return;
        }
        self.enter_mode(PresentationMode::Normal);
        if let Some(mut subscription) = self.scroll_subscription.take() {
            subscription.release();
        }
        if let Some(mut stage) = self.checklist_stage.take() {
            stage.release();
        }
        if let Some(mut pause) = self.shortcut_pause.take() {
            pause.release();
        }
        info!("event=form_teardown module=view status=ok");
    }

    fn enter_mode(&mut self, target: PresentationMode) {
        let styling = self.collaborators.styling.as_ref();
        self.modes.transition(target, styling);
        self.scroll.recompute(target, styling);
    }
}

impl Drop for NoteFormView {
    fn drop(&mut self) {
        self.on_teardown();
    }
}
