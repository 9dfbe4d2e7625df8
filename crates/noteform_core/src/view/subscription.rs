//! Scoped acquisition of view-lifetime resources.
//!
//! # Invariants
//! - Every acquired resource is released exactly once.
//! - Release happens on explicit `release()` or on drop, whichever comes first.

use crate::render::pipeline::{MarkupPipeline, NormalizationStage, PipelineError};
use crate::view::collaborators::{ScrollEvents, Shortcuts, SubscriptionId};
use log::{debug, warn};
use std::rc::Rc;

/// Live scroll listener registration.
pub struct ScrollSubscription {
    source: Rc<dyn ScrollEvents>,
    id: Option<SubscriptionId>,
}

impl ScrollSubscription {
    pub fn acquire(source: Rc<dyn ScrollEvents>) -> Self {
        let id = source.subscribe();
        debug!("event=scroll_subscribe module=view status=ok id={}", id.0);
        Self {
            source,
            id: Some(id),
        }
    }

    pub fn id(&self) -> Option<SubscriptionId> {
        self.id
    }

    pub fn release(&mut self) {
        if let Some(id) = self.id.take() {
            self.source.unsubscribe(id);
            debug!("event=scroll_unsubscribe module=view status=ok id={}", id.0);
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

/// Keeps global shortcuts paused while held.
pub struct ShortcutPause {
    shortcuts: Rc<dyn Shortcuts>,
    active: bool,
}

impl ShortcutPause {
    pub fn acquire(shortcuts: Rc<dyn Shortcuts>) -> Self {
        shortcuts.pause();
        Self {
            shortcuts,
            active: true,
        }
    }

    pub fn release(&mut self) {
        if self.active {
            self.active = false;
            self.shortcuts.resume();
        }
    }
}

impl Drop for ShortcutPause {
    fn drop(&mut self) {
        self.release();
    }
}

/// Normalization stage registered for the lifetime of one view.
pub struct StageRegistration {
    pipeline: Rc<dyn MarkupPipeline>,
    name: Option<String>,
}

impl StageRegistration {
    /// Registers `stage`; nothing is held when registration fails.
    pub fn acquire(
        pipeline: Rc<dyn MarkupPipeline>,
        stage: Box<dyn NormalizationStage>,
    ) -> Result<Self, PipelineError> {
        let name = stage.name().trim().to_string();
        pipeline.register_stage(stage)?;
        Ok(Self {
            pipeline,
            name: Some(name),
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn release(&mut self) {
        if let Some(name) = self.name.take() {
            if !self.pipeline.unregister_stage(&name) {
                warn!("event=stage_release module=view status=missing stage={name}");
            }
        }
    }
}

impl Drop for StageRegistration {
    fn drop(&mut self) {
        self.release();
    }
}
