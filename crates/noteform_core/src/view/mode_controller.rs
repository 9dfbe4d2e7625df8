//! Presentation-mode state machine.
//!
//! # Responsibility
//! - Own the currently applied directive set for the view lifetime.
//! - Move between normal/fullscreen/preview by diffing directive sets.
//!
//! # Invariants
//! - After every transition the applied set equals `DirectiveSet::for_mode(mode)`.
//! - Returning to normal from any mode leaves only the normal set applied.
//! - Styling calls are the only side effects.

use crate::model::mode::{DirectiveSet, PresentationMode};
use crate::view::collaborators::Styling;
use log::debug;

/// Directive diff produced by one transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    pub from: PresentationMode,
    pub to: PresentationMode,
    pub removed: usize,
    pub added: usize,
}

/// Tracks the active mode and its applied directives.
#[derive(Debug, Clone)]
pub struct ModeController {
    mode: PresentationMode,
    applied: DirectiveSet,
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeController {
    /// Creates a controller in normal mode with nothing applied yet.
    pub fn new() -> Self {
        Self {
            mode: PresentationMode::Normal,
            applied: DirectiveSet::new(),
        }
    }

    pub fn mode(&self) -> PresentationMode {
        self.mode
    }

    pub fn applied(&self) -> &DirectiveSet {
        &self.applied
    }

    /// Resolves `name` and transitions to it.
    pub fn select(&mut self, name: Option<&str>, styling: &dyn Styling) -> Transition {
        self.transition(PresentationMode::from_name(name), styling)
    }

    /// Applies the full directive set of `target`.
    ///
    /// Directives not in the target set are removed first, then missing ones
    /// are added, which leaves the same end state as resetting to normal and
    /// applying `target` from scratch.
    pub fn transition(&mut self, target: PresentationMode, styling: &dyn Styling) -> Transition {
        let next = DirectiveSet::for_mode(target);
        let mut removed = 0;
        for directive in self.applied.difference(&next) {
            styling.remove_directive(directive);
            removed += 1;
        }
        let mut added = 0;
        for directive in next.difference(&self.applied) {
            styling.add_directive(directive);
            added += 1;
        }

        let transition = Transition {
            from: self.mode,
            to: target,
            removed,
            added,
        };
        debug!(
            "event=mode_transition module=view status=ok from={} to={} removed={} added={}",
            transition.from, transition.to, removed, added
        );
        self.mode = target;
        self.applied = next;
        transition
    }
}
