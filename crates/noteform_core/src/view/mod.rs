//! Editing-surface controllers.
//!
//! # Responsibility
//! - Translate host view events into directive, scroll and save effects.
//! - Keep every controller synchronous and single-threaded.
//!
//! # Invariants
//! - The mode controller is the only writer of mode directives.
//! - Scroll state is never stale relative to the latest mode transition.

pub mod collaborators;
pub mod form_view;
pub mod mode_controller;
pub mod save;
pub mod scroll_tracker;
pub mod subscription;

pub use collaborators::{
    Collaborators, EditorSurface, FormEvent, FormFields, NoteEvents, ScrollEvents, Shortcuts,
    Styling, SubscriptionId, TagWidget,
};
pub use form_view::{FormViewError, NoteFormView};
pub use mode_controller::{ModeController, Transition};
pub use save::{KeyAction, SaveCoordinator, KEY_ENTER, KEY_ESCAPE};
pub use scroll_tracker::{toolbar_scroll_state, ScrollState, ScrollTracker};
pub use subscription::{ScrollSubscription, ShortcutPause, StageRegistration};
