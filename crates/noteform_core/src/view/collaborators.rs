//! Contracts of the UI collaborators driven by the form view.
//!
//! All calls are synchronous and made from the single UI event loop, so
//! implementations take `&self` and use interior mutability where needed.

use crate::model::mode::{Directive, Region};
use crate::model::snapshot::{NoteId, NoteSnapshot};
use crate::render::pipeline::MarkupPipeline;
use std::rc::Rc;

/// Text editing surface.
pub trait EditorSurface {
    fn current_text(&self) -> String;
    fn set_text(&self, text: &str);
}

/// Plain form inputs next to the editor.
pub trait FormFields {
    fn title(&self) -> String;
    fn notebook_id(&self) -> String;
}

/// Styling collaborator. Add/remove calls must be idempotent.
pub trait Styling {
    fn add_directive(&self, directive: Directive);
    fn remove_directive(&self, directive: Directive);
    fn set_top_offset(&self, region: Region, px: i64);
}

/// Tag input widget.
pub trait TagWidget {
    fn selected_tags(&self) -> Vec<String>;
    fn add_tag(&self, tag: &str);
}

/// Event emitted towards persistence/routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Save {
        note_id: Option<NoteId>,
        snapshot: NoteSnapshot,
    },
    Redirect,
}

/// Persistence collaborator receiving form events.
pub trait NoteEvents {
    fn emit(&self, event: FormEvent);
}

/// Opaque scroll listener registration id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Source of scroll events for the content container.
pub trait ScrollEvents {
    fn subscribe(&self) -> SubscriptionId;
    fn unsubscribe(&self, id: SubscriptionId);
}

/// Global keyboard shortcut layer, paused while the form owns the keyboard.
pub trait Shortcuts {
    fn pause(&self);
    fn resume(&self);
}

/// Bundle of collaborators handed to [`crate::view::NoteFormView::activate`].
#[derive(Clone)]
pub struct Collaborators {
    pub editor: Rc<dyn EditorSurface>,
    pub fields: Rc<dyn FormFields>,
    pub styling: Rc<dyn Styling>,
    pub tags: Rc<dyn TagWidget>,
    pub events: Rc<dyn NoteEvents>,
    pub pipeline: Rc<dyn MarkupPipeline>,
    pub scroll: Rc<dyn ScrollEvents>,
    pub shortcuts: Rc<dyn Shortcuts>,
}
