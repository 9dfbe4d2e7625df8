#![allow(dead_code)]

use noteform_core::{
    Collaborators, Directive, DirectiveSet, EditorSurface, FormEvent, FormFields, MarkupPipeline,
    NormalizationStage, NoteEvents, PipelineError, Region, ScrollEvents, Shortcuts, StageChain,
    Styling, SubscriptionId, TagWidget,
};
use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;

/// In-memory stand-in for every UI collaborator of the form view.
#[derive(Default)]
pub struct FakeHost {
    pub text: RefCell<String>,
    pub title: RefCell<String>,
    pub notebook: RefCell<String>,
    pub tags: RefCell<Vec<String>>,
    pub classes: RefCell<BTreeSet<Directive>>,
    pub offsets: RefCell<Vec<(Region, i64)>>,
    pub events: RefCell<Vec<FormEvent>>,
    pub stages: RefCell<StageChain>,
    pub rendered: RefCell<Vec<(String, String)>>,
    pub subscriptions: RefCell<BTreeSet<u64>>,
    next_subscription: Cell<u64>,
    pub paused: Cell<bool>,
    pub resume_calls: Cell<u32>,
}

impl FakeHost {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn with_form(text: &str, title: &str, notebook: &str, tags: &[&str]) -> Rc<Self> {
        let host = Self::default();
        *host.text.borrow_mut() = text.to_string();
        *host.title.borrow_mut() = title.to_string();
        *host.notebook.borrow_mut() = notebook.to_string();
        *host.tags.borrow_mut() = tags.iter().map(|tag| tag.to_string()).collect();
        Rc::new(host)
    }

    pub fn applied(&self) -> DirectiveSet {
        self.classes.borrow().iter().copied().collect()
    }

    pub fn has_class(&self, region: Region, name: &'static str) -> bool {
        self.classes
            .borrow()
            .contains(&Directive::new(region, name))
    }

    pub fn last_top_offset(&self) -> Option<i64> {
        self.offsets.borrow().last().map(|(_, px)| *px)
    }

    pub fn last_render(&self) -> Option<(String, String)> {
        self.rendered.borrow().last().cloned()
    }
}

pub fn collaborators(host: &Rc<FakeHost>) -> Collaborators {
    Collaborators {
        editor: host.clone(),
        fields: host.clone(),
        styling: host.clone(),
        tags: host.clone(),
        events: host.clone(),
        pipeline: host.clone(),
        scroll: host.clone(),
        shortcuts: host.clone(),
    }
}

impl EditorSurface for FakeHost {
    fn current_text(&self) -> String {
        self.text.borrow().clone()
    }

    fn set_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
    }
}

impl FormFields for FakeHost {
    fn title(&self) -> String {
        self.title.borrow().clone()
    }

    fn notebook_id(&self) -> String {
        self.notebook.borrow().clone()
    }
}

impl Styling for FakeHost {
    fn add_directive(&self, directive: Directive) {
        self.classes.borrow_mut().insert(directive);
    }

    fn remove_directive(&self, directive: Directive) {
        self.classes.borrow_mut().remove(&directive);
    }

    fn set_top_offset(&self, region: Region, px: i64) {
        self.offsets.borrow_mut().push((region, px));
    }
}

impl TagWidget for FakeHost {
    fn selected_tags(&self) -> Vec<String> {
        self.tags.borrow().clone()
    }

    fn add_tag(&self, tag: &str) {
        self.tags.borrow_mut().push(tag.to_string());
    }
}

impl NoteEvents for FakeHost {
    fn emit(&self, event: FormEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl MarkupPipeline for FakeHost {
    fn register_stage(&self, stage: Box<dyn NormalizationStage>) -> Result<(), PipelineError> {
        self.stages.borrow_mut().register(stage)
    }

    fn unregister_stage(&self, name: &str) -> bool {
        self.stages.borrow_mut().remove(name)
    }

    fn render(&self, target: &str) {
        let output = self.stages.borrow().run(&self.text.borrow());
        self.rendered
            .borrow_mut()
            .push((target.to_string(), output));
    }
}

impl ScrollEvents for FakeHost {
    fn subscribe(&self) -> SubscriptionId {
        let id = self.next_subscription.get() + 1;
        self.next_subscription.set(id);
        self.subscriptions.borrow_mut().insert(id);
        SubscriptionId(id)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.subscriptions.borrow_mut().remove(&id.0);
    }
}

impl Shortcuts for FakeHost {
    fn pause(&self) {
        self.paused.set(true);
    }

    fn resume(&self) {
        self.paused.set(false);
        self.resume_calls.set(self.resume_calls.get() + 1);
    }
}
