//! Console host used by the `smoke` command.
//!
//! Implements every UI collaborator in memory and records a line per effect,
//! so one scripted session shows exactly what the core asked the UI to do.

use noteform_core::{
    Directive, EditorSurface, FormEvent, FormFields, MarkupPipeline, NormalizationStage,
    NoteEvents, PipelineError, Region, ScrollEvents, Shortcuts, StageChain, Styling,
    SubscriptionId, TagWidget,
};
use std::cell::{Cell, RefCell};

#[derive(Default)]
pub struct ConsoleHost {
    text: RefCell<String>,
    title: String,
    notebook: String,
    tags: RefCell<Vec<String>>,
    stages: RefCell<StageChain>,
    next_subscription: Cell<u64>,
    trace: RefCell<Vec<String>>,
}

impl ConsoleHost {
    pub fn new(text: &str, title: &str, notebook: &str) -> Self {
        Self {
            text: RefCell::new(text.to_string()),
            title: title.to_string(),
            notebook: notebook.to_string(),
            ..Self::default()
        }
    }

    /// Takes the recorded effect lines.
    pub fn drain_trace(&self) -> Vec<String> {
        std::mem::take(&mut *self.trace.borrow_mut())
    }

    fn record(&self, line: String) {
        self.trace.borrow_mut().push(line);
    }
}

impl EditorSurface for ConsoleHost {
    fn current_text(&self) -> String {
        self.text.borrow().clone()
    }

    fn set_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
        self.record(format!("editor  set_text len={}", text.len()));
    }
}

impl FormFields for ConsoleHost {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn notebook_id(&self) -> String {
        self.notebook.clone()
    }
}

impl Styling for ConsoleHost {
    fn add_directive(&self, directive: Directive) {
        self.record(format!("style   +{directive}"));
    }

    fn remove_directive(&self, directive: Directive) {
        self.record(format!("style   -{directive}"));
    }

    fn set_top_offset(&self, region: Region, px: i64) {
        self.record(format!("style   {}.top={px}px", region.as_str()));
    }
}

impl TagWidget for ConsoleHost {
    fn selected_tags(&self) -> Vec<String> {
        self.tags.borrow().clone()
    }

    fn add_tag(&self, tag: &str) {
        self.tags.borrow_mut().push(tag.to_string());
        self.record(format!("tags    +{tag}"));
    }
}

impl NoteEvents for ConsoleHost {
    fn emit(&self, event: FormEvent) {
        let line = match event {
            FormEvent::Save { snapshot, .. } => match serde_json::to_string(&snapshot) {
                Ok(json) => format!("event   save {json}"),
                Err(err) => format!("event   save <unserializable: {err}>"),
            },
            FormEvent::Redirect => "event   redirect".to_string(),
        };
        self.record(line);
    }
}

impl MarkupPipeline for ConsoleHost {
    fn register_stage(&self, stage: Box<dyn NormalizationStage>) -> Result<(), PipelineError> {
        let name = stage.name().to_string();
        self.stages.borrow_mut().register(stage)?;
        self.record(format!("render  stage={name}"));
        Ok(())
    }

    fn unregister_stage(&self, name: &str) -> bool {
        let removed = self.stages.borrow_mut().remove(name);
        self.record(format!("render  unstage={name} removed={removed}"));
        removed
    }

    fn render(&self, target: &str) {
        let output = self.stages.borrow().run(&self.text.borrow());
        self.record(format!("render  #{target}\n{output}"));
    }
}

impl ScrollEvents for ConsoleHost {
    fn subscribe(&self) -> SubscriptionId {
        let id = self.next_subscription.get() + 1;
        self.next_subscription.set(id);
        self.record(format!("scroll  subscribe id={id}"));
        SubscriptionId(id)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.record(format!("scroll  unsubscribe id={}", id.0));
    }
}

impl Shortcuts for ConsoleHost {
    fn pause(&self) {
        self.record("keys    pause".to_string());
    }

    fn resume(&self) {
        self.record("keys    resume".to_string());
    }
}
