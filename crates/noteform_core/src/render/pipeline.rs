//! Normalization stage chain and markup pipeline contract.

use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One named `text -> text` transform run before final rendering.
pub trait NormalizationStage {
    fn name(&self) -> &str;
    fn apply(&self, text: &str) -> String;
}

/// External markup-rendering pipeline.
///
/// Implementations typically embed a [`StageChain`] and run it over the raw
/// editor text before converting markup into the `target` container.
pub trait MarkupPipeline {
    /// Registers one normalization stage.
    fn register_stage(&self, stage: Box<dyn NormalizationStage>) -> Result<(), PipelineError>;
    /// Removes the stage named `name`. Returns `false` when none was registered.
    fn unregister_stage(&self, name: &str) -> bool;
    /// Renders the current editor text into `target`.
    fn render(&self, target: &str);
}

/// Stage registration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    EmptyStageName,
    DuplicateStage(String),
}

impl Display for PipelineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyStageName => write!(f, "normalization stage name must not be empty"),
            Self::DuplicateStage(name) => {
                write!(f, "normalization stage already registered: {name}")
            }
        }
    }
}

impl Error for PipelineError {}

/// Ordered sequence of normalization stages.
#[derive(Default)]
pub struct StageChain {
    stages: Vec<Box<dyn NormalizationStage>>,
}

impl StageChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one stage after validating its name.
    pub fn register(&mut self, stage: Box<dyn NormalizationStage>) -> Result<(), PipelineError> {
        let name = stage.name().trim();
        if name.is_empty() {
            return Err(PipelineError::EmptyStageName);
        }
        if self.stages.iter().any(|existing| existing.name().trim() == name) {
            warn!("event=stage_register module=render status=rejected stage={name}");
            return Err(PipelineError::DuplicateStage(name.to_string()));
        }

        debug!(
            "event=stage_register module=render status=ok stage={name} position={}",
            self.stages.len()
        );
        self.stages.push(stage);
        Ok(())
    }

    /// Removes the stage named `name`, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> bool {
        let name = name.trim();
        let before = self.stages.len();
        self.stages.retain(|stage| stage.name().trim() != name);
        let removed = self.stages.len() != before;
        if removed {
            debug!("event=stage_unregister module=render status=ok stage={name}");
        }
        removed
    }

    /// Runs `text` through every stage in registration order.
    pub fn run(&self, text: &str) -> String {
        self.stages
            .iter()
            .fold(text.to_string(), |current, stage| stage.apply(&current))
    }

    /// Returns stage names in registration order.
    pub fn stage_names(&self) -> Vec<String> {
        self.stages
            .iter()
            .map(|stage| stage.name().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{NormalizationStage, PipelineError, StageChain};
    use crate::checklist::ChecklistStage;

    struct Upper;

    impl NormalizationStage for Upper {
        fn name(&self) -> &str {
            "upper"
        }

        fn apply(&self, text: &str) -> String {
            text.to_uppercase()
        }
    }

    struct Unnamed;

    impl NormalizationStage for Unnamed {
        fn name(&self) -> &str {
            "  "
        }

        fn apply(&self, text: &str) -> String {
            text.to_string()
        }
    }

    #[test]
    fn stages_run_in_registration_order() {
        let mut chain = StageChain::new();
        chain.register(Box::new(ChecklistStage)).unwrap();
        chain.register(Box::new(Upper)).unwrap();

        assert_eq!(chain.stage_names(), vec!["checklist", "upper"]);
        assert_eq!(
            chain.run("- [ ] a"),
            "- <INPUT TYPE=\"CHECKBOX\" DATA-TASK=\"0\"> A"
        );
    }

    #[test]
    fn duplicate_and_empty_names_are_rejected() {
        let mut chain = StageChain::new();
        chain.register(Box::new(ChecklistStage)).unwrap();

        let err = chain.register(Box::new(ChecklistStage)).unwrap_err();
        assert_eq!(err, PipelineError::DuplicateStage("checklist".to_string()));
        assert_eq!(
            chain.register(Box::new(Unnamed)).unwrap_err(),
            PipelineError::EmptyStageName
        );
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn removed_stage_can_be_registered_again() {
        let mut chain = StageChain::new();
        chain.register(Box::new(ChecklistStage)).unwrap();
        chain.register(Box::new(Upper)).unwrap();

        assert!(chain.remove("checklist"));
        assert!(!chain.remove("checklist"));
        assert_eq!(chain.stage_names(), vec!["upper"]);

        chain.register(Box::new(ChecklistStage)).unwrap();
        assert_eq!(chain.stage_names(), vec!["upper", "checklist"]);
    }

    #[test]
    fn empty_chain_is_identity() {
        let chain = StageChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.run("text"), "text");
    }
}
