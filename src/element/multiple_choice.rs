use serde::{Deserialize, Serialize};

use super::{Element, ElementKind, common, common::Options};
use crate::id::ElementId;

/// Single-answer question rendered as a radio group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MultipleChoice {
    id: ElementId,
    label: String,
    required: bool,
    options: Options,
    allow_other: bool,
}

impl MultipleChoice {
    /// Create a multiple-choice question with the default option pair.
    pub fn new(id: ElementId) -> Self {
        Self {
            id,
            label: common::DEFAULT_LABEL.to_string(),
            required: false,
            options: Options::defaults(),
            allow_other: false,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Whether respondents get a free-text "Other" choice.
    pub fn allow_other(&self) -> bool {
        self.allow_other
    }

    pub fn set_allow_other(&mut self, allow_other: bool) {
        self.allow_other = allow_other;
    }
}

impl Element for MultipleChoice {
    fn id(&self) -> ElementId {
        self.id
    }

    fn kind(&self) -> ElementKind {
        ElementKind::MultipleChoice
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn set_label(&mut self, label: String) {
        self.label = label;
    }

    fn required(&self) -> bool {
        self.required
    }

    fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    fn validate(&self) -> Result<(), String> {
        if self.label.trim().is_empty() {
            return Err("Question label is empty".to_string());
        }
        if self.options.is_empty() {
            return Err("Multiple choice question needs at least one option".to_string());
        }
        Ok(())
    }
}
