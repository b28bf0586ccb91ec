use serde::{Deserialize, Serialize};

use super::{Element, ElementKind, common, common::Options};
use crate::id::ElementId;

/// Multi-answer question rendered as a group of check boxes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckBox {
    id: ElementId,
    label: String,
    required: bool,
    options: Options,
    min_selections: usize,
    /// Upper bound on the number of answers; `None` means unbounded.
    max_selections: Option<usize>,
}

impl CheckBox {
    /// Create a check-box question with the default option pair.
    pub fn new(id: ElementId) -> Self {
        Self {
            id,
            label: common::DEFAULT_LABEL.to_string(),
            required: false,
            options: Options::defaults(),
            min_selections: 0,
            max_selections: None,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    pub fn min_selections(&self) -> usize {
        self.min_selections
    }

    pub fn set_min_selections(&mut self, min: usize) {
        self.min_selections = min;
    }

    pub fn max_selections(&self) -> Option<usize> {
        self.max_selections
    }

    pub fn set_max_selections(&mut self, max: Option<usize>) {
        self.max_selections = max;
    }
}

impl Element for CheckBox {
    fn id(&self) -> ElementId {
        self.id
    }

    fn kind(&self) -> ElementKind {
        ElementKind::CheckBox
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
            return Err("Check box question needs at least one option".to_string());
        }
        if self.min_selections > self.options.len() {
            return Err(format!(
                "Minimum selections ({}) exceeds option count ({})",
                self.min_selections,
                self.options.len()
            ));
        }
        if let Some(max) = self.max_selections {
            if max < self.min_selections {
                return Err(format!(
                    "Maximum selections ({}) is below the minimum ({})",
                    max, self.min_selections
                ));
            }
            if max > self.options.len() {
                return Err(format!(
                    "Maximum selections ({}) exceeds option count ({})",
                    max,
                    self.options.len()
                ));
            }
        }
        Ok(())
    }
}
