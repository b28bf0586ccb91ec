use serde::{Deserialize, Serialize};

use super::{Element, ElementKind, common, common::Options};
use crate::id::ElementId;

/// Question asking respondents to put the options in their preferred order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    id: ElementId,
    label: String,
    required: bool,
    options: Options,
}

impl Ranking {
    /// Create a ranking question with the default option pair.
    pub fn new(id: ElementId) -> Self {
        Self {
            id,
            label: common::DEFAULT_LABEL.to_string(),
            required: false,
            options: Options::defaults(),
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}

impl Element for Ranking {
    fn id(&self) -> ElementId {
        self.id
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Ranking
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
        if self.options.len() < 2 {
            return Err("Ranking question needs at least two options".to_string());
        }
        Ok(())
    }
}
