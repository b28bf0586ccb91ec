use serde::{Deserialize, Serialize};

use super::{Element, ElementKind, common};
use crate::id::ElementId;

/// Free-form text question rendered as a multi-line input box.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextArea {
    id: ElementId,
    label: String,
    required: bool,
    placeholder: String,
    rows: u8,
}

impl TextArea {
    pub(crate) const DEFAULT_ROWS: u8 = 3;

    /// Create a text-area question with default properties.
    pub fn new(id: ElementId) -> Self {
        Self {
            id,
            label: common::DEFAULT_LABEL.to_string(),
            required: false,
            placeholder: String::new(),
            rows: Self::DEFAULT_ROWS,
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Set the visible height of the input box, in text rows. Clamped to at
    /// least one row.
    pub fn set_rows(&mut self, rows: u8) {
        self.rows = rows.max(1);
    }
}

impl Element for TextArea {
    fn id(&self) -> ElementId {
        self.id
    }

    fn kind(&self) -> ElementKind {
        ElementKind::TextArea
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
        Ok(())
    }
}
