use serde::{Deserialize, Serialize};

use crate::id::ElementId;

// Re-export concrete implementations
mod check_box;
mod common;
mod multiple_choice;
mod ranking;
mod text_area;

pub use check_box::CheckBox;
pub use common::Options;
pub use multiple_choice::MultipleChoice;
pub use ranking::Ranking;
pub use text_area::TextArea;

/// Common trait that all survey elements implement
pub trait Element {
    /// Get the unique identifier for this element
    fn id(&self) -> ElementId;

    /// Get the element kind tag
    fn kind(&self) -> ElementKind;

    /// Get the question label shown to respondents
    fn label(&self) -> &str;

    /// Replace the question label
    fn set_label(&mut self, label: String);

    /// Whether respondents must answer this question
    fn required(&self) -> bool;

    /// Set the required flag
    fn set_required(&mut self, required: bool);

    /// Check that the element's properties are publishable
    fn validate(&self) -> Result<(), String>;
}

/// Closed set of element kinds, keyed by a canonical string tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    TextArea,
    MultipleChoice,
    CheckBox,
    Ranking,
}

impl ElementKind {
    pub const ALL: [ElementKind; 4] = [
        ElementKind::TextArea,
        ElementKind::MultipleChoice,
        ElementKind::CheckBox,
        ElementKind::Ranking,
    ];

    /// The canonical tag used in the persisted format.
    pub fn tag(&self) -> &'static str {
        match self {
            ElementKind::TextArea => "TextArea",
            ElementKind::MultipleChoice => "MultipleChoice",
            ElementKind::CheckBox => "CheckBox",
            ElementKind::Ranking => "Ranking",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.tag() == tag)
    }

    /// Template factory: construct a fresh instance of this kind with default
    /// properties and the given identity.
    pub fn construct(&self, id: ElementId) -> SurveyElement {
        match self {
            ElementKind::TextArea => SurveyElement::TextArea(TextArea::new(id)),
            ElementKind::MultipleChoice => {
                SurveyElement::MultipleChoice(MultipleChoice::new(id))
            }
            ElementKind::CheckBox => SurveyElement::CheckBox(CheckBox::new(id)),
            ElementKind::Ranking => SurveyElement::Ranking(Ranking::new(id)),
        }
    }
}

/// Enumeration of all element types in a survey
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SurveyElement {
    TextArea(TextArea),
    MultipleChoice(MultipleChoice),
    CheckBox(CheckBox),
    Ranking(Ranking),
}

// Methods for SurveyElement that aren't part of the Element trait
impl SurveyElement {
    /// Get the element's option list, if its kind has one.
    pub fn options(&self) -> Option<&Options> {
        match self {
            SurveyElement::TextArea(_) => None,
            SurveyElement::MultipleChoice(m) => Some(m.options()),
            SurveyElement::CheckBox(c) => Some(c.options()),
            SurveyElement::Ranking(r) => Some(r.options()),
        }
    }

    /// Mutable access to the element's option list, if its kind has one.
    pub fn options_mut(&mut self) -> Option<&mut Options> {
        match self {
            SurveyElement::TextArea(_) => None,
            SurveyElement::MultipleChoice(m) => Some(m.options_mut()),
            SurveyElement::CheckBox(c) => Some(c.options_mut()),
            SurveyElement::Ranking(r) => Some(r.options_mut()),
        }
    }
}

impl Element for SurveyElement {
    fn id(&self) -> ElementId {
        match self {
            SurveyElement::TextArea(t) => t.id(),
            SurveyElement::MultipleChoice(m) => m.id(),
            SurveyElement::CheckBox(c) => c.id(),
            SurveyElement::Ranking(r) => r.id(),
        }
    }

    fn kind(&self) -> ElementKind {
        match self {
            SurveyElement::TextArea(t) => t.kind(),
            SurveyElement::MultipleChoice(m) => m.kind(),
            SurveyElement::CheckBox(c) => c.kind(),
            SurveyElement::Ranking(r) => r.kind(),
        }
    }

    fn label(&self) -> &str {
        match self {
            SurveyElement::TextArea(t) => t.label(),
            SurveyElement::MultipleChoice(m) => m.label(),
            SurveyElement::CheckBox(c) => c.label(),
            SurveyElement::Ranking(r) => r.label(),
        }
    }

    fn set_label(&mut self, label: String) {
        match self {
            SurveyElement::TextArea(t) => t.set_label(label),
            SurveyElement::MultipleChoice(m) => m.set_label(label),
            SurveyElement::CheckBox(c) => c.set_label(label),
            SurveyElement::Ranking(r) => r.set_label(label),
        }
    }

    fn required(&self) -> bool {
        match self {
            SurveyElement::TextArea(t) => t.required(),
            SurveyElement::MultipleChoice(m) => m.required(),
            SurveyElement::CheckBox(c) => c.required(),
            SurveyElement::Ranking(r) => r.required(),
        }
    }

    fn set_required(&mut self, required: bool) {
        match self {
            SurveyElement::TextArea(t) => t.set_required(required),
            SurveyElement::MultipleChoice(m) => m.set_required(required),
            SurveyElement::CheckBox(c) => c.set_required(required),
            SurveyElement::Ranking(r) => r.set_required(required),
        }
    }

    fn validate(&self) -> Result<(), String> {
        match self {
            SurveyElement::TextArea(t) => t.validate(),
            SurveyElement::MultipleChoice(m) => m.validate(),
            SurveyElement::CheckBox(c) => c.validate(),
            SurveyElement::Ranking(r) => r.validate(),
        }
    }
}

/// Factory functions for creating elements
pub mod factory {
    use super::*;

    /// Create a new text-area question
    pub fn create_text_area(id: ElementId, label: &str) -> SurveyElement {
        let mut element = TextArea::new(id);
        element.set_label(label.to_string());
        SurveyElement::TextArea(element)
    }

    /// Create a new multiple-choice question
    pub fn create_multiple_choice(
        id: ElementId,
        label: &str,
        options: Vec<String>,
    ) -> SurveyElement {
        let mut element = MultipleChoice::new(id);
        element.set_label(label.to_string());
        *element.options_mut() = Options::from(options);
        SurveyElement::MultipleChoice(element)
    }

    /// Create a new check-box question
    pub fn create_check_box(id: ElementId, label: &str, options: Vec<String>) -> SurveyElement {
        let mut element = CheckBox::new(id);
        element.set_label(label.to_string());
        *element.options_mut() = Options::from(options);
        SurveyElement::CheckBox(element)
    }

    /// Create a new ranking question
    pub fn create_ranking(id: ElementId, label: &str, options: Vec<String>) -> SurveyElement {
        let mut element = Ranking::new(id);
        element.set_label(label.to_string());
        *element.options_mut() = Options::from(options);
        SurveyElement::Ranking(element)
    }
}
