use serde::{Deserialize, Serialize};

// Defaults shared by all element types
pub(crate) const DEFAULT_LABEL: &str = "Untitled question";
pub(crate) const DEFAULT_OPTION_LABELS: [&str; 2] = ["Option 1", "Option 2"];

/// Ordered list of answer options shared by the choice-like element types.
///
/// Order is significant and persisted. Unlike store-level element moves,
/// options may be repositioned arbitrarily — reordering within one element's
/// properties is a property-local concern.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(Vec<String>);

impl Options {
    /// The placeholder options of a freshly constructed element.
    pub(crate) fn defaults() -> Self {
        Self(DEFAULT_OPTION_LABELS.iter().map(|s| s.to_string()).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append an option at the end of the list.
    pub fn add(&mut self, text: impl Into<String>) {
        self.0.push(text.into());
    }

    /// Remove the option at `index`. Returns the removed text, or `None` if
    /// the index is out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.0.len() {
            Some(self.0.remove(index))
        } else {
            None
        }
    }

    /// Replace the text of the option at `index`. Returns false if the index
    /// is out of bounds.
    pub fn rename(&mut self, index: usize, text: impl Into<String>) -> bool {
        match self.0.get_mut(index) {
            Some(slot) => {
                *slot = text.into();
                true
            }
            None => false,
        }
    }

    /// Move the option at `from` to position `to`, shifting the options in
    /// between. Returns false if either index is out of bounds.
    pub fn move_option(&mut self, from: usize, to: usize) -> bool {
        if from >= self.0.len() || to >= self.0.len() {
            return false;
        }
        let option = self.0.remove(from);
        self.0.insert(to, option);
        true
    }
}

impl From<Vec<String>> for Options {
    fn from(options: Vec<String>) -> Self {
        Self(options)
    }
}

impl<'a> IntoIterator for &'a Options {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
