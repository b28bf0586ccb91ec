use log::{debug, warn};

use crate::element::{Element, ElementKind, SurveyElement};
use crate::id::ElementId;

/// Direction of an adjacent-swap move in the element list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// What just changed in the store. Passed to registered change listeners
/// after each effective mutation; silent no-ops (unknown ids, boundary
/// moves, duplicate-id inserts) notify nobody.
#[derive(Debug, Clone)]
pub enum BuilderEvent {
    ElementAdded {
        id: ElementId,
        index: usize,
    },
    ElementRemoved {
        id: ElementId,
    },
    ElementUpdated {
        id: ElementId,
    },
    ElementMoved {
        id: ElementId,
        from: usize,
        to: usize,
    },
    /// An element was replaced in place by a fresh instance of another kind.
    ElementRetyped {
        old_id: ElementId,
        new_id: ElementId,
    },
    SelectionChanged {
        selected: Option<ElementId>,
    },
}

impl BuilderEvent {
    /// Whether this event represents a change to persisted survey content.
    ///
    /// Selection is ephemeral UI state and must not schedule a save.
    pub fn is_content_change(&self) -> bool {
        !matches!(self, BuilderEvent::SelectionChanged { .. })
    }
}

/// Callback run after each mutation the store actually applied.
///
/// Listeners must not call back into the store; they get the event and the
/// store keeps exclusive ownership of its collection.
pub type ChangeListener = Box<dyn FnMut(&BuilderEvent) + Send>;

/// Ordered collection of survey elements plus selection state.
///
/// Owned exclusively by one builder session; all operations are synchronous.
/// Operations with an unknown id are silent no-ops — callers that need to
/// know whether an operation had an effect check membership themselves, or
/// watch the [`revision`](ElementStore::revision) counter.
///
/// Invariants: element ids are unique within the collection, insertion order
/// is display order, and at most one element is selected at a time. Selection
/// references an element by identity, never by index, so it survives
/// reordering and is cleared when the referenced element goes away.
pub struct ElementStore {
    elements: Vec<SurveyElement>,
    selected: Option<ElementId>,
    revision: u64,
    listeners: Vec<ChangeListener>,
}

impl Default for ElementStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            selected: None,
            revision: 0,
            listeners: Vec::new(),
        }
    }

    /// Create a store pre-populated from a persisted survey.
    ///
    /// Elements with an id already present are dropped (persisted surveys are
    /// assumed well-formed; this only restores the uniqueness invariant).
    /// Loading does not bump the revision or emit events.
    pub fn with_elements(elements: Vec<SurveyElement>) -> Self {
        let mut store = Self::new();
        for element in elements {
            if store.find_element(element.id()).is_some() {
                warn!("dropping element with duplicate id {} on load", element.id());
                continue;
            }
            store.elements.push(element);
        }
        store
    }

    /// Register a listener to be told about every effective mutation.
    pub fn on_change(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }

    /// The ordered element collection.
    pub fn elements(&self) -> &[SurveyElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Find an element by id.
    pub fn find_element(&self, id: ElementId) -> Option<&SurveyElement> {
        self.elements.iter().find(|element| element.id() == id)
    }

    /// Monotonically increasing counter bumped on every effective content
    /// mutation. Selection changes do not count.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The currently selected element id, if any.
    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    /// Insert `element` at `index`, clamped to `[0, len]`.
    ///
    /// Silent no-op if an element with the same id already exists — ids are
    /// generated as random tokens and collisions are treated as negligible,
    /// so this is an assumption, not a defended-against condition.
    pub fn add_element(&mut self, index: usize, element: SurveyElement) {
        let id = element.id();
        if self.find_element(id).is_some() {
            debug!("ignoring add of duplicate element id {id}");
            return;
        }
        let index = index.min(self.elements.len());
        self.elements.insert(index, element);
        self.mark_modified();
        self.notify(BuilderEvent::ElementAdded { id, index });
    }

    /// Remove the element with matching id. No-op if not found.
    ///
    /// If the removed element was selected, the selection is cleared.
    pub fn remove_element(&mut self, id: ElementId) {
        let Some(index) = self.position(id) else {
            debug!("ignoring remove of unknown element id {id}");
            return;
        };
        self.elements.remove(index);
        self.mark_modified();
        self.notify(BuilderEvent::ElementRemoved { id });
        if self.selected == Some(id) {
            self.selected = None;
            self.notify(BuilderEvent::SelectionChanged { selected: None });
        }
    }

    /// Replace the element with matching id by full value replacement.
    ///
    /// No-op if the id is not found. Changing identity through this call is
    /// not allowed; a `new_element` whose id differs from `id` is ignored.
    pub fn update_element(&mut self, id: ElementId, new_element: SurveyElement) {
        if new_element.id() != id {
            warn!(
                "ignoring update that would change element identity ({} -> {})",
                id,
                new_element.id()
            );
            return;
        }
        let Some(index) = self.position(id) else {
            debug!("ignoring update of unknown element id {id}");
            return;
        };
        self.elements[index] = new_element;
        self.mark_modified();
        self.notify(BuilderEvent::ElementUpdated { id });
    }

    /// Swap the element with its adjacent neighbor in `direction`.
    ///
    /// No-op at the boundary (first element up, last element down) and for
    /// unknown ids.
    pub fn move_element(&mut self, id: ElementId, direction: Direction) {
        let Some(from) = self.position(id) else {
            debug!("ignoring move of unknown element id {id}");
            return;
        };
        let to = match direction {
            Direction::Up if from > 0 => from - 1,
            Direction::Down if from + 1 < self.elements.len() => from + 1,
            _ => return,
        };
        self.elements.swap(from, to);
        self.mark_modified();
        self.notify(BuilderEvent::ElementMoved { id, from, to });
    }

    /// Replace the element at `id`'s position with a freshly constructed
    /// instance of `kind` (same position, new identity from the template).
    ///
    /// Returns the new element's id so the caller can immediately select it.
    /// No-op returning `None` if the id is unknown or the element already has
    /// that kind. If the retyped element was selected, the selection is
    /// cleared; re-selecting the new element is the caller's choice.
    pub fn change_element_type(&mut self, id: ElementId, kind: ElementKind) -> Option<ElementId> {
        let index = self.position(id)?;
        if self.elements[index].kind() == kind {
            debug!("ignoring retype of element {id} to its current kind");
            return None;
        }
        let replacement = kind.construct(ElementId::random());
        let new_id = replacement.id();
        self.elements[index] = replacement;
        self.mark_modified();
        self.notify(BuilderEvent::ElementRetyped {
            old_id: id,
            new_id,
        });
        if self.selected == Some(id) {
            self.selected = None;
            self.notify(BuilderEvent::SelectionChanged { selected: None });
        }
        Some(new_id)
    }

    /// Set or clear the selection.
    ///
    /// Selecting an id that is not in the collection is ignored, keeping the
    /// invariant that the selection always references a live element.
    pub fn set_selected(&mut self, selected: Option<ElementId>) {
        if let Some(id) = selected {
            if self.find_element(id).is_none() {
                debug!("ignoring selection of unknown element id {id}");
                return;
            }
        }
        if self.selected == selected {
            return;
        }
        self.selected = selected;
        self.notify(BuilderEvent::SelectionChanged { selected });
    }

    fn position(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|element| element.id() == id)
    }

    fn mark_modified(&mut self) {
        self.revision += 1;
    }

    fn notify(&mut self, event: BuilderEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}
