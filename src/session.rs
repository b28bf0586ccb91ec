use std::time::Duration;

use crate::autosave::{AutosaveController, SaveFn, SaveStatus};
use crate::element::{ElementKind, SurveyElement};
use crate::id::ElementId;
use crate::snapshot::{Sponsor, SurveySnapshot};
use crate::store::{Direction, ElementStore};

/// One user's survey-building session.
///
/// Owns the element store and the autosave controller and wires them
/// together: UI mutation, store operation, change event, debounced save. The
/// session lives for as long as the builder is mounted; call
/// [`dispose`](Self::dispose) on unmount so no orphaned timer fires after
/// teardown.
///
/// The session holds the survey title and sponsor fields alongside the
/// element collection; [`snapshot`](Self::snapshot) captures all three as the
/// persistence payload. The injected save function closes over whatever the
/// host needs to write the survey row — typically a shared handle through
/// which it takes a fresh snapshot at invocation time.
pub struct BuilderSession {
    store: ElementStore,
    title: String,
    sponsor: Option<Sponsor>,
    autosave: AutosaveController,
}

impl BuilderSession {
    /// Start a session for a brand-new survey.
    pub fn new(title: impl Into<String>, save_fn: SaveFn) -> Self {
        Self::build(title.into(), Vec::new(), None, AutosaveController::new(save_fn))
    }

    /// Start a session from a persisted survey. Loading does not schedule a
    /// save.
    pub fn from_snapshot(snapshot: SurveySnapshot, save_fn: SaveFn) -> Self {
        Self::build(
            snapshot.title,
            snapshot.elements,
            snapshot.sponsor,
            AutosaveController::new(save_fn),
        )
    }

    /// Start a session with a custom autosave quiet interval.
    pub fn with_debounce(title: impl Into<String>, save_fn: SaveFn, debounce: Duration) -> Self {
        Self::build(
            title.into(),
            Vec::new(),
            None,
            AutosaveController::with_debounce(save_fn, debounce),
        )
    }

    fn build(
        title: String,
        elements: Vec<SurveyElement>,
        sponsor: Option<Sponsor>,
        autosave: AutosaveController,
    ) -> Self {
        let mut store = ElementStore::with_elements(elements);
        // Every effective content mutation reschedules the debounced save;
        // selection-only changes do not.
        let hook = autosave.clone();
        store.on_change(Box::new(move |event| {
            if event.is_content_change() {
                hook.trigger();
            }
        }));
        Self {
            store,
            title,
            sponsor,
            autosave,
        }
    }

    // Store operations, forwarded. Effective mutations schedule a save
    // through the event hook; no-ops do not.

    pub fn add_element(&mut self, index: usize, element: SurveyElement) {
        self.store.add_element(index, element);
    }

    pub fn remove_element(&mut self, id: ElementId) {
        self.store.remove_element(id);
    }

    pub fn update_element(&mut self, id: ElementId, new_element: SurveyElement) {
        self.store.update_element(id, new_element);
    }

    pub fn move_element(&mut self, id: ElementId, direction: Direction) {
        self.store.move_element(id, direction);
    }

    pub fn change_element_type(&mut self, id: ElementId, kind: ElementKind) -> Option<ElementId> {
        self.store.change_element_type(id, kind)
    }

    pub fn set_selected(&mut self, selected: Option<ElementId>) {
        self.store.set_selected(selected);
    }

    pub fn selected(&self) -> Option<ElementId> {
        self.store.selected()
    }

    pub fn elements(&self) -> &[SurveyElement] {
        self.store.elements()
    }

    pub fn find_element(&self, id: ElementId) -> Option<&SurveyElement> {
        self.store.find_element(id)
    }

    pub fn store(&self) -> &ElementStore {
        &self.store
    }

    // Survey-level fields.

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        if self.title == title {
            return;
        }
        self.title = title;
        self.autosave.trigger();
    }

    pub fn sponsor(&self) -> Option<&Sponsor> {
        self.sponsor.as_ref()
    }

    pub fn set_sponsor(&mut self, sponsor: Option<Sponsor>) {
        if self.sponsor == sponsor {
            return;
        }
        self.sponsor = sponsor;
        self.autosave.trigger();
    }

    /// Capture the current survey state as a persistence payload.
    pub fn snapshot(&self) -> SurveySnapshot {
        SurveySnapshot {
            title: self.title.clone(),
            elements: self.store.elements().to_vec(),
            sponsor: self.sponsor.clone(),
        }
    }

    pub fn autosave_status(&self) -> SaveStatus {
        self.autosave.status()
    }

    pub fn autosave(&self) -> &AutosaveController {
        &self.autosave
    }

    /// Tear down the session: cancels a pending un-fired save timer. An
    /// in-flight save still runs to completion; its result is discarded.
    pub fn dispose(&self) {
        self.autosave.dispose();
    }
}
