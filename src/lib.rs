#![warn(clippy::all, rust_2018_idioms)]

pub mod autosave;
pub mod element;
pub mod id;
pub mod session;
pub mod snapshot;
pub mod store;

pub use autosave::{AutosaveController, SaveError, SaveFn, SaveStatus};
pub use element::{Element, ElementKind, SurveyElement};
pub use id::ElementId;
pub use session::BuilderSession;
pub use snapshot::{Sponsor, SurveySnapshot};
pub use store::{BuilderEvent, ChangeListener, Direction, ElementStore};
