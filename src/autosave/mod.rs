mod controller;

pub use controller::{
    AutosaveController, DEFAULT_DEBOUNCE, SaveError, SaveFn, SaveFuture, SaveStatus,
};
