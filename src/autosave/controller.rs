use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use futures::future::BoxFuture;
use log::{debug, warn};
use parking_lot::Mutex;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Quiet interval between the last edit and the save that persists it.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(2000);

/// Failure of the injected save function.
///
/// Deliberately a single class with no sub-taxonomy: the controller only
/// distinguishes "saved" from "not saved", and the message exists for the
/// host to log or toast.
#[derive(Debug, Clone, Error)]
#[error("save failed: {0}")]
pub struct SaveError(String);

impl SaveError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Outcome of the most recently relevant save attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveStatus {
    Idle,
    Saving,
    Saved,
    Error,
}

/// Future returned by the injected save function.
pub type SaveFuture = BoxFuture<'static, Result<(), SaveError>>;

/// The injected persistence call. Takes no arguments — the caller closes over
/// whatever survey state needs saving; the controller has no knowledge of
/// survey content.
pub type SaveFn = Arc<dyn Fn() -> SaveFuture + Send + Sync>;

/// Debounced, generation-guarded autosave pipeline.
///
/// [`trigger`](Self::trigger) coalesces rapid mutations into a single save:
/// each call bumps a generation counter and (re)starts the quiet-interval
/// timer, so only the last trigger in a burst actually fires. When the timer
/// fires the controller sets the status to `Saving` and awaits the injected
/// save function; the result only settles the status (`Saved` or `Error`) if
/// no newer trigger arrived while the call was in flight. Stale results are
/// discarded entirely — neither reported as success nor failure — so the UI
/// never shows "saved" for content that has since changed again.
///
/// Cloning is cheap and shares the underlying state, which is how observers
/// (the session's event hook) hold on to it. Must be created inside a tokio
/// runtime; the handle is captured at construction.
#[derive(Clone)]
pub struct AutosaveController {
    inner: Arc<Inner>,
}

struct Inner {
    save_fn: SaveFn,
    debounce: Duration,
    runtime: Handle,
    /// Bumped on every trigger, not on every timer fire. A save settles its
    /// status only if this still matches the value captured at schedule time.
    generation: AtomicU64,
    status: watch::Sender<SaveStatus>,
    last_error: Mutex<Option<SaveError>>,
    /// The pending, not-yet-fired debounce timer. Never an in-flight save.
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl AutosaveController {
    /// Create a controller with the default quiet interval.
    pub fn new(save_fn: SaveFn) -> Self {
        Self::with_debounce(save_fn, DEFAULT_DEBOUNCE)
    }

    pub fn with_debounce(save_fn: SaveFn, debounce: Duration) -> Self {
        let (status, _) = watch::channel(SaveStatus::Idle);
        Self {
            inner: Arc::new(Inner {
                save_fn,
                debounce,
                runtime: Handle::current(),
                generation: AtomicU64::new(0),
                status,
                last_error: Mutex::new(None),
                pending: Mutex::new(None),
            }),
        }
    }

    /// Record that something changed and (re)schedule a debounced save.
    ///
    /// Synchronously bumps the generation counter, cancels any pending
    /// un-fired timer, and starts a new one. An already in-flight save is
    /// never cancelled; its result is discarded by the generation guard.
    pub fn trigger(&self) {
        let mut pending = self.inner.pending.lock();
        // Bump the generation while holding the lock so that when triggers
        // race through cloned handles, the surviving timer always carries
        // the newest generation and can still settle the status.
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(timer) = pending.take() {
            timer.abort();
        }
        let inner = Arc::clone(&self.inner);
        *pending = Some(self.inner.runtime.spawn(async move {
            tokio::time::sleep(inner.debounce).await;
            // Run the save detached from the timer task: aborting the pending
            // handle must only ever cancel the un-fired timer, never a save
            // that has already started.
            let save = Arc::clone(&inner);
            inner.runtime.spawn(Inner::run_save(save, generation));
        }));
    }

    /// The current status.
    pub fn status(&self) -> SaveStatus {
        *self.inner.status.borrow()
    }

    /// Subscribe to status changes.
    pub fn watch_status(&self) -> watch::Receiver<SaveStatus> {
        self.inner.status.subscribe()
    }

    /// The most recent settled failure, cleared by the next settled success.
    pub fn last_error(&self) -> Option<SaveError> {
        self.inner.last_error.lock().clone()
    }

    /// Cancel the pending un-fired timer, if any.
    ///
    /// Called on unmount. Does not cancel an in-flight save — that save runs
    /// to completion and its result is discarded by the generation guard.
    pub fn dispose(&self) {
        if let Some(timer) = self.inner.pending.lock().take() {
            timer.abort();
        }
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Some(timer) = self.pending.lock().take() {
            timer.abort();
        }
    }
}

impl Inner {
    async fn run_save(inner: Arc<Inner>, generation: u64) {
        inner.status.send_replace(SaveStatus::Saving);
        let result = (inner.save_fn)().await;

        let current = inner.generation.load(Ordering::SeqCst);
        if current != generation {
            // A newer save is or will be in flight; this stale result must
            // not overwrite a more current status.
            debug!("discarding stale autosave result (generation {generation}, current {current})");
            return;
        }

        match result {
            Ok(()) => {
                inner.last_error.lock().take();
                inner.status.send_replace(SaveStatus::Saved);
            }
            Err(error) => {
                warn!("autosave failed: {error}");
                *inner.last_error.lock() = Some(error);
                inner.status.send_replace(SaveStatus::Error);
            }
        }
    }
}
