use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use interrobang_builder::autosave::{AutosaveController, SaveError, SaveFn, SaveStatus};
use tokio::time::sleep;

// Save function instrumented with a call counter; always succeeds instantly.
fn counting_save(calls: Arc<AtomicUsize>) -> SaveFn {
    Arc::new(move || {
        let calls = Arc::clone(&calls);
        Box::pin(async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    })
}

// All tests run on a paused clock: timers fire deterministically and
// `sleep` advances virtual time instead of wall time.

#[tokio::test(start_paused = true)]
async fn test_rapid_triggers_coalesce_into_one_save() {
    let calls = Arc::new(AtomicUsize::new(0));
    let controller = AutosaveController::new(counting_save(Arc::clone(&calls)));

    // Five triggers well within the quiet interval
    for _ in 0..5 {
        controller.trigger();
        sleep(Duration::from_millis(100)).await;
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0, "no save before the timer fires");

    sleep(Duration::from_millis(2500)).await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(controller.status(), SaveStatus::Saved);
}

#[tokio::test(start_paused = true)]
async fn test_status_is_idle_until_first_fire() {
    let calls = Arc::new(AtomicUsize::new(0));
    let controller = AutosaveController::new(counting_save(Arc::clone(&calls)));
    assert_eq!(controller.status(), SaveStatus::Idle);

    controller.trigger();
    sleep(Duration::from_millis(1000)).await;

    assert_eq!(controller.status(), SaveStatus::Idle);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn test_stale_result_is_discarded() {
    // First save is slow and fails; second is fast and succeeds. The second
    // settles first, and the first must not overwrite it when it finally
    // resolves.
    let calls = Arc::new(AtomicUsize::new(0));
    let save_fn: SaveFn = {
        let calls = Arc::clone(&calls);
        Arc::new(move || {
            let attempt = calls.fetch_add(1, Ordering::SeqCst);
            Box::pin(async move {
                if attempt == 0 {
                    sleep(Duration::from_millis(5000)).await;
                    Err(SaveError::new("slow save lost the race"))
                } else {
                    sleep(Duration::from_millis(50)).await;
                    Ok(())
                }
            })
        })
    };
    let controller = AutosaveController::new(save_fn);

    // t=0: schedule save A; it fires at t=2000 and stays in flight until t=7000
    controller.trigger();
    sleep(Duration::from_millis(2500)).await;
    assert_eq!(controller.status(), SaveStatus::Saving);

    // t=2500: a newer change supersedes A; save B fires at t=4500, done t=4550
    controller.trigger();
    sleep(Duration::from_millis(2200)).await;
    assert_eq!(controller.status(), SaveStatus::Saved);

    // t=7000+: A resolves with an error, but it is stale and suppressed
    sleep(Duration::from_millis(3000)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(controller.status(), SaveStatus::Saved);
    assert!(controller.last_error().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_failure_sets_error_and_next_trigger_recovers() {
    let calls = Arc::new(AtomicUsize::new(0));
    let save_fn: SaveFn = {
        let calls = Arc::clone(&calls);
        Arc::new(move || {
            let attempt = calls.fetch_add(1, Ordering::SeqCst);
            Box::pin(async move {
                sleep(Duration::from_millis(100)).await;
                if attempt == 0 {
                    Err(SaveError::new("database unavailable"))
                } else {
                    Ok(())
                }
            })
        })
    };
    let controller = AutosaveController::new(save_fn);

    controller.trigger();
    sleep(Duration::from_millis(2500)).await;
    assert_eq!(controller.status(), SaveStatus::Error);
    let error = controller.last_error().expect("settled failure is surfaced");
    assert!(error.to_string().contains("database unavailable"));

    // Recovery path: a subsequent trigger goes saving -> saved
    controller.trigger();
    sleep(Duration::from_millis(2050)).await;
    assert_eq!(controller.status(), SaveStatus::Saving);
    sleep(Duration::from_millis(200)).await;
    assert_eq!(controller.status(), SaveStatus::Saved);
    assert!(controller.last_error().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_dispose_cancels_pending_timer() {
    let calls = Arc::new(AtomicUsize::new(0));
    let controller = AutosaveController::new(counting_save(Arc::clone(&calls)));

    controller.trigger();
    sleep(Duration::from_millis(500)).await;
    controller.dispose();

    sleep(Duration::from_millis(5000)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 0, "save must never be called");
    assert_eq!(controller.status(), SaveStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_status_watch_observes_transitions() {
    let calls = Arc::new(AtomicUsize::new(0));
    let save_fn: SaveFn = {
        let calls = Arc::clone(&calls);
        Arc::new(move || {
            calls.fetch_add(1, Ordering::SeqCst);
            Box::pin(async move {
                sleep(Duration::from_millis(100)).await;
                Ok(())
            })
        })
    };
    let controller = AutosaveController::new(save_fn);
    let mut watcher = controller.watch_status();
    assert_eq!(*watcher.borrow(), SaveStatus::Idle);

    controller.trigger();

    watcher.changed().await.unwrap();
    assert_eq!(*watcher.borrow(), SaveStatus::Saving);
    watcher.changed().await.unwrap();
    assert_eq!(*watcher.borrow(), SaveStatus::Saved);
}

#[tokio::test(start_paused = true)]
async fn test_triggers_from_cloned_handles_still_settle() {
    // Cloned handles share state; triggers arriving through different clones
    // (and tasks) must leave the newest generation owning the surviving
    // timer, so the eventual save settles the status instead of being
    // discarded as stale.
    let calls = Arc::new(AtomicUsize::new(0));
    let controller = AutosaveController::new(counting_save(Arc::clone(&calls)));

    let first = {
        let handle = controller.clone();
        tokio::spawn(async move { handle.trigger() })
    };
    let second = {
        let handle = controller.clone();
        tokio::spawn(async move { handle.trigger() })
    };
    first.await.unwrap();
    second.await.unwrap();

    sleep(Duration::from_millis(2500)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(controller.status(), SaveStatus::Saved);
}

#[tokio::test(start_paused = true)]
async fn test_custom_debounce_interval() {
    let calls = Arc::new(AtomicUsize::new(0));
    let controller = AutosaveController::with_debounce(
        counting_save(Arc::clone(&calls)),
        Duration::from_millis(200),
    );

    controller.trigger();
    sleep(Duration::from_millis(300)).await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(controller.status(), SaveStatus::Saved);
}
