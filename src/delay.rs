//! Cancellable delay used to debounce programmatic focus/blur sequences.
//!
//! The contract is deliberately one-sided: an aborted delay never resolves
//! (it parks forever rather than erroring), so callers never observe a
//! half-finished debounce.

use std::future::pending;
use std::time::Duration;
use tokio::sync::watch;

/// Owner side of an abort signal. Cloning shares the same signal.
#[derive(Debug, Clone)]
pub struct AbortController {
    tx: watch::Sender<bool>,
}

/// Listener side handed to [`sleep`].
#[derive(Debug, Clone)]
pub struct AbortSignal {
    rx: watch::Receiver<bool>,
}

impl AbortController {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx }
    }

    pub fn signal(&self) -> AbortSignal {
        AbortSignal {
            rx: self.tx.subscribe(),
        }
    }

    /// Fires the abort. Idempotent; delays already resolved are unaffected.
    pub fn abort(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_aborted(&self) -> bool {
        *self.tx.borrow()
    }
}

impl Default for AbortController {
    fn default() -> Self {
        Self::new()
    }
}

impl AbortSignal {
    /// Resolves once the controller aborts; never resolves otherwise, even
    /// if the controller is dropped without firing.
    pub async fn aborted(&mut self) {
        loop {
            if *self.rx.borrow_and_update() {
                return;
            }
            if self.rx.changed().await.is_err() {
                // controller gone without aborting; nothing left to wait for
                pending::<()>().await;
            }
        }
    }
}

/// Resolves after at least `duration` has elapsed, unless `signal` aborts
/// first, in which case the returned future never resolves (it does not
/// error or panic).
pub async fn sleep(duration: Duration, mut signal: AbortSignal) {
    tokio::select! {
        () = tokio::time::sleep(duration) => {}
        () = signal.aborted() => pending::<()>().await,
    }
}
