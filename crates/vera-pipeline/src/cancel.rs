//! User-initiated abort for an in-flight analysis.

use tokio::sync::watch;

/// Trigger side. Dropping it without calling [`Self::cancel`] never cancels.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

/// Observer side, awaited by the analyzer at every suspension point.
#[derive(Debug, Clone)]
pub struct CancelSignal {
    rx: watch::Receiver<bool>,
}

/// Create a connected handle/signal pair.
#[must_use]
pub fn cancel_pair() -> (CancelHandle, CancelSignal) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelSignal { rx })
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

impl CancelSignal {
    /// A signal that never fires.
    #[must_use]
    pub fn never() -> Self {
        cancel_pair().1
    }

    /// Resolve once cancelled. Pends forever if the handle is dropped first.
    pub async fn cancelled(&mut self) {
        let fired = self.rx.wait_for(|cancelled| *cancelled).await.is_ok();
        if !fired {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn cancel_wakes_waiter() {
        let (handle, mut signal) = cancel_pair();
        handle.cancel();
        signal.cancelled().await;
    }

    #[tokio::test(start_paused = true)]
    async fn never_signal_does_not_fire() {
        let mut signal = CancelSignal::never();
        let fired = tokio::time::timeout(Duration::from_secs(3600), signal.cancelled()).await;
        assert!(fired.is_err());
    }

    #[tokio::test]
    async fn clones_share_the_trigger() {
        let (handle, mut signal) = cancel_pair();
        let mut clone = signal.clone();
        handle.cancel();
        clone.cancelled().await;
        signal.cancelled().await;
    }
}
