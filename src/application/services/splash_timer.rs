//! One-shot splash timeout.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::application::navigation::NavAction;

/// Single-fire timer that sends [`NavAction::SplashElapsed`] once after a
/// fixed delay. Aborted on [`cancel`](Self::cancel) or drop.
#[derive(Debug)]
pub struct SplashTimer {
    handle: JoinHandle<()>,
}

impl SplashTimer {
    /// Spawns the timer task on the current runtime.
    #[must_use]
    pub fn start(delay: Duration, sender: mpsc::UnboundedSender<NavAction>) -> Self {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if sender.send(NavAction::SplashElapsed).is_err() {
                debug!("Splash delay elapsed after navigation closed");
            }
        });

        Self { handle }
    }

    /// Cancels the timer if it has not fired yet.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Returns whether the timer task has completed or been cancelled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for SplashTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
