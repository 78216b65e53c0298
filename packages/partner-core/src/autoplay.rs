//! Single-task autoplay.
//!
//! The view owns one [`TaskSlot`]. Each time the carousel epoch moves it
//! spawns a fresh [`run_autoplay`] future and puts the handle in the slot,
//! which cancels the previous task. A task whose tick comes back
//! [`Tick::Stale`] stops on its own, so a missed cancellation cannot produce
//! a second advance.

use std::time::Duration;

use tracing::trace;

use crate::carousel::Tick;
use crate::timer;

/// A handle to a running task that can be stopped
pub trait Cancel {
    fn cancel(self);
}

#[cfg(not(target_arch = "wasm32"))]
impl<T> Cancel for tokio::task::JoinHandle<T> {
    fn cancel(self) {
        self.abort();
    }
}

/// Holds at most one running task
#[derive(Debug)]
pub struct TaskSlot<H: Cancel> {
    current: Option<H>,
}

impl<H: Cancel> Default for TaskSlot<H> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<H: Cancel> TaskSlot<H> {
    /// Install `handle`, cancelling whatever ran before
    pub fn replace(&mut self, handle: H) {
        if let Some(previous) = self.current.replace(handle) {
            previous.cancel();
        }
    }

    /// Cancel the running task, if any
    pub fn clear(&mut self) {
        if let Some(previous) = self.current.take() {
            previous.cancel();
        }
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }
}

impl<H: Cancel> Drop for TaskSlot<H> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Tick every `period` until the tick reports the epoch is stale.
///
/// Hovering does not stop the loop; it only makes individual ticks
/// [`Tick::Paused`].
pub async fn run_autoplay<F>(period: Duration, epoch: u64, mut tick: F)
where
    F: FnMut(u64) -> Tick,
{
    loop {
        timer::sleep(period).await;
        let outcome = tick(epoch);
        trace!(epoch, ?outcome, "Autoplay tick");
        if outcome == Tick::Stale {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Flagged(Arc<AtomicUsize>);

    impl Cancel for Flagged {
        fn cancel(self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_replace_cancels_previous() {
        let cancelled = Arc::new(AtomicUsize::new(0));
        let mut slot = TaskSlot::default();

        slot.replace(Flagged(cancelled.clone()));
        assert_eq!(cancelled.load(Ordering::SeqCst), 0);

        slot.replace(Flagged(cancelled.clone()));
        assert_eq!(cancelled.load(Ordering::SeqCst), 1);
        assert!(slot.is_active());

        drop(slot);
        assert_eq!(cancelled.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_autoplay_stops_on_stale() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = ticks.clone();

        run_autoplay(Duration::from_millis(5000), 0, move |_| {
            if counter.fetch_add(1, Ordering::SeqCst) == 2 {
                Tick::Stale
            } else {
                Tick::Paused
            }
        })
        .await;

        assert_eq!(ticks.load(Ordering::SeqCst), 3);
    }
}
