//! Debounced reading-progress reporting
//!
//! Scroll tracking fires continuously while the user reads; pings are
//! coalesced with a trailing-edge debounce over a fixed quiet window so the
//! request rate stays bounded. Last write wins, there is no retry, and the
//! underlying ping swallows its own failures.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::api::ApiClient;

/// Debounced reporter for one chapter.
#[derive(Clone)]
pub struct ProgressReporter {
    inner: Arc<Inner>,
}

struct Inner {
    client: ApiClient,
    chapter_id: String,
    window: Duration,
    latest: Mutex<u8>,
    generation: AtomicU64,
}

impl ProgressReporter {
    pub fn new(client: ApiClient, chapter_id: impl Into<String>, window: Duration) -> Self {
        ProgressReporter {
            inner: Arc::new(Inner {
                client,
                chapter_id: chapter_id.into(),
                window,
                latest: Mutex::new(0),
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Record the current progress percentage.
    ///
    /// The ping is sent once the window elapses with no newer recording;
    /// every newer call invalidates the pending timer.
    pub fn record(&self, percent: u8) {
        let inner = Arc::clone(&self.inner);
        *inner.latest.lock().unwrap() = percent.min(100);
        let current = inner.generation.fetch_add(1, Ordering::SeqCst) + 1;

        tokio::spawn(async move {
            tokio::time::sleep(inner.window).await;
            if inner.generation.load(Ordering::SeqCst) != current {
                return;
            }
            let percent = *inner.latest.lock().unwrap();
            inner.client.update_progress(&inner.chapter_id, percent).await;
        });
    }

    /// Most recently recorded value, whether or not it has been sent yet.
    pub fn latest(&self) -> u8 {
        *self.inner.latest.lock().unwrap()
    }
}
