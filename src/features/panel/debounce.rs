use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::Mutex;

pub const EDIT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Trailing-edge debouncer: coalesces rapid events into a single commit once
/// a quiet period has passed. Generations are kept per key, so one panel's
/// burst never supersedes another's; within a key, a newer submission
/// supersedes every older one still waiting and only the last write commits.
#[derive(Clone)]
pub struct Debouncer {
    delay: Duration,
    generations: Arc<Mutex<HashMap<String, Arc<AtomicU64>>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Debouncer {
        Debouncer {
            delay,
            generations: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Waits out the quiet period for `key`. Returns `true` when this
    /// submission is still the key's latest afterwards and should commit,
    /// `false` when a newer submission under the same key superseded it.
    pub async fn settle(&self, key: &str) -> bool {
        let counter = {
            let mut generations = self.generations.lock().await;
            generations.entry(key.to_string()).or_default().clone()
        };
        let generation = counter.fetch_add(1, Ordering::SeqCst) + 1;

        tokio::time::sleep(self.delay).await;

        if counter.load(Ordering::SeqCst) != generation {
            return false;
        }

        // The burst is over; drop the key so idle sessions don't accumulate.
        // A waiter raced in between the check and the removal still holds its
        // own counter clone, so it settles correctly either way.
        self.generations.lock().await.remove(key);
        true
    }
}
