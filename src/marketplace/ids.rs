use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Hands out record ids derived from the creation time in milliseconds.
///
/// Ids from one generator strictly increase, even when several records are
/// created within the same millisecond or the clock steps backwards.
#[derive(Debug, Default)]
pub struct IdGenerator {
    // ---
    last: AtomicI64,
}

impl IdGenerator {
    // ---
    pub fn new() -> Self {
        // ---
        Self::default()
    }

    pub fn next_id(&self) -> String {
        // ---
        self.next_at(Utc::now().timestamp_millis()).to_string()
    }

    fn next_at(&self, now_millis: i64) -> i64 {
        // ---
        let mut current = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now_millis.max(current + 1);
            match self.last.compare_exchange_weak(
                current,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(observed) => current = observed,
            }
        }
    }
}
