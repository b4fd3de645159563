use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

use pokecache_core::catalog::EntityId;

/// Issues ids for locally created entities.
///
/// Ids are the current time in milliseconds, bumped past the last issued id
/// so two creations in the same millisecond still get distinct ids.
#[derive(Debug, Default)]
pub(crate) struct IdGenerator {
    last: AtomicU64,
}

impl IdGenerator {
    pub(crate) fn next(&self) -> EntityId {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last + 1);
            match self.last.compare_exchange_weak(
                last,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(actual) => last = actual,
            }
        }
    }
}
