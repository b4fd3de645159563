//! Per-id in-flight locks used to collapse concurrent cache misses.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use pokecache_core::catalog::EntityId;

#[derive(Debug, Default)]
struct Slot {
    lock: Arc<AsyncMutex<()>>,
    /// Callers holding or waiting on `lock`.
    users: usize,
}

/// Registry of per-id locks. Entries exist only while someone holds or
/// waits on the lock.
#[derive(Debug, Default)]
pub(crate) struct InFlight {
    slots: Mutex<HashMap<EntityId, Slot>>,
}

impl InFlight {
    fn slots(&self) -> MutexGuard<'_, HashMap<EntityId, Slot>> {
        self.slots.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Waits until no other caller is resolving `id`, then claims it.
    pub(crate) async fn acquire(&self, id: EntityId) -> InFlightGuard<'_> {
        let lock = {
            let mut slots = self.slots();
            let slot = slots.entry(id).or_default();
            slot.users += 1;
            Arc::clone(&slot.lock)
        };
        // Registered before waiting so a cancelled waiter still releases its slot
        let registration = Registration { registry: self, id };
        let guard = lock.lock_owned().await;
        InFlightGuard {
            _guard: guard,
            _registration: registration,
        }
    }

    fn release(&self, id: EntityId) {
        let mut slots = self.slots();
        if let Some(slot) = slots.get_mut(&id) {
            slot.users -= 1;
            if slot.users == 0 {
                slots.remove(&id);
            }
        }
    }

    /// Number of ids currently held or awaited.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.slots().len()
    }
}

struct Registration<'a> {
    registry: &'a InFlight,
    id: EntityId,
}

impl Drop for Registration<'_> {
    fn drop(&mut self) {
        self.registry.release(self.id);
    }
}

/// Claim on one id. Releases on drop, including when the owning future is
/// cancelled.
pub(crate) struct InFlightGuard<'a> {
    // Fields drop in order: unlock first, then leave the registry.
    _guard: OwnedMutexGuard<()>,
    _registration: Registration<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_entry_removed_after_release() {
        let in_flight = InFlight::default();

        {
            let _guard = in_flight.acquire(7).await;
            assert_eq!(in_flight.len(), 1);
        }

        assert_eq!(in_flight.len(), 0);
    }

    #[tokio::test]
    async fn test_second_caller_waits_for_first() {
        let in_flight = Arc::new(InFlight::default());
        let guard = in_flight.acquire(1).await;

        let waiter = {
            let in_flight = Arc::clone(&in_flight);
            tokio::spawn(async move {
                let _guard = in_flight.acquire(1).await;
            })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiter.is_finished());

        drop(guard);
        waiter.await.unwrap();
        assert_eq!(in_flight.len(), 0);
    }

    #[tokio::test]
    async fn test_cancelled_waiter_releases_entry_after_holder() {
        let in_flight = InFlight::default();
        let holder = in_flight.acquire(3).await;

        let mut waiter = Box::pin(in_flight.acquire(3));
        assert!(futures_util::poll!(waiter.as_mut()).is_pending());

        // Holder finishes first, then the waiter is dropped before it runs again
        drop(holder);
        drop(waiter);

        assert_eq!(in_flight.len(), 0);
    }

    #[tokio::test]
    async fn test_waiter_timing_out_keeps_holder_entry() {
        let in_flight = InFlight::default();
        let holder = in_flight.acquire(4).await;

        let timed_out =
            tokio::time::timeout(Duration::from_millis(10), in_flight.acquire(4)).await;

        assert!(timed_out.is_err());
        assert_eq!(in_flight.len(), 1);
        drop(holder);
        assert_eq!(in_flight.len(), 0);
    }

    #[tokio::test]
    async fn test_distinct_ids_do_not_block() {
        let in_flight = InFlight::default();

        let _a = in_flight.acquire(1).await;
        let _b = in_flight.acquire(2).await;

        assert_eq!(in_flight.len(), 2);
    }
}
