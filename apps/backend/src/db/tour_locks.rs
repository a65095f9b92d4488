//! In-process serialization of writes per tour.
//!
//! A round submission reads live handicaps, scores the round and writes the
//! new totals. Two submissions for the same tour interleaving those steps
//! would miscount handicap drift, so callers hold the tour's guard for the
//! whole read-compute-write sequence. Different tours never contend.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Debug, Default)]
pub struct TourLocks {
    locks: DashMap<i64, Arc<Mutex<()>>>,
}

impl TourLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `tour_id`. Released when the guard drops.
    pub async fn acquire(&self, tour_id: i64) -> OwnedMutexGuard<()> {
        let lock = self
            .locks
            .entry(tour_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone();
        lock.lock_owned().await
    }

    /// Drop the lock entry of a deleted tour.
    pub fn forget(&self, tour_id: i64) {
        self.locks.remove(&tour_id);
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
