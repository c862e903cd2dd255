// src/model/shared.rs

use crate::model::package::{Package, Timestamp};
use crate::model::queues::{Discipline, DualQueueWarehouse, StatusSnapshot};
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle for driving one warehouse from several threads.
///
/// Each call holds the lock for its whole duration, so an expiry scan
/// (which empties and refills the LIFO side) can never interleave with
/// an enqueue or dispatch.
#[derive(Debug, Clone)]
pub struct SharedWarehouse {
    inner: Arc<Mutex<DualQueueWarehouse>>,
}

impl SharedWarehouse {
    pub fn new(warehouse: DualQueueWarehouse) -> Self {
        Self {
            inner: Arc::new(Mutex::new(warehouse)),
        }
    }

    pub fn enqueue(&self, package: impl Into<Arc<Package>>, discipline: Discipline) {
        self.inner.lock().enqueue(package, discipline);
    }

    pub fn dispatch(&self, discipline: Discipline) -> Option<Arc<Package>> {
        self.inner.lock().dispatch(discipline)
    }

    pub fn status(&self) -> StatusSnapshot {
        self.inner.lock().status()
    }

    pub fn scan_expired(&self, now: Timestamp) -> usize {
        self.inner.lock().scan_expired(now)
    }

    /// Runs `f` with exclusive access, for multi-step sequences that must
    /// not be split by other callers.
    pub fn with_exclusive<R>(&self, f: impl FnOnce(&mut DualQueueWarehouse) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::package::Category;
    use chrono::{Duration, TimeZone, Utc};
    use std::thread;

    #[test]
    fn test_concurrent_enqueue_then_scan() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let shared = SharedWarehouse::new(DualQueueWarehouse::new("shared"));

        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let wh = shared.clone();
                thread::spawn(move || {
                    for i in 0..25 {
                        let mut pkg = Package::new(
                            format!("W{}-{:03}", worker, i),
                            "Milk",
                            Category::Perishable,
                            now,
                        );
                        // Every even package is already past its date.
                        if i % 2 == 0 {
                            pkg = pkg.with_expiry(now - Duration::days(1));
                        }
                        wh.enqueue(pkg, Discipline::Lifo);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.status().lifo_count, 100);
        assert_eq!(shared.scan_expired(now), 52);
        assert_eq!(shared.status().lifo_count, 48);
    }

    #[test]
    fn test_with_exclusive_sequence() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let shared = SharedWarehouse::new(DualQueueWarehouse::new("shared"));
        shared.enqueue(Package::new("A", "Book", Category::Normal, now), Discipline::Fifo);
        shared.enqueue(Package::new("B", "Book", Category::Normal, now), Discipline::Fifo);

        let pair = shared.with_exclusive(|wh| {
            let first = wh.dispatch(Discipline::Fifo).map(|p| p.id().to_string());
            let second = wh.dispatch(Discipline::Fifo).map(|p| p.id().to_string());
            (first, second)
        });

        assert_eq!(pair, (Some("A".to_string()), Some("B".to_string())));
        assert!(shared.dispatch(Discipline::Fifo).is_none());
    }
}
