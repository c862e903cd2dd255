// src/model/queues.rs

use crate::model::package::{Package, Timestamp};
use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Ordering policy applied when a package leaves the warehouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Discipline {
    /// Oldest enqueued package leaves first.
    Fifo,
    /// Most recently enqueued package leaves first.
    Lifo,
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discipline::Fifo => f.write_str("FIFO"),
            Discipline::Lifo => f.write_str("LIFO"),
        }
    }
}

/// Point-in-time counts of a warehouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusSnapshot {
    pub fifo_count: usize,
    pub lifo_count: usize,
    pub fifo_dispatched_count: usize,
    pub lifo_dispatched_count: usize,
}

/// Holds the same stream of packages under both dispatch disciplines.
///
/// Both sides are plain `VecDeque`s with the tail as the insertion point.
/// The FIFO side removes from the head, the LIFO side from the tail.
/// The two sides are filled independently, so one package may sit in both.
#[derive(Debug)]
pub struct DualQueueWarehouse {
    name: String,
    fifo_queue: VecDeque<Arc<Package>>,
    lifo_stack: VecDeque<Arc<Package>>,

    // Removal history, only read back for reporting.
    fifo_dispatched: Vec<Arc<Package>>,
    lifo_dispatched: Vec<Arc<Package>>,
}

impl DualQueueWarehouse {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fifo_queue: VecDeque::new(),
            lifo_stack: VecDeque::new(),
            fifo_dispatched: Vec::new(),
            lifo_dispatched: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends the package to the tail of the selected side. Never fails.
    pub fn enqueue(&mut self, package: impl Into<Arc<Package>>, discipline: Discipline) {
        let package = package.into();
        info!(
            warehouse = %self.name,
            package = %package.id(),
            %discipline,
            "package enqueued"
        );
        match discipline {
            Discipline::Fifo => self.fifo_queue.push_back(package),
            Discipline::Lifo => self.lifo_stack.push_back(package),
        }
    }

    /// Removes the next package under `discipline`.
    ///
    /// Returns `None` when that side is empty; this is a normal outcome
    /// and leaves every count untouched.
    pub fn dispatch(&mut self, discipline: Discipline) -> Option<Arc<Package>> {
        let next = match discipline {
            Discipline::Fifo => self.fifo_queue.pop_front(),
            Discipline::Lifo => self.lifo_stack.pop_back(),
        };

        let Some(package) = next else {
            info!(warehouse = %self.name, %discipline, "nothing to dispatch");
            return None;
        };

        info!(
            warehouse = %self.name,
            package = %package.id(),
            %discipline,
            "package dispatched"
        );
        match discipline {
            Discipline::Fifo => self.fifo_dispatched.push(Arc::clone(&package)),
            Discipline::Lifo => self.lifo_dispatched.push(Arc::clone(&package)),
        }
        Some(package)
    }

    pub fn status(&self) -> StatusSnapshot {
        StatusSnapshot {
            fifo_count: self.fifo_queue.len(),
            lifo_count: self.lifo_stack.len(),
            fifo_dispatched_count: self.fifo_dispatched.len(),
            lifo_dispatched_count: self.lifo_dispatched.len(),
        }
    }

    /// Counts and discards expired packages on the LIFO side.
    ///
    /// See [`DualQueueWarehouse::drain_expired`] for the traversal.
    pub fn scan_expired(&mut self, now: Timestamp) -> usize {
        self.drain_expired(now).len()
    }

    /// Scans the LIFO side for packages whose expiry is before `now`.
    ///
    /// The stack is emptied from the top down. Expired packages are dropped
    /// (they are not recorded as dispatched), the rest are pushed back
    /// oldest first so the surviving order is exactly what it was.
    /// The FIFO side is not inspected: seeing past its head would mean
    /// draining it, and its expired packages surface only when dispatched.
    ///
    /// Returns the discarded packages, newest first.
    pub fn drain_expired(&mut self, now: Timestamp) -> Vec<Arc<Package>> {
        let mut expired = Vec::new();
        let mut retained = Vec::with_capacity(self.lifo_stack.len());

        while let Some(package) = self.lifo_stack.pop_back() {
            if package.is_expired_at(now) {
                warn!(
                    warehouse = %self.name,
                    package = %package.id(),
                    "expired package found in LIFO"
                );
                expired.push(package);
            } else {
                retained.push(package);
            }
        }

        // `retained` is newest first; refill from the bottom of the stack.
        for package in retained.into_iter().rev() {
            self.lifo_stack.push_back(package);
        }

        debug!(
            warehouse = %self.name,
            expired = expired.len(),
            remaining = self.lifo_stack.len(),
            "expiry scan finished"
        );
        expired
    }

    /// Packages still waiting under `discipline`, oldest first.
    pub fn pending(&self, discipline: Discipline) -> impl Iterator<Item = &Package> + '_ {
        let side = match discipline {
            Discipline::Fifo => &self.fifo_queue,
            Discipline::Lifo => &self.lifo_stack,
        };
        side.iter().map(|p| p.as_ref())
    }

    /// Packages removed under `discipline`, in removal order.
    pub fn dispatched(&self, discipline: Discipline) -> &[Arc<Package>] {
        match discipline {
            Discipline::Fifo => &self.fifo_dispatched,
            Discipline::Lifo => &self.lifo_dispatched,
        }
    }
}
