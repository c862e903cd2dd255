// src/simulation/clock.rs

use crate::model::package::Timestamp;
use chrono::Utc;
use std::fmt::Debug;

/// Source of "now" for scenarios. Expiry scans take the time as an
/// argument, so tests pin it with a [`FixedClock`] instead of patching
/// the system clock.
pub trait Clock: Debug + Send + Sync {
    fn now(&self) -> Timestamp;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
