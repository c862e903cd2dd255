// src/simulation/config.rs

use crate::error::{Result, SimError};
use std::path::PathBuf;

/// Upper bounds keeping every scenario timestamp within chrono's range.
pub const MAX_SCAN_OFFSET_DAYS: i64 = 36_500;
pub const MAX_PERISHABLE_DAYS: usize = 3_650;
pub const MAX_GENERATED_PACKAGES: usize = 100_000;

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    // Normal orders
    pub normal_orders: usize,
    pub normal_dispatches: usize,

    // Perishable goods: one package per day
    pub perishable_days: usize,
    pub perishable_dispatches: usize,
    pub scan_offset_days: i64,

    // Returns: a courier collects one per side every `pickup_every` returns
    pub returns: usize,
    pub pickup_every: usize,

    /// Fixed seed for package generation. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Where to write the dispatch log as CSV, if anywhere.
    pub output: Option<PathBuf>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            normal_orders: 10,
            normal_dispatches: 5,
            perishable_days: 5,
            perishable_dispatches: 3,
            scan_offset_days: 3,
            returns: 8,
            pickup_every: 3,
            seed: None,
            output: None,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        let counts = [
            ("normal_orders", self.normal_orders),
            ("perishable_days", self.perishable_days),
            ("returns", self.returns),
            ("pickup_every", self.pickup_every),
        ];
        for (field, value) in counts {
            if value == 0 {
                return Err(SimError::InvalidConfig(format!("{} must be at least 1", field)));
            }
        }
        if self.scan_offset_days < 0 {
            return Err(SimError::InvalidConfig(
                "scan_offset_days cannot be negative".to_string(),
            ));
        }

        if self.scan_offset_days > MAX_SCAN_OFFSET_DAYS {
            return Err(SimError::InvalidConfig(format!(
                "scan_offset_days must be at most {}",
                MAX_SCAN_OFFSET_DAYS
            )));
        }
        if self.perishable_days > MAX_PERISHABLE_DAYS {
            return Err(SimError::InvalidConfig(format!(
                "perishable_days must be at most {}",
                MAX_PERISHABLE_DAYS
            )));
        }
        let generated = [
            ("normal_orders", self.normal_orders),
            ("returns", self.returns),
        ];
        for (field, value) in generated {
            if value > MAX_GENERATED_PACKAGES {
                return Err(SimError::InvalidConfig(format!(
                    "{} must be at most {}",
                    field, MAX_GENERATED_PACKAGES
                )));
            }
        }
        Ok(())
    }
}
