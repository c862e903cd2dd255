// src/scenario/traits.rs

use crate::model::package::{Package, Timestamp};
use crate::model::queues::{Discipline, DualQueueWarehouse, StatusSnapshot};
use crate::simulation::clock::Clock;
use crate::simulation::config::SimulationConfig;
use rand::rngs::StdRng;
use serde::Serialize;
use std::fmt::{self, Debug};
use std::sync::Arc;

/// Operational profile a scenario stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Profile {
    NormalOrders,
    PerishableGoods,
    Returns,
}

impl Profile {
    /// Which discipline suits this profile, and why.
    pub fn recommendation(&self) -> Recommendation {
        match self {
            Profile::NormalOrders => Recommendation {
                discipline: Discipline::Fifo,
                advantages: vec![
                    "FIFO is fairer: the first customers get their orders first",
                    "FIFO keeps waiting times predictable",
                ],
                drawbacks: vec!["LIFO can leave early customers waiting indefinitely"],
            },
            Profile::PerishableGoods => Recommendation {
                discipline: Discipline::Fifo,
                advantages: vec!["FIFO ships the oldest stock first, before it spoils"],
                drawbacks: vec!["LIFO leaves old stock at the bottom until it expires"],
            },
            Profile::Returns => Recommendation {
                discipline: Discipline::Lifo,
                advantages: vec![
                    "LIFO saves space: the courier takes the newest returns off the top",
                    "LIFO needs fewer package moves",
                    "LIFO gives immediate access to the last package",
                ],
                drawbacks: vec![
                    "FIFO means moving every package to reach the first ones",
                    "FIFO gets slower as the queue grows",
                ],
            },
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::NormalOrders => f.write_str("normal orders"),
            Profile::PerishableGoods => f.write_str("perishable goods"),
            Profile::Returns => f.write_str("returns"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub discipline: Discipline,
    pub advantages: Vec<&'static str>,
    pub drawbacks: Vec<&'static str>,
}

/// Shared inputs handed to each scenario run.
pub struct ScenarioContext<'a> {
    pub config: &'a SimulationConfig,
    pub clock: &'a dyn Clock,
    pub rng: StdRng,
}

/// What a scenario leaves behind for reporting.
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub name: String,
    pub profile: Profile,
    pub status: StatusSnapshot,
    pub fifo_dispatched: Vec<Arc<Package>>,
    pub lifo_dispatched: Vec<Arc<Package>>,
    /// Packages discarded by the LIFO expiry scan, newest first.
    pub expired: Vec<Arc<Package>>,
    pub scanned_at: Option<Timestamp>,
    pub recommendation: Recommendation,
}

impl ScenarioOutcome {
    pub fn from_warehouse(profile: Profile, warehouse: &DualQueueWarehouse) -> Self {
        Self {
            name: warehouse.name().to_string(),
            profile,
            status: warehouse.status(),
            fifo_dispatched: warehouse.dispatched(Discipline::Fifo).to_vec(),
            lifo_dispatched: warehouse.dispatched(Discipline::Lifo).to_vec(),
            expired: Vec::new(),
            scanned_at: None,
            recommendation: profile.recommendation(),
        }
    }

    pub fn with_expiry_scan(mut self, scanned_at: Timestamp, expired: Vec<Arc<Package>>) -> Self {
        self.scanned_at = Some(scanned_at);
        self.expired = expired;
        self
    }

    pub fn dispatched(&self, discipline: Discipline) -> &[Arc<Package>] {
        match discipline {
            Discipline::Fifo => &self.fifo_dispatched,
            Discipline::Lifo => &self.lifo_dispatched,
        }
    }
}

/// One walkthrough of the warehouse under a given profile.
pub trait Scenario: Debug {
    fn name(&self) -> &'static str;

    fn profile(&self) -> Profile;

    /// Builds a fresh warehouse, drives it, and reports what happened.
    fn run(&self, ctx: &mut ScenarioContext<'_>) -> ScenarioOutcome;
}
