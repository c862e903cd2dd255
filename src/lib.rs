//! Warehouse dispatch simulator: runs the same package stream through a
//! FIFO queue and a LIFO stack and compares the two for normal orders,
//! perishable goods and returns.

pub mod error;
pub mod io;
pub mod model;
pub mod scenario;
pub mod simulation;

pub use crate::error::{Result, SimError};
pub use crate::model::package::{Category, Package, Timestamp};
pub use crate::model::queues::{Discipline, DualQueueWarehouse, StatusSnapshot};
pub use crate::model::shared::SharedWarehouse;
