// src/scenario/implementations.rs

use crate::io::packages::generate_packages;
use crate::model::package::{Category, Package};
use crate::model::queues::{Discipline, DualQueueWarehouse};
use crate::scenario::traits::{Profile, Scenario, ScenarioContext, ScenarioOutcome};
use chrono::Duration;
use std::sync::Arc;
use tracing::info;

/// Puts the same package on both sides so the disciplines see one stream.
fn stock_both(warehouse: &mut DualQueueWarehouse, package: Package) {
    let package = Arc::new(package);
    warehouse.enqueue(Arc::clone(&package), Discipline::Fifo);
    warehouse.enqueue(package, Discipline::Lifo);
}

// =========================================================================
// 1. Normal Orders
// =========================================================================

/// Orders arrive in sequence and half of them are shipped under each
/// discipline. FIFO serves the earliest customers, LIFO the latest.
#[derive(Debug, Clone, Default)]
pub struct NormalOrders;

impl Scenario for NormalOrders {
    fn name(&self) -> &'static str {
        "Normal Orders"
    }

    fn profile(&self) -> Profile {
        Profile::NormalOrders
    }

    fn run(&self, ctx: &mut ScenarioContext<'_>) -> ScenarioOutcome {
        let config = ctx.config;
        let mut warehouse = DualQueueWarehouse::new(self.name());

        let orders = generate_packages(
            config.normal_orders,
            Category::Normal,
            ctx.clock.now(),
            &mut ctx.rng,
        );
        for order in orders {
            stock_both(&mut warehouse, order);
        }

        for _ in 0..config.normal_dispatches {
            warehouse.dispatch(Discipline::Fifo);
        }
        for _ in 0..config.normal_dispatches {
            warehouse.dispatch(Discipline::Lifo);
        }

        ScenarioOutcome::from_warehouse(self.profile(), &warehouse)
    }
}

// =========================================================================
// 2. Perishable Goods
// =========================================================================

/// One carton of milk arrives per day, each good for five days past the
/// following day. After a few dispatches the clock is moved forward and
/// the LIFO stack is checked for spoiled stock.
#[derive(Debug, Clone, Default)]
pub struct PerishableGoods;

impl Scenario for PerishableGoods {
    fn name(&self) -> &'static str {
        "Perishable Goods"
    }

    fn profile(&self) -> Profile {
        Profile::PerishableGoods
    }

    fn run(&self, ctx: &mut ScenarioContext<'_>) -> ScenarioOutcome {
        let config = ctx.config;
        let start = ctx.clock.now();
        let mut warehouse = DualQueueWarehouse::new(self.name());

        for day in 1..=config.perishable_days as i64 {
            let package = Package::new(
                format!("P{:03}", day),
                "Milk",
                Category::Perishable,
                start + Duration::days(day - 1),
            )
            .with_expiry(start + Duration::days(day + 5));
            stock_both(&mut warehouse, package);
        }

        for _ in 0..config.perishable_dispatches {
            warehouse.dispatch(Discipline::Fifo);
        }
        for _ in 0..config.perishable_dispatches {
            warehouse.dispatch(Discipline::Lifo);
        }

        let scan_time = start + Duration::days(config.scan_offset_days);
        info!(
            warehouse = %warehouse.name(),
            days_ahead = config.scan_offset_days,
            "checking LIFO stock for expired packages"
        );
        let expired = warehouse.drain_expired(scan_time);

        ScenarioOutcome::from_warehouse(self.profile(), &warehouse)
            .with_expiry_scan(scan_time, expired)
    }
}

// =========================================================================
// 3. Returns
// =========================================================================

/// Customers drop off returns one at a time and a courier collects one
/// package per side after every few drop-offs.
#[derive(Debug, Clone, Default)]
pub struct Returns;

impl Scenario for Returns {
    fn name(&self) -> &'static str {
        "Returns"
    }

    fn profile(&self) -> Profile {
        Profile::Returns
    }

    fn run(&self, ctx: &mut ScenarioContext<'_>) -> ScenarioOutcome {
        let config = ctx.config;
        let mut warehouse = DualQueueWarehouse::new(self.name());

        let returns = generate_packages(config.returns, Category::Return, ctx.clock.now(), &mut ctx.rng);
        for (i, package) in returns.into_iter().enumerate() {
            stock_both(&mut warehouse, package);

            let received = i + 1;
            if received % config.pickup_every == 0 {
                info!(warehouse = %warehouse.name(), received, "courier pickup");
                warehouse.dispatch(Discipline::Fifo);
                warehouse.dispatch(Discipline::Lifo);
            }
        }

        ScenarioOutcome::from_warehouse(self.profile(), &warehouse)
    }
}

/// The three walkthroughs in presentation order.
pub fn all_scenarios() -> Vec<Box<dyn Scenario>> {
    vec![
        Box::new(NormalOrders),
        Box::new(PerishableGoods),
        Box::new(Returns),
    ]
}
