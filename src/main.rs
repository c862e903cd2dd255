use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use warehouse_dispatch_sim::io::reporting;
use warehouse_dispatch_sim::simulation::clock::SystemClock;
use warehouse_dispatch_sim::simulation::config::SimulationConfig;
use warehouse_dispatch_sim::simulation::engine::SimulationRun;

/// Warehouse simulator comparing FIFO and LIFO dispatch
#[derive(Parser, Debug)]
#[command(name = "warehouse-sim")]
#[command(about = "Compare FIFO and LIFO dispatch for normal orders, perishables and returns", long_about = None)]
struct Args {
    /// Normal orders received
    #[arg(long, default_value_t = 10)]
    normal_orders: usize,

    /// Normal orders dispatched per discipline
    #[arg(long, default_value_t = 5)]
    normal_dispatches: usize,

    /// Days of perishable deliveries (one package per day)
    #[arg(long, default_value_t = 5)]
    perishable_days: usize,

    /// Perishable packages dispatched per discipline
    #[arg(long, default_value_t = 3)]
    perishable_dispatches: usize,

    /// Days after the first delivery at which LIFO stock is checked for expiry
    #[arg(long, default_value_t = 3)]
    scan_offset_days: i64,

    /// Customer returns received
    #[arg(long, default_value_t = 8)]
    returns: usize,

    /// Courier pickup after every N returns
    #[arg(long, default_value_t = 3)]
    pickup_every: usize,

    /// Seed for package generation
    #[arg(long)]
    seed: Option<u64>,

    /// Write the dispatch log as CSV to this path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl From<Args> for SimulationConfig {
    fn from(args: Args) -> Self {
        Self {
            normal_orders: args.normal_orders,
            normal_dispatches: args.normal_dispatches,
            perishable_days: args.perishable_days,
            perishable_dispatches: args.perishable_dispatches,
            scan_offset_days: args.scan_offset_days,
            returns: args.returns,
            pickup_every: args.pickup_every,
            seed: args.seed,
            output: args.output,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warehouse_dispatch_sim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SimulationConfig::from(Args::parse());

    println!("{}", "=".repeat(60));
    println!("WAREHOUSE SIMULATOR - FIFO vs LIFO");
    println!("{}", "=".repeat(60));

    let mut sim = SimulationRun::new(config, Box::new(SystemClock))?;
    sim.run();

    for (i, outcome) in sim.outcomes.iter().enumerate() {
        print!("{}", reporting::render_outcome(i + 1, outcome));
    }
    print!("{}", reporting::render_conclusions(&sim.outcomes));

    if let Some(path) = &sim.config().output {
        reporting::write_dispatch_log(path, &sim.history)?;
        println!("\nDispatch log written to {}", path.display());
    }

    Ok(())
}
