//! Binary target running region chaos against an in-memory cluster.
//!
//! Creates a table spread over a set of servers, then performs the region
//! actions repeatedly and prints where the regions ended up.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin region_chaos -- --regions 12 --servers 4 --iterations 20
//! cargo run --bin region_chaos -- --config chaos.json --move-all
//! RUST_LOG=debug cargo run --bin region_chaos -- --seed 42
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use shakedown::{
    Action, ActionConfiguration, ActionContext, InMemoryCluster, MoveRandomRegionOfTableAction,
    MoveRegionsOfTableAction, ServerName,
};

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "region_chaos")]
#[command(about = "Move regions of a table around an in-memory cluster", long_about = None)]
struct Args {
    /// JSON action configuration (table, sleep_time_ms, max_time_ms, seed)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed (overrides the configuration; random if neither is set)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of regions in the table
    #[arg(long, default_value = "8")]
    regions: usize,

    /// Number of live servers
    #[arg(long, default_value = "3")]
    servers: usize,

    /// Number of times to perform the action
    #[arg(long, default_value = "10")]
    iterations: usize,

    /// Pacing delay in milliseconds (overrides the configuration, <= 0 disables)
    #[arg(long, allow_hyphen_values = true)]
    sleep_ms: Option<i64>,

    /// Move every region per iteration instead of a single random one
    #[arg(long)]
    move_all: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ActionConfiguration::from_json(&std::fs::read_to_string(path)?)?,
        None => ActionConfiguration::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(sleep_ms) = args.sleep_ms {
        config.sleep_time_ms = sleep_ms;
    }
    config.validate()?;
    let seed = config.seed.unwrap_or_else(rand::random);

    let cluster = Arc::new(InMemoryCluster::with_servers(
        (0..args.servers).map(|i| ServerName::new(format!("rs{}.local", i), 16020, 1)),
    ));
    cluster.create_table(config.table_name(), args.regions);

    let action: Box<dyn Action> = if args.move_all {
        Box::new(MoveRegionsOfTableAction::with_sleep(
            config.pacing(),
            config.table_name(),
            config.max_time(),
        ))
    } else {
        Box::new(MoveRandomRegionOfTableAction::with_sleep(
            config.pacing(),
            config.table_name(),
        ))
    };

    info!(seed, action = action.name(), table = %config.table, "Starting region chaos");
    let ctx = ActionContext::with_seed(cluster.clone(), seed);

    let mut failed = 0usize;
    for iteration in 0..args.iterations {
        if let Err(error) = action.perform(&ctx).await {
            failed += 1;
            warn!(iteration, error = %error, "Action failed");
        }
    }

    println!("=== Region Chaos Report ===");
    println!("Seed: {}", seed);
    println!("Iterations: {} ({} failed)", args.iterations, failed);
    println!("Moves: {}", cluster.moves().len());
    for (server, count) in cluster.region_distribution() {
        println!("  {}: {} region(s)", server, count);
    }

    Ok(())
}
