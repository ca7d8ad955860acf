//! dispatch — plan a multi-stop delivery route over the sample network.
//!
//! ```text
//! dispatch City_B City_E                     # from Warehouse, by distance
//! dispatch --origin Hub_1 --metric time City_A City_C
//! dispatch --json City_E                     # machine-readable report
//! dispatch --list                            # show the network
//! RUST_LOG=debug dispatch City_E             # planner decisions on stderr
//! ```

mod report;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use lro_core::{PlannerConfig, WeightMetric};
use lro_network::sample_network;
use lro_routing::RoutingService;

/// Command-line interface for the route planner.
#[derive(Parser)]
#[command(name = "dispatch")]
#[command(about = "Plan a greedy multi-stop delivery route over the sample network")]
struct Cli {
    /// Delivery stops to visit
    stops: Vec<String>,

    /// Starting location
    #[arg(short, long, default_value = "Warehouse")]
    origin: String,

    /// Metric to optimise: distance, time or cost (overrides the config file)
    #[arg(short, long)]
    metric: Option<String>,

    /// Planner configuration as JSON (`{"metric": "time", "exclude_origin": true}`)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// List locations and routes, then exit
    #[arg(long)]
    list: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    let config = load_config(&cli)?;
    info!("planner config: {config:?}");

    let network = sample_network().context("building sample network")?;
    let service = RoutingService::with_config(network, config.clone());

    if cli.list {
        print!("{}", service.with_network(report::render_network));
        return Ok(());
    }

    if cli.stops.is_empty() {
        anyhow::bail!("select at least one delivery stop (see --list)");
    }

    let route = service
        .plan_route(&cli.origin, &cli.stops, Some(config.metric))
        .with_context(|| format!("planning route from {}", cli.origin))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&route)?);
    } else {
        print!("{}", report::render_route(&route));
    }
    Ok(())
}

/// Config file first, then CLI overrides.
fn load_config(cli: &Cli) -> Result<PlannerConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => PlannerConfig::default(),
    };
    if let Some(metric) = &cli.metric {
        config.metric = metric.parse::<WeightMetric>()?;
    }
    Ok(config)
}
