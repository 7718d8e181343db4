//! Demo host binary for the multisensor trigger accessory.
//!
//! Stands in for the real control plane: builds the accessory with a
//! logging host bridge and the tokio reset scheduler, optionally runs the
//! periodic trigger simulation, and waits for Ctrl+C.

use clap::Parser;
use log::{error, info};
use multisensor_trigger::accessory::MultisensorTriggerAccessory;
use multisensor_trigger::config::AccessoryConfig;
use multisensor_trigger::host::LogHostBridge;
use multisensor_trigger::input::simulation::run_trigger_simulation;
use multisensor_trigger::trigger::{RESET_DELAY, TokioResetScheduler};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;

#[derive(Parser)]
#[command(name = "multisensor-trigger")]
#[command(about = "Virtual multisensor trigger accessory", version)]
struct Cli {
    /// Path to a JSON config block (defaults to the platform config dir)
    #[arg(long, env = "TRIGGER_CONFIG")]
    config: Option<PathBuf>,

    /// Override the accessory name
    #[arg(long, env = "TRIGGER_NAME")]
    name: Option<String>,

    /// Override the number of motion sensors
    #[arg(long, env = "TRIGGER_SENSORS")]
    sensors: Option<usize>,

    /// Override the configured reset delay in milliseconds (informational:
    /// the reset timer always runs on the fixed 1000 ms)
    #[arg(long, env = "TRIGGER_DELAY_MS")]
    delay: Option<u64>,

    /// Seconds between simulated trigger activations, 0 to disable
    #[arg(long, env = "TRIGGER_SIMULATE_SECS", default_value_t = 30)]
    simulate: u64,
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

/// Resolve the config block: explicit file, then the default config file
/// if present, then environment variables; CLI flags override the result.
fn resolve_config(cli: &Cli) -> multisensor_trigger::Result<AccessoryConfig> {
    let mut config = if let Some(path) = &cli.config {
        AccessoryConfig::from_file(path)?
    } else if let Some(path) = AccessoryConfig::default_config_path().filter(|p| p.exists()) {
        info!("Loading config from {}", path.display());
        AccessoryConfig::from_file(&path)?
    } else {
        AccessoryConfig::from_env()
    };

    if let Some(name) = &cli.name {
        config.name = name.clone();
    }
    if let Some(sensors) = cli.sensors {
        config.sensors = sensors.max(1);
    }
    if let Some(delay) = cli.delay {
        config.delay = delay;
    }
    Ok(config)
}

#[tokio::main]
async fn main() {
    init_logger();
    info!("Starting Multisensor Trigger");

    let cli = Cli::parse();
    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!("Configuration loaded:");
    info!("  Name: {}", config.name);
    info!("  Sensors: {}", config.sensors);
    info!(
        "  Configured delay: {} ms (reset timer uses fixed {} ms)",
        config.delay,
        RESET_DELAY.as_millis()
    );

    let accessory = MultisensorTriggerAccessory::new(
        &config,
        Arc::new(LogHostBridge::new()),
        Arc::new(TokioResetScheduler::new()),
    );

    info!("Accessory id: {}", accessory.uuid());
    info!("Services:");
    for service in accessory.services() {
        info!("  - {} '{}' ({})", service.kind, service.display_name, service.subtype);
    }

    let simulation = if cli.simulate > 0 {
        info!("Simulating a trigger activation every {}s", cli.simulate);
        Some(run_trigger_simulation(
            accessory.trigger(),
            Duration::from_secs(cli.simulate),
        ))
    } else {
        None
    };

    info!("Multisensor Trigger is running");
    info!("  - Press Ctrl+C to exit");

    match signal::ctrl_c().await {
        Ok(()) => info!("Received shutdown signal"),
        Err(e) => error!("Failed to listen for shutdown signal: {}", e),
    }

    if let Some(task) = simulation {
        task.abort();
    }

    info!("Multisensor Trigger stopped");
}
