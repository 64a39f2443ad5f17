//! Ranch server binary.
//!
//! Wires the ranch context to its timers and persistence and runs until
//! interrupted.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `ranch-config.yaml`
//! 3. Load persisted state (economy, farms, professions)
//! 4. Place the market structure
//! 5. Run the day and display timers until Ctrl-C
//! 6. Save state and exit

use std::path::Path;

use tokio::sync::watch;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ranch_core::{run_timers, NoOpCallback, RanchConfig, RanchContext, TimerIntervals};
use ranch_types::WorldPoint;
use ranch_world::{RecordingWorldEditor, WorldEditor};

/// Environment variable overriding the configuration file location.
const CONFIG_ENV: &str = "RANCH_CONFIG";

/// Default configuration file, resolved against the working directory.
const CONFIG_FILE: &str = "ranch-config.yaml";

/// Where the market structure is pasted in the market world.
const MARKET_ORIGIN: (f64, f64, f64) = (0.0, 94.0, 0.0);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("ranch-engine starting");

    // 2. Load configuration. A missing file runs with defaults.
    let config_path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| CONFIG_FILE.to_owned());
    let config = if Path::new(&config_path).is_file() {
        RanchConfig::from_file(Path::new(&config_path))?
    } else {
        info!(path = config_path, "no config file found, using defaults");
        RanchConfig::default()
    };
    info!(
        farm_world = config.world.farm_world,
        market_world = config.world.market_world,
        seed = config.world.seed,
        day_interval_ms = config.simulation.day_interval_ms,
        "Configuration loaded"
    );

    // 3. Load persisted state.
    let mut context = RanchContext::load(&config);

    // 4. Place the market structure. A failure is logged and the ranch
    //    runs on without it.
    let mut editor = RecordingWorldEditor::strict();
    let (mx, my, mz) = MARKET_ORIGIN;
    let market_origin = WorldPoint::new(config.world.market_world.clone(), mx, my, mz);
    match editor.paste_structure(&config.structures.market_schematic_path(), &market_origin) {
        Ok(()) => info!(%market_origin, "market structure placed"),
        Err(error) => warn!(%error, "market structure not placed"),
    }

    // 5. Run the timers until Ctrl-C.
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if let Err(error) = tokio::signal::ctrl_c().await {
            warn!(%error, "failed to listen for shutdown signal");
            return;
        }
        info!("shutdown signal received");
        shutdown_tx.send(true).ok();
    });

    let intervals = TimerIntervals::from_config(&config.simulation);
    let mut callback = NoOpCallback;
    run_timers(&mut context, intervals, &mut callback, &mut shutdown_rx).await;

    // 6. Save state and exit.
    context.save(&config);
    info!(day = context.degradation.day(), "ranch-engine stopped");
    Ok(())
}
