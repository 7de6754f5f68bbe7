use robo_scribe::adapters::outbound::{init_combined_logger, spawn_buffered_logger};
use robo_scribe::application::DrawingService;
use robo_scribe::{ApplicationError, Config};
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; the `log` facade is left to fast_log
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting robo-scribe");

    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config.toml".to_string());
    let config = if Path::new(&config_path).exists() {
        Config::from_file(&config_path).await?
    } else {
        warn!("{} not found, using defaults", config_path);
        Config::default()
    };
    info!(
        mode = ?config.simulation.mode,
        text = %config.simulation.text,
        "Configuration loaded"
    );

    let sink = init_combined_logger(
        "robo-scribe",
        config.logging.file.as_deref(),
        &config.logging.level,
    );
    let (logger, log_writer) = spawn_buffered_logger(sink, config.logging.buffer_capacity);

    let service = DrawingService::new(config, logger);
    let summary = service.run().await?;

    // last logger handle; closing the queue lets the writer drain and stop
    drop(service);
    log_writer
        .await
        .map_err(|e| ApplicationError::Logging(e.to_string()))?;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    info!("robo-scribe finished");
    Ok(())
}
