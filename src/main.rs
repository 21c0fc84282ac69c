//! Recipe service.
//!
//! Lists and appends recipes kept in a single JSON file.
//!
//! ```text
//!   GET  /api/recipes ─┐
//!   POST /api/recipes ─┼─▶ http ─▶ recipes::RecipeService ─▶ storage::JsonFileStore ─▶ recipes.json
//!   GET  /health ──────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use recipe_service::config::{resolve_config, ConfigOverrides};
use recipe_service::lifecycle;
use recipe_service::observability::logging;

#[derive(Parser)]
#[command(name = "recipe-service")]
#[command(about = "HTTP service for a file-backed recipe collection", version)]
struct Args {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listening port (overrides PORT and the config file).
    #[arg(short, long)]
    port: Option<u16>,

    /// Recipe JSON file (overrides RECIPES_DATA_FILE and the config file).
    #[arg(long)]
    data_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let overrides = ConfigOverrides {
        port: args.port,
        data_file: args.data_file,
    };
    let config = resolve_config(args.config.as_deref(), |key| std::env::var(key).ok(), &overrides)?;

    logging::init_tracing(&config.observability);

    tracing::info!("recipe-service v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        port = config.listener.port,
        data_file = %config.storage.data_file.display(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    lifecycle::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
