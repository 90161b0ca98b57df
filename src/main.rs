//! GrubDash server
//!
//! Usage: `grubdash [CONFIG]`. The config path may also come from
//! `GRUBDASH_CONFIG`; without either, the server starts empty on
//! 127.0.0.1:5000.

use anyhow::{Context, Result};
use grubdash::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("grubdash=info,tower_http=info")),
        )
        .init();

    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("GRUBDASH_CONFIG").ok());

    let config = match config_path {
        Some(path) => AppConfig::from_yaml_file(&path)
            .with_context(|| format!("loading configuration from {path}"))?,
        None => {
            tracing::info!("no configuration given, using defaults");
            AppConfig::default()
        }
    };

    let app = GrubDash::from_config(&config)?;
    let server = app.server(config.server.cors);

    tracing::info!(entities = ?server.entity_types(), "starting grubdash");

    server.serve(&config.server.addr()).await
}
