//! emotune-api - EmoTune backend service binary
//!
//! Emotion-aware music recommendation API. Resolves configuration,
//! initializes the database, and serves the HTTP surface.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use emotune_api::services::VisionClient;
use emotune_api::{build_router, AppState};
use emotune_common::config::{database_path, resolve_data_dir, resolve_port, TomlConfig};
use emotune_common::db::init_database;

#[derive(Debug, Parser)]
#[command(name = "emotune-api", version, about = "EmoTune emotion-aware music recommendation backend")]
struct Args {
    /// Data directory holding emotune.db
    #[arg(long, env = "EMOTUNE_DATA")]
    data_dir: Option<String>,

    /// HTTP listen port
    #[arg(long, env = "EMOTUNE_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting EmoTune API (emotune-api) v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let toml_config = TomlConfig::load()?;

    let data_dir = resolve_data_dir(args.data_dir.as_deref(), &toml_config);
    let port = resolve_port(args.port, &toml_config);

    let db_path = database_path(&data_dir);
    info!("Database path: {}", db_path.display());
    let pool = init_database(&db_path).await?;

    // Remote facial-emotion inference is optional; without credentials the
    // placeholder image scorer answers instead
    let vision = VisionClient::from_config(&toml_config);
    if vision.is_none() {
        info!("Facial-emotion inference not configured, using placeholder image scorer");
    }

    let state = AppState::with_vision(pool, vision);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("emotune-api listening on http://0.0.0.0:{}", port);
    info!("Health check: http://127.0.0.1:{}/health", port);

    axum::serve(listener, app).await?;

    Ok(())
}
