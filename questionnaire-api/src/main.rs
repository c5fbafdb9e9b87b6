//! questionnaire-api - Main entry point
//!
//! HTTP service storing questions and validating responses against them.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use questionnaire_api::{build_router, AppState};
use questionnaire_common::config::{RootFolderInitializer, RootFolderResolver};
use questionnaire_common::db::init::init_database;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for questionnaire-api
#[derive(Parser, Debug)]
#[command(name = "questionnaire-api")]
#[command(about = "Questionnaire service: questions and validated responses")]
#[command(version)]
struct Args {
    /// Folder holding questionnaire.db
    #[arg(short, long)]
    root_folder: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long, env = "QUESTIONNAIRE_PORT")]
    port: Option<u16>,

    /// Address to bind
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: IpAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "questionnaire_api=info,questionnaire_common=info,tower_http=info".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting questionnaire-api v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let resolver = RootFolderResolver::new("questionnaire-api").with_cli_override(args.root_folder);
    let root_folder = resolver.resolve();
    let port = resolver.resolve_port(args.port);

    let initializer = RootFolderInitializer::new(root_folder);
    initializer.ensure_directory_exists()?;

    let db_path = initializer.database_path();
    info!("Database path: {}", db_path.display());

    let pool = init_database(&db_path)
        .await
        .context("Failed to initialize database")?;

    let app = build_router(AppState::new(pool));

    let addr = SocketAddr::new(args.bind, port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("questionnaire-api listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
