mod auth;
mod itunes;
mod routes;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use spectra_core::TokenSigner;
use tracing::{error, info};

use itunes::{ItunesClient, ITUNES_SEARCH_URL};
use routes::{build_app, AppState};

/// SpectraFlow server: issues access tokens and proxies iTunes searches.
#[derive(Parser)]
#[command(name = "spectra-server")]
struct Args {
    /// Secret used to sign and verify access tokens.
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    jwt_secret: String,

    /// Port to listen on.
    #[arg(long, default_value = "5000", env = "PORT")]
    port: u16,

    /// Address to bind to.
    #[arg(long, default_value = "0.0.0.0", env = "SPECTRA_BIND")]
    bind: String,

    /// Path to the built web frontend (enables static serving and SPA fallback).
    #[arg(long, env = "SPECTRA_WEB_DIR")]
    web_dir: Option<PathBuf>,

    /// iTunes Search API endpoint.
    #[arg(long, default_value = ITUNES_SEARCH_URL, env = "SPECTRA_ITUNES_URL")]
    itunes_url: String,
}

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real environment variables still apply.
    let dotenv = dotenvy::dotenv();
    configure_logging();
    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    let args = Args::parse();

    if args.jwt_secret.is_empty() {
        error!("JWT_SECRET is empty; refusing to sign tokens with an empty secret");
        std::process::exit(1);
    }

    let state = Arc::new(AppState {
        signer: TokenSigner::new(args.jwt_secret.into_bytes()),
        itunes: ItunesClient::new(args.itunes_url),
    });

    let app = build_app(state, args.web_dir.as_deref());
    let addr = format!("{}:{}", args.bind, args.port);

    info!("Binding to {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to bind to {addr}: {e}");
            std::process::exit(1);
        });

    info!("spectra-server listening on http://{addr}");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {e}");
        std::process::exit(1);
    }
}
