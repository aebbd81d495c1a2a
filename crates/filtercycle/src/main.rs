mod app;
mod config;
mod handlers;
mod lifecycle;
mod state;
mod storage;

use std::future::IntoFuture;

use anyhow::Result;
use clap::Parser;
use listenfd::ListenFd;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    app::create_app,
    config::Config,
    lifecycle::{release_storage, seed_storage, shutdown_signal},
    state::AppState,
};

/// filtercycle - Track when each water-filter cartridge started its cycle
#[derive(Parser, Debug)]
#[command(name = "filtercycle")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "5000", env = "PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "filtercycle=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    // Opening storage is the only fatal startup step
    let state = AppState::open(&config).await?;
    seed_storage(state.repository.as_ref()).await;

    let app = create_app(state.clone());

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("Server running at http://{}", listener.local_addr()?);

    // In-flight requests are dropped, not drained
    let served = tokio::select! {
        result = axum::serve(listener, app).into_future() => result,
        _ = shutdown_signal() => Ok(()),
    };

    release_storage(state.repository.as_ref()).await;

    tracing::info!("Exiting process...");
    served?;

    Ok(())
}
