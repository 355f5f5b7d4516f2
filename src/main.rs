use std::net::SocketAddr;
use std::sync::Arc;

use api_rest::AppState;
use showcase_core::config::{port_from_env_value, PORT_VAR};
use showcase_core::{store, CoreConfig, JokeApiClient, JokeService, PersonService};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the showcase server
///
/// Resolves configuration, connects the document store and serves the REST API on
/// `0.0.0.0:$PORT` until interrupted.
///
/// # Environment Variables
/// - `MONGO_URI`: store connection string (required; `memory://` for a process-local store)
/// - `PORT`: listen port (default: 3000)
/// - `SHOWCASE_DB_NAME` / `SHOWCASE_COLLECTION`: database and collection (default: INDEX / PERSON)
/// - `JOKE_API_URL`: upstream joke provider base URL
/// - `JOKE_COUNT`: jokes per batch, 1 to 10 (default: 10)
///
/// # Errors
/// Returns an error, and the process exits non-zero, if:
/// - the logging/tracing configuration cannot be initialised,
/// - configuration is missing or invalid,
/// - the document store cannot be reached,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("showcase_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("showcase_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = CoreConfig::from_lookup(|key| std::env::var(key).ok())?;
    let port = port_from_env_value(std::env::var(PORT_VAR).ok())?;

    let person_store = store::connect(&cfg).await?;
    let state = AppState::new(
        PersonService::new(person_store),
        JokeService::new(
            Arc::new(JokeApiClient::new(cfg.joke_api_url())),
            cfg.joke_count(),
        ),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("++ Server running at http://localhost:{port}");

    axum::serve(listener, api_rest::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        tracing::info!("received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
