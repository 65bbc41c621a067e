//! HTTP transport shell
//!
//! Binds the GraphQL schema to an axum listener: POST `/graphql` executes
//! operations, GET `/` and GET `/graphql` serve the GraphiQL IDE. The bound
//! address is logged once the listener is up, which matters when binding
//! port 0.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use tracing::info;

use phonebook_core::MemoryContactStore;
use phonebook_core::traits::{ContactStore, DirectorySource};
use phonebook_directory_http::HttpDirectorySource;
use phonebook_graphql::{ContactSchema, build_schema};

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};

/// Build the schema over the demo seed and serve it until shutdown
pub async fn run(bind_addr: SocketAddr, directory_url: String) -> Result<()> {
    let store: Arc<dyn ContactStore> = Arc::new(MemoryContactStore::with_demo_contacts());
    let directory: Arc<dyn DirectorySource> = Arc::new(HttpDirectorySource::new(directory_url));
    let schema = build_schema(store, directory);

    let app = Router::new()
        .route("/", get(graphiql))
        .route("/graphql", get(graphiql).post(graphql_handler))
        .with_state(schema);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    let addr = listener.local_addr()?;
    info!("Server ready at http://{}/", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown())
        .await?;

    Ok(())
}

async fn graphql_handler(
    State(schema): State<ContactSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Resolve when a shutdown signal arrives
async fn shutdown() {
    match wait_for_shutdown().await {
        Ok(signal) => info!("Received shutdown signal: {}", signal),
        Err(e) => tracing::error!("Shutdown handler error: {}", e),
    }
}

/// Wait for shutdown signals (SIGTERM, SIGINT)
#[cfg(unix)]
async fn wait_for_shutdown() -> Result<&'static str> {
    let mut sigterm = signal(SignalKind::terminate())
        .map_err(|e| anyhow::anyhow!("Failed to setup SIGTERM handler: {}", e))?;
    let mut sigint = signal(SignalKind::interrupt())
        .map_err(|e| anyhow::anyhow!("Failed to setup SIGINT handler: {}", e))?;

    let received = tokio::select! {
        _ = sigterm.recv() => "SIGTERM",
        _ = sigint.recv() => "SIGINT",
    };

    Ok(received)
}

/// Wait for shutdown signals (SIGINT only)
///
/// Fallback implementation for non-Unix platforms.
#[cfg(not(unix))]
async fn wait_for_shutdown() -> Result<&'static str> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to wait for CTRL-C: {}", e))?;
    Ok("SIGINT")
}
