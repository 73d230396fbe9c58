//! Main GraphQL server.

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::handler::{graphql_get, graphql_post, HandlerContext};
use axum::routing::get;
use axum::Router;
use bookshelf_schema::{build_schema, BookshelfSchema};
use bookshelf_store::Store;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

/// The GraphQL server.
///
/// Owns the store and exposes it through a single endpoint. `POST`
/// executes queries and mutations; `GET` executes queries and serves the
/// GraphiQL explorer.
///
/// # Example
///
/// ```
/// use bookshelf_server::{BookshelfServer, ServerConfig};
///
/// let server = BookshelfServer::new(ServerConfig::default()).unwrap();
/// assert_eq!(server.store().book_count(), 9);
///
/// // In a real application, call `server.serve().await`.
/// ```
pub struct BookshelfServer {
    store: Arc<Store>,
    context: Arc<HandlerContext>,
}

impl BookshelfServer {
    /// Creates a new server with a fresh store.
    ///
    /// The store is seeded unless the config disables it.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let store = if config.seed {
            Store::seeded()
        } else {
            Store::new()
        };
        Self::with_store(config, Arc::new(store))
    }

    /// Creates a server around an existing store.
    pub fn with_store(config: ServerConfig, store: Arc<Store>) -> ServerResult<Self> {
        config.validate()?;
        let schema = build_schema(Arc::clone(&store));
        let context = Arc::new(HandlerContext::new(config, schema));
        Ok(Self { store, context })
    }

    /// Returns the backing store.
    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    /// Returns the executable schema.
    pub fn schema(&self) -> &BookshelfSchema {
        &self.context.schema
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.context.config
    }

    /// Builds the HTTP router.
    pub fn router(&self) -> Router {
        Router::new()
            .route(
                &self.context.config.endpoint,
                get(graphql_get).post(graphql_post),
            )
            .with_state(Arc::clone(&self.context))
    }

    /// Binds the configured address and serves until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let addr = self.context.config.bind_addr;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        self.serve_on(listener, shutdown_signal()).await
    }

    /// Serves on an already bound listener until `shutdown` completes.
    pub async fn serve_on<F>(self, listener: TcpListener, shutdown: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local = listener.local_addr()?;
        tracing::info!(
            addr = %local,
            endpoint = %self.context.config.endpoint,
            graphiql = self.context.config.graphiql,
            "listening"
        );
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;
        tracing::info!("server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
