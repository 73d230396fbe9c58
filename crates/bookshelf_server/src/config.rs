//! Server configuration.

use crate::error::{ServerError, ServerResult};
use std::net::SocketAddr;

/// Default endpoint path.
pub const DEFAULT_ENDPOINT: &str = "/graphql";

/// Configuration for the GraphQL server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to.
    pub bind_addr: SocketAddr,
    /// Path the GraphQL endpoint is mounted at.
    pub endpoint: String,
    /// Whether `GET` without a query serves the GraphiQL explorer.
    pub graphiql: bool,
    /// Whether the store starts with the seed catalogue.
    pub seed: bool,
}

impl ServerConfig {
    /// Creates a new server configuration.
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            graphiql: true,
            seed: true,
        }
    }

    /// Sets the endpoint path.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Enables or disables the GraphiQL explorer.
    pub fn with_graphiql(mut self, enabled: bool) -> Self {
        self.graphiql = enabled;
        self
    }

    /// Sets whether the store starts seeded.
    pub fn with_seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }

    /// Checks that the configuration can be served.
    pub fn validate(&self) -> ServerResult<()> {
        if !self.endpoint.starts_with('/') {
            return Err(ServerError::InvalidConfig(format!(
                "endpoint must start with '/': {:?}",
                self.endpoint
            )));
        }
        if self.endpoint.len() > 1 && self.endpoint.ends_with('/') {
            return Err(ServerError::InvalidConfig(format!(
                "endpoint must not end with '/': {:?}",
                self.endpoint
            )));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(SocketAddr::from(([0, 0, 0, 0], 8000)))
    }
}
