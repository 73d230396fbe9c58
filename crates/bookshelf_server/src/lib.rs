//! # Bookshelf Server
//!
//! HTTP GraphQL server for the Bookshelf store.
//!
//! This crate provides:
//! - A single GraphQL endpoint (default `/graphql`, port 8000)
//! - `POST` execution of queries and mutations (JSON body)
//! - `GET` execution of queries from URL parameters
//! - The GraphiQL explorer on `GET` without a query
//!
//! # Architecture
//!
//! The server owns one [`Store`](bookshelf_store::Store) and hands it to
//! the schema as context data. Handlers share a [`HandlerContext`] holding
//! the configuration and the executable schema.
//!
//! ```rust,ignore
//! use bookshelf_server::{BookshelfServer, ServerConfig};
//!
//! let config = ServerConfig::default().with_graphiql(false);
//! BookshelfServer::new(config)?.serve().await?;
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod config;
mod error;
mod handler;
mod server;

pub use config::{ServerConfig, DEFAULT_ENDPOINT};
pub use error::{ServerError, ServerResult};
pub use handler::{GetParams, HandlerContext};
pub use server::BookshelfServer;
