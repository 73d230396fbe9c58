//! Bookshelf CLI
//!
//! Runs the GraphQL server and related tooling.
//!
//! # Commands
//!
//! - `serve` - Run the HTTP server
//! - `schema` - Print the GraphQL schema (SDL)
//! - `version` - Show version information

use bookshelf_server::{BookshelfServer, ServerConfig, DEFAULT_ENDPOINT};
use bookshelf_store::Store;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Bookshelf GraphQL server.
#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to listen on
        #[arg(short, long, env = "BOOKSHELF_BIND", default_value = "0.0.0.0:8000")]
        bind: SocketAddr,

        /// Endpoint path
        #[arg(long, env = "BOOKSHELF_PATH", default_value = DEFAULT_ENDPOINT)]
        path: String,

        /// Do not serve the GraphiQL explorer
        #[arg(long)]
        no_graphiql: bool,

        /// Start with no authors or books
        #[arg(long)]
        empty: bool,
    },

    /// Print the GraphQL schema in SDL form
    Schema,

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Serve {
            bind,
            path,
            no_graphiql,
            empty,
        } => {
            let config = ServerConfig::new(bind)
                .with_endpoint(path)
                .with_graphiql(!no_graphiql)
                .with_seed(!empty);
            BookshelfServer::new(config)?.serve().await?;
        }
        Commands::Schema => {
            let schema = bookshelf_schema::build_schema(Arc::new(Store::new()));
            print!("{}", schema.sdl());
        }
        Commands::Version => {
            println!("Bookshelf v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
