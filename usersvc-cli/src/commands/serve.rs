//! HTTP server command
//!
//! Opens the connection pool, runs the user API until shutdown, then
//! closes the pool.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use usersvc_server::db::pool::{DEFAULT_ACQUIRE_TIMEOUT, DEFAULT_MAX_CONNECTIONS};
use usersvc_server::db::{create_pool_with_options, PoolConfig, UserRepo};
use usersvc_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "USERSVC_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Database URL (PostgreSQL connection string)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Maximum open database connections
    #[arg(long, env = "USERSVC_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Seconds a request may wait for a free connection
    #[arg(
        long,
        env = "USERSVC_ACQUIRE_TIMEOUT_SECS",
        default_value_t = DEFAULT_ACQUIRE_TIMEOUT.as_secs()
    )]
    pub acquire_timeout_secs: u64,

    /// Return store error detail in 500 responses (development only)
    #[arg(long, env = "USERSVC_DEV_MODE")]
    pub dev_mode: bool,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

impl ServeArgs {
    fn pool_config(&self) -> PoolConfig {
        PoolConfig {
            database_url: self.database_url.clone(),
            max_connections: self.max_connections.max(1),
            acquire_timeout: Duration::from_secs(self.acquire_timeout_secs),
        }
    }

    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind,
            cors_permissive: self.cors_permissive,
            dev_mode: self.dev_mode,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting usersvc on {}", args.bind);

    let pool = create_pool_with_options(&args.pool_config())
        .await
        .context("Failed to create database pool")?;

    // Run server (blocks until shutdown)
    let result = run_server(Arc::new(UserRepo::new(pool.clone())), args.server_config()).await;

    pool.close().await;
    tracing::info!("Database pool closed");

    result.context("Server error")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_map_to_configs() {
        let args = ServeArgs::try_parse_from([
            "serve",
            "--database-url",
            "postgres://localhost/users",
            "--max-connections",
            "0",
            "--dev-mode",
        ])
        .unwrap();

        let pool = args.pool_config();
        assert_eq!(pool.max_connections, 1);
        assert_eq!(pool.acquire_timeout, DEFAULT_ACQUIRE_TIMEOUT);

        let server = args.server_config();
        assert!(server.dev_mode);
        assert!(!server.cors_permissive);
        assert_eq!(server.bind_addr.port(), 3000);
    }
}
