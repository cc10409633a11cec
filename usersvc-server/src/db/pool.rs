//! Database connection pool management
//!
//! Uses sqlx PgPool with an explicit connection ceiling. Excess demand
//! waits for a free connection up to `acquire_timeout`, then fails.

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Default wait for a free connection before a request fails.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Pool settings
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Upper bound on open connections
    pub max_connections: u32,
    /// How long a request may queue for a connection
    pub acquire_timeout: Duration,
}

impl PoolConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

/// Create a PostgreSQL connection pool with default limits.
///
/// # Errors
///
/// Returns an error if the URL is invalid or the first connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/users").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(&PoolConfig::new(database_url)).await
}

/// Create a PostgreSQL connection pool with custom options.
pub async fn create_pool_with_options(config: &PoolConfig) -> Result<PgPool, sqlx::Error> {
    let options = connect_options(&config.database_url)?;
    tracing::info!(
        host = options.get_host(),
        max_connections = config.max_connections,
        "Connecting to PostgreSQL"
    );

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(options)
        .await
}

/// Parse a connection string and pick an SSL mode for it.
///
/// An explicit `sslmode` in the URL wins. Otherwise loopback hosts connect
/// in plaintext and every other host requires TLS without certificate
/// verification.
pub fn connect_options(database_url: &str) -> Result<PgConnectOptions, sqlx::Error> {
    let options = PgConnectOptions::from_str(database_url)?;
    if database_url.contains("sslmode=") {
        return Ok(options);
    }

    let mode = ssl_mode_for_host(options.get_host());
    Ok(options.ssl_mode(mode))
}

/// SSL mode used when the URL does not specify one.
pub fn ssl_mode_for_host(host: &str) -> PgSslMode {
    if is_loopback(host) {
        PgSslMode::Disable
    } else {
        PgSslMode::Require
    }
}

fn is_loopback(host: &str) -> bool {
    // Unix domain socket directories are always local
    host.starts_with('/')
        || matches!(host, "localhost" | "127.0.0.1" | "::1" | "[::1]")
        || host.ends_with(".localhost")
}
