//! API server configuration.

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "0.0.0.0:8000").
    pub bind_addr: String,
    /// PostgreSQL connection URL.
    pub database_url: String,
}

impl ApiConfig {
    /// Reads configuration from environment variables with local defaults.
    ///
    /// | Variable       | Default                             |
    /// |----------------|-------------------------------------|
    /// | `BIND_ADDR`    | `0.0.0.0:8000`                      |
    /// | `DATABASE_URL` | `postgres://localhost:5432/cityos`  |
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into()),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost:5432/cityos".into()),
        }
    }
}
