use operator_core::catalog_policy::CatalogFailurePolicy;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Movie catalog connection settings.
    pub catalog: CatalogConfig,
}

/// How to reach the movie catalog and what to do when it is down.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// URL template for a single movie; `{id}` is replaced by the movie id.
    pub movie_url: String,
    /// Per-request timeout in seconds (default: `5`).
    pub timeout_secs: u64,
    /// Policy applied to creations when the catalog gives no answer.
    pub failure_policy: CatalogFailurePolicy,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                              |
    /// |--------------------------|--------------------------------------|
    /// | `HOST`                   | `0.0.0.0`                            |
    /// | `PORT`                   | `3000`                               |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`              |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                                 |
    /// | `CATALOG_MOVIE_URL`      | `http://localhost:8088/movies/{id}`  |
    /// | `CATALOG_TIMEOUT_SECS`   | `5`                                  |
    /// | `CATALOG_FAILURE_POLICY` | `closed`                             |
    ///
    /// Panics on unparseable values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            catalog: CatalogConfig::from_env(),
        }
    }
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        let movie_url = std::env::var("CATALOG_MOVIE_URL")
            .unwrap_or_else(|_| "http://localhost:8088/movies/{id}".into());

        let timeout_secs: u64 = std::env::var("CATALOG_TIMEOUT_SECS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("CATALOG_TIMEOUT_SECS must be a valid u64");

        let failure_policy = std::env::var("CATALOG_FAILURE_POLICY")
            .map(|raw| {
                raw.parse::<CatalogFailurePolicy>()
                    .unwrap_or_else(|e| panic!("Invalid CATALOG_FAILURE_POLICY: {e}"))
            })
            .unwrap_or_default();

        Self {
            movie_url,
            timeout_secs,
            failure_policy,
        }
    }
}
