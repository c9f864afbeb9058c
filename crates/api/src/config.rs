use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
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
    /// Path of the JSON document backing the prompt store.
    pub data_file: PathBuf,
    /// Directory uploaded images are written to (served at `/uploads`).
    pub upload_dir: PathBuf,
    /// Admin login credentials.
    pub admin: AdminConfig,
    /// Session token configuration (secret, lifetime).
    pub session: SessionConfig,
}

/// Credentials accepted by `POST /api/v1/auth/login`.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
}

/// Configuration for signed session tokens.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// HMAC-SHA256 secret used to sign and verify session tokens.
    pub secret: String,
    /// Session lifetime in hours (default: 24).
    pub ttl_hours: i64,
}

/// Default session lifetime in hours.
const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DATA_FILE`            | `data/prompts.json`        |
    /// | `UPLOAD_DIR`           | `public/uploads`           |
    /// | `ADMIN_USERNAME`       | `admin` (dev only)         |
    /// | `ADMIN_PASSWORD`       | `admin123` (dev only)      |
    /// | `SESSION_SECRET`       | dev fallback (dev only)    |
    /// | `SESSION_TTL_HOURS`    | `24`                       |
    ///
    /// Credential fallbacks are logged with a warning; set them explicitly
    /// anywhere that is not a local checkout.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let data_file =
            PathBuf::from(std::env::var("DATA_FILE").unwrap_or_else(|_| "data/prompts.json".into()));

        let upload_dir =
            PathBuf::from(std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "public/uploads".into()));

        let admin = AdminConfig::from_env();
        let session = SessionConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            data_file,
            upload_dir,
            admin,
            session,
        }
    }
}

impl AdminConfig {
    fn from_env() -> Self {
        let username = env_or_dev_default("ADMIN_USERNAME", "admin");
        let password = env_or_dev_default("ADMIN_PASSWORD", "admin123");
        Self { username, password }
    }
}

impl SessionConfig {
    fn from_env() -> Self {
        let secret = env_or_dev_default("SESSION_SECRET", "dev-session-secret-not-for-production");

        let ttl_hours: i64 = std::env::var("SESSION_TTL_HOURS")
            .unwrap_or_else(|_| DEFAULT_SESSION_TTL_HOURS.to_string())
            .parse()
            .expect("SESSION_TTL_HOURS must be a valid i64");

        Self { secret, ttl_hours }
    }
}

fn env_or_dev_default(var: &str, fallback: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| {
        tracing::warn!("{var} not set; using the development default");
        fallback.to_string()
    })
}
