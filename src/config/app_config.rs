use crate::error::{AppError, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_OVERRIDES_KEY: &str = "tendas.productImages";
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150?text=Image+Not+Found";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub catalog: CatalogConfig,
    pub rental: RentalConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Storage key holding the serialized image overrides.
    pub overrides_key: String,
    /// Directory local image paths (`/images/...`) are resolved against.
    pub public_dir: Option<PathBuf>,
    pub placeholder_image: String,
    /// Editor sessions untouched this long are discarded.
    pub editor_idle_timeout: Duration,
    pub editor_max_sessions: usize,
}

#[derive(Debug, Clone)]
pub struct RentalConfig {
    pub delay_ms: u64,
    pub failure_rate: f64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            overrides_key: DEFAULT_OVERRIDES_KEY.to_string(),
            public_dir: None,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            editor_idle_timeout: Duration::from_secs(30 * 60),
            editor_max_sessions: 256,
        }
    }
}

impl Default for RentalConfig {
    fn default() -> Self {
        Self {
            delay_ms: 1500,
            failure_rate: 0.1,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let failure_rate: f64 = env::var("RENTAL_FAILURE_RATE")
            .unwrap_or_else(|_| "0.1".to_string())
            .parse()
            .map_err(|_| AppError::ConfigError("Invalid RENTAL_FAILURE_RATE value".to_string()))?;

        if !(0.0..=1.0).contains(&failure_rate) {
            return Err(AppError::ConfigError(
                "RENTAL_FAILURE_RATE must be between 0 and 1".to_string(),
            ));
        }

        Ok(Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .map_err(|_| AppError::ConfigError("Invalid PORT value".to_string()))?,
                max_body_size: env::var("MAX_BODY_SIZE")
                    .unwrap_or_else(|_| "1048576".to_string())
                    .parse()
                    .map_err(|_| AppError::ConfigError("Invalid MAX_BODY_SIZE value".to_string()))?,
            },
            database: DatabaseConfig {
                url: env::var("DB_URL").unwrap_or_else(|_| "sqlite://tendas.db?mode=rwc".to_string()),
                max_connections: env::var("DB_MAX_CONNECTIONS")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::ConfigError("Invalid DB_MAX_CONNECTIONS value".to_string())
                    })?,
            },
            cors: CorsConfig {
                allowed_origins: env::var("FRONTEND_URL")
                    .unwrap_or_else(|_| "http://localhost:5173".to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            },
            catalog: CatalogConfig {
                overrides_key: env::var("OVERRIDES_KEY")
                    .unwrap_or_else(|_| DEFAULT_OVERRIDES_KEY.to_string()),
                public_dir: env::var("PUBLIC_DIR").ok().map(PathBuf::from),
                placeholder_image: env::var("PLACEHOLDER_IMAGE")
                    .unwrap_or_else(|_| DEFAULT_PLACEHOLDER_IMAGE.to_string()),
                editor_idle_timeout: Duration::from_secs(
                    env::var("EDITOR_IDLE_TIMEOUT_SECS")
                        .unwrap_or_else(|_| "1800".to_string())
                        .parse()
                        .map_err(|_| {
                            AppError::ConfigError("Invalid EDITOR_IDLE_TIMEOUT_SECS value".to_string())
                        })?,
                ),
                editor_max_sessions: env::var("EDITOR_MAX_SESSIONS")
                    .unwrap_or_else(|_| "256".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::ConfigError("Invalid EDITOR_MAX_SESSIONS value".to_string())
                    })?,
            },
            rental: RentalConfig {
                delay_ms: env::var("RENTAL_DELAY_MS")
                    .unwrap_or_else(|_| "1500".to_string())
                    .parse()
                    .map_err(|_| AppError::ConfigError("Invalid RENTAL_DELAY_MS value".to_string()))?,
                failure_rate,
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
