mod app_config;

pub use app_config::{
    AppConfig, CatalogConfig, CorsConfig, DEFAULT_OVERRIDES_KEY, DEFAULT_PLACEHOLDER_IMAGE,
    DatabaseConfig, RentalConfig, ServerConfig,
};
