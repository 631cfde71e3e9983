pub mod app;
pub mod catalog;
pub mod config;
pub mod database;
pub mod editor;
pub mod error;
pub mod i18n;
pub mod models;
pub mod queries;
pub mod routes;
pub mod services;
pub mod storage;

pub use app::AppState;
pub use config::AppConfig;
pub use error::{AppError, Result};
