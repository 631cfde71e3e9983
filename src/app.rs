use std::{any::Any, sync::Arc};

use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::{
    catalog::{CatalogStore, ImageResolver, default_products},
    config::{AppConfig, CatalogConfig, RentalConfig},
    database,
    editor::EditorSessions,
    error::{AppError, Result},
    i18n::{DefaultTranslations, LanguageTable, Translator},
    routes,
    services::RentalService,
    storage::{KeyValueStore, SqliteStorage},
};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub editor: EditorSessions,
    pub rentals: RentalService,
    pub images: ImageResolver,
    pub translator: Arc<dyn Translator>,
}

impl AppState {
    /// State with the default translations; mount a table with [`Self::with_translator`].
    pub fn new(catalog: CatalogStore, catalog_config: &CatalogConfig, rental: RentalConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            editor: EditorSessions::with_limits(
                catalog_config.editor_idle_timeout,
                catalog_config.editor_max_sessions,
            ),
            rentals: RentalService::new(rental),
            images: ImageResolver::new(
                catalog_config.public_dir.clone(),
                catalog_config.placeholder_image.clone(),
            ),
            translator: Arc::new(DefaultTranslations),
        }
    }

    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = translator;
        self
    }

    pub fn from_storage(
        storage: Arc<dyn KeyValueStore>,
        catalog_config: &CatalogConfig,
        rental: RentalConfig,
    ) -> Result<Self> {
        let catalog = CatalogStore::new(
            default_products(),
            storage,
            catalog_config.overrides_key.clone(),
        )?;
        Ok(Self::new(catalog, catalog_config, rental))
    }
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let pool = database::create_pool(&config.database).await?;
    let storage = Arc::new(SqliteStorage::new(pool));
    let state = AppState::from_storage(storage, &config.catalog, config.rental.clone())?
        .with_translator(Arc::new(LanguageTable));

    tracing::info!(
        products = state.catalog.defaults().len(),
        "Catalog loaded"
    );

    let allowed_origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|_| {
                AppError::ConfigError(format!("Invalid CORS origin: {}", origin))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_origin(allowed_origins);

    let app = router(state)
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors);

    Ok(app)
}

/// Routes with tracing and the panic boundary, without CORS or body limits.
pub fn router(state: AppState) -> Router {
    routes::create_router()
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!("Request handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": "Something went wrong" })),
    )
        .into_response()
}
