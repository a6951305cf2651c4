use axum::{Router, extract::DefaultBodyLimit, http::HeaderValue};
use sqlx::PgPool;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::{
    config::{AppConfig, CorsConfig},
    database,
    error::{AppError, Result},
    routes,
};

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let pool = database::create_pool(&config.database).await?;
    let state = AppState { db: pool };

    router(state, &config.cors, config.server.max_body_size)
}

/// Wires the routes to `state` and wraps them in the shared layers.
pub fn router(state: AppState, cors: &CorsConfig, max_body_size: usize) -> Result<Router> {
    let allowed_origin = cors.allowed_origin.parse::<HeaderValue>().map_err(|_| {
        AppError::ConfigError(format!("Invalid CORS origin: {}", cors.allowed_origin))
    })?;

    let app = routes::create_router()
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            http::header::ACCESS_CONTROL_ALLOW_ORIGIN,
            allowed_origin,
        ))
        .layer(SetResponseHeaderLayer::overriding(
            http::header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            http::header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .with_state(state);

    Ok(app)
}
