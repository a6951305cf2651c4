use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use http::Method;
use serde_json::json;

use crate::{AppState, database, error::Result, utils::extractors::ensure_method};

pub async fn ping(method: Method) -> Result<impl IntoResponse> {
    ensure_method(&method, Method::GET)?;

    Ok(Json(json!({ "message": "pong" })))
}

pub async fn health_check(method: Method) -> Result<impl IntoResponse> {
    ensure_method(&method, Method::GET)?;

    Ok((StatusCode::OK, Json(json!({ "status": "ok" }))))
}

pub async fn readiness_check(
    State(state): State<AppState>,
    method: Method,
) -> Result<impl IntoResponse> {
    ensure_method(&method, Method::GET)?;
    database::check_health(&state.db).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "database": "connected"
        })),
    ))
}
