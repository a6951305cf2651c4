use axum::{
    extract::Request,
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::AppError;

/// Answers every cross-origin preflight with an empty 204 before routing.
pub async fn preflight_middleware(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        tracing::debug!(path = %req.uri().path(), "Preflight request handled");
        return StatusCode::NO_CONTENT.into_response();
    }

    next.run(req).await
}

pub async fn method_not_allowed(method: Method) -> AppError {
    AppError::MethodNotAllowed(format!("{} is not allowed on this route", method))
}

pub async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
