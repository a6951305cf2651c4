use axum::extract::{FromRequest, FromRequestParts};
use http::Method;
use serde::Deserialize;

use crate::error::{AppError, Result};

/// `Json` whose rejections surface as `AppError::BadRequest`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `Query` whose rejections surface as `AppError::BadRequest`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

#[derive(Debug, Default, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

impl IdQuery {
    /// Parses `?id=` for the named entity, e.g. "user" or "product".
    pub fn parse(&self, entity: &str) -> Result<i32> {
        let raw = self
            .id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::BadRequest(format!("Missing {} ID", entity)))?;

        raw.parse::<i32>()
            .map_err(|_| AppError::BadRequest(format!("Invalid {} ID", entity)))
    }
}

pub fn ensure_method(actual: &Method, expected: Method) -> Result<()> {
    if *actual != expected {
        return Err(AppError::MethodNotAllowed(format!(
            "{} is not allowed here, expected {}",
            actual, expected
        )));
    }
    Ok(())
}
