use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    DatabaseError(sqlx::Error),
    MigrationError(sqlx::migrate::MigrateError),
    StoreReadError(sqlx::Error),
    StoreWriteError(sqlx::Error),
    ConfigError(String),
    NotFound(String),
    BadRequest(String),
    Unauthorized(String),
    MethodNotAllowed(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DatabaseError(e) => write!(f, "Database error: {}", e),
            AppError::MigrationError(e) => write!(f, "Migration error: {}", e),
            AppError::StoreReadError(e) => write!(f, "DB query error: {}", e),
            AppError::StoreWriteError(e) => write!(f, "DB write error: {}", e),
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::MethodNotAllowed(msg) => write!(f, "Method not allowed: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err)
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        AppError::MigrationError(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(format!("Invalid request payload: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(format!("Invalid query string: {}", rejection.body_text()))
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::DatabaseError(_)
            | AppError::MigrationError(_)
            | AppError::StoreReadError(_)
            | AppError::StoreWriteError(_)
            | AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Store failures carry the driver's description back to the caller.
        let message = match self {
            AppError::DatabaseError(ref e) => {
                tracing::error!("Database error: {:?}", e);
                self.to_string()
            }
            AppError::MigrationError(ref e) => {
                tracing::error!("Migration error: {:?}", e);
                self.to_string()
            }
            AppError::StoreReadError(ref e) => {
                tracing::error!("Store read error: {:?}", e);
                self.to_string()
            }
            AppError::StoreWriteError(ref e) => {
                tracing::error!("Store write error: {:?}", e);
                self.to_string()
            }
            AppError::ConfigError(ref msg) => {
                tracing::error!("Configuration error: {}", msg);
                self.to_string()
            }
            AppError::NotFound(msg)
            | AppError::BadRequest(msg)
            | AppError::Unauthorized(msg)
            | AppError::MethodNotAllowed(msg) => msg,
        };

        let body = Json(json!({
            "message": message,
        }));

        (status, body).into_response()
    }
}
