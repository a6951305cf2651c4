use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Product;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub picture: Option<String>,
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,
}

/// Body of `POST /CreateUser`. Any `id` or timestamps sent by the client are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub picture: Option<String>,
}

/// Body of `PUT /UpdateUser`. Every mutable field is overwritten, so the full
/// record must be resupplied. A missing `id` decodes as `0` and is rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub picture: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn stored_user() -> User {
        let at = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
        User {
            id: 7,
            username: "bob".to_string(),
            email: "b@x.com".to_string(),
            password: "p".to_string(),
            first_name: "B".to_string(),
            last_name: "O".to_string(),
            created_at: at,
            updated_at: at,
            picture: None,
            products: None,
        }
    }

    #[test]
    fn user_serializes_snake_case_with_rfc3339_timestamps() {
        let value = serde_json::to_value(stored_user()).unwrap();

        assert_eq!(value["id"], 7);
        assert_eq!(value["first_name"], "B");
        assert_eq!(value["last_name"], "O");
        assert_eq!(value["created_at"], "2025-03-14T09:26:53Z");
        assert_eq!(value["updated_at"], "2025-03-14T09:26:53Z");
        assert!(value["picture"].is_null());
        assert!(value.get("products").is_none());
    }

    #[test]
    fn create_request_accepts_payload_without_id() {
        let payload = json!({
            "username": "bob",
            "email": "b@x.com",
            "password": "p",
            "first_name": "B",
            "last_name": "O"
        });

        let req: CreateUserRequest = serde_json::from_value(payload).unwrap();
        assert_eq!(req.username, "bob");
        assert_eq!(req.picture, None);
    }

    #[test]
    fn create_request_requires_credentials() {
        let payload = json!({ "username": "bob", "email": "b@x.com" });
        assert!(serde_json::from_value::<CreateUserRequest>(payload).is_err());
    }

    #[test]
    fn update_request_without_id_decodes_as_zero() {
        let payload = json!({
            "username": "bob",
            "email": "b@x.com",
            "password": "p",
            "first_name": "B",
            "last_name": "O"
        });

        let req: UpdateUserRequest = serde_json::from_value(payload).unwrap();
        assert_eq!(req.id, 0);
    }
}
