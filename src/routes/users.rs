use axum::{Json, extract::State};
use http::Method;

use crate::{
    AppState,
    error::Result,
    models::{CreateUserRequest, MessageResponse, SignInRequest, UpdateUserRequest, User},
    queries::user_queries,
    utils::extractors::{AppJson, AppQuery, IdQuery, ensure_method},
};

pub async fn create_user(
    State(state): State<AppState>,
    method: Method,
    AppJson(payload): AppJson<CreateUserRequest>,
) -> Result<Json<User>> {
    ensure_method(&method, Method::POST)?;

    let user = user_queries::create_user(&state.db, &payload).await?;
    tracing::info!(user_id = user.id, "User saved");

    Ok(Json(user))
}

pub async fn get_users(State(state): State<AppState>, method: Method) -> Result<Json<Vec<User>>> {
    ensure_method(&method, Method::GET)?;

    let users = user_queries::get_all(&state.db).await?;

    Ok(Json(users))
}

pub async fn get_user(
    State(state): State<AppState>,
    method: Method,
    AppQuery(query): AppQuery<IdQuery>,
) -> Result<Json<User>> {
    ensure_method(&method, Method::GET)?;
    let id = query.parse("user")?;

    let user = user_queries::find_by_id(&state.db, id).await?;
    tracing::info!(user_id = user.id, "User fetched");

    Ok(Json(user))
}

pub async fn update_user(
    State(state): State<AppState>,
    method: Method,
    AppJson(payload): AppJson<UpdateUserRequest>,
) -> Result<Json<User>> {
    ensure_method(&method, Method::PUT)?;

    let user = user_queries::update_user(&state.db, &payload).await?;
    tracing::info!(user_id = user.id, "User updated");

    Ok(Json(user))
}

pub async fn delete_user(
    State(state): State<AppState>,
    method: Method,
    AppQuery(query): AppQuery<IdQuery>,
) -> Result<Json<MessageResponse>> {
    ensure_method(&method, Method::DELETE)?;
    let id = query.parse("user")?;

    user_queries::delete_user(&state.db, id).await?;
    tracing::info!(user_id = id, "User deleted");

    Ok(Json(MessageResponse::new("User deleted successfully")))
}

pub async fn sign_in_user(
    State(state): State<AppState>,
    method: Method,
    AppJson(creds): AppJson<SignInRequest>,
) -> Result<Json<User>> {
    ensure_method(&method, Method::POST)?;

    let user = user_queries::authenticate(&state.db, &creds).await?;
    tracing::info!(user_id = user.id, "User signed in");

    Ok(Json(user))
}
