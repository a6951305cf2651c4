mod health;
mod products;
mod users;

use axum::{
    Router,
    handler::Handler,
    middleware,
    routing::{MethodFilter, MethodRouter, on},
};

use crate::{
    AppState,
    middleware::{method_not_allowed, preflight_middleware, route_not_found},
};

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/CreateUser", only(MethodFilter::POST, users::create_user))
        .route("/GetUsers", only(MethodFilter::GET, users::get_users))
        .route("/GetUser", only(MethodFilter::GET, users::get_user))
        .route("/UpdateUser", only(MethodFilter::PUT, users::update_user))
        .route("/DeleteUser", only(MethodFilter::DELETE, users::delete_user))
        .route("/SignInUser", only(MethodFilter::POST, users::sign_in_user))
        .route(
            "/CreateProduct",
            only(MethodFilter::POST, products::create_product),
        )
        .route("/GetProducts", only(MethodFilter::GET, products::get_products))
        .route(
            "/GetProductByID/",
            only(MethodFilter::GET, products::get_product_by_id),
        )
        .route(
            "/GetProductByID/{*rest}",
            only(MethodFilter::GET, products::get_product_by_id),
        )
        .route(
            "/UpdateProduct/",
            only(MethodFilter::PUT, products::update_product),
        )
        .route(
            "/UpdateProduct/{*rest}",
            only(MethodFilter::PUT, products::update_product),
        )
        .route("/ping", only(MethodFilter::GET, health::ping))
        .route("/health", only(MethodFilter::GET, health::health_check))
        .route("/health/ready", only(MethodFilter::GET, health::readiness_check))
        .fallback(route_not_found)
        .layer(middleware::from_fn(preflight_middleware))
}

/// Binds `handler` to a single method; every other method gets a 405.
fn only<H, T>(filter: MethodFilter, handler: H) -> MethodRouter<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    on(filter, handler).fallback(method_not_allowed)
}
