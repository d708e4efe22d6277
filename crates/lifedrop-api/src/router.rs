//! Route definitions for the LifeDrop HTTP API.
//!
//! Routes are organized by domain. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor. Authorization is
//! enforced inside handlers and services (role checks re-fetch the user
//! record), not in route-level middleware.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, patch, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(request_routes())
        .merge(notification_routes())
        .merge(funding_routes())
        .merge(health_routes())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Session credential endpoints.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/jwt", post(handlers::auth::issue_token))
        .route("/logout", post(handlers::auth::logout))
}

/// User registration, donor directory, and profile endpoints.
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(handlers::user::register))
        .route("/users", get(handlers::user::list_users))
        .route("/donors", get(handlers::user::search_donors))
        .route("/users/role/{email}", get(handlers::user::get_role))
        .route("/users/update/{id}", patch(handlers::user::admin_update_user))
        .route("/users/{email}", get(handlers::user::get_user))
        .route("/users/{email}", patch(handlers::user::update_self))
}

/// Donation request lifecycle endpoints.
fn request_routes() -> Router<AppState> {
    Router::new()
        .route("/donation-requests", get(handlers::request::list_all))
        .route("/donation-requests", post(handlers::request::create))
        .route("/donation-requests/my", get(handlers::request::list_mine))
        .route("/donation-requests/{id}", get(handlers::request::get_one))
        .route("/donation-requests/{id}", patch(handlers::request::update))
        .route("/donation-requests/{id}", delete(handlers::request::delete))
}

/// Notification endpoints.
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", post(handlers::notification::create))
        .route("/notifications", get(handlers::notification::list))
        .route(
            "/notifications/mark-all-read/user",
            patch(handlers::notification::mark_all_read),
        )
        .route("/notifications/{id}", patch(handlers::notification::mark_read))
}

/// Funding, payment, and admin stats endpoints.
fn funding_routes() -> Router<AppState> {
    Router::new()
        .route("/funding", post(handlers::funding::create))
        .route("/funding", get(handlers::funding::list))
        .route(
            "/create-payment-intent",
            post(handlers::funding::create_payment_intent),
        )
        .route("/admin-stats", get(handlers::admin::admin_stats))
}

/// Liveness endpoints.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
