pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod queries;
pub mod render;
pub mod services;
pub mod state;
pub mod validation;

pub use config::Config;
pub use database::{DbConn, DbPool};
pub use state::AppState;

use axum::{
    Json, Router,
    http::StatusCode,
    middleware::from_fn_with_state,
    routing::{get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Load configuration from environment variables
pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    Ok(Config::load()?)
}

/// Builds the application router.
///
/// Auth and health routes are public; everything else sits behind the JWT
/// middleware, which threads the acting user into request extensions.
pub fn app(state: AppState) -> Router {
    let protected = Router::new()
        .route(
            "/resumes",
            get(handlers::list_resumes).post(handlers::create_resume),
        )
        .route(
            "/resumes/{id}",
            put(handlers::update_resume).delete(handlers::delete_resume),
        )
        .route("/resumes/{id}/export", get(handlers::export_resume))
        .route("/templates", get(handlers::list_templates))
        .route("/jobs", get(handlers::list_jobs).post(handlers::create_job))
        .route(
            "/jobs/{id}",
            put(handlers::update_job).delete(handlers::delete_job),
        )
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware::jwt_auth_middleware,
        ));

    let api = Router::new()
        .route("/auth/register", post(handlers::register))
        .route("/auth/login", post(handlers::login))
        .route("/health", get(handlers::health_check))
        .merge(protected);

    Router::new()
        .nest("/api", api)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Fallback for unmatched routes.
async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": "Route not found",
            "code": "NOT_FOUND"
        })),
    )
}
