/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use taskdeck_api::{app::{build_router, AppState}, config::Config};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let state = AppState::new(config);
/// let app = build_router(state);
///
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:8002").await?;
/// axum::serve(listener, app).await?;
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, patch},
    Router,
};
use std::sync::Arc;
use taskdeck_shared::store::Store;
use tokio::sync::RwLock;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// The store is owned here rather than living in a global, so every router
/// (and every test) gets its own.
#[derive(Clone)]
pub struct AppState {
    /// In-memory users and tasks
    pub store: Arc<RwLock<Store>>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state with an empty store
    pub fn new(config: Config) -> Self {
        Self {
            store: Arc::new(RwLock::new(Store::new())),
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET    /health
/// ├── GET    /openapi.json
/// ├── /users
/// │   ├── POST   /                      create_user
/// │   ├── GET    /?name=                search_users
/// │   ├── GET    /:user_id              get_user
/// │   ├── DELETE /:user_id              delete_user
/// │   ├── POST   /:user_id/tasks        create_task
/// │   └── GET    /:user_id/tasks        get_tasks_by_user
/// └── /tasks
///     ├── GET    /                      get_all_tasks
///     ├── PATCH  /:task_id              update_task
///     └── DELETE /:task_id              delete_task
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
pub fn build_router(state: AppState) -> Router {
    use crate::{openapi, routes};

    let cors = cors_layer(&state.config);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/openapi.json", get(openapi::openapi_json))
        .route(
            "/users",
            get(routes::users::search_users).post(routes::users::create_user),
        )
        .route(
            "/users/:user_id",
            get(routes::users::get_user).delete(routes::users::delete_user),
        )
        .route(
            "/users/:user_id/tasks",
            get(routes::tasks::get_tasks_by_user).post(routes::tasks::create_task),
        )
        .route("/tasks", get(routes::tasks::get_all_tasks))
        .route(
            "/tasks/:task_id",
            patch(routes::tasks::update_task).delete(routes::tasks::delete_task),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_permissive() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .api
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(3600))
}
