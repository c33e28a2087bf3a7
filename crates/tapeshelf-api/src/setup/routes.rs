//! Route configuration and setup

use crate::constants::{AUTH_PATH, DIAGNOSTIC_PATH, UPLOAD_PATH, VIDEOTAPES_PATH};
use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tapeshelf_core::Config;
use tapeshelf_storage::PUBLIC_PREFIX;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Sub-routers owned by other services, mounted as-is.
///
/// They carry their own state and are nested after the application state has
/// been applied.
#[derive(Default)]
pub struct CollaboratorRoutes {
    /// Mounted at `/api/auth`
    pub auth: Router,
    /// Mounted at `/api/videotapes`
    pub videotapes: Router,
}

impl CollaboratorRoutes {
    pub fn with_auth(mut self, router: Router) -> Self {
        self.auth = router;
        self
    }

    pub fn with_videotapes(mut self, router: Router) -> Self {
        self.videotapes = router;
        self
    }
}

/// Setup all application routes
pub fn setup_routes(
    config: &Config,
    state: Arc<AppState>,
    collaborators: CollaboratorRoutes,
) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;

    let uploads_dir = ServeDir::new(state.uploads.store.base_path());

    let app_routes = Router::new()
        .route(
            UPLOAD_PATH,
            // Uploads are not size limited
            post(handlers::upload::upload_image).layer(DefaultBodyLimit::disable()),
        )
        .route(DIAGNOSTIC_PATH, get(handlers::diagnostic::test_database))
        .with_state(state);

    let app = app_routes
        .nest(AUTH_PATH, collaborators.auth)
        .nest(VIDEOTAPES_PATH, collaborators.videotapes)
        .nest_service(PUBLIC_PREFIX, uploads_dir)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

/// Setup CORS configuration
fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::PATCH,
        Method::DELETE,
        Method::OPTIONS,
    ];

    let cors = if config.allows_any_origin() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins
            .iter()
            .map(|o| o.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!("Invalid CORS origin: {}", e))?;

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(Any)
    };
    Ok(cors)
}
