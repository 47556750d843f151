pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::application::handlers as application;
use crate::application::validation::MAX_RESUME_BYTES;
use crate::catalog::handlers as catalog;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog and view composition
        .route("/api/v1/home", get(catalog::handle_home))
        .route("/api/v1/jobs", get(catalog::handle_list_jobs))
        .route("/api/v1/jobs/:id", get(catalog::handle_get_job))
        .route("/api/v1/jobs/:id/share", get(catalog::handle_share_job))
        // Session
        .route("/api/v1/auth/login", post(session::handle_login))
        .route("/api/v1/auth/register", post(session::handle_register))
        .route("/api/v1/auth/logout", post(session::handle_logout))
        .route("/api/v1/me", get(session::handle_me))
        // Saved jobs
        .route(
            "/api/v1/jobs/:id/save",
            post(session::handle_save_job).delete(session::handle_unsave_job),
        )
        .route("/api/v1/saved-jobs", get(session::handle_saved_jobs))
        // Applications
        .route("/api/v1/applications", get(application::handle_list_applications))
        .route("/api/v1/jobs/:id/apply", post(application::handle_apply))
        // Oversized resumes must reach validation and report the size error
        // instead of dying at the transport's default body cap.
        .layer(DefaultBodyLimit::max(2 * MAX_RESUME_BYTES))
        .with_state(state)
}
