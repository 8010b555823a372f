pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::resumes::handlers;
use crate::state::AppState;

/// Upper bound on an uploaded resume (multi-page scanned PDFs get large).
const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Candidate side
        .route("/upload-resume", post(handlers::handle_upload))
        // Interviewer side
        .route("/analyze-resume/:id", post(handlers::handle_analyze))
        .route(
            "/resume/:id",
            get(handlers::handle_get_resume).delete(handlers::handle_delete_resume),
        )
        .route("/resumes", get(handlers::handle_list_resumes))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
