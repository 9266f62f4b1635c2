pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::auth::handlers as auth;
use crate::jobs::handlers as jobs;
use crate::resumes::handlers as resumes;
use crate::state::AppState;
use crate::users::handlers as users;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/v1/auth/register", post(auth::handle_register))
        .route("/api/v1/auth/login", post(auth::handle_login))
        // Users
        .route("/api/v1/users/me", get(users::handle_get_me))
        .route("/api/v1/users/:id", get(users::handle_get_user))
        // Resumes
        .route(
            "/api/v1/resumes",
            get(resumes::handle_list_resumes).post(resumes::handle_upload_resume),
        )
        .route("/api/v1/resumes/:id", get(resumes::handle_get_resume))
        // Jobs
        .route(
            "/api/v1/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_create_job),
        )
        .route(
            "/api/v1/jobs/:id",
            get(jobs::handle_get_job)
                .put(jobs::handle_update_job)
                .delete(jobs::handle_delete_job),
        )
        // Analysis
        .route("/api/v1/analysis", post(analysis::handle_analyze))
        .route("/api/v1/analysis/score", post(analysis::handle_score))
        .route("/api/v1/skills/extract", post(analysis::handle_extract_skills))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
