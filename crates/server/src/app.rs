use crate::{
    doc::ApiDoc,
    routes::{admin, auth, course, health, student},
    state::AppState,
};
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Routes that need an authenticated caller
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(auth::me))
        .route("/courses", get(course::get_courses))
        .route("/student/dashboard", get(student::get_dashboard))
        .route("/student/enrollments", get(student::get_enrollments))
        .route("/student/register", post(student::register_course))
        .route("/admin/dashboard", get(admin::get_dashboard))
        .route("/admin/enrollments/pending", get(admin::get_pending))
        .route("/admin/enrollments/approved", get(admin::get_approved))
        .route(
            "/admin/enrollments/{id}/approve",
            post(admin::approve_enrollment),
        )
        .route(
            "/admin/enrollments/{id}/reject",
            post(admin::reject_enrollment),
        )
        .route("/admin/enrollments/{id}/grade", post(admin::set_grade))
}

/// Routes that are reachable without a token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
