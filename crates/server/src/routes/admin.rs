use crate::{
    auth::AdminUser,
    dtos::enrollment::{AdminDashboardResponse, EnrollmentResponse, GradeRequest},
    error::ApiError,
    extract::{AppJson, AppPath},
    state::AppState,
};
use axum::{Json, extract::State};
use database::services::registration::RegistrationService;
use log::info;

/// Get pending and approved enrollments together with the course catalog
#[utoipa::path(
    get,
    path = "/admin/dashboard",
    responses(
        (status = 200, description = "Dashboard retrieved successfully", body = AdminDashboardResponse),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 403, description = "Forbidden - administrator access required"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Administration"
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<AdminDashboardResponse>, ApiError> {
    let pending = RegistrationService::get_pending_enrollments(&state.db).await?;
    let approved = RegistrationService::get_approved_enrollments(&state.db).await?;

    info!(
        "Admin dashboard: {} pending, {} approved",
        pending.len(),
        approved.len()
    );

    Ok(Json(AdminDashboardResponse {
        pending: super::enrollment_responses(&state.db, pending).await?,
        approved: super::enrollment_responses(&state.db, approved).await?,
        courses: super::course_responses(&state.db).await?,
    }))
}

/// Get enrollments waiting for a decision
#[utoipa::path(
    get,
    path = "/admin/enrollments/pending",
    responses(
        (status = 200, description = "Pending enrollments", body = Vec<EnrollmentResponse>),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 403, description = "Forbidden - administrator access required"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Administration"
)]
pub async fn get_pending(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<Vec<EnrollmentResponse>>, ApiError> {
    let pending = RegistrationService::get_pending_enrollments(&state.db).await?;
    Ok(Json(super::enrollment_responses(&state.db, pending).await?))
}

/// Get approved enrollments
#[utoipa::path(
    get,
    path = "/admin/enrollments/approved",
    responses(
        (status = 200, description = "Approved enrollments", body = Vec<EnrollmentResponse>),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 403, description = "Forbidden - administrator access required"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Administration"
)]
pub async fn get_approved(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<Vec<EnrollmentResponse>>, ApiError> {
    let approved = RegistrationService::get_approved_enrollments(&state.db).await?;
    Ok(Json(
        super::enrollment_responses(&state.db, approved).await?,
    ))
}

/// Approve an enrollment
#[utoipa::path(
    post,
    path = "/admin/enrollments/{id}/approve",
    params(
        ("id" = i64, Path, description = "Enrollment ID")
    ),
    responses(
        (status = 200, description = "Enrollment approved", body = EnrollmentResponse),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 403, description = "Forbidden - administrator access required"),
        (status = 404, description = "Enrollment not found"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Administration"
)]
pub async fn approve_enrollment(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    AppPath(id): AppPath<i64>,
) -> Result<Json<EnrollmentResponse>, ApiError> {
    info!("{} approving enrollment {id}", admin.username);
    let enrollment = RegistrationService::approve_enrollment(&state.db, id).await?;
    Ok(Json(
        super::enrollment_response(&state.db, enrollment).await?,
    ))
}

/// Reject an enrollment
#[utoipa::path(
    post,
    path = "/admin/enrollments/{id}/reject",
    params(
        ("id" = i64, Path, description = "Enrollment ID")
    ),
    responses(
        (status = 200, description = "Enrollment rejected", body = EnrollmentResponse),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 403, description = "Forbidden - administrator access required"),
        (status = 404, description = "Enrollment not found"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Administration"
)]
pub async fn reject_enrollment(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    AppPath(id): AppPath<i64>,
) -> Result<Json<EnrollmentResponse>, ApiError> {
    info!("{} rejecting enrollment {id}", admin.username);
    let enrollment = RegistrationService::reject_enrollment(&state.db, id).await?;
    Ok(Json(
        super::enrollment_response(&state.db, enrollment).await?,
    ))
}

/// Record a grade and whether the student passed
#[utoipa::path(
    post,
    path = "/admin/enrollments/{id}/grade",
    params(
        ("id" = i64, Path, description = "Enrollment ID")
    ),
    request_body = GradeRequest,
    responses(
        (status = 200, description = "Grade recorded", body = EnrollmentResponse),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 403, description = "Forbidden - administrator access required"),
        (status = 404, description = "Enrollment not found"),
        (status = 422, description = "Grade body could not be deserialized"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Administration"
)]
pub async fn set_grade(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    AppPath(id): AppPath<i64>,
    AppJson(request): AppJson<GradeRequest>,
) -> Result<Json<EnrollmentResponse>, ApiError> {
    info!(
        "{} grading enrollment {id}: grade {}, passed {}",
        admin.username, request.grade, request.passed
    );
    let enrollment =
        RegistrationService::set_grade(&state.db, id, request.grade, request.passed).await?;
    Ok(Json(
        super::enrollment_response(&state.db, enrollment).await?,
    ))
}
