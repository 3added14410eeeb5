use crate::{
    auth::CurrentUser,
    dtos::user::{MeResponse, StudentResponse},
    error::ApiError,
    state::AppState,
};
use axum::{Json, extract::State};
use database::entities::students;
use sea_orm::EntityTrait;

/// Returns the authenticated user, their linked student record and their dashboard
#[utoipa::path(
    get,
    path = "/me",
    responses(
        (status = 200, description = "Successfully authenticated", body = MeResponse),
        (status = 401, description = "Unauthorized - invalid or missing JWT, or unknown user"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Authentication"
)]
pub async fn me(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<MeResponse>, ApiError> {
    let student = match user.student_id {
        Some(student_id) => students::Entity::find_by_id(student_id)
            .one(&state.db)
            .await?
            .map(StudentResponse::from),
        None => None,
    };

    Ok(Json(MeResponse {
        dashboard: user.role.dashboard_path().to_owned(),
        role: user.role.to_string(),
        username: user.username,
        student,
    }))
}
