use crate::{auth::CurrentUser, dtos::course::CourseResponse, error::ApiError, state::AppState};
use axum::{Json, extract::State};

/// Get the full course catalog with instructors and prerequisites
#[utoipa::path(
    get,
    path = "/courses",
    responses(
        (status = 200, description = "List of courses retrieved successfully", body = Vec<CourseResponse>),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Courses"
)]
pub async fn get_courses(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Result<Json<Vec<CourseResponse>>, ApiError> {
    Ok(Json(super::course_responses(&state.db).await?))
}
