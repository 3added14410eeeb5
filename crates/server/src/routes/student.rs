use crate::{
    auth::StudentUser,
    dtos::{
        enrollment::{EnrollmentResponse, RegisterCourseRequest, StudentDashboardResponse},
        user::StudentResponse,
    },
    error::ApiError,
    extract::AppJson,
    state::AppState,
};
use axum::{Json, extract::State, http::StatusCode};
use database::{error::RegistrationError, services::registration::RegistrationService};

/// Get the student's profile, enrollments and the course catalog
#[utoipa::path(
    get,
    path = "/student/dashboard",
    responses(
        (status = 200, description = "Dashboard retrieved successfully", body = StudentDashboardResponse),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 403, description = "Forbidden - not a student login"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Students"
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    student_user: StudentUser,
) -> Result<Json<StudentDashboardResponse>, ApiError> {
    let student_id = student_user.student_id;
    let (student, enrollments) =
        RegistrationService::get_student_with_enrollments(&state.db, student_id).await?;

    Ok(Json(StudentDashboardResponse {
        student: StudentResponse::from(student),
        enrollments: super::enrollment_responses(&state.db, enrollments).await?,
        courses: super::course_responses(&state.db).await?,
    }))
}

/// Get all of the student's enrollments
#[utoipa::path(
    get,
    path = "/student/enrollments",
    responses(
        (status = 200, description = "Enrollments retrieved successfully", body = Vec<EnrollmentResponse>),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 403, description = "Forbidden - not a student login"),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Students"
)]
pub async fn get_enrollments(
    State(state): State<AppState>,
    student_user: StudentUser,
) -> Result<Json<Vec<EnrollmentResponse>>, ApiError> {
    let enrollments =
        RegistrationService::get_student_enrollments(&state.db, student_user.student_id).await?;

    Ok(Json(
        super::enrollment_responses(&state.db, enrollments).await?,
    ))
}

/// Register the authenticated student for a course
#[utoipa::path(
    post,
    path = "/student/register",
    request_body = RegisterCourseRequest,
    responses(
        (status = 201, description = "Enrollment created and pending approval", body = EnrollmentResponse),
        (status = 400, description = "Wrong major, unmet prerequisite or blank course code"),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 403, description = "Forbidden - not a student login"),
        (status = 404, description = "Student or course not found"),
        (status = 409, description = "Already enrolled in this course"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Students"
)]
pub async fn register_course(
    State(state): State<AppState>,
    student_user: StudentUser,
    AppJson(request): AppJson<RegisterCourseRequest>,
) -> Result<(StatusCode, Json<EnrollmentResponse>), ApiError> {
    let course_code = request.course_code.trim();
    if course_code.is_empty() {
        return Err(RegistrationError::WrongCourseName(request.course_code).into());
    }

    let enrollment =
        RegistrationService::register_course(&state.db, student_user.student_id, course_code)
            .await?;

    Ok((
        StatusCode::CREATED,
        Json(super::enrollment_response(&state.db, enrollment).await?),
    ))
}
