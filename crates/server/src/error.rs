use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::error::{ErrorCategory, RegistrationError};
use log::error;
use sea_orm::DbErr;
use serde_json::json;

/// Error returned by every handler, rendered as a JSON body with a matching status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "timestamp": chrono::Utc::now().naive_utc(),
            "status": self.status.as_u16(),
            "error": self.status.canonical_reason().unwrap_or_default(),
            "message": self.message,
        });

        (self.status, Json(body)).into_response()
    }
}

impl From<RegistrationError> for ApiError {
    fn from(err: RegistrationError) -> Self {
        let status = match err.category() {
            ErrorCategory::NotFound => StatusCode::NOT_FOUND,
            ErrorCategory::Conflict => StatusCode::CONFLICT,
            ErrorCategory::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCategory::Internal => {
                error!("Registration failed: {err}");
                return Self::internal();
            }
        };

        Self::new(status, err.to_string())
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        error!("Database error: {err}");
        Self::internal()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::Major;

    #[test]
    fn test_status_per_category() {
        let cases = [
            (RegistrationError::StudentNotFound(3), StatusCode::NOT_FOUND),
            (
                RegistrationError::CourseNotFound("XYZ".into()),
                StatusCode::NOT_FOUND,
            ),
            (
                RegistrationError::EnrollmentNotFound(3),
                StatusCode::NOT_FOUND,
            ),
            (
                RegistrationError::CourseAlreadyAdded("MTH101".into()),
                StatusCode::CONFLICT,
            ),
            (
                RegistrationError::WrongCourseMajor {
                    course_code: "MNG101".into(),
                    required: Major::MechanicalEngineering,
                    major: Major::ComputerEngineering,
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                RegistrationError::WrongCourseName(" ".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                RegistrationError::PrerequisiteNotMet {
                    course_code: "ECE221".into(),
                    prerequisite: "ECE121".into(),
                },
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (err, status) in cases {
            let message = err.to_string();
            let api_error = ApiError::from(err);
            assert_eq!(api_error.status, status);
            assert_eq!(api_error.message, message);
        }
    }

    #[test]
    fn test_database_errors_are_not_leaked() {
        let api_error = ApiError::from(RegistrationError::Database(DbErr::Custom(
            "connection refused".into(),
        )));
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.message, "Internal server error");
    }
}
