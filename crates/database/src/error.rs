use models::Major;
use sea_orm::DbErr;
use thiserror::Error;

/// How a failed registration operation should be reported to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    Conflict,
    InvalidRequest,
    Internal,
}

/// Errors raised by the registration workflow
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Student not found with ID: {0}")]
    StudentNotFound(i64),

    #[error("Course not found with code: {0}")]
    CourseNotFound(String),

    #[error("Student already enrolled in course: {0}")]
    CourseAlreadyAdded(String),

    #[error("{} course {course_code} not available for {major}", .required.title())]
    WrongCourseMajor {
        course_code: String,
        required: Major,
        major: Major,
    },

    #[error("Invalid course name: {0:?}")]
    WrongCourseName(String),

    #[error("Prerequisite not met: {prerequisite} is required for {course_code}")]
    PrerequisiteNotMet {
        course_code: String,
        prerequisite: String,
    },

    #[error("Enrollment not found with ID: {0}")]
    EnrollmentNotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl RegistrationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::StudentNotFound(_) | Self::CourseNotFound(_) | Self::EnrollmentNotFound(_) => {
                ErrorCategory::NotFound
            }
            Self::CourseAlreadyAdded(_) => ErrorCategory::Conflict,
            Self::WrongCourseMajor { .. }
            | Self::WrongCourseName(_)
            | Self::PrerequisiteNotMet { .. } => ErrorCategory::InvalidRequest,
            Self::Database(_) => ErrorCategory::Internal,
        }
    }
}
