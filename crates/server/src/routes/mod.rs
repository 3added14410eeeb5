pub mod admin;
pub mod auth;
pub mod course;
pub mod health;
pub mod student;

use crate::{
    dtos::{course::CourseResponse, enrollment::EnrollmentResponse},
    error::ApiError,
};
use database::{
    entities::enrollments,
    services::{catalog::CatalogService, enrollment::EnrollmentService},
};
use sea_orm::DatabaseConnection;

/// Helper function to convert enrollments to API responses with student and course names
async fn enrollment_responses(
    db: &DatabaseConnection,
    enrollments: Vec<enrollments::Model>,
) -> Result<Vec<EnrollmentResponse>, ApiError> {
    Ok(EnrollmentService::with_details(db, enrollments)
        .await?
        .into_iter()
        .map(EnrollmentResponse::from)
        .collect())
}

async fn enrollment_response(
    db: &DatabaseConnection,
    enrollment: enrollments::Model,
) -> Result<EnrollmentResponse, ApiError> {
    let id = enrollment.id;
    enrollment_responses(db, vec![enrollment])
        .await?
        .pop()
        .ok_or_else(|| {
            log::error!("Enrollment {id} references a missing student or course");
            ApiError::internal()
        })
}

async fn course_responses(db: &DatabaseConnection) -> Result<Vec<CourseResponse>, ApiError> {
    Ok(CatalogService::get_course_catalog(db)
        .await?
        .into_iter()
        .map(CourseResponse::from)
        .collect())
}
