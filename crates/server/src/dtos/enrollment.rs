use database::services::enrollment::EnrollmentDetails;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::course::CourseResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct EnrollmentResponse {
    pub id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub course_code: String,
    pub course_name: String,
    /// One of `PENDING`, `APPROVED` or `REJECTED`
    pub status: String,
    pub grade: Option<f64>,
    pub passed: bool,
}

impl From<EnrollmentDetails> for EnrollmentResponse {
    fn from(details: EnrollmentDetails) -> Self {
        Self {
            id: details.enrollment.id,
            student_id: details.student.id,
            student_name: details.student.name,
            course_code: details.course.code,
            course_name: details.course.name,
            status: details.enrollment.status.to_string(),
            grade: details.enrollment.grade,
            passed: details.enrollment.passed,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterCourseRequest {
    pub course_code: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct GradeRequest {
    pub grade: f64,
    pub passed: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminDashboardResponse {
    pub pending: Vec<EnrollmentResponse>,
    pub approved: Vec<EnrollmentResponse>,
    pub courses: Vec<CourseResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentDashboardResponse {
    pub student: super::user::StudentResponse,
    pub enrollments: Vec<EnrollmentResponse>,
    pub courses: Vec<CourseResponse>,
}
