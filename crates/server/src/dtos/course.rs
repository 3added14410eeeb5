use database::services::catalog::CourseListing;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    pub code: String,
    pub name: String,
    pub instructors: Vec<InstructorResponse>,
    /// Codes of the courses that must be approved and passed first
    pub prerequisites: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InstructorResponse {
    pub id: i64,
    pub name: String,
}

impl From<CourseListing> for CourseResponse {
    fn from(listing: CourseListing) -> Self {
        Self {
            code: listing.course.code,
            name: listing.course.name,
            instructors: listing
                .instructors
                .into_iter()
                .map(|instructor| InstructorResponse {
                    id: instructor.id,
                    name: instructor.name,
                })
                .collect(),
            prerequisites: listing.prerequisites,
        }
    }
}
