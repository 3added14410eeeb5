use database::entities::students;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentResponse {
    pub id: i64,
    pub name: String,
    /// `COMPUTER_ENGINEERING` or `MECHANICAL_ENGINEERING`
    pub major: String,
}

impl From<students::Model> for StudentResponse {
    fn from(student: students::Model) -> Self {
        Self {
            id: student.id,
            name: student.name,
            major: student.major.to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MeResponse {
    pub username: String,
    pub role: String,
    pub student: Option<StudentResponse>,
    /// Where the client should send this user after login
    pub dashboard: String,
}
