use crate::entities::{course_instructors, course_prerequisites, courses, instructors};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::collections::HashMap;

/// A course together with who teaches it and what it directly requires
#[derive(Clone, Debug, PartialEq)]
pub struct CourseListing {
    pub course: courses::Model,
    pub instructors: Vec<instructors::Model>,
    pub prerequisites: Vec<String>,
}

pub struct CatalogService;

impl CatalogService {
    /// Get every course with its instructors and direct prerequisites
    pub async fn get_course_catalog(db: &DatabaseConnection) -> Result<Vec<CourseListing>, DbErr> {
        let courses = courses::Entity::find()
            .order_by_asc(courses::Column::Code)
            .all(db)
            .await?;

        // Batch fetch all course-instructor relationships
        let course_instructors: Vec<(course_instructors::Model, instructors::Model)> =
            course_instructors::Entity::find()
                .find_also_related(instructors::Entity)
                .order_by_asc(course_instructors::Column::InstructorId)
                .all(db)
                .await?
                .into_iter()
                .filter_map(|(ci, instructor)| instructor.map(|i| (ci, i)))
                .collect();

        let prerequisites = course_prerequisites::Entity::find()
            .order_by_asc(course_prerequisites::Column::PrerequisiteCode)
            .all(db)
            .await?;

        // Build lookup maps
        let mut instructors_by_course: HashMap<String, Vec<instructors::Model>> = HashMap::new();
        for (ci, instructor) in course_instructors {
            instructors_by_course
                .entry(ci.course_code)
                .or_default()
                .push(instructor);
        }

        let mut prerequisites_by_course: HashMap<String, Vec<String>> = HashMap::new();
        for edge in prerequisites {
            prerequisites_by_course
                .entry(edge.course_code)
                .or_default()
                .push(edge.prerequisite_code);
        }

        Ok(courses
            .into_iter()
            .map(|course| CourseListing {
                instructors: instructors_by_course
                    .remove(&course.code)
                    .unwrap_or_default(),
                prerequisites: prerequisites_by_course
                    .remove(&course.code)
                    .unwrap_or_default(),
                course,
            })
            .collect())
    }
}
