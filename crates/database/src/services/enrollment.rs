use crate::entities::{courses, enrollments, students};
use futures::try_join;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::collections::{HashMap, HashSet};

/// An enrollment joined with the student and course it references
#[derive(Clone, Debug, PartialEq)]
pub struct EnrollmentDetails {
    pub enrollment: enrollments::Model,
    pub student: students::Model,
    pub course: courses::Model,
}

pub struct EnrollmentService;

impl EnrollmentService {
    /// Attach student and course records to a list of enrollments, preserving order
    pub async fn with_details(
        db: &DatabaseConnection,
        enrollments: Vec<enrollments::Model>,
    ) -> Result<Vec<EnrollmentDetails>, DbErr> {
        if enrollments.is_empty() {
            return Ok(vec![]);
        }

        let student_ids: HashSet<i64> = enrollments.iter().map(|e| e.student_id).collect();
        let course_codes: HashSet<String> =
            enrollments.iter().map(|e| e.course_code.clone()).collect();

        // Batch fetch the referenced students and courses
        let (students, courses) = try_join!(
            students::Entity::find()
                .filter(students::Column::Id.is_in(student_ids))
                .all(db),
            courses::Entity::find()
                .filter(courses::Column::Code.is_in(course_codes))
                .all(db),
        )?;

        let students: HashMap<i64, students::Model> =
            students.into_iter().map(|s| (s.id, s)).collect();
        let courses: HashMap<String, courses::Model> =
            courses.into_iter().map(|c| (c.code.clone(), c)).collect();

        Ok(enrollments
            .into_iter()
            .filter_map(|enrollment| {
                let student = students.get(&enrollment.student_id)?.clone();
                let course = courses.get(&enrollment.course_code)?.clone();
                Some(EnrollmentDetails {
                    enrollment,
                    student,
                    course,
                })
            })
            .collect())
    }
}
