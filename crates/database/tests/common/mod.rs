#![allow(dead_code)]

use database::{
    db::create_connection,
    entities::{enrollments, students},
    services::{registration::RegistrationService, seed::SeedService},
};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

/// A migrated and seeded in-memory database
pub async fn seeded_db() -> DatabaseConnection {
    let db = create_connection("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    SeedService::seed_if_empty(&db).await.unwrap();
    db
}

pub async fn student_id(db: &DatabaseConnection, name: &str) -> i64 {
    students::Entity::find()
        .filter(students::Column::Name.eq(name))
        .one(db)
        .await
        .unwrap()
        .unwrap_or_else(|| panic!("missing seeded student {name}"))
        .id
}

pub async fn ali(db: &DatabaseConnection) -> i64 {
    student_id(db, "Ali Khaled").await
}

pub async fn nour(db: &DatabaseConnection) -> i64 {
    student_id(db, "Nour Mahmoud").await
}

/// Registers, approves and passes a course for a student
pub async fn complete(
    db: &DatabaseConnection,
    student_id: i64,
    course_code: &str,
) -> enrollments::Model {
    let enrollment = RegistrationService::register_course(db, student_id, course_code)
        .await
        .unwrap_or_else(|e| panic!("registering {course_code} failed: {e}"));
    RegistrationService::approve_enrollment(db, enrollment.id)
        .await
        .unwrap();
    RegistrationService::set_grade(db, enrollment.id, 85.0, true)
        .await
        .unwrap()
}
