use crate::{
    entities::{course_prerequisites, courses, enrollments, students},
    error::RegistrationError,
};
use log::{info, warn};
use models::{EnrollmentStatus, Major};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder, SqlErr, TransactionTrait,
};
use std::collections::HashSet;

/// The enrollment workflow: registration checks, approval and grading.
///
/// Every mutating operation runs in its own transaction. Nothing is written before the
/// final insert or update, so a failed check leaves the store untouched.
pub struct RegistrationService;

impl RegistrationService {
    /// Registers a student for a course, creating a pending enrollment.
    ///
    /// Checks run in order and the first failure wins:
    /// the student exists, the course exists, the student is not already enrolled,
    /// the student's major may take the course, and every direct prerequisite has been
    /// approved and passed.
    pub async fn register_course(
        db: &DatabaseConnection,
        student_id: i64,
        course_code: &str,
    ) -> Result<enrollments::Model, RegistrationError> {
        let txn = db.begin().await?;

        let student = students::Entity::find_by_id(student_id)
            .one(&txn)
            .await?
            .ok_or(RegistrationError::StudentNotFound(student_id))?;

        let course = courses::Entity::find_by_id(course_code.to_owned())
            .one(&txn)
            .await?
            .ok_or_else(|| RegistrationError::CourseNotFound(course_code.to_owned()))?;

        // Best-effort check; the unique index on (student_id, course_code) is authoritative
        let existing = enrollments::Entity::find()
            .filter(enrollments::Column::StudentId.eq(student.id))
            .filter(enrollments::Column::CourseCode.eq(course.code.as_str()))
            .one(&txn)
            .await?;
        if existing.is_some() {
            return Err(RegistrationError::CourseAlreadyAdded(course.code));
        }

        if let Err(e) = Self::check_eligibility(&txn, &student, &course).await {
            warn!(
                "Rejected registration of student {} for {}: {e}",
                student.id, course.code
            );
            return Err(e);
        }

        let enrollment = Self::insert_pending(&txn, student.id, &course.code).await?;
        txn.commit().await?;

        info!(
            "Student {} registered for {}, enrollment {} is pending",
            student.id, course.code, enrollment.id
        );
        Ok(enrollment)
    }

    async fn check_eligibility<C: ConnectionTrait>(
        conn: &C,
        student: &students::Model,
        course: &courses::Model,
    ) -> Result<(), RegistrationError> {
        Self::validate_course_major(student, course)?;
        Self::check_prerequisites(conn, student, course).await
    }

    /// Courses prefixed by another major's subject code are closed to this student
    fn validate_course_major(
        student: &students::Model,
        course: &courses::Model,
    ) -> Result<(), RegistrationError> {
        if student.major.may_take(&course.code) {
            return Ok(());
        }

        // A refused course is always reserved for some other major
        Err(RegistrationError::WrongCourseMajor {
            course_code: course.code.clone(),
            required: Major::required_for(&course.code).unwrap_or(student.major),
            major: student.major,
        })
    }

    /// Only direct prerequisites are checked, the graph is never walked transitively
    async fn check_prerequisites<C: ConnectionTrait>(
        conn: &C,
        student: &students::Model,
        course: &courses::Model,
    ) -> Result<(), RegistrationError> {
        let prerequisites = Self::prerequisite_codes(conn, &course.code).await?;
        if prerequisites.is_empty() {
            return Ok(());
        }

        let completed: HashSet<String> = enrollments::Entity::find()
            .filter(enrollments::Column::StudentId.eq(student.id))
            .all(conn)
            .await?
            .into_iter()
            .filter(enrollments::Model::is_completed)
            .map(|enrollment| enrollment.course_code)
            .collect();

        match prerequisites
            .into_iter()
            .find(|prerequisite| !completed.contains(prerequisite))
        {
            Some(prerequisite) => Err(RegistrationError::PrerequisiteNotMet {
                course_code: course.code.clone(),
                prerequisite,
            }),
            None => Ok(()),
        }
    }

    /// Direct prerequisites of a course, ordered by code
    pub async fn prerequisite_codes<C: ConnectionTrait>(
        conn: &C,
        course_code: &str,
    ) -> Result<Vec<String>, sea_orm::DbErr> {
        Ok(course_prerequisites::Entity::find()
            .filter(course_prerequisites::Column::CourseCode.eq(course_code))
            .order_by_asc(course_prerequisites::Column::PrerequisiteCode)
            .all(conn)
            .await?
            .into_iter()
            .map(|edge| edge.prerequisite_code)
            .collect())
    }

    /// Inserts a pending enrollment, reporting a unique index violation as a duplicate
    async fn insert_pending<C: ConnectionTrait>(
        conn: &C,
        student_id: i64,
        course_code: &str,
    ) -> Result<enrollments::Model, RegistrationError> {
        let enrollment = enrollments::ActiveModel {
            student_id: Set(student_id),
            course_code: Set(course_code.to_owned()),
            status: Set(EnrollmentStatus::Pending),
            grade: Set(None),
            passed: Set(false),
            ..Default::default()
        };

        enrollment
            .insert(conn)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    RegistrationError::CourseAlreadyAdded(course_code.to_owned())
                }
                _ => RegistrationError::Database(e),
            })
    }

    /// All enrollments of a student
    pub async fn get_student_enrollments(
        db: &DatabaseConnection,
        student_id: i64,
    ) -> Result<Vec<enrollments::Model>, RegistrationError> {
        let (_, enrollments) = Self::get_student_with_enrollments(db, student_id).await?;
        Ok(enrollments)
    }

    /// A student record together with all of its enrollments, ordered by id
    pub async fn get_student_with_enrollments(
        db: &DatabaseConnection,
        student_id: i64,
    ) -> Result<(students::Model, Vec<enrollments::Model>), RegistrationError> {
        let student = students::Entity::find_by_id(student_id)
            .one(db)
            .await?
            .ok_or(RegistrationError::StudentNotFound(student_id))?;

        let enrollments = enrollments::Entity::find()
            .filter(enrollments::Column::StudentId.eq(student_id))
            .order_by_asc(enrollments::Column::Id)
            .all(db)
            .await?;

        Ok((student, enrollments))
    }

    pub async fn get_pending_enrollments(
        db: &DatabaseConnection,
    ) -> Result<Vec<enrollments::Model>, RegistrationError> {
        Self::get_enrollments_with_status(db, EnrollmentStatus::Pending).await
    }

    pub async fn get_approved_enrollments(
        db: &DatabaseConnection,
    ) -> Result<Vec<enrollments::Model>, RegistrationError> {
        Self::get_enrollments_with_status(db, EnrollmentStatus::Approved).await
    }

    async fn get_enrollments_with_status(
        db: &DatabaseConnection,
        status: EnrollmentStatus,
    ) -> Result<Vec<enrollments::Model>, RegistrationError> {
        Ok(enrollments::Entity::find()
            .filter(enrollments::Column::Status.eq(status))
            .order_by_asc(enrollments::Column::Id)
            .all(db)
            .await?)
    }

    /// Marks an enrollment approved, whatever its current status
    pub async fn approve_enrollment(
        db: &DatabaseConnection,
        enrollment_id: i64,
    ) -> Result<enrollments::Model, RegistrationError> {
        Self::set_status(db, enrollment_id, EnrollmentStatus::Approved).await
    }

    /// Marks an enrollment rejected, whatever its current status
    pub async fn reject_enrollment(
        db: &DatabaseConnection,
        enrollment_id: i64,
    ) -> Result<enrollments::Model, RegistrationError> {
        Self::set_status(db, enrollment_id, EnrollmentStatus::Rejected).await
    }

    // TODO: guard REJECTED -> APPROVED once the registrar decides whether re-approval is allowed
    async fn set_status(
        db: &DatabaseConnection,
        enrollment_id: i64,
        status: EnrollmentStatus,
    ) -> Result<enrollments::Model, RegistrationError> {
        let txn = db.begin().await?;

        let mut enrollment: enrollments::ActiveModel =
            Self::find_enrollment(&txn, enrollment_id).await?.into();
        enrollment.status = Set(status);
        let enrollment = enrollment.update(&txn).await?;

        txn.commit().await?;

        info!("Enrollment {enrollment_id} is now {status}");
        Ok(enrollment)
    }

    /// Records a grade and pass flag, overwriting any previous values
    pub async fn set_grade(
        db: &DatabaseConnection,
        enrollment_id: i64,
        grade: f64,
        passed: bool,
    ) -> Result<enrollments::Model, RegistrationError> {
        let txn = db.begin().await?;

        let mut enrollment: enrollments::ActiveModel =
            Self::find_enrollment(&txn, enrollment_id).await?.into();
        enrollment.grade = Set(Some(grade));
        enrollment.passed = Set(passed);
        let enrollment = enrollment.update(&txn).await?;

        txn.commit().await?;

        info!("Graded enrollment {enrollment_id}: grade {grade}, passed {passed}");
        Ok(enrollment)
    }

    async fn find_enrollment<C: ConnectionTrait>(
        conn: &C,
        enrollment_id: i64,
    ) -> Result<enrollments::Model, RegistrationError> {
        enrollments::Entity::find_by_id(enrollment_id)
            .one(conn)
            .await?
            .ok_or(RegistrationError::EnrollmentNotFound(enrollment_id))
    }

    /// The full course catalog, ordered by code
    pub async fn get_all_courses(
        db: &DatabaseConnection,
    ) -> Result<Vec<courses::Model>, RegistrationError> {
        Ok(courses::Entity::find()
            .order_by_asc(courses::Column::Code)
            .all(db)
            .await?)
    }
}
