mod common;

use common::{ali, complete, nour, seeded_db};
use database::{
    entities::{enrollments, students},
    error::{ErrorCategory, RegistrationError},
    services::registration::RegistrationService,
};
use models::{EnrollmentStatus, Major};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait, ModelTrait, PaginatorTrait};

fn ids(enrollments: &[enrollments::Model]) -> Vec<i64> {
    enrollments.iter().map(|e| e.id).collect()
}

#[tokio::test]
async fn test_registration_scenario() {
    let db = seeded_db().await;
    let ali = ali(&db).await;

    let ece121 = RegistrationService::register_course(&db, ali, "ECE121")
        .await
        .unwrap();
    assert_eq!(ece121.status, EnrollmentStatus::Pending);
    assert_eq!(ece121.grade, None);
    assert!(!ece121.passed);

    let err = RegistrationService::register_course(&db, ali, "MNG101")
        .await
        .unwrap_err();
    assert!(matches!(err, RegistrationError::WrongCourseMajor { .. }));

    let err = RegistrationService::register_course(&db, ali, "ECE221")
        .await
        .unwrap_err();
    match err {
        RegistrationError::PrerequisiteNotMet {
            course_code,
            prerequisite,
        } => {
            assert_eq!(course_code, "ECE221");
            assert_eq!(prerequisite, "ECE121");
        }
        other => panic!("expected PrerequisiteNotMet, got {other:?}"),
    }

    RegistrationService::approve_enrollment(&db, ece121.id)
        .await
        .unwrap();
    RegistrationService::set_grade(&db, ece121.id, 90.0, true)
        .await
        .unwrap();

    let ece221 = RegistrationService::register_course(&db, ali, "ECE221")
        .await
        .unwrap();
    assert_eq!(ece221.status, EnrollmentStatus::Pending);
    assert_eq!(ece221.course_code, "ECE221");
}

#[tokio::test]
async fn test_seeded_students_start_at_250001() {
    let db = seeded_db().await;
    assert_eq!(ali(&db).await, 250001);
    assert_eq!(nour(&db).await, 250002);
}

#[tokio::test]
async fn test_unknown_student_and_course() {
    let db = seeded_db().await;

    let err = RegistrationService::register_course(&db, 1, "MTH101")
        .await
        .unwrap_err();
    assert!(matches!(err, RegistrationError::StudentNotFound(1)));
    assert_eq!(err.category(), ErrorCategory::NotFound);

    let err = RegistrationService::register_course(&db, ali(&db).await, "CHM101")
        .await
        .unwrap_err();
    assert!(matches!(err, RegistrationError::CourseNotFound(_)));
    assert_eq!(err.to_string(), "Course not found with code: CHM101");
}

#[tokio::test]
async fn test_unknown_student_wins_over_unknown_course() {
    let db = seeded_db().await;

    let err = RegistrationService::register_course(&db, 42, "NOPE000")
        .await
        .unwrap_err();
    assert!(matches!(err, RegistrationError::StudentNotFound(42)));
}

#[tokio::test]
async fn test_duplicate_registration_is_rejected() {
    let db = seeded_db().await;
    let nour = nour(&db).await;

    RegistrationService::register_course(&db, nour, "MTH101")
        .await
        .unwrap();
    let err = RegistrationService::register_course(&db, nour, "MTH101")
        .await
        .unwrap_err();

    assert!(matches!(err, RegistrationError::CourseAlreadyAdded(_)));
    assert_eq!(
        err.to_string(),
        "Student already enrolled in course: MTH101"
    );
    assert_eq!(err.category(), ErrorCategory::Conflict);
    assert_eq!(enrollments::Entity::find().count(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn test_duplicate_check_runs_before_eligibility() {
    let db = seeded_db().await;
    let ali = ali(&db).await;

    let enrollment = RegistrationService::register_course(&db, ali, "ECE121")
        .await
        .unwrap();
    RegistrationService::reject_enrollment(&db, enrollment.id)
        .await
        .unwrap();

    // Even a rejected enrollment blocks registering again
    let err = RegistrationService::register_course(&db, ali, "ECE121")
        .await
        .unwrap_err();
    assert!(matches!(err, RegistrationError::CourseAlreadyAdded(_)));
}

#[tokio::test]
async fn test_major_restrictions() {
    let db = seeded_db().await;
    let ali = ali(&db).await;
    let nour = nour(&db).await;

    for code in ["ECE121", "ECE221", "ECE422"] {
        let err = RegistrationService::register_course(&db, nour, code)
            .await
            .unwrap_err();
        assert!(matches!(err, RegistrationError::WrongCourseMajor { .. }));
        assert!(err.to_string().contains(code), "{code}: {err}");
        assert_eq!(err.category(), ErrorCategory::InvalidRequest);
    }

    for code in ["MNG101", "MNG201", "MNG401"] {
        let err = RegistrationService::register_course(&db, ali, code)
            .await
            .unwrap_err();
        assert!(matches!(err, RegistrationError::WrongCourseMajor { .. }));
    }

    // Shared courses are open to both majors
    assert!(
        RegistrationService::register_course(&db, ali, "MTH101")
            .await
            .is_ok()
    );
    assert!(
        RegistrationService::register_course(&db, nour, "MTH101")
            .await
            .is_ok()
    );
    assert!(
        RegistrationService::register_course(&db, nour, "MNG101")
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_major_is_checked_before_prerequisites() {
    let db = seeded_db().await;

    // MNG302 has unmet prerequisites too, but the major rule fires first
    let err = RegistrationService::register_course(&db, ali(&db).await, "MNG302")
        .await
        .unwrap_err();
    assert!(matches!(err, RegistrationError::WrongCourseMajor { .. }));
}

#[tokio::test]
async fn test_unprefixed_course_is_open_to_everyone() {
    let db = seeded_db().await;

    database::entities::courses::ActiveModel {
        code: Set("HUM110".to_owned()),
        name: Set("Technical Writing".to_owned()),
    }
    .insert(&db)
    .await
    .unwrap();

    assert!(
        RegistrationService::register_course(&db, ali(&db).await, "HUM110")
            .await
            .is_ok()
    );
    assert!(
        RegistrationService::register_course(&db, nour(&db).await, "HUM110")
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_prerequisites_need_approval_and_pass() {
    let db = seeded_db().await;
    let nour = nour(&db).await;

    let mth101 = RegistrationService::register_course(&db, nour, "MTH101")
        .await
        .unwrap();

    // Passed but still pending
    RegistrationService::set_grade(&db, mth101.id, 75.0, true)
        .await
        .unwrap();
    assert!(matches!(
        RegistrationService::register_course(&db, nour, "MTH102").await,
        Err(RegistrationError::PrerequisiteNotMet { .. })
    ));

    // Approved but failed
    RegistrationService::approve_enrollment(&db, mth101.id)
        .await
        .unwrap();
    RegistrationService::set_grade(&db, mth101.id, 40.0, false)
        .await
        .unwrap();
    assert!(matches!(
        RegistrationService::register_course(&db, nour, "MTH102").await,
        Err(RegistrationError::PrerequisiteNotMet { .. })
    ));

    // Approved and passed
    RegistrationService::set_grade(&db, mth101.id, 70.0, true)
        .await
        .unwrap();
    assert!(
        RegistrationService::register_course(&db, nour, "MTH102")
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_every_prerequisite_must_be_covered() {
    let db = seeded_db().await;
    let nour = nour(&db).await;

    complete(&db, nour, "MTH101").await;
    let mng101 = complete(&db, nour, "MNG101").await;

    // MNG201 requires MNG101 and MTH101
    let mng201 = RegistrationService::register_course(&db, nour, "MNG201")
        .await
        .unwrap();

    // Removing a covering enrollment makes the course unreachable again
    mng201.delete(&db).await.unwrap();
    mng101.delete(&db).await.unwrap();

    let err = RegistrationService::register_course(&db, nour, "MNG201")
        .await
        .unwrap_err();
    match err {
        RegistrationError::PrerequisiteNotMet { prerequisite, .. } => {
            assert_eq!(prerequisite, "MNG101")
        }
        other => panic!("expected PrerequisiteNotMet, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rejecting_a_prerequisite_revokes_it() {
    let db = seeded_db().await;
    let ali = ali(&db).await;

    let ece121 = complete(&db, ali, "ECE121").await;
    RegistrationService::reject_enrollment(&db, ece121.id)
        .await
        .unwrap();

    assert!(matches!(
        RegistrationService::register_course(&db, ali, "ECE221").await,
        Err(RegistrationError::PrerequisiteNotMet { .. })
    ));
}

#[tokio::test]
async fn test_only_direct_prerequisites_are_checked() {
    let db = seeded_db().await;
    let ali = ali(&db).await;

    // ECE322 requires ECE221 which requires ECE121. Completing ECE221 without an
    // ECE121 enrollment on record is enough.
    let ece221 = enrollments::ActiveModel {
        student_id: Set(ali),
        course_code: Set("ECE221".to_owned()),
        status: Set(EnrollmentStatus::Approved),
        grade: Set(Some(88.0)),
        passed: Set(true),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();
    assert!(ece221.is_completed());

    assert!(
        RegistrationService::register_course(&db, ali, "ECE322")
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_failed_registration_persists_nothing() {
    let db = seeded_db().await;
    let ali = ali(&db).await;

    let _ = RegistrationService::register_course(&db, ali, "ECE421").await;
    let _ = RegistrationService::register_course(&db, ali, "MNG101").await;
    let _ = RegistrationService::register_course(&db, ali, "XYZ999").await;

    assert_eq!(enrollments::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_transitions_are_unguarded_and_idempotent() {
    let db = seeded_db().await;
    let enrollment = RegistrationService::register_course(&db, ali(&db).await, "MTH101")
        .await
        .unwrap();

    let approved = RegistrationService::approve_enrollment(&db, enrollment.id)
        .await
        .unwrap();
    assert_eq!(approved.status, EnrollmentStatus::Approved);

    let again = RegistrationService::approve_enrollment(&db, enrollment.id)
        .await
        .unwrap();
    assert_eq!(again.status, EnrollmentStatus::Approved);

    let rejected = RegistrationService::reject_enrollment(&db, enrollment.id)
        .await
        .unwrap();
    assert_eq!(rejected.status, EnrollmentStatus::Rejected);

    let rejected = RegistrationService::reject_enrollment(&db, enrollment.id)
        .await
        .unwrap();
    assert_eq!(rejected.status, EnrollmentStatus::Rejected);

    // Rejected enrollments can be approved again
    let approved = RegistrationService::approve_enrollment(&db, enrollment.id)
        .await
        .unwrap();
    assert_eq!(approved.status, EnrollmentStatus::Approved);

    let stored = enrollments::Entity::find_by_id(enrollment.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, EnrollmentStatus::Approved);
}

#[tokio::test]
async fn test_missing_enrollment() {
    let db = seeded_db().await;

    for result in [
        RegistrationService::approve_enrollment(&db, 999).await,
        RegistrationService::reject_enrollment(&db, 999).await,
        RegistrationService::set_grade(&db, 999, 50.0, false).await,
    ] {
        let err = result.unwrap_err();
        assert!(matches!(err, RegistrationError::EnrollmentNotFound(999)));
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }
}

#[tokio::test]
async fn test_set_grade_overwrites_previous_values() {
    let db = seeded_db().await;
    let ali = ali(&db).await;
    let enrollment = RegistrationService::register_course(&db, ali, "ECE121")
        .await
        .unwrap();

    // Grading does not depend on status
    let graded = RegistrationService::set_grade(&db, enrollment.id, 92.5, true)
        .await
        .unwrap();
    assert_eq!(graded.status, EnrollmentStatus::Pending);
    assert_eq!(graded.grade, Some(92.5));
    assert!(graded.passed);

    RegistrationService::set_grade(&db, enrollment.id, 48.0, false)
        .await
        .unwrap();

    let enrollments = RegistrationService::get_student_enrollments(&db, ali)
        .await
        .unwrap();
    assert_eq!(enrollments.len(), 1);
    assert_eq!(enrollments[0].grade, Some(48.0));
    assert!(!enrollments[0].passed);
}

#[tokio::test]
async fn test_enrollment_queries() {
    let db = seeded_db().await;
    let ali = ali(&db).await;
    let nour = nour(&db).await;

    let a = RegistrationService::register_course(&db, ali, "MTH101")
        .await
        .unwrap();
    let b = RegistrationService::register_course(&db, ali, "ECE121")
        .await
        .unwrap();
    let c = RegistrationService::register_course(&db, nour, "MNG101")
        .await
        .unwrap();

    RegistrationService::approve_enrollment(&db, a.id)
        .await
        .unwrap();
    RegistrationService::reject_enrollment(&db, c.id)
        .await
        .unwrap();

    let pending = RegistrationService::get_pending_enrollments(&db)
        .await
        .unwrap();
    assert_eq!(ids(&pending), vec![b.id]);

    let approved = RegistrationService::get_approved_enrollments(&db)
        .await
        .unwrap();
    assert_eq!(ids(&approved), vec![a.id]);

    let alis = RegistrationService::get_student_enrollments(&db, ali)
        .await
        .unwrap();
    assert_eq!(ids(&alis), vec![a.id, b.id]);

    let nours = RegistrationService::get_student_enrollments(&db, nour)
        .await
        .unwrap();
    assert_eq!(nours.len(), 1);
    assert_eq!(nours[0].status, EnrollmentStatus::Rejected);

    assert!(matches!(
        RegistrationService::get_student_enrollments(&db, 7).await,
        Err(RegistrationError::StudentNotFound(7))
    ));
}

#[tokio::test]
async fn test_student_with_enrollments() {
    let db = seeded_db().await;
    let nour = nour(&db).await;

    complete(&db, nour, "MTH101").await;
    RegistrationService::register_course(&db, nour, "MTH102")
        .await
        .unwrap();

    let (student, enrollments) = RegistrationService::get_student_with_enrollments(&db, nour)
        .await
        .unwrap();
    assert_eq!(student.name, "Nour Mahmoud");
    assert_eq!(student.major, Major::MechanicalEngineering);

    let codes: Vec<_> = enrollments.iter().map(|e| e.course_code.as_str()).collect();
    assert_eq!(codes, ["MTH101", "MTH102"]);

    assert!(matches!(
        RegistrationService::get_student_with_enrollments(&db, 7).await,
        Err(RegistrationError::StudentNotFound(7))
    ));
}

#[tokio::test]
async fn test_new_student_without_enrollments() {
    let db = seeded_db().await;

    let student = students::ActiveModel {
        name: Set("Youssef Adel".to_owned()),
        major: Set(Major::MechanicalEngineering),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();
    assert_eq!(student.id, 250003);

    let enrollments = RegistrationService::get_student_enrollments(&db, student.id)
        .await
        .unwrap();
    assert!(enrollments.is_empty());
}

#[tokio::test]
async fn test_get_all_courses() {
    let db = seeded_db().await;

    let courses = RegistrationService::get_all_courses(&db).await.unwrap();
    assert_eq!(courses.len(), 15);
    assert_eq!(courses[0].code, "ECE121");
    assert!(courses.windows(2).all(|w| w[0].code < w[1].code));

    for prefix in ["MTH", "ECE", "MNG"] {
        assert!(courses.iter().any(|c| c.code.starts_with(prefix)));
    }
}
