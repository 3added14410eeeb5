use crate::routes::{admin, auth, course, health, student};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "jwt",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        auth::me,
        course::get_courses,
        student::get_dashboard,
        student::get_enrollments,
        student::register_course,
        admin::get_dashboard,
        admin::get_pending,
        admin::get_approved,
        admin::approve_enrollment,
        admin::reject_enrollment,
        admin::set_grade
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Authentication", description = "Authentication related endpoints"),
        (name = "Courses", description = "Course catalog"),
        (name = "Students", description = "Student registration endpoints"),
        (name = "Administration", description = "Enrollment approval and grading"),
    ),
    info(
        title = "Course Registration API",
        version = "1.0.0",
        description = "University course registration API",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
