pub mod course;
pub mod course_instructor;
pub mod course_prerequisite;
pub mod enrollment;
pub mod instructor;
pub mod student;
pub mod user;

pub use course as courses;
pub use course_instructor as course_instructors;
pub use course_prerequisite as course_prerequisites;
pub use enrollment as enrollments;
pub use instructor as instructors;
pub use student as students;
pub use user as users;
