use crate::entities::{
    course_instructors, course_prerequisites, courses, instructors, students, users,
};
use crate::services::user::UserService;
use log::info;
use models::{Major, Role};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, TransactionTrait,
};

/// Instructors of the starter catalog
const INSTRUCTORS: [&str; 4] = [
    "Dr. Ahmed Hassan",
    "Dr. Sarah Mohamed",
    "Dr. Omar Ali",
    "Dr. Fatima Ibrahim",
];

/// Course code, course name and the index of its instructor in [`INSTRUCTORS`]
const COURSES: [(&str, &str, usize); 15] = [
    ("MTH101", "Calculus I", 0),
    ("MTH102", "Calculus II", 0),
    ("MTH201", "Linear Algebra", 1),
    ("MTH301", "Differential Equations", 1),
    // Computer Engineering
    ("ECE121", "Digital Logic Design", 2),
    ("ECE221", "Data Structures", 2),
    ("ECE321", "Control Systems", 2),
    ("ECE322", "Computer Architecture", 3),
    ("ECE421", "Embedded Systems", 3),
    ("ECE422", "Artificial Intelligence", 3),
    // Mechanical Engineering
    ("MNG101", "Engineering Mechanics", 1),
    ("MNG201", "Thermodynamics", 1),
    ("MNG301", "Fluid Mechanics", 0),
    ("MNG302", "Heat Transfer", 0),
    ("MNG401", "Machine Design", 2),
];

/// Direct prerequisite edges as (course, required course)
const PREREQUISITES: [(&str, &str); 19] = [
    ("MTH102", "MTH101"),
    ("MTH201", "MTH101"),
    ("MTH301", "MTH102"),
    ("MTH301", "MTH201"),
    ("ECE221", "ECE121"),
    ("ECE321", "ECE121"),
    ("ECE321", "MTH201"),
    ("ECE322", "ECE221"),
    ("ECE421", "ECE321"),
    ("ECE421", "ECE322"),
    ("ECE422", "ECE221"),
    ("ECE422", "MTH301"),
    ("MNG201", "MNG101"),
    ("MNG201", "MTH101"),
    ("MNG301", "MNG201"),
    ("MNG301", "MTH102"),
    ("MNG302", "MNG301"),
    ("MNG401", "MNG101"),
    ("MNG401", "MTH201"),
];

/// Student name, major and the login created for them
const STUDENTS: [(&str, Major, &str, &str); 2] = [
    ("Ali Khaled", Major::ComputerEngineering, "ali", "ali123"),
    (
        "Nour Mahmoud",
        Major::MechanicalEngineering,
        "nour",
        "nour123",
    ),
];

const ADMIN_CREDENTIALS: (&str, &str) = ("admin", "admin123");

/// What a seeding run did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded,
    AlreadyPopulated,
}

pub struct SeedService;

impl SeedService {
    /// Loads the starter catalog, students and logins, but only into an empty database.
    ///
    /// The users table is the marker: once any login exists the database is left alone,
    /// so running this on every startup is safe.
    pub async fn seed_if_empty(db: &DatabaseConnection) -> Result<SeedOutcome, DbErr> {
        if UserService::count(db).await? > 0 {
            info!("Database already contains data, skipping initialization");
            return Ok(SeedOutcome::AlreadyPopulated);
        }

        let txn = db.begin().await?;
        Self::seed(&txn).await?;
        txn.commit().await?;

        info!(
            "Seeded {} courses, {} instructors and {} students",
            COURSES.len(),
            INSTRUCTORS.len(),
            STUDENTS.len()
        );
        Ok(SeedOutcome::Seeded)
    }

    async fn seed(txn: &DatabaseTransaction) -> Result<(), DbErr> {
        let mut instructor_ids = Vec::with_capacity(INSTRUCTORS.len());
        for name in INSTRUCTORS {
            let instructor = instructors::ActiveModel {
                name: Set(name.to_owned()),
                ..Default::default()
            }
            .insert(txn)
            .await?;
            instructor_ids.push(instructor.id);
        }

        let course_rows = COURSES.iter().map(|(code, name, _)| courses::ActiveModel {
            code: Set((*code).to_owned()),
            name: Set((*name).to_owned()),
        });
        courses::Entity::insert_many(course_rows)
            .exec_without_returning(txn)
            .await?;

        let teaching_rows = COURSES
            .iter()
            .map(|(code, _, instructor)| course_instructors::ActiveModel {
                course_code: Set((*code).to_owned()),
                instructor_id: Set(instructor_ids[*instructor]),
            });
        course_instructors::Entity::insert_many(teaching_rows)
            .exec_without_returning(txn)
            .await?;

        let prerequisite_rows = PREREQUISITES
            .iter()
            .map(|(course, prerequisite)| course_prerequisites::ActiveModel {
                course_code: Set((*course).to_owned()),
                prerequisite_code: Set((*prerequisite).to_owned()),
            });
        course_prerequisites::Entity::insert_many(prerequisite_rows)
            .exec_without_returning(txn)
            .await?;

        let (admin_username, admin_password) = ADMIN_CREDENTIALS;
        let mut logins = vec![(admin_username, admin_password, Role::Admin, None)];

        for (name, major, username, password) in STUDENTS {
            let student = students::ActiveModel {
                name: Set(name.to_owned()),
                major: Set(major),
                ..Default::default()
            }
            .insert(txn)
            .await?;
            logins.push((username, password, Role::Student, Some(student.id)));
        }

        for (username, password, role, student_id) in logins {
            users::ActiveModel {
                username: Set(username.to_owned()),
                password_hash: Set(UserService::hash_password(password)?),
                role: Set(role),
                student_id: Set(student_id),
                ..Default::default()
            }
            .insert(txn)
            .await?;
        }

        Ok(())
    }
}
