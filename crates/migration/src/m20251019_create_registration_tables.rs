use sea_orm_migration::{
    prelude::*,
    sea_orm::{ConnectionTrait, DbBackend},
};

/// Student ids are handed out starting from this value
const FIRST_STUDENT_ID: i64 = 250_001;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create students table
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(ColumnDef::new(Students::Major).string_len(32).not_null())
                    .to_owned(),
            )
            .await?;

        Self::start_student_sequence(manager).await?;

        // Create instructors table
        manager
            .create_table(
                Table::create()
                    .table(Instructors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Instructors::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Instructors::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create courses table, keyed by course code
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Code)
                            .string_len(16)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create course_instructors junction table (many-to-many)
        manager
            .create_table(
                Table::create()
                    .table(CourseInstructors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseInstructors::CourseCode)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseInstructors::InstructorId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CourseInstructors::CourseCode)
                            .col(CourseInstructors::InstructorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_instructors-course_code")
                            .from(CourseInstructors::Table, CourseInstructors::CourseCode)
                            .to(Courses::Table, Courses::Code)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_instructors-instructor_id")
                            .from(CourseInstructors::Table, CourseInstructors::InstructorId)
                            .to(Instructors::Table, Instructors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course_prerequisites table (self-referential many-to-many)
        manager
            .create_table(
                Table::create()
                    .table(CoursePrerequisites::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CoursePrerequisites::CourseCode)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CoursePrerequisites::PrerequisiteCode)
                            .string_len(16)
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CoursePrerequisites::CourseCode)
                            .col(CoursePrerequisites::PrerequisiteCode),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_prerequisites-course_code")
                            .from(CoursePrerequisites::Table, CoursePrerequisites::CourseCode)
                            .to(Courses::Table, Courses::Code)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_prerequisites-prerequisite_code")
                            .from(
                                CoursePrerequisites::Table,
                                CoursePrerequisites::PrerequisiteCode,
                            )
                            .to(Courses::Table, Courses::Code)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create enrollments table
        manager
            .create_table(
                Table::create()
                    .table(Enrollments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Enrollments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Enrollments::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Enrollments::CourseCode)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Enrollments::Status)
                            .string_len(16)
                            .not_null()
                            .default("PENDING"),
                    )
                    .col(ColumnDef::new(Enrollments::Grade).double())
                    .col(
                        ColumnDef::new(Enrollments::Passed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-enrollments-student_id")
                            .from(Enrollments::Table, Enrollments::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-enrollments-course_code")
                            .from(Enrollments::Table, Enrollments::CourseCode)
                            .to(Courses::Table, Courses::Code),
                    )
                    .to_owned(),
            )
            .await?;

        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string_len(16).not_null())
                    .col(ColumnDef::new(Users::StudentId).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-users-student_id")
                            .from(Users::Table, Users::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order due to foreign key constraints
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Enrollments::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CoursePrerequisites::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CourseInstructors::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Instructors::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;

        Ok(())
    }
}

impl Migration {
    /// Moves the student id sequence so the first student gets [`FIRST_STUDENT_ID`]
    async fn start_student_sequence(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
        let db = manager.get_connection();
        let next = FIRST_STUDENT_ID;

        let sql = match manager.get_database_backend() {
            DbBackend::Postgres => format!("ALTER SEQUENCE students_id_seq RESTART WITH {next}"),
            DbBackend::Sqlite => format!(
                "INSERT INTO sqlite_sequence (name, seq) VALUES ('students', {})",
                next - 1
            ),
            DbBackend::MySql => format!("ALTER TABLE students AUTO_INCREMENT = {next}"),
        };

        db.execute_unprepared(&sql).await?;
        Ok(())
    }
}

#[derive(Iden)]
enum Students {
    Table,
    Id,
    Name,
    Major,
}

#[derive(Iden)]
enum Instructors {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Courses {
    Table,
    Code,
    Name,
}

#[derive(Iden)]
enum CourseInstructors {
    Table,
    CourseCode,
    InstructorId,
}

#[derive(Iden)]
enum CoursePrerequisites {
    Table,
    CourseCode,
    PrerequisiteCode,
}

#[derive(Iden)]
enum Enrollments {
    Table,
    StudentId,
    Id,
    CourseCode,
    Status,
    Grade,
    Passed,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Username,
    PasswordHash,
    Role,
    StudentId,
}
