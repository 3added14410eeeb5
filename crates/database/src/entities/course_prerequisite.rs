use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Adjacency set of the prerequisite graph: `course_code` directly requires
/// `prerequisite_code`. Both columns reference `courses`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "course_prerequisites")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_code: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub prerequisite_code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseCode",
        to = "super::course::Column::Code"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::PrerequisiteCode",
        to = "super::course::Column::Code"
    )]
    Prerequisite,
}

impl ActiveModelBehavior for ActiveModel {}
