use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub university_id: i32,
    pub name: String,
    /// e.g. Bachelor / Master / Diploma
    pub level: String,
    pub duration: Option<String>,
    pub tuition_fee: Option<String>,
    pub intake: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::universities::Entity",
        from = "Column::UniversityId",
        to = "super::universities::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    University,
}

impl Related<super::universities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::University.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
