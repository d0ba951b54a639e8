use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// 咨询表单线索
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "contact_submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub education: String,
    pub country_to_go: String,
    pub budget: String,
    pub timeline: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub university_id: Option<i32>,
    pub processed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::universities::Entity",
        from = "Column::UniversityId",
        to = "super::universities::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    University,
}

impl Related<super::universities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::University.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
