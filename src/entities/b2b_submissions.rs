use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// 合作机构 (B2B) 线索
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "b2b_submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub partnership_type: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub processed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
