use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// 抽奖参与记录
/// 说明:
/// - email 唯一，每个邮箱只能参与一次
/// - is_winner 只会从 false 变为 true 一次
/// - draw_date / prize 仅在 is_winner = true 时有值
/// - notified 由管理员在通知中奖者后标记
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "lucky_draw_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: String,
    pub ip_address: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub user_agent: Option<String>,
    pub is_winner: bool,
    pub draw_date: Option<DateTime<Utc>>,
    pub prize: Option<String>,
    pub notified: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
