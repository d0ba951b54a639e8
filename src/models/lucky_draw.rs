use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::PaginationParams;
use crate::entities::lucky_draw_entry_entity as entry_entity;

/// 抽奖报名请求
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct EnterLuckyDrawRequest {
    #[schema(example = "Asha Gurung")]
    pub name: Option<String>,
    #[schema(example = "asha@example.com")]
    pub email: Option<String>,
    #[schema(example = "+9779801234567")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnterLuckyDrawResponse {
    pub entry_id: i32,
}

/// 开奖请求，两个字段都可省略
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RunDrawRequest {
    #[schema(example = "Free Consultation")]
    pub prize: Option<String>,
    #[schema(example = 2)]
    pub number_of_winners: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RunDrawResponse {
    pub winners: Vec<LuckyDrawEntryResponse>,
    pub draw_date: DateTime<Utc>,
    pub prize: String,
}

/// 抽奖参与记录查询参数
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckyDrawEntryQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub is_winner: Option<bool>,
    /// Matches name, email or phone
    pub search: Option<String>,
}

impl LuckyDrawEntryQuery {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.page, self.per_page)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LuckyDrawEntryResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub is_winner: bool,
    pub draw_date: Option<DateTime<Utc>>,
    pub prize: Option<String>,
    pub notified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<entry_entity::Model> for LuckyDrawEntryResponse {
    fn from(m: entry_entity::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            phone: m.phone,
            ip_address: m.ip_address,
            user_agent: m.user_agent,
            is_winner: m.is_winner,
            draw_date: m.draw_date,
            prize: m.prize,
            notified: m.notified,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LuckyDrawStatsResponse {
    pub total_entries: u64,
    pub winners: u64,
    /// Entries still in the pool
    pub eligible: u64,
}

/// Client metadata captured alongside an entry.
#[derive(Debug, Clone, Default)]
pub struct ClientInfo {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}
