use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::PaginationParams;
use crate::entities::newsletter_entity;

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct NewsletterRequest {
    #[schema(example = "asha@example.com")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub active: Option<bool>,
    pub search: Option<String>,
}

impl NewsletterQuery {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.page, self.per_page)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterResponse {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<newsletter_entity::Model> for NewsletterResponse {
    fn from(m: newsletter_entity::Model) -> Self {
        Self {
            id: m.id,
            email: m.email,
            is_active: m.is_active,
            created_at: m.created_at,
        }
    }
}
