use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::PaginationParams;
use crate::entities::testimonial_entity;

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialRequest {
    pub name: Option<String>,
    pub university: Option<String>,
    pub country: Option<String>,
    pub message: Option<String>,
    /// 1-5, defaults to 5
    pub rating: Option<i32>,
    pub photo_url: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    /// Only honoured for admin callers
    pub active: Option<bool>,
}

impl TestimonialQuery {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.page, self.per_page)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialResponse {
    pub id: i32,
    pub name: String,
    pub university: Option<String>,
    pub country: Option<String>,
    pub message: String,
    pub rating: i32,
    pub photo_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<testimonial_entity::Model> for TestimonialResponse {
    fn from(m: testimonial_entity::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            university: m.university,
            country: m.country,
            message: m.message,
            rating: m.rating,
            photo_url: m.photo_url,
            is_active: m.is_active,
            created_at: m.created_at,
        }
    }
}
