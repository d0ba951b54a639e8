use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::PaginationParams;
use crate::entities::blog_entity;

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogRequest {
    #[schema(example = "How to prepare for IELTS in 8 weeks")]
    pub title: Option<String>,
    /// Generated from the title when omitted
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub cover_image: Option<String>,
    pub published: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    /// Only honoured for admin callers; public callers always see published posts
    pub published: Option<bool>,
    pub search: Option<String>,
}

impl BlogQuery {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.page, self.per_page)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub author: Option<String>,
    pub cover_image: Option<String>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<blog_entity::Model> for BlogResponse {
    fn from(m: blog_entity::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            slug: m.slug,
            excerpt: m.excerpt,
            content: m.content,
            author: m.author,
            cover_image: m.cover_image,
            published: m.published,
            published_at: m.published_at,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
