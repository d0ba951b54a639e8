use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::PaginationParams;
use crate::entities::{course_entity, university_entity};

/// 创建 / 更新大学（PUT 为整体替换）
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UniversityRequest {
    #[schema(example = "University of Sydney")]
    pub name: Option<String>,
    /// Generated from the name when omitted
    pub slug: Option<String>,
    #[schema(example = "Australia")]
    pub country: Option<String>,
    pub city: Option<String>,
    pub description: Option<String>,
    pub ranking: Option<i32>,
    pub logo_url: Option<String>,
    pub website: Option<String>,
    pub is_featured: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UniversityQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub country: Option<String>,
    pub featured: Option<bool>,
    pub search: Option<String>,
}

impl UniversityQuery {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.page, self.per_page)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UniversityResponse {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub country: String,
    pub city: Option<String>,
    pub description: Option<String>,
    pub ranking: Option<i32>,
    pub logo_url: Option<String>,
    pub website: Option<String>,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<university_entity::Model> for UniversityResponse {
    fn from(m: university_entity::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            slug: m.slug,
            country: m.country,
            city: m.city,
            description: m.description,
            ranking: m.ranking,
            logo_url: m.logo_url,
            website: m.website,
            is_featured: m.is_featured,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// 大学详情（包含课程列表）
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UniversityDetailResponse {
    #[serde(flatten)]
    pub university: UniversityResponse,
    pub courses: Vec<CourseSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub id: i32,
    pub name: String,
    pub level: String,
    pub duration: Option<String>,
    pub intake: Option<String>,
}

impl From<course_entity::Model> for CourseSummary {
    fn from(m: course_entity::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            level: m.level,
            duration: m.duration,
            intake: m.intake,
        }
    }
}
