use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::PaginationParams;
use crate::entities::{course_entity, university_entity};

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequest {
    pub university_id: Option<i32>,
    #[schema(example = "Master of Information Technology")]
    pub name: Option<String>,
    #[schema(example = "Master")]
    pub level: Option<String>,
    #[schema(example = "2 years")]
    pub duration: Option<String>,
    #[schema(example = "AUD 48,000 / year")]
    pub tuition_fee: Option<String>,
    #[schema(example = "February, July")]
    pub intake: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub university_id: Option<i32>,
    pub level: Option<String>,
    pub search: Option<String>,
}

impl CourseQuery {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.page, self.per_page)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: i32,
    pub university_id: i32,
    pub university_name: Option<String>,
    pub name: String,
    pub level: String,
    pub duration: Option<String>,
    pub tuition_fee: Option<String>,
    pub intake: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CourseResponse {
    pub fn with_university(
        course: course_entity::Model,
        university: Option<university_entity::Model>,
    ) -> Self {
        Self {
            id: course.id,
            university_id: course.university_id,
            university_name: university.map(|u| u.name),
            name: course.name,
            level: course.level,
            duration: course.duration,
            tuition_fee: course.tuition_fee,
            intake: course.intake,
            description: course.description,
            created_at: course.created_at,
            updated_at: course.updated_at,
        }
    }
}
