use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::PaginationParams;
use crate::entities::contact_submission_entity as contact_entity;

/// 咨询表单提交
///
/// 必填: name, email, phone, education, countryToGo, budget, timeline, message
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactRequest {
    #[schema(example = "Asha Gurung")]
    pub name: Option<String>,
    #[schema(example = "asha@example.com")]
    pub email: Option<String>,
    #[schema(example = "+9779801234567")]
    pub phone: Option<String>,
    #[schema(example = "Bachelor in Business")]
    pub education: Option<String>,
    #[schema(example = "Australia")]
    pub country_to_go: Option<String>,
    #[schema(example = "AUD 30,000 / year")]
    pub budget: Option<String>,
    #[schema(example = "February 2027 intake")]
    pub timeline: Option<String>,
    pub message: Option<String>,
    pub university_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub processed: Option<bool>,
    pub university_id: Option<i32>,
    /// Matches name, email or destination country
    pub search: Option<String>,
}

impl ContactQuery {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.page, self.per_page)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmissionResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub education: String,
    pub country_to_go: String,
    pub budget: String,
    pub timeline: String,
    pub message: String,
    pub university_id: Option<i32>,
    pub university_name: Option<String>,
    pub processed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<contact_entity::Model> for ContactSubmissionResponse {
    fn from(m: contact_entity::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            phone: m.phone,
            education: m.education,
            country_to_go: m.country_to_go,
            budget: m.budget,
            timeline: m.timeline,
            message: m.message,
            university_id: m.university_id,
            university_name: None, // 需要关联查询
            processed: m.processed,
            created_at: m.created_at,
        }
    }
}
