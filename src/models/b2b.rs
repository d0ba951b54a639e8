use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::PaginationParams;
use crate::entities::b2b_submission_entity as b2b_entity;

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateB2bRequest {
    #[schema(example = "Himalayan Education Network")]
    pub company_name: Option<String>,
    #[schema(example = "Ram Shrestha")]
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[schema(example = "Nepal")]
    pub country: Option<String>,
    #[schema(example = "Sub-agent")]
    pub partnership_type: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct B2bQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub processed: Option<bool>,
    pub search: Option<String>,
}

impl B2bQuery {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.page, self.per_page)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct B2bSubmissionResponse {
    pub id: i32,
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub partnership_type: Option<String>,
    pub message: String,
    pub processed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<b2b_entity::Model> for B2bSubmissionResponse {
    fn from(m: b2b_entity::Model) -> Self {
        Self {
            id: m.id,
            company_name: m.company_name,
            contact_person: m.contact_person,
            email: m.email,
            phone: m.phone,
            country: m.country,
            partnership_type: m.partnership_type,
            message: m.message,
            processed: m.processed,
            created_at: m.created_at,
        }
    }
}
