use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::documentation_entity;

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentationRequest {
    #[schema(example = "Passport copy")]
    pub title: Option<String>,
    #[schema(example = "Identity")]
    pub category: Option<String>,
    pub description: Option<String>,
    pub is_required: Option<bool>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DocumentationQuery {
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentationResponse {
    pub id: i32,
    pub title: String,
    pub category: String,
    pub description: String,
    pub is_required: bool,
    pub sort_order: i32,
}

impl From<documentation_entity::Model> for DocumentationResponse {
    fn from(m: documentation_entity::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            category: m.category,
            description: m.description,
            is_required: m.is_required,
            sort_order: m.sort_order,
        }
    }
}
