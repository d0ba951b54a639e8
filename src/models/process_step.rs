use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::process_step_entity;

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStepRequest {
    #[schema(example = 1)]
    pub step_number: Option<i32>,
    #[schema(example = "Free counselling session")]
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStepResponse {
    pub id: i32,
    pub step_number: i32,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
}

impl From<process_step_entity::Model> for ProcessStepResponse {
    fn from(m: process_step_entity::Model) -> Self {
        Self {
            id: m.id,
            step_number: m.step_number,
            title: m.title,
            description: m.description,
            icon: m.icon,
        }
    }
}
