use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::{UserRole, user_entity};

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "Sita Karki")]
    pub name: Option<String>,
    #[schema(example = "sita@consultancy.example")]
    pub email: Option<String>,
    /// Defaults to `editor`
    pub role: Option<UserRole>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl From<user_entity::Model> for UserResponse {
    fn from(m: user_entity::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            role: m.role,
            created_at: m.created_at,
        }
    }
}
