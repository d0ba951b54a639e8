use crate::entities::{UserRole, user_entity as users};
use crate::error::{AppError, AppResult};
use crate::models::{CreateUserRequest, UserResponse};
use crate::utils::{RequiredFields, clean_required, normalize_email};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

const EMAIL_TAKEN: &str = "A user with this email already exists";

/// 后台账号管理（不处理登录，令牌由外部签发）
#[derive(Clone)]
pub struct UserService {
    pool: DatabaseConnection,
}

impl UserService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<UserResponse>> {
        let items = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(items.into_iter().map(Into::into).collect())
    }

    pub async fn create(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        RequiredFields::new()
            .check("name", request.name.as_deref())
            .check("email", request.email.as_deref())
            .finish()?;
        let email = normalize_email(request.email.as_deref().unwrap_or_default())?;

        let taken = users::Entity::find()
            .filter(users::Column::Email.eq(email.as_str()))
            .one(&self.pool)
            .await?
            .is_some();
        if taken {
            return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
        }

        let now = Utc::now();
        let model = users::ActiveModel {
            name: Set(clean_required(request.name)),
            email: Set(email),
            role: Set(request.role.unwrap_or(UserRole::Editor)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.pool)
        .await
        .map_err(|e| AppError::from_unique_violation(e, EMAIL_TAKEN))?;

        log::info!("User {} created with role {:?}", model.id, model.role);
        Ok(model.into())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = users::Entity::delete_by_id(id).exec(&self.pool).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        log::info!("User {} deleted", id);
        Ok(())
    }
}
