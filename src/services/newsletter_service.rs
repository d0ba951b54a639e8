use crate::entities::newsletter_entity as newsletters;
use crate::error::{AppError, AppResult};
use crate::models::{NewsletterQuery, NewsletterResponse, PaginatedResponse};
use crate::utils::{RequiredFields, contains_any, normalize_email};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

const ALREADY_SUBSCRIBED: &str = "This email is already subscribed";

#[derive(Clone)]
pub struct NewsletterService {
    pool: DatabaseConnection,
}

impl NewsletterService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 订阅：重复的有效订阅返回冲突，已退订的邮箱重新激活
    pub async fn subscribe(&self, email: Option<&str>) -> AppResult<NewsletterResponse> {
        let email = Self::validated_email(email)?;

        if let Some(existing) = newsletters::Entity::find()
            .filter(newsletters::Column::Email.eq(email.as_str()))
            .one(&self.pool)
            .await?
        {
            if existing.is_active {
                return Err(AppError::Conflict(ALREADY_SUBSCRIBED.to_string()));
            }
            let mut am = existing.into_active_model();
            am.is_active = Set(true);
            let updated = am.update(&self.pool).await?;
            log::info!("Newsletter subscription {} re-activated", updated.id);
            return Ok(updated.into());
        }

        let model = newsletters::ActiveModel {
            email: Set(email),
            is_active: Set(true),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.pool)
        .await
        .map_err(|e| AppError::from_unique_violation(e, ALREADY_SUBSCRIBED))?;

        Ok(model.into())
    }

    pub async fn unsubscribe(&self, email: Option<&str>) -> AppResult<()> {
        let email = Self::validated_email(email)?;

        let existing = newsletters::Entity::find()
            .filter(newsletters::Column::Email.eq(email.as_str()))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Subscription not found".to_string()))?;

        if existing.is_active {
            let mut am = existing.into_active_model();
            am.is_active = Set(false);
            am.update(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn list(&self, query: &NewsletterQuery) -> AppResult<PaginatedResponse<NewsletterResponse>> {
        let params = query.pagination();

        let mut select = newsletters::Entity::find();
        if let Some(active) = query.active {
            select = select.filter(newsletters::Column::IsActive.eq(active));
        }
        if let Some(cond) = contains_any(&[newsletters::Column::Email], query.search.as_deref()) {
            select = select.filter(cond);
        }

        let total = select.clone().count(&self.pool).await?;
        let items = select
            .order_by_desc(newsletters::Column::CreatedAt)
            .order_by_desc(newsletters::Column::Id)
            .limit(params.get_limit())
            .offset(params.get_offset())
            .all(&self.pool)
            .await?;

        Ok(PaginatedResponse::new(
            items.into_iter().map(Into::into).collect(),
            &params,
            total,
        ))
    }

    fn validated_email(email: Option<&str>) -> AppResult<String> {
        RequiredFields::new().check("email", email).finish()?;
        normalize_email(email.unwrap_or_default())
    }
}
