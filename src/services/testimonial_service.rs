use crate::entities::testimonial_entity as testimonials;
use crate::error::{AppError, AppResult};
use crate::models::{PaginatedResponse, TestimonialQuery, TestimonialRequest, TestimonialResponse};
use crate::utils::{RequiredFields, clean_optional, clean_required};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

const DEFAULT_RATING: i32 = 5;

#[derive(Clone)]
pub struct TestimonialService {
    pool: DatabaseConnection,
}

fn validate(request: &TestimonialRequest) -> AppResult<i32> {
    RequiredFields::new()
        .check("name", request.name.as_deref())
        .check("message", request.message.as_deref())
        .finish()?;

    let rating = request.rating.unwrap_or(DEFAULT_RATING);
    if !(1..=5).contains(&rating) {
        return Err(AppError::ValidationError(
            "rating must be between 1 and 5".to_string(),
        ));
    }
    Ok(rating)
}

impl TestimonialService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 公开访问只返回启用的评价
    pub async fn list(
        &self,
        query: &TestimonialQuery,
        include_inactive: bool,
    ) -> AppResult<PaginatedResponse<TestimonialResponse>> {
        let params = query.pagination();

        let active = if include_inactive { query.active } else { Some(true) };
        let mut select = testimonials::Entity::find();
        if let Some(active) = active {
            select = select.filter(testimonials::Column::IsActive.eq(active));
        }

        let total = select.clone().count(&self.pool).await?;
        let items = select
            .order_by_desc(testimonials::Column::CreatedAt)
            .order_by_desc(testimonials::Column::Id)
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

    pub async fn create(&self, request: TestimonialRequest) -> AppResult<TestimonialResponse> {
        let rating = validate(&request)?;

        let now = Utc::now();
        let model = testimonials::ActiveModel {
            name: Set(clean_required(request.name)),
            university: Set(clean_optional(request.university)),
            country: Set(clean_optional(request.country)),
            message: Set(clean_required(request.message)),
            rating: Set(rating),
            photo_url: Set(clean_optional(request.photo_url)),
            is_active: Set(request.is_active.unwrap_or(true)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(model.into())
    }

    pub async fn update(&self, id: i32, request: TestimonialRequest) -> AppResult<TestimonialResponse> {
        let existing = testimonials::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Testimonial not found".to_string()))?;
        let rating = validate(&request)?;
        let is_active = request.is_active.unwrap_or(existing.is_active);

        let mut am = existing.into_active_model();
        am.name = Set(clean_required(request.name));
        am.university = Set(clean_optional(request.university));
        am.country = Set(clean_optional(request.country));
        am.message = Set(clean_required(request.message));
        am.rating = Set(rating);
        am.photo_url = Set(clean_optional(request.photo_url));
        am.is_active = Set(is_active);
        am.updated_at = Set(Utc::now());

        Ok(am.update(&self.pool).await?.into())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = testimonials::Entity::delete_by_id(id).exec(&self.pool).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Testimonial not found".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(rating: Option<i32>) -> TestimonialRequest {
        TestimonialRequest {
            name: Some("Asha".into()),
            message: Some("Great guidance".into()),
            rating,
            ..Default::default()
        }
    }

    #[test]
    fn test_rating_defaults_to_five() {
        assert_eq!(validate(&request(None)).unwrap(), 5);
    }

    #[test]
    fn test_rating_out_of_range() {
        assert!(validate(&request(Some(0))).is_err());
        assert!(validate(&request(Some(6))).is_err());
        assert_eq!(validate(&request(Some(1))).unwrap(), 1);
    }

    #[test]
    fn test_missing_message() {
        let mut req = request(None);
        req.message = None;
        let err = validate(&req).unwrap_err();
        assert!(err.to_string().contains("message"));
    }
}
