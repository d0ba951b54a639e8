use crate::entities::blog_entity as blogs;
use crate::error::{AppError, AppResult};
use crate::models::{BlogQuery, BlogRequest, BlogResponse, PaginatedResponse};
use crate::utils::{RequiredFields, clean_optional, clean_required, contains_any, resolve_slug};
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

const SLUG_TAKEN: &str = "A blog post with this slug already exists";

#[derive(Clone)]
pub struct BlogService {
    pool: DatabaseConnection,
}

/// 首次发布时写入发布时间，之后保持不变
fn resolve_published_at(
    published: bool,
    current: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    match (published, current) {
        (_, Some(at)) => Some(at),
        (true, None) => Some(now),
        (false, None) => None,
    }
}

impl BlogService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// `include_drafts` 为 false 时只返回已发布文章，并忽略 `published` 过滤
    pub async fn list(
        &self,
        query: &BlogQuery,
        include_drafts: bool,
    ) -> AppResult<PaginatedResponse<BlogResponse>> {
        let params = query.pagination();

        let mut select = blogs::Entity::find();
        let published = if include_drafts { query.published } else { Some(true) };
        if let Some(published) = published {
            select = select.filter(blogs::Column::Published.eq(published));
        }
        if let Some(cond) = contains_any(
            &[blogs::Column::Title, blogs::Column::Excerpt],
            query.search.as_deref(),
        ) {
            select = select.filter(cond);
        }

        let total = select.clone().count(&self.pool).await?;
        let items = select
            .order_by_desc(blogs::Column::PublishedAt)
            .order_by_desc(blogs::Column::CreatedAt)
            .order_by_desc(blogs::Column::Id)
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

    pub async fn get_by_slug(&self, slug: &str, include_drafts: bool) -> AppResult<BlogResponse> {
        let mut select = blogs::Entity::find().filter(blogs::Column::Slug.eq(slug.trim()));
        if !include_drafts {
            select = select.filter(blogs::Column::Published.eq(true));
        }
        select
            .one(&self.pool)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Blog post not found".to_string()))
    }

    pub async fn create(&self, request: BlogRequest) -> AppResult<BlogResponse> {
        Self::check_required(&request)?;
        let title = clean_required(request.title);
        let slug = resolve_slug(request.slug.as_deref(), &title)?;
        self.ensure_slug_free(&slug, None).await?;

        let now = Utc::now();
        let published = request.published.unwrap_or(false);
        let model = blogs::ActiveModel {
            title: Set(title),
            slug: Set(slug),
            excerpt: Set(clean_optional(request.excerpt)),
            content: Set(clean_required(request.content)),
            author: Set(clean_optional(request.author)),
            cover_image: Set(clean_optional(request.cover_image)),
            published: Set(published),
            published_at: Set(resolve_published_at(published, None, now)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.pool)
        .await
        .map_err(|e| AppError::from_unique_violation(e, SLUG_TAKEN))?;

        log::info!("Blog post {} ({}) created", model.id, model.slug);
        Ok(model.into())
    }

    pub async fn update(&self, id: i32, request: BlogRequest) -> AppResult<BlogResponse> {
        let existing = blogs::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Blog post not found".to_string()))?;

        Self::check_required(&request)?;
        let title = clean_required(request.title);
        let slug = resolve_slug(request.slug.as_deref(), &title)?;
        self.ensure_slug_free(&slug, Some(id)).await?;

        let now = Utc::now();
        let published = request.published.unwrap_or(existing.published);
        let published_at = resolve_published_at(published, existing.published_at, now);

        let mut am = existing.into_active_model();
        am.title = Set(title);
        am.slug = Set(slug);
        am.excerpt = Set(clean_optional(request.excerpt));
        am.content = Set(clean_required(request.content));
        am.author = Set(clean_optional(request.author));
        am.cover_image = Set(clean_optional(request.cover_image));
        am.published = Set(published);
        am.published_at = Set(published_at);
        am.updated_at = Set(now);

        let model = am
            .update(&self.pool)
            .await
            .map_err(|e| AppError::from_unique_violation(e, SLUG_TAKEN))?;
        Ok(model.into())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = blogs::Entity::delete_by_id(id).exec(&self.pool).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Blog post not found".to_string()));
        }
        Ok(())
    }

    fn check_required(request: &BlogRequest) -> AppResult<()> {
        RequiredFields::new()
            .check("title", request.title.as_deref())
            .check("content", request.content.as_deref())
            .finish()
    }

    async fn ensure_slug_free(&self, slug: &str, exclude_id: Option<i32>) -> AppResult<()> {
        let mut select = blogs::Entity::find().filter(blogs::Column::Slug.eq(slug));
        if let Some(id) = exclude_id {
            select = select.filter(blogs::Column::Id.ne(id));
        }
        if select.one(&self.pool).await?.is_some() {
            return Err(AppError::Conflict(SLUG_TAKEN.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_published_at_set_on_first_publish() {
        let now = Utc::now();
        assert_eq!(resolve_published_at(true, None, now), Some(now));
        assert_eq!(resolve_published_at(false, None, now), None);
    }

    #[test]
    fn test_published_at_kept_after_unpublish() {
        let earlier = Utc::now() - Duration::days(3);
        let now = Utc::now();
        assert_eq!(resolve_published_at(false, Some(earlier), now), Some(earlier));
        assert_eq!(resolve_published_at(true, Some(earlier), now), Some(earlier));
    }
}
