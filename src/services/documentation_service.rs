use crate::entities::documentation_entity as docs;
use crate::error::{AppError, AppResult};
use crate::models::{DocumentationQuery, DocumentationRequest, DocumentationResponse};
use crate::utils::{RequiredFields, clean_required};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, Set,
};

#[derive(Clone)]
pub struct DocumentationService {
    pool: DatabaseConnection,
}

impl DocumentationService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 按 sort_order 排序的材料清单
    pub async fn list(&self, query: &DocumentationQuery) -> AppResult<Vec<DocumentationResponse>> {
        let mut select = docs::Entity::find();
        if let Some(category) = query.category.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            select = select.filter(docs::Column::Category.eq(category));
        }
        let items = select
            .order_by_asc(docs::Column::SortOrder)
            .order_by_asc(docs::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(items.into_iter().map(Into::into).collect())
    }

    pub async fn create(&self, request: DocumentationRequest) -> AppResult<DocumentationResponse> {
        Self::check_required(&request)?;

        let now = Utc::now();
        let model = docs::ActiveModel {
            title: Set(clean_required(request.title)),
            category: Set(clean_required(request.category)),
            description: Set(clean_required(request.description)),
            is_required: Set(request.is_required.unwrap_or(true)),
            sort_order: Set(request.sort_order.unwrap_or(0)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(model.into())
    }

    pub async fn update(
        &self,
        id: i32,
        request: DocumentationRequest,
    ) -> AppResult<DocumentationResponse> {
        let existing = docs::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Documentation item not found".to_string()))?;
        Self::check_required(&request)?;

        let is_required = request.is_required.unwrap_or(existing.is_required);
        let sort_order = request.sort_order.unwrap_or(existing.sort_order);

        let mut am = existing.into_active_model();
        am.title = Set(clean_required(request.title));
        am.category = Set(clean_required(request.category));
        am.description = Set(clean_required(request.description));
        am.is_required = Set(is_required);
        am.sort_order = Set(sort_order);
        am.updated_at = Set(Utc::now());

        Ok(am.update(&self.pool).await?.into())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = docs::Entity::delete_by_id(id).exec(&self.pool).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Documentation item not found".to_string()));
        }
        Ok(())
    }

    fn check_required(request: &DocumentationRequest) -> AppResult<()> {
        RequiredFields::new()
            .check("title", request.title.as_deref())
            .check("category", request.category.as_deref())
            .check("description", request.description.as_deref())
            .finish()
    }
}
