use crate::entities::{course_entity as courses, university_entity as universities};
use crate::error::{AppError, AppResult};
use crate::models::{
    PaginatedResponse, UniversityDetailResponse, UniversityQuery, UniversityRequest,
    UniversityResponse,
};
use crate::utils::{RequiredFields, clean_optional, clean_required, contains_any, resolve_slug};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

const SLUG_TAKEN: &str = "A university with this slug already exists";

#[derive(Clone)]
pub struct UniversityService {
    pool: DatabaseConnection,
}

/// 校验后的大学字段
struct UniversityFields {
    name: String,
    slug: String,
    country: String,
    city: Option<String>,
    description: Option<String>,
    ranking: Option<i32>,
    logo_url: Option<String>,
    website: Option<String>,
    is_featured: bool,
}

impl UniversityFields {
    fn parse(request: UniversityRequest) -> AppResult<Self> {
        RequiredFields::new()
            .check("name", request.name.as_deref())
            .check("country", request.country.as_deref())
            .finish()?;

        if request.ranking.is_some_and(|r| r <= 0) {
            return Err(AppError::ValidationError(
                "ranking must be a positive integer".to_string(),
            ));
        }

        let name = clean_required(request.name);
        let slug = resolve_slug(request.slug.as_deref(), &name)?;

        Ok(Self {
            name,
            slug,
            country: clean_required(request.country),
            city: clean_optional(request.city),
            description: clean_optional(request.description),
            ranking: request.ranking,
            logo_url: clean_optional(request.logo_url),
            website: clean_optional(request.website),
            is_featured: request.is_featured.unwrap_or(false),
        })
    }

    fn apply(self, am: &mut universities::ActiveModel) {
        am.name = Set(self.name);
        am.slug = Set(self.slug);
        am.country = Set(self.country);
        am.city = Set(self.city);
        am.description = Set(self.description);
        am.ranking = Set(self.ranking);
        am.logo_url = Set(self.logo_url);
        am.website = Set(self.website);
        am.is_featured = Set(self.is_featured);
    }
}

impl UniversityService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn list(
        &self,
        query: &UniversityQuery,
    ) -> AppResult<PaginatedResponse<UniversityResponse>> {
        let params = query.pagination();

        let mut select = universities::Entity::find();
        if let Some(country) = query.country.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            select = select.filter(universities::Column::Country.eq(country));
        }
        if let Some(featured) = query.featured {
            select = select.filter(universities::Column::IsFeatured.eq(featured));
        }
        if let Some(cond) = contains_any(
            &[universities::Column::Name, universities::Column::City],
            query.search.as_deref(),
        ) {
            select = select.filter(cond);
        }

        let total = select.clone().count(&self.pool).await?;
        let items = select
            .order_by_desc(universities::Column::IsFeatured)
            .order_by_asc(universities::Column::Name)
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

    /// 大学详情，附带课程列表
    pub async fn get(&self, id: i32) -> AppResult<UniversityDetailResponse> {
        let university = self.find(id).await?;
        let course_list = university
            .find_related(courses::Entity)
            .order_by_asc(courses::Column::Name)
            .all(&self.pool)
            .await?;

        Ok(UniversityDetailResponse {
            university: university.into(),
            courses: course_list.into_iter().map(Into::into).collect(),
        })
    }

    pub async fn create(&self, request: UniversityRequest) -> AppResult<UniversityResponse> {
        let fields = UniversityFields::parse(request)?;
        self.ensure_slug_free(&fields.slug, None).await?;

        let now = Utc::now();
        let mut am = universities::ActiveModel {
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        fields.apply(&mut am);

        let model = am
            .insert(&self.pool)
            .await
            .map_err(|e| AppError::from_unique_violation(e, SLUG_TAKEN))?;

        log::info!("University {} ({}) created", model.id, model.slug);
        Ok(model.into())
    }

    pub async fn update(&self, id: i32, request: UniversityRequest) -> AppResult<UniversityResponse> {
        let existing = self.find(id).await?;
        let fields = UniversityFields::parse(request)?;
        self.ensure_slug_free(&fields.slug, Some(id)).await?;

        let mut am = existing.into_active_model();
        fields.apply(&mut am);
        am.updated_at = Set(Utc::now());

        let model = am
            .update(&self.pool)
            .await
            .map_err(|e| AppError::from_unique_violation(e, SLUG_TAKEN))?;
        Ok(model.into())
    }

    /// 删除大学（课程级联删除，咨询记录的关联置空）
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = universities::Entity::delete_by_id(id).exec(&self.pool).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("University not found".to_string()));
        }
        log::info!("University {} deleted", id);
        Ok(())
    }

    async fn find(&self, id: i32) -> AppResult<universities::Model> {
        universities::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("University not found".to_string()))
    }

    async fn ensure_slug_free(&self, slug: &str, exclude_id: Option<i32>) -> AppResult<()> {
        let mut select = universities::Entity::find().filter(universities::Column::Slug.eq(slug));
        if let Some(id) = exclude_id {
            select = select.filter(universities::Column::Id.ne(id));
        }
        if select.one(&self.pool).await?.is_some() {
            return Err(AppError::Conflict(SLUG_TAKEN.to_string()));
        }
        Ok(())
    }
}
