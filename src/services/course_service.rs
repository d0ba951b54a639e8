use crate::entities::{course_entity as courses, university_entity as universities};
use crate::error::{AppError, AppResult};
use crate::models::{CourseQuery, CourseRequest, CourseResponse, PaginatedResponse};
use crate::utils::{RequiredFields, clean_optional, clean_required, contains_any};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

#[derive(Clone)]
pub struct CourseService {
    pool: DatabaseConnection,
}

impl CourseService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn list(&self, query: &CourseQuery) -> AppResult<PaginatedResponse<CourseResponse>> {
        let params = query.pagination();

        let mut select = courses::Entity::find();
        if let Some(university_id) = query.university_id {
            select = select.filter(courses::Column::UniversityId.eq(university_id));
        }
        if let Some(level) = query.level.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
            select = select.filter(courses::Column::Level.eq(level));
        }
        if let Some(cond) = contains_any(
            &[courses::Column::Name, courses::Column::Description],
            query.search.as_deref(),
        ) {
            select = select.filter(cond);
        }

        let total = select.clone().count(&self.pool).await?;
        let rows = select
            .find_also_related(universities::Entity)
            .order_by_asc(courses::Column::Name)
            .order_by_asc(courses::Column::Id)
            .limit(params.get_limit())
            .offset(params.get_offset())
            .all(&self.pool)
            .await?;

        let items = rows
            .into_iter()
            .map(|(course, university)| CourseResponse::with_university(course, university))
            .collect();

        Ok(PaginatedResponse::new(items, &params, total))
    }

    pub async fn get(&self, id: i32) -> AppResult<CourseResponse> {
        let (course, university) = courses::Entity::find_by_id(id)
            .find_also_related(universities::Entity)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;
        Ok(CourseResponse::with_university(course, university))
    }

    pub async fn create(&self, request: CourseRequest) -> AppResult<CourseResponse> {
        let university = self.validate(&request).await?;

        let now = Utc::now();
        let model = courses::ActiveModel {
            university_id: Set(university.id),
            name: Set(clean_required(request.name)),
            level: Set(clean_required(request.level)),
            duration: Set(clean_optional(request.duration)),
            tuition_fee: Set(clean_optional(request.tuition_fee)),
            intake: Set(clean_optional(request.intake)),
            description: Set(clean_optional(request.description)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!("Course {} created for university {}", model.id, university.id);
        Ok(CourseResponse::with_university(model, Some(university)))
    }

    pub async fn update(&self, id: i32, request: CourseRequest) -> AppResult<CourseResponse> {
        let existing = courses::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;
        let university = self.validate(&request).await?;

        let mut am = existing.into_active_model();
        am.university_id = Set(university.id);
        am.name = Set(clean_required(request.name));
        am.level = Set(clean_required(request.level));
        am.duration = Set(clean_optional(request.duration));
        am.tuition_fee = Set(clean_optional(request.tuition_fee));
        am.intake = Set(clean_optional(request.intake));
        am.description = Set(clean_optional(request.description));
        am.updated_at = Set(Utc::now());

        let model = am.update(&self.pool).await?;
        Ok(CourseResponse::with_university(model, Some(university)))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = courses::Entity::delete_by_id(id).exec(&self.pool).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Course not found".to_string()));
        }
        Ok(())
    }

    // 必填字段 + 所属大学必须存在
    async fn validate(&self, request: &CourseRequest) -> AppResult<universities::Model> {
        let mut required = RequiredFields::new();
        if request.university_id.is_none() {
            required = required.check("universityId", None);
        }
        required
            .check("name", request.name.as_deref())
            .check("level", request.level.as_deref())
            .finish()?;

        let university_id = request.university_id.unwrap_or_default();
        universities::Entity::find_by_id(university_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::ValidationError(format!("University {university_id} does not exist"))
            })
    }
}
