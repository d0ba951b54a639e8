use crate::entities::{contact_submission_entity as contacts, university_entity as universities};
use crate::error::{AppError, AppResult};
use crate::models::{
    ContactQuery, ContactSubmissionResponse, CreateContactRequest, CreatedResponse,
    PaginatedResponse,
};
use crate::utils::{RequiredFields, clean_required, contains_any, normalize_email, normalize_phone};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

#[derive(Clone)]
pub struct ContactService {
    pool: DatabaseConnection,
}

impl ContactService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 提交咨询表单
    pub async fn create(&self, request: CreateContactRequest) -> AppResult<CreatedResponse> {
        RequiredFields::new()
            .check("name", request.name.as_deref())
            .check("email", request.email.as_deref())
            .check("phone", request.phone.as_deref())
            .check("education", request.education.as_deref())
            .check("countryToGo", request.country_to_go.as_deref())
            .check("budget", request.budget.as_deref())
            .check("timeline", request.timeline.as_deref())
            .check("message", request.message.as_deref())
            .finish()?;

        let email = normalize_email(request.email.as_deref().unwrap_or_default())?;
        let phone = normalize_phone(request.phone.as_deref().unwrap_or_default())?;

        if let Some(university_id) = request.university_id {
            let exists = universities::Entity::find_by_id(university_id)
                .one(&self.pool)
                .await?
                .is_some();
            if !exists {
                return Err(AppError::ValidationError(format!(
                    "University {university_id} does not exist"
                )));
            }
        }

        let model = contacts::ActiveModel {
            name: Set(clean_required(request.name)),
            email: Set(email),
            phone: Set(phone),
            education: Set(clean_required(request.education)),
            country_to_go: Set(clean_required(request.country_to_go)),
            budget: Set(clean_required(request.budget)),
            timeline: Set(clean_required(request.timeline)),
            message: Set(clean_required(request.message)),
            university_id: Set(request.university_id),
            processed: Set(false),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!("Contact submission {} received", model.id);

        Ok(CreatedResponse { id: model.id })
    }

    /// 分页查询咨询线索（附带大学名称）
    pub async fn list(
        &self,
        query: &ContactQuery,
    ) -> AppResult<PaginatedResponse<ContactSubmissionResponse>> {
        let params = query.pagination();

        let mut select = contacts::Entity::find();
        if let Some(processed) = query.processed {
            select = select.filter(contacts::Column::Processed.eq(processed));
        }
        if let Some(university_id) = query.university_id {
            select = select.filter(contacts::Column::UniversityId.eq(university_id));
        }
        if let Some(cond) = contains_any(
            &[
                contacts::Column::Name,
                contacts::Column::Email,
                contacts::Column::CountryToGo,
            ],
            query.search.as_deref(),
        ) {
            select = select.filter(cond);
        }

        let total = select.clone().count(&self.pool).await?;

        let rows = select
            .find_also_related(universities::Entity)
            .order_by_desc(contacts::Column::CreatedAt)
            .order_by_desc(contacts::Column::Id)
            .limit(params.get_limit())
            .offset(params.get_offset())
            .all(&self.pool)
            .await?;

        let items = rows.into_iter().map(Self::to_response).collect();

        Ok(PaginatedResponse::new(items, &params, total))
    }

    pub async fn get(&self, id: i32) -> AppResult<ContactSubmissionResponse> {
        let row = contacts::Entity::find_by_id(id)
            .find_also_related(universities::Entity)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Contact submission not found".to_string()))?;
        Ok(Self::to_response(row))
    }

    /// 更新处理状态
    pub async fn set_processed(
        &self,
        id: i32,
        processed: bool,
    ) -> AppResult<ContactSubmissionResponse> {
        let model = contacts::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Contact submission not found".to_string()))?;

        let mut am = model.into_active_model();
        am.processed = Set(processed);
        am.update(&self.pool).await?;

        self.get(id).await
    }

    fn to_response(
        (contact, university): (contacts::Model, Option<universities::Model>),
    ) -> ContactSubmissionResponse {
        let mut response = ContactSubmissionResponse::from(contact);
        response.university_name = university.map(|u| u.name);
        response
    }
}
