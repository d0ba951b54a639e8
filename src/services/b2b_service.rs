use crate::entities::b2b_submission_entity as b2b;
use crate::error::{AppError, AppResult};
use crate::models::{
    B2bQuery, B2bSubmissionResponse, CreateB2bRequest, CreatedResponse, PaginatedResponse,
};
use crate::utils::{
    RequiredFields, clean_optional, clean_required, contains_any, normalize_email,
    normalize_phone,
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

#[derive(Clone)]
pub struct B2bService {
    pool: DatabaseConnection,
}

impl B2bService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreateB2bRequest) -> AppResult<CreatedResponse> {
        RequiredFields::new()
            .check("companyName", request.company_name.as_deref())
            .check("contactPerson", request.contact_person.as_deref())
            .check("email", request.email.as_deref())
            .check("phone", request.phone.as_deref())
            .check("country", request.country.as_deref())
            .check("message", request.message.as_deref())
            .finish()?;

        let email = normalize_email(request.email.as_deref().unwrap_or_default())?;
        let phone = normalize_phone(request.phone.as_deref().unwrap_or_default())?;

        let model = b2b::ActiveModel {
            company_name: Set(clean_required(request.company_name)),
            contact_person: Set(clean_required(request.contact_person)),
            email: Set(email),
            phone: Set(phone),
            country: Set(clean_required(request.country)),
            partnership_type: Set(clean_optional(request.partnership_type)),
            message: Set(clean_required(request.message)),
            processed: Set(false),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!("B2B submission {} received", model.id);

        Ok(CreatedResponse { id: model.id })
    }

    pub async fn list(&self, query: &B2bQuery) -> AppResult<PaginatedResponse<B2bSubmissionResponse>> {
        let params = query.pagination();

        let mut select = b2b::Entity::find();
        if let Some(processed) = query.processed {
            select = select.filter(b2b::Column::Processed.eq(processed));
        }
        if let Some(cond) = contains_any(
            &[
                b2b::Column::CompanyName,
                b2b::Column::ContactPerson,
                b2b::Column::Email,
            ],
            query.search.as_deref(),
        ) {
            select = select.filter(cond);
        }

        let total = select.clone().count(&self.pool).await?;
        let items = select
            .order_by_desc(b2b::Column::CreatedAt)
            .order_by_desc(b2b::Column::Id)
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

    pub async fn set_processed(&self, id: i32, processed: bool) -> AppResult<B2bSubmissionResponse> {
        let model = b2b::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("B2B submission not found".to_string()))?;

        let mut am = model.into_active_model();
        am.processed = Set(processed);
        let updated = am.update(&self.pool).await?;
        Ok(updated.into())
    }
}
