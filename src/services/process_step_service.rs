use crate::entities::process_step_entity as steps;
use crate::error::{AppError, AppResult};
use crate::models::{ProcessStepRequest, ProcessStepResponse};
use crate::utils::{RequiredFields, clean_optional, clean_required};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, Set,
};

const STEP_TAKEN: &str = "A process step with this number already exists";

#[derive(Clone)]
pub struct ProcessStepService {
    pool: DatabaseConnection,
}

impl ProcessStepService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<ProcessStepResponse>> {
        let items = steps::Entity::find()
            .order_by_asc(steps::Column::StepNumber)
            .all(&self.pool)
            .await?;
        Ok(items.into_iter().map(Into::into).collect())
    }

    pub async fn create(&self, request: ProcessStepRequest) -> AppResult<ProcessStepResponse> {
        let step_number = Self::validate(&request)?;
        self.ensure_number_free(step_number, None).await?;

        let now = Utc::now();
        let model = steps::ActiveModel {
            step_number: Set(step_number),
            title: Set(clean_required(request.title)),
            description: Set(clean_required(request.description)),
            icon: Set(clean_optional(request.icon)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.pool)
        .await
        .map_err(|e| AppError::from_unique_violation(e, STEP_TAKEN))?;

        Ok(model.into())
    }

    pub async fn update(&self, id: i32, request: ProcessStepRequest) -> AppResult<ProcessStepResponse> {
        let existing = steps::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Process step not found".to_string()))?;
        let step_number = Self::validate(&request)?;
        self.ensure_number_free(step_number, Some(id)).await?;

        let mut am = existing.into_active_model();
        am.step_number = Set(step_number);
        am.title = Set(clean_required(request.title));
        am.description = Set(clean_required(request.description));
        am.icon = Set(clean_optional(request.icon));
        am.updated_at = Set(Utc::now());

        let model = am
            .update(&self.pool)
            .await
            .map_err(|e| AppError::from_unique_violation(e, STEP_TAKEN))?;
        Ok(model.into())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = steps::Entity::delete_by_id(id).exec(&self.pool).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Process step not found".to_string()));
        }
        Ok(())
    }

    fn validate(request: &ProcessStepRequest) -> AppResult<i32> {
        let mut required = RequiredFields::new();
        if request.step_number.is_none() {
            required = required.check("stepNumber", None);
        }
        required
            .check("title", request.title.as_deref())
            .check("description", request.description.as_deref())
            .finish()?;

        match request.step_number {
            Some(n) if n > 0 => Ok(n),
            _ => Err(AppError::ValidationError(
                "stepNumber must be a positive integer".to_string(),
            )),
        }
    }

    async fn ensure_number_free(&self, step_number: i32, exclude_id: Option<i32>) -> AppResult<()> {
        let mut select = steps::Entity::find().filter(steps::Column::StepNumber.eq(step_number));
        if let Some(id) = exclude_id {
            select = select.filter(steps::Column::Id.ne(id));
        }
        if select.one(&self.pool).await?.is_some() {
            return Err(AppError::Conflict(STEP_TAKEN.to_string()));
        }
        Ok(())
    }
}
