use crate::models::*;
use crate::services::ProcessStepService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/process-steps",
    tag = "process_step",
    responses(
        (status = 200, description = "按步骤编号排序的申请流程", body = [ProcessStepResponse])
    )
)]
pub async fn list_steps(service: web::Data<ProcessStepService>) -> Result<HttpResponse> {
    match service.list().await {
        Ok(list) => Ok(HttpResponse::Ok().json(ApiResponse::success(list))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/process-steps",
    tag = "process_step",
    request_body = ProcessStepRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "创建成功", body = ProcessStepResponse),
        (status = 400, description = "参数错误或步骤编号重复", body = ApiError)
    )
)]
pub async fn create_step(
    service: web::Data<ProcessStepService>,
    body: web::Json<ProcessStepRequest>,
) -> Result<HttpResponse> {
    match service.create(body.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Created().json(ApiResponse::success(data))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/process-steps/{id}",
    tag = "process_step",
    params(("id" = i32, Path, description = "步骤ID")),
    request_body = ProcessStepRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "更新成功", body = ProcessStepResponse),
        (status = 404, description = "不存在", body = ApiError)
    )
)]
pub async fn update_step(
    service: web::Data<ProcessStepService>,
    path: web::Path<i32>,
    body: web::Json<ProcessStepRequest>,
) -> Result<HttpResponse> {
    match service.update(path.into_inner(), body.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(ApiResponse::success(data))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/process-steps/{id}",
    tag = "process_step",
    params(("id" = i32, Path, description = "步骤ID")),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "删除成功"),
        (status = 404, description = "不存在", body = ApiError)
    )
)]
pub async fn delete_step(
    service: web::Data<ProcessStepService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match service.delete(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Process step deleted"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn process_step_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/process-steps")
            .route("", web::get().to(list_steps))
            .route("", web::post().to(create_step))
            .route("/{id}", web::put().to(update_step))
            .route("/{id}", web::delete().to(delete_step)),
    );
}
