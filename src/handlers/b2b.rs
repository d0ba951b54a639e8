use crate::models::*;
use crate::services::B2bService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    post,
    path = "/b2b",
    tag = "b2b",
    request_body = CreateB2bRequest,
    responses(
        (status = 201, description = "合作申请已提交", body = CreatedResponse),
        (status = 400, description = "缺少必填字段或格式错误", body = ApiError)
    )
)]
/// 机构合作申请
pub async fn create_b2b(
    service: web::Data<B2bService>,
    body: web::Json<CreateB2bRequest>,
) -> Result<HttpResponse> {
    match service.create(body.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Created().json(ApiResponse::success_with_message(
            data,
            "Partnership enquiry received",
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/b2b",
    tag = "b2b",
    params(
        ("page" = Option<u64>, Query, description = "页码 (默认1)"),
        ("perPage" = Option<u64>, Query, description = "每页数量 (默认20)"),
        ("processed" = Option<bool>, Query, description = "是否已处理"),
        ("search" = Option<String>, Query, description = "公司 / 联系人 / 邮箱")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "合作申请列表", body = [B2bSubmissionResponse]),
        (status = 401, description = "未授权")
    )
)]
pub async fn list_b2b(
    service: web::Data<B2bService>,
    query: web::Query<B2bQuery>,
) -> Result<HttpResponse> {
    match service.list(&query.into_inner()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(page))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    patch,
    path = "/b2b/{id}/processed",
    tag = "b2b",
    params(("id" = i32, Path, description = "申请ID")),
    request_body = UpdateProcessedRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "更新成功", body = B2bSubmissionResponse),
        (status = 404, description = "不存在", body = ApiError)
    )
)]
pub async fn set_b2b_processed(
    service: web::Data<B2bService>,
    path: web::Path<i32>,
    body: web::Json<UpdateProcessedRequest>,
) -> Result<HttpResponse> {
    match service.set_processed(path.into_inner(), body.processed).await {
        Ok(data) => Ok(HttpResponse::Ok().json(ApiResponse::success(data))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn b2b_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/b2b")
            .route("", web::post().to(create_b2b))
            .route("", web::get().to(list_b2b))
            .route("/{id}/processed", web::patch().to(set_b2b_processed)),
    );
}
