use crate::models::*;
use crate::services::ContactService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    post,
    path = "/contact",
    tag = "contact",
    request_body = CreateContactRequest,
    responses(
        (status = 201, description = "提交成功", body = CreatedResponse),
        (status = 400, description = "缺少必填字段或格式错误", body = ApiError)
    )
)]
/// 提交留学咨询表单
pub async fn create_contact(
    service: web::Data<ContactService>,
    body: web::Json<CreateContactRequest>,
) -> Result<HttpResponse> {
    match service.create(body.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Created().json(ApiResponse::success_with_message(
            data,
            "Thank you! Our counsellor will contact you soon",
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/contact",
    tag = "contact",
    params(
        ("page" = Option<u64>, Query, description = "页码 (默认1)"),
        ("perPage" = Option<u64>, Query, description = "每页数量 (默认20)"),
        ("processed" = Option<bool>, Query, description = "是否已处理"),
        ("universityId" = Option<i32>, Query, description = "意向大学"),
        ("search" = Option<String>, Query, description = "姓名 / 邮箱 / 目标国家")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "咨询列表", body = [ContactSubmissionResponse]),
        (status = 401, description = "未授权")
    )
)]
pub async fn list_contacts(
    service: web::Data<ContactService>,
    query: web::Query<ContactQuery>,
) -> Result<HttpResponse> {
    match service.list(&query.into_inner()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(page))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/contact/{id}",
    tag = "contact",
    params(("id" = i32, Path, description = "咨询ID")),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "咨询详情", body = ContactSubmissionResponse),
        (status = 404, description = "不存在", body = ApiError)
    )
)]
pub async fn get_contact(
    service: web::Data<ContactService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match service.get(path.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(ApiResponse::success(data))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    patch,
    path = "/contact/{id}/processed",
    tag = "contact",
    params(("id" = i32, Path, description = "咨询ID")),
    request_body = UpdateProcessedRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "更新成功", body = ContactSubmissionResponse),
        (status = 404, description = "不存在", body = ApiError)
    )
)]
pub async fn set_contact_processed(
    service: web::Data<ContactService>,
    path: web::Path<i32>,
    body: web::Json<UpdateProcessedRequest>,
) -> Result<HttpResponse> {
    match service.set_processed(path.into_inner(), body.processed).await {
        Ok(data) => Ok(HttpResponse::Ok().json(ApiResponse::success(data))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn contact_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/contact")
            .route("", web::post().to(create_contact))
            .route("", web::get().to(list_contacts))
            .route("/{id}", web::get().to(get_contact))
            .route("/{id}/processed", web::patch().to(set_contact_processed)),
    );
}
