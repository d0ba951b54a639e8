use crate::models::*;
use crate::services::UniversityService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/universities",
    tag = "university",
    params(
        ("page" = Option<u64>, Query, description = "页码 (默认1)"),
        ("perPage" = Option<u64>, Query, description = "每页数量 (默认20)"),
        ("country" = Option<String>, Query, description = "国家"),
        ("featured" = Option<bool>, Query, description = "是否推荐"),
        ("search" = Option<String>, Query, description = "名称 / 城市")
    ),
    responses(
        (status = 200, description = "大学列表", body = [UniversityResponse])
    )
)]
pub async fn list_universities(
    service: web::Data<UniversityService>,
    query: web::Query<UniversityQuery>,
) -> Result<HttpResponse> {
    match service.list(&query.into_inner()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(page))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/universities/{id}",
    tag = "university",
    params(("id" = i32, Path, description = "大学ID")),
    responses(
        (status = 200, description = "大学详情（含课程）", body = UniversityDetailResponse),
        (status = 404, description = "不存在", body = ApiError)
    )
)]
pub async fn get_university(
    service: web::Data<UniversityService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match service.get(path.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(ApiResponse::success(data))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/universities",
    tag = "university",
    request_body = UniversityRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "创建成功", body = UniversityResponse),
        (status = 400, description = "参数错误或 slug 重复", body = ApiError)
    )
)]
pub async fn create_university(
    service: web::Data<UniversityService>,
    body: web::Json<UniversityRequest>,
) -> Result<HttpResponse> {
    match service.create(body.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Created().json(ApiResponse::success(data))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/universities/{id}",
    tag = "university",
    params(("id" = i32, Path, description = "大学ID")),
    request_body = UniversityRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "更新成功", body = UniversityResponse),
        (status = 404, description = "不存在", body = ApiError)
    )
)]
pub async fn update_university(
    service: web::Data<UniversityService>,
    path: web::Path<i32>,
    body: web::Json<UniversityRequest>,
) -> Result<HttpResponse> {
    match service.update(path.into_inner(), body.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(ApiResponse::success(data))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/universities/{id}",
    tag = "university",
    params(("id" = i32, Path, description = "大学ID")),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "删除成功"),
        (status = 404, description = "不存在", body = ApiError)
    )
)]
pub async fn delete_university(
    service: web::Data<UniversityService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match service.delete(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "University deleted"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn university_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/universities")
            .route("", web::get().to(list_universities))
            .route("", web::post().to(create_university))
            .route("/{id}", web::get().to(get_university))
            .route("/{id}", web::put().to(update_university))
            .route("/{id}", web::delete().to(delete_university)),
    );
}
