use crate::models::*;
use crate::services::DocumentationService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/documentation",
    tag = "documentation",
    params(
        ("category" = Option<String>, Query, description = "材料分类")
    ),
    responses(
        (status = 200, description = "申请材料清单", body = [DocumentationResponse])
    )
)]
pub async fn list_documentation(
    service: web::Data<DocumentationService>,
    query: web::Query<DocumentationQuery>,
) -> Result<HttpResponse> {
    match service.list(&query.into_inner()).await {
        Ok(list) => Ok(HttpResponse::Ok().json(ApiResponse::success(list))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/documentation",
    tag = "documentation",
    request_body = DocumentationRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "创建成功", body = DocumentationResponse),
        (status = 400, description = "参数错误", body = ApiError)
    )
)]
pub async fn create_documentation(
    service: web::Data<DocumentationService>,
    body: web::Json<DocumentationRequest>,
) -> Result<HttpResponse> {
    match service.create(body.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Created().json(ApiResponse::success(data))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/documentation/{id}",
    tag = "documentation",
    params(("id" = i32, Path, description = "材料ID")),
    request_body = DocumentationRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "更新成功", body = DocumentationResponse),
        (status = 404, description = "不存在", body = ApiError)
    )
)]
pub async fn update_documentation(
    service: web::Data<DocumentationService>,
    path: web::Path<i32>,
    body: web::Json<DocumentationRequest>,
) -> Result<HttpResponse> {
    match service.update(path.into_inner(), body.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(ApiResponse::success(data))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/documentation/{id}",
    tag = "documentation",
    params(("id" = i32, Path, description = "材料ID")),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "删除成功"),
        (status = 404, description = "不存在", body = ApiError)
    )
)]
pub async fn delete_documentation(
    service: web::Data<DocumentationService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match service.delete(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Documentation item deleted"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn documentation_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/documentation")
            .route("", web::get().to(list_documentation))
            .route("", web::post().to(create_documentation))
            .route("/{id}", web::put().to(update_documentation))
            .route("/{id}", web::delete().to(delete_documentation)),
    );
}
