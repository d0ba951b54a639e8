use crate::middlewares::is_admin_request;
use crate::models::*;
use crate::services::BlogService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/blogs",
    tag = "blog",
    params(
        ("page" = Option<u64>, Query, description = "页码 (默认1)"),
        ("perPage" = Option<u64>, Query, description = "每页数量 (默认20)"),
        ("published" = Option<bool>, Query, description = "发布状态（仅管理员有效）"),
        ("search" = Option<String>, Query, description = "标题 / 摘要")
    ),
    responses(
        (status = 200, description = "文章列表", body = [BlogResponse])
    )
)]
/// 文章列表：匿名访问只返回已发布文章
pub async fn list_blogs(
    service: web::Data<BlogService>,
    req: HttpRequest,
    query: web::Query<BlogQuery>,
) -> Result<HttpResponse> {
    match service.list(&query.into_inner(), is_admin_request(&req)).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(page))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/blogs/{slug}",
    tag = "blog",
    params(("slug" = String, Path, description = "文章 slug")),
    responses(
        (status = 200, description = "文章详情", body = BlogResponse),
        (status = 404, description = "不存在或未发布", body = ApiError)
    )
)]
pub async fn get_blog(
    service: web::Data<BlogService>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match service.get_by_slug(&path, is_admin_request(&req)).await {
        Ok(data) => Ok(HttpResponse::Ok().json(ApiResponse::success(data))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/blogs",
    tag = "blog",
    request_body = BlogRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "创建成功", body = BlogResponse),
        (status = 400, description = "参数错误或 slug 重复", body = ApiError)
    )
)]
pub async fn create_blog(
    service: web::Data<BlogService>,
    body: web::Json<BlogRequest>,
) -> Result<HttpResponse> {
    match service.create(body.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Created().json(ApiResponse::success(data))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/blogs/{id}",
    tag = "blog",
    params(("id" = i32, Path, description = "文章ID")),
    request_body = BlogRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "更新成功", body = BlogResponse),
        (status = 404, description = "不存在", body = ApiError)
    )
)]
pub async fn update_blog(
    service: web::Data<BlogService>,
    path: web::Path<i32>,
    body: web::Json<BlogRequest>,
) -> Result<HttpResponse> {
    match service.update(path.into_inner(), body.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(ApiResponse::success(data))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/blogs/{id}",
    tag = "blog",
    params(("id" = i32, Path, description = "文章ID")),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "删除成功"),
        (status = 404, description = "不存在", body = ApiError)
    )
)]
pub async fn delete_blog(
    service: web::Data<BlogService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match service.delete(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Blog post deleted"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

// GET 按 slug，PUT / DELETE 按 id
pub fn blog_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/blogs")
            .route("", web::get().to(list_blogs))
            .route("", web::post().to(create_blog))
            .route("/{slug}", web::get().to(get_blog))
            .route("/{id}", web::put().to(update_blog))
            .route("/{id}", web::delete().to(delete_blog)),
    );
}
