use crate::models::*;
use crate::services::CourseService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/courses",
    tag = "course",
    params(
        ("page" = Option<u64>, Query, description = "页码 (默认1)"),
        ("perPage" = Option<u64>, Query, description = "每页数量 (默认20)"),
        ("universityId" = Option<i32>, Query, description = "所属大学"),
        ("level" = Option<String>, Query, description = "学历层次"),
        ("search" = Option<String>, Query, description = "课程名称 / 简介")
    ),
    responses(
        (status = 200, description = "课程列表", body = [CourseResponse])
    )
)]
pub async fn list_courses(
    service: web::Data<CourseService>,
    query: web::Query<CourseQuery>,
) -> Result<HttpResponse> {
    match service.list(&query.into_inner()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(page))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/courses/{id}",
    tag = "course",
    params(("id" = i32, Path, description = "课程ID")),
    responses(
        (status = 200, description = "课程详情", body = CourseResponse),
        (status = 404, description = "不存在", body = ApiError)
    )
)]
pub async fn get_course(
    service: web::Data<CourseService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match service.get(path.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(ApiResponse::success(data))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/courses",
    tag = "course",
    request_body = CourseRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "创建成功", body = CourseResponse),
        (status = 400, description = "参数错误或大学不存在", body = ApiError)
    )
)]
pub async fn create_course(
    service: web::Data<CourseService>,
    body: web::Json<CourseRequest>,
) -> Result<HttpResponse> {
    match service.create(body.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Created().json(ApiResponse::success(data))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/courses/{id}",
    tag = "course",
    params(("id" = i32, Path, description = "课程ID")),
    request_body = CourseRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "更新成功", body = CourseResponse),
        (status = 404, description = "不存在", body = ApiError)
    )
)]
pub async fn update_course(
    service: web::Data<CourseService>,
    path: web::Path<i32>,
    body: web::Json<CourseRequest>,
) -> Result<HttpResponse> {
    match service.update(path.into_inner(), body.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(ApiResponse::success(data))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/courses/{id}",
    tag = "course",
    params(("id" = i32, Path, description = "课程ID")),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "删除成功"),
        (status = 404, description = "不存在", body = ApiError)
    )
)]
pub async fn delete_course(
    service: web::Data<CourseService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match service.delete(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Course deleted"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn course_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/courses")
            .route("", web::get().to(list_courses))
            .route("", web::post().to(create_course))
            .route("/{id}", web::get().to(get_course))
            .route("/{id}", web::put().to(update_course))
            .route("/{id}", web::delete().to(delete_course)),
    );
}
