use crate::middlewares::is_admin_request;
use crate::models::*;
use crate::services::TestimonialService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/testimonials",
    tag = "testimonial",
    params(
        ("page" = Option<u64>, Query, description = "页码 (默认1)"),
        ("perPage" = Option<u64>, Query, description = "每页数量 (默认20)"),
        ("active" = Option<bool>, Query, description = "启用状态（仅管理员有效）")
    ),
    responses(
        (status = 200, description = "学生评价", body = [TestimonialResponse])
    )
)]
pub async fn list_testimonials(
    service: web::Data<TestimonialService>,
    req: HttpRequest,
    query: web::Query<TestimonialQuery>,
) -> Result<HttpResponse> {
    match service.list(&query.into_inner(), is_admin_request(&req)).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(page))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/testimonials",
    tag = "testimonial",
    request_body = TestimonialRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "创建成功", body = TestimonialResponse),
        (status = 400, description = "参数错误", body = ApiError)
    )
)]
pub async fn create_testimonial(
    service: web::Data<TestimonialService>,
    body: web::Json<TestimonialRequest>,
) -> Result<HttpResponse> {
    match service.create(body.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Created().json(ApiResponse::success(data))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/testimonials/{id}",
    tag = "testimonial",
    params(("id" = i32, Path, description = "评价ID")),
    request_body = TestimonialRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "更新成功", body = TestimonialResponse),
        (status = 404, description = "不存在", body = ApiError)
    )
)]
pub async fn update_testimonial(
    service: web::Data<TestimonialService>,
    path: web::Path<i32>,
    body: web::Json<TestimonialRequest>,
) -> Result<HttpResponse> {
    match service.update(path.into_inner(), body.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(ApiResponse::success(data))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/testimonials/{id}",
    tag = "testimonial",
    params(("id" = i32, Path, description = "评价ID")),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "删除成功"),
        (status = 404, description = "不存在", body = ApiError)
    )
)]
pub async fn delete_testimonial(
    service: web::Data<TestimonialService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match service.delete(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Testimonial deleted"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn testimonial_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/testimonials")
            .route("", web::get().to(list_testimonials))
            .route("", web::post().to(create_testimonial))
            .route("/{id}", web::put().to(update_testimonial))
            .route("/{id}", web::delete().to(delete_testimonial)),
    );
}
