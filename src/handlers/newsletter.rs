use crate::models::*;
use crate::services::NewsletterService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    post,
    path = "/newsletter/subscribe",
    tag = "newsletter",
    request_body = NewsletterRequest,
    responses(
        (status = 201, description = "订阅成功", body = NewsletterResponse),
        (status = 400, description = "邮箱无效或已订阅", body = ApiError)
    )
)]
pub async fn subscribe(
    service: web::Data<NewsletterService>,
    body: web::Json<NewsletterRequest>,
) -> Result<HttpResponse> {
    match service.subscribe(body.email.as_deref()).await {
        Ok(data) => Ok(HttpResponse::Created().json(ApiResponse::success_with_message(
            data,
            "Subscribed to the newsletter",
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/newsletter/unsubscribe",
    tag = "newsletter",
    request_body = NewsletterRequest,
    responses(
        (status = 200, description = "已退订"),
        (status = 404, description = "未找到订阅", body = ApiError)
    )
)]
pub async fn unsubscribe(
    service: web::Data<NewsletterService>,
    body: web::Json<NewsletterRequest>,
) -> Result<HttpResponse> {
    match service.unsubscribe(body.email.as_deref()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Unsubscribed from the newsletter"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/newsletter",
    tag = "newsletter",
    params(
        ("page" = Option<u64>, Query, description = "页码 (默认1)"),
        ("perPage" = Option<u64>, Query, description = "每页数量 (默认20)"),
        ("active" = Option<bool>, Query, description = "是否有效订阅"),
        ("search" = Option<String>, Query, description = "邮箱关键词")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "订阅列表", body = [NewsletterResponse]),
        (status = 401, description = "未授权")
    )
)]
pub async fn list_subscribers(
    service: web::Data<NewsletterService>,
    query: web::Query<NewsletterQuery>,
) -> Result<HttpResponse> {
    match service.list(&query.into_inner()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(page))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn newsletter_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/newsletter")
            .route("", web::get().to(list_subscribers))
            .route("/subscribe", web::post().to(subscribe))
            .route("/unsubscribe", web::post().to(unsubscribe)),
    );
}
