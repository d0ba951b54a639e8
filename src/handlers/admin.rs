use crate::models::*;
use crate::services::UserService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/admin/users",
    tag = "admin",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "后台账号列表", body = [UserResponse]),
        (status = 401, description = "未授权"),
        (status = 403, description = "非管理员")
    )
)]
pub async fn list_users(service: web::Data<UserService>) -> Result<HttpResponse> {
    match service.list().await {
        Ok(list) => Ok(HttpResponse::Ok().json(ApiResponse::success(list))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/admin/users",
    tag = "admin",
    request_body = CreateUserRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "创建成功", body = UserResponse),
        (status = 400, description = "参数错误或邮箱已存在", body = ApiError)
    )
)]
pub async fn create_user(
    service: web::Data<UserService>,
    body: web::Json<CreateUserRequest>,
) -> Result<HttpResponse> {
    match service.create(body.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Created().json(ApiResponse::success(data))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/admin/users/{id}",
    tag = "admin",
    params(("id" = i32, Path, description = "账号ID")),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "删除成功"),
        (status = 404, description = "不存在", body = ApiError)
    )
)]
pub async fn delete_user(
    service: web::Data<UserService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match service.delete(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "User deleted"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn admin_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/users", web::get().to(list_users))
            .route("/users", web::post().to(create_user))
            .route("/users/{id}", web::delete().to(delete_user)),
    );
}
