use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::LuckyDrawService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

/// 记录来源 IP 和 User-Agent
fn client_info(req: &HttpRequest) -> ClientInfo {
    let ip_address = req
        .connection_info()
        .realip_remote_addr()
        .map(|addr| addr.to_string());
    let user_agent = req
        .headers()
        .get("User-Agent")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());
    ClientInfo {
        ip_address,
        user_agent,
    }
}

#[utoipa::path(
    post,
    path = "/luckydraw/enter",
    tag = "lucky_draw",
    request_body = EnterLuckyDrawRequest,
    responses(
        (status = 201, description = "报名成功", body = EnterLuckyDrawResponse),
        (status = 400, description = "缺少字段或邮箱已报名", body = ApiError)
    )
)]
/// 报名参加抽奖
pub async fn enter(
    service: web::Data<LuckyDrawService>,
    req: HttpRequest,
    body: web::Json<EnterLuckyDrawRequest>,
) -> Result<HttpResponse> {
    match service.enter(body.into_inner(), client_info(&req)).await {
        Ok(data) => Ok(HttpResponse::Created().json(ApiResponse::success_with_message(
            data,
            "Successfully entered the lucky draw",
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

fn parse_run_request(body: &[u8]) -> AppResult<RunDrawRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(RunDrawRequest::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::ValidationError(format!("Invalid request body: {e}")))
}

#[utoipa::path(
    post,
    path = "/luckydraw/run",
    tag = "lucky_draw",
    request_body = RunDrawRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "开奖成功", body = RunDrawResponse),
        (status = 400, description = "没有可参与的报名或中奖人数不合法", body = ApiError),
        (status = 401, description = "未授权"),
        (status = 403, description = "非管理员")
    )
)]
/// 开奖：从未中奖的报名中随机抽取中奖者（请求体可为空）
pub async fn run_draw(
    service: web::Data<LuckyDrawService>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let request = match parse_run_request(&body) {
        Ok(request) => request,
        Err(e) => return Ok(e.error_response()),
    };
    match service.run_draw(request).await {
        Ok(data) => {
            let message = format!("{} winner(s) selected", data.winners.len());
            Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(data, message)))
        }
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/luckydraw/entries",
    tag = "lucky_draw",
    params(
        ("page" = Option<u64>, Query, description = "页码 (默认1)"),
        ("perPage" = Option<u64>, Query, description = "每页数量 (默认20)"),
        ("isWinner" = Option<bool>, Query, description = "是否中奖"),
        ("search" = Option<String>, Query, description = "姓名 / 邮箱 / 电话")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "获取报名列表成功", body = [LuckyDrawEntryResponse]),
        (status = 401, description = "未授权")
    )
)]
pub async fn list_entries(
    service: web::Data<LuckyDrawService>,
    query: web::Query<LuckyDrawEntryQuery>,
) -> Result<HttpResponse> {
    match service.list_entries(&query.into_inner()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(page))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/luckydraw/entries/{id}/notify",
    tag = "lucky_draw",
    params(
        ("id" = i32, Path, description = "报名ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "已标记通知", body = LuckyDrawEntryResponse),
        (status = 400, description = "该报名未中奖", body = ApiError),
        (status = 404, description = "报名不存在", body = ApiError)
    )
)]
pub async fn mark_notified(
    service: web::Data<LuckyDrawService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match service.mark_notified(path.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(ApiResponse::success(data))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/luckydraw/stats",
    tag = "lucky_draw",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "统计信息", body = LuckyDrawStatsResponse)
    )
)]
pub async fn stats(service: web::Data<LuckyDrawService>) -> Result<HttpResponse> {
    match service.stats().await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": data }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// 路由配置
pub fn lucky_draw_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/luckydraw")
            .route("/enter", web::post().to(enter))
            .route("/run", web::post().to(run_draw))
            .route("/entries", web::get().to(list_entries))
            .route("/entries/{id}/notify", web::post().to(mark_notified))
            .route("/stats", web::get().to(stats)),
    );
}
