use crate::error::AppError;
use crate::utils::{Claims, JwtService};
use actix_web::body::EitherBody;
use actix_web::http::Method;
use actix_web::{
    Error, HttpMessage, HttpRequest, ResponseError,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use futures_util::future::LocalBoxFuture;
use std::future::{Ready, ready};

const API_PREFIX: &str = "/api/v1";

// 匿名可提交的表单接口（仅 POST）
const PUBLIC_SUBMISSIONS: &[&str] = &[
    "/luckydraw/enter",
    "/contact",
    "/b2b",
    "/newsletter/subscribe",
    "/newsletter/unsubscribe",
];

// 内容资源：GET 公开，写操作需管理员
const PUBLIC_CONTENT: &[&str] = &[
    "/universities",
    "/courses",
    "/blogs",
    "/testimonials",
    "/process-steps",
    "/documentation",
];

/// 判断请求是否需要管理员令牌。`/api/v1` 之外的路径（Swagger 等）一律公开，
/// 之内的路径默认需要管理员，除非命中公开规则。
pub fn requires_admin(method: &Method, path: &str) -> bool {
    if *method == Method::OPTIONS {
        return false;
    }
    let Some(rest) = path.strip_prefix(API_PREFIX) else {
        return false;
    };
    let rest = match rest.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };

    if *method == Method::POST && PUBLIC_SUBMISSIONS.contains(&rest) {
        return false;
    }

    if *method == Method::GET || *method == Method::HEAD {
        let is_content = PUBLIC_CONTENT
            .iter()
            .any(|prefix| rest == *prefix || rest.starts_with(&format!("{prefix}/")));
        if is_content {
            return false;
        }
    }

    true
}

fn bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

pub struct AuthMiddleware {
    jwt_service: JwtService,
}

impl AuthMiddleware {
    pub fn new(jwt_service: JwtService) -> Self {
        Self { jwt_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service,
            jwt_service: self.jwt_service.clone(),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
    jwt_service: JwtService,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let admin_only = requires_admin(req.method(), req.path());
        let token = bearer_token(&req);

        match (admin_only, token) {
            (true, None) => {
                let error = AppError::AuthError("Missing access token".to_string());
                let response = req.into_response(error.error_response()).map_into_right_body();
                Box::pin(async move { Ok(response) })
            }
            (true, Some(token)) => match self.jwt_service.verify_admin_token(&token) {
                Ok(claims) => {
                    req.extensions_mut().insert(claims);
                    let fut = self.service.call(req);
                    Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
                }
                Err(error) => {
                    let response =
                        req.into_response(error.error_response()).map_into_right_body();
                    Box::pin(async move { Ok(response) })
                }
            },
            (false, token) => {
                // 公开接口携带有效管理员令牌时也注入 Claims，便于查看草稿等内容
                if let Some(claims) = token.and_then(|t| self.jwt_service.verify_admin_token(&t).ok())
                {
                    req.extensions_mut().insert(claims);
                }
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
        }
    }
}

/// 当前请求是否由管理员发起（中间件校验通过后注入）
pub fn is_admin_request(req: &HttpRequest) -> bool {
    req.extensions().get::<Claims>().is_some_and(Claims::is_admin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_submissions() {
        assert!(!requires_admin(&Method::POST, "/api/v1/luckydraw/enter"));
        assert!(!requires_admin(&Method::POST, "/api/v1/contact"));
        assert!(!requires_admin(&Method::POST, "/api/v1/contact/"));
        assert!(!requires_admin(&Method::POST, "/api/v1/b2b"));
        assert!(!requires_admin(&Method::POST, "/api/v1/newsletter/subscribe"));
        assert!(!requires_admin(&Method::POST, "/api/v1/newsletter/unsubscribe"));
    }

    #[test]
    fn test_lead_admin_routes() {
        assert!(requires_admin(&Method::POST, "/api/v1/luckydraw/run"));
        assert!(requires_admin(&Method::GET, "/api/v1/luckydraw/entries"));
        assert!(requires_admin(&Method::GET, "/api/v1/luckydraw/stats"));
        assert!(requires_admin(&Method::GET, "/api/v1/contact"));
        assert!(requires_admin(&Method::PATCH, "/api/v1/contact/3/processed"));
        assert!(requires_admin(&Method::GET, "/api/v1/newsletter"));
        assert!(requires_admin(&Method::GET, "/api/v1/admin/users"));
    }

    #[test]
    fn test_content_reads_are_public_writes_are_not() {
        assert!(!requires_admin(&Method::GET, "/api/v1/universities"));
        assert!(!requires_admin(&Method::GET, "/api/v1/universities/4"));
        assert!(!requires_admin(&Method::GET, "/api/v1/blogs/study-in-japan"));
        assert!(!requires_admin(&Method::GET, "/api/v1/process-steps"));
        assert!(requires_admin(&Method::POST, "/api/v1/universities"));
        assert!(requires_admin(&Method::PUT, "/api/v1/blogs/2"));
        assert!(requires_admin(&Method::DELETE, "/api/v1/documentation/1"));
    }

    #[test]
    fn test_prefix_lookalikes_are_not_public() {
        assert!(requires_admin(&Method::GET, "/api/v1/blogsecret"));
        assert!(requires_admin(&Method::POST, "/api/v1/contact/1"));
    }

    #[test]
    fn test_outside_api_and_preflight() {
        assert!(!requires_admin(&Method::GET, "/swagger-ui/"));
        assert!(!requires_admin(&Method::GET, "/api-docs/openapi.json"));
        assert!(!requires_admin(&Method::OPTIONS, "/api/v1/luckydraw/run"));
    }
}
