//! Shared fixtures for the HTTP integration tests: an in-memory SQLite
//! database migrated with the real migrations, the full `/api/v1` app and
//! admin tokens signed with the test secret.

#![allow(dead_code)]

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, Error, web};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use sea_orm::DatabaseConnection;
use studyabroad_backend::config::{DatabaseConfig, LuckyDrawConfig};
use studyabroad_backend::database::{create_pool, run_migrations};
use studyabroad_backend::handlers;
use studyabroad_backend::middlewares::AuthMiddleware;
use studyabroad_backend::services::AppServices;
use studyabroad_backend::utils::{Claims, JwtService};

pub const TEST_SECRET: &str = "integration-test-secret";

/// Fresh, fully migrated database per test.
pub async fn setup_db() -> DatabaseConnection {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
    };
    let pool = create_pool(&config)
        .await
        .expect("Failed to open in-memory database");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

pub fn build_app(
    pool: DatabaseConnection,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let services = AppServices::new(pool, LuckyDrawConfig::default());
    App::new()
        .wrap(AuthMiddleware::new(JwtService::new(TEST_SECRET)))
        .configure(|cfg| services.register(cfg))
        .service(web::scope("/api/v1").configure(handlers::api_config))
}

fn sign(role: &str) -> String {
    let now = Utc::now();
    let claims = Claims {
        sub: "1".to_string(),
        role: role.to_string(),
        exp: (now + Duration::hours(1)).timestamp(),
        iat: now.timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("Failed to sign test token")
}

pub fn admin_token() -> String {
    sign("admin")
}

pub fn editor_token() -> String {
    sign("editor")
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}
