//! HTTP tests for contact, B2B and newsletter lead intake.

mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use common::{admin_token, bearer, build_app, setup_db};
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::{Value, json};
use studyabroad_backend::entities::{contact_submission_entity as contacts, newsletter_entity};

fn contact_form() -> Value {
    json!({
        "name": "Asha Gurung",
        "email": "Asha@Example.com",
        "phone": "+977 980-1234567",
        "education": "Bachelor in Business",
        "countryToGo": "Australia",
        "budget": "AUD 30,000",
        "timeline": "February 2027",
        "message": "Looking for MBA options"
    })
}

#[actix_web::test]
async fn test_contact_missing_fields_are_all_listed() {
    let pool = setup_db().await;
    let app = test::init_service(build_app(pool.clone())).await;

    let mut form = contact_form();
    let obj = form.as_object_mut().unwrap();
    obj.remove("phone");
    obj.insert("budget".into(), json!("   "));

    let req = test::TestRequest::post()
        .uri("/api/v1/contact")
        .set_json(form)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["message"], "Missing required fields: phone, budget");
    assert_eq!(contacts::Entity::find().count(&pool).await.unwrap(), 0);
}

#[actix_web::test]
async fn test_contact_invalid_email() {
    let pool = setup_db().await;
    let app = test::init_service(build_app(pool.clone())).await;

    let mut form = contact_form();
    form["email"] = json!("not-an-email");
    let req = test::TestRequest::post()
        .uri("/api/v1/contact")
        .set_json(form)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(contacts::Entity::find().count(&pool).await.unwrap(), 0);
}

#[actix_web::test]
async fn test_contact_unknown_university_is_rejected() {
    let pool = setup_db().await;
    let app = test::init_service(build_app(pool.clone())).await;

    let mut form = contact_form();
    form["universityId"] = json!(42);
    let req = test::TestRequest::post()
        .uri("/api/v1/contact")
        .set_json(form)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_contact_create_list_and_process() {
    let pool = setup_db().await;
    let app = test::init_service(build_app(pool)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/universities")
        .insert_header(bearer(&admin_token()))
        .set_json(json!({ "name": "University of Sydney", "country": "Australia" }))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let university_id = body["data"]["id"].as_i64().unwrap();

    let mut form = contact_form();
    form["universityId"] = json!(university_id);
    let req = test::TestRequest::post()
        .uri("/api/v1/contact")
        .set_json(form)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let contact_id = body["data"]["id"].as_i64().unwrap();

    // 列表需要管理员
    let req = test::TestRequest::get().uri("/api/v1/contact").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let req = test::TestRequest::get()
        .uri("/api/v1/contact?processed=false&search=australia")
        .insert_header(bearer(&admin_token()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["total"], 1);
    let item = &body["data"]["items"][0];
    assert_eq!(item["email"], "asha@example.com");
    assert_eq!(item["phone"], "+9779801234567");
    assert_eq!(item["universityName"], "University of Sydney");

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/contact/{contact_id}/processed"))
        .insert_header(bearer(&admin_token()))
        .set_json(json!({ "processed": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["processed"], true);

    let req = test::TestRequest::get()
        .uri("/api/v1/contact?processed=false")
        .insert_header(bearer(&admin_token()))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["total"], 0);

    let req = test::TestRequest::get()
        .uri("/api/v1/contact/999")
        .insert_header(bearer(&admin_token()))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn test_b2b_enquiry_flow() {
    let pool = setup_db().await;
    let app = test::init_service(build_app(pool)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/b2b")
        .set_json(json!({ "companyName": "Everest Education" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"]["message"],
        "Missing required fields: contactPerson, email, phone, country, message"
    );

    let req = test::TestRequest::post()
        .uri("/api/v1/b2b")
        .set_json(json!({
            "companyName": "Everest Education",
            "contactPerson": "Ram Thapa",
            "email": "ram@everest.example",
            "phone": "01-4412345",
            "country": "Nepal",
            "partnershipType": "Agent",
            "message": "We would like to refer students"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/b2b/{id}/processed"))
        .insert_header(bearer(&admin_token()))
        .set_json(json!({ "processed": true }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/v1/b2b?processed=true&search=everest")
        .insert_header(bearer(&admin_token()))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["partnershipType"], "Agent");
}

#[actix_web::test]
async fn test_newsletter_subscribe_unsubscribe_resubscribe() {
    let pool = setup_db().await;
    let app = test::init_service(build_app(pool.clone())).await;

    let subscribe = || {
        test::TestRequest::post()
            .uri("/api/v1/newsletter/subscribe")
            .set_json(json!({ "email": "reader@example.com" }))
            .to_request()
    };

    assert_eq!(
        test::call_service(&app, subscribe()).await.status(),
        StatusCode::CREATED
    );

    let resp = test::call_service(&app, subscribe()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "CONFLICT");

    let req = test::TestRequest::post()
        .uri("/api/v1/newsletter/unsubscribe")
        .set_json(json!({ "email": "READER@example.com" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/v1/newsletter?active=false")
        .insert_header(bearer(&admin_token()))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["total"], 1);

    // 退订后重新订阅会复用原记录
    let resp = test::call_service(&app, subscribe()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["isActive"], true);
    assert_eq!(newsletter_entity::Entity::find().count(&pool).await.unwrap(), 1);
}

#[actix_web::test]
async fn test_newsletter_unknown_email_unsubscribe() {
    let pool = setup_db().await;
    let app = test::init_service(build_app(pool)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/newsletter/unsubscribe")
        .set_json(json!({ "email": "nobody@example.com" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn test_malformed_json_returns_envelope() {
    let pool = setup_db().await;
    let app = test::init_service(build_app(pool)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/contact")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}
