//! HTTP tests for the public content catalogue and its admin CRUD.

mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use common::{admin_token, bearer, build_app, editor_token, setup_db};
use serde_json::{Value, json};

#[actix_web::test]
async fn test_university_and_course_catalogue() {
    let pool = setup_db().await;
    let app = test::init_service(build_app(pool)).await;

    // 匿名用户不能写
    let req = test::TestRequest::post()
        .uri("/api/v1/universities")
        .set_json(json!({ "name": "Monash University", "country": "Australia" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let req = test::TestRequest::post()
        .uri("/api/v1/universities")
        .insert_header(bearer(&admin_token()))
        .set_json(json!({
            "name": "Monash University",
            "country": "Australia",
            "city": "Melbourne",
            "isFeatured": true
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["slug"], "monash-university");
    let university_id = body["data"]["id"].as_i64().unwrap();

    // 同名会生成相同 slug
    let req = test::TestRequest::post()
        .uri("/api/v1/universities")
        .insert_header(bearer(&admin_token()))
        .set_json(json!({ "name": "Monash  University!", "country": "Malaysia" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "CONFLICT");

    let req = test::TestRequest::post()
        .uri("/api/v1/courses")
        .insert_header(bearer(&admin_token()))
        .set_json(json!({
            "universityId": university_id,
            "name": "Master of Data Science",
            "level": "Master",
            "duration": "2 years"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["universityName"], "Monash University");
    let course_id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/v1/courses")
        .insert_header(bearer(&admin_token()))
        .set_json(json!({ "universityId": 999, "name": "Ghost", "level": "Bachelor" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    let req = test::TestRequest::get()
        .uri("/api/v1/universities?country=Australia&search=melb")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["total"], 1);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/universities/{university_id}"))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["name"], "Monash University");
    assert_eq!(body["data"]["courses"][0]["id"].as_i64().unwrap(), course_id);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/courses?universityId={university_id}&level=Master"))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["total"], 1);

    // 删除大学会级联删除课程
    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/universities/{university_id}"))
        .insert_header(bearer(&admin_token()))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/courses/{course_id}"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn test_blog_drafts_are_hidden_from_public() {
    let pool = setup_db().await;
    let app = test::init_service(build_app(pool)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/blogs")
        .insert_header(bearer(&admin_token()))
        .set_json(json!({ "title": "Visa Checklist 2027", "content": "Draft body" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["slug"], "visa-checklist-2027");
    assert!(body["data"]["publishedAt"].is_null());
    let blog_id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri("/api/v1/blogs/visa-checklist-2027")
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    let req = test::TestRequest::get()
        .uri("/api/v1/blogs/visa-checklist-2027")
        .insert_header(bearer(&admin_token()))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/blogs/{blog_id}"))
        .insert_header(bearer(&admin_token()))
        .set_json(json!({
            "title": "Visa Checklist 2027",
            "content": "Final body",
            "published": true
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["data"]["publishedAt"].is_string());

    let req = test::TestRequest::get().uri("/api/v1/blogs").to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["content"], "Final body");

    let req = test::TestRequest::post()
        .uri("/api/v1/blogs")
        .insert_header(bearer(&admin_token()))
        .set_json(json!({
            "title": "Another",
            "slug": "visa-checklist-2027",
            "content": "x"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "CONFLICT");
}

#[actix_web::test]
async fn test_testimonials_public_only_sees_active() {
    let pool = setup_db().await;
    let app = test::init_service(build_app(pool)).await;

    for (name, active) in [("Asha", true), ("Bikash", false)] {
        let req = test::TestRequest::post()
            .uri("/api/v1/testimonials")
            .insert_header(bearer(&admin_token()))
            .set_json(json!({
                "name": name,
                "message": "Helpful counsellors",
                "isActive": active
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["rating"], 5);
    }

    let req = test::TestRequest::post()
        .uri("/api/v1/testimonials")
        .insert_header(bearer(&admin_token()))
        .set_json(json!({ "name": "Chandra", "message": "ok", "rating": 9 }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    let req = test::TestRequest::get()
        .uri("/api/v1/testimonials?active=false")
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["name"], "Asha");

    let req = test::TestRequest::get()
        .uri("/api/v1/testimonials?active=false")
        .insert_header(bearer(&admin_token()))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["name"], "Bikash");
}

#[actix_web::test]
async fn test_process_steps_are_ordered_and_unique() {
    let pool = setup_db().await;
    let app = test::init_service(build_app(pool)).await;

    for (number, title) in [(2, "Apply"), (1, "Counselling"), (3, "Visa")] {
        let req = test::TestRequest::post()
            .uri("/api/v1/process-steps")
            .insert_header(bearer(&admin_token()))
            .set_json(json!({
                "stepNumber": number,
                "title": title,
                "description": "…"
            }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CREATED
        );
    }

    let req = test::TestRequest::post()
        .uri("/api/v1/process-steps")
        .insert_header(bearer(&admin_token()))
        .set_json(json!({ "stepNumber": 1, "title": "Dup", "description": "x" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "CONFLICT");

    let req = test::TestRequest::get().uri("/api/v1/process-steps").to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let titles: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Counselling", "Apply", "Visa"]);
}

#[actix_web::test]
async fn test_documentation_filtered_by_category() {
    let pool = setup_db().await;
    let app = test::init_service(build_app(pool)).await;

    for (title, category, order) in [
        ("Bank statement", "Financial", 2),
        ("Passport", "Identity", 1),
        ("Sponsor letter", "Financial", 1),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/v1/documentation")
            .insert_header(bearer(&admin_token()))
            .set_json(json!({
                "title": title,
                "category": category,
                "description": "Required for the visa file",
                "sortOrder": order
            }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CREATED
        );
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/documentation?category=Financial")
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let titles: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Sponsor letter", "Bank statement"]);
}

#[actix_web::test]
async fn test_admin_users_crud() {
    let pool = setup_db().await;
    let app = test::init_service(build_app(pool)).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/admin/users")
        .insert_header(bearer(&editor_token()))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::FORBIDDEN
    );

    let req = test::TestRequest::post()
        .uri("/api/v1/admin/users")
        .insert_header(bearer(&admin_token()))
        .set_json(json!({ "name": "Sita", "email": "sita@consultancy.example" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["role"], "editor");
    let user_id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/v1/admin/users")
        .insert_header(bearer(&admin_token()))
        .set_json(json!({ "name": "Sita 2", "email": "SITA@consultancy.example", "role": "admin" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/admin/users/{user_id}"))
        .insert_header(bearer(&admin_token()))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/v1/admin/users")
        .insert_header(bearer(&admin_token()))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_out_of_range_page_returns_empty_page() {
    let pool = setup_db().await;
    let app = test::init_service(build_app(pool)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/universities")
        .insert_header(bearer(&admin_token()))
        .set_json(json!({ "name": "Lincoln University", "country": "New Zealand" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/universities?page={}", u64::MAX))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 0);
}
