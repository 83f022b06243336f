mod common;

use actix_web::{http::StatusCode, test};

use common::{get_test_slug, TestApp};

#[actix_rt::test]
async fn test_health_check() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["packages"], 1);
    assert_eq!(body["addOns"], 5);
}

#[actix_rt::test]
async fn test_list_packages() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/safari").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let packages = body.as_array().unwrap();
    assert_eq!(packages.len(), 1);
    assert_eq!(packages[0]["slug"], get_test_slug());
}

#[actix_rt::test]
async fn test_list_packages_with_filters() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/safari?category=classic&destination=Lake%20Nakuru")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let req = test::TestRequest::get()
        .uri("/api/safari?category=honeymoon")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[actix_rt::test]
async fn test_list_packages_rejects_unknown_enum() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/safari?difficulty=extreme")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_featured_packages() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/safari/featured")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body[0]["id"], "kenya-classic-7");
    assert_eq!(body[0]["featured"], true);
}

#[actix_rt::test]
async fn test_get_package_by_slug() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/safari/{}", get_test_slug()))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], "kenya-classic-7");
    assert_eq!(body["pricePerPerson"], 2450.0);
    assert_eq!(body["groupSize"]["min"], 2);
    assert_eq!(body["itinerary"].as_array().unwrap().len(), 7);
    assert_eq!(body["itinerary"][2]["accommodation"]["type"], "tented-camp");
    assert_eq!(body["optionalAddOns"][0]["id"], "balloon-safari");
    assert!(body.get("addOnIds").is_none());
}

#[actix_rt::test]
async fn test_get_package_not_found() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/safari/does-not-exist")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Safari package not found: does-not-exist");
}

#[actix_rt::test]
async fn test_get_itinerary_day() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/safari/{}/itinerary/5", get_test_slug()))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["day"], 5);
    assert_eq!(body["title"], "Mara River & Migration");
    assert!(body.get("travelInfo").is_none());

    let req = test::TestRequest::get()
        .uri(&format!("/api/safari/{}/itinerary/8", get_test_slug()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_get_add_ons() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/add-ons").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|add_on| add_on["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec![
            "balloon-safari",
            "maasai-village",
            "bush-dinner",
            "photography-guide",
            "night-drive"
        ]
    );
}
