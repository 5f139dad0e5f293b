mod common;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn health_check_reports_unreachable_database() {
    let detection = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&detection)
        .await;

    let app = common::spawn_app(&detection.uri()).await;
    let response = reqwest::Client::new()
        .get(&format!("{}/health_check", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 503);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["components"]["database"]["status"], "unhealthy");
    assert_eq!(body["components"]["image_detection"]["status"], "healthy");
}

#[tokio::test]
async fn health_check_works() {
    let detection = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&detection)
        .await;

    let Some(app) = common::spawn_app_with_database(&detection.uri()).await else {
        return;
    };
    let response = reqwest::Client::new()
        .get(&format!("{}/health_check", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["components"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn missing_detection_service_only_degrades() {
    let detection = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&detection)
        .await;

    let Some(app) = common::spawn_app_with_database(&detection.uri()).await else {
        return;
    };
    let response = reqwest::Client::new()
        .get(&format!("{}/health_check", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "degraded");
}
