mod common;

use ayurchat::{db, models};
use serde_json::json;

#[tokio::test]
async fn settings_default_then_partial_updates() {
    let Some(app) = common::spawn_app_with_database("http://127.0.0.1:1").await else {
        return;
    };
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .get(&format!("{}/settings/user-1", &app.address))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();
    assert_eq!(body["item"]["theme"], "system");
    assert_eq!(body["item"]["profile_visibility"], "public");
    assert_eq!(body["item"]["email_notifications"], true);

    let body: serde_json::Value = client
        .put(&format!("{}/settings/user-1", &app.address))
        .json(&json!({"theme": "dark", "push_notifications": false}))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();
    assert_eq!(body["item"]["theme"], "dark");
    assert_eq!(body["item"]["push_notifications"], false);
    assert_eq!(body["item"]["email_notifications"], true);

    let body: serde_json::Value = client
        .put(&format!("{}/settings/user-1", &app.address))
        .json(&json!({"profile_visibility": "private"}))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();
    assert_eq!(body["item"]["theme"], "dark");
    assert_eq!(body["item"]["profile_visibility"], "private");

    let (theme, visibility) = sqlx::query_as::<_, (String, String)>(
        "SELECT theme, profile_visibility FROM user_settings WHERE user_id = $1",
    )
    .bind("user-1")
    .fetch_one(&app.db_pool)
    .await
    .expect("Failed to fetch saved settings.");
    assert_eq!((theme.as_str(), visibility.as_str()), ("dark", "private"));
}

#[tokio::test]
async fn settings_reject_unknown_enum_values() {
    let Some(app) = common::spawn_app_with_database("http://127.0.0.1:1").await else {
        return;
    };

    let response = reqwest::Client::new()
        .put(&format!("{}/settings/user-3", &app.address))
        .json(&json!({"theme": "sepia"}))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    let message = body["message"].as_str().expect("message in error body");
    assert!(message.starts_with("Invalid payload"), "{}", message);
}

#[tokio::test]
async fn stale_write_keeps_newer_updated_at() {
    let Some(app) = common::spawn_app_with_database("http://127.0.0.1:1").await else {
        return;
    };

    let response = reqwest::Client::new()
        .put(&format!("{}/settings/user-4", &app.address))
        .json(&json!({"theme": "light"}))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());

    let future: chrono::DateTime<chrono::Utc> = sqlx::query_scalar(
        "UPDATE user_settings SET updated_at = NOW() + INTERVAL '1 day' WHERE user_id = $1 RETURNING updated_at",
    )
    .bind("user-4")
    .fetch_one(&app.db_pool)
    .await
    .expect("Failed to move updated_at forward.");

    let mut stale = models::UserSettings::defaults_for("user-4".to_string());
    stale.theme = models::Theme::Dark;
    let saved = db::settings::upsert(&app.db_pool, stale)
        .await
        .expect("Failed to save settings.");

    assert_eq!(saved.theme, models::Theme::Dark);
    assert_eq!(saved.updated_at, future);
}
