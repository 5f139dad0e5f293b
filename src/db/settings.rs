use crate::models::{self, Touch};
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch(pool: &PgPool, user_id: &str) -> Result<Option<models::UserSettings>, String> {
    let query_span = tracing::info_span!("Fetch user settings.", user_id = %user_id);
    sqlx::query_as::<_, models::UserSettings>(
        r#"
        SELECT user_id, theme, email_notifications, push_notifications, profile_visibility, updated_at
        FROM user_settings
        WHERE user_id = $1
        LIMIT 1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch user settings, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn upsert(
    pool: &PgPool,
    settings: models::UserSettings,
) -> Result<models::UserSettings, String> {
    let settings = settings.touch();
    let query_span = tracing::info_span!("Saving user settings into the database.");
    sqlx::query_as::<_, models::UserSettings>(
        r#"
        INSERT INTO user_settings (user_id, theme, email_notifications, push_notifications, profile_visibility, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (user_id) DO UPDATE SET
            theme = EXCLUDED.theme,
            email_notifications = EXCLUDED.email_notifications,
            push_notifications = EXCLUDED.push_notifications,
            profile_visibility = EXCLUDED.profile_visibility,
            updated_at = GREATEST(user_settings.updated_at, EXCLUDED.updated_at)
        RETURNING user_id, theme, email_notifications, push_notifications, profile_visibility, updated_at
        "#,
    )
    .bind(&settings.user_id)
    .bind(settings.theme)
    .bind(settings.email_notifications)
    .bind(settings.push_notifications)
    .bind(settings.profile_visibility)
    .bind(settings.updated_at)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to save settings".to_string()
    })
}
