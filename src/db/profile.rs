use crate::models::{self, Touch};
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch(pool: &PgPool, user_id: &str) -> Result<Option<models::UserProfile>, String> {
    let query_span = tracing::info_span!("Fetch user profile.", user_id = %user_id);
    sqlx::query_as::<_, models::UserProfile>(
        r#"
        SELECT user_id, name, email, avatar, bio, phone, created_at, updated_at
        FROM user_profile
        WHERE user_id = $1
        LIMIT 1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch user profile, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

/// Inserts or replaces the profile keyed by `user_id`. `created_at` of an
/// existing row is kept, `updated_at` is touched right before the write and
/// never moves behind the stored value.
pub async fn upsert(
    pool: &PgPool,
    profile: models::UserProfile,
) -> Result<models::UserProfile, String> {
    let profile = profile.touch();
    let query_span = tracing::info_span!("Saving user profile into the database.");
    sqlx::query_as::<_, models::UserProfile>(
        r#"
        INSERT INTO user_profile (user_id, name, email, avatar, bio, phone, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        ON CONFLICT (user_id) DO UPDATE SET
            name = EXCLUDED.name,
            email = EXCLUDED.email,
            avatar = EXCLUDED.avatar,
            bio = EXCLUDED.bio,
            phone = EXCLUDED.phone,
            updated_at = GREATEST(user_profile.updated_at, EXCLUDED.updated_at)
        RETURNING user_id, name, email, avatar, bio, phone, created_at, updated_at
        "#,
    )
    .bind(&profile.user_id)
    .bind(&profile.name)
    .bind(&profile.email)
    .bind(&profile.avatar)
    .bind(&profile.bio)
    .bind(&profile.phone)
    .bind(profile.created_at)
    .bind(profile.updated_at)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to save profile".to_string()
    })
}

pub async fn delete(pool: &PgPool, user_id: &str) -> Result<bool, String> {
    let query_span = tracing::info_span!("Delete user profile.", user_id = %user_id);
    sqlx::query("DELETE FROM user_profile WHERE user_id = $1")
        .bind(user_id)
        .execute(pool)
        .instrument(query_span)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete user profile, error: {:?}", err);
            "Failed to delete profile".to_string()
        })
}
