use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

/// GET /profile/{user_id}
#[tracing::instrument(name = "Get user profile.", skip(pg_pool))]
#[get("/{user_id}")]
pub async fn get_handler(
    path: web::Path<(String,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let user_id = path.0.as_str();
    db::profile::fetch(pg_pool.get_ref(), user_id)
        .await
        .map_err(|err| JsonResponse::<models::UserProfile>::build().internal_server_error(err))?
        .map(|profile| {
            JsonResponse::build()
                .set_id(user_id)
                .set_item(profile)
                .ok("OK")
        })
        .ok_or_else(|| JsonResponse::<models::UserProfile>::build().not_found("Profile not found"))
}
