use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{delete, web, Responder, Result};
use sqlx::PgPool;

/// DELETE /profile/{user_id}
#[tracing::instrument(name = "Delete user profile.", skip(pg_pool))]
#[delete("/{user_id}")]
pub async fn delete_handler(
    path: web::Path<(String,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let user_id = path.0.as_str();
    let deleted = db::profile::delete(pg_pool.get_ref(), user_id)
        .await
        .map_err(|err| JsonResponse::<models::UserProfile>::build().internal_server_error(err))?;

    if !deleted {
        return Err(JsonResponse::<models::UserProfile>::build().not_found("Profile not found"));
    }

    Ok(JsonResponse::<models::UserProfile>::build()
        .set_id(user_id)
        .ok("Deleted"))
}
