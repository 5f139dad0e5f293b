use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

/// GET /settings/{user_id}
/// Users that never saved settings get the defaults.
#[tracing::instrument(name = "Get user settings.", skip(pg_pool))]
#[get("/{user_id}")]
pub async fn get_handler(
    path: web::Path<(String,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let user_id = path.0.as_str();
    let settings = db::settings::fetch(pg_pool.get_ref(), user_id)
        .await
        .map_err(|err| JsonResponse::<models::UserSettings>::build().internal_server_error(err))?
        .unwrap_or_else(|| models::UserSettings::defaults_for(user_id.to_string()));

    Ok(JsonResponse::build()
        .set_id(user_id)
        .set_item(settings)
        .ok("OK"))
}
