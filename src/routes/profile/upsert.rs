use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{put, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

/// PUT /profile/{user_id}
/// Creates the profile on first save, replaces it afterwards.
#[tracing::instrument(name = "Upsert user profile.", skip(form, pg_pool))]
#[put("/{user_id}")]
pub async fn upsert_handler(
    path: web::Path<(String,)>,
    form: web::Json<forms::ProfileForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::UserProfile>::build().form_error(errors.to_string()));
    }

    let user_id = path.0.as_str();
    let existing = db::profile::fetch(pg_pool.get_ref(), user_id)
        .await
        .map_err(|err| JsonResponse::<models::UserProfile>::build().internal_server_error(err))?;

    let profile = form.into_inner().into_profile(user_id, existing);
    db::profile::upsert(pg_pool.get_ref(), profile)
        .await
        .map(|profile| {
            tracing::info!("Profile of user {} saved", user_id);
            JsonResponse::build()
                .set_id(user_id)
                .set_item(profile)
                .ok("Saved")
        })
        .map_err(|err| JsonResponse::<models::UserProfile>::build().internal_server_error(err))
}
