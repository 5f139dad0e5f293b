use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{put, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

/// PUT /settings/{user_id}
/// Fields missing from the body keep their stored (or default) value.
#[tracing::instrument(name = "Upsert user settings.", skip(form, pg_pool))]
#[put("/{user_id}")]
pub async fn upsert_handler(
    path: web::Path<(String,)>,
    form: web::Json<forms::SettingsForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::UserSettings>::build().form_error(errors.to_string()));
    }

    let user_id = path.0.as_str();
    let mut settings = db::settings::fetch(pg_pool.get_ref(), user_id)
        .await
        .map_err(|err| JsonResponse::<models::UserSettings>::build().internal_server_error(err))?
        .unwrap_or_else(|| models::UserSettings::defaults_for(user_id.to_string()));

    form.into_inner().update(&mut settings);

    db::settings::upsert(pg_pool.get_ref(), settings)
        .await
        .map(|settings| {
            JsonResponse::build()
                .set_id(user_id)
                .set_item(settings)
                .ok("Saved")
        })
        .map_err(|err| JsonResponse::<models::UserSettings>::build().internal_server_error(err))
}
