use crate::views;
use actix_web::{get, web, Responder, Result};

/// GET /chat/presence
/// Typing indicator shown while a reply is pending.
#[get("/presence")]
pub async fn presence_handler() -> Result<impl Responder> {
    Ok(web::Json(views::indicator()))
}
