use crate::views::{LayoutQuery, LayoutShell};
use actix_web::{get, web, Responder, Result};

/// GET /chat/layout?show_navigation={bool}
#[get("/layout")]
pub async fn layout_handler(query: web::Query<LayoutQuery>) -> Result<impl Responder> {
    Ok(web::Json(LayoutShell::from(query.into_inner())))
}
