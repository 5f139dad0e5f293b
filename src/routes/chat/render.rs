use crate::helpers::JsonResponse;
use crate::models::Message;
use crate::views::{self, MessageView};
use actix_web::{post, web, Responder, Result};

/// POST /chat/render
/// Returns the blocks a chat bubble shows for the given message.
#[tracing::instrument(name = "Render chat message.", skip(message), fields(message_id = %message.id))]
#[post("/render")]
pub async fn render_handler(message: web::Json<Message>) -> Result<impl Responder> {
    Ok(web::Json(views::render(&message)))
}

/// POST /chat/render/batch
/// Renders a conversation, keeping the input order.
#[tracing::instrument(name = "Render chat messages.", skip(messages), fields(count = messages.len()))]
#[post("/render/batch")]
pub async fn render_batch_handler(messages: web::Json<Vec<Message>>) -> Result<impl Responder> {
    let views: Vec<MessageView> = messages.iter().map(views::render).collect();
    Ok(JsonResponse::build().set_list(views).ok("OK"))
}
