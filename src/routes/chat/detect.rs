use crate::connectors::ImageDetectionConnector;
use crate::helpers::JsonResponse;
use crate::models::{ImageDetectionResult, Message, ParsedDetectionResult};
use actix_web::{post, web, Responder, Result};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct Detection {
    pub image_url: String,
    pub result: ImageDetectionResult,
    pub parsed: ParsedDetectionResult,
}

/// POST /chat/detect
/// Sends the first image attachment of the message to the image-detection service.
#[tracing::instrument(name = "Detect image of chat message.", skip(message, connector), fields(message_id = %message.id))]
#[post("/detect")]
pub async fn detect_handler(
    message: web::Json<Message>,
    connector: web::Data<Arc<dyn ImageDetectionConnector>>,
) -> Result<impl Responder> {
    let image_url = message
        .first_image()
        .map(str::to_string)
        .ok_or_else(|| {
            JsonResponse::<Detection>::build().bad_request("Message has no image attachment")
        })?;

    let result = connector.detect(&image_url).await?;
    let parsed = ParsedDetectionResult::from(&result);

    Ok(JsonResponse::build()
        .set_id(message.id.clone())
        .set_item(Detection {
            image_url,
            result,
            parsed,
        })
        .ok("OK"))
}
