use super::ImageDetectionConnector;
use crate::configuration::ImageDetectionSettings;
use crate::connectors::ConnectorError;
use crate::models::{ImageDetectionResponse, ImageDetectionResult};
use reqwest::StatusCode;
use tracing::Instrument;

/// HTTP-based image-detection client
pub struct ImageDetectionClient {
    pub(crate) base_url: String,
    pub(crate) http_client: reqwest::Client,
    pub(crate) api_key: Option<String>,
}

impl ImageDetectionClient {
    pub fn new(settings: &ImageDetectionSettings) -> Result<Self, ConnectorError> {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|err| ConnectorError::Internal(format!("HTTP client: {}", err)))?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            http_client,
            api_key: settings.api_key.clone(),
        })
    }

    fn auth_header(&self) -> Option<String> {
        self.api_key.as_ref().map(|key| format!("Bearer {}", key))
    }
}

fn status_error(status: StatusCode, body: String) -> ConnectorError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ConnectorError::Unauthorized(body),
        StatusCode::NOT_FOUND => ConnectorError::NotFound(body),
        StatusCode::TOO_MANY_REQUESTS => ConnectorError::RateLimited(body),
        StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
            ConnectorError::ServiceUnavailable(body)
        }
        status => ConnectorError::HttpError(format!("status {}: {}", status, body)),
    }
}

#[async_trait::async_trait]
impl ImageDetectionConnector for ImageDetectionClient {
    async fn detect(&self, image_url: &str) -> Result<ImageDetectionResult, ConnectorError> {
        let span = tracing::info_span!("image_detection_detect", image_url = %image_url);
        let url = format!("{}/detect", self.base_url);

        let mut req = self
            .http_client
            .post(&url)
            .json(&serde_json::json!({ "image_url": image_url }));

        if let Some(auth) = self.auth_header() {
            req = req.header("Authorization", auth);
        }

        let resp = req.send().instrument(span.clone()).await.map_err(|err| {
            tracing::error!("image detection request failed: {:?}", err);
            ConnectorError::from(err)
        })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(%status, "image detection service returned an error");
            return Err(status_error(status, body));
        }

        let response = resp
            .json::<ImageDetectionResponse>()
            .instrument(span)
            .await
            .map_err(|err| ConnectorError::InvalidResponse(err.to_string()))?;

        response.into_result().map_err(|err| {
            tracing::warn!("image detection failed: {}", err);
            err
        })
    }
}
