//! Remote image-detection (dosha/disease classifier) connector.

use crate::connectors::ConnectorError;
use crate::models::ImageDetectionResult;
use async_trait::async_trait;

pub mod client;

pub use client::ImageDetectionClient;

#[async_trait]
pub trait ImageDetectionConnector: Send + Sync {
    /// Classify the image behind `image_url`.
    async fn detect(&self, image_url: &str) -> Result<ImageDetectionResult, ConnectorError>;
}
