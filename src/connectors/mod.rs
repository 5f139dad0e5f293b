//! Adapters for external services.
//!
//! Routes depend on the connector traits and receive an
//! `Arc<dyn ...Connector>` through `web::Data`, never on the HTTP client.

pub mod errors;
pub mod image_detection;

pub use errors::ConnectorError;
pub use image_detection::{ImageDetectionClient, ImageDetectionConnector};
