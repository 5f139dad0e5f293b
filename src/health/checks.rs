use super::models::{ComponentHealth, HealthCheckResponse};
use crate::configuration::ImageDetectionSettings;
use crate::db;
use sqlx::PgPool;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::time::timeout;

const CHECK_TIMEOUT: Duration = Duration::from_secs(5);
const SLOW_RESPONSE_THRESHOLD_MS: u64 = 1000;

pub struct HealthChecker {
    pg_pool: PgPool,
    image_detection: ImageDetectionSettings,
    start_time: Instant,
}

impl HealthChecker {
    pub fn new(pg_pool: PgPool, image_detection: ImageDetectionSettings) -> Self {
        Self {
            pg_pool,
            image_detection,
            start_time: Instant::now(),
        }
    }

    pub async fn check_all(&self) -> HealthCheckResponse {
        let version = env!("CARGO_PKG_VERSION").to_string();
        let uptime = self.start_time.elapsed().as_secs();
        let mut response = HealthCheckResponse::new(version, uptime);

        let (db_result, detection_result) = tokio::join!(
            timeout(CHECK_TIMEOUT, self.check_database()),
            timeout(CHECK_TIMEOUT, self.check_image_detection()),
        );

        response.add_component(
            "database",
            db_result.unwrap_or_else(|_| ComponentHealth::unhealthy("Timeout".to_string())),
        );
        response.add_component(
            "image_detection",
            detection_result
                .unwrap_or_else(|_| ComponentHealth::degraded("Timeout".to_string(), None)),
        );

        response
    }

    #[tracing::instrument(name = "Check database health", skip(self))]
    async fn check_database(&self) -> ComponentHealth {
        let start = Instant::now();

        if !db::pool::ping(&self.pg_pool).await {
            return ComponentHealth::unhealthy("Database is unreachable".to_string());
        }

        let elapsed = start.elapsed().as_millis() as u64;
        let health = if elapsed > SLOW_RESPONSE_THRESHOLD_MS {
            ComponentHealth::degraded("Database responding slowly".to_string(), Some(elapsed))
        } else {
            ComponentHealth::healthy(elapsed)
        };

        let pool_size = self.pg_pool.size();
        let idle_connections = self.pg_pool.num_idle();
        let mut details = HashMap::new();
        details.insert("pool_size".to_string(), serde_json::json!(pool_size));
        details.insert(
            "idle_connections".to_string(),
            serde_json::json!(idle_connections),
        );

        health.with_details(details)
    }

    /// The classifier is optional for chatting, so failures only degrade.
    #[tracing::instrument(name = "Check image detection health", skip(self))]
    async fn check_image_detection(&self) -> ComponentHealth {
        let start = Instant::now();
        let health_url = format!(
            "{}/health",
            self.image_detection.base_url.trim_end_matches('/')
        );

        let client = match reqwest::Client::builder().timeout(CHECK_TIMEOUT).build() {
            Ok(client) => client,
            Err(e) => {
                tracing::error!("Failed to create HTTP client: {:?}", e);
                return ComponentHealth::degraded(format!("HTTP client error: {}", e), None);
            }
        };

        match client.get(&health_url).send().await {
            Ok(response) if response.status().is_success() => {
                let elapsed = start.elapsed().as_millis() as u64;
                let mut details = HashMap::new();
                details.insert(
                    "url".to_string(),
                    serde_json::json!(self.image_detection.base_url),
                );

                let health = if elapsed > SLOW_RESPONSE_THRESHOLD_MS {
                    ComponentHealth::degraded(
                        format!("Image detection slow ({} ms)", elapsed),
                        Some(elapsed),
                    )
                } else {
                    ComponentHealth::healthy(elapsed)
                };
                health.with_details(details)
            }
            Ok(response) => {
                tracing::warn!("Image detection returned status: {}", response.status());
                ComponentHealth::degraded(
                    format!("Image detection returned status: {}", response.status()),
                    None,
                )
            }
            Err(e) => {
                tracing::warn!("Image detection health check failed: {:?}", e);
                ComponentHealth::degraded(format!("Image detection unavailable: {}", e), None)
            }
        }
    }
}
