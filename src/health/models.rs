use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub status: ComponentStatus,
    pub message: Option<String>,
    pub response_time_ms: Option<u64>,
    pub last_checked: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,
}

impl ComponentHealth {
    fn with_status(status: ComponentStatus, message: Option<String>, ms: Option<u64>) -> Self {
        Self {
            status,
            message,
            response_time_ms: ms,
            last_checked: Utc::now(),
            details: None,
        }
    }

    pub fn healthy(response_time_ms: u64) -> Self {
        Self::with_status(ComponentStatus::Healthy, None, Some(response_time_ms))
    }

    pub fn unhealthy(error: String) -> Self {
        Self::with_status(ComponentStatus::Unhealthy, Some(error), None)
    }

    pub fn degraded(message: String, response_time_ms: Option<u64>) -> Self {
        Self::with_status(ComponentStatus::Degraded, Some(message), response_time_ms)
    }

    pub fn with_details(mut self, details: HashMap<String, serde_json::Value>) -> Self {
        self.details = Some(details);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: ComponentStatus,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub uptime_seconds: u64,
    pub components: HashMap<String, ComponentHealth>,
}

impl HealthCheckResponse {
    pub fn new(version: String, uptime_seconds: u64) -> Self {
        Self {
            status: ComponentStatus::Healthy,
            timestamp: Utc::now(),
            version,
            uptime_seconds,
            components: HashMap::new(),
        }
    }

    /// Overall status is the worst component status.
    pub fn add_component(&mut self, name: &str, health: ComponentHealth) {
        self.status = match (self.status, health.status) {
            (_, ComponentStatus::Unhealthy) | (ComponentStatus::Unhealthy, _) => {
                ComponentStatus::Unhealthy
            }
            (_, ComponentStatus::Degraded) | (ComponentStatus::Degraded, _) => {
                ComponentStatus::Degraded
            }
            _ => ComponentStatus::Healthy,
        };
        self.components.insert(name.to_string(), health);
    }

    pub fn is_unhealthy(&self) -> bool {
        self.status == ComponentStatus::Unhealthy
    }
}
