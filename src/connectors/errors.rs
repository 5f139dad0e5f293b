use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;

/// Errors that can occur during external service communication
#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    #[error("HTTP error: {0}")]
    HttpError(String),
    /// Service unreachable or timeout
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
    /// Response could not be decoded or reported a failure
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Rate limited: {0}")]
    RateLimited(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for ConnectorError {
    fn error_response(&self) -> HttpResponse {
        let message = match self {
            Self::HttpError(_) => "External service error",
            Self::ServiceUnavailable(_) => "Service unavailable",
            Self::InvalidResponse(_) => "Invalid external service response",
            Self::Unauthorized(_) => "Unauthorized",
            Self::NotFound(_) => "Resource not found",
            Self::RateLimited(_) => "Rate limit exceeded",
            Self::Internal(_) => "Internal error",
        };

        HttpResponse::build(self.status_code()).json(json!({
            "message": message,
            "details": self.to_string(),
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::HttpError(_) | Self::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            // upstream credentials are ours, not the caller's
            Self::Unauthorized(_) => StatusCode::BAD_GATEWAY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for ConnectorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::ServiceUnavailable(format!("Request timeout: {}", err))
        } else if err.is_connect() {
            Self::ServiceUnavailable(format!("Connection failed: {}", err))
        } else if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}
