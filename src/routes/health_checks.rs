use crate::health::HealthChecker;
use actix_web::{get, web, HttpResponse};
use std::sync::Arc;

#[tracing::instrument(name = "Health check.", skip(checker))]
#[get("")]
pub async fn health_check(checker: web::Data<Arc<HealthChecker>>) -> HttpResponse {
    let report = checker.check_all().await;

    if report.is_unhealthy() {
        HttpResponse::ServiceUnavailable().json(report)
    } else {
        HttpResponse::Ok().json(report)
    }
}
