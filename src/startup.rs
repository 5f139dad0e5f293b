use crate::configuration::Settings;
use crate::connectors::{ImageDetectionClient, ImageDetectionConnector};
use crate::health::HealthChecker;
use crate::helpers::JsonResponse;
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, error, middleware, web, App, HttpServer};
use sqlx::PgPool;
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    pg_pool: PgPool,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let image_detection: Arc<dyn ImageDetectionConnector> = Arc::new(
        ImageDetectionClient::new(&settings.image_detection)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?,
    );
    let image_detection = web::Data::new(image_detection);

    let health_checker = Arc::new(HealthChecker::new(
        pg_pool.clone(),
        settings.image_detection.clone(),
    ));
    let health_checker = web::Data::new(health_checker);

    let pg_pool = web::Data::new(pg_pool);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg = match err {
            error::JsonPayloadError::Deserialize(err) => format!("Invalid payload: {}", err),
            err => err.to_string(),
        };
        JsonResponse::<()>::build().bad_request(msg)
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::Compress::default())
            .wrap(Cors::permissive())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/chat")
                    .service(routes::chat::render_handler)
                    .service(routes::chat::render_batch_handler)
                    .service(routes::chat::presence_handler)
                    .service(routes::chat::layout_handler)
                    .service(routes::chat::detect_handler),
            )
            .service(
                web::scope("/profile")
                    .service(routes::profile::get_handler)
                    .service(routes::profile::upsert_handler)
                    .service(routes::profile::delete_handler),
            )
            .service(
                web::scope("/settings")
                    .service(routes::settings::get_handler)
                    .service(routes::settings::upsert_handler),
            )
            .app_data(json_config.clone())
            .app_data(health_checker.clone())
            .app_data(image_detection.clone())
            .app_data(pg_pool.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
