use ayurchat::configuration::get_configuration;
use ayurchat::db;
use ayurchat::startup::run;
use ayurchat::telemetry::{get_subscriber, init_subscriber};
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("ayurchat".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let settings = get_configuration().expect("Failed to read configuration.");

    tracing::info!(
        db_host = %settings.database.host,
        db_port = settings.database.port,
        db_name = %settings.database.database_name,
        "Connecting to PostgreSQL"
    );

    let pg_pool = db::pool::connect(&settings.database).expect("Invalid database settings.");

    if !db::pool::ping(&pg_pool).await {
        if settings.database.require_on_startup {
            tracing::error!("Database is unreachable, aborting startup");
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                "database is unreachable",
            ));
        }
        tracing::warn!("Database is unreachable, starting anyway");
    }

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Start server at {:?}", &address);
    let listener = TcpListener::bind(&address)?;

    run(listener, pg_pool, settings).await?.await
}
