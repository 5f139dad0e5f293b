#![allow(dead_code)]

use ayurchat::configuration::{get_configuration, DatabaseSettings, Settings};
use ayurchat::db;
use ayurchat::telemetry::{get_subscriber, init_subscriber};
use lazy_static::lazy_static;
use sqlx::{Connection, Executor, PgConnection, PgPool};

lazy_static! {
    // set TEST_LOG=1 to see the server logs
    static ref TRACING: () = {
        if std::env::var("TEST_LOG").is_ok() {
            init_subscriber(get_subscriber("test".into(), "debug".into(), std::io::stdout));
        } else {
            init_subscriber(get_subscriber("test".into(), "debug".into(), std::io::sink));
        }
    };
}

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
}

fn configuration(image_detection_url: &str) -> Settings {
    let mut configuration = get_configuration().expect("Failed to get configuration");
    configuration.image_detection.base_url = image_detection_url.to_string();
    configuration.image_detection.api_key = None;
    configuration
}

async fn serve(configuration: Settings, db_pool: PgPool) -> TestApp {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let server = ayurchat::startup::run(listener, db_pool.clone(), configuration)
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    TestApp { address, db_pool }
}

/// Server whose database is never reached; enough for the stateless routes.
pub async fn spawn_app(image_detection_url: &str) -> TestApp {
    lazy_static::initialize(&TRACING);

    let mut configuration = configuration(image_detection_url);
    configuration.database.url = None;
    configuration.database.host = "127.0.0.1".to_string();
    configuration.database.port = 1;
    configuration.database.acquire_timeout_secs = 1;

    let db_pool = db::pool::connect(&configuration.database).expect("Invalid database settings");
    serve(configuration, db_pool).await
}

/// Server backed by a fresh, migrated database. `None` when Postgres is unreachable.
pub async fn spawn_app_with_database(image_detection_url: &str) -> Option<TestApp> {
    lazy_static::initialize(&TRACING);

    let mut configuration = configuration(image_detection_url);
    configuration.database.url = None;
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();

    let db_pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    Some(serve(configuration, db_pool).await)
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations").run(&connection_pool).await?;

    Ok(connection_pool)
}
