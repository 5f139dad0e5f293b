use crate::configuration::DatabaseSettings;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::str::FromStr;
use std::time::Duration;

/// Builds the process-wide pool. Connections are opened on first use,
/// so an unreachable database does not fail here.
pub fn connect(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let connect_options = PgConnectOptions::from_str(&settings.connection_string())?;

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .connect_lazy_with(connect_options);

    Ok(pool)
}

/// Runs a trivial query. Failures are logged and reported as `false`.
#[tracing::instrument(name = "Ping database.", skip(pool))]
pub async fn ping(pool: &PgPool) -> bool {
    match sqlx::query("SELECT 1 as health_check").fetch_one(pool).await {
        Ok(_) => {
            tracing::info!("Database connection is healthy");
            true
        }
        Err(err) => {
            tracing::error!("Database health check failed: {:?}", err);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable() -> DatabaseSettings {
        DatabaseSettings {
            username: "nobody".to_string(),
            password: "nothing".to_string(),
            host: "127.0.0.1".to_string(),
            port: 1,
            database_name: "missing".to_string(),
            max_connections: 1,
            acquire_timeout_secs: 1,
            require_on_startup: false,
            url: None,
        }
    }

    #[tokio::test]
    async fn connect_is_lazy() {
        assert!(connect(&unreachable()).is_ok());
    }

    #[tokio::test]
    async fn ping_reports_false_instead_of_failing() {
        let pool = connect(&unreachable()).unwrap();
        assert!(!ping(&pool).await);
    }

    #[test]
    fn malformed_url_is_rejected() {
        let mut settings = unreachable();
        settings.url = Some("not a url".to_string());
        assert!(connect(&settings).is_err());
    }
}
