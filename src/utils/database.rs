use super::config::DatabaseConfig;
use sqlx::{migrate::MigrateError, postgres::PgPoolOptions, PgPool};
use std::fmt;

#[derive(Clone)]
pub struct DatabaseConnection {
    pub pool: PgPool,
}

#[derive(Debug)]
pub enum Error {
    Connect(sqlx::Error),
    Migrate(MigrateError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Connect(err) => write!(f, "Error connecting to database: {}", err),
            Error::Migrate(err) => write!(f, "Failed to run database migrations: {}", err),
        }
    }
}

impl std::error::Error for Error {}

pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(config.url.as_str())
        .await
        .map(|pool| DatabaseConnection { pool })
        .map_err(|err| {
            tracing::error!("{}", err);
            Error::Connect(err)
        })
}

/// Creates every table that does not exist yet.
pub async fn migrate(db_conn: &DatabaseConnection) -> Result<(), Error> {
    sqlx::migrate!().run(&db_conn.pool).await.map_err(|err| {
        tracing::error!("{}", err);
        Error::Migrate(err)
    })
}
