use log::LevelFilter;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Creates a database connection pool for the given connection string
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url);
    options.sqlx_logging_level(LevelFilter::Debug);

    // SQLite in-memory databases only live as long as their connection
    if database_url.starts_with("sqlite::memory:") {
        options.max_connections(1);
    }

    Database::connect(options).await
}
