use sea_orm::DatabaseConnection;

use crate::server::{config::Config, error::AppError, service::seed::SeedService};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the restaurant, pizza and offering tables exist.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Seeds sample data when enabled in configuration.
pub async fn seed_database(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    if !config.seed {
        return Ok(());
    }

    let seeded = SeedService::new(db).seed_if_empty().await?;

    if !seeded {
        tracing::info!("Database already contains data, skipping seed");
    }

    Ok(())
}
