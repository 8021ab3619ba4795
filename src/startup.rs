use rand::{distr::Alphanumeric, Rng};
use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    data::{connection_id::ConnectionIdRepository, user::UserRepository},
    error::AppError,
    service::auth::hash_password,
};

const GENERATED_PASSWORD_LEN: usize = 24;

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to
/// ensure the database schema is up-to-date. This function must complete
/// successfully before the application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// One-time setup awaited during startup, before the listener opens.
///
/// Purges connection records left behind by previous runs (those sockets no
/// longer exist) and seeds the first admin account when none exists, so a
/// fresh deployment can be administered without touching the database by
/// hand.
///
/// # Arguments
/// - `db` - Database connection
/// - `config` - Application configuration providing the admin email
///
/// # Returns
/// - `Ok(())` - Initialization complete
/// - `Err(AppError)` - Database error during purge or seeding
pub async fn initialize(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let purged = ConnectionIdRepository::new(db).purge_all().await?;
    if purged > 0 {
        tracing::info!("Purged {} stale hub connection records", purged);
    }

    seed_admin(db, &config.admin_email).await?;

    Ok(())
}

/// Seeds the first admin account when no admin exists.
///
/// The generated one-time password is logged exactly once; it is stored only
/// as an Argon2id hash.
///
/// # Arguments
/// - `db` - Database connection
/// - `admin_email` - Email for the seeded account
///
/// # Returns
/// - `Ok(Some(Model))` - A new admin account was created
/// - `Ok(None)` - An admin already exists, nothing was done
/// - `Err(AppError)` - Database or hashing error
pub(crate) async fn seed_admin(
    db: &DatabaseConnection,
    admin_email: &str,
) -> Result<Option<entity::user::Model>, AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.admin_exists().await? {
        return Ok(None);
    }

    let password = generate_password(GENERATED_PASSWORD_LEN);
    let password_hash = hash_password(&password)?;

    let user = user_repo
        .create(
            admin_email.trim().to_lowercase(),
            "Administrator".to_string(),
            password_hash,
            true,
        )
        .await?;

    tracing::warn!(
        "Created initial admin account {} with one-time password {} - change it after first login",
        user.email,
        password
    );

    Ok(Some(user))
}

fn generate_password(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
