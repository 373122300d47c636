//! Hotel Service Library
//!
//! Persistence for hotels, rooms and users, plus the user creation flow.
//! Repositories are constructed once through [`Stores`] and handed to
//! whatever needs them.

pub mod config;
pub mod infra;
pub mod repository;
pub mod seed;
pub mod service;

use tracing::info;

use common::AppError;
use domain::{CreateUserParams, Hotel, User};

use crate::config::HotelServiceConfig;
use crate::infra::Database;
use crate::service::{UserManager, UserService};

pub use crate::repository::Stores;

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &HotelServiceConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Reset and seed hotels and rooms.
pub async fn seed_database(config: &HotelServiceConfig) -> Result<Vec<Hotel>, AppError> {
    let db = Database::connect(&config.database).await?;
    let stores = Stores::new(db.get_connection());
    seed::run(&stores).await
}

/// Create one user from the command line.
pub async fn create_user(
    config: &HotelServiceConfig,
    params: CreateUserParams,
) -> Result<User, AppError> {
    let db = Database::connect(&config.database).await?;
    let stores = Stores::new(db.get_connection());
    let users = UserManager::new(stores.users.clone());
    users.create_user(params).await
}
