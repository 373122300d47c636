//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use common::DatabaseConfig;
use domain::{Hotel, NewHotel};
use uuid::Uuid;
use hotel_service_lib::infra::Database;
use hotel_service_lib::Stores;

/// Fresh in-memory database with all migrations applied.
pub async fn stores() -> Stores {
    let db = Database::connect(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database should open");
    Stores::new(db.get_connection())
}

/// SQLite database in a temporary file, removed on drop.
///
/// Unlike the in-memory database, every pooled connection sees the same
/// data, so work on separate connections really runs side by side.
pub struct FileDb {
    pub stores: Stores,
    path: PathBuf,
}

impl Drop for FileDb {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm", "-journal"] {
            let mut file = self.path.clone().into_os_string();
            file.push(suffix);
            let _ = std::fs::remove_file(file);
        }
    }
}

pub async fn file_stores(max_connections: u32) -> FileDb {
    let path = std::env::temp_dir().join(format!("hotel-service-{}.db", Uuid::new_v4()));
    let config = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", path.display()),
        max_connections,
        ..DatabaseConfig::in_memory()
    };
    let db = Database::connect(&config)
        .await
        .expect("file database should open");
    FileDb {
        stores: Stores::new(db.get_connection()),
        path,
    }
}

pub async fn hotel(stores: &Stores, name: &str) -> Hotel {
    stores
        .hotels
        .insert(NewHotel::new(name, "Casablanca").unwrap())
        .await
        .unwrap()
}
