//! Repository layer for data access.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

pub mod entities;
mod hotel_repository;
mod room_repository;
mod user_repository;

pub use hotel_repository::{HotelRepository, HotelStore};
pub use room_repository::{RoomRepository, RoomStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use hotel_repository::MockHotelRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use room_repository::MockRoomRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;

/// Repositories built once per process and shared by reference.
#[derive(Clone)]
pub struct Stores {
    pub hotels: Arc<dyn HotelRepository>,
    pub rooms: Arc<dyn RoomRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl Stores {
    /// Wire all repositories onto one connection pool
    pub fn new(db: DatabaseConnection) -> Self {
        let hotels: Arc<dyn HotelRepository> = Arc::new(HotelStore::new(db.clone()));
        let rooms = Arc::new(RoomStore::new(db.clone(), hotels.clone()));
        let users = Arc::new(UserStore::new(db));

        Self {
            hotels,
            rooms,
            users,
        }
    }
}
