//! Database seeding for local development.
//!
//! Wipes hotels and rooms, then inserts a fixed set of hotels, each with one
//! room of every type. Rooms go through `insert_room`, so the hotel room
//! lists are built by the same path the service uses.

use common::{AppResult, OptionExt};
use domain::{Hotel, NewHotel, NewRoom, RoomType};

use crate::repository::Stores;

const SEED_HOTELS: &[(&str, &str)] = &[
    ("Royal Mansour", "Marrakech Morocco"),
    ("Mazagan Beach Resort", "Casablanca"),
];

const SEED_ROOMS: &[(RoomType, f64)] = &[
    (RoomType::Single, 99.9),
    (RoomType::Deluxe, 1999.9),
    (RoomType::Seaside, 299.9),
];

/// Reset hotels and rooms and insert the seed data.
pub async fn run(stores: &Stores) -> AppResult<Vec<Hotel>> {
    stores.rooms.drop_all().await?;
    stores.hotels.drop_all().await?;

    let mut seeded = Vec::with_capacity(SEED_HOTELS.len());
    for (name, location) in SEED_HOTELS {
        seeded.push(seed_hotel(stores, name, location).await?);
    }

    tracing::info!(hotels = seeded.len(), "Seeding complete");
    Ok(seeded)
}

async fn seed_hotel(stores: &Stores, name: &str, location: &str) -> AppResult<Hotel> {
    let hotel = stores.hotels.insert(NewHotel::new(name, location)?).await?;

    for (room_type, base_price) in SEED_ROOMS {
        let room = stores
            .rooms
            .insert_room(NewRoom::new(hotel.id, *room_type, *base_price)?)
            .await?;
        tracing::debug!(room_id = %room.id, room_type = %room.room_type, "Seeded room");
    }

    stores.hotels.find_by_id(hotel.id).await?.ok_or_not_found("hotel")
}
