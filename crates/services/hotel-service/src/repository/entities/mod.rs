//! SeaORM entities for the hotel reservation tables.

pub mod hotel;
pub mod hotel_room;
pub mod room;
pub mod user;
