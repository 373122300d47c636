//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! hotels, rooms, users, the credential value object and the typed
//! query values the repositories accept.

pub mod constants;
pub mod credential;
pub mod error;
pub mod hotel;
pub mod query;
pub mod room;
pub mod user;

pub use constants::*;
pub use credential::Credential;
pub use error::{DomainError, DomainResult, ValidationErrors};
pub use hotel::{Hotel, NewHotel};
pub use query::{FindOptions, HotelFilter, HotelUpdate, RoomFilter, RoomSort, SortOrder, UpdateOutcome};
pub use room::{NewRoom, Room, RoomType};
pub use user::{is_email_valid, CreateUserParams, NewUser, User};
