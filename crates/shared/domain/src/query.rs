//! Typed filters and mutations for repository queries.
//!
//! Every value here is checked when it is built, so a repository never sees
//! a malformed predicate.

use uuid::Uuid;

use crate::constants::{FIELD_BASE_PRICE, FIELD_LOCATION, FIELD_NAME};
use crate::error::{DomainError, DomainResult};
use crate::room::{check_price, RoomType};

// =============================================================================
// Hotels
// =============================================================================

/// Selects at most one hotel for an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotelFilter {
    Id(Uuid),
    Name(String),
}

/// A single partial mutation of a hotel record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotelUpdate {
    /// Append a room id to the end of the hotel's room list
    PushRoom(Uuid),
    Rename(String),
    Relocate(String),
}

impl HotelUpdate {
    pub fn push_room(room_id: Uuid) -> Self {
        HotelUpdate::PushRoom(room_id)
    }

    pub fn rename(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::field(FIELD_NAME, "name must not be empty"));
        }
        Ok(HotelUpdate::Rename(name))
    }

    pub fn relocate(location: impl Into<String>) -> DomainResult<Self> {
        let location = location.into();
        if location.trim().is_empty() {
            return Err(DomainError::field(FIELD_LOCATION, "location must not be empty"));
        }
        Ok(HotelUpdate::Relocate(location))
    }
}

/// What an update touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub matched: u64,
    pub modified: u64,
}

impl UpdateOutcome {
    pub fn is_match(&self) -> bool {
        self.matched > 0
    }
}

// =============================================================================
// Rooms
// =============================================================================

/// Conjunction of room predicates. An empty filter matches every room.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomFilter {
    hotel_id: Option<Uuid>,
    room_type: Option<RoomType>,
    min_price: Option<f64>,
    max_price: Option<f64>,
}

impl RoomFilter {
    /// Matches every room
    pub fn all() -> Self {
        Self::default()
    }

    pub fn hotel(mut self, hotel_id: Uuid) -> Self {
        self.hotel_id = Some(hotel_id);
        self
    }

    pub fn room_type(mut self, room_type: RoomType) -> Self {
        self.room_type = Some(room_type);
        self
    }

    /// Restrict to `min <= basePrice <= max`. Either bound may be open.
    pub fn price_between(mut self, min: Option<f64>, max: Option<f64>) -> DomainResult<Self> {
        let min = min.map(check_price).transpose()?;
        let max = max.map(check_price).transpose()?;
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo > hi {
                return Err(DomainError::field(
                    FIELD_BASE_PRICE,
                    "minimum price is greater than maximum price",
                ));
            }
        }
        self.min_price = min;
        self.max_price = max;
        Ok(self)
    }

    pub fn hotel_id(&self) -> Option<Uuid> {
        self.hotel_id
    }

    pub fn room_type_value(&self) -> Option<RoomType> {
        self.room_type
    }

    pub fn min_price(&self) -> Option<f64> {
        self.min_price
    }

    pub fn max_price(&self) -> Option<f64> {
        self.max_price
    }
}

/// Sortable room fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomSort {
    /// Insertion order
    Created,
    BasePrice,
    RoomType,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Pagination and ordering for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindOptions {
    pub limit: Option<u64>,
    pub skip: u64,
    pub sort: RoomSort,
    pub order: SortOrder,
}

impl Default for FindOptions {
    fn default() -> Self {
        Self {
            limit: None,
            skip: 0,
            sort: RoomSort::Created,
            order: SortOrder::Asc,
        }
    }
}

impl FindOptions {
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn skip(mut self, skip: u64) -> Self {
        self.skip = skip;
        self
    }

    pub fn sort_by(mut self, sort: RoomSort, order: SortOrder) -> Self {
        self.sort = sort;
        self.order = order;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rename_rejected() {
        assert!(HotelUpdate::rename("  ").is_err());
        assert!(HotelUpdate::relocate("").is_err());
        assert_eq!(
            HotelUpdate::rename("Royal Mansour").unwrap(),
            HotelUpdate::Rename("Royal Mansour".to_string())
        );
    }

    #[test]
    fn test_price_range_checked_at_construction() {
        assert!(RoomFilter::all().price_between(Some(10.0), Some(5.0)).is_err());
        assert!(RoomFilter::all().price_between(Some(-1.0), None).is_err());

        let filter = RoomFilter::all().price_between(None, Some(300.0)).unwrap();
        assert_eq!(filter.min_price(), None);
        assert_eq!(filter.max_price(), Some(300.0));
    }

    #[test]
    fn test_filter_builder_accumulates() {
        let hotel_id = Uuid::new_v4();
        let filter = RoomFilter::all().hotel(hotel_id).room_type(RoomType::Deluxe);
        assert_eq!(filter.hotel_id(), Some(hotel_id));
        assert_eq!(filter.room_type_value(), Some(RoomType::Deluxe));
    }
}
