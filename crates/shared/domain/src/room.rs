//! Room domain entity.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{
    FIELD_BASE_PRICE, FIELD_ROOM_TYPE, ROOM_TYPE_DELUXE, ROOM_TYPE_SEASIDE, ROOM_TYPE_SINGLE,
};
use crate::error::{DomainError, DomainResult};

/// Closed set of room categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Single,
    Deluxe,
    Seaside,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Single => ROOM_TYPE_SINGLE,
            RoomType::Deluxe => ROOM_TYPE_DELUXE,
            RoomType::Seaside => ROOM_TYPE_SEASIDE,
        }
    }
}

impl FromStr for RoomType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROOM_TYPE_SINGLE => Ok(RoomType::Single),
            ROOM_TYPE_DELUXE => Ok(RoomType::Deluxe),
            ROOM_TYPE_SEASIDE => Ok(RoomType::Seaside),
            other => Err(DomainError::field(
                FIELD_ROOM_TYPE,
                format!("unknown room type '{}'", other),
            )),
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check that a price is a finite, non-negative amount.
pub fn check_price(price: f64) -> DomainResult<f64> {
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(DomainError::field(
            FIELD_BASE_PRICE,
            "basePrice must be a non-negative number",
        ))
    }
}

/// Stored room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: Uuid,
    pub hotel_id: Uuid,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub base_price: f64,
}

/// Room creation input: parent hotel set, id not yet assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRoom {
    hotel_id: Uuid,
    room_type: RoomType,
    base_price: f64,
}

impl NewRoom {
    pub fn new(hotel_id: Uuid, room_type: RoomType, base_price: f64) -> DomainResult<Self> {
        Ok(Self {
            hotel_id,
            room_type,
            base_price: check_price(base_price)?,
        })
    }

    pub fn hotel_id(&self) -> Uuid {
        self.hotel_id
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    /// Attach the store-assigned id.
    pub fn into_room(self, id: Uuid) -> Room {
        Room {
            id,
            hotel_id: self.hotel_id,
            room_type: self.room_type,
            base_price: self.base_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_type_round_trip() {
        for room_type in [RoomType::Single, RoomType::Deluxe, RoomType::Seaside] {
            assert_eq!(room_type.as_str().parse::<RoomType>().unwrap(), room_type);
        }
        assert!("penthouse".parse::<RoomType>().is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = NewRoom::new(Uuid::new_v4(), RoomType::Single, -0.01).unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref e) if e.contains("basePrice")));
        assert!(NewRoom::new(Uuid::new_v4(), RoomType::Single, f64::NAN).is_err());
        assert!(NewRoom::new(Uuid::new_v4(), RoomType::Single, 0.0).is_ok());
    }

    #[test]
    fn test_room_wire_shape() {
        let hotel_id = Uuid::new_v4();
        let room = NewRoom::new(hotel_id, RoomType::Seaside, 299.9)
            .unwrap()
            .into_room(Uuid::new_v4());

        let json = serde_json::to_value(&room).unwrap();
        assert_eq!(json["type"], "seaside");
        assert_eq!(json["basePrice"], 299.9);
        assert_eq!(json["hotelId"], hotel_id.to_string());
    }
}
