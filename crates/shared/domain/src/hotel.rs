//! Hotel domain entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{FIELD_LOCATION, FIELD_NAME};
use crate::error::{DomainResult, ValidationErrors};

/// Hotel with the ids of its rooms, in the order they were attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub rooms: Vec<Uuid>,
}

impl Hotel {
    /// How many times `room_id` appears in the room list
    pub fn room_count(&self, room_id: Uuid) -> usize {
        self.rooms.iter().filter(|id| **id == room_id).count()
    }
}

/// Hotel creation input. Starts with no rooms.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewHotel {
    name: String,
    location: String,
}

impl NewHotel {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        let location = location.into();

        let mut errors = ValidationErrors::new();
        if name.trim().is_empty() {
            errors.add(FIELD_NAME, "name must not be empty");
        }
        if location.trim().is_empty() {
            errors.add(FIELD_LOCATION, "location must not be empty");
        }
        errors.into_result()?;

        Ok(Self { name, location })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}
