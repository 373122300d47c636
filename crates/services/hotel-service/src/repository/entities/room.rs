//! Room database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{DomainError, Room, RoomType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub room_type: String,
    #[sea_orm(column_type = "Double")]
    pub base_price: f64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl TryFrom<Model> for Room {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Room {
            id: model.id,
            hotel_id: model.hotel_id,
            room_type: model.room_type.parse::<RoomType>()?,
            base_price: model.base_price,
        })
    }
}
