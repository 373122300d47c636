//! Hotel database entity for SeaORM.
//!
//! The room id list lives in [`super::hotel_room`].

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hotels")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub location: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Build the domain hotel from this row and its ordered room ids
    pub fn into_hotel(self, rooms: Vec<Uuid>) -> domain::Hotel {
        domain::Hotel {
            id: self.id,
            name: self.name,
            location: self.location,
            rooms,
        }
    }
}
