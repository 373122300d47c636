//! One entry of a hotel's room id list. Append order is the serial `id`.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hotel_rooms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub hotel_id: Uuid,
    #[sea_orm(unique)]
    pub room_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
