//! Migration: Create hotels table and the ordered hotel -> room id list.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hotels::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Hotels::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Hotels::Name).string().not_null())
                    .col(ColumnDef::new(Hotels::Location).string().not_null())
                    .to_owned(),
            )
            .await?;

        // One row per appended room id; the serial id gives append order
        manager
            .create_table(
                Table::create()
                    .table(HotelRooms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HotelRooms::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HotelRooms::HotelId).uuid().not_null())
                    .col(ColumnDef::new(HotelRooms::RoomId).uuid().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hotel_rooms_room_id")
                    .table(HotelRooms::Table)
                    .col(HotelRooms::RoomId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hotel_rooms_hotel_id")
                    .table(HotelRooms::Table)
                    .col(HotelRooms::HotelId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HotelRooms::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Hotels::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Hotels {
    Table,
    Id,
    Name,
    Location,
}

#[derive(Iden)]
enum HotelRooms {
    Table,
    Id,
    HotelId,
    RoomId,
}
