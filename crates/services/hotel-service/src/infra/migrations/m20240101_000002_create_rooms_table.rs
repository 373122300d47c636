//! Migration: Create rooms table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No foreign key on hotel_id: a missing hotel is detected by the
        // room-list append, which reports zero matches
        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Rooms::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Rooms::HotelId).uuid().not_null())
                    .col(ColumnDef::new(Rooms::RoomType).string().not_null())
                    .col(ColumnDef::new(Rooms::BasePrice).double().not_null())
                    .col(
                        ColumnDef::new(Rooms::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rooms_hotel_id")
                    .table(Rooms::Table)
                    .col(Rooms::HotelId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Rooms {
    Table,
    Id,
    HotelId,
    RoomType,
    BasePrice,
    CreatedAt,
}
