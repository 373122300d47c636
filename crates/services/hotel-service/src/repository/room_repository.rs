//! Room repository implementation.
//!
//! Inserting a room also appends its id to the parent hotel's room list.
//! Both writes run in one database transaction: if the append fails or
//! matches no hotel, the room insert is rolled back with it, so no room is
//! ever left unreferenced.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DatabaseTransaction,
    EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use super::entities::room::{self, Entity as RoomEntity};
use super::hotel_repository::HotelRepository;
use common::{AppError, AppResult, OptionExt};
use domain::{
    FindOptions, HotelFilter, HotelUpdate, NewRoom, Room, RoomFilter, RoomSort, SortOrder,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Room repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Persist a room and attach it to its hotel; returns it with its new id
    async fn insert_room(&self, room: NewRoom) -> AppResult<Room>;

    /// Point lookup; `NotFound` when absent
    async fn get_room_by_id(&self, id: Uuid) -> AppResult<Room>;

    /// Rooms matching `filter`, paged and sorted by `options`
    async fn get_rooms(&self, filter: RoomFilter, options: FindOptions) -> AppResult<Vec<Room>>;

    /// Delete every room. Maintenance and seeding only.
    async fn drop_all(&self) -> AppResult<()>;
}

/// Concrete implementation of RoomRepository
pub struct RoomStore {
    db: DatabaseConnection,
    hotels: Arc<dyn HotelRepository>,
}

impl RoomStore {
    /// Create new repository instance on top of a hotel repository
    pub fn new(db: DatabaseConnection, hotels: Arc<dyn HotelRepository>) -> Self {
        Self { db, hotels }
    }

    async fn insert_and_attach(&self, txn: &DatabaseTransaction, room: NewRoom) -> AppResult<Room> {
        let id = Uuid::new_v4();
        let active_model = room::ActiveModel {
            id: Set(id),
            hotel_id: Set(room.hotel_id()),
            room_type: Set(room.room_type().as_str().to_string()),
            base_price: Set(room.base_price()),
            created_at: Set(Utc::now()),
        };
        active_model.insert(txn).await?;
        let room = room.into_room(id);

        let outcome = self
            .hotels
            .update_in(
                txn,
                HotelFilter::Id(room.hotel_id),
                HotelUpdate::push_room(room.id),
            )
            .await?;

        if !outcome.is_match() {
            return Err(AppError::NotFound("hotel"));
        }

        Ok(room)
    }
}

#[async_trait]
impl RoomRepository for RoomStore {
    async fn insert_room(&self, room: NewRoom) -> AppResult<Room> {
        let hotel_id = room.hotel_id();
        let txn = self.db.begin().await?;

        match self.insert_and_attach(&txn, room).await {
            Ok(room) => {
                txn.commit().await?;
                tracing::info!(room_id = %room.id, hotel_id = %hotel_id, "Room inserted");
                Ok(room)
            }
            Err(e) => {
                tracing::warn!(hotel_id = %hotel_id, error = %e, "Room insert rolled back");
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }

    async fn get_room_by_id(&self, id: Uuid) -> AppResult<Room> {
        let model = RoomEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found("room")?;

        Ok(Room::try_from(model)?)
    }

    async fn get_rooms(&self, filter: RoomFilter, options: FindOptions) -> AppResult<Vec<Room>> {
        tracing::debug!(?filter, ?options, "Querying rooms");

        let order = match options.order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };
        let column = match options.sort {
            RoomSort::Created => room::Column::CreatedAt,
            RoomSort::BasePrice => room::Column::BasePrice,
            RoomSort::RoomType => room::Column::RoomType,
        };

        let mut query = RoomEntity::find()
            .filter(room_condition(&filter))
            .order_by(column, order)
            .order_by_asc(room::Column::Id);

        if options.skip > 0 {
            // SQLite rejects OFFSET without LIMIT
            query = query
                .offset(options.skip)
                .limit(options.limit.unwrap_or(i64::MAX as u64));
        } else if let Some(limit) = options.limit {
            query = query.limit(limit);
        }

        let models = query.all(&self.db).await?;
        models
            .into_iter()
            .map(|model| Room::try_from(model).map_err(AppError::from))
            .collect()
    }

    async fn drop_all(&self) -> AppResult<()> {
        RoomEntity::delete_many().exec(&self.db).await?;
        tracing::info!("Dropped rooms collection");
        Ok(())
    }
}

fn room_condition(filter: &RoomFilter) -> Condition {
    let mut condition = Condition::all();
    if let Some(hotel_id) = filter.hotel_id() {
        condition = condition.add(room::Column::HotelId.eq(hotel_id));
    }
    if let Some(room_type) = filter.room_type_value() {
        condition = condition.add(room::Column::RoomType.eq(room_type.as_str()));
    }
    if let Some(min) = filter.min_price() {
        condition = condition.add(room::Column::BasePrice.gte(min));
    }
    if let Some(max) = filter.max_price() {
        condition = condition.add(room::Column::BasePrice.lte(max));
    }
    condition
}
