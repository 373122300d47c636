//! Hotel repository implementation.
//!
//! A hotel's room list is stored as rows of `hotel_rooms`, so appending a
//! room id is a single insert and concurrent appends cannot overwrite each
//! other.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, EntityTrait, NotSet, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use super::entities::hotel::{self, Entity as HotelEntity};
use super::entities::hotel_room::{self, Entity as HotelRoomEntity};
use common::AppResult;
use domain::{Hotel, HotelFilter, HotelUpdate, NewHotel, UpdateOutcome};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Hotel repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// Create a hotel with an empty room list
    async fn insert(&self, hotel: NewHotel) -> AppResult<Hotel>;

    /// Find hotel by ID, with its room ids in append order
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Hotel>>;

    /// List all hotels ordered by name
    async fn list(&self) -> AppResult<Vec<Hotel>>;

    /// Apply one mutation to at most one hotel matching `filter`.
    ///
    /// A filter that matches nothing is not an error: the outcome reports
    /// `matched == 0` and the caller decides.
    async fn update(&self, filter: HotelFilter, update: HotelUpdate) -> AppResult<UpdateOutcome>;

    /// Same as [`HotelRepository::update`], inside the caller's transaction
    async fn update_in(
        &self,
        txn: &DatabaseTransaction,
        filter: HotelFilter,
        update: HotelUpdate,
    ) -> AppResult<UpdateOutcome>;

    /// Delete every hotel and room list entry
    async fn drop_all(&self) -> AppResult<()>;
}

/// Concrete implementation of HotelRepository
pub struct HotelStore {
    db: DatabaseConnection,
}

impl HotelStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HotelRepository for HotelStore {
    async fn insert(&self, hotel: NewHotel) -> AppResult<Hotel> {
        let active_model = hotel::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(hotel.name().to_string()),
            location: Set(hotel.location().to_string()),
        };

        let model = active_model.insert(&self.db).await?;
        tracing::info!(hotel_id = %model.id, name = %model.name, "Hotel inserted");
        Ok(model.into_hotel(Vec::new()))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Hotel>> {
        let Some(model) = HotelEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let rooms = room_ids(&self.db, model.id).await?;
        Ok(Some(model.into_hotel(rooms)))
    }

    async fn list(&self) -> AppResult<Vec<Hotel>> {
        let models = HotelEntity::find()
            .order_by_asc(hotel::Column::Name)
            .all(&self.db)
            .await?;

        let mut rooms_by_hotel: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for entry in HotelRoomEntity::find()
            .order_by_asc(hotel_room::Column::Id)
            .all(&self.db)
            .await?
        {
            rooms_by_hotel
                .entry(entry.hotel_id)
                .or_default()
                .push(entry.room_id);
        }

        Ok(models
            .into_iter()
            .map(|model| {
                let rooms = rooms_by_hotel.remove(&model.id).unwrap_or_default();
                model.into_hotel(rooms)
            })
            .collect())
    }

    async fn update(&self, filter: HotelFilter, update: HotelUpdate) -> AppResult<UpdateOutcome> {
        // Lookup and write must see the same hotel
        let txn = self.db.begin().await?;
        let outcome = apply_update(&txn, &filter, &update).await?;
        txn.commit().await?;
        Ok(outcome)
    }

    async fn update_in(
        &self,
        txn: &DatabaseTransaction,
        filter: HotelFilter,
        update: HotelUpdate,
    ) -> AppResult<UpdateOutcome> {
        apply_update(txn, &filter, &update).await
    }

    async fn drop_all(&self) -> AppResult<()> {
        HotelRoomEntity::delete_many().exec(&self.db).await?;
        HotelEntity::delete_many().exec(&self.db).await?;
        tracing::info!("Dropped hotels collection");
        Ok(())
    }
}

fn filter_condition(filter: &HotelFilter) -> Condition {
    match filter {
        HotelFilter::Id(id) => Condition::all().add(hotel::Column::Id.eq(*id)),
        HotelFilter::Name(name) => Condition::all().add(hotel::Column::Name.eq(name.as_str())),
    }
}

async fn room_ids<C: ConnectionTrait>(conn: &C, hotel_id: Uuid) -> AppResult<Vec<Uuid>> {
    let entries = HotelRoomEntity::find()
        .filter(hotel_room::Column::HotelId.eq(hotel_id))
        .order_by_asc(hotel_room::Column::Id)
        .all(conn)
        .await?;

    Ok(entries.into_iter().map(|entry| entry.room_id).collect())
}

async fn apply_update<C: ConnectionTrait>(
    conn: &C,
    filter: &HotelFilter,
    update: &HotelUpdate,
) -> AppResult<UpdateOutcome> {
    let Some(target) = HotelEntity::find()
        .filter(filter_condition(filter))
        .order_by_asc(hotel::Column::Id)
        .one(conn)
        .await?
    else {
        tracing::debug!(?filter, "Hotel update matched nothing");
        return Ok(UpdateOutcome::default());
    };

    let modified = match update {
        HotelUpdate::PushRoom(room_id) => {
            let entry = hotel_room::ActiveModel {
                id: NotSet,
                hotel_id: Set(target.id),
                room_id: Set(*room_id),
            };
            HotelRoomEntity::insert(entry).exec(conn).await?;
            1
        }
        HotelUpdate::Rename(name) if target.name != *name => {
            let mut active: hotel::ActiveModel = target.into();
            active.name = Set(name.clone());
            active.update(conn).await?;
            1
        }
        HotelUpdate::Relocate(location) if target.location != *location => {
            let mut active: hotel::ActiveModel = target.into();
            active.location = Set(location.clone());
            active.update(conn).await?;
            1
        }
        HotelUpdate::Rename(_) | HotelUpdate::Relocate(_) => 0,
    };

    Ok(UpdateOutcome {
        matched: 1,
        modified,
    })
}
