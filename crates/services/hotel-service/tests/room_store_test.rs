//! Room repository tests against a real (in-memory SQLite) database.

mod support;

use futures::future::join_all;
use uuid::Uuid;

use common::AppError;
use domain::{FindOptions, NewRoom, RoomFilter, RoomSort, RoomType, SortOrder};

#[tokio::test]
async fn test_inserted_room_reads_back_equal() {
    let stores = support::stores().await;
    let hotel = support::hotel(&stores, "Royal Mansour").await;

    let room = stores
        .rooms
        .insert_room(NewRoom::new(hotel.id, RoomType::Deluxe, 1999.9).unwrap())
        .await
        .unwrap();

    let fetched = stores.rooms.get_room_by_id(room.id).await.unwrap();
    assert_eq!(fetched, room);
    assert_eq!(fetched.hotel_id, hotel.id);
    assert_eq!(fetched.room_type, RoomType::Deluxe);
    assert_eq!(fetched.base_price, 1999.9);
}

#[tokio::test]
async fn test_insert_appends_room_to_hotel_exactly_once() {
    let stores = support::stores().await;
    let hotel = support::hotel(&stores, "Royal Mansour").await;

    let first = stores
        .rooms
        .insert_room(NewRoom::new(hotel.id, RoomType::Single, 99.9).unwrap())
        .await
        .unwrap();
    let second = stores
        .rooms
        .insert_room(NewRoom::new(hotel.id, RoomType::Seaside, 299.9).unwrap())
        .await
        .unwrap();

    let hotel = stores.hotels.find_by_id(hotel.id).await.unwrap().unwrap();
    assert_eq!(hotel.rooms, vec![first.id, second.id]);
    assert_eq!(hotel.room_count(first.id), 1);
    assert_eq!(hotel.room_count(second.id), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_inserts_lose_no_room() {
    let db = support::file_stores(8).await;
    let stores = &db.stores;
    let hotel = support::hotel(stores, "Mazagan Beach Resort").await;

    let tasks = (0..32).map(|i| {
        let rooms = stores.rooms.clone();
        let new_room = NewRoom::new(hotel.id, RoomType::Single, 100.0 + i as f64).unwrap();
        tokio::spawn(async move { rooms.insert_room(new_room).await })
    });

    let inserted: Vec<Uuid> = join_all(tasks)
        .await
        .into_iter()
        .map(|joined| joined.unwrap().unwrap().id)
        .collect();

    let hotel = stores.hotels.find_by_id(hotel.id).await.unwrap().unwrap();
    assert_eq!(inserted.len(), 32);
    assert_eq!(hotel.rooms.len(), inserted.len());
    for id in inserted {
        assert_eq!(hotel.room_count(id), 1);
    }

    let rooms = stores
        .rooms
        .get_rooms(RoomFilter::all().hotel(hotel.id), FindOptions::default())
        .await
        .unwrap();
    assert_eq!(rooms.len(), 32);
}

#[tokio::test]
async fn test_unknown_hotel_leaves_no_orphan() {
    let stores = support::stores().await;

    let result = stores
        .rooms
        .insert_room(NewRoom::new(Uuid::new_v4(), RoomType::Single, 99.9).unwrap())
        .await;

    assert!(matches!(result, Err(AppError::NotFound("hotel"))));
    let rooms = stores
        .rooms
        .get_rooms(RoomFilter::all(), FindOptions::default())
        .await
        .unwrap();
    assert!(rooms.is_empty());
}

#[tokio::test]
async fn test_get_missing_room_is_not_found() {
    let stores = support::stores().await;
    let result = stores.rooms.get_room_by_id(Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::NotFound("room"))));
}

#[tokio::test]
async fn test_unmatched_filter_returns_empty() {
    let stores = support::stores().await;
    let hotel = support::hotel(&stores, "Royal Mansour").await;
    stores
        .rooms
        .insert_room(NewRoom::new(hotel.id, RoomType::Single, 99.9).unwrap())
        .await
        .unwrap();

    let rooms = stores
        .rooms
        .get_rooms(RoomFilter::all().hotel(Uuid::new_v4()), FindOptions::default())
        .await
        .unwrap();
    assert!(rooms.is_empty());
}

#[tokio::test]
async fn test_filter_sort_and_paginate() {
    let stores = support::stores().await;
    let royal = support::hotel(&stores, "Royal Mansour").await;
    let mazagan = support::hotel(&stores, "Mazagan Beach Resort").await;

    for (hotel_id, room_type, price) in [
        (royal.id, RoomType::Single, 99.9),
        (royal.id, RoomType::Deluxe, 1999.9),
        (royal.id, RoomType::Seaside, 299.9),
        (mazagan.id, RoomType::Single, 79.0),
    ] {
        stores
            .rooms
            .insert_room(NewRoom::new(hotel_id, room_type, price).unwrap())
            .await
            .unwrap();
    }

    let royal_rooms = stores
        .rooms
        .get_rooms(RoomFilter::all().hotel(royal.id), FindOptions::default())
        .await
        .unwrap();
    assert_eq!(royal_rooms.len(), 3);

    let singles = stores
        .rooms
        .get_rooms(RoomFilter::all().room_type(RoomType::Single), FindOptions::default())
        .await
        .unwrap();
    assert_eq!(singles.len(), 2);

    let affordable = stores
        .rooms
        .get_rooms(
            RoomFilter::all().price_between(None, Some(300.0)).unwrap(),
            FindOptions::default().sort_by(RoomSort::BasePrice, SortOrder::Desc),
        )
        .await
        .unwrap();
    let prices: Vec<f64> = affordable.iter().map(|room| room.base_price).collect();
    assert_eq!(prices, vec![299.9, 99.9, 79.0]);

    let page = stores
        .rooms
        .get_rooms(
            RoomFilter::all(),
            FindOptions::default()
                .sort_by(RoomSort::BasePrice, SortOrder::Asc)
                .skip(1)
                .limit(2),
        )
        .await
        .unwrap();
    let prices: Vec<f64> = page.iter().map(|room| room.base_price).collect();
    assert_eq!(prices, vec![99.9, 299.9]);

    let tail = stores
        .rooms
        .get_rooms(
            RoomFilter::all(),
            FindOptions::default()
                .sort_by(RoomSort::BasePrice, SortOrder::Asc)
                .skip(3),
        )
        .await
        .unwrap();
    assert_eq!(tail.len(), 1);
    assert_eq!(tail[0].base_price, 1999.9);
}

#[tokio::test]
async fn test_drop_empties_rooms_and_is_idempotent() {
    let stores = support::stores().await;
    let hotel = support::hotel(&stores, "Royal Mansour").await;
    stores
        .rooms
        .insert_room(NewRoom::new(hotel.id, RoomType::Single, 99.9).unwrap())
        .await
        .unwrap();

    stores.rooms.drop_all().await.unwrap();
    stores.rooms.drop_all().await.unwrap();

    let rooms = stores
        .rooms
        .get_rooms(RoomFilter::all(), FindOptions::default())
        .await
        .unwrap();
    assert!(rooms.is_empty());
}
