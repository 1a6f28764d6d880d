//! End-to-end scenarios over the public API: a two-room hotel with both
//! rooms booked for the same ten-day window.

use std::sync::Arc;

use chrono::{Duration, NaiveDate};

use innkeep::{
    BookingError, InMemoryReservationStore, InMemoryRoomStore, NO_ROOM, NewReservation,
    Reservation, ReservationDraft, ReservationManager, ReservationStore, Room,
};

fn days(n: i64) -> NaiveDate {
    chrono::Local::now().date_naive() + Duration::days(n)
}

async fn two_room_hotel() -> (ReservationManager, Arc<InMemoryReservationStore>) {
    let reservations = Arc::new(InMemoryReservationStore::new());
    for (room_id, customer_id, start, end) in [
        (1, 1, days(1), days(1)),
        (1, 1, days(10), days(20)),
        (2, 2, days(10), days(20)),
    ] {
        reservations
            .add(NewReservation {
                room_id,
                customer_id,
                start_date: start,
                end_date: end,
                is_active: true,
            })
            .await
            .unwrap();
    }
    let rooms = Arc::new(InMemoryRoomStore::new(vec![
        Room {
            id: 1,
            description: "A".into(),
        },
        Room {
            id: 2,
            description: "B".into(),
        },
    ]));
    (
        ReservationManager::new(reservations.clone(), rooms),
        reservations,
    )
}

#[tokio::test]
async fn day_one_allocates_the_unbooked_room() {
    let (manager, _) = two_room_hotel().await;
    let room = manager.find_available_room(days(1), days(1)).await.unwrap();
    assert_eq!(room, Some(2));
}

#[tokio::test]
async fn occupied_window_is_exactly_the_booked_days() {
    let (manager, _) = two_room_hotel().await;
    let dates = manager
        .get_fully_occupied_dates(days(5), days(25))
        .await
        .unwrap();
    assert_eq!(dates, (10..=20).map(days).collect::<Vec<_>>());

    let inner = manager
        .get_fully_occupied_dates(days(12), days(15))
        .await
        .unwrap();
    assert_eq!(inner, (12..=15).map(days).collect::<Vec<_>>());
}

#[tokio::test]
async fn reversed_range_is_a_validation_error() {
    let (manager, _) = two_room_hotel().await;
    let result = manager
        .create_reservation(&ReservationDraft {
            customer_id: 1,
            start_date: days(2),
            end_date: days(1),
        })
        .await;
    // callers must be able to tell a bad request from a full hotel
    match result {
        Err(BookingError::InvalidDateRange(_)) => {}
        other => panic!("expected InvalidDateRange, got {other:?}"),
    }
}

#[tokio::test]
async fn clear_range_books_and_persists() {
    let (manager, store) = two_room_hotel().await;
    let created = manager
        .create_reservation(&ReservationDraft {
            customer_id: 9,
            start_date: days(25),
            end_date: days(30),
        })
        .await
        .unwrap();
    assert!(created);

    let persisted: Vec<Reservation> = store
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .filter(|r| r.customer_id == 9)
        .collect();
    assert_eq!(persisted.len(), 1);
    assert!(persisted[0].is_active);
    assert!(persisted[0].room_id >= 0);
}

#[tokio::test]
async fn booked_out_range_is_a_plain_negative_result() {
    let (manager, store) = two_room_hotel().await;
    let before = store.get_all().await.unwrap().len();

    let created = manager
        .create_reservation(&ReservationDraft {
            customer_id: 9,
            start_date: days(5),
            end_date: days(25),
        })
        .await
        .unwrap();
    assert!(!created);
    assert_eq!(store.get_all().await.unwrap().len(), before);
}

#[tokio::test]
async fn sentinel_mapping_for_integer_boundaries() {
    let (manager, _) = two_room_hotel().await;
    let room = manager
        .find_available_room(days(12), days(15))
        .await
        .unwrap();
    // how an integer-protocol adapter would encode the result
    assert_eq!(room.unwrap_or(NO_ROOM), NO_ROOM);
}
