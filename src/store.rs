use async_trait::async_trait;
use tokio::sync::RwLock;
use ulid::Ulid;

use crate::model::*;

/// Failure surfaced by a store implementation (connectivity, constraint
/// violation, …). Propagated unchanged to the manager's caller; the core
/// never retries.
#[derive(Debug, Clone)]
pub struct StoreError {
    message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "store error: {}", self.message)
    }
}

impl std::error::Error for StoreError {}

/// Durable collection of reservations. `get_all` returns every record,
/// active and inactive; `add` assigns the identity and makes the record
/// visible to `get_all` calls issued after it completes.
#[async_trait]
pub trait ReservationStore: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Reservation>, StoreError>;
    async fn add(&self, reservation: NewReservation) -> Result<ReservationId, StoreError>;
}

/// Durable room inventory. Iteration order is whatever the store returns;
/// the allocator imposes its own ordering on top.
#[async_trait]
pub trait RoomStore: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Room>, StoreError>;
}

// ── In-memory implementations ────────────────────────────────────

/// Append-only in-memory reservation store. Also serves as the test fake.
pub struct InMemoryReservationStore {
    reservations: RwLock<Vec<Reservation>>,
}

impl Default for InMemoryReservationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryReservationStore {
    pub fn new() -> Self {
        Self {
            reservations: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ReservationStore for InMemoryReservationStore {
    async fn get_all(&self) -> Result<Vec<Reservation>, StoreError> {
        Ok(self.reservations.read().await.clone())
    }

    async fn add(&self, reservation: NewReservation) -> Result<ReservationId, StoreError> {
        let id = Ulid::new();
        self.reservations.write().await.push(Reservation {
            id,
            room_id: reservation.room_id,
            customer_id: reservation.customer_id,
            start_date: reservation.start_date,
            end_date: reservation.end_date,
            is_active: reservation.is_active,
        });
        Ok(id)
    }
}

/// Fixed in-memory room inventory.
pub struct InMemoryRoomStore {
    rooms: Vec<Room>,
}

impl InMemoryRoomStore {
    pub fn new(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }
}

#[async_trait]
impl RoomStore for InMemoryRoomStore {
    async fn get_all(&self) -> Result<Vec<Room>, StoreError> {
        Ok(self.rooms.clone())
    }
}
