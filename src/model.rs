use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Room identifier. Non-negative for real rooms; see [`NO_ROOM`].
pub type RoomId = i64;

/// Opaque customer reference — never inspected by allocation logic.
pub type CustomerId = i64;

/// Reservation identifier, assigned by the reservation store on append.
pub type ReservationId = Ulid;

/// Integer-boundary encoding of "no room available". The Rust API returns
/// `Option<RoomId>`; this constant exists only for callers that must speak
/// an integer-compatible protocol. Guaranteed not to collide with a real id.
pub const NO_ROOM: RoomId = -1;

/// Closed interval of calendar dates `[start, end]`, both ends inclusive.
/// Time-of-day does not exist at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end, "DateSpan start must not be after end");
        Self { start, end }
    }

    /// Single-day span `[d, d]`.
    pub fn day(d: NaiveDate) -> Self {
        Self { start: d, end: d }
    }

    /// Inclusive-interval overlap: `[a1,a2]` and `[b1,b2]` overlap iff
    /// `a1 <= b2 && a2 >= b1`. Touching boundary dates count as overlap.
    /// This is the only overlap test in the crate.
    pub fn overlaps(&self, other: &DateSpan) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    pub fn contains_day(&self, d: NaiveDate) -> bool {
        self.start <= d && d <= self.end
    }

    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Every date in the span, ascending, both ends included.
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d <= self.end)
    }
}

/// A bookable room. The description is an opaque label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub description: String,
}

/// A persisted reservation. `start_date <= end_date` always holds; inactive
/// reservations are invisible to conflict and occupancy logic (soft cancel).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub room_id: RoomId,
    pub customer_id: CustomerId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
}

impl Reservation {
    pub fn span(&self) -> DateSpan {
        DateSpan::new(self.start_date, self.end_date)
    }
}

/// A reservation ready to persist — everything but the id, which the store
/// assigns on append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReservation {
    pub room_id: RoomId,
    pub customer_id: CustomerId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
}

/// What a caller submits: no room assigned yet, no identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDraft {
    pub customer_id: CustomerId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
