mod availability;
mod conflict;
mod error;

pub use availability::{first_free_room, fully_occupied_dates};
pub use error::BookingError;

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::model::*;
use crate::observability;
use crate::store::{ReservationStore, RoomStore};

use conflict::{today, validate_future_start, validate_ordered};

/// Orchestrating facade over the two stores. Each operation is a single
/// read/compute/(append) unit over a snapshot; the manager holds no state
/// beyond the store handles. The read-then-append in [`create_reservation`]
/// is not atomic across concurrent callers — serializing writes is the
/// store layer's job.
///
/// [`create_reservation`]: ReservationManager::create_reservation
pub struct ReservationManager {
    reservations: Arc<dyn ReservationStore>,
    rooms: Arc<dyn RoomStore>,
}

impl ReservationManager {
    pub fn new(reservations: Arc<dyn ReservationStore>, rooms: Arc<dyn RoomStore>) -> Self {
        Self {
            reservations,
            rooms,
        }
    }

    /// Try to satisfy `draft`. `Ok(true)` means a room was allocated and an
    /// active reservation persisted; `Ok(false)` means the request was well
    /// formed but no room is free — nothing is written in that case.
    pub async fn create_reservation(
        &self,
        draft: &ReservationDraft,
    ) -> Result<bool, BookingError> {
        validate_ordered(draft.start_date, draft.end_date)?;
        validate_future_start(draft.start_date, today())?;
        let span = DateSpan::new(draft.start_date, draft.end_date);

        let rooms = self.rooms.get_all().await?;
        let existing = self.reservations.get_all().await?;

        let Some(room_id) = first_free_room(&rooms, &existing, &span) else {
            debug!(start = %span.start, end = %span.end, "no room free for requested range");
            metrics::counter!(observability::RESERVATIONS_REJECTED_TOTAL).increment(1);
            return Ok(false);
        };

        let id = self
            .reservations
            .add(NewReservation {
                room_id,
                customer_id: draft.customer_id,
                start_date: draft.start_date,
                end_date: draft.end_date,
                is_active: true,
            })
            .await?;

        info!(%id, room_id, start = %span.start, end = %span.end, "reservation created");
        metrics::counter!(observability::RESERVATIONS_CREATED_TOTAL).increment(1);
        Ok(true)
    }

    /// Lowest-id room free for the whole of `[start, end]`, or `None` if
    /// every room conflicts. Read-only; same validation as creation.
    pub async fn find_available_room(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Option<RoomId>, BookingError> {
        validate_ordered(start, end)?;
        validate_future_start(start, today())?;
        let span = DateSpan::new(start, end);

        let rooms = self.rooms.get_all().await?;
        let existing = self.reservations.get_all().await?;
        Ok(first_free_room(&rooms, &existing, &span))
    }

    /// Ascending dates in `[start, end]` on which no room is available at
    /// all. Accepts past and present dates — only the ordering is validated.
    pub async fn get_fully_occupied_dates(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<NaiveDate>, BookingError> {
        validate_ordered(start, end)?;
        let span = DateSpan::new(start, end);

        let rooms = self.rooms.get_all().await?;
        let existing = self.reservations.get_all().await?;

        metrics::histogram!(observability::OCCUPANCY_SCAN_DAYS).record(span.num_days() as f64);
        Ok(fully_occupied_dates(&rooms, &existing, &span))
    }
}
