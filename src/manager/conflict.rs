use chrono::NaiveDate;

use crate::model::*;

use super::BookingError;

pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub(crate) fn validate_ordered(start: NaiveDate, end: NaiveDate) -> Result<(), BookingError> {
    if start > end {
        return Err(BookingError::InvalidDateRange(
            "start date must not be after end date",
        ));
    }
    Ok(())
}

/// Allocation and creation additionally require a strictly-future start.
/// Occupancy queries deliberately do not (see DESIGN.md).
pub(crate) fn validate_future_start(
    start: NaiveDate,
    today: NaiveDate,
) -> Result<(), BookingError> {
    if start <= today {
        return Err(BookingError::InvalidDateRange(
            "start date must be strictly after today",
        ));
    }
    Ok(())
}

/// True iff no active reservation for `room_id` overlaps `span`. Inactive
/// reservations never conflict (soft cancel). Both the allocator and the
/// occupancy aggregator go through this check.
pub(crate) fn room_is_free(room_id: RoomId, reservations: &[Reservation], span: &DateSpan) -> bool {
    !reservations
        .iter()
        .any(|r| r.is_active && r.room_id == room_id && r.span().overlaps(span))
}
