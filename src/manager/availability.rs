use chrono::NaiveDate;

use crate::model::*;

use super::conflict::room_is_free;

// ── Allocation & Occupancy Algorithms ─────────────────────────────

/// Find one room free for the whole of `span`, or `None` if every room has
/// a conflicting active reservation.
///
/// Room ids are sorted ascending before scanning so the pick is the lowest
/// free id, reproducible regardless of store iteration order.
pub fn first_free_room(
    rooms: &[Room],
    reservations: &[Reservation],
    span: &DateSpan,
) -> Option<RoomId> {
    let mut ids: Vec<RoomId> = rooms.iter().map(|r| r.id).collect();
    ids.sort_unstable();
    ids.into_iter()
        .find(|&id| room_is_free(id, reservations, span))
}

/// All dates in `span` on which every room has at least one active
/// reservation covering the day. Ascending, each date at most once.
///
/// With zero rooms no day can qualify — the universal quantifier is taken
/// over a non-empty inventory, matching allocation (which would still find
/// no room, but "fully occupied" means booked-out, not unbookable).
pub fn fully_occupied_dates(
    rooms: &[Room],
    reservations: &[Reservation],
    span: &DateSpan,
) -> Vec<NaiveDate> {
    if rooms.is_empty() {
        return Vec::new();
    }
    span.iter_days()
        .filter(|&d| {
            let day = DateSpan::day(d);
            rooms
                .iter()
                .all(|room| !room_is_free(room.id, reservations, &day))
        })
        .collect()
}
