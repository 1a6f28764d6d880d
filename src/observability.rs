// ── Reservation metrics ──────────────────────────────────────────

/// Counter: reservations successfully allocated and persisted.
pub const RESERVATIONS_CREATED_TOTAL: &str = "innkeep_reservations_created_total";

/// Counter: well-formed requests turned away because no room was free.
pub const RESERVATIONS_REJECTED_TOTAL: &str = "innkeep_reservations_rejected_total";

/// Histogram: width in days of occupancy queries.
pub const OCCUPANCY_SCAN_DAYS: &str = "innkeep_occupancy_scan_days";
