pub mod manager;
pub mod model;
pub mod observability;
pub mod store;

pub use manager::{BookingError, ReservationManager};
pub use model::{
    CustomerId, DateSpan, NO_ROOM, NewReservation, Reservation, ReservationDraft, ReservationId,
    Room, RoomId,
};
pub use store::{
    InMemoryReservationStore, InMemoryRoomStore, ReservationStore, RoomStore, StoreError,
};
