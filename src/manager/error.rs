use crate::store::StoreError;

/// Errors surfaced by the reservation manager. An unsatisfiable request is
/// NOT an error — it comes back as `Ok(false)` / `Ok(None)` / an empty vec.
#[derive(Debug)]
pub enum BookingError {
    /// Malformed request: reversed range, or a start date that is not
    /// strictly in the future where the operation requires one. Raised
    /// before any store access.
    InvalidDateRange(&'static str),
    /// Collaborator failure, propagated unchanged from a store call.
    Store(StoreError),
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingError::InvalidDateRange(msg) => write!(f, "invalid date range: {msg}"),
            BookingError::Store(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for BookingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BookingError::Store(e) => Some(e),
            BookingError::InvalidDateRange(_) => None,
        }
    }
}

impl From<StoreError> for BookingError {
    fn from(e: StoreError) -> Self {
        BookingError::Store(e)
    }
}
