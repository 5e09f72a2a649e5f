use thiserror::Error;

use crate::domain::{BookingId, RoomNumber};

#[derive(Error, Debug)]
pub enum ReservationError {
    /// The desk does not tell a missing room apart from a booked one;
    /// both report the same generic failure.
    #[error("Room {0} not available or not found")]
    RoomUnavailable(RoomNumber),

    #[error("Booking not found: {0}")]
    BookingNotFound(BookingId),

    #[error("Invalid payment method: {0}")]
    InvalidPaymentMethod(String),
}
