use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Cents, Room, RoomNumber};

pub type BookingId = u32;

/// A record of one guest reserving one room for a date range.
/// Bookings are immutable once created: the room fields are a snapshot
/// taken at booking time and the total cost is computed once and frozen,
/// so later changes to the room never alter a stored booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    /// Snapshot of the booked room, copied at booking time.
    pub room_number: RoomNumber,
    pub room_category: String,
    pub nightly_price_cents: Cents,
    pub guest_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    /// nightly price x nights, frozen at creation. Zero or negative when
    /// check-out is on or before check-in; no validation by design.
    pub total_cost_cents: Cents,
}

impl Booking {
    /// Create a booking for the given room. The id must be assigned by the
    /// ledger.
    pub fn new(
        id: BookingId,
        room: &Room,
        guest_name: impl Into<String>,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Self {
        let nights = (check_out - check_in).num_days();
        Self {
            id,
            room_number: room.number,
            room_category: room.category.clone(),
            nightly_price_cents: room.price_cents,
            guest_name: guest_name.into(),
            check_in,
            check_out,
            total_cost_cents: room.price_cents * nights,
        }
    }

    /// Whole-day difference between check-out and check-in.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}
