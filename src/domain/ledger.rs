use chrono::NaiveDate;

use super::{Booking, BookingId, Room};

/// Append-only collection of bookings. Ids are assigned sequentially
/// starting at 1 and never reused; there is no update or delete.
#[derive(Debug)]
pub struct BookingLedger {
    bookings: Vec<Booking>,
    next_id: BookingId,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self {
            bookings: Vec::new(),
            next_id: 1,
        }
    }

    /// Snapshot the room, assign the next id and store the booking.
    /// Returns a reference to the stored record.
    pub fn append(
        &mut self,
        room: &Room,
        guest_name: impl Into<String>,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> &Booking {
        let booking = Booking::new(self.next_id, room, guest_name, check_in, check_out);
        self.next_id += 1;
        self.bookings.push(booking);
        self.bookings.last().expect("just pushed")
    }

    /// Linear scan; the ledger stays small enough that an index would be
    /// overkill.
    pub fn find_by_id(&self, id: BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

impl Default for BookingLedger {
    fn default() -> Self {
        Self::new()
    }
}
