use chrono::NaiveDate;

use crate::domain::{Booking, BookingId, BookingLedger, Cents, FeeTable, Room, RoomNumber};

use super::ReservationError;

/// Application service providing the desk operations: search, reserve,
/// booking lookup and payment totals. Owns all state (rooms, ledger, fee
/// table); constructed once at startup and handed to the front-end.
pub struct ReservationService {
    rooms: Vec<Room>,
    ledger: BookingLedger,
    fees: FeeTable,
}

/// Result of computing a payment total. Nothing is recorded anywhere:
/// asking twice for the same booking yields the same receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub booking_id: BookingId,
    pub method: String,
    pub total_cost_cents: Cents,
    pub fee_cents: Cents,
    /// Booking total plus the flat method fee.
    pub amount_cents: Cents,
}

impl ReservationService {
    /// Create a service over the given room and fee seed.
    pub fn new(rooms: Vec<Room>, fees: FeeTable) -> Self {
        Self {
            rooms,
            ledger: BookingLedger::new(),
            fees,
        }
    }

    /// The original desk's fixed seed: rooms 101 Single $100, 102 Double
    /// $150, 103 Suite $250, with the standard fee schedule.
    pub fn with_standard_seed() -> Self {
        let rooms = vec![
            Room::new(101, "Single", 10000),
            Room::new(102, "Double", 15000),
            Room::new(103, "Suite", 25000),
        ];
        Self::new(rooms, FeeTable::standard())
    }

    /// All available rooms in the given category, matched
    /// case-insensitively. No match is an empty list, not an error.
    pub fn search_rooms(&self, category: &str) -> Vec<&Room> {
        self.rooms
            .iter()
            .filter(|room| room.available && room.matches_category(category))
            .collect()
    }

    /// Book the first available room with the given number: appends a
    /// booking to the ledger and marks the room unavailable. Fails without
    /// touching any state when the room is missing or already booked.
    pub fn make_reservation(
        &mut self,
        room_number: RoomNumber,
        guest_name: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<&Booking, ReservationError> {
        let room = self
            .rooms
            .iter_mut()
            .find(|room| room.number == room_number && room.available)
            .ok_or(ReservationError::RoomUnavailable(room_number))?;

        room.available = false;
        Ok(self.ledger.append(room, guest_name, check_in, check_out))
    }

    pub fn booking_details(&self, id: BookingId) -> Result<&Booking, ReservationError> {
        self.ledger
            .find_by_id(id)
            .ok_or(ReservationError::BookingNotFound(id))
    }

    /// Compute the amount due for a booking with the given payment method:
    /// the frozen booking total plus the method's flat fee. The fee is a
    /// flat cents amount added to the total, not a percentage.
    pub fn process_payment(
        &self,
        id: BookingId,
        method: &str,
    ) -> Result<PaymentReceipt, ReservationError> {
        let booking = self.booking_details(id)?;
        let fee_cents = self
            .fees
            .fee_for(method)
            .ok_or_else(|| ReservationError::InvalidPaymentMethod(method.to_string()))?;

        Ok(PaymentReceipt {
            booking_id: booking.id,
            method: method.to_string(),
            total_cost_cents: booking.total_cost_cents,
            fee_cents,
            amount_cents: booking.total_cost_cents + fee_cents,
        })
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn booking_count(&self) -> usize {
        self.ledger.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_search_skips_booked_rooms() {
        let mut service = ReservationService::with_standard_seed();
        assert_eq!(service.search_rooms("Single").len(), 1);

        service
            .make_reservation(101, "Alice", date("2024-01-01"), date("2024-01-04"))
            .unwrap();

        assert!(service.search_rooms("Single").is_empty());
        assert_eq!(service.search_rooms("Double").len(), 1);
    }

    #[test]
    fn test_reservation_failure_leaves_state_untouched() {
        let mut service = ReservationService::with_standard_seed();

        let result = service.make_reservation(999, "Alice", date("2024-01-01"), date("2024-01-02"));
        assert!(matches!(result, Err(ReservationError::RoomUnavailable(999))));

        assert_eq!(service.booking_count(), 0);
        assert!(service.rooms().iter().all(|r| r.available));
    }

    #[test]
    fn test_double_booking_rejected() {
        let mut service = ReservationService::with_standard_seed();
        service
            .make_reservation(101, "Alice", date("2024-01-01"), date("2024-01-04"))
            .unwrap();

        // Availability is a single flag, so the room stays taken even for
        // a disjoint date range.
        let again = service.make_reservation(101, "Bob", date("2025-06-01"), date("2025-06-02"));
        assert!(matches!(again, Err(ReservationError::RoomUnavailable(101))));
        assert_eq!(service.booking_count(), 1);
    }

    #[test]
    fn test_payment_adds_flat_fee() {
        let mut service = ReservationService::with_standard_seed();
        service
            .make_reservation(101, "Alice", date("2024-01-01"), date("2024-01-04"))
            .unwrap();

        let receipt = service.process_payment(1, "Credit Card").unwrap();
        assert_eq!(receipt.total_cost_cents, 30000);
        assert_eq!(receipt.fee_cents, 250);
        assert_eq!(receipt.amount_cents, 30250);
    }

    #[test]
    fn test_payment_errors() {
        let mut service = ReservationService::with_standard_seed();
        service
            .make_reservation(101, "Alice", date("2024-01-01"), date("2024-01-04"))
            .unwrap();

        assert!(matches!(
            service.process_payment(42, "Cash"),
            Err(ReservationError::BookingNotFound(42))
        ));
        assert!(matches!(
            service.process_payment(1, "Unknown"),
            Err(ReservationError::InvalidPaymentMethod(_))
        ));
    }
}
