// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use chrono::NaiveDate;
use locanda::application::ReservationService;

/// Service over the standard seed: 101 Single $100, 102 Double $150,
/// 103 Suite $250; fees Cash 0 / Credit Card 2.50 / Debit Card 1.50.
pub fn standard_service() -> ReservationService {
    ReservationService::with_standard_seed()
}

/// Helper to parse a date string into a NaiveDate
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Book room 101 for Alice, 2024-01-01 to 2024-01-04 (3 nights at $100).
pub fn book_alice(service: &mut ReservationService) -> u32 {
    service
        .make_reservation(101, "Alice", date("2024-01-01"), date("2024-01-04"))
        .unwrap()
        .id
}
