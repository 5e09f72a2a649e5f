use serde::{Deserialize, Serialize};

use super::{format_cents, Cents};

pub type RoomNumber = u32;

/// A bookable unit. Rooms are created once from the seed and never removed;
/// the availability flag is the only field that changes, and only the
/// reservation service flips it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub number: RoomNumber,
    /// Free-text category label ("Single", "Double", ...), matched
    /// case-insensitively when searching.
    pub category: String,
    /// Nightly price in cents, fixed at seed time.
    pub price_cents: Cents,
    pub available: bool,
}

impl Room {
    pub fn new(number: RoomNumber, category: impl Into<String>, price_cents: Cents) -> Self {
        Self {
            number,
            category: category.into(),
            price_cents,
            available: true,
        }
    }

    pub fn matches_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category)
    }
}

impl std::fmt::Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Room {} ({}) - ${}",
            self.number,
            self.category,
            format_cents(self.price_cents)
        )
    }
}
