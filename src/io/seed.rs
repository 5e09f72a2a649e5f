use std::collections::HashMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::domain::{parse_cents, FeeTable, Room};

/// On-disk seed format: the room inventory and the payment fee schedule.
/// Prices and fees are decimal strings ("100.00", "2.5") so the file never
/// carries float cents.
#[derive(Debug, Deserialize)]
pub struct SeedFile {
    pub rooms: Vec<SeedRoom>,
    pub payment_methods: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct SeedRoom {
    pub number: u32,
    pub category: String,
    pub price: String,
}

/// Load rooms and fees from a JSON seed file. Duplicate room numbers and
/// unparseable amounts are rejected; an empty room list is allowed but
/// pointless, so it is rejected too.
pub fn load_seed(path: &Path) -> Result<(Vec<Room>, FeeTable)> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file: {}", path.display()))?;
    let seed: SeedFile = serde_json::from_str(&data)
        .with_context(|| format!("Invalid seed file: {}", path.display()))?;

    seed_to_domain(seed)
}

fn seed_to_domain(seed: SeedFile) -> Result<(Vec<Room>, FeeTable)> {
    if seed.rooms.is_empty() {
        bail!("Seed file contains no rooms");
    }

    let mut rooms: Vec<Room> = Vec::with_capacity(seed.rooms.len());
    for entry in seed.rooms {
        if rooms.iter().any(|r| r.number == entry.number) {
            bail!("Duplicate room number in seed file: {}", entry.number);
        }
        let price_cents = parse_cents(&entry.price)
            .with_context(|| format!("Invalid price for room {}: '{}'", entry.number, entry.price))?;
        rooms.push(Room::new(entry.number, entry.category, price_cents));
    }

    let mut fees = HashMap::new();
    for (method, fee) in seed.payment_methods {
        let fee_cents = parse_cents(&fee)
            .with_context(|| format!("Invalid fee for payment method '{}': '{}'", method, fee))?;
        fees.insert(method, fee_cents);
    }

    Ok((rooms, FeeTable::new(fees)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(json: &str) -> Result<(Vec<Room>, FeeTable)> {
        seed_to_domain(serde_json::from_str(json).context("parse")?)
    }

    #[test]
    fn test_valid_seed() {
        let (rooms, fees) = seed(
            r#"{
                "rooms": [
                    { "number": 201, "category": "Twin", "price": "80.00" },
                    { "number": 202, "category": "Twin", "price": "85.5" }
                ],
                "payment_methods": { "Cash": "0", "Voucher": "1.25" }
            }"#,
        )
        .unwrap();

        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].price_cents, 8000);
        assert_eq!(rooms[1].price_cents, 8550);
        assert!(rooms.iter().all(|r| r.available));
        assert_eq!(fees.fee_for("Voucher"), Some(125));
    }

    #[test]
    fn test_duplicate_room_number_rejected() {
        let result = seed(
            r#"{
                "rooms": [
                    { "number": 201, "category": "Twin", "price": "80.00" },
                    { "number": 201, "category": "Twin", "price": "90.00" }
                ],
                "payment_methods": {}
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_price_rejected() {
        let result = seed(
            r#"{
                "rooms": [{ "number": 201, "category": "Twin", "price": "eighty" }],
                "payment_methods": {}
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_rooms_rejected() {
        let result = seed(r#"{ "rooms": [], "payment_methods": { "Cash": "0" } }"#);
        assert!(result.is_err());
    }
}
