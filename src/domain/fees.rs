use std::collections::HashMap;

use super::Cents;

/// Flat fee per payment method, added on top of the booking total at
/// payment time. Seeded once at startup and read-only afterwards.
/// Method names are matched case-sensitively.
#[derive(Debug, Clone, Default)]
pub struct FeeTable {
    fees: HashMap<String, Cents>,
}

impl FeeTable {
    pub fn new(fees: HashMap<String, Cents>) -> Self {
        Self { fees }
    }

    /// The original desk's fee schedule: Cash free, Credit Card 2.50,
    /// Debit Card 1.50.
    pub fn standard() -> Self {
        let mut fees = HashMap::new();
        fees.insert("Cash".to_string(), 0);
        fees.insert("Credit Card".to_string(), 250);
        fees.insert("Debit Card".to_string(), 150);
        Self { fees }
    }

    pub fn fee_for(&self, method: &str) -> Option<Cents> {
        self.fees.get(method).copied()
    }

    pub fn len(&self) -> usize {
        self.fees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fees.is_empty()
    }
}
