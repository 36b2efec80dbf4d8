use chrono::Local;
use serde::{Deserialize, Serialize};

/// One donation transaction. Append-only: records are never edited or
/// deleted, and `ngo` is a copy of the NGO name at donation time, not a
/// live reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    pub ngo: String,
    pub donor: String,
    pub amount: f64,
    pub date: String, // "YYYY-MM-DD HH:MM:SS", local time
}

impl Donation {
    /// Build a record stamped with the current local time.
    pub fn new(ngo: String, donor: String, amount: f64) -> Self {
        Self {
            ngo,
            donor,
            amount,
            date: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}
