use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ngo {
    pub name: String,      // ⇔ ngos.json "name"
    pub cause: String,     // ⇔ ngos.json "cause" (free-text category)
    pub donations: f64,    // ⇔ ngos.json "donations" (running total)
}

impl Ngo {
    /// New NGO with a zero donation total. The total is only ever increased
    /// by a successful donation.
    pub fn new(name: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cause: cause.into(),
            donations: 0.0,
        }
    }
}
