use serde::{Deserialize, Serialize};

use stagebill_core::{PlayId, ValueObject};

/// A single invoice line item: which play was performed, for how many seats.
///
/// The play reference is not validated at construction time; it is resolved
/// against the catalog during statement aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    pub play_id: PlayId,
    /// Seat count (non-negative by construction).
    pub audience: u32,
}

impl Performance {
    pub fn new(play_id: impl Into<PlayId>, audience: u32) -> Self {
        Self {
            play_id: play_id.into(),
            audience,
        }
    }
}

impl ValueObject for Performance {}

/// A customer's invoice: display name plus an ordered list of performances.
///
/// Insertion order is significant — it drives the line order of the rendered
/// statement and which failure is reported first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub customer: String,
    pub performances: Vec<Performance>,
}

impl Invoice {
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> Self {
        Self {
            customer: customer.into(),
            performances,
        }
    }
}

impl ValueObject for Invoice {}
