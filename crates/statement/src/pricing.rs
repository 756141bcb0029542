//! Pricing engine: the per-performance amount policy, in integer cents.

use stagebill_catalog::Genre;

/// Compute the amount owed for one performance, in integer cents.
///
/// One arm per recognized genre, exhaustively matched: adding a [`Genre`]
/// variant will not compile until it gets a pricing rule here. Integer-cents
/// arithmetic throughout, so totals are exact.
pub fn price_cents(audience: u32, genre: Genre) -> u64 {
    let audience = u64::from(audience);
    match genre {
        Genre::Tragedy => {
            let mut amount = 40_000;
            if audience > 30 {
                amount += 1_000 * (audience - 30);
            }
            amount
        }
        Genre::Comedy => {
            let mut amount = 30_000;
            if audience > 20 {
                amount += 10_000 + 500 * (audience - 20);
            }
            // Per-seat component applies at every audience size.
            amount + 300 * audience
        }
    }
}
