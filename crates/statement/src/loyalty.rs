//! Loyalty engine: the volume-credit policy.

use stagebill_catalog::Genre;

/// Compute the volume credits earned by one performance.
///
/// Total over all genre strings: every genre earns the base credit of one
/// per seat above thirty, and only an exact `"comedy"` match adds the
/// per-five-seats bonus. Unrecognized genres are rejected by pricing before
/// this is reached during aggregation, so the leniency here is never
/// observable on invalid input.
pub fn volume_credit(audience: u32, genre: &str) -> u64 {
    let base = u64::from(audience.saturating_sub(30));
    match genre.parse::<Genre>() {
        Ok(Genre::Comedy) => base + u64::from(audience / 5),
        _ => base,
    }
}
