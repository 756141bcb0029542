//! Statement aggregation: invoice + catalog → statement data.

use serde::{Deserialize, Serialize};

use stagebill_catalog::{Catalog, Play};
use stagebill_core::{PlayId, StatementResult, ValueObject};

use crate::invoice::{Invoice, Performance};
use crate::loyalty::volume_credit;
use crate::pricing::price_cents;

/// A performance enriched with its resolved play and computed figures.
///
/// Ephemeral: built fresh per statement computation, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedPerformance {
    pub play_id: PlayId,
    pub audience: u32,
    pub play: Play,
    pub amount_cents: u64,
    pub volume_credits: u64,
}

impl ValueObject for EnrichedPerformance {}

/// The computed statement — the sole output contract of the billing core.
///
/// Renderers consume this read-only. The totals are always recomputed from
/// the enriched sequence, never stored independently of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementData {
    pub customer: String,
    pub performances: Vec<EnrichedPerformance>,
    pub total_amount_cents: u64,
    pub total_volume_credits: u64,
}

impl ValueObject for StatementData {}

/// Aggregate an invoice against a catalog into statement data.
///
/// Single synchronous pass in invoice order: each performance is resolved,
/// priced and credited; the first performance that cannot be resolved or
/// priced aborts the whole call with its error. No partial statement is ever
/// produced, and repeated calls over the same inputs yield identical data.
pub fn statement_data(invoice: &Invoice, catalog: &Catalog) -> StatementResult<StatementData> {
    tracing::debug!(
        customer = %invoice.customer,
        performances = invoice.performances.len(),
        "aggregating statement"
    );

    let mut performances = Vec::with_capacity(invoice.performances.len());
    for performance in &invoice.performances {
        performances.push(enrich(performance, catalog)?);
    }

    let total_amount_cents = performances.iter().map(|p| p.amount_cents).sum();
    let total_volume_credits = performances.iter().map(|p| p.volume_credits).sum();

    Ok(StatementData {
        customer: invoice.customer.clone(),
        performances,
        total_amount_cents,
        total_volume_credits,
    })
}

fn enrich(performance: &Performance, catalog: &Catalog) -> StatementResult<EnrichedPerformance> {
    let play = catalog.resolve(&performance.play_id)?;
    // Pricing validates the genre, so an invalid play fails before any
    // loyalty credit is computed for it.
    let amount_cents = price_cents(performance.audience, play.genre()?);
    let volume_credits = volume_credit(performance.audience, &play.genre);
    Ok(EnrichedPerformance {
        play_id: performance.play_id.clone(),
        audience: performance.audience,
        play: play.clone(),
        amount_cents,
        volume_credits,
    })
}
