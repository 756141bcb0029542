//! Plain-text statement rendering.

use stagebill_catalog::Catalog;
use stagebill_core::StatementResult;
use stagebill_statement::{statement_data, Invoice, StatementData};

use crate::currency::usd;

/// Render statement data as the plain-text statement.
///
/// One line per performance (play name, amount, seat count), then the total
/// amount owed and the credits earned.
pub fn render_plain(data: &StatementData) -> String {
    let mut out = format!("Statement for {}\n", data.customer);
    for perf in &data.performances {
        out.push_str(&format!(
            " {}: {} ({} seats)\n",
            perf.play.name,
            usd(perf.amount_cents),
            perf.audience,
        ));
    }
    out.push_str(&format!("Amount owed is {}\n", usd(data.total_amount_cents)));
    out.push_str(&format!("You earned {} credits\n", data.total_volume_credits));
    out
}

/// Aggregate an invoice and render it as plain text in one call.
pub fn plain_statement(invoice: &Invoice, catalog: &Catalog) -> StatementResult<String> {
    Ok(render_plain(&statement_data(invoice, catalog)?))
}
