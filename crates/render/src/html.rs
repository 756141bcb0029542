//! HTML statement rendering.

use stagebill_catalog::Catalog;
use stagebill_core::StatementResult;
use stagebill_statement::{statement_data, Invoice, StatementData};

use crate::currency::usd;

/// Render statement data as an HTML statement.
///
/// Same content as the plain renderer, laid out as a table with the totals
/// in trailing paragraphs.
pub fn render_html(data: &StatementData) -> String {
    let mut out = format!("<h1>Statement for {}</h1>\n", data.customer);
    out.push_str("<table>\n");
    out.push_str("<tr><th>play</th><th>seats</th><th>cost</th></tr>\n");
    for perf in &data.performances {
        out.push_str(&format!(
            " <tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            perf.play.name,
            perf.audience,
            usd(perf.amount_cents),
        ));
    }
    out.push_str("</table>\n");
    out.push_str(&format!(
        "<p>Amount owed is <em>{}</em></p>\n",
        usd(data.total_amount_cents),
    ));
    out.push_str(&format!(
        "<p>You earned <em>{}</em> credits</p>\n",
        data.total_volume_credits,
    ));
    out
}

/// Aggregate an invoice and render it as HTML in one call.
pub fn html_statement(invoice: &Invoice, catalog: &Catalog) -> StatementResult<String> {
    Ok(render_html(&statement_data(invoice, catalog)?))
}
