//! Statement renderers.
//!
//! Formatting collaborators for the billing core: they consume
//! [`stagebill_statement::StatementData`] read-only and decide presentation
//! (templates, currency display). The core stays in integer cents; turning
//! cents into `"$1,730.00"` happens here and only here.

pub mod currency;
pub mod html;
pub mod plain;

pub use currency::usd;
pub use html::{html_statement, render_html};
pub use plain::{plain_statement, render_plain};
