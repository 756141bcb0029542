//! Statement domain module.
//!
//! This crate contains the billing rules for theatrical invoices,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage): per-performance pricing, volume-credit loyalty scoring, and the
//! single-pass aggregation that turns an invoice plus a play catalog into
//! statement data for renderers.

pub mod invoice;
pub mod loyalty;
pub mod pricing;
pub mod statement;

pub use invoice::{Invoice, Performance};
pub use loyalty::volume_credit;
pub use pricing::price_cents;
pub use statement::{statement_data, EnrichedPerformance, StatementData};
