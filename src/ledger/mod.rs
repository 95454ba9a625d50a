//! In-memory entry collections and the aggregates derived from them.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod summary;

pub use ledger::{Ledger, LedgerSnapshot};
pub use summary::{CategoryShare, CategoryTotal, Comparison, LedgerSummary};
