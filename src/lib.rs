#![doc(test(attr(deny(warnings))))]

//! Expense Tracker keeps income and expense entries in memory, mirrors them into an
//! asynchronous key-value store on a best-effort basis, and derives totals, balance
//! and per-category breakdowns for a rendering layer.

pub mod config;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod session;
pub mod storage;
pub mod utils;

use std::{path::Path, sync::Arc};

pub use config::TrackerConfig;
pub use domain::{EntryDraft, EntryKind, ExpenseCategory, ExpenseEntry, IncomeEntry};
pub use ledger::{Ledger, LedgerSummary};
pub use session::{AddOutcome, EntryForm, ExpenseTracker, RemoveOutcome, TrackerBuilder};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore, SyncStatus};

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    utils::init_tracing();
    tracing::info!("Expense Tracker tracing initialized.");
}

/// Initializes tracing with the configured filter.
pub fn init_with_filter(filter: &str) {
    utils::init_tracing_with(filter);
}

/// Opens a session over the JSON file store described by `config`.
pub async fn open(config: &TrackerConfig) -> ExpenseTracker {
    let store: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::new(config.store_path()));
    ExpenseTracker::builder(store).config(config).initialize().await
}

/// Opens a session over a JSON store file at `path` with default settings.
pub async fn open_at(path: &Path) -> ExpenseTracker {
    let config = TrackerConfig {
        data_dir: path.parent().map(Path::to_path_buf),
        store_file: path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(TrackerConfig::default_store_file),
        ..TrackerConfig::default()
    };
    open(&config).await
}
