use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    config::TrackerConfig,
    domain::{EntryDraft, EntryKind, ExpenseEntry, IncomeEntry, NewEntry},
    errors::ValidationError,
    ledger::{Ledger, LedgerSnapshot, LedgerSummary},
    storage::{EntryStore, KeyValueStore, SyncStatus},
};

use super::clock::{Clock, EntryStamper, SystemClock, DEFAULT_DATE_FORMAT};

/// Result of submitting a draft.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// The entry is in memory; `sync` tells whether the store has it too.
    Added {
        kind: EntryKind,
        id: String,
        sync: SyncStatus,
    },
    /// Nothing was created.
    Rejected(ValidationError),
}

impl AddOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, AddOutcome::Added { .. })
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            AddOutcome::Added { id, .. } => Some(id),
            AddOutcome::Rejected(_) => None,
        }
    }
}

/// Result of deleting an entry by id.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoveOutcome {
    /// Whether an in-memory entry with that id existed.
    pub removed: bool,
    pub sync: SyncStatus,
}

/// Session before its entries are loaded.
pub struct TrackerBuilder {
    store: Arc<dyn KeyValueStore>,
    clock: Box<dyn Clock>,
    date_format: String,
}

impl TrackerBuilder {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            clock: Box::new(SystemClock),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    pub fn clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    pub fn config(self, config: &TrackerConfig) -> Self {
        self.date_format(config.date_format.clone())
    }

    /// Loads both collections and returns the ready session.
    pub async fn initialize(self) -> ExpenseTracker {
        let entries = EntryStore::new(self.store);
        let (expenses, income) = tokio::join!(
            entries.load_collection::<ExpenseEntry>(),
            entries.load_collection::<IncomeEntry>(),
        );
        let ledger = Ledger::from_loaded(expenses, income);

        let mut stamper = EntryStamper::new(self.clock, self.date_format);
        if let Some(latest) = ledger.latest_timestamp() {
            stamper.observe(latest);
        }

        info!(
            expenses = ledger.len(EntryKind::Expense),
            income = ledger.len(EntryKind::Income),
            "expense tracker ready"
        );
        ExpenseTracker {
            entries,
            ledger,
            stamper,
        }
    }
}

/// A ready session: the in-memory ledger plus its best-effort store mirror.
///
/// Memory is authoritative. Store failures are logged and reported through
/// [`SyncStatus`] but never prevent a mutation.
pub struct ExpenseTracker {
    entries: EntryStore,
    ledger: Ledger,
    stamper: EntryStamper,
}

impl ExpenseTracker {
    pub fn builder(store: Arc<dyn KeyValueStore>) -> TrackerBuilder {
        TrackerBuilder::new(store)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn expenses(&self) -> &[ExpenseEntry] {
        self.ledger.expenses()
    }

    pub fn income(&self) -> &[IncomeEntry] {
        self.ledger.income()
    }

    pub fn summary(&self) -> LedgerSummary {
        self.ledger.summary()
    }

    pub fn snapshot(&self) -> LedgerSnapshot<'_> {
        self.ledger.snapshot()
    }

    pub async fn add_entry(&mut self, draft: &EntryDraft) -> AddOutcome {
        let valid = match draft.validate() {
            Ok(valid) => valid,
            Err(reason) => {
                debug!(%reason, "draft rejected");
                return AddOutcome::Rejected(reason);
            }
        };

        let entry = valid.into_entry(self.stamper.next_stamp());
        let sync = match &entry {
            NewEntry::Expense(expense) => self.entries.persist_entry(expense).await,
            NewEntry::Income(income) => self.entries.persist_entry(income).await,
        };
        let kind = entry.kind();
        let id = entry.base().id.clone();
        self.ledger.insert(entry);

        debug!(%kind, %id, mirrored = sync.is_mirrored(), "entry added");
        AddOutcome::Added { kind, id, sync }
    }

    pub async fn remove_entry(&mut self, kind: EntryKind, id: &str) -> RemoveOutcome {
        let sync = self.entries.remove_entry(kind, id).await;
        let removed = self.ledger.remove(kind, id);

        debug!(%kind, %id, removed, mirrored = sync.is_mirrored(), "entry removed");
        RemoveOutcome { removed, sync }
    }
}
