use serde::Serialize;

use crate::domain::{EntryKind, ExpenseEntry, IncomeEntry, NewEntry, StoredEntry, Timestamped};

use super::summary::LedgerSummary;

/// In-memory income and expense collections, each kept newest-first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Ledger {
    expenses: Vec<ExpenseEntry>,
    income: Vec<IncomeEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger from loaded records, dropping duplicate ids and sorting.
    pub fn from_loaded(expenses: Vec<ExpenseEntry>, income: Vec<IncomeEntry>) -> Self {
        Self {
            expenses: normalize(expenses),
            income: normalize(income),
        }
    }

    pub fn expenses(&self) -> &[ExpenseEntry] {
        &self.expenses
    }

    pub fn income(&self) -> &[IncomeEntry] {
        &self.income
    }

    pub fn len(&self, kind: EntryKind) -> usize {
        match kind {
            EntryKind::Expense => self.expenses.len(),
            EntryKind::Income => self.income.len(),
        }
    }

    pub fn has_transactions(&self) -> bool {
        !self.expenses.is_empty() || !self.income.is_empty()
    }

    /// Newest timestamp across both collections.
    pub fn latest_timestamp(&self) -> Option<i64> {
        let expense = self.expenses.first().map(Timestamped::timestamp);
        let income = self.income.first().map(Timestamped::timestamp);
        expense.max(income)
    }

    pub fn insert(&mut self, entry: NewEntry) {
        match entry {
            NewEntry::Expense(expense) => insert_sorted(&mut self.expenses, expense),
            NewEntry::Income(income) => insert_sorted(&mut self.income, income),
        }
    }

    /// Drops the entry with `id`; returns whether one was present.
    pub fn remove(&mut self, kind: EntryKind, id: &str) -> bool {
        match kind {
            EntryKind::Expense => remove_by_id(&mut self.expenses, id),
            EntryKind::Income => remove_by_id(&mut self.income, id),
        }
    }

    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary::derive(&self.expenses, &self.income)
    }

    /// Current collections plus derived aggregates, for the rendering layer.
    pub fn snapshot(&self) -> LedgerSnapshot<'_> {
        LedgerSnapshot {
            expenses: &self.expenses,
            income: &self.income,
            summary: self.summary(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LedgerSnapshot<'a> {
    pub expenses: &'a [ExpenseEntry],
    pub income: &'a [IncomeEntry],
    pub summary: LedgerSummary,
}

fn normalize<E: StoredEntry>(mut entries: Vec<E>) -> Vec<E> {
    entries.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
    let mut seen = std::collections::HashSet::new();
    entries.retain(|entry| seen.insert(entry.id().to_string()));
    entries
}

/// Places `entry` ahead of every entry that is not newer than it.
fn insert_sorted<E: StoredEntry>(entries: &mut Vec<E>, entry: E) {
    entries.retain(|existing| existing.id() != entry.id());
    let position = entries.partition_point(|existing| existing.timestamp() > entry.timestamp());
    entries.insert(position, entry);
}

fn remove_by_id<E: StoredEntry>(entries: &mut Vec<E>, id: &str) -> bool {
    let before = entries.len();
    entries.retain(|entry| entry.id() != id);
    entries.len() != before
}
