//! Income and expense records plus the drafts they are created from.

use std::fmt;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::errors::ValidationError;

use super::{
    category::ExpenseCategory,
    common::{Amounted, Displayable, Identifiable, Timestamped},
};

/// Which collection (and storage namespace) an entry belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Expense,
    Income,
}

impl EntryKind {
    pub fn namespace(self) -> &'static str {
        match self {
            EntryKind::Expense => "expense",
            EntryKind::Income => "income",
        }
    }

    /// Key prefix shared by every record of this kind, e.g. `expense:`.
    pub fn prefix(self) -> String {
        format!("{}:", self.namespace())
    }

    pub fn storage_key(self, id: &str) -> String {
        format!("{}:{}", self.namespace(), id)
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.namespace())
    }
}

/// Fields shared by both entry variants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntryBase {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub timestamp: i64,
    /// Display date captured at creation; never recomputed from `timestamp`.
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseEntry {
    #[serde(flatten)]
    pub base: EntryBase,
    pub category: ExpenseCategory,
}

/// Income carries no category. A `category` field on older records is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncomeEntry {
    #[serde(flatten)]
    pub base: EntryBase,
}

/// Record types that live under a storage namespace.
pub trait StoredEntry:
    Serialize + DeserializeOwned + Identifiable + Amounted + Timestamped + Send + 'static
{
    const KIND: EntryKind;
}

impl StoredEntry for ExpenseEntry {
    const KIND: EntryKind = EntryKind::Expense;
}

impl StoredEntry for IncomeEntry {
    const KIND: EntryKind = EntryKind::Income;
}

macro_rules! impl_entry_accessors {
    ($ty:ty) => {
        impl Identifiable for $ty {
            fn id(&self) -> &str {
                &self.base.id
            }
        }

        impl Amounted for $ty {
            fn amount(&self) -> f64 {
                self.base.amount
            }
        }

        impl Timestamped for $ty {
            fn timestamp(&self) -> i64 {
                self.base.timestamp
            }
        }
    };
}

impl_entry_accessors!(ExpenseEntry);
impl_entry_accessors!(IncomeEntry);

impl Displayable for ExpenseEntry {
    fn display_label(&self) -> String {
        format!("{} · {}", self.category, self.base.date)
    }
}

impl Displayable for IncomeEntry {
    fn display_label(&self) -> String {
        self.base.date.clone()
    }
}

/// Identity and time fields issued for a new entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryStamp {
    pub id: String,
    pub timestamp: i64,
    pub date: String,
}

/// Kind-specific part of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftKind {
    Expense(ExpenseCategory),
    Income,
}

impl DraftKind {
    pub fn entry_kind(self) -> EntryKind {
        match self {
            DraftKind::Expense(_) => EntryKind::Expense,
            DraftKind::Income => EntryKind::Income,
        }
    }
}

/// Raw user input for a new entry, as typed into the form.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    pub kind: DraftKind,
    pub description: String,
    pub amount: String,
}

impl EntryDraft {
    pub fn expense(
        description: impl Into<String>,
        amount: impl Into<String>,
        category: ExpenseCategory,
    ) -> Self {
        Self {
            kind: DraftKind::Expense(category),
            description: description.into(),
            amount: amount.into(),
        }
    }

    pub fn income(description: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            kind: DraftKind::Income,
            description: description.into(),
            amount: amount.into(),
        }
    }

    /// Checks the draft and returns its normalized description and amount.
    pub fn validate(&self) -> Result<ValidDraft, ValidationError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        let amount = parse_amount(&self.amount)?;
        Ok(ValidDraft {
            kind: self.kind,
            description: description.to_string(),
            amount,
        })
    }
}

/// A draft that passed validation and only lacks its stamp.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    pub kind: DraftKind,
    pub description: String,
    pub amount: f64,
}

impl ValidDraft {
    pub fn into_entry(self, stamp: EntryStamp) -> NewEntry {
        let base = EntryBase {
            id: stamp.id,
            description: self.description,
            amount: self.amount,
            timestamp: stamp.timestamp,
            date: stamp.date,
        };
        match self.kind {
            DraftKind::Expense(category) => NewEntry::Expense(ExpenseEntry { base, category }),
            DraftKind::Income => NewEntry::Income(IncomeEntry { base }),
        }
    }
}

/// A freshly created entry of either kind.
#[derive(Debug, Clone, PartialEq)]
pub enum NewEntry {
    Expense(ExpenseEntry),
    Income(IncomeEntry),
}

impl NewEntry {
    pub fn kind(&self) -> EntryKind {
        match self {
            NewEntry::Expense(_) => EntryKind::Expense,
            NewEntry::Income(_) => EntryKind::Income,
        }
    }

    pub fn base(&self) -> &EntryBase {
        match self {
            NewEntry::Expense(entry) => &entry.base,
            NewEntry::Income(entry) => &entry.base,
        }
    }
}

/// Parses user-typed amount text into a strictly positive, finite value.
pub fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ValidationError::UnparsableAmount(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(ValidationError::UnparsableAmount(trimmed.to_string()));
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositiveAmount(value));
    }
    Ok(value)
}
