pub mod category;
pub mod common;
pub mod entry;

pub use category::ExpenseCategory;
pub use common::{Amounted, Displayable, Identifiable, Timestamped};
pub use entry::{
    DraftKind, EntryBase, EntryDraft, EntryKind, EntryStamp, ExpenseEntry, IncomeEntry,
    NewEntry, StoredEntry, ValidDraft,
};
