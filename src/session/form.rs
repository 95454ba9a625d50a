use crate::domain::{EntryDraft, EntryKind, ExpenseCategory};

use super::tracker::{AddOutcome, ExpenseTracker};

/// Input state behind the entry form, owned by the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryForm {
    pub kind: EntryKind,
    pub description: String,
    pub amount: String,
    /// Applies to expenses only; kept while the form toggles to income.
    pub category: ExpenseCategory,
}

impl Default for EntryForm {
    fn default() -> Self {
        Self {
            kind: EntryKind::Expense,
            description: String::new(),
            amount: String::new(),
            category: ExpenseCategory::default(),
        }
    }
}

impl EntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> EntryDraft {
        match self.kind {
            EntryKind::Expense => {
                EntryDraft::expense(self.description.clone(), self.amount.clone(), self.category)
            }
            EntryKind::Income => EntryDraft::income(self.description.clone(), self.amount.clone()),
        }
    }

    pub fn clear_inputs(&mut self) {
        self.description.clear();
        self.amount.clear();
    }

    /// Submits the current inputs. Clears description and amount only on success.
    pub async fn submit(&mut self, tracker: &mut ExpenseTracker) -> AddOutcome {
        let outcome = tracker.add_entry(&self.draft()).await;
        if outcome.is_added() {
            self.clear_inputs();
        }
        outcome
    }
}
