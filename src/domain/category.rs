//! The fixed set of expense categories.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Classifies an expense for the per-category breakdown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum ExpenseCategory {
    #[default]
    Food,
    Transport,
    Entertainment,
    Shopping,
    Bills,
    Health,
    Other,
}

impl ExpenseCategory {
    /// All categories in the order the entry form offers them.
    pub const ALL: [ExpenseCategory; 7] = [
        ExpenseCategory::Food,
        ExpenseCategory::Transport,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Shopping,
        ExpenseCategory::Bills,
        ExpenseCategory::Health,
        ExpenseCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Bills => "Bills",
            ExpenseCategory::Health => "Health",
            ExpenseCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        ExpenseCategory::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("unknown category `{needle}`"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!("bills".parse::<ExpenseCategory>(), Ok(ExpenseCategory::Bills));
        assert_eq!(" Health ".parse::<ExpenseCategory>(), Ok(ExpenseCategory::Health));
        assert!("Rent".parse::<ExpenseCategory>().is_err());
    }

    #[test]
    fn serializes_as_plain_label() {
        let json = serde_json::to_string(&ExpenseCategory::Entertainment).unwrap();
        assert_eq!(json, "\"Entertainment\"");
    }

    #[test]
    fn form_default_is_food() {
        assert_eq!(ExpenseCategory::default(), ExpenseCategory::Food);
        assert_eq!(ExpenseCategory::ALL.len(), 7);
    }
}
