use serde::Serialize;

use crate::domain::{Amounted, ExpenseCategory, ExpenseEntry, IncomeEntry};

/// Aggregates derived from the current collections. Recomputed on every read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerSummary {
    pub total_expenses: f64,
    pub total_income: f64,
    pub balance: f64,
    /// Per-category expense sums in first-seen order (newest expense first).
    pub category_totals: Vec<CategoryTotal>,
    pub comparison: Comparison,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub total: f64,
}

/// One row of the category breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: ExpenseCategory,
    pub total: f64,
    pub percentage: f64,
}

/// Relative heights of the income and expense bars, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison {
    pub income_fraction: f64,
    pub expense_fraction: f64,
}

impl Comparison {
    pub fn between(total_income: f64, total_expenses: f64) -> Self {
        let tallest = total_income.max(total_expenses);
        if tallest <= 0.0 {
            return Self {
                income_fraction: 0.0,
                expense_fraction: 0.0,
            };
        }
        Self {
            income_fraction: (total_income / tallest).clamp(0.0, 1.0),
            expense_fraction: (total_expenses / tallest).clamp(0.0, 1.0),
        }
    }

    pub fn income_bar_percent(&self) -> f64 {
        self.income_fraction * 100.0
    }

    pub fn expense_bar_percent(&self) -> f64 {
        self.expense_fraction * 100.0
    }
}

impl LedgerSummary {
    pub fn derive(expenses: &[ExpenseEntry], income: &[IncomeEntry]) -> Self {
        let total_expenses = sum_amounts(expenses);
        let total_income = sum_amounts(income);

        let mut category_totals: Vec<CategoryTotal> = Vec::new();
        for expense in expenses {
            match category_totals
                .iter_mut()
                .find(|row| row.category == expense.category)
            {
                Some(row) => row.total += expense.amount(),
                None => category_totals.push(CategoryTotal {
                    category: expense.category,
                    total: expense.amount(),
                }),
            }
        }

        Self {
            total_expenses,
            total_income,
            balance: total_income - total_expenses,
            category_totals,
            comparison: Comparison::between(total_income, total_expenses),
        }
    }

    pub fn category_total(&self, category: ExpenseCategory) -> Option<f64> {
        self.category_totals
            .iter()
            .find(|row| row.category == category)
            .map(|row| row.total)
    }

    /// Share of total spending for `category`, or `None` when nothing was spent on it
    /// or total spending is not positive.
    pub fn category_percentage(&self, category: ExpenseCategory) -> Option<f64> {
        let total = self.category_total(category)?;
        self.percentage_of_expenses(total)
    }

    /// Category rows ordered by total, largest first. Ties keep first-seen order.
    pub fn breakdown(&self) -> Vec<CategoryShare> {
        let mut rows: Vec<CategoryShare> = self
            .category_totals
            .iter()
            .filter_map(|row| {
                self.percentage_of_expenses(row.total)
                    .map(|percentage| CategoryShare {
                        category: row.category,
                        total: row.total,
                        percentage,
                    })
            })
            .collect();
        rows.sort_by(|a, b| b.total.total_cmp(&a.total));
        rows
    }

    /// `None` unless total expenses are positive. Stored amounts are not
    /// re-validated on load, so zero or negative totals can reach this point.
    fn percentage_of_expenses(&self, amount: f64) -> Option<f64> {
        if self.total_expenses > 0.0 {
            Some(amount / self.total_expenses * 100.0)
        } else {
            None
        }
    }
}

fn sum_amounts<E: Amounted>(entries: &[E]) -> f64 {
    entries.iter().fold(0.0, |sum, entry| sum + entry.amount())
}
