//! Fixed two-decimal dollar formatting for totals, list rows and chart labels.

use crate::domain::EntryKind;

const SYMBOL: &str = "$";

/// `$4.50`, or `-$400.00` for a negative balance.
pub fn format_amount(amount: f64) -> String {
    if amount < 0.0 {
        format!("-{SYMBOL}{:.2}", -amount)
    } else {
        format!("{SYMBOL}{:.2}", amount)
    }
}

/// List-row amount with the sign implied by the collection: `+$2000.00` / `-$4.50`.
pub fn format_signed(kind: EntryKind, amount: f64) -> String {
    let sign = match kind {
        EntryKind::Income => '+',
        EntryKind::Expense => '-',
    };
    format!("{sign}{SYMBOL}{:.2}", amount.abs())
}

/// Whole-dollar label used under the comparison bars: `$2000`.
pub fn format_whole(amount: f64) -> String {
    format!("{SYMBOL}{:.0}", amount)
}

/// Category share label: `66.7% of total`.
pub fn format_share(percentage: f64) -> String {
    format!("{:.1}% of total", percentage)
}
