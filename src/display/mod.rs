//! Terminal table formatting
//!
//! Renders expense lists and summaries as fixed-width aligned text. All
//! functions return strings so they can be tested without capturing stdout;
//! the interactive flows print them.
//!
//! Column layout: Date(12) | Category(15) | Description(30) | Amount(10,
//! right-aligned), with an optional leading No.(5) column when listing for
//! edit selection.

use crate::error::ExpenseResult;
use crate::models::Expense;
use crate::query::{self, Summary};
use crate::storage::HEADERS;

const DATE_WIDTH: usize = 12;
const CATEGORY_WIDTH: usize = 15;
const DESCRIPTION_WIDTH: usize = 30;
const AMOUNT_WIDTH: usize = 10;
const INDEX_WIDTH: usize = 5;
const RULE_WIDTH: usize = 80;

/// Render expenses as an aligned table with a trailing total row
///
/// With `show_index`, rows carry a 1-based number column for edit selection.
/// Fails if any amount field is non-numeric; the caller surfaces that as an
/// operation error.
pub fn render_table(
    expenses: &[Expense],
    show_index: bool,
    total_label: &str,
) -> ExpenseResult<String> {
    let total = query::sum_amounts(expenses)?;

    let mut output = String::new();

    if show_index {
        output.push_str(&format!("{:<INDEX_WIDTH$} | ", "No."));
    }
    output.push_str(&format!(
        "{:<DATE_WIDTH$} | {:<CATEGORY_WIDTH$} | {:<DESCRIPTION_WIDTH$} | {:>AMOUNT_WIDTH$}\n",
        HEADERS[0], HEADERS[1], HEADERS[2], HEADERS[3]
    ));
    output.push_str(&"-".repeat(RULE_WIDTH));
    output.push('\n');

    for (i, expense) in expenses.iter().enumerate() {
        if show_index {
            output.push_str(&format!("{:<INDEX_WIDTH$} | ", i + 1));
        }
        output.push_str(&format!(
            "{:<DATE_WIDTH$} | {:<CATEGORY_WIDTH$} | {:<DESCRIPTION_WIDTH$} | {:>AMOUNT_WIDTH$}\n",
            expense.date,
            truncate(&expense.category, CATEGORY_WIDTH),
            truncate(&expense.description, DESCRIPTION_WIDTH),
            expense.amount
        ));
    }

    output.push_str(&"-".repeat(RULE_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<65} {:>AMOUNT_WIDTH$}\n",
        total_label,
        total.to_string()
    ));

    Ok(output)
}

/// Render the year/month summary with subtotals and a grand total
///
/// Years ascend; months within a year run January through December.
pub fn render_summary(summary: &Summary) -> String {
    let mut output = String::new();

    for (year, months) in &summary.years {
        output.push_str(&format!("\n--- {} ---\n", year));
        for (month, amount) in months {
            output.push_str(&format!(
                "  {:<10}: {:>AMOUNT_WIDTH$}\n",
                month_name(*month),
                amount.to_string()
            ));
        }
        output.push_str(&"-".repeat(25));
        output.push('\n');
        output.push_str(&format!(
            "  {:<10}: {:>AMOUNT_WIDTH$}\n",
            "Year Total",
            summary.year_total(*year).to_string()
        ));
    }

    output.push('\n');
    output.push_str(&"=".repeat(25));
    output.push('\n');
    output.push_str(&format!(
        "{:<12}: {:>AMOUNT_WIDTH$}\n",
        "Grand Total",
        summary.grand_total().to_string()
    ));
    output.push_str(&"=".repeat(25));
    output.push('\n');

    output
}

/// Full English month name for a 1-based month number
fn month_name(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    month
        .checked_sub(1)
        .and_then(|i| NAMES.get(i as usize))
        .copied()
        .unwrap_or("Unknown")
}

/// Truncate a string to a maximum length with ellipsis
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
