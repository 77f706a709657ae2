//! Filter-expenses flow

use crate::cli::prompt;
use crate::display;
use crate::error::ExpenseResult;
use crate::query::{self, ExpenseFilter};
use crate::storage::ExpenseStore;

/// Prompt for optional criteria and list the matching expenses
///
/// Blank criteria are wildcards. "No matches" is reported distinctly from
/// "no records at all".
pub fn run(store: &ExpenseStore) -> ExpenseResult<()> {
    let expenses = store.read_all()?;

    if expenses.is_empty() {
        println!();
        println!("No expenses recorded yet. Start by adding one!");
        return Ok(());
    }

    let categories = query::distinct_categories(&expenses);
    println!();
    println!("Available categories: {}", categories.join(", "));

    let category = prompt::prompt("Enter category to filter by (or press Enter for all): ")?;
    let criteria = ExpenseFilter {
        category: if category.is_empty() {
            None
        } else {
            Some(category)
        },
        year: prompt::prompt_optional_number(
            "Enter year to filter by (e.g., 2023) (or press Enter for all): ",
            "Invalid year. Showing all years.",
        )?,
        month: prompt::prompt_optional_number(
            "Enter month to filter by (1-12) (or press Enter for all): ",
            "Invalid month. Showing all months.",
        )?,
    };

    let matches = query::filter(&expenses, &criteria);
    if matches.is_empty() {
        println!();
        println!("No expenses found matching your criteria.");
        return Ok(());
    }

    println!();
    println!("--- Filtered Expenses ---");
    print!(
        "{}",
        display::render_table(&matches, false, "Filtered Total:")?
    );
    Ok(())
}
