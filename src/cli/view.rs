//! View-expenses flow

use crate::display;
use crate::error::ExpenseResult;
use crate::storage::ExpenseStore;

/// List every expense without row numbers
///
/// Returns whether any records exist; the edit flow reuses the indexed
/// listing and consumes that signal as its precondition.
pub fn run(store: &ExpenseStore) -> ExpenseResult<bool> {
    list(store, false)
}

/// List every expense, optionally with a 1-based row-number column
pub(super) fn list(store: &ExpenseStore, show_index: bool) -> ExpenseResult<bool> {
    let expenses = store.read_all()?;

    if expenses.is_empty() {
        println!();
        println!("No expenses recorded yet. Start by adding one!");
        return Ok(false);
    }

    println!();
    println!("--- All Expenses ---");
    print!("{}", display::render_table(&expenses, show_index, "Total:")?);
    Ok(true)
}
