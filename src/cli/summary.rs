//! Summary flow

use crate::display;
use crate::error::ExpenseResult;
use crate::query;
use crate::storage::ExpenseStore;

/// Render the year/month summary with subtotals and a grand total
///
/// Malformed rows get a skip notice each and are left out of the totals.
pub fn run(store: &ExpenseStore) -> ExpenseResult<()> {
    let expenses = store.read_all()?;

    if expenses.is_empty() {
        println!();
        println!("No expenses to summarize.");
        return Ok(());
    }

    let summary = query::summarize(&expenses);
    for row in &summary.skipped {
        println!(
            "Skipping malformed row: {},{},{},{}",
            row.date, row.category, row.description, row.amount
        );
    }

    println!();
    println!("--- Expense Summary ---");
    print!("{}", display::render_summary(&summary));
    Ok(())
}
