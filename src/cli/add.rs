//! Add-expense flow

use crate::cli::prompt;
use crate::error::ExpenseResult;
use crate::models::Expense;
use crate::storage::ExpenseStore;

/// Prompt for a new expense and append it to the ledger
pub fn run(store: &ExpenseStore) -> ExpenseResult<()> {
    let date = prompt::prompt_date_or_today()?;
    let category = prompt::prompt("Enter the category (e.g., Food, Transport, Bills): ")?;
    let description = prompt::prompt("Enter a brief description: ")?;
    let amount = prompt::prompt_amount("Enter the amount: ")?;

    store.append(&Expense::new(date, category, description, amount))?;

    println!();
    println!("Expense added successfully!");
    Ok(())
}
