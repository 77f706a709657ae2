//! Edit-expense flow

use super::view;
use crate::cli::prompt;
use crate::error::ExpenseResult;
use crate::storage::ExpenseStore;

/// Select an expense by number and rewrite its fields in place
///
/// Non-numeric or out-of-range selection aborts the whole edit without
/// touching the ledger. Field prompts keep the old value on blank input;
/// the date warns and keeps the original on a bad value, the amount
/// re-prompts until valid.
pub fn run(store: &ExpenseStore) -> ExpenseResult<()> {
    let mut expenses = store.read_all()?;
    if !view::list(store, true)? {
        return Ok(());
    }

    println!();
    let input = prompt::prompt("Enter the number of the expense to edit: ")?;
    let choice: usize = match input.parse() {
        Ok(n) => n,
        Err(_) => {
            println!("Invalid input. Please enter a number.");
            return Ok(());
        }
    };
    if choice < 1 || choice > expenses.len() {
        println!("Invalid number. Please try again.");
        return Ok(());
    }
    let expense = &mut expenses[choice - 1];

    println!();
    println!("Editing expense. Press Enter to keep the current value.");

    expense.date = prompt::prompt_edit_date(&expense.date)?;
    expense.category = prompt::prompt_with_default("Category", &expense.category)?;
    expense.description = prompt::prompt_with_default("Description", &expense.description)?;
    expense.amount = prompt::prompt_edit_amount(&expense.amount)?;

    store.write_all(&expenses)?;

    println!();
    println!("Expense updated successfully!");
    Ok(())
}
