//! Interactive menu controller
//!
//! Drives the numbered menu loop: read a choice, dispatch to a flow, return
//! to the menu. Flow errors (a non-numeric stored amount aborting a total,
//! a storage failure) are reported and the menu is re-entered; nothing here
//! terminates the process except an explicit exit or stdin closing.

mod add;
mod edit;
mod filter;
mod prompt;
mod summary;
mod view;

use log::debug;

use crate::error::ExpenseResult;
use crate::storage::ExpenseStore;

/// Run the interactive menu loop until the user exits
pub fn run(store: &ExpenseStore) -> ExpenseResult<()> {
    loop {
        println!();
        println!("======= Personal Expense Tracker =======");
        println!("1. Add a new expense");
        println!("2. View all expenses");
        println!("3. Edit an expense");
        println!("4. Filter expenses");
        println!("5. View expense summary (by month/year)");
        println!("6. Exit");

        let choice = match prompt::prompt("Enter your choice (1-6): ") {
            Ok(choice) => choice,
            // stdin closed; nothing left to read
            Err(_) => break,
        };

        let result = match choice.as_str() {
            "1" => add::run(store),
            "2" => view::run(store).map(|_| ()),
            "3" => edit::run(store),
            "4" => filter::run(store),
            "5" => summary::run(store),
            "6" => {
                println!("Exiting the application. Goodbye!");
                break;
            }
            _ => {
                println!("Invalid choice. Please try again.");
                Ok(())
            }
        };

        if let Err(err) = result {
            debug!("flow failed: {}", err);
            println!("Error: {}", err);
        }
    }

    Ok(())
}
