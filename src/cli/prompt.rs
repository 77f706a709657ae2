//! Interactive prompt helpers
//!
//! Every piece of user input flows through [`prompt`]: print a label, flush,
//! read one stdin line, trim. The typed wrappers encode the validation
//! policies of the flows: amounts reject-and-retry, dates warn-and-default,
//! blank keeps the current value when editing.

use std::io::{self, Write};
use std::str::FromStr;

use chrono::{Local, NaiveDate};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Amount, DATE_FORMAT};

/// Prompt for a line of input
///
/// Fails when stdin is closed, which the menu loop treats as an exit.
pub fn prompt(label: &str) -> ExpenseResult<String> {
    print!("{}", label);
    io::stdout()
        .flush()
        .map_err(|e| ExpenseError::Io(e.to_string()))?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| ExpenseError::Io(e.to_string()))?;
    if bytes == 0 {
        return Err(ExpenseError::Io("unexpected end of input".into()));
    }

    Ok(input.trim().to_string())
}

/// Prompt for a date, defaulting to today
///
/// Blank input means today; invalid input warns and falls back to today
/// rather than re-prompting.
pub fn prompt_date_or_today() -> ExpenseResult<NaiveDate> {
    let today = Local::now().date_naive();
    let input = prompt(&format!(
        "Enter the date (YYYY-MM-DD), or press Enter for today ({}): ",
        today.format(DATE_FORMAT)
    ))?;

    if input.is_empty() {
        return Ok(today);
    }
    match NaiveDate::parse_from_str(&input, DATE_FORMAT) {
        Ok(date) => Ok(date),
        Err(_) => {
            println!("Invalid date format. Using today's date.");
            Ok(today)
        }
    }
}

/// Prompt for an amount, re-prompting until a valid decimal is entered
pub fn prompt_amount(label: &str) -> ExpenseResult<Amount> {
    loop {
        let input = prompt(label)?;
        match Amount::parse(&input) {
            Ok(amount) => return Ok(amount),
            Err(_) => println!("Invalid input. Please enter a numeric value for the amount."),
        }
    }
}

/// Prompt showing the current value as the default; blank keeps it
pub fn prompt_with_default(label: &str, current: &str) -> ExpenseResult<String> {
    let input = prompt(&format!("{} ({}): ", label, current))?;
    Ok(if input.is_empty() {
        current.to_string()
    } else {
        input
    })
}

/// Edit a date field: blank keeps the current value, invalid input warns
/// and keeps it
pub fn prompt_edit_date(current: &str) -> ExpenseResult<String> {
    let input = prompt(&format!("Date ({}): ", current))?;
    if input.is_empty() {
        return Ok(current.to_string());
    }
    match NaiveDate::parse_from_str(&input, DATE_FORMAT) {
        Ok(_) => Ok(input),
        Err(_) => {
            println!("Invalid date format. Keeping original date.");
            Ok(current.to_string())
        }
    }
}

/// Edit an amount field: blank keeps the current value, invalid input
/// re-prompts
pub fn prompt_edit_amount(current: &str) -> ExpenseResult<String> {
    loop {
        let input = prompt(&format!("Amount ({}): ", current))?;
        if input.is_empty() {
            return Ok(current.to_string());
        }
        match Amount::parse(&input) {
            Ok(amount) => return Ok(amount.to_string()),
            Err(_) => println!("Invalid amount. Please enter a numeric value."),
        }
    }
}

/// Prompt for an optional numeric criterion
///
/// Blank is a wildcard; non-numeric input warns and falls back to the
/// wildcard.
pub fn prompt_optional_number<T: FromStr>(
    label: &str,
    warning: &str,
) -> ExpenseResult<Option<T>> {
    let input = prompt(label)?;
    if input.is_empty() {
        return Ok(None);
    }
    match input.parse::<T>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            println!("{}", warning);
            Ok(None)
        }
    }
}
