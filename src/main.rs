use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use expense_cli::cli;
use expense_cli::storage::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Menu-driven personal expense tracker backed by a CSV ledger",
    long_about = "expense-cli keeps your expenses in a plain CSV file and \
                  drives everything through an interactive numbered menu: \
                  add, view, edit, filter, and summarize."
)]
struct Cli {
    /// Path to the ledger file
    #[arg(short, long, env = "EXPENSES_FILE", default_value = "expenses.csv")]
    file: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let store = ExpenseStore::new(cli.file);
    store.ensure_initialized()?;
    cli::run(&store)?;

    Ok(())
}
