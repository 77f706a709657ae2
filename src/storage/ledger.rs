//! CSV-backed expense ledger
//!
//! A single flat file holds every record: one header row followed by one row
//! per expense. The store takes an explicit path so tests can point it at a
//! temp directory. Full rewrites go through a temp file and an atomic rename
//! so the ledger is either fully replaced or untouched.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Column header of the ledger file; order is load-bearing for files written
/// by earlier runs.
pub const HEADERS: [&str; 4] = ["Date", "Category", "Description", "Amount"];

/// File-backed store for expense records
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store for the ledger at the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the ledger path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the ledger with just the header row if it does not exist
    ///
    /// Idempotent: an existing ledger is never touched.
    pub fn ensure_initialized(&self) -> ExpenseResult<()> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    ExpenseError::Storage(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let file = File::create(&self.path).map_err(|e| {
            ExpenseError::Storage(format!("Failed to create {}: {}", self.path.display(), e))
        })?;
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(HEADERS)?;
        writer.flush()?;

        debug!("initialized ledger at {}", self.path.display());
        Ok(())
    }

    /// Read every data row (header excluded) in file order
    ///
    /// A missing ledger reads as empty, not as an error.
    pub fn read_all(&self) -> ExpenseResult<Vec<Expense>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path).map_err(|e| {
            ExpenseError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        let mut expenses = Vec::new();
        for result in reader.deserialize() {
            let expense: Expense = result.map_err(|e| {
                ExpenseError::Storage(format!("Failed to parse {}: {}", self.path.display(), e))
            })?;
            expenses.push(expense);
        }

        debug!("read {} records from {}", expenses.len(), self.path.display());
        Ok(expenses)
    }

    /// Overwrite the ledger with header + exactly the given records, in order
    ///
    /// Writes to a temp file in the same directory, then renames over the
    /// ledger.
    pub fn write_all(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        let temp_path = self.path.with_extension("csv.tmp");

        let file = File::create(&temp_path).map_err(|e| {
            ExpenseError::Storage(format!("Failed to create temp file: {}", e))
        })?;

        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(HEADERS)?;
        for expense in expenses {
            writer.serialize(expense)?;
        }
        writer.flush()?;

        // Sync to disk before rename
        let file = writer
            .into_inner()
            .map_err(|e| ExpenseError::Storage(format!("Failed to flush ledger: {}", e)))?;
        file.sync_all()
            .map_err(|e| ExpenseError::Storage(format!("Failed to sync ledger: {}", e)))?;

        fs::rename(&temp_path, &self.path).map_err(|e| {
            // Try to clean up temp file if rename fails
            let _ = fs::remove_file(&temp_path);
            ExpenseError::Storage(format!("Failed to rename temp file: {}", e))
        })?;

        debug!("wrote {} records to {}", expenses.len(), self.path.display());
        Ok(())
    }

    /// Append one record without rewriting existing content
    pub fn append(&self, expense: &Expense) -> ExpenseResult<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                ExpenseError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);
        writer.serialize(expense)?;
        writer.flush()?;

        debug!("appended record to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample(day: u32, amount_cents: i64) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2023, 1, day).unwrap(),
            "Food",
            "lunch",
            Amount::from_cents(amount_cents),
        )
    }

    fn store_in(dir: &TempDir) -> ExpenseStore {
        ExpenseStore::new(dir.path().join("expenses.csv"))
    }

    #[test]
    fn test_ensure_initialized_creates_header_only_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.ensure_initialized().unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "Date,Category,Description,Amount\n");
    }

    #[test]
    fn test_ensure_initialized_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.ensure_initialized().unwrap();
        store.append(&sample(15, 1250)).unwrap();
        let before = fs::read_to_string(store.path()).unwrap();

        store.ensure_initialized().unwrap();
        let after = fs::read_to_string(store.path()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_read_all_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_then_read() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.ensure_initialized().unwrap();

        store.append(&sample(15, 1250)).unwrap();
        store.append(&sample(16, 700)).unwrap();

        let expenses = store.read_all().unwrap();
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].date, "2023-01-15");
        assert_eq!(expenses[0].amount, "12.50");
        assert_eq!(expenses[1].amount, "7.00");
    }

    #[test]
    fn test_write_all_overwrites_in_order() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.ensure_initialized().unwrap();
        store.append(&sample(1, 100)).unwrap();

        store.write_all(&[sample(20, 500), sample(10, 300)]).unwrap();

        let expenses = store.read_all().unwrap();
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].date, "2023-01-20");
        assert_eq!(expenses[1].date, "2023-01-10");
    }

    #[test]
    fn test_write_all_empty_leaves_header() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.write_all(&[]).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "Date,Category,Description,Amount\n");
    }

    #[test]
    fn test_write_all_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.write_all(&[sample(15, 1250)]).unwrap();

        assert!(store.path().exists());
        assert!(!dir.path().join("expenses.csv.tmp").exists());
    }

    #[test]
    fn test_read_write_round_trip_preserves_bytes() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.ensure_initialized().unwrap();
        store.append(&sample(15, 1250)).unwrap();
        store.append(&sample(16, 700)).unwrap();
        let before = fs::read_to_string(store.path()).unwrap();

        let expenses = store.read_all().unwrap();
        store.write_all(&expenses).unwrap();

        let after = fs::read_to_string(store.path()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_fields_with_commas_survive_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut expense = sample(15, 1250);
        expense.description = "coffee, cake".into();
        store.write_all(std::slice::from_ref(&expense)).unwrap();

        let expenses = store.read_all().unwrap();
        assert_eq!(expenses, vec![expense]);
    }

    #[test]
    fn test_malformed_date_survives_storage() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let expense = Expense {
            date: "not-a-date".into(),
            category: "Misc".into(),
            description: "typo".into(),
            amount: "5.00".into(),
        };
        store.write_all(std::slice::from_ref(&expense)).unwrap();

        let expenses = store.read_all().unwrap();
        assert_eq!(expenses[0].date, "not-a-date");
        assert!(expenses[0].parsed_date().is_none());
    }
}
