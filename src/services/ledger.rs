//! Ledger service
//!
//! Business logic for the ledger lifecycle: hydrate from the backing
//! store, append expenses, replace the collection from a grid edit, set
//! income, and clear everything. Each CLI handler borrows the store and
//! drives exactly one of these operations per invocation.
//!
//! Write-failure policy: mutations update the in-memory ledger first and
//! surface a storage error without rolling back. The next successful
//! persist rewrites the whole artifact, so the gap is self-healing.

use chrono::NaiveDate;
use tracing::warn;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{compute_totals, ExpenseRecord, Ledger, Money, Totals};
use crate::storage::Store;

/// Validated input for an expense append
#[derive(Debug, Clone)]
pub struct NewExpense {
    /// Expense date
    pub date: NaiveDate,
    /// Item name as typed; normalized on acceptance
    pub item: String,
    /// Amount paid; must be greater than zero
    pub price: Money,
    /// Optional note
    pub note: Option<String>,
}

/// Service for ledger operations
pub struct LedgerService<'a> {
    store: &'a Store,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Hydrate a ledger from the backing store
    ///
    /// Never fails: each artifact that is missing, corrupt, or unreachable
    /// is downgraded to its empty value with a warning. The two artifacts
    /// are independent, so a corrupt income file does not discard readable
    /// expenses. Calling this twice with no intervening mutation yields
    /// identical ledgers.
    pub fn load(&self) -> Ledger {
        let records = match self
            .store
            .expenses
            .load()
            .and_then(|_| self.store.expenses.get_all())
        {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "could not read expense table, starting empty");
                Vec::new()
            }
        };

        let income = match self.store.income.load().and_then(|_| self.store.income.get()) {
            Ok(income) => income,
            Err(e) => {
                warn!(error = %e, "could not read income, starting at zero");
                Money::zero()
            }
        };

        Ledger { records, income }
    }

    /// Validate, normalize, append, and persist one expense
    ///
    /// Rejects a blank item or a non-positive price before any state
    /// change. On persistence failure the in-memory append is retained
    /// and the error returned.
    pub fn add_expense(
        &self,
        ledger: &mut Ledger,
        input: NewExpense,
    ) -> LedgerResult<ExpenseRecord> {
        if input.item.trim().is_empty() {
            return Err(LedgerError::blank_item());
        }
        if !input.price.is_positive() {
            return Err(LedgerError::non_positive_price());
        }

        let record = ExpenseRecord::new(
            input.date,
            &input.item,
            input.price,
            input.note.as_deref().unwrap_or(""),
        );

        ledger.records.push(record.clone());

        self.store.expenses.replace_all(ledger.records.clone())?;
        self.store.expenses.save()?;

        Ok(record)
    }

    /// Replace the whole record collection (grid-edit semantics)
    ///
    /// No partial updates: the incoming sequence overwrites the previous
    /// one entirely. Every row must carry a non-blank item and a
    /// non-negative price; a bad row rejects the whole replacement with
    /// no state change.
    pub fn replace_records(
        &self,
        ledger: &mut Ledger,
        records: Vec<ExpenseRecord>,
    ) -> LedgerResult<()> {
        for record in &records {
            record.validate()?;
        }

        ledger.records = records;

        self.store.expenses.replace_all(ledger.records.clone())?;
        self.store.expenses.save()
    }

    /// Overwrite the income scalar
    ///
    /// Income persists to its own artifact, not transactionally linked to
    /// the expense table.
    pub fn set_income(&self, ledger: &mut Ledger, amount: Money) -> LedgerResult<()> {
        if amount.is_negative() {
            return Err(LedgerError::negative_amount("income"));
        }

        ledger.income = amount;

        self.store.income.set(amount)?;
        self.store.income.save()
    }

    /// Reset the ledger to empty and delete every backing artifact
    pub fn clear_all(&self, ledger: &mut Ledger) -> LedgerResult<()> {
        ledger.records.clear();
        ledger.income = Money::zero();

        self.store.clear_all()
    }

    /// Derived totals for the current ledger state
    pub fn totals(&self, ledger: &Ledger) -> Totals {
        compute_totals(ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SpendbookPaths;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, Store) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = Store::new(paths).unwrap();
        (temp_dir, store)
    }

    fn expense(item: &str, minor: i64) -> NewExpense {
        NewExpense {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            item: item.to_string(),
            price: Money::from_minor(minor),
            note: None,
        }
    }

    #[test]
    fn test_add_expense_increases_count_and_total() {
        let (_temp_dir, store) = create_test_store();
        let service = LedgerService::new(&store);
        let mut ledger = service.load();

        let before = service.totals(&ledger);
        service.add_expense(&mut ledger, expense("milk", 5000)).unwrap();
        let after = service.totals(&ledger);

        assert_eq!(after.count, before.count + 1);
        assert_eq!(
            after.total_expenses,
            before.total_expenses + Money::from_minor(5000)
        );
    }

    #[test]
    fn test_add_expense_rejects_blank_item() {
        let (_temp_dir, store) = create_test_store();
        let service = LedgerService::new(&store);
        let mut ledger = service.load();

        let err = service
            .add_expense(&mut ledger, expense("   ", 5000))
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(ledger.count(), 0);
    }

    #[test]
    fn test_add_expense_rejects_zero_price() {
        let (_temp_dir, store) = create_test_store();
        let service = LedgerService::new(&store);
        let mut ledger = service.load();

        let err = service
            .add_expense(&mut ledger, expense("milk", 0))
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(ledger.count(), 0);
        assert_eq!(service.totals(&ledger).total_expenses, Money::zero());
    }

    #[test]
    fn test_milk_scenario() {
        // income 0, add (2024-01-01, "milk", 50, "") -> total 50,
        // remaining -50, note "N/A", item "Milk"
        let (_temp_dir, store) = create_test_store();
        let service = LedgerService::new(&store);
        let mut ledger = service.load();

        let record = service.add_expense(&mut ledger, expense("milk", 5000)).unwrap();

        assert_eq!(record.item, "Milk");
        assert_eq!(record.note, "N/A");

        let totals = service.totals(&ledger);
        assert_eq!(totals.total_expenses.minor(), 5000);
        assert_eq!(totals.remaining_balance.minor(), -5000);
    }

    #[test]
    fn test_income_scenario() {
        // income 1000, expenses 300 + 250 -> total 550, remaining 450
        let (_temp_dir, store) = create_test_store();
        let service = LedgerService::new(&store);
        let mut ledger = service.load();

        service.set_income(&mut ledger, Money::from_minor(100_000)).unwrap();
        service.add_expense(&mut ledger, expense("rent", 30_000)).unwrap();
        service.add_expense(&mut ledger, expense("food", 25_000)).unwrap();

        let totals = service.totals(&ledger);
        assert_eq!(totals.total_expenses.minor(), 55_000);
        assert_eq!(totals.remaining_balance.minor(), 45_000);
    }

    #[test]
    fn test_remaining_balance_property_after_every_mutation() {
        let (_temp_dir, store) = create_test_store();
        let service = LedgerService::new(&store);
        let mut ledger = service.load();

        let check = |service: &LedgerService, ledger: &Ledger| {
            let totals = service.totals(ledger);
            assert_eq!(
                totals.remaining_balance,
                ledger.income - totals.total_expenses
            );
        };

        service.set_income(&mut ledger, Money::from_minor(50_000)).unwrap();
        check(&service, &ledger);

        service.add_expense(&mut ledger, expense("milk", 5000)).unwrap();
        check(&service, &ledger);

        service
            .replace_records(&mut ledger, vec![])
            .unwrap();
        check(&service, &ledger);

        service.clear_all(&mut ledger).unwrap();
        check(&service, &ledger);
    }

    #[test]
    fn test_persist_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        {
            let store = Store::new(paths.clone()).unwrap();
            let service = LedgerService::new(&store);
            let mut ledger = service.load();

            service.set_income(&mut ledger, Money::from_minor(100_000)).unwrap();
            service
                .add_expense(&mut ledger, expense("milk", 5000))
                .unwrap();
            service
                .add_expense(&mut ledger, expense("bread", 2500))
                .unwrap();
        }

        {
            let store = Store::new(paths).unwrap();
            let service = LedgerService::new(&store);
            let ledger = service.load();

            assert_eq!(ledger.count(), 2);
            assert_eq!(ledger.income.minor(), 100_000);
            assert_eq!(ledger.records[0].item, "Milk");
            assert_eq!(ledger.records[1].item, "Bread");
        }
    }

    #[test]
    fn test_load_is_idempotent() {
        let (_temp_dir, store) = create_test_store();
        let service = LedgerService::new(&store);
        let mut ledger = service.load();

        service.set_income(&mut ledger, Money::from_minor(10_000)).unwrap();
        service.add_expense(&mut ledger, expense("milk", 5000)).unwrap();

        let first = service.load();
        let second = service.load();
        assert_eq!(first, second);
    }

    #[test]
    fn test_replace_records_wholesale() {
        let (_temp_dir, store) = create_test_store();
        let service = LedgerService::new(&store);
        let mut ledger = service.load();

        service.add_expense(&mut ledger, expense("milk", 5000)).unwrap();
        service.add_expense(&mut ledger, expense("bread", 2500)).unwrap();

        // Simulate a grid edit: first row repriced, second row deleted
        let mut edited = ledger.records.clone();
        edited.truncate(1);
        edited[0].price = Money::from_minor(6000);

        service.replace_records(&mut ledger, edited).unwrap();

        assert_eq!(ledger.count(), 1);
        assert_eq!(service.totals(&ledger).total_expenses.minor(), 6000);

        // Replacement persisted
        let reloaded = service.load();
        assert_eq!(reloaded.count(), 1);
        assert_eq!(reloaded.records[0].price.minor(), 6000);
    }

    #[test]
    fn test_replace_records_rejects_bad_rows() {
        let (_temp_dir, store) = create_test_store();
        let service = LedgerService::new(&store);
        let mut ledger = service.load();

        service.add_expense(&mut ledger, expense("milk", 5000)).unwrap();

        let mut bad = ledger.records.clone();
        bad[0].price = Money::from_minor(-100);

        assert!(service.replace_records(&mut ledger, bad).is_err());
        assert_eq!(ledger.records[0].price.minor(), 5000);
    }

    #[test]
    fn test_set_income_rejects_negative() {
        let (_temp_dir, store) = create_test_store();
        let service = LedgerService::new(&store);
        let mut ledger = service.load();

        let err = service
            .set_income(&mut ledger, Money::from_minor(-1))
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(ledger.income, Money::zero());
    }

    #[test]
    fn test_clear_all_resets_and_removes_artifacts() {
        let (_temp_dir, store) = create_test_store();
        let service = LedgerService::new(&store);
        let mut ledger = service.load();

        service.set_income(&mut ledger, Money::from_minor(100_000)).unwrap();
        service.add_expense(&mut ledger, expense("milk", 5000)).unwrap();

        service.clear_all(&mut ledger).unwrap();

        assert_eq!(ledger.count(), 0);
        assert_eq!(ledger.income, Money::zero());
        assert!(!store.paths().expenses_file().exists());
        assert!(!store.paths().income_file().exists());

        let reloaded = service.load();
        assert_eq!(reloaded, Ledger::new());
    }

    #[test]
    fn test_load_downgrades_corrupt_income_but_keeps_expenses() {
        let (_temp_dir, store) = create_test_store();
        let service = LedgerService::new(&store);
        let mut ledger = service.load();

        service.add_expense(&mut ledger, expense("milk", 5000)).unwrap();
        std::fs::write(store.paths().income_file(), "Income\ngarbage\n").unwrap();

        let reloaded = service.load();
        assert_eq!(reloaded.count(), 1);
        assert_eq!(reloaded.income, Money::zero());
    }
}
