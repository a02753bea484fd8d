//! The expense collection and the operations the tracker page drives.
//!
//! Every successful mutation writes the whole collection back to storage
//! under [`EXPENSES_KEY`]. Write failures are logged and otherwise ignored:
//! the in-memory collection stays authoritative for the session.

use chrono::{DateTime, Utc};

use crate::model::{Expense, ExpenseDraft, ValidationError};
use crate::query::{self, ListOptions};
use crate::storage::{load_json, save_json, BrowserStorage, KeyValueStore, EXPENSES_KEY};

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseStore<S: KeyValueStore = BrowserStorage> {
    expenses: Vec<Expense>,
    storage: S,
}

impl<S: KeyValueStore> ExpenseStore<S> {
    /// Loads the saved collection. Records that do not decode, break the
    /// record invariants or repeat an earlier id are skipped one by one, so a
    /// single bad entry never hides the rest.
    pub fn load(storage: S) -> Self {
        let raw: Vec<serde_json::Value> = load_json(&storage, EXPENSES_KEY).unwrap_or_default();
        let stored = raw.len();

        let mut expenses: Vec<Expense> = Vec::with_capacity(stored);
        for value in raw {
            match serde_json::from_value::<Expense>(value) {
                Ok(expense) if expense.is_valid() && !expenses.iter().any(|e| e.id == expense.id) => {
                    expenses.push(expense)
                }
                Ok(expense) => tracing::debug!(id = expense.id, "skipping stored expense"),
                Err(err) => tracing::debug!(%err, "skipping undecodable stored expense"),
            }
        }

        let skipped = stored - expenses.len();
        if skipped > 0 {
            tracing::warn!(skipped, "ignored invalid stored expenses");
        }
        tracing::info!(count = expenses.len(), "loaded expenses");
        Self { expenses, storage }
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn add(&mut self, draft: &ExpenseDraft, now: DateTime<Utc>) -> Result<Expense, ValidationError> {
        let fields = draft.validate()?;
        let expense = Expense {
            id: self.next_id(now),
            name: fields.name,
            amount: fields.amount,
            category: fields.category,
            date: fields.date.unwrap_or_else(|| now.date_naive()),
        };

        tracing::debug!(id = expense.id, category = %expense.category, "adding expense");
        self.expenses.push(expense.clone());
        self.persist();
        Ok(expense)
    }

    /// Replaces the fields of an existing record, keeping its id and position.
    /// A blank draft date keeps the record's date. Unknown ids are a no-op.
    pub fn update(&mut self, id: i64, draft: &ExpenseDraft) -> Result<Option<Expense>, ValidationError> {
        let Some(index) = self.expenses.iter().position(|e| e.id == id) else {
            return Ok(None);
        };
        let fields = draft.validate()?;

        let expense = &mut self.expenses[index];
        expense.name = fields.name;
        expense.amount = fields.amount;
        expense.category = fields.category;
        if let Some(date) = fields.date {
            expense.date = date;
        }
        let updated = expense.clone();

        tracing::debug!(id, "updated expense");
        self.persist();
        Ok(Some(updated))
    }

    pub fn delete(&mut self, id: i64) -> Option<Expense> {
        let index = self.expenses.iter().position(|e| e.id == id)?;
        let removed = self.expenses.remove(index);

        tracing::debug!(id, "deleted expense");
        self.persist();
        Some(removed)
    }

    pub fn list(&self, options: &ListOptions) -> Vec<&Expense> {
        query::apply(&self.expenses, options)
    }

    /// Per-category sums over the whole collection, in the order each
    /// category first appears.
    pub fn aggregate_by_category(&self) -> Vec<CategoryTotal> {
        let mut totals: Vec<CategoryTotal> = Vec::new();
        for expense in self.expenses.iter() {
            match totals.iter_mut().find(|t| t.category == expense.category) {
                Some(total) => total.amount += expense.amount,
                None => totals.push(CategoryTotal {
                    category: expense.category.clone(),
                    amount: expense.amount,
                }),
            }
        }
        totals
    }

    pub fn total_amount(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    // Millisecond timestamps, bumped past the largest id in use so two
    // records created in the same millisecond still differ.
    fn next_id(&self, now: DateTime<Utc>) -> i64 {
        let stamp = now.timestamp_millis();
        match self.expenses.iter().map(|e| e.id).max() {
            Some(max) if max >= stamp => max.checked_add(1).unwrap_or_else(|| self.lowest_free_id()),
            _ => stamp,
        }
    }

    fn lowest_free_id(&self) -> i64 {
        let mut ids: Vec<i64> = self.expenses.iter().map(|e| e.id).filter(|id| *id >= 0).collect();
        ids.sort_unstable();

        let mut candidate = 0;
        for id in ids {
            if id != candidate {
                break;
            }
            candidate += 1;
        }
        candidate
    }

    fn persist(&self) {
        if let Err(err) = save_json(&self.storage, EXPENSES_KEY, &self.expenses) {
            tracing::error!(%err, "failed to save expenses");
        }
    }
}

/// Sum of a derived view, e.g. the currently displayed list.
pub fn total(view: &[&Expense]) -> f64 {
    view.iter().map(|e| e.amount).sum()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::model::parse_date;
    use crate::storage::{MemoryStorage, StorageError};

    /// Counts writes and optionally refuses them.
    #[derive(Clone, Debug, Default, PartialEq)]
    struct RecordingStorage {
        inner: MemoryStorage,
        writes: Rc<Cell<usize>>,
        reject_writes: bool,
    }

    impl KeyValueStore for RecordingStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get_item(key)
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.writes.set(self.writes.get() + 1);
            if self.reject_writes {
                return Err(StorageError::Rejected("QuotaExceededError".to_string()));
            }
            self.inner.set_item(key, value)
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 23, 30, 0).unwrap()
    }

    fn draft(name: &str, amount: &str, category: &str, date: &str) -> ExpenseDraft {
        ExpenseDraft {
            name: name.to_string(),
            amount: amount.to_string(),
            category: category.to_string(),
            date: date.to_string(),
        }
    }

    #[test]
    fn add_defaults_date_to_utc_today() {
        let mut store = ExpenseStore::load(MemoryStorage::new());
        let expense = store.add(&draft("Coffee", "3.2", "Food", ""), now()).unwrap();
        assert_eq!(expense.date, parse_date("2024-05-10").unwrap());
        assert_eq!(expense.id, now().timestamp_millis());
    }

    #[test]
    fn ids_stay_unique_within_one_millisecond() {
        let mut store = ExpenseStore::load(MemoryStorage::new());
        let first = store.add(&draft("a", "1", "Food", ""), now()).unwrap();
        let second = store.add(&draft("b", "1", "Food", ""), now()).unwrap();
        let third = store.add(&draft("c", "1", "Food", ""), now()).unwrap();
        assert_eq!(second.id, first.id + 1);
        assert_eq!(third.id, first.id + 2);
    }

    #[test]
    fn rejected_add_does_not_touch_storage() {
        let storage = MemoryStorage::new();
        let mut store = ExpenseStore::load(storage.clone());
        assert!(store.add(&draft("", "1", "Food", ""), now()).is_err());
        assert_eq!(storage.get_item(EXPENSES_KEY).unwrap(), None);
    }

    #[test]
    fn update_keeps_id_position_and_date_when_blank() {
        let mut store = ExpenseStore::load(MemoryStorage::new());
        let first = store.add(&draft("Bus", "2", "Transportation", "2024-01-02"), now()).unwrap();
        store.add(&draft("Taxi", "20", "Transportation", ""), now()).unwrap();

        let updated = store
            .update(first.id, &draft("Train", "4.5", "Travel", ""))
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, first.id);
        assert_eq!(updated.date, first.date);
        assert_eq!(store.expenses()[0], updated);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn invalid_update_leaves_record_untouched() {
        let mut store = ExpenseStore::load(MemoryStorage::new());
        let original = store.add(&draft("Bus", "2", "Transportation", ""), now()).unwrap();
        assert_eq!(
            store.update(original.id, &draft("Bus", "0", "Transportation", "")),
            Err(ValidationError::InvalidAmount)
        );
        assert_eq!(store.get(original.id), Some(&original));
    }

    #[test]
    fn update_and_delete_ignore_unknown_ids() {
        let mut store = ExpenseStore::load(MemoryStorage::new());
        store.add(&draft("Bus", "2", "Transportation", ""), now()).unwrap();
        assert_eq!(store.update(42, &draft("x", "1", "y", "")), Ok(None));
        assert_eq!(store.delete(42), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn missed_update_and_delete_do_not_write() {
        let storage = RecordingStorage::default();
        let mut store = ExpenseStore::load(storage.clone());
        store.add(&draft("Bus", "2", "Transportation", ""), now()).unwrap();
        let saved = storage.get_item(EXPENSES_KEY).unwrap();
        assert_eq!(storage.writes.get(), 1);

        assert_eq!(store.update(42, &draft("x", "1", "y", "")), Ok(None));
        assert_eq!(store.delete(42), None);

        assert_eq!(storage.writes.get(), 1);
        assert_eq!(storage.get_item(EXPENSES_KEY).unwrap(), saved);
    }

    #[test]
    fn unknown_id_with_invalid_draft_is_still_a_no_op() {
        let storage = RecordingStorage::default();
        let mut store = ExpenseStore::load(storage.clone());
        assert_eq!(store.update(42, &draft("", "0", "", "")), Ok(None));
        assert_eq!(storage.writes.get(), 0);
    }

    #[test]
    fn rejected_writes_still_update_memory() {
        let storage = RecordingStorage {
            reject_writes: true,
            ..RecordingStorage::default()
        };
        let mut store = ExpenseStore::load(storage.clone());

        let created = store.add(&draft("Rent", "900", "Housing", ""), now()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(created.id), Some(&created));
        assert_eq!(storage.writes.get(), 1);
        assert_eq!(storage.get_item(EXPENSES_KEY).unwrap(), None);

        assert!(store.delete(created.id).is_some());
        assert!(store.is_empty());
    }

    #[test]
    fn next_id_does_not_overflow_past_max_stored_id() {
        let storage = MemoryStorage::new();
        storage
            .set_item(
                EXPENSES_KEY,
                r#"[{"id":9223372036854775807,"name":"Rent","amount":900,"category":"Housing","date":"2024-01-01"},
                    {"id":0,"name":"Bus","amount":2,"category":"Transportation","date":"2024-01-02"}]"#,
            )
            .unwrap();
        let mut store = ExpenseStore::load(storage);
        assert_eq!(store.len(), 2);

        let created = store.add(&draft("Coffee", "3", "Food", ""), now()).unwrap();
        assert_eq!(created.id, 1);
        let next = store.add(&draft("Tea", "2", "Food", ""), now()).unwrap();
        assert_eq!(next.id, 2);
    }

    #[test]
    fn load_keeps_valid_records_from_a_mixed_blob() {
        let storage = MemoryStorage::new();
        storage
            .set_item(
                EXPENSES_KEY,
                r#"[{"id":1,"name":"Rent","amount":900,"category":"Housing","date":"2024-01-01"},
                    {"id":2,"name":"Broken","amount":null,"category":"Food","date":"2024-01-02"},
                    {"id":3,"name":"Refund","amount":-5,"category":"Food","date":"2024-01-03"},
                    {"id":1,"name":"Duplicate","amount":4,"category":"Food","date":"2024-01-04"},
                    {"id":4,"name":"","amount":4,"category":"Food","date":"2024-01-04"},
                    {"id":5,"name":"Lunch","amount":12.5,"category":"Food","date":"2024-01-05"}]"#,
            )
            .unwrap();

        let mut store = ExpenseStore::load(storage.clone());
        let ids: Vec<i64> = store.expenses().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 5]);

        store.add(&draft("Coffee", "3", "Food", ""), now()).unwrap();
        let reloaded = ExpenseStore::load(storage);
        assert_eq!(reloaded.get(1).map(|e| e.amount), Some(900.0));
        assert_eq!(reloaded.len(), 3);
    }

    #[test]
    fn aggregate_keeps_first_encounter_order() {
        let mut store = ExpenseStore::load(MemoryStorage::new());
        store.add(&draft("Taxi", "12", "Transportation", ""), now()).unwrap();
        store.add(&draft("Lunch", "8.5", "Food", ""), now()).unwrap();
        store.add(&draft("Bus", "3", "Transportation", ""), now()).unwrap();

        assert_eq!(
            store.aggregate_by_category(),
            vec![
                CategoryTotal {
                    category: "Transportation".to_string(),
                    amount: 15.0,
                },
                CategoryTotal {
                    category: "Food".to_string(),
                    amount: 8.5,
                },
            ]
        );
        assert_eq!(store.total_amount(), 23.5);
    }

    #[test]
    fn load_starts_empty_on_malformed_blob() {
        let storage = MemoryStorage::new();
        storage.set_item(EXPENSES_KEY, "{\"not\": \"a list\"}").unwrap();
        assert!(ExpenseStore::load(storage).is_empty());
    }
}
