use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest accepted amount. Keeps sums of many records well inside the
/// range the currency formatter renders exactly.
pub const MAX_AMOUNT: f64 = 1e12;

pub const DEFAULT_CATEGORIES: [&str; 7] = [
    "Food",
    "Transportation",
    "Entertainment",
    "Utilities",
    "Health",
    "Shopping",
    "Other",
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub name: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
}

impl Expense {
    /// Whether the record holds the invariants every saved expense keeps.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.category.trim().is_empty()
            && valid_amount(self.amount)
    }
}

fn valid_amount(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0 && amount <= MAX_AMOUNT
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("expense name is required")]
    MissingName,
    #[error("amount must be a positive number")]
    InvalidAmount,
    #[error("category is required")]
    MissingCategory,
    #[error("date must be formatted as YYYY-MM-DD")]
    InvalidDate,
}

/// Raw form contents, as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseDraft {
    pub name: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

/// A draft that passed validation. `date` is `None` when the form left it blank.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseFields {
    pub name: String,
    pub amount: f64,
    pub category: String,
    pub date: Option<NaiveDate>,
}

impl ExpenseDraft {
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            name: expense.name.clone(),
            amount: expense.amount.to_string(),
            category: expense.category.clone(),
            date: expense.date.format(DATE_FORMAT).to_string(),
        }
    }

    pub fn validate(&self) -> Result<ExpenseFields, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .map_err(|_| ValidationError::InvalidAmount)?;
        if !valid_amount(amount) {
            return Err(ValidationError::InvalidAmount);
        }

        let category = self.category.trim();
        if category.is_empty() {
            return Err(ValidationError::MissingCategory);
        }

        let date = if self.date.trim().is_empty() {
            None
        } else {
            Some(parse_date(&self.date).ok_or(ValidationError::InvalidDate)?)
        };

        Ok(ExpenseFields {
            name: name.to_string(),
            amount,
            category: category.to_string(),
            date,
        })
    }
}

/// Parses a `YYYY-MM-DD` date, as produced by `<input type="date">`.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, amount: &str, category: &str, date: &str) -> ExpenseDraft {
        ExpenseDraft {
            name: name.to_string(),
            amount: amount.to_string(),
            category: category.to_string(),
            date: date.to_string(),
        }
    }

    #[test]
    fn validate_trims_and_parses_fields() {
        let fields = draft("  Lunch ", " 12.5 ", "Food", "2024-01-15")
            .validate()
            .unwrap();
        assert_eq!(fields.name, "Lunch");
        assert_eq!(fields.amount, 12.5);
        assert_eq!(fields.category, "Food");
        assert_eq!(fields.date, NaiveDate::from_ymd_opt(2024, 1, 15));
    }

    #[test]
    fn blank_date_is_left_for_the_caller() {
        let fields = draft("Bus", "2", "Transportation", "  ").validate().unwrap();
        assert_eq!(fields.date, None);
    }

    #[test]
    fn validate_rejects_bad_input() {
        assert_eq!(
            draft(" ", "1", "Food", "").validate(),
            Err(ValidationError::MissingName)
        );
        assert_eq!(
            draft("a", "0", "Food", "").validate(),
            Err(ValidationError::InvalidAmount)
        );
        assert_eq!(
            draft("a", "-3", "Food", "").validate(),
            Err(ValidationError::InvalidAmount)
        );
        assert_eq!(
            draft("a", "", "Food", "").validate(),
            Err(ValidationError::InvalidAmount)
        );
        assert_eq!(
            draft("a", "NaN", "Food", "").validate(),
            Err(ValidationError::InvalidAmount)
        );
        assert_eq!(
            draft("a", "1e308", "Food", "").validate(),
            Err(ValidationError::InvalidAmount)
        );
        assert_eq!(
            draft("a", "1", "", "").validate(),
            Err(ValidationError::MissingCategory)
        );
        assert_eq!(
            draft("a", "1", "Food", "15/01/2024").validate(),
            Err(ValidationError::InvalidDate)
        );
    }

    #[test]
    fn amount_bound_is_inclusive() {
        assert!(draft("a", "1000000000000", "Food", "").validate().is_ok());
        assert_eq!(
            draft("a", "1000000000000.01", "Food", "").validate(),
            Err(ValidationError::InvalidAmount)
        );
    }

    #[test]
    fn stored_record_validity_mirrors_form_rules() {
        let mut expense = Expense {
            id: 1,
            name: "Rent".to_string(),
            amount: 900.0,
            category: "Housing".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        assert!(expense.is_valid());
        expense.amount = f64::INFINITY;
        assert!(!expense.is_valid());
        expense.amount = 1.0;
        expense.category = " ".to_string();
        assert!(!expense.is_valid());
    }

    #[test]
    fn expense_serializes_with_plain_date_string() {
        let expense = Expense {
            id: 1705312800000,
            name: "Lunch".to_string(),
            amount: 12.5,
            category: "Food".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        };
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1705312800000i64,
                "name": "Lunch",
                "amount": 12.5,
                "category": "Food",
                "date": "2024-01-15"
            })
        );
    }

    #[test]
    fn draft_from_expense_round_trips_through_validate() {
        let expense = Expense {
            id: 7,
            name: "Cinema".to_string(),
            amount: 9.75,
            category: "Entertainment".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
        };
        let fields = ExpenseDraft::from_expense(&expense).validate().unwrap();
        assert_eq!(fields.amount, 9.75);
        assert_eq!(fields.date, Some(expense.date));
    }
}
