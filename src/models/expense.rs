use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::amount::parse_decimal;
use super::category::canonical_category;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ExpenseRecord {
    /// Stable identity assigned by the store; survives re-sorting and filtering.
    pub(crate) id: u64,
    pub(crate) title: String,
    pub(crate) category: String,
    /// Calendar date as stored, normally "YYYY-MM-DD".
    pub(crate) date: String,
    /// `None` when the stored value was not a finite number.
    pub(crate) amount: Option<Decimal>,
    pub(crate) description: String,
}

impl ExpenseRecord {
    /// Amount as it participates in sums: non-finite values count as zero.
    pub(crate) fn amount_or_zero(&self) -> Decimal {
        self.amount.unwrap_or(Decimal::ZERO)
    }

    pub(crate) fn parsed_date(&self) -> Option<NaiveDate> {
        crate::dates::parse_date(&self.date)
    }

    /// Text the listing search runs against.
    pub(crate) fn search_text(&self) -> String {
        format!("{} {}", self.title, self.description).to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ValidationError {
    #[error("title is required")]
    MissingTitle,
    #[error("date is required")]
    MissingDate,
    #[error("category is required")]
    MissingCategory,
    #[error("amount must be a positive number, got '{0}'")]
    InvalidAmount(String),
    #[error("budget must be a positive number, got '{0}'")]
    InvalidBudget(String),
}

/// Raw entry-form input, nothing checked yet.
#[derive(Debug, Clone, Default)]
pub(crate) struct ExpenseDraft {
    pub(crate) title: String,
    pub(crate) amount: String,
    pub(crate) date: String,
    pub(crate) category: String,
    pub(crate) description: String,
}

/// An expense that passed the entry checks. Only this type reaches the store.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NewExpense {
    pub(crate) title: String,
    pub(crate) category: String,
    pub(crate) date: String,
    pub(crate) amount: Decimal,
    pub(crate) description: String,
}

impl ExpenseDraft {
    pub(crate) fn validate(&self) -> Result<NewExpense, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        let date = self.date.trim();
        if date.is_empty() {
            return Err(ValidationError::MissingDate);
        }
        let category = canonical_category(&self.category);
        if category.is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        let amount = match parse_decimal(&self.amount) {
            Some(a) if a > Decimal::ZERO => a,
            _ => return Err(ValidationError::InvalidAmount(self.amount.trim().to_string())),
        };

        Ok(NewExpense {
            title: title.to_string(),
            category,
            date: date.to_string(),
            amount,
            description: self.description.trim().to_string(),
        })
    }
}

impl NewExpense {
    pub(crate) fn into_record(self, id: u64) -> ExpenseRecord {
        ExpenseRecord {
            id,
            title: self.title,
            category: self.category,
            date: self.date,
            amount: Some(self.amount),
            description: self.description,
        }
    }
}
