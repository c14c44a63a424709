mod amount;
mod budget;
mod category;
mod expense;
mod seed;

pub(crate) use amount::{coerce_amount, format_amount_plain, parse_decimal};
pub(crate) use budget::{parse_budget_input, DEFAULT_BUDGET};
pub(crate) use category::{canonical_category, CONVENTIONAL_CATEGORIES};
pub(crate) use expense::{ExpenseDraft, ExpenseRecord, NewExpense, ValidationError};
pub(crate) use seed::default_expenses;
