use rust_decimal::Decimal;

use super::amount::parse_decimal;
use super::expense::ValidationError;

/// Monthly budget used when nothing usable is stored.
pub(crate) const DEFAULT_BUDGET: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Validate a budget typed by the user: it must be a positive number.
pub(crate) fn parse_budget_input(input: &str) -> Result<Decimal, ValidationError> {
    match parse_decimal(input) {
        Some(value) if value > Decimal::ZERO => Ok(value),
        _ => Err(ValidationError::InvalidBudget(input.trim().to_string())),
    }
}
