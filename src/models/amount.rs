use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// Strict parse of a user-facing number. Blank input is `None`.
pub(crate) fn parse_decimal(s: &str) -> Option<Decimal> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Coerce a persisted amount into a number.
///
/// Numbers and numeric strings pass through, a blank string counts as zero
/// and booleans count as 0/1. Anything else (missing, `null`, non-numeric
/// text, arrays, objects) is non-finite and yields `None`; sums treat that
/// as zero.
pub(crate) fn coerce_amount(value: Option<&Value>) -> Option<Decimal> {
    match value? {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) if s.trim().is_empty() => Some(Decimal::ZERO),
        Value::String(s) => parse_decimal(s),
        Value::Bool(b) => Some(if *b { Decimal::ONE } else { Decimal::ZERO }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Shortest textual form of an amount, `NaN` for a non-finite one.
/// e.g. `200.00` → `"200"`, `190.50` → `"190.5"`
pub(crate) fn format_amount_plain(amount: Option<Decimal>) -> String {
    match amount {
        Some(d) => d.normalize().to_string(),
        None => "NaN".to_string(),
    }
}
