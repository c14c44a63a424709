use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashSet;

use crate::models::{coerce_amount, parse_decimal, ExpenseRecord};

#[derive(Serialize)]
struct StoredExpense<'a> {
    id: u64,
    title: &'a str,
    category: &'a str,
    date: &'a str,
    amount: Option<f64>,
    description: &'a str,
}

/// Serialize the full list as one JSON array. A non-finite amount is written
/// as `null`.
pub(crate) fn encode_expenses(records: &[ExpenseRecord]) -> serde_json::Result<String> {
    let stored: Vec<StoredExpense<'_>> = records
        .iter()
        .map(|e| StoredExpense {
            id: e.id,
            title: &e.title,
            category: &e.category,
            date: &e.date,
            amount: e.amount.and_then(|a| a.to_f64()),
            description: &e.description,
        })
        .collect();
    serde_json::to_string(&stored)
}

/// Parse a stored expense list.
///
/// Returns `None` when the blob is not a JSON array. Elements that are not
/// objects are dropped. Records without a usable id, or whose id repeats an
/// earlier one, get fresh ids above the largest id seen.
pub(crate) fn decode_expenses(raw: &str) -> Option<Vec<ExpenseRecord>> {
    let Value::Array(items) = serde_json::from_str::<Value>(raw).ok()? else {
        return None;
    };

    let mut decoded: Vec<(Option<u64>, ExpenseRecord)> = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let Value::Object(fields) = item else {
            log::warn!("skipping stored expense #{index}: not an object");
            continue;
        };
        decoded.push((fields.get("id").and_then(Value::as_u64), record_from(fields)));
    }

    let mut next_id = decoded
        .iter()
        .filter_map(|(id, _)| *id)
        .max()
        .unwrap_or(0)
        + 1;
    let mut taken = HashSet::new();
    let records = decoded
        .into_iter()
        .map(|(id, mut record)| {
            record.id = match id {
                Some(id) if taken.insert(id) => id,
                _ => {
                    let fresh = next_id;
                    next_id += 1;
                    taken.insert(fresh);
                    fresh
                }
            };
            record
        })
        .collect();
    Some(records)
}

fn record_from(fields: &Map<String, Value>) -> ExpenseRecord {
    ExpenseRecord {
        id: 0,
        title: text_field(fields, "title"),
        category: text_field(fields, "category"),
        date: text_field(fields, "date"),
        amount: coerce_amount(fields.get("amount")),
        description: text_field(fields, "description"),
    }
}

fn text_field(fields: &Map<String, Value>, key: &str) -> String {
    match fields.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

pub(crate) fn encode_budget(budget: Decimal) -> String {
    budget.normalize().to_string()
}

/// Parse a stored budget. Anything that is not a non-negative number is `None`.
pub(crate) fn decode_budget(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    let value = parse_decimal(raw).or_else(|| match serde_json::from_str::<Value>(raw).ok()? {
        Value::String(s) => parse_decimal(&s),
        _ => None,
    })?;
    (value >= Decimal::ZERO).then_some(value)
}
