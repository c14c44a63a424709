#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::codec::{decode_budget, decode_expenses, encode_budget, encode_expenses};
use super::*;
use crate::models::ExpenseDraft;

fn draft(title: &str, amount: &str, date: &str, category: &str) -> NewExpense {
    ExpenseDraft {
        title: title.into(),
        amount: amount.into(),
        date: date.into(),
        category: category.into(),
        description: String::new(),
    }
    .validate()
    .unwrap()
}

fn store_with(expenses: Option<&str>, budget: Option<&str>) -> ExpenseStore {
    let db = Database::open_in_memory().unwrap();
    if let Some(raw) = expenses {
        db.set_value(EXPENSES_KEY, raw).unwrap();
    }
    if let Some(raw) = budget {
        db.set_value(BUDGET_KEY, raw).unwrap();
    }
    ExpenseStore::open(db).unwrap()
}

// ── Load ──────────────────────────────────────────────────────

#[test]
fn test_empty_storage_uses_seed_and_default_budget() {
    let store = store_with(None, None);
    assert_eq!(store.expenses().len(), 11);
    assert_eq!(store.budget(), dec!(10000));
}

#[test]
fn test_load_does_not_write() {
    let store = store_with(None, None);
    assert_eq!(store.db().get_value(EXPENSES_KEY).unwrap(), None);
    assert_eq!(store.db().get_value(BUDGET_KEY).unwrap(), None);
}

#[test]
fn test_malformed_expenses_fall_back_to_seed() {
    let store = store_with(Some("{not json"), None);
    assert_eq!(store.expenses(), default_expenses().as_slice());

    let store = store_with(Some(r#"{"title":"x"}"#), None);
    assert_eq!(store.expenses().len(), 11);
}

#[test]
fn test_stored_empty_list_stays_empty() {
    let store = store_with(Some("[]"), None);
    assert!(store.expenses().is_empty());
}

#[test]
fn test_malformed_budget_falls_back() {
    assert_eq!(store_with(None, Some("lots")).budget(), dec!(10000));
    assert_eq!(store_with(None, Some("-5")).budget(), dec!(10000));
    assert_eq!(store_with(None, Some("2500")).budget(), dec!(2500));
    assert_eq!(store_with(None, Some("\"750\"")).budget(), dec!(750));
}

#[test]
fn test_coerces_loose_records() {
    let raw = r#"[
        {"title":"A","category":"Food & Dining","date":"2026-01-20","amount":"12.5"},
        {"title":"B","category":"Health","date":"2026-01-21","amount":null},
        {"title":"C","category":"Health","date":"2026-01-21"},
        {"title":"D","category":"Health","date":"2026-01-21","amount":""},
        {"title":"E","category":"Health","date":"2026-01-21","amount":true},
        42,
        "stray"
    ]"#;
    let store = store_with(Some(raw), None);
    let amounts: Vec<Option<Decimal>> = store.expenses().iter().map(|e| e.amount).collect();
    assert_eq!(
        amounts,
        vec![Some(dec!(12.5)), None, None, Some(dec!(0)), Some(dec!(1))]
    );
    assert_eq!(store.expenses()[0].description, "");
}

// ── Ids ───────────────────────────────────────────────────────

#[test]
fn test_missing_and_duplicate_ids_are_reassigned() {
    let raw = r#"[
        {"id":4,"title":"A","category":"X","date":"2026-01-01","amount":1},
        {"title":"B","category":"X","date":"2026-01-01","amount":1},
        {"id":4,"title":"C","category":"X","date":"2026-01-01","amount":1},
        {"id":2,"title":"D","category":"X","date":"2026-01-01","amount":1}
    ]"#;
    let records = decode_expenses(raw).unwrap();
    let ids: Vec<u64> = records.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![4, 5, 6, 2]);
}

#[test]
fn test_add_assigns_next_id() {
    let mut store = store_with(None, None);
    let id = store.add(draft("Tea", "20", "2026-01-25", "food & dining")).unwrap();
    assert_eq!(id, 12);
    let last = store.expenses().last().unwrap();
    assert_eq!(last.id, 12);
    assert_eq!(last.category, "Food & Dining");
    assert_eq!(store.position_of(12), Some(11));
}

// ── Mutations ─────────────────────────────────────────────────

#[test]
fn test_add_persists_full_list() {
    let mut store = store_with(Some("[]"), None);
    store.add(draft("Tea", "20", "2026-01-25", "Food & Dining")).unwrap();
    store.add(draft("Bus", "15.5", "2026-01-25", "Transportation")).unwrap();

    let raw = store.db().get_value(EXPENSES_KEY).unwrap().unwrap();
    let reloaded = decode_expenses(&raw).unwrap();
    assert_eq!(reloaded, store.expenses());
    assert_eq!(reloaded[1].amount, Some(dec!(15.5)));
}

#[test]
fn test_delete_at_removes_and_persists() {
    let mut store = store_with(None, None);
    let removed = store.delete_at(0).unwrap().unwrap();
    assert_eq!(removed.title, "Fruits");
    assert_eq!(store.expenses().len(), 10);

    let raw = store.db().get_value(EXPENSES_KEY).unwrap().unwrap();
    assert_eq!(decode_expenses(&raw).unwrap().len(), 10);
}

#[test]
fn test_delete_out_of_range_is_noop() {
    let mut store = store_with(None, None);
    assert_eq!(store.delete_at(99).unwrap(), None);
    assert_eq!(store.expenses().len(), 11);
    assert_eq!(store.db().get_value(EXPENSES_KEY).unwrap(), None);
}

#[test]
fn test_delete_by_id() {
    let mut store = store_with(None, None);
    let removed = store.delete_by_id(7).unwrap().unwrap();
    assert_eq!(removed.title, "Shirts");
    assert_eq!(store.position_of(7), None);
    assert_eq!(store.get(8).unwrap().title, "Vegitable");
    assert_eq!(store.delete_by_id(7).unwrap(), None);
}

#[test]
fn test_ids_not_reused_after_delete() {
    let mut store = store_with(None, None);
    store.delete_by_id(11).unwrap();
    let id = store.add(draft("Pen", "10", "2026-01-25", "Education")).unwrap();
    assert_eq!(id, 12);
}

#[test]
fn test_set_budget_persists() {
    let mut store = store_with(None, None);
    store.set_budget(dec!(2500.50)).unwrap();
    assert_eq!(store.budget(), dec!(2500.50));
    assert_eq!(
        store.db().get_value(BUDGET_KEY).unwrap().as_deref(),
        Some("2500.5")
    );
}

#[test]
fn test_reset_restores_seed() {
    let mut store = store_with(Some("[]"), Some("100"));
    store.reset().unwrap();
    assert_eq!(store.expenses().len(), 11);
    assert_eq!(store.budget(), dec!(10000));
    assert_eq!(store.db().get_value(EXPENSES_KEY).unwrap(), None);
}

// ── Codec ─────────────────────────────────────────────────────

#[test]
fn test_nan_amount_written_as_null() {
    let mut records = default_expenses();
    records.truncate(1);
    records[0].amount = None;
    let json = encode_expenses(&records).unwrap();
    assert!(json.contains(r#""amount":null"#));
    assert_eq!(decode_expenses(&json).unwrap()[0].amount, None);
}

#[test]
fn test_amount_written_as_number() {
    let records = vec![draft("Tea", "190.50", "2026-01-24", "Food & Dining").into_record(1)];
    let json = encode_expenses(&records).unwrap();
    assert!(json.contains(r#""amount":190.5"#));
}

#[test]
fn test_stored_amounts_past_decimal_range_still_load_and_sum() {
    let raw = r#"[
        {"id":1,"title":"A","amount":5e28,"date":"2026-01-20","category":"Other"},
        {"id":2,"title":"B","amount":5e28,"date":"2026-01-21","category":"Other"}
    ]"#;
    let store = store_with(Some(raw), None);
    assert_eq!(store.expenses().len(), 2);
    let o = crate::metrics::Overview::compute(
        store.expenses(),
        crate::engine::Period::All,
        crate::dates::now(),
    );
    assert_eq!(o.total, Decimal::MAX);
}

#[test]
fn test_fifteen_significant_digits_survive_reload() {
    let records = vec![draft("Car", "1234567890123.45", "2026-01-24", "Other").into_record(1)];
    let json = encode_expenses(&records).unwrap();
    assert_eq!(
        decode_expenses(&json).unwrap()[0].amount,
        Some(dec!(1234567890123.45))
    );
}

#[test]
fn test_budget_codec() {
    assert_eq!(encode_budget(dec!(10000)), "10000");
    assert_eq!(decode_budget(" 42 "), Some(dec!(42)));
    assert_eq!(decode_budget("null"), None);
    assert_eq!(decode_budget(""), None);
}
