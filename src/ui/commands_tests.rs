#![allow(clippy::unwrap_used)]

use chrono::NaiveDateTime;
use rust_decimal_macros::dec;

use super::*;
use crate::db::Database;

fn setup() -> (App, ExpenseStore) {
    let store = ExpenseStore::open(Database::open_in_memory().unwrap()).unwrap();
    let now = NaiveDateTime::parse_from_str("2026-01-25 10:00", "%Y-%m-%d %H:%M").unwrap();
    let app = App::new(&store, now);
    (app, store)
}

fn run(input: &str, app: &mut App, store: &mut ExpenseStore) {
    handle_command(input, app, store).unwrap();
}

// ── Dispatch ──────────────────────────────────────────────────

#[test]
fn test_unknown_command_suggests() {
    let (mut app, mut store) = setup();
    run("expnses", &mut app, &mut store);
    assert!(app.status_message.contains("Did you mean :expenses?"));
}

#[test]
fn test_screen_switches() {
    let (mut app, mut store) = setup();
    run("daily", &mut app, &mut store);
    assert_eq!(app.screen, Screen::Daily);
    run("p", &mut app, &mut store);
    assert_eq!(app.screen, Screen::Predictions);
    run("overview", &mut app, &mut store);
    assert_eq!(app.screen, Screen::Overview);
}

#[test]
fn test_quit() {
    let (mut app, mut store) = setup();
    run("q", &mut app, &mut store);
    assert!(!app.running);
}

#[test]
fn test_levenshtein() {
    assert_eq!(levenshtein("budget", "budget"), 0);
    assert_eq!(levenshtein("budgt", "budget"), 1);
    assert_eq!(levenshtein("", "add"), 3);
}

// ── Add ───────────────────────────────────────────────────────

#[test]
fn test_add_with_pipes() {
    let (mut app, mut store) = setup();
    run(
        "add Tea | 20.5 | 2026-01-25 | food & dining | masala chai",
        &mut app,
        &mut store,
    );
    let last = store.expenses().last().unwrap();
    assert_eq!(last.title, "Tea");
    assert_eq!(last.amount, Some(dec!(20.5)));
    assert_eq!(last.category, "Food & Dining");
    assert_eq!(last.description, "masala chai");
    assert_eq!(app.expense_count, 12);
    assert!(app.status_message.starts_with("Added: Tea"));
}

#[test]
fn test_add_today() {
    let (mut app, mut store) = setup();
    let today = app.now.date().format("%Y-%m-%d").to_string();
    run("a Bus | 15 | today | Transportation", &mut app, &mut store);
    assert_eq!(store.expenses().last().unwrap().date, today);
}

#[test]
fn test_add_rejects_bad_input_without_touching_store() {
    let (mut app, mut store) = setup();
    run("add Tea | -5 | 2026-01-25 | Food & Dining", &mut app, &mut store);
    assert_eq!(store.expenses().len(), 11);
    assert!(app.status_message.starts_with("Not added"));

    run("add Tea | 5", &mut app, &mut store);
    assert_eq!(store.expenses().len(), 11);
    assert!(app.status_message.starts_with("Usage"));
}

// ── Delete ────────────────────────────────────────────────────

#[test]
fn test_delete_requires_expenses_screen() {
    let (mut app, mut store) = setup();
    run("delete", &mut app, &mut store);
    assert_eq!(app.pending_action, None);
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn test_delete_selected_asks_then_deletes_by_id() {
    let (mut app, mut store) = setup();
    run("expenses", &mut app, &mut store);
    app.expense_index = 2;
    let target = app.selected_expense().unwrap().clone();

    run("delete", &mut app, &mut store);
    assert_eq!(app.input_mode, InputMode::Confirm);
    assert_eq!(
        app.pending_action,
        Some(PendingAction::DeleteExpense {
            id: target.id,
            title: target.title.clone(),
        })
    );
    assert_eq!(store.expenses().len(), 11);

    confirm_pending(&mut app, &mut store).unwrap();
    assert_eq!(store.position_of(target.id), None);
    assert_eq!(store.expenses().len(), 10);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.status_message, format!("Deleted: {}", target.title));
}

#[test]
fn test_delete_under_search_removes_the_shown_row() {
    let (mut app, mut store) = setup();
    run("search milk", &mut app, &mut store);
    assert_eq!(app.listing.rows.len(), 1);
    run("delete", &mut app, &mut store);
    confirm_pending(&mut app, &mut store).unwrap();
    assert!(store.expenses().iter().all(|e| e.title != "Milk"));
    assert!(store.expenses().iter().any(|e| e.title == "Fruits"));
}

#[test]
fn test_delete_by_id_argument() {
    let (mut app, mut store) = setup();
    run("delete 7", &mut app, &mut store);
    confirm_pending(&mut app, &mut store).unwrap();
    assert!(store.get(7).is_none());

    run("delete 99", &mut app, &mut store);
    assert_eq!(app.pending_action, None);
    assert_eq!(app.status_message, "No expense with id 99");
}

// ── Budget / period / filters ─────────────────────────────────

#[test]
fn test_budget_command() {
    let (mut app, mut store) = setup();
    run("budget 1500", &mut app, &mut store);
    assert_eq!(store.budget(), dec!(1500));
    assert_eq!(app.budget.budget, dec!(1500));

    run("budget zero", &mut app, &mut store);
    assert_eq!(store.budget(), dec!(1500));
    assert!(app.status_message.starts_with("Budget unchanged"));
}

#[test]
fn test_period_command() {
    let (mut app, mut store) = setup();
    run("period 7", &mut app, &mut store);
    assert_eq!(app.period, Period::Days(7));
    assert_eq!(app.overview.period, Period::Days(7));
    run("period", &mut app, &mut store);
    assert_eq!(app.period, Period::Days(30));
    run("period all", &mut app, &mut store);
    assert_eq!(app.period, Period::All);
    run("period -3", &mut app, &mut store);
    assert_eq!(app.period, Period::All);
}

#[test]
fn test_category_filter_and_clear() {
    let (mut app, mut store) = setup();
    run("category health", &mut app, &mut store);
    assert_eq!(app.category_filter, "Health");
    assert_eq!(app.listing.rows.len(), 1);
    assert_eq!(app.screen, Screen::Expenses);

    run("category", &mut app, &mut store);
    assert_eq!(app.listing.rows.len(), 11);
}

#[test]
fn test_search_combines_with_category() {
    let (mut app, mut store) = setup();
    run("category Food & Dining", &mut app, &mut store);
    run("s kg", &mut app, &mut store);
    assert_eq!(app.listing.rows.len(), 1);
    assert_eq!(app.listing.rows[0].title, "Vegitable");
}

// ── Export ────────────────────────────────────────────────────

#[test]
fn test_export_writes_file() {
    let (mut app, mut store) = setup();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    run(
        &format!("export all {}", path.display()),
        &mut app,
        &mut store,
    );
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 12);
    assert!(app.status_message.starts_with("Exported 11 expenses (all time)"));
}
