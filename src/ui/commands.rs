use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::LazyLock;

use super::app::{App, InputMode, PendingAction, Screen};
use crate::engine::{select_for_export, write_csv_file, ExportRange, Period, DEFAULT_EXPORT_FILE};
use crate::models::{
    canonical_category, parse_budget_input, ExpenseDraft, ValidationError, CONVENTIONAL_CATEGORIES,
};
use crate::store::ExpenseStore;
use crate::ui::util::format_money;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut ExpenseStore) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit ExpenseFlow", cmd_quit, r);
    register_command!("quit", "Quit ExpenseFlow", cmd_quit, r);
    register_command!("o", "Go to Overview", cmd_overview, r);
    register_command!("overview", "Go to Overview", cmd_overview, r);
    register_command!("daily", "Go to Daily", cmd_daily, r);
    register_command!("monthly", "Go to Monthly", cmd_monthly, r);
    register_command!("p", "Go to Predictions", cmd_predictions, r);
    register_command!("predictions", "Go to Predictions", cmd_predictions, r);
    register_command!("e", "Go to Expenses", cmd_expenses, r);
    register_command!("expenses", "Go to Expenses", cmd_expenses, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "add",
        "Add expense (e.g. :add Tea | 20 | today | Food & Dining | note)",
        cmd_add,
        r
    );
    register_command!("a", "Add expense", cmd_add, r);
    register_command!(
        "delete",
        "Delete selected expense, or by id (e.g. :delete 12)",
        cmd_delete,
        r
    );
    register_command!(
        "budget",
        "Set monthly budget (e.g. :budget 15000)",
        cmd_budget,
        r
    );
    register_command!(
        "period",
        "Overview period: days or all (e.g. :period 7)",
        cmd_period,
        r
    );
    register_command!(
        "category",
        "Filter expenses by category (empty clears)",
        cmd_category,
        r
    );
    register_command!(
        "search",
        "Search expenses (e.g. :search coffee)",
        cmd_search,
        r
    );
    register_command!("s", "Search expenses (e.g. :s coffee)", cmd_search, r);
    register_command!(
        "export",
        "Export CSV (e.g. :export thisMonth ~/report.csv)",
        cmd_export,
        r
    );

    r
});

pub(crate) fn handle_command(
    input: &str,
    app: &mut App,
    store: &mut ExpenseStore,
) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, store)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

/// Carry out whatever the user just confirmed.
pub(crate) fn confirm_pending(app: &mut App, store: &mut ExpenseStore) -> anyhow::Result<()> {
    if let Some(action) = app.pending_action.take() {
        match action {
            PendingAction::DeleteExpense { id, title } => match store.delete_by_id(id)? {
                Some(_) => {
                    app.refresh_all(store);
                    app.set_status(format!("Deleted: {title}"));
                }
                None => app.set_status(format!("'{title}' no longer exists")),
            },
        }
    }
    app.input_mode = InputMode::Normal;
    app.confirm_message.clear();
    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _store: &mut ExpenseStore) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_overview(_args: &str, app: &mut App, _store: &mut ExpenseStore) -> anyhow::Result<()> {
    app.screen = Screen::Overview;
    Ok(())
}

fn cmd_daily(_args: &str, app: &mut App, _store: &mut ExpenseStore) -> anyhow::Result<()> {
    app.screen = Screen::Daily;
    Ok(())
}

fn cmd_monthly(_args: &str, app: &mut App, _store: &mut ExpenseStore) -> anyhow::Result<()> {
    app.screen = Screen::Monthly;
    Ok(())
}

fn cmd_predictions(_args: &str, app: &mut App, _store: &mut ExpenseStore) -> anyhow::Result<()> {
    app.screen = Screen::Predictions;
    Ok(())
}

fn cmd_expenses(_args: &str, app: &mut App, _store: &mut ExpenseStore) -> anyhow::Result<()> {
    app.screen = Screen::Expenses;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _store: &mut ExpenseStore) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_add(args: &str, app: &mut App, store: &mut ExpenseStore) -> anyhow::Result<()> {
    let fields: Vec<&str> = args.split('|').map(str::trim).collect();
    if fields.len() < 4 {
        app.set_status("Usage: :add <title> | <amount> | <YYYY-MM-DD|today> | <category> [| description]");
        return Ok(());
    }

    let date = if fields[2].eq_ignore_ascii_case("today") {
        app.now.date().format("%Y-%m-%d").to_string()
    } else {
        fields[2].to_string()
    };
    let draft = ExpenseDraft {
        title: fields[0].to_string(),
        amount: fields[1].to_string(),
        date,
        category: fields[3].to_string(),
        description: fields.get(4..).map(|rest| rest.join(" | ")).unwrap_or_default(),
    };

    // A rejected draft leaves the store untouched.
    let expense = match draft.validate() {
        Ok(expense) => expense,
        Err(ValidationError::MissingCategory) => {
            app.set_status(format!(
                "Not added: category is required ({})",
                CONVENTIONAL_CATEGORIES.join(", ")
            ));
            return Ok(());
        }
        Err(e) => {
            app.set_status(format!("Not added: {e}"));
            return Ok(());
        }
    };
    let title = expense.title.clone();
    let amount = expense.amount;
    store.add(expense)?;
    app.refresh_all(store);
    app.set_status(format!("Added: {title} ({})", format_money(amount)));
    Ok(())
}

fn cmd_delete(args: &str, app: &mut App, store: &mut ExpenseStore) -> anyhow::Result<()> {
    if args.is_empty() {
        if app.screen != Screen::Expenses {
            app.set_status("Navigate to Expenses and select one first, or :delete <id>");
            return Ok(());
        }
        match app.selected_expense().cloned() {
            Some(expense) => app.request_delete(&expense),
            None => app.set_status("No expense selected"),
        }
        return Ok(());
    }

    let Ok(id) = args.parse::<u64>() else {
        app.set_status(format!("Invalid id: {args}"));
        return Ok(());
    };
    match store.get(id).cloned() {
        Some(expense) => app.request_delete(&expense),
        None => app.set_status(format!("No expense with id {id}")),
    }
    Ok(())
}

fn cmd_budget(args: &str, app: &mut App, store: &mut ExpenseStore) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status(format!(
            "Budget: {} (usage: :budget <amount>)",
            format_money(store.budget())
        ));
        return Ok(());
    }
    match parse_budget_input(args) {
        Ok(budget) => {
            store.set_budget(budget)?;
            app.refresh_all(store);
            app.set_status(format!("Budget set to {}", format_money(budget)));
        }
        Err(e) => app.set_status(format!("Budget unchanged: {e}")),
    }
    Ok(())
}

fn cmd_period(args: &str, app: &mut App, store: &mut ExpenseStore) -> anyhow::Result<()> {
    let period = if args.is_empty() {
        app.period.next_preset()
    } else {
        match Period::parse(args) {
            Some(p) => p,
            None => {
                app.set_status("Usage: :period <days|all>");
                return Ok(());
            }
        }
    };
    app.period = period;
    app.refresh_all(store);
    app.set_status(format!("Showing {period}"));
    Ok(())
}

fn cmd_category(args: &str, app: &mut App, store: &mut ExpenseStore) -> anyhow::Result<()> {
    app.category_filter = if args.is_empty() {
        String::new()
    } else {
        canonical_category(args)
    };
    app.screen = Screen::Expenses;
    app.expense_index = 0;
    app.expense_scroll = 0;
    app.refresh_listing(store);
    if app.category_filter.is_empty() {
        app.set_status("Showing all categories");
    } else {
        app.set_status(format!(
            "Category: {} ({} expenses)",
            app.category_filter,
            app.listing.rows.len()
        ));
    }
    Ok(())
}

fn cmd_search(args: &str, app: &mut App, store: &mut ExpenseStore) -> anyhow::Result<()> {
    app.search_input = args.to_string();
    app.screen = Screen::Expenses;
    app.expense_index = 0;
    app.expense_scroll = 0;
    app.refresh_listing(store);
    app.set_status(format!("{} matches", app.listing.rows.len()));
    Ok(())
}

/// `:export [range] [path]`; the range defaults to the overview period.
fn cmd_export(args: &str, app: &mut App, store: &mut ExpenseStore) -> anyhow::Result<()> {
    let mut parts = args.splitn(2, ' ');
    let first = parts.next().unwrap_or("");
    let (range, path) = match ExportRange::parse(first) {
        Some(range) => (range, parts.next().unwrap_or("").trim()),
        None => (period_range(app.period), args),
    };
    let path = if path.is_empty() {
        PathBuf::from(DEFAULT_EXPORT_FILE)
    } else {
        PathBuf::from(crate::run::shellexpand(path))
    };

    let selected = select_for_export(store.expenses(), range, app.now);
    let count = write_csv_file(&path, &selected)?;
    app.set_status(format!(
        "Exported {count} expenses ({range}) to {}",
        path.display()
    ));
    Ok(())
}

fn period_range(period: Period) -> ExportRange {
    match period {
        Period::All => ExportRange::All,
        Period::Days(n) => ExportRange::Days(n),
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
