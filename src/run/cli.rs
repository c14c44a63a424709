use anyhow::Result;
use std::path::PathBuf;

use crate::engine::{
    select_for_export, to_csv, write_csv_file, ExportRange, Period, DEFAULT_EXPORT_FILE,
};
use crate::metrics::{BudgetView, DailyView, ListingView, MonthlyView, Overview, PredictionView, MONTH_LABELS};
use crate::models::{format_amount_plain, parse_budget_input, ExpenseDraft, CONVENTIONAL_CATEGORIES};
use crate::store::ExpenseStore;
use crate::ui::util::{format_money, format_money_opt, format_percent, truncate};

pub(crate) fn as_cli(args: &[String], store: &mut ExpenseStore) -> Result<()> {
    match args[1].as_str() {
        "summary" | "s" => cli_summary(&args[2..], store),
        "daily" => cli_daily(store),
        "monthly" => cli_monthly(store),
        "budget" => cli_budget(&args[2..], store),
        "predict" => cli_predict(store),
        "list" | "ls" => cli_list(&args[2..], store),
        "add" => cli_add(&args[2..], store),
        "delete" | "rm" => cli_delete(&args[2..], store),
        "export" => cli_export(&args[2..], store),
        "reset" => cli_reset(store),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("expenseflow {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("ExpenseFlow - local-only expense tracker");
    println!();
    println!("Usage: expenseflow [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  summary [N|all]               Totals for the last N days (default 30)");
    println!("  daily                         Per-day totals over the last 30 days");
    println!("  monthly                       Per-month totals for this year");
    println!("  budget [amount]               Show this month's budget use, or set the budget");
    println!("  predict                       Forecast from the last 90 days");
    println!("  list                          List expenses, newest first");
    println!("    --search <text>             Match title or description");
    println!("    --category <name>           Exact category");
    println!("  add                           Record an expense");
    println!("    --title <t> --amount <n> --date <YYYY-MM-DD|today> --category <c>");
    println!("    [--description <d>]");
    println!("  delete <id>                   Delete an expense by id");
    println!("  export [path|-]               Write a CSV report (default {DEFAULT_EXPORT_FILE}, - for stdout)");
    println!("    --period <N|thisMonth|all>  Records to include (default all)");
    println!("  reset                         Discard stored data and restore the examples");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Categories: {}", CONVENTIONAL_CATEGORIES.join(", "));
    println!();
    println!("Environment:");
    println!("  EXPENSEFLOW_DB                Database file");
    println!("  EXPENSEFLOW_DATA_DIR          Directory holding expenseflow.db");
    println!("  RUST_LOG                      Log filter, e.g. debug");
}

fn flag<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == name)
        .map(|w| w[1].as_str())
}

/// First argument that is neither a `--flag` nor a flag's value.
fn positional(args: &[String]) -> Option<&str> {
    let mut rest = args.iter();
    while let Some(arg) = rest.next() {
        if arg.starts_with("--") {
            rest.next();
        } else {
            return Some(arg.as_str());
        }
    }
    None
}

fn cli_summary(args: &[String], store: &ExpenseStore) -> Result<()> {
    let period = match args.first() {
        Some(raw) => Period::parse(raw)
            .ok_or_else(|| anyhow::anyhow!("Period must be a number of days or 'all', got '{raw}'"))?,
        None => Period::Days(30),
    };
    let now = crate::dates::now();
    let o = Overview::compute(store.expenses(), period, now);
    let b = BudgetView::compute(store.expenses(), store.budget(), now);

    println!("ExpenseFlow - {period}");
    println!("{}", "─".repeat(44));
    println!("  {:<22}{}", o.label, format_money(o.total));
    println!("  {:<22}{}", "Expenses", o.count);
    println!("  {:<22}{}", "Average", format_money(o.average));
    println!("  {:<22}{}", "Categories", o.category_count);
    println!("  {:<22}{}", "This month", format_money(o.month_total));
    println!(
        "  {:<22}{} of {} ({})",
        "Budget",
        format_percent(b.percentage),
        format_money(b.budget),
        b.status
    );

    if !o.by_category.is_empty() {
        println!();
        println!("By category:");
        for (name, amount) in &o.by_category {
            println!("  {name:<24} {}", format_money(*amount));
        }
    }

    if !o.recent.is_empty() {
        println!();
        println!("Recent:");
        for e in &o.recent {
            println!(
                "  {:<12} {:<24} {}",
                e.date,
                truncate(&e.title, 24),
                format_money_opt(e.amount)
            );
        }
    }
    Ok(())
}

fn cli_daily(store: &ExpenseStore) -> Result<()> {
    let d = DailyView::compute(store.expenses(), crate::dates::now());
    if d.days.is_empty() {
        println!("No expenses in the last 30 days");
        return Ok(());
    }
    for (date, amount) in &d.days {
        println!("  {:<14} {}", crate::dates::format_date(date), format_money(*amount));
    }
    println!("{}", "─".repeat(32));
    println!("  Active days:   {}", d.active_days);
    println!("  Daily average: {}", format_money(d.average));
    if let Some(date) = &d.highest_date {
        println!(
            "  Highest day:   {} ({})",
            format_money(d.highest_amount),
            crate::dates::format_date(date)
        );
    }
    Ok(())
}

fn cli_monthly(store: &ExpenseStore) -> Result<()> {
    let m = MonthlyView::compute(store.expenses(), crate::dates::now());
    println!("{}", m.year);
    for (label, amount) in MONTH_LABELS.iter().zip(m.months.iter()) {
        println!("  {label:<6} {}", format_money(*amount));
    }
    println!("{}", "─".repeat(32));
    println!("  Year total:    {}", format_money(m.year_total));
    println!("  Month average: {}", format_money(m.month_average));
    println!("  This month:    {}", format_money(m.this_month_total));
    Ok(())
}

fn cli_budget(args: &[String], store: &mut ExpenseStore) -> Result<()> {
    if let Some(raw) = args.first() {
        let budget = parse_budget_input(raw)?;
        store.set_budget(budget)?;
        println!("Budget set to {}", format_money(budget));
    }
    let b = BudgetView::compute(store.expenses(), store.budget(), crate::dates::now());
    println!("  Budget:  {}", format_money(b.budget));
    println!("  Spent:   {}", format_money(b.spent));
    println!("  Used:    {}", format_percent(b.percentage));
    println!("  Status:  {}", b.status);
    Ok(())
}

fn cli_predict(store: &ExpenseStore) -> Result<()> {
    let p = PredictionView::compute(store.expenses(), crate::dates::now());
    println!("Based on the last 90 days ({} spent)", format_money(p.window_total));
    println!("{}", "─".repeat(44));
    println!("  Next month:        {}", format_money(p.monthly_forecast));
    println!("  Projected (month): {}", format_money(p.projected_this_month));
    println!("  Per day:           {}", format_money(p.daily_forecast));

    if !p.trend.is_empty() {
        println!();
        println!("Monthly trend:");
        for (month, amount) in &p.trend {
            println!("  {month:<10} {}", format_money(*amount));
        }
    }
    if !p.categories.is_empty() {
        println!();
        println!("  {:<24} {:>14} {:>14}", "Category", "Monthly avg", "Next month");
        for c in &p.categories {
            println!(
                "  {:<24} {:>14} {:>14}",
                c.category,
                format_money(c.monthly_average),
                format_money(c.next_month)
            );
        }
    }
    Ok(())
}

fn cli_list(args: &[String], store: &ExpenseStore) -> Result<()> {
    let term = flag(args, "--search").unwrap_or("");
    let category = flag(args, "--category").unwrap_or("");
    let listing = ListingView::compute(store.expenses(), term, category);
    if listing.rows.is_empty() {
        println!("No expenses found");
        return Ok(());
    }

    println!(
        "{:<5} {:<12} {:<22} {:<18} {:>12}  Description",
        "ID", "Date", "Title", "Category", "Amount"
    );
    println!("{}", "─".repeat(90));
    for e in &listing.rows {
        println!(
            "{:<5} {:<12} {:<22} {:<18} {:>12}  {}",
            e.id,
            e.date,
            truncate(&e.title, 22),
            truncate(&e.category, 18),
            format_money_opt(e.amount),
            e.description
        );
    }
    Ok(())
}

fn cli_add(args: &[String], store: &mut ExpenseStore) -> Result<()> {
    let date = match flag(args, "--date") {
        Some("today") | None => crate::dates::now().date().format("%Y-%m-%d").to_string(),
        Some(d) => d.to_string(),
    };
    let draft = ExpenseDraft {
        title: flag(args, "--title").unwrap_or_default().to_string(),
        amount: flag(args, "--amount").unwrap_or_default().to_string(),
        date,
        category: flag(args, "--category").unwrap_or_default().to_string(),
        description: flag(args, "--description").unwrap_or_default().to_string(),
    };
    let expense = draft.validate()?;
    let summary = format!(
        "{} ({}, {}) {}",
        expense.title,
        expense.category,
        expense.date,
        format_amount_plain(Some(expense.amount))
    );
    let id = store.add(expense)?;
    println!("Added #{id}: {summary}");
    Ok(())
}

fn cli_delete(args: &[String], store: &mut ExpenseStore) -> Result<()> {
    let raw = args
        .first()
        .ok_or_else(|| anyhow::anyhow!("Usage: expenseflow delete <id>"))?;
    let id: u64 = raw
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid id: {raw}"))?;
    match store.delete_by_id(id)? {
        Some(removed) => println!("Deleted #{id}: {}", removed.title),
        None => println!("No expense with id {id}"),
    }
    Ok(())
}

fn cli_export(args: &[String], store: &ExpenseStore) -> Result<()> {
    let range = match flag(args, "--period") {
        Some(raw) => ExportRange::parse(raw)
            .ok_or_else(|| anyhow::anyhow!("Period must be N, 'thisMonth' or 'all', got '{raw}'"))?,
        None => ExportRange::All,
    };

    let selected = select_for_export(store.expenses(), range, crate::dates::now());
    let target = positional(args);
    if target == Some("-") {
        println!("{}", to_csv(selected)?);
        return Ok(());
    }

    let output_path = target
        .map(|a| PathBuf::from(shellexpand(a)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE));

    let count = write_csv_file(&output_path, &selected)?;
    println!("Exported {count} expenses ({range}) to {}", output_path.display());
    Ok(())
}

fn cli_reset(store: &mut ExpenseStore) -> Result<()> {
    store.reset()?;
    println!("Stored data cleared; {} example expenses restored", store.expenses().len());
    Ok(())
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_positional_skips_flags_and_their_values() {
        assert_eq!(positional(&args(&["--period", "7", "out.csv"])), Some("out.csv"));
        assert_eq!(positional(&args(&["out.csv", "--period", "7"])), Some("out.csv"));
        assert_eq!(positional(&args(&["--period", "7", "-"])), Some("-"));
        assert_eq!(positional(&args(&["--period", "thisMonth"])), None);
        assert_eq!(positional(&args(&[])), None);
    }

    #[test]
    fn test_export_after_period_flag_writes_named_file() {
        let store = ExpenseStore::open(crate::db::Database::open_in_memory().unwrap()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("week.csv");
        let path_arg = path.display().to_string();

        cli_export(&args(&["--period", "all", &path_arg]), &store).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 12);
    }
}
