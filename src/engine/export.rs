use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use std::path::Path;

use super::filter::{filter_by_period, filter_this_month, Period};
use crate::models::{format_amount_plain, ExpenseRecord};

pub(crate) const DEFAULT_EXPORT_FILE: &str = "expense-report.csv";

const CSV_HEADER: [&str; 5] = ["Title", "Category", "Date", "Amount", "Description"];

/// Which records an export covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExportRange {
    Days(u32),
    ThisMonth,
    All,
}

impl ExportRange {
    /// `"thisMonth"`, `"all"` or a positive number of trailing days.
    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "thisMonth" | "this-month" => Some(Self::ThisMonth),
            "all" => Some(Self::All),
            other => match other.parse::<u32>() {
                Ok(n) if n > 0 => Some(Self::Days(n)),
                _ => None,
            },
        }
    }
}

impl std::fmt::Display for ExportRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Days(n) => write!(f, "last {n} days"),
            Self::ThisMonth => write!(f, "this month"),
            Self::All => write!(f, "all time"),
        }
    }
}

pub(crate) fn select_for_export(
    records: &[ExpenseRecord],
    range: ExportRange,
    now: NaiveDateTime,
) -> Vec<&ExpenseRecord> {
    match range {
        ExportRange::Days(n) => filter_by_period(records, Period::Days(n), now),
        ExportRange::ThisMonth => filter_this_month(records, now),
        ExportRange::All => records.iter().collect(),
    }
}

/// Render records as CSV: fixed header, every field quoted, rows joined by
/// `\n` with no trailing newline.
pub(crate) fn to_csv<'a>(records: impl IntoIterator<Item = &'a ExpenseRecord>) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(CSV_HEADER)?;
    for e in records {
        let amount = format_amount_plain(e.amount);
        wtr.write_record([
            e.title.as_str(),
            e.category.as_str(),
            e.date.as_str(),
            amount.as_str(),
            e.description.as_str(),
        ])?;
    }

    let bytes = wtr.into_inner().context("Failed to flush CSV writer")?;
    let mut text = String::from_utf8(bytes).context("CSV output is not valid UTF-8")?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Write an export to disk and return how many records it holds.
pub(crate) fn write_csv_file(path: &Path, records: &[&ExpenseRecord]) -> Result<usize> {
    let text = to_csv(records.iter().copied())?;
    std::fs::write(path, text)
        .with_context(|| format!("Failed to write export: {}", path.display()))?;
    log::info!("exported {} records to {}", records.len(), path.display());
    Ok(records.len())
}
