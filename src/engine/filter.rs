use chrono::{Datelike, NaiveDateTime};
use std::cmp::Reverse;

use crate::dates::{days_ago, in_calendar_month, in_calendar_year};
use crate::models::ExpenseRecord;

/// Trailing window a view is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Period {
    All,
    /// Records at most this many (fractional) days old.
    Days(u32),
}

impl Period {
    /// `"all"` or a positive whole number of days.
    pub(crate) fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        match trimmed.parse::<u32>() {
            Ok(n) if n > 0 => Some(Self::Days(n)),
            _ => None,
        }
    }

    /// Caption for the period total card.
    pub(crate) fn label(&self) -> String {
        match self {
            Self::All => "All Time Total".to_string(),
            Self::Days(n) => format!("Last {n} Days Total"),
        }
    }

    /// Periods offered by the dashboard switcher, in cycling order.
    pub(crate) fn presets() -> &'static [Period] {
        &[Self::Days(7), Self::Days(30), Self::Days(90), Self::All]
    }

    pub(crate) fn next_preset(self) -> Self {
        let presets = Self::presets();
        presets
            .iter()
            .position(|p| *p == self)
            .map(|i| presets[(i + 1) % presets.len()])
            .unwrap_or(presets[0])
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all time"),
            Self::Days(n) => write!(f, "last {n} days"),
        }
    }
}

pub(crate) fn filter_by_period(
    records: &[ExpenseRecord],
    period: Period,
    now: NaiveDateTime,
) -> Vec<&ExpenseRecord> {
    match period {
        Period::All => records.iter().collect(),
        Period::Days(n) => {
            let limit = f64::from(n);
            records
                .iter()
                .filter(|e| days_ago(&e.date, now).is_some_and(|age| age <= limit))
                .collect()
        }
    }
}

pub(crate) fn filter_this_month(records: &[ExpenseRecord], now: NaiveDateTime) -> Vec<&ExpenseRecord> {
    let (year, month0) = (now.year(), now.month0());
    records
        .iter()
        .filter(|e| in_calendar_month(&e.date, year, month0))
        .collect()
}

pub(crate) fn filter_this_year(records: &[ExpenseRecord], now: NaiveDateTime) -> Vec<&ExpenseRecord> {
    let year = now.year();
    records
        .iter()
        .filter(|e| in_calendar_year(&e.date, year))
        .collect()
}

/// Most recent first. Stable, so records sharing a date keep list order;
/// unparsable dates go last.
pub(crate) fn sort_recent_first(records: &mut [&ExpenseRecord]) {
    records.sort_by_cached_key(|e| Reverse(e.parsed_date()));
}

/// Case-insensitive text search over title and description, AND an exact
/// category match (empty category means any). Newest first.
pub(crate) fn search_and_filter<'a>(
    records: &'a [ExpenseRecord],
    term: &str,
    category: &str,
) -> Vec<&'a ExpenseRecord> {
    let term = term.to_lowercase();
    let mut matched: Vec<&ExpenseRecord> = records
        .iter()
        .filter(|e| term.is_empty() || e.search_text().contains(&term))
        .filter(|e| category.is_empty() || e.category == category)
        .collect();
    sort_recent_first(&mut matched);
    matched
}
