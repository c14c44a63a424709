use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::collections::HashSet;

use super::average;
use crate::engine::{filter_by_period, filter_this_month, group_by_category, sort_recent_first, total, Period};
use crate::models::ExpenseRecord;

/// How many rows the "recent expenses" panel shows.
pub(crate) const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Overview {
    pub(crate) period: Period,
    pub(crate) label: String,
    pub(crate) total: Decimal,
    pub(crate) count: usize,
    pub(crate) average: Decimal,
    pub(crate) month_total: Decimal,
    pub(crate) category_count: usize,
    pub(crate) recent: Vec<ExpenseRecord>,
    pub(crate) by_category: Vec<(String, Decimal)>,
}

impl Overview {
    pub(crate) fn compute(records: &[ExpenseRecord], period: Period, now: NaiveDateTime) -> Self {
        let in_period = filter_by_period(records, period, now);
        let period_total = total(in_period.iter().copied());
        let count = in_period.len();
        let categories: HashSet<&str> = in_period.iter().map(|e| e.category.as_str()).collect();

        let mut recent = in_period.clone();
        sort_recent_first(&mut recent);

        Self {
            period,
            label: period.label(),
            total: period_total,
            count,
            average: average(period_total, count),
            month_total: total(filter_this_month(records, now)),
            category_count: categories.len(),
            recent: recent.into_iter().take(RECENT_LIMIT).cloned().collect(),
            by_category: group_by_category(in_period),
        }
    }
}
