use chrono::{Datelike, NaiveDateTime};
use rust_decimal::Decimal;

use super::average;
use crate::engine::{filter_this_month, filter_this_year, total};
use crate::models::ExpenseRecord;

pub(crate) const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MonthlyView {
    pub(crate) year: i32,
    /// Index 0 is January; months without records are zero.
    pub(crate) months: [Decimal; 12],
    pub(crate) year_total: Decimal,
    /// Year total over the months that have records, not over twelve.
    pub(crate) month_average: Decimal,
    pub(crate) this_month_total: Decimal,
}

impl MonthlyView {
    pub(crate) fn compute(records: &[ExpenseRecord], now: NaiveDateTime) -> Self {
        let year_records = filter_this_year(records, now);
        let year_total = total(year_records.iter().copied());

        let mut months = [Decimal::ZERO; 12];
        let mut seen = [false; 12];
        for e in &year_records {
            if let Some(d) = e.parsed_date() {
                let m = d.month0() as usize;
                months[m] = months[m].saturating_add(e.amount_or_zero());
                seen[m] = true;
            }
        }
        let months_with_records = seen.iter().filter(|s| **s).count().max(1);

        Self {
            year: now.year(),
            months,
            year_total,
            month_average: average(year_total, months_with_records),
            this_month_total: total(filter_this_month(records, now)),
        }
    }
}
