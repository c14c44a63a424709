use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use super::average;
use crate::engine::{filter_by_period, group_by_date, sum_amounts, Period};
use crate::models::ExpenseRecord;

pub(crate) const DAILY_WINDOW_DAYS: u32 = 30;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DailyView {
    /// One entry per date that has at least one record, oldest first.
    pub(crate) days: Vec<(String, Decimal)>,
    pub(crate) total: Decimal,
    pub(crate) active_days: usize,
    pub(crate) average: Decimal,
    pub(crate) highest_amount: Decimal,
    pub(crate) highest_date: Option<String>,
}

impl DailyView {
    pub(crate) fn compute(records: &[ExpenseRecord], now: NaiveDateTime) -> Self {
        let window = filter_by_period(records, Period::Days(DAILY_WINDOW_DAYS), now);
        let days = group_by_date(window);
        let day_total = sum_amounts(days.iter().map(|(_, v)| *v));

        // Earliest day wins a tie: only a strictly larger value replaces it.
        let mut highest_amount = Decimal::ZERO;
        let mut highest_date = None;
        for (date, amount) in &days {
            if *amount > highest_amount {
                highest_amount = *amount;
                highest_date = Some(date.clone());
            }
        }

        Self {
            active_days: days.len(),
            average: average(day_total, days.len()),
            total: day_total,
            highest_amount,
            highest_date,
            days,
        }
    }
}
