use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::engine::{filter_by_period, group_by_category, group_by_year_month, total, Period};
use crate::models::ExpenseRecord;

pub(crate) const PREDICTION_WINDOW_DAYS: u32 = 90;
const WINDOW_MONTHS: u32 = 3;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CategoryForecast {
    pub(crate) category: String,
    pub(crate) monthly_average: Decimal,
    /// Same figure as `monthly_average`; shown as the next-month estimate.
    pub(crate) next_month: Decimal,
}

/// Flat extrapolation of the trailing 90 days.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PredictionView {
    pub(crate) window_total: Decimal,
    pub(crate) monthly_forecast: Decimal,
    pub(crate) projected_this_month: Decimal,
    pub(crate) daily_forecast: Decimal,
    pub(crate) trend: Vec<(String, Decimal)>,
    pub(crate) categories: Vec<CategoryForecast>,
}

impl PredictionView {
    pub(crate) fn compute(records: &[ExpenseRecord], now: NaiveDateTime) -> Self {
        let window = filter_by_period(records, Period::Days(PREDICTION_WINDOW_DAYS), now);
        let window_total = total(window.iter().copied());
        let monthly_forecast = window_total / Decimal::from(WINDOW_MONTHS);

        let categories = group_by_category(window.iter().copied())
            .into_iter()
            .map(|(category, sum)| {
                let avg = sum / Decimal::from(WINDOW_MONTHS);
                CategoryForecast {
                    category,
                    monthly_average: avg,
                    next_month: avg,
                }
            })
            .collect();

        Self {
            window_total,
            monthly_forecast,
            projected_this_month: monthly_forecast,
            daily_forecast: window_total / Decimal::from(PREDICTION_WINDOW_DAYS),
            trend: group_by_year_month(window),
            categories,
        }
    }
}
