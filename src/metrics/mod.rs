//! Read-only views over a snapshot of the store.
//!
//! Each view is recomputed from `(records, budget, now)` and owns its output,
//! so the presentation layer can hold on to it between frames.

mod budget;
mod daily;
mod listing;
mod monthly;
mod overview;
mod prediction;

pub(crate) use budget::{BudgetStatus, BudgetView};
pub(crate) use daily::DailyView;
pub(crate) use listing::ListingView;
pub(crate) use monthly::{MonthlyView, MONTH_LABELS};
pub(crate) use overview::Overview;
pub(crate) use prediction::{CategoryForecast, PredictionView};

use rust_decimal::Decimal;

/// `total / count`, zero for an empty set.
fn average(total: Decimal, count: usize) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    total
        .checked_div(Decimal::from(count))
        .unwrap_or(Decimal::ZERO)
}
