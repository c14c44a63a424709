use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::engine::{filter_this_month, total};
use crate::models::ExpenseRecord;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BudgetStatus {
    OnTrack,
    OverBudget,
}

impl BudgetStatus {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::OnTrack => "On track",
            Self::OverBudget => "Over budget",
        }
    }
}

impl std::fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BudgetView {
    pub(crate) budget: Decimal,
    pub(crate) spent: Decimal,
    /// Share of the budget used this month, capped at 100.
    pub(crate) percentage: Decimal,
    pub(crate) status: BudgetStatus,
}

impl BudgetView {
    pub(crate) fn compute(records: &[ExpenseRecord], budget: Decimal, now: NaiveDateTime) -> Self {
        let spent = total(filter_this_month(records, now));
        let percentage = used_percentage(spent, budget);
        let status = if percentage >= HUNDRED {
            BudgetStatus::OverBudget
        } else {
            BudgetStatus::OnTrack
        };

        Self {
            budget,
            spent,
            percentage,
            status,
        }
    }
}

fn used_percentage(spent: Decimal, budget: Decimal) -> Decimal {
    if spent.is_zero() || budget.is_zero() {
        return Decimal::ZERO;
    }
    // Only a ratio far past the cap can overflow.
    let overflow = if spent.is_sign_negative() == budget.is_sign_negative() {
        HUNDRED
    } else {
        Decimal::MIN
    };
    spent
        .checked_div(budget)
        .and_then(|ratio| ratio.checked_mul(HUNDRED))
        .unwrap_or(overflow)
        .min(HUNDRED)
}
