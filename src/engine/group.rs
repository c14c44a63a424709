use chrono::Datelike;
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::models::ExpenseRecord;

/// Sum of amounts; non-finite amounts count as zero.
pub(crate) fn total<'a>(records: impl IntoIterator<Item = &'a ExpenseRecord>) -> Decimal {
    sum_amounts(records.into_iter().map(ExpenseRecord::amount_or_zero))
}

/// Adds without panicking; a sum past the representable range pins at
/// `Decimal::MAX` (or `MIN`).
pub(crate) fn sum_amounts(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts.into_iter().fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Accumulate sums per key, keeping keys in first-seen order.
fn sum_by_key<'a, K, F>(records: impl IntoIterator<Item = &'a ExpenseRecord>, key: F) -> Vec<(K, Decimal)>
where
    K: Eq + std::hash::Hash + Clone,
    F: Fn(&ExpenseRecord) -> Option<K>,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut sums: Vec<(K, Decimal)> = Vec::new();
    for record in records {
        let Some(k) = key(record) else { continue };
        let slot = *slots.entry(k.clone()).or_insert_with(|| {
            sums.push((k, Decimal::ZERO));
            sums.len() - 1
        });
        sums[slot].1 = sums[slot].1.saturating_add(record.amount_or_zero());
    }
    sums
}

/// Category totals in first-seen order. Only categories present appear.
pub(crate) fn group_by_category<'a>(
    records: impl IntoIterator<Item = &'a ExpenseRecord>,
) -> Vec<(String, Decimal)> {
    sum_by_key(records, |e| Some(e.category.clone()))
}

/// Totals per stored date string, oldest first. Unparsable dates sort last.
pub(crate) fn group_by_date<'a>(
    records: impl IntoIterator<Item = &'a ExpenseRecord>,
) -> Vec<(String, Decimal)> {
    let mut by_date = sum_by_key(records, |e| Some(e.date.clone()));
    by_date.sort_by_cached_key(|(date, _)| {
        let parsed = crate::dates::parse_date(date);
        (parsed.is_none(), parsed)
    });
    by_date
}

/// Totals per calendar month keyed "YYYY-M", in calendar order.
///
/// Ordered on the numeric (year, month) pair, so "2026-2" precedes
/// "2026-10". Records with unparsable dates are skipped.
pub(crate) fn group_by_year_month<'a>(
    records: impl IntoIterator<Item = &'a ExpenseRecord>,
) -> Vec<(String, Decimal)> {
    let mut by_month = sum_by_key(records, |e| e.parsed_date().map(|d| (d.year(), d.month())));
    by_month.sort_by_key(|((year, month), _)| (*year, *month));
    by_month
        .into_iter()
        .map(|((year, month), sum)| (format!("{year}-{month}"), sum))
        .collect()
}
