use rust_decimal::Decimal;

use super::ExpenseRecord;

const SEED: &[(&str, &str, &str, i64, &str)] = &[
    ("Fruits", "Food & Dining", "2026-01-24", 200, "12 bananas and 4 apples"),
    ("Biryani", "Food & Dining", "2026-01-24", 190, "1 single pack"),
    ("Netflix", "Subscriptions", "2026-01-23", 149, "1 month plan"),
    ("Dolo 650", "Health", "2026-01-23", 69, ""),
    ("Rapido", "Transportation", "2026-01-23", 140, "To college"),
    ("Bike", "Travel", "2026-01-22", 120, "Taxi"),
    ("Shirts", "Shopping", "2026-01-21", 1269, "2 jackets"),
    ("Vegitable", "Food & Dining", "2026-01-20", 250, "1kg tomato, 1kg potato"),
    ("Milk", "Food & Dining", "2026-01-20", 50, ""),
    ("Movie", "Entertainment", "2026-01-15", 849, "3 tickets"),
    ("Car toys", "Gifts & Donations", "2026-01-14", 450, ""),
];

/// Example data shown when nothing usable is stored yet.
pub(crate) fn default_expenses() -> Vec<ExpenseRecord> {
    SEED.iter()
        .zip(1u64..)
        .map(|(&(title, category, date, amount, description), id)| ExpenseRecord {
            id,
            title: title.to_string(),
            category: category.to_string(),
            date: date.to_string(),
            amount: Some(Decimal::from(amount)),
            description: description.to_string(),
        })
        .collect()
}
