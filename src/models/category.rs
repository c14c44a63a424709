/// Categories offered by the entry form. Records may carry any other text.
pub(crate) const CONVENTIONAL_CATEGORIES: &[&str] = &[
    "Food & Dining",
    "Subscriptions",
    "Health",
    "Transportation",
    "Travel",
    "Shopping",
    "Entertainment",
    "Gifts & Donations",
    "Bills & Utilities",
    "Education",
    "Other",
];

/// Map user input onto a conventional category name (case-insensitive).
/// Unknown names are kept as typed, trimmed.
pub(crate) fn canonical_category(input: &str) -> String {
    let trimmed = input.trim();
    let lower = trimmed.to_lowercase();
    CONVENTIONAL_CATEGORIES
        .iter()
        .find(|c| c.to_lowercase() == lower)
        .map(|c| c.to_string())
        .unwrap_or_else(|| trimmed.to_string())
}
