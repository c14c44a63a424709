use rust_decimal::Decimal;

/// Format an amount as rupees with Indian digit grouping and 2 decimals.
/// e.g. `123456.5` → `"₹1,23,456.50"`
pub(crate) fn format_money(val: Decimal) -> String {
    let abs = val.abs().round_dp(2);
    let formatted = format!("{abs:.2}");
    let (int_part, dec_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let grouped = group_indian(int_part);
    if val < Decimal::ZERO && !abs.is_zero() {
        format!("-₹{grouped}.{dec_part}")
    } else {
        format!("₹{grouped}.{dec_part}")
    }
}

/// Like [`format_money`], rendering a non-finite amount as zero.
pub(crate) fn format_money_opt(val: Option<Decimal>) -> String {
    format_money(val.unwrap_or(Decimal::ZERO))
}

/// Last three digits, then pairs: "1234567" → "12,34,567".
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let pairs: Vec<&str> = head
        .as_bytes()
        .rchunks(2)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect();
    format!("{},{tail}", pairs.join(","))
}

/// Percentage with one decimal place, e.g. `37.25` → `"37.3%"`.
pub(crate) fn format_percent(val: Decimal) -> String {
    format!("{:.1}%", val.round_dp(1))
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if s.chars().count() <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max - 1).collect();
    format!("{truncated}…")
}

/// Move a list cursor down by one, adjusting scroll to keep cursor visible.
pub(crate) fn scroll_down(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if *index + 1 < len {
        *index += 1;
        if *index >= *scroll + page {
            *scroll = index.saturating_sub(page.saturating_sub(1));
        }
    }
}

pub(crate) fn scroll_up(index: &mut usize, scroll: &mut usize) {
    *index = index.saturating_sub(1);
    if *index < *scroll {
        *scroll = *index;
    }
}

pub(crate) fn scroll_to_top(index: &mut usize, scroll: &mut usize) {
    *index = 0;
    *scroll = 0;
}

pub(crate) fn scroll_to_bottom(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if len > 0 {
        *index = len - 1;
        *scroll = index.saturating_sub(page.saturating_sub(1));
    }
}

/// Keep the cursor inside a list that may have shrunk.
pub(crate) fn clamp_cursor(index: &mut usize, scroll: &mut usize, len: usize) {
    if len == 0 {
        *index = 0;
        *scroll = 0;
        return;
    }
    *index = (*index).min(len - 1);
    *scroll = (*scroll).min(*index);
}
