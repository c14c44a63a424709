pub(crate) mod daily;
pub(crate) mod expenses;
pub(crate) mod monthly;
pub(crate) mod overview;
pub(crate) mod predictions;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::ui::theme;

/// A titled stat card: big value, dim caption underneath.
pub(crate) fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    color: Color,
    subtitle: Option<String>,
) {
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle.unwrap_or_default(), theme::dim_style())),
    ])
    .centered()
    .block(theme::panel(title));

    f.render_widget(text, area);
}

pub(crate) fn render_empty(f: &mut Frame, area: Rect, title: &str, lines: &[&str]) {
    let mut text = vec![Line::from("")];
    for line in lines {
        text.push(Line::from(Span::styled(line.to_string(), theme::dim_style())));
        text.push(Line::from(""));
    }
    f.render_widget(
        Paragraph::new(text).centered().block(theme::panel(title)),
        area,
    );
}

/// Whole-rupee bar height; charts cannot draw fractions or negatives.
pub(crate) fn bar_value(amount: Decimal) -> u64 {
    amount.max(Decimal::ZERO).round().to_u64().unwrap_or(0)
}

pub(crate) fn progress_bar(percentage: Decimal, width: usize) -> String {
    let ratio = (percentage / Decimal::ONE_HUNDRED)
        .to_f64()
        .unwrap_or(0.0)
        .clamp(0.0, 1.0);
    let filled = (ratio * width as f64) as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
