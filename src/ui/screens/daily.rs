use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup},
    Frame,
};

use super::{bar_value, render_card, render_empty};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_money;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(8)])
        .split(area);

    let d = &app.daily;
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(chunks[0]);
    render_card(
        f,
        cards[0],
        "Daily Average",
        format_money(d.average),
        theme::ACCENT,
        Some(format!("over {} active days", d.active_days)),
    );
    render_card(
        f,
        cards[1],
        "Highest Day",
        format_money(d.highest_amount),
        theme::RED,
        d.highest_date.as_deref().map(crate::dates::format_date),
    );
    render_card(
        f,
        cards[2],
        "Last 30 Days",
        format_money(d.total),
        theme::YELLOW,
        None,
    );

    if d.days.is_empty() {
        render_empty(f, chunks[1], "Daily Spending", &["No expenses in the last 30 days"]);
        return;
    }

    let bars: Vec<Bar> = d
        .days
        .iter()
        .map(|(date, amt)| {
            // "2026-01-24" → "01-24"
            let label = date.get(5..).unwrap_or(date);
            let highlighted = d.highest_date.as_deref() == Some(date.as_str());
            let color = if highlighted { theme::RED } else { theme::ACCENT };
            Bar::default()
                .value(bar_value(*amt))
                .label(Line::from(label.to_string()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD))
        })
        .collect();

    let chart = BarChart::default()
        .block(theme::panel("Daily Spending (last 30 days)"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(6)
        .bar_gap(1)
        .value_style(Style::default().fg(theme::TEXT));

    f.render_widget(chart, chunks[1]);
}
