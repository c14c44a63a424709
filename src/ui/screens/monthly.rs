use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup},
    Frame,
};
use chrono::Datelike;

use super::{bar_value, render_card};
use crate::metrics::MONTH_LABELS;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_money;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(8)])
        .split(area);

    let m = &app.monthly;
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(chunks[0]);
    render_card(
        f,
        cards[0],
        &format!("{} Total", m.year),
        format_money(m.year_total),
        theme::RED,
        None,
    );
    render_card(
        f,
        cards[1],
        "Monthly Average",
        format_money(m.month_average),
        theme::ACCENT,
        Some("months with spending".into()),
    );
    render_card(
        f,
        cards[2],
        "This Month",
        format_money(m.this_month_total),
        theme::YELLOW,
        None,
    );

    let current = app.now.month0() as usize;
    let bars: Vec<Bar> = MONTH_LABELS
        .iter()
        .zip(m.months.iter())
        .enumerate()
        .map(|(i, (label, amt))| {
            let color = if i == current { theme::YELLOW } else { theme::ACCENT };
            Bar::default()
                .value(bar_value(*amt))
                .label(Line::from(*label))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD))
        })
        .collect();

    let chart = BarChart::default()
        .block(theme::panel(format!("Monthly Spending {}", m.year)))
        .data(BarGroup::default().bars(&bars))
        .bar_width(7)
        .bar_gap(1)
        .value_style(Style::default().fg(theme::TEXT));

    f.render_widget(chart, chunks[1]);
}
