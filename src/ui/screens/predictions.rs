use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Cell, Row, Sparkline, Table},
    Frame,
};

use super::{bar_value, render_card, render_empty};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_money, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Forecast cards
            Constraint::Length(5), // Trend
            Constraint::Min(6),    // Per-category table
        ])
        .split(area);

    let p = &app.prediction;
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(chunks[0]);
    render_card(
        f,
        cards[0],
        "Next Month",
        format_money(p.monthly_forecast),
        theme::RED,
        Some("last 90 days / 3".into()),
    );
    render_card(
        f,
        cards[1],
        "This Month (projected)",
        format_money(p.projected_this_month),
        theme::YELLOW,
        None,
    );
    render_card(
        f,
        cards[2],
        "Per Day",
        format_money(p.daily_forecast),
        theme::ACCENT,
        None,
    );

    let trend: Vec<u64> = p.trend.iter().map(|(_, amt)| bar_value(*amt)).collect();
    let caption = match (p.trend.first(), p.trend.last()) {
        (Some((first, _)), Some((last, _))) => format!("Monthly Trend {first} → {last}"),
        _ => "Monthly Trend".to_string(),
    };
    let sparkline = Sparkline::default()
        .block(theme::panel(caption))
        .data(&trend)
        .style(Style::default().fg(theme::YELLOW));
    f.render_widget(sparkline, chunks[1]);

    if p.categories.is_empty() {
        render_empty(
            f,
            chunks[2],
            "Category Forecast",
            &["No expenses in the last 90 days to forecast from"],
        );
        return;
    }

    let header = Row::new(
        ["Category", "Monthly Avg", "Next Month"]
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_style())),
    );
    let rows: Vec<Row> = p
        .categories
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let style = if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            Row::new(vec![
                Cell::from(truncate(&c.category, 24)),
                Cell::from(format_money(c.monthly_average)),
                Cell::from(format_money(c.next_month)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Min(20),
        Constraint::Length(16),
        Constraint::Length(16),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(theme::panel("Category Forecast"));
    f.render_widget(table, chunks[2]);
}
