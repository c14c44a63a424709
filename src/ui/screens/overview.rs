use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, List, ListItem, Paragraph},
    Frame,
};

use super::{bar_value, progress_bar, render_card, render_empty};
use crate::metrics::BudgetStatus;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_money, format_money_opt, format_percent, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Summary cards
            Constraint::Length(3), // Budget
            Constraint::Min(8),    // Category chart + recent
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);
    render_budget(f, chunks[1], app);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);
    render_category_chart(f, bottom[0], app);
    render_recent(f, bottom[1], app);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);
    let o = &app.overview;

    render_card(
        f,
        cards[0],
        &o.label,
        format_money(o.total),
        theme::RED,
        Some(format!("{} expenses", o.count)),
    );
    render_card(
        f,
        cards[1],
        "Average Expense",
        format_money(o.average),
        theme::ACCENT,
        None,
    );
    render_card(
        f,
        cards[2],
        "This Month",
        format_money(o.month_total),
        theme::YELLOW,
        None,
    );
    render_card(
        f,
        cards[3],
        "Categories",
        o.category_count.to_string(),
        theme::GREEN,
        Some(format!("{}", o.period)),
    );
}

fn render_budget(f: &mut Frame, area: Rect, app: &App) {
    let b = &app.budget;
    let color = match b.status {
        BudgetStatus::OverBudget => theme::RED,
        BudgetStatus::OnTrack => theme::GREEN,
    };
    let bar_width = (area.width as usize).saturating_sub(60).clamp(10, 40);

    let line = Line::from(vec![
        Span::styled(
            format!(" {} / {} ", format_money(b.spent), format_money(b.budget)),
            theme::normal_style(),
        ),
        Span::styled(progress_bar(b.percentage, bar_width), Style::default().fg(color)),
        Span::styled(
            format!(" {} ", format_percent(b.percentage)),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}", b.status), Style::default().fg(color)),
    ]);
    f.render_widget(
        Paragraph::new(line).block(theme::panel("Monthly Budget")),
        area,
    );
}

fn render_category_chart(f: &mut Frame, area: Rect, app: &App) {
    let by_category = &app.overview.by_category;
    if by_category.is_empty() {
        render_empty(
            f,
            area,
            "Spending by Category",
            &["No expenses in this period", "Add one with :add or widen it with :period all"],
        );
        return;
    }

    let bars: Vec<Bar> = by_category
        .iter()
        .map(|(name, amt)| {
            Bar::default()
                .value(bar_value(*amt))
                .text_value(format_money(*amt))
                .label(Line::from(truncate(name, 12)))
                .style(Style::default().fg(theme::ACCENT))
                .value_style(Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD))
        })
        .collect();

    let chart = BarChart::default()
        .block(theme::panel("Spending by Category"))
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(0)
        .bar_style(Style::default().fg(theme::ACCENT));

    f.render_widget(chart, area);
}

fn render_recent(f: &mut Frame, area: Rect, app: &App) {
    let recent = &app.overview.recent;
    if recent.is_empty() {
        render_empty(f, area, "Recent Expenses", &["Nothing recent"]);
        return;
    }

    let items: Vec<ListItem> = recent
        .iter()
        .map(|e| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(truncate(&e.title, 20), theme::normal_style()),
                    Span::raw(" "),
                    Span::styled(format_money_opt(e.amount), theme::amount_style()),
                ]),
                Line::from(Span::styled(
                    format!("  {} · {}", e.category, crate::dates::format_date(&e.date)),
                    theme::dim_style(),
                )),
            ])
        })
        .collect();

    f.render_widget(List::new(items).block(theme::panel("Recent Expenses")), area);
}
