use ratatui::{
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Cell, Row, Table},
    Frame,
};

use super::render_empty;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_money_opt, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let rows_shown = &app.listing.rows;
    if rows_shown.is_empty() {
        if app.listing.term.is_empty() && app.listing.category.is_empty() {
            render_empty(f, area, "Expenses (0)", &["No expenses yet", "Add one with :add"]);
        } else {
            render_empty(
                f,
                area,
                "Expenses (0)",
                &["No expenses match", "Press Esc to clear the search, :category to clear the filter"],
            );
        }
        return;
    }

    let header = Row::new(
        ["Date", "Title", "Category", "Amount", "Description"]
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_style())),
    )
    .height(1);

    let rows: Vec<Row> = rows_shown
        .iter()
        .enumerate()
        .skip(app.expense_scroll)
        .take(app.expenses_page())
        .map(|(i, e)| {
            let style = if i == app.expense_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            Row::new(vec![
                Cell::from(crate::dates::format_date(&e.date)),
                Cell::from(truncate(&e.title, 28)),
                Cell::from(truncate(&e.category, 18)),
                Cell::from(Span::styled(format_money_opt(e.amount), theme::amount_style())),
                Cell::from(truncate(&e.description, 40)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(28),
        Constraint::Length(18),
        Constraint::Length(14),
        Constraint::Min(10),
    ];

    let mut title = format!("Expenses ({} of {})", rows_shown.len(), app.expense_count);
    if !app.listing.category.is_empty() {
        title.push_str(&format!(" category: {}", app.listing.category));
    }
    if !app.listing.term.is_empty() {
        title.push_str(&format!(" search: '{}'", app.listing.term));
    }

    let table = Table::new(rows, widths).header(header).block(theme::panel(title));
    f.render_widget(table, area);
}
