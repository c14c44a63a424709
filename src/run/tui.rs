use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::store::ExpenseStore;
use crate::ui::app::{App, InputMode, Screen};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(store: &mut ExpenseStore) -> Result<()> {
    let mut app = App::new(store, crate::dates::now());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, store);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("terminal session ended with an error: {e:?}");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    store: &mut ExpenseStore,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            let content_height = f.area().height.saturating_sub(3) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            let handled = match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, store),
                InputMode::Command => handle_command_input(key, app, store),
                InputMode::Search => handle_search_input(key, app, store),
                InputMode::Confirm => handle_confirm_input(key, app, store),
            };
            // A failed write is reported, not fatal; the session keeps running.
            if let Err(e) = handled {
                log::error!("{e:#}");
                app.input_mode = InputMode::Normal;
                app.set_status(format!("Error: {e:#}"));
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App, store: &mut ExpenseStore) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('/') => {
            app.input_mode = InputMode::Search;
            app.search_input.clear();
            app.screen = Screen::Expenses;
            app.refresh_listing(store);
        }
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char(c @ '1'..='5') => {
            let idx = (c as usize) - ('1' as usize);
            if let Some(&screen) = Screen::all().get(idx) {
                switch_screen(app, store, screen);
            }
        }
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let next = (idx + 1) % screens.len();
            switch_screen(app, store, screens[next]);
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            switch_screen(app, store, screens[prev]);
        }
        KeyCode::Esc => {
            if !app.search_input.is_empty() {
                app.search_input.clear();
                app.refresh_listing(store);
                app.set_status("Search cleared");
            }
        }
        KeyCode::Char('g') => {
            if app.screen == Screen::Expenses {
                scroll_to_top(&mut app.expense_index, &mut app.expense_scroll);
            }
        }
        KeyCode::Char('G') => {
            if app.screen == Screen::Expenses {
                let page = app.expenses_page();
                scroll_to_bottom(
                    &mut app.expense_index,
                    &mut app.expense_scroll,
                    app.listing.rows.len(),
                    page,
                );
            }
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Char('p') => {
            commands::handle_command("period", app, store)?;
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                handle_move_down(app);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                handle_move_up(app);
            }
        }
        KeyCode::Char('D') if app.screen == Screen::Expenses => {
            commands::handle_command("delete", app, store)?;
        }
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: event::KeyEvent, app: &mut App, store: &mut ExpenseStore) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app, store)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let trimmed = app.command_input.trim_end();
            if let Some(pos) = trimmed.rfind(' ') {
                app.command_input.truncate(pos + 1);
            } else {
                app.command_input.clear();
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

/// Live search: the table is refiltered on every keystroke.
fn handle_search_input(key: event::KeyEvent, app: &mut App, store: &mut ExpenseStore) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
            app.set_status(format!("{} matches", app.listing.rows.len()));
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.search_input.clear();
            app.refresh_listing(store);
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            app.expense_index = 0;
            app.expense_scroll = 0;
            app.refresh_listing(store);
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
            app.expense_index = 0;
            app.expense_scroll = 0;
            app.refresh_listing(store);
        }
        _ => {}
    }
    Ok(())
}

fn handle_confirm_input(key: event::KeyEvent, app: &mut App, store: &mut ExpenseStore) -> Result<()> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => commands::confirm_pending(app, store)?,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.pending_action = None;
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
            app.set_status("Cancelled");
        }
        _ => {}
    }
    Ok(())
}

// ── Navigation helpers ───────────────────────────────────────

/// Views are rebuilt on every switch so "now" stays current.
fn switch_screen(app: &mut App, store: &ExpenseStore, screen: Screen) {
    app.screen = screen;
    app.refresh_all(store);
    app.set_status(format!("{screen}"));
}

fn handle_move_down(app: &mut App) {
    if app.screen == Screen::Expenses {
        let page = app.expenses_page();
        scroll_down(
            &mut app.expense_index,
            &mut app.expense_scroll,
            app.listing.rows.len(),
            page,
        );
    }
}

fn handle_move_up(app: &mut App) {
    if app.screen == Screen::Expenses {
        scroll_up(&mut app.expense_index, &mut app.expense_scroll);
    }
}
