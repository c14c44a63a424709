use chrono::NaiveDateTime;

use crate::engine::Period;
use crate::metrics::{BudgetView, DailyView, ListingView, MonthlyView, Overview, PredictionView};
use crate::models::ExpenseRecord;
use crate::store::ExpenseStore;
use crate::ui::util::clamp_cursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Overview,
    Daily,
    Monthly,
    Predictions,
    Expenses,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[
            Self::Overview,
            Self::Daily,
            Self::Monthly,
            Self::Predictions,
            Self::Expenses,
        ]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overview => write!(f, "Overview"),
            Self::Daily => write!(f, "Daily"),
            Self::Monthly => write!(f, "Monthly"),
            Self::Predictions => write!(f, "Predictions"),
            Self::Expenses => write!(f, "Expenses"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Search,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Search => write!(f, "SEARCH"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PendingAction {
    DeleteExpense { id: u64, title: String },
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) search_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    pub(crate) period: Period,
    pub(crate) category_filter: String,
    pub(crate) now: NaiveDateTime,

    // Views, rebuilt from the store after every change
    pub(crate) overview: Overview,
    pub(crate) daily: DailyView,
    pub(crate) monthly: MonthlyView,
    pub(crate) budget: BudgetView,
    pub(crate) prediction: PredictionView,
    pub(crate) listing: ListingView,
    pub(crate) expense_count: usize,

    // Expenses table
    pub(crate) expense_index: usize,
    pub(crate) expense_scroll: usize,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(store: &ExpenseStore, now: NaiveDateTime) -> Self {
        let records = store.expenses();
        let period = Period::Days(30);

        Self {
            running: true,
            screen: Screen::Overview,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            search_input: String::new(),
            status_message: String::new(),
            show_help: false,

            period,
            category_filter: String::new(),
            now,

            overview: Overview::compute(records, period, now),
            daily: DailyView::compute(records, now),
            monthly: MonthlyView::compute(records, now),
            budget: BudgetView::compute(records, store.budget(), now),
            prediction: PredictionView::compute(records, now),
            listing: ListingView::compute(records, "", ""),
            expense_count: records.len(),

            expense_index: 0,
            expense_scroll: 0,

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    /// Recompute every view against the wall clock.
    pub(crate) fn refresh_all(&mut self, store: &ExpenseStore) {
        self.refresh_at(store, crate::dates::now());
    }

    pub(crate) fn refresh_at(&mut self, store: &ExpenseStore, now: NaiveDateTime) {
        let records = store.expenses();
        self.now = now;
        self.overview = Overview::compute(records, self.period, now);
        self.daily = DailyView::compute(records, now);
        self.monthly = MonthlyView::compute(records, now);
        self.budget = BudgetView::compute(records, store.budget(), now);
        self.prediction = PredictionView::compute(records, now);
        self.expense_count = records.len();
        self.refresh_listing(store);
    }

    /// Only the table depends on the search box, so typing skips the rest.
    pub(crate) fn refresh_listing(&mut self, store: &ExpenseStore) {
        self.listing =
            ListingView::compute(store.expenses(), &self.search_input, &self.category_filter);
        clamp_cursor(
            &mut self.expense_index,
            &mut self.expense_scroll,
            self.listing.rows.len(),
        );
    }

    pub(crate) fn selected_expense(&self) -> Option<&ExpenseRecord> {
        self.listing.rows.get(self.expense_index)
    }

    /// Ask for confirmation before deleting `expense`.
    pub(crate) fn request_delete(&mut self, expense: &ExpenseRecord) {
        self.confirm_message = format!("Delete '{}'?", expense.title);
        self.pending_action = Some(PendingAction::DeleteExpense {
            id: expense.id,
            title: expense.title.clone(),
        });
        self.input_mode = InputMode::Confirm;
    }

    pub(crate) fn expenses_page(&self) -> usize {
        // Table header and block borders
        self.visible_rows.saturating_sub(4).max(1)
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
