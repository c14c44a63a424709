//! The canonical expense list and budget, synchronized to the key-value store.

mod codec;

use anyhow::{Context, Result};
use rust_decimal::Decimal;

use crate::db::Database;
use crate::models::{default_expenses, ExpenseRecord, NewExpense, DEFAULT_BUDGET};

pub(crate) const EXPENSES_KEY: &str = "expenseflow_expenses_v1";
pub(crate) const BUDGET_KEY: &str = "expenseflow_budget_v1";

pub(crate) struct ExpenseStore {
    db: Database,
    expenses: Vec<ExpenseRecord>,
    budget: Decimal,
    next_id: u64,
}

impl ExpenseStore {
    /// Load from `db`. Unusable stored content falls back to the seed data and
    /// the default budget; only storage errors fail. Loading never writes.
    pub(crate) fn open(db: Database) -> Result<Self> {
        let expenses = match db.get_value(EXPENSES_KEY)? {
            None => {
                log::info!("no stored expenses, starting from example data");
                default_expenses()
            }
            Some(raw) => codec::decode_expenses(&raw).unwrap_or_else(|| {
                log::warn!("stored expenses are unreadable, using example data");
                default_expenses()
            }),
        };

        let budget = match db.get_value(BUDGET_KEY)? {
            None => DEFAULT_BUDGET,
            Some(raw) => codec::decode_budget(&raw).unwrap_or_else(|| {
                log::warn!("stored budget '{raw}' is unreadable, using {DEFAULT_BUDGET}");
                DEFAULT_BUDGET
            }),
        };

        let next_id = expenses.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        log::debug!("loaded {} expenses, budget {budget}", expenses.len());
        Ok(Self {
            db,
            expenses,
            budget,
            next_id,
        })
    }

    pub(crate) fn expenses(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    pub(crate) fn budget(&self) -> Decimal {
        self.budget
    }

    /// Append a validated expense and persist the list. Returns the new id.
    pub(crate) fn add(&mut self, expense: NewExpense) -> Result<u64> {
        let id = self.next_id;
        self.next_id += 1;
        log::info!("adding expense #{id} '{}'", expense.title);
        self.expenses.push(expense.into_record(id));
        self.save_expenses()?;
        Ok(id)
    }

    /// Remove the record at canonical position `index`. Out of range is a no-op.
    pub(crate) fn delete_at(&mut self, index: usize) -> Result<Option<ExpenseRecord>> {
        if index >= self.expenses.len() {
            return Ok(None);
        }
        let removed = self.expenses.remove(index);
        log::info!("deleted expense #{} '{}'", removed.id, removed.title);
        self.save_expenses()?;
        Ok(Some(removed))
    }

    pub(crate) fn delete_by_id(&mut self, id: u64) -> Result<Option<ExpenseRecord>> {
        match self.position_of(id) {
            Some(index) => self.delete_at(index),
            None => Ok(None),
        }
    }

    pub(crate) fn position_of(&self, id: u64) -> Option<usize> {
        self.expenses.iter().position(|e| e.id == id)
    }

    pub(crate) fn get(&self, id: u64) -> Option<&ExpenseRecord> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub(crate) fn set_budget(&mut self, budget: Decimal) -> Result<()> {
        self.budget = budget;
        self.db
            .set_value(BUDGET_KEY, &codec::encode_budget(budget))
            .context("Failed to save budget")?;
        log::info!("budget set to {budget}");
        Ok(())
    }

    /// Forget everything stored and start over from the example data.
    pub(crate) fn reset(&mut self) -> Result<()> {
        self.db.remove_value(EXPENSES_KEY)?;
        self.db.remove_value(BUDGET_KEY)?;
        self.expenses = default_expenses();
        self.budget = DEFAULT_BUDGET;
        self.next_id = self.expenses.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        log::info!("store reset to example data");
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn db(&self) -> &Database {
        &self.db
    }

    fn save_expenses(&self) -> Result<()> {
        let blob = codec::encode_expenses(&self.expenses).context("Failed to encode expenses")?;
        self.db
            .set_value(EXPENSES_KEY, &blob)
            .context("Failed to save expenses")
    }
}

#[cfg(test)]
mod tests;
