use crate::engine::search_and_filter;
use crate::models::ExpenseRecord;

/// The searchable table of every record, independent of the overview period.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ListingView {
    pub(crate) term: String,
    pub(crate) category: String,
    pub(crate) rows: Vec<ExpenseRecord>,
}

impl ListingView {
    pub(crate) fn compute(records: &[ExpenseRecord], term: &str, category: &str) -> Self {
        Self {
            term: term.to_string(),
            category: category.to_string(),
            rows: search_and_filter(records, term, category)
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}
