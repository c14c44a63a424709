//! Pure filters, groupings and serialization over a snapshot of records.

mod export;
mod filter;
mod group;

pub(crate) use export::{select_for_export, to_csv, write_csv_file, ExportRange, DEFAULT_EXPORT_FILE};
pub(crate) use filter::{
    filter_by_period, filter_this_month, filter_this_year, search_and_filter, sort_recent_first,
    Period,
};
pub(crate) use group::{group_by_category, group_by_date, group_by_year_month, sum_amounts, total};
