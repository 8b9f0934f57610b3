//! Expense reports: the aggregation behind them and the HTML page that charts them.

/// Totals computed from the transaction log.
pub mod aggregation;
mod charts;
mod page;

pub use aggregation::UNCATEGORIZED_LABEL;
pub use charts::{ReportChart, category_chart, monthly_chart, report_charts};
pub use page::{ReportData, render_report, write_report};
