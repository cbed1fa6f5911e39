pub mod chart_service;
pub mod filter_service;
pub mod summary_service;

pub use chart_service::{ChartPeriod, ChartService, MonthCursor};
pub use filter_service::FilterService;
pub use summary_service::{DailySeries, DashboardSummary, SummaryService, Totals};
