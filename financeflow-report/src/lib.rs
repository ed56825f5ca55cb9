//! financeflow-report: date-range reports, dashboard composition and CSV export

pub mod dashboard;
pub mod export;
pub mod report;

pub use dashboard::{DEFAULT_RECENT_LIMIT, Dashboard};
pub use export::{default_export_name, export_csv, write_csv};
pub use report::{DEFAULT_REPORT_DAYS, Report};
