mod context;
pub mod report;

pub use report::{build_catalog, exit_code_for, format_report, run_report};
