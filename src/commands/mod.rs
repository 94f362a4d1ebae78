pub mod report;

pub use report::{
    ReportOutcome, apply_cli_overrides, generate_report, load_config, run_report,
    run_report_impl,
};
