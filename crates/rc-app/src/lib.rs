//! Shared application service layer.
//!
//! Front ends (the CLI today) go through this crate for case handling,
//! evaluation runs and data export instead of wiring the lower crates
//! together themselves.

pub mod case_service;
pub mod error;
pub mod export;
pub mod run_service;

// Re-export key types for convenience
pub use case_service::{
    default_case, load_case, open_case, save_case, summarize, validate_case, CaseSummary,
};
pub use error::{AppError, AppResult};
pub use export::sweep_to_csv;
pub use run_service::{
    render_report, run_performance, run_performance_with, run_sweep, run_sweep_with,
    with_operating_point, with_resolution, PerformanceRun, SweepRun,
};
