#![forbid(unsafe_code)]

//! Core domain model and aggregation engine for the Symlog symptom tracker.
//!
//! This crate provides:
//! - Domain types (symptoms, assessments, check-ins, log entries)
//! - Self-assessment classification
//! - Daily log and calendar-window aggregation
//! - 14-day rolling symptom history
//! - Case-count trend calculation
//! - Record-store boundary (JSONL/CSV loaders)

pub mod types;
pub mod error;
pub mod datetime;
pub mod assessment;
pub mod daily_log;
pub mod calendar;
pub mod symptom_history;
pub mod trend;
pub mod guidance;
pub mod state;
pub mod store;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use assessment::determine_symptom_group;
pub use daily_log::combine_symptom_and_check_in_logs;
pub use calendar::to_log_data_history;
pub use symptom_history::{to_symptom_history, HISTORY_DAYS};
pub use trend::{cases_trend, percentage_trend};
pub use guidance::{guidance_for_group, Guidance};
pub use state::TrackerState;
pub use store::{read_case_series, read_check_ins, read_log_entries, EntrySink, JsonlSink};
pub use config::Config;
