//! # Vitalia
//!
//! A local-first wellness engine. Vitalia turns a free-text symptom
//! description into a structured health report through an ordered table
//! of keyword category rules, stores reports per user behind a narrow
//! key-value persistence seam, derives weekly diet/exercise plans from
//! a report, and answers wellness questions with a keyword responder.
//!
//! The analysis is deliberately a deterministic content lookup: there
//! is no model and no network. Consumers that want real clinical
//! analysis plug it in behind the same report shape.

pub mod analyzer;
pub mod assistant;
pub mod config;
pub mod models;
pub mod planner;
pub mod store;

pub use analyzer::{EmergencyNotice, HealthAnalyzer};
pub use models::{DayPlan, HealthReport, WeeklyPlan};
pub use planner::build_weekly_plan;
pub use store::{KeyValueStore, MemoryStore, PlanStore, ReportStore, SqliteStore, StorageError};

use tracing_subscriber::EnvFilter;

/// Initialize tracing for host applications that have no subscriber of
/// their own. Respects RUST_LOG when set.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} v{} ready", config::APP_NAME, config::APP_VERSION);
}
