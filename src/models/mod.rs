pub mod plan;
pub mod report;

pub use plan::{DayPlan, WeeklyPlan};
pub use report::HealthReport;
