use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One day of a weekly plan. `progress` is the only mutable field and is
/// driven by the caller (0–100, percent complete).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayPlan {
    pub day: String,
    pub date: NaiveDate,
    pub diet: Vec<String>,
    pub exercises: Vec<String>,
    pub medicines: Vec<String>,
    pub notes: String,
    pub progress: u8,
}

/// Seven `DayPlan`s derived from one `HealthReport` by cyclic selection
/// over its list fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyPlan {
    pub id: Uuid,
    pub report_id: Uuid,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub week: Vec<DayPlan>,
}

impl WeeklyPlan {
    /// Rounded mean progress over days with any progress recorded.
    /// 0 when nothing has been tracked yet.
    pub fn average_progress(&self) -> u8 {
        let tracked: Vec<u32> = self
            .week
            .iter()
            .filter(|d| d.progress > 0)
            .map(|d| u32::from(d.progress))
            .collect();
        if tracked.is_empty() {
            return 0;
        }
        let sum: u32 = tracked.iter().sum();
        ((f64::from(sum) / tracked.len() as f64).round()) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_plan(progress: &[u8]) -> WeeklyPlan {
        WeeklyPlan {
            id: Uuid::now_v7(),
            report_id: Uuid::now_v7(),
            user_id: "u1".into(),
            created_at: Utc::now(),
            week: progress
                .iter()
                .map(|&p| DayPlan {
                    day: "Monday".into(),
                    date: NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(),
                    diet: vec![],
                    exercises: vec![],
                    medicines: vec![],
                    notes: String::new(),
                    progress: p,
                })
                .collect(),
        }
    }

    #[test]
    fn average_progress_ignores_untracked_days() {
        let plan = make_plan(&[80, 0, 60, 0, 0, 0, 0]);
        assert_eq!(plan.average_progress(), 70);
    }

    #[test]
    fn average_progress_zero_when_untracked() {
        let plan = make_plan(&[0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(plan.average_progress(), 0);
    }

    #[test]
    fn average_progress_rounds() {
        let plan = make_plan(&[50, 25, 0]);
        // mean of 50 and 25 is 37.5, rounds to 38
        assert_eq!(plan.average_progress(), 38);
    }
}
