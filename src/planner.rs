//! Weekly plan derivation.
//!
//! Builds seven daily entries from one report by cyclic index selection
//! over its list fields — no new advisory content is generated here,
//! only arrangement of what the analyzer already produced.

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::models::{DayPlan, HealthReport, WeeklyPlan};

const DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// How many of the report's medicines carry over to each day.
const MEDICINES_PER_DAY: usize = 3;

/// Derive a week of diet, exercise, and medicine entries from a report.
/// Deterministic for a given report.
pub fn build_weekly_plan(report: &HealthReport) -> WeeklyPlan {
    let created_at = Utc::now();
    let start = created_at.date_naive();

    let week = DAYS
        .iter()
        .enumerate()
        .map(|(index, day)| DayPlan {
            day: (*day).to_string(),
            date: start + Duration::days(index as i64),
            diet: daily_diet(&report.foods_to_eat, index),
            exercises: daily_exercises(&report.exercises, &report.yoga, index),
            medicines: report
                .medicines
                .iter()
                .take(MEDICINES_PER_DAY)
                .cloned()
                .collect(),
            notes: format!(
                "Focus on {}",
                cyclic(&report.prevention, index, "a balanced daily routine"),
            ),
            progress: 0,
        })
        .collect();

    tracing::debug!(report_id = %report.id, "Weekly plan built");

    WeeklyPlan {
        id: Uuid::now_v7(),
        report_id: report.id,
        user_id: report.user_id.clone(),
        created_at,
        week,
    }
}

/// Pick `list[index % len]`, or the fallback for an empty list.
fn cyclic<'a>(list: &'a [String], index: usize, fallback: &'a str) -> &'a str {
    if list.is_empty() {
        fallback
    } else {
        &list[index % list.len()]
    }
}

fn positional<'a>(list: &'a [String], index: usize, fallback: &'a str) -> &'a str {
    list.get(index).map_or(fallback, String::as_str)
}

fn daily_diet(foods: &[String], day_index: usize) -> Vec<String> {
    vec![
        format!(
            "Breakfast: {} with {}",
            positional(foods, 0, "Oatmeal"),
            positional(foods, 1, "fruits"),
        ),
        format!("Mid-Morning Snack: {}", positional(foods, 2, "Nuts and seeds")),
        format!(
            "Lunch: {} with {} and whole grains",
            positional(foods, 3, "Lean protein"),
            positional(foods, 4, "vegetables"),
        ),
        format!(
            "Evening Snack: {} or {}",
            positional(foods, 5, "Yogurt"),
            positional(foods, 6, "smoothie"),
        ),
        format!("Dinner: {} with salad", cyclic(foods, day_index, "Lean protein")),
        "Stay hydrated: Drink 8-10 glasses of water".to_string(),
    ]
}

fn daily_exercises(exercises: &[String], yoga: &[String], day_index: usize) -> Vec<String> {
    vec![
        cyclic(exercises, day_index, "Walking 30 minutes").to_string(),
        cyclic(exercises, day_index + 1, "Light stretching").to_string(),
        cyclic(yoga, day_index, "Basic yoga poses").to_string(),
        "Deep breathing exercises - 10 minutes".to_string(),
    ]
}
