use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One generated wellness report.
///
/// Immutable after generation: the analyzer fills every list field (the
/// fallback category guarantees none stays empty), derives the score and
/// summary, and keeps the raw input verbatim for later re-display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthReport {
    /// UUIDv7 — unique per generation call, sorts by creation order.
    pub id: Uuid,
    /// Owner in the external user directory.
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub symptoms: Vec<String>,
    pub causes: Vec<String>,
    pub deficiencies: Vec<String>,
    pub prevention: Vec<String>,
    pub cure: Vec<String>,
    pub medicines: Vec<String>,
    pub yoga: Vec<String>,
    pub exercises: Vec<String>,
    pub foods_to_eat: Vec<String>,
    pub foods_to_avoid: Vec<String>,
    pub things_to_follow: Vec<String>,
    pub things_to_avoid: Vec<String>,
    pub natural_remedies: Vec<String>,
    /// Bounded to [40, 95] at derivation time.
    pub health_score: u8,
    pub summary: String,
    /// Original symptom description, never mutated.
    pub raw_input: String,
}

impl HealthReport {
    /// Empty shell for the analyzer to accumulate into.
    pub(crate) fn empty(user_id: &str, raw_input: &str) -> Self {
        Self {
            id: Uuid::now_v7(),
            user_id: user_id.to_string(),
            created_at: Utc::now(),
            symptoms: Vec::new(),
            causes: Vec::new(),
            deficiencies: Vec::new(),
            prevention: Vec::new(),
            cure: Vec::new(),
            medicines: Vec::new(),
            yoga: Vec::new(),
            exercises: Vec::new(),
            foods_to_eat: Vec::new(),
            foods_to_avoid: Vec::new(),
            things_to_follow: Vec::new(),
            things_to_avoid: Vec::new(),
            natural_remedies: Vec::new(),
            health_score: 0,
            summary: String::new(),
            raw_input: raw_input.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_sort_by_creation_order() {
        let a = HealthReport::empty("u1", "first");
        // v7 ordering is only guaranteed across millisecond ticks
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = HealthReport::empty("u1", "second");
        assert!(a.id < b.id, "v7 ids should be time-ordered");
    }

    #[test]
    fn serde_round_trip_preserves_raw_input() {
        let mut report = HealthReport::empty("u1", "mild headache since Tuesday");
        report.symptoms.push("Persistent Headache".into());
        report.health_score = 82;

        let json = serde_json::to_string(&report).unwrap();
        let back: HealthReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
        assert_eq!(back.raw_input, "mild headache since Tuesday");
    }
}
