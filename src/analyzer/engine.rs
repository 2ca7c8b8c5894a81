use std::time::Instant;

use crate::models::HealthReport;

use super::rules::{ContentBundle, FALLBACK, RULES};

/// Lowest score a report can carry regardless of how much matched.
const SCORE_FLOOR: u8 = 40;
/// Highest score even for an empty-looking description.
const SCORE_CEILING: u8 = 95;
/// Deduction per accumulated symptom entry.
const SYMPTOM_WEIGHT: u32 = 8;

/// Deterministic rule-based report generator.
///
/// Total over its inputs: every call yields a fully populated report,
/// with the fallback bundle covering input that matches nothing.
pub struct HealthAnalyzer;

impl HealthAnalyzer {
    /// Generate a report from a free-text symptom description.
    ///
    /// Matching is case-insensitive substring search over the ordered
    /// rule table; every matching category appends its bundle, so a
    /// description spanning several concerns accumulates all of them.
    pub fn analyze(raw_text: &str, user_id: &str) -> HealthReport {
        let start = Instant::now();
        let normalized = raw_text.to_lowercase();

        let mut report = HealthReport::empty(user_id, raw_text);
        let mut matched: Vec<&'static str> = Vec::new();

        for rule in RULES {
            if rule.matches(&normalized) {
                apply_bundle(&mut report, &rule.bundle);
                matched.push(rule.name);
            }
        }

        // Fallback is the one mutually exclusive bundle: it fires only
        // when nothing above populated the symptoms list.
        if report.symptoms.is_empty() {
            apply_bundle(&mut report, &FALLBACK);
            matched.push("general_wellness");
        }

        report.summary = build_summary(&report);
        report.health_score = derive_score(report.symptoms.len(), &normalized);

        tracing::debug!(
            user_id = %report.user_id,
            categories = ?matched,
            symptoms = report.symptoms.len(),
            score = report.health_score,
            elapsed_us = start.elapsed().as_micros() as u64,
            "Report generated"
        );

        report
    }
}

fn apply_bundle(report: &mut HealthReport, bundle: &ContentBundle) {
    let extend = |dst: &mut Vec<String>, src: &[&str]| {
        dst.extend(src.iter().map(|s| s.to_string()));
    };
    extend(&mut report.symptoms, bundle.symptoms);
    extend(&mut report.causes, bundle.causes);
    extend(&mut report.deficiencies, bundle.deficiencies);
    extend(&mut report.prevention, bundle.prevention);
    extend(&mut report.cure, bundle.cure);
    extend(&mut report.medicines, bundle.medicines);
    extend(&mut report.yoga, bundle.yoga);
    extend(&mut report.exercises, bundle.exercises);
    extend(&mut report.foods_to_eat, bundle.foods_to_eat);
    extend(&mut report.foods_to_avoid, bundle.foods_to_avoid);
    extend(&mut report.things_to_follow, bundle.things_to_follow);
    extend(&mut report.things_to_avoid, bundle.things_to_avoid);
    extend(&mut report.natural_remedies, bundle.natural_remedies);
}

/// Severity penalty comes from re-scanning the normalized text, not
/// from any structured severity input the caller may hold elsewhere.
fn severity_penalty(normalized: &str) -> u32 {
    if normalized.contains("severe") {
        20
    } else if normalized.contains("moderate") {
        10
    } else {
        5
    }
}

fn derive_score(symptom_count: usize, normalized: &str) -> u8 {
    let deduction = SYMPTOM_WEIGHT * symptom_count as u32 + severity_penalty(normalized);
    let raw = 100i64 - i64::from(deduction);
    raw.clamp(i64::from(SCORE_FLOOR), i64::from(SCORE_CEILING)) as u8
}

fn build_summary(report: &HealthReport) -> String {
    format!(
        "Based on your comprehensive health assessment, we've identified {} primary \
         health concern(s). Our analysis has determined {} potential contributing \
         factors and detected {} nutritional areas that may need attention. Your \
         personalized health plan includes {} yoga practices, {} exercise \
         recommendations, and detailed dietary guidance with {} beneficial foods \
         and {} natural remedies to support your wellness journey.",
        report.symptoms.len(),
        report.causes.len(),
        report.deficiencies.len(),
        report.yoga.len(),
        report.exercises.len(),
        report.foods_to_eat.len(),
        report.natural_remedies.len(),
    )
}
