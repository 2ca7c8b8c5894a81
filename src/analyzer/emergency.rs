use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::HealthReport;

/// Prefix carried by escalation items in the chest/heart content bundle.
const ESCALATION_MARKERS: &[&str] = &["⚠️ EMERGENCY", "⚠️ IMPORTANT"];

/// Escalation items found in a report, ready for banner display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmergencyNotice {
    pub report_id: Uuid,
    /// Fixed banner text; the item strings carry the specifics.
    pub banner: String,
    pub items: Vec<String>,
}

impl EmergencyNotice {
    /// Collect the emergency-escalation items the generator embedded in
    /// the cure and medicines lists. Returns `None` when the report
    /// carries none — the common case for non-chest reports.
    pub fn scan(report: &HealthReport) -> Option<Self> {
        let items: Vec<String> = report
            .cure
            .iter()
            .chain(report.medicines.iter())
            .filter(|item| ESCALATION_MARKERS.iter().any(|m| item.starts_with(m)))
            .cloned()
            .collect();

        if items.is_empty() {
            return None;
        }

        tracing::info!(
            report_id = %report.id,
            items = items.len(),
            "Emergency escalation items present in report"
        );

        Some(Self {
            report_id: report.id,
            banner: "Some of this advice needs a medical professional's attention."
                .to_string(),
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::HealthAnalyzer;

    #[test]
    fn chest_report_yields_notice() {
        let report = HealthAnalyzer::analyze("tightness in my chest at night", "u1");
        let notice = EmergencyNotice::scan(&report).expect("chest reports escalate");
        assert_eq!(notice.report_id, report.id);
        assert!(notice.items.iter().any(|i| i.starts_with("⚠️ EMERGENCY")));
        assert!(notice.items.iter().any(|i| i.starts_with("⚠️ IMPORTANT")));
    }

    #[test]
    fn headache_report_yields_none() {
        let report = HealthAnalyzer::analyze("a mild headache", "u1");
        // the consult caveat is ordinary advice, not an escalation
        assert!(EmergencyNotice::scan(&report).is_none());
    }

    #[test]
    fn fallback_report_yields_none() {
        let report = HealthAnalyzer::analyze("nothing in particular", "u1");
        assert!(EmergencyNotice::scan(&report).is_none());
    }
}
