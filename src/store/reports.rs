use uuid::Uuid;

use crate::config;
use crate::models::HealthReport;

use super::kv::KeyValueStore;
use super::StorageError;

/// Report collection with most-recent-first ordering, scoped by user at
/// query time. One serialized array under one key; every mutation is a
/// whole-collection rewrite.
pub struct ReportStore<S: KeyValueStore> {
    kv: S,
    key: String,
}

impl<S: KeyValueStore> ReportStore<S> {
    pub fn new(kv: S) -> Self {
        Self::with_key(kv, config::REPORTS_KEY)
    }

    pub fn with_key(kv: S, key: &str) -> Self {
        Self {
            kv,
            key: key.to_string(),
        }
    }

    /// Full collection, newest first. Absent or corrupt data decodes as
    /// the empty collection: there is no schema migration path, so a bad
    /// payload must not make the store unusable.
    fn load(&self) -> Result<Vec<HealthReport>, StorageError> {
        let Some(bytes) = self.kv.get(&self.key)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_slice(&bytes) {
            Ok(reports) => Ok(reports),
            Err(err) => {
                tracing::warn!(key = %self.key, %err, "Corrupt report collection, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, reports: &[HealthReport]) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(reports)?;
        self.kv.set(&self.key, &bytes)
    }

    /// Insert at the head so listings come back most recent first.
    pub fn append(&self, report: HealthReport) -> Result<(), StorageError> {
        let mut reports = self.load()?;
        tracing::debug!(report_id = %report.id, user_id = %report.user_id, total = reports.len() + 1, "Appending report");
        reports.insert(0, report);
        self.save(&reports)
    }

    /// All reports owned by `user_id`, most recent first.
    pub fn list_by_user(&self, user_id: &str) -> Result<Vec<HealthReport>, StorageError> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|r| r.user_id == user_id)
            .collect())
    }

    /// Linear scan; `Ok(None)` when absent, never an error.
    pub fn get_by_id(&self, id: &Uuid) -> Result<Option<HealthReport>, StorageError> {
        Ok(self.load()?.into_iter().find(|r| r.id == *id))
    }

    /// Rounded mean health score across a user's reports; 0 with none.
    pub fn average_score(&self, user_id: &str) -> Result<u32, StorageError> {
        let reports = self.list_by_user(user_id)?;
        if reports.is_empty() {
            return Ok(0);
        }
        let sum: u32 = reports.iter().map(|r| u32::from(r.health_score)).sum();
        Ok((f64::from(sum) / reports.len() as f64).round() as u32)
    }

    /// Remove one report by id with the same whole-collection rewrite
    /// discipline as `append`. Returns whether anything was removed.
    pub fn delete(&self, id: &Uuid) -> Result<bool, StorageError> {
        let mut reports = self.load()?;
        let before = reports.len();
        reports.retain(|r| r.id != *id);
        if reports.len() == before {
            return Ok(false);
        }
        tracing::debug!(report_id = %id, "Deleted report");
        self.save(&reports)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::HealthAnalyzer;
    use crate::store::MemoryStore;

    fn make_store() -> ReportStore<MemoryStore> {
        ReportStore::new(MemoryStore::new())
    }

    fn make_report(user: &str, text: &str) -> HealthReport {
        HealthAnalyzer::analyze(text, user)
    }

    #[test]
    fn list_is_empty_for_unknown_user() {
        let store = make_store();
        assert!(store.list_by_user("nobody").unwrap().is_empty());
    }

    #[test]
    fn append_orders_most_recent_first() {
        let store = make_store();
        let r1 = make_report("u1", "headache");
        let r2 = make_report("u1", "back pain");
        let (id1, id2) = (r1.id, r2.id);

        store.append(r1).unwrap();
        store.append(r2).unwrap();

        let listed = store.list_by_user("u1").unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, id2);
        assert_eq!(listed[1].id, id1);
    }

    #[test]
    fn list_filters_by_owner() {
        let store = make_store();
        store.append(make_report("u1", "headache")).unwrap();
        store.append(make_report("u2", "fatigue")).unwrap();

        assert_eq!(store.list_by_user("u1").unwrap().len(), 1);
        assert_eq!(store.list_by_user("u2").unwrap().len(), 1);
    }

    #[test]
    fn repeated_reads_are_identical() {
        let store = make_store();
        store.append(make_report("u1", "headache")).unwrap();
        store.append(make_report("u1", "tired")).unwrap();

        let first = store.list_by_user("u1").unwrap();
        let second = store.list_by_user("u1").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn get_by_id_finds_stored_report() {
        let store = make_store();
        let report = make_report("u1", "eye strain");
        let id = report.id;
        store.append(report).unwrap();

        let found = store.get_by_id(&id).unwrap().unwrap();
        assert_eq!(found.id, id);
    }

    #[test]
    fn get_by_id_absent_is_none_not_error() {
        let store = make_store();
        store.append(make_report("u1", "headache")).unwrap();
        assert!(store.get_by_id(&Uuid::now_v7()).unwrap().is_none());
    }

    #[test]
    fn average_score_zero_without_reports() {
        let store = make_store();
        assert_eq!(store.average_score("u1").unwrap(), 0);
    }

    #[test]
    fn average_score_is_rounded_mean() {
        let store = make_store();
        let mut r1 = make_report("u1", "headache");
        let mut r2 = make_report("u1", "back pain");
        r1.health_score = 60;
        r2.health_score = 80;
        store.append(r1).unwrap();
        store.append(r2).unwrap();

        assert_eq!(store.average_score("u1").unwrap(), 70);
    }

    #[test]
    fn average_score_ignores_other_users() {
        let store = make_store();
        let mut mine = make_report("u1", "headache");
        mine.health_score = 50;
        let mut theirs = make_report("u2", "headache");
        theirs.health_score = 90;
        store.append(mine).unwrap();
        store.append(theirs).unwrap();

        assert_eq!(store.average_score("u1").unwrap(), 50);
    }

    #[test]
    fn delete_removes_only_the_target() {
        let store = make_store();
        let r1 = make_report("u1", "headache");
        let r2 = make_report("u1", "fatigue");
        let (id1, id2) = (r1.id, r2.id);
        store.append(r1).unwrap();
        store.append(r2).unwrap();

        assert!(store.delete(&id1).unwrap());
        let remaining = store.list_by_user("u1").unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, id2);
    }

    #[test]
    fn delete_absent_id_reports_false() {
        let store = make_store();
        store.append(make_report("u1", "headache")).unwrap();
        assert!(!store.delete(&Uuid::now_v7()).unwrap());
        assert_eq!(store.list_by_user("u1").unwrap().len(), 1);
    }

    #[test]
    fn corrupt_payload_reads_as_empty_collection() {
        let kv = MemoryStore::new();
        kv.set(crate::config::REPORTS_KEY, b"{not json[").unwrap();
        let store = ReportStore::new(kv);

        assert!(store.list_by_user("u1").unwrap().is_empty());
        // and the store stays writable afterwards
        store.append(make_report("u1", "headache")).unwrap();
        assert_eq!(store.list_by_user("u1").unwrap().len(), 1);
    }

    #[test]
    fn works_on_sqlite_adapter() {
        let store = ReportStore::new(crate::store::SqliteStore::open_in_memory().unwrap());
        let report = make_report("u1", "chest pain");
        let id = report.id;
        store.append(report).unwrap();
        assert_eq!(store.get_by_id(&id).unwrap().unwrap().id, id);
    }
}
