use uuid::Uuid;

use crate::config;
use crate::models::WeeklyPlan;

use super::kv::KeyValueStore;
use super::StorageError;

/// Weekly plan collection. Same single-key, whole-collection discipline
/// as [`super::ReportStore`], but plans append at the tail (saved plans
/// read back in the order the user kept them).
pub struct PlanStore<S: KeyValueStore> {
    kv: S,
    key: String,
}

impl<S: KeyValueStore> PlanStore<S> {
    pub fn new(kv: S) -> Self {
        Self {
            kv,
            key: config::PLANS_KEY.to_string(),
        }
    }

    fn load(&self) -> Result<Vec<WeeklyPlan>, StorageError> {
        let Some(bytes) = self.kv.get(&self.key)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_slice(&bytes) {
            Ok(plans) => Ok(plans),
            Err(err) => {
                tracing::warn!(key = %self.key, %err, "Corrupt plan collection, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    pub fn append(&self, plan: WeeklyPlan) -> Result<(), StorageError> {
        let mut plans = self.load()?;
        plans.push(plan);
        let bytes = serde_json::to_vec(&plans)?;
        self.kv.set(&self.key, &bytes)
    }

    pub fn list_by_user(&self, user_id: &str) -> Result<Vec<WeeklyPlan>, StorageError> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|p| p.user_id == user_id)
            .collect())
    }

    pub fn get_by_id(&self, id: &Uuid) -> Result<Option<WeeklyPlan>, StorageError> {
        Ok(self.load()?.into_iter().find(|p| p.id == *id))
    }
}
