use std::collections::{HashMap, HashSet};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use metrics_exporter_prometheus::PrometheusHandle;
use pathfinder::assessment::{
    AssessmentId, AssessmentRecord, AssessmentRepository, EntitlementChecker, EntitlementError,
    RepositoryError, SubjectId,
};
use pathfinder::config::EntitlementConfig;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAssessmentRepository {
    records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for InMemoryAssessmentRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.assessment_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.assessment_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: AssessmentRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.assessment_id) {
            guard.insert(record.assessment_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn latest_for_subject(
        &self,
        subject: &SubjectId,
    ) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| &record.subject_id == subject)
            .max_by_key(|record| record.created_at)
            .cloned())
    }
}

/// Entitlement checker backed by the configured allow-list.
///
/// Stands in for the payment gateway in local and demo deployments; the
/// answer is authoritative and the service fails closed without it.
#[derive(Default, Clone)]
pub(crate) struct ConfiguredEntitlements {
    unlocked: Arc<Mutex<HashSet<String>>>,
}

impl ConfiguredEntitlements {
    pub(crate) fn from_config(config: &EntitlementConfig) -> Self {
        Self {
            unlocked: Arc::new(Mutex::new(
                config.unlocked_subjects.iter().cloned().collect(),
            )),
        }
    }

    pub(crate) fn unlock(&self, subject: &SubjectId) {
        self.unlocked
            .lock()
            .expect("entitlement mutex poisoned")
            .insert(subject.0.clone());
    }
}

impl EntitlementChecker for ConfiguredEntitlements {
    fn premium_unlocked(&self, subject: &SubjectId) -> Result<bool, EntitlementError> {
        Ok(self
            .unlocked
            .lock()
            .expect("entitlement mutex poisoned")
            .contains(&subject.0))
    }
}
