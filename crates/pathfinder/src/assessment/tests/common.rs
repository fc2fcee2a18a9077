use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use crate::assessment::bank::stage1_bank;
use crate::assessment::domain::{
    AnswerSheet, AnswerValue, Archetype, AssessmentId, Question, QuestionBank, QuestionId,
    SubjectId,
};
use crate::assessment::repository::{
    AssessmentRecord, AssessmentRepository, EntitlementChecker, EntitlementError, RepositoryError,
};
use crate::assessment::service::AssessmentService;
use crate::assessment::stage2::{stage2_bank, Stage2Bank};

pub(super) fn subject(id: &str) -> SubjectId {
    SubjectId(id.to_string())
}

pub(super) fn sheet_from(pairs: &[(&str, u8)]) -> AnswerSheet {
    AnswerSheet::from_values(pairs.iter().map(|(id, value)| (*id, *value)))
        .expect("fixture answers are on the Likert scale")
}

/// Answer every Stage-1 question with the same value.
pub(super) fn complete_stage1_sheet(value: u8) -> AnswerSheet {
    let bank = stage1_bank();
    let mut sheet = AnswerSheet::new();
    for question in bank.questions() {
        sheet.record(
            question.id.clone(),
            AnswerValue::new(value).expect("fixture value valid"),
        );
    }
    sheet
}

/// Answer every Stage-2 question with the same value.
pub(super) fn complete_stage2_sheet(value: u8) -> AnswerSheet {
    let bank = stage2_bank();
    let mut sheet = AnswerSheet::new();
    for question in bank.questions() {
        sheet.record(
            question.id.clone(),
            AnswerValue::new(value).expect("fixture value valid"),
        );
    }
    sheet
}

/// A three-question bank with one negative weight, small enough to reason
/// about by hand in engine tests.
pub(super) fn mini_bank() -> QuestionBank {
    use Archetype::{AT, FV, GS, HC, VA};

    let q = |id: &str, weights: &[(Archetype, i32)]| Question {
        id: QuestionId::new(id),
        text: format!("mini prompt {id}"),
        category: "mini".to_string(),
        measurement: "mini".to_string(),
        weights: weights.to_vec(),
    };

    QuestionBank::new(vec![
        q("M1", &[(FV, 2), (VA, -1)]),
        q("M2", &[(AT, 1), (HC, 1)]),
        q("M3", &[(GS, 3)]),
    ])
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for MemoryRepository {
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

#[derive(Default, Clone)]
pub(super) struct StaticEntitlements {
    unlocked: Arc<Mutex<HashSet<String>>>,
}

impl StaticEntitlements {
    pub(super) fn unlock(&self, subject: &SubjectId) {
        self.unlocked
            .lock()
            .expect("entitlement mutex poisoned")
            .insert(subject.0.clone());
    }
}

impl EntitlementChecker for StaticEntitlements {
    fn premium_unlocked(&self, subject: &SubjectId) -> Result<bool, EntitlementError> {
        Ok(self
            .unlocked
            .lock()
            .expect("entitlement mutex poisoned")
            .contains(&subject.0))
    }
}

/// Entitlement provider that always fails, for fail-closed tests.
pub(super) struct FailingEntitlements;

impl EntitlementChecker for FailingEntitlements {
    fn premium_unlocked(&self, _subject: &SubjectId) -> Result<bool, EntitlementError> {
        Err(EntitlementError::Unavailable("gateway offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    Arc<AssessmentService<MemoryRepository, StaticEntitlements>>,
    Arc<MemoryRepository>,
    Arc<StaticEntitlements>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let entitlements = Arc::new(StaticEntitlements::default());
    let service = Arc::new(AssessmentService::new(
        repository.clone(),
        entitlements.clone(),
    ));
    (service, repository, entitlements)
}

/// Recursively collect every object key in a JSON value.
pub(super) fn collect_keys(value: &serde_json::Value, keys: &mut HashSet<String>) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, nested) in map {
                keys.insert(key.clone());
                collect_keys(nested, keys);
            }
        }
        serde_json::Value::Array(items) => {
            for item in items {
                collect_keys(item, keys);
            }
        }
        _ => {}
    }
}

pub(super) const PREMIUM_KEYS: [&str; 7] = [
    "premium_content",
    "ai_era_strengths",
    "ai_era_weaknesses",
    "industries",
    "basic_skills",
    "advanced_skills",
    "career_paths",
];

/// Build a Stage-2 bank accessor for tests that need its size.
pub(super) fn stage2_len() -> usize {
    stage2_bank().len()
}

pub(super) fn stage2_fixture() -> Stage2Bank {
    stage2_bank()
}
