use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::classify::Classification;
use super::domain::{AnswerSheet, Archetype, AssessmentId, AssessmentStage, SubjectId};
use super::stage2::DetailedResult;

/// Persisted assessment state for one subject.
///
/// Created on Stage-1 submission and mutated, never replaced, when Stage-2
/// answers and the detailed result are appended. The calling code must treat
/// the Stage-2 update as a single read-modify-write against the stored record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub assessment_id: AssessmentId,
    pub subject_id: SubjectId,
    pub stage: AssessmentStage,
    pub stage1_answers: AnswerSheet,
    pub stage1_result: Option<Classification>,
    pub stage2_answers: Option<AnswerSheet>,
    pub detailed_result: Option<DetailedResult>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AssessmentRecord {
    /// Open a fresh record for a Stage-1 sitting.
    pub fn open(assessment_id: AssessmentId, subject_id: SubjectId, answers: AnswerSheet) -> Self {
        let now = Utc::now();
        Self {
            assessment_id,
            subject_id,
            stage: AssessmentStage::Stage1InProgress,
            stage1_answers: answers,
            stage1_result: None,
            stage2_answers: None,
            detailed_result: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, subject: &SubjectId) -> bool {
        &self.subject_id == subject
    }

    pub fn primary_type(&self) -> Option<Archetype> {
        self.stage1_result
            .as_ref()
            .map(|result| result.primary_type)
    }

    pub fn status_view(&self) -> AssessmentStatusView {
        AssessmentStatusView {
            assessment_id: self.assessment_id.clone(),
            stage: self.stage.label(),
            primary_type: self.primary_type(),
            confidence: self
                .stage1_result
                .as_ref()
                .map(|result| result.confidence),
            detailed_available: self.detailed_result.is_some(),
        }
    }
}

/// Sanitized status exposed by the API; carries no gated content.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentStatusView {
    pub assessment_id: AssessmentId,
    pub stage: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_type: Option<Archetype>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    pub detailed_available: bool,
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError>;
    fn update(&self, record: AssessmentRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError>;
    fn latest_for_subject(
        &self,
        subject: &SubjectId,
    ) -> Result<Option<AssessmentRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Boundary to the payment system: answers "has this subject paid?".
///
/// The engine only ever consumes the boolean; checkout sessions, webhooks,
/// and retries live entirely on the other side of this trait.
pub trait EntitlementChecker: Send + Sync {
    fn premium_unlocked(&self, subject: &SubjectId) -> Result<bool, EntitlementError>;
}

/// Entitlement lookup failure. Treated as locked by callers that must fail
/// closed.
#[derive(Debug, thiserror::Error)]
pub enum EntitlementError {
    #[error("entitlement provider unavailable: {0}")]
    Unavailable(String),
}
