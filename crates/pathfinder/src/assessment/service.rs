use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{error, info, warn};

use super::assemble::{assemble_result, Entitlement, FullResult, MissingArchetypeData};
use super::bank::stage1_bank;
use super::catalog::ArchetypeCatalog;
use super::classify::classify;
use super::domain::{
    AnswerSheet, AssessmentId, AssessmentStage, InvalidAnswerValue, QuestionBank, QuestionId,
    SubjectId,
};
use super::repository::{
    AssessmentRecord, AssessmentRepository, EntitlementChecker, EntitlementError, RepositoryError,
};
use super::scoring::{reliability, score_answers};
use super::stage2::{compute_detailed_result, stage2_bank, DetailedResult, Stage2Bank};

/// Service composing the banks, catalog, repository, and entitlement boundary.
///
/// All scoring runs synchronously in-process; the only I/O is through the
/// injected repository and entitlement traits.
pub struct AssessmentService<R, E> {
    repository: Arc<R>,
    entitlements: Arc<E>,
    stage1: QuestionBank,
    stage2: Stage2Bank,
    catalog: ArchetypeCatalog,
}

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_assessment_id() -> AssessmentId {
    let id = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AssessmentId(format!("asm-{id:06}"))
}

impl<R, E> AssessmentService<R, E>
where
    R: AssessmentRepository + 'static,
    E: EntitlementChecker + 'static,
{
    pub fn new(repository: Arc<R>, entitlements: Arc<E>) -> Self {
        Self::with_banks(
            repository,
            entitlements,
            stage1_bank(),
            stage2_bank(),
            ArchetypeCatalog::builtin(),
        )
    }

    pub fn with_banks(
        repository: Arc<R>,
        entitlements: Arc<E>,
        stage1: QuestionBank,
        stage2: Stage2Bank,
        catalog: ArchetypeCatalog,
    ) -> Self {
        Self {
            repository,
            entitlements,
            stage1,
            stage2,
            catalog,
        }
    }

    pub fn stage1_bank(&self) -> &QuestionBank {
        &self.stage1
    }

    pub fn stage2_bank(&self) -> &Stage2Bank {
        &self.stage2
    }

    /// Submit a complete Stage-1 answer sheet, returning the persisted record.
    ///
    /// Incomplete sheets are rejected so the caller prompts re-completion
    /// instead of silently storing a low-confidence result.
    pub fn submit_stage1(
        &self,
        subject: SubjectId,
        answers: AnswerSheet,
    ) -> Result<AssessmentRecord, ServiceError> {
        self.check_coverage(&answers, self.stage1.len(), |id| self.stage1.contains(id))?;

        let scores = score_answers(&answers, self.stage1.weight_rows());
        let classification = classify(scores, reliability(&answers, self.stage1.len()));

        let mut record = AssessmentRecord::open(next_assessment_id(), subject, answers);
        record.stage = AssessmentStage::Stage1Complete;
        record.stage1_result = Some(classification);

        let stored = self.repository.insert(record)?;
        info!(
            assessment_id = %stored.assessment_id.0,
            primary_type = ?stored.primary_type(),
            "stage-1 assessment recorded"
        );
        Ok(stored)
    }

    /// Assemble the display-ready result for an owned assessment.
    ///
    /// The entitlement is checked live on every read; a lookup failure is
    /// treated as locked so premium content can never leak through an outage.
    pub fn result(
        &self,
        subject: &SubjectId,
        assessment_id: &AssessmentId,
    ) -> Result<AssessmentResultView, ServiceError> {
        let record = self
            .repository
            .fetch(assessment_id)?
            .ok_or(RepositoryError::NotFound)?;

        if !record.is_owned_by(subject) {
            return Err(ServiceError::NotOwner(assessment_id.clone()));
        }

        let classification = record
            .stage1_result
            .as_ref()
            .ok_or_else(|| ServiceError::PrerequisiteMissing(assessment_id.clone()))?;

        let entitlement = match self.entitlements.premium_unlocked(&record.subject_id) {
            Ok(unlocked) => Entitlement::from_unlocked(unlocked),
            Err(err) => {
                warn!(error = %err, "entitlement lookup failed; serving locked result");
                Entitlement::Locked
            }
        };

        let result = assemble_result(classification, &self.catalog, entitlement).map_err(
            |integrity: MissingArchetypeData| {
                error!(
                    assessment_id = %record.assessment_id.0,
                    archetype = %integrity.archetype,
                    "classification produced an archetype missing from the catalog"
                );
                integrity
            },
        )?;

        Ok(AssessmentResultView {
            assessment_id: record.assessment_id.clone(),
            stage: record.stage.label(),
            result,
            detailed_result: record.detailed_result,
        })
    }

    /// Move an owned, paid-up assessment into Stage 2. Idempotent when the
    /// record is already in Stage 2.
    pub fn begin_stage2(
        &self,
        subject: &SubjectId,
        assessment_id: &AssessmentId,
    ) -> Result<AssessmentRecord, ServiceError> {
        let mut record = self.stage2_eligible_record(subject, assessment_id)?;

        if record.stage == AssessmentStage::Stage2InProgress {
            return Ok(record);
        }

        if !record
            .stage
            .can_transition(AssessmentStage::Stage2InProgress)
        {
            return Err(ServiceError::StageViolation {
                found: record.stage.label(),
                expected: AssessmentStage::Stage1Complete.label(),
            });
        }

        record.stage = AssessmentStage::Stage2InProgress;
        record.updated_at = Utc::now();
        self.repository.update(record.clone())?;
        Ok(record)
    }

    /// Submit a complete Stage-2 answer sheet, appending the detailed result
    /// to the existing record in one read-modify-write.
    pub fn submit_stage2(
        &self,
        subject: &SubjectId,
        assessment_id: &AssessmentId,
        answers: AnswerSheet,
    ) -> Result<AssessmentRecord, ServiceError> {
        let mut record = self.stage2_eligible_record(subject, assessment_id)?;

        if !record.stage.accepts_stage2_submission() {
            return Err(ServiceError::StageViolation {
                found: record.stage.label(),
                expected: AssessmentStage::Stage1Complete.label(),
            });
        }

        self.check_coverage(&answers, self.stage2.len(), |id| self.stage2.contains(id))?;

        let detailed = compute_detailed_result(&answers, &self.stage2);

        record.stage2_answers = Some(answers);
        record.detailed_result = Some(detailed);
        record.stage = AssessmentStage::Stage2Complete;
        record.updated_at = Utc::now();

        self.repository.update(record.clone())?;
        info!(
            assessment_id = %record.assessment_id.0,
            "stage-2 assessment recorded"
        );
        Ok(record)
    }

    /// Shared Stage-2 gate: record exists, has a Stage-1 result, is owned by
    /// the caller, and the subject is entitled. Failures are distinct so the
    /// API can tell "no result" from "not yours" from "not paid".
    fn stage2_eligible_record(
        &self,
        subject: &SubjectId,
        assessment_id: &AssessmentId,
    ) -> Result<AssessmentRecord, ServiceError> {
        let record = self
            .repository
            .fetch(assessment_id)?
            .ok_or_else(|| ServiceError::PrerequisiteMissing(assessment_id.clone()))?;

        if !record.is_owned_by(subject) {
            return Err(ServiceError::NotOwner(assessment_id.clone()));
        }

        if record.stage1_result.is_none() {
            return Err(ServiceError::PrerequisiteMissing(assessment_id.clone()));
        }

        if !self.entitlements.premium_unlocked(subject)? {
            return Err(ServiceError::PaymentRequired);
        }

        Ok(record)
    }

    fn check_coverage(
        &self,
        answers: &AnswerSheet,
        expected: usize,
        known: impl Fn(&QuestionId) -> bool,
    ) -> Result<(), ServiceError> {
        for id in answers.question_ids() {
            if !known(id) {
                return Err(ServiceError::UnknownQuestion(id.clone()));
            }
        }

        if answers.len() < expected {
            return Err(ServiceError::IncompleteAnswerSet {
                answered: answers.len(),
                expected,
            });
        }

        Ok(())
    }
}

/// Assembled result plus record metadata, the shape the API serves.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResultView {
    pub assessment_id: AssessmentId,
    pub stage: &'static str,
    pub result: FullResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_result: Option<DetailedResult>,
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    InvalidAnswer(#[from] InvalidAnswerValue),
    #[error("answer references unknown question '{}'", .0 .0)]
    UnknownQuestion(QuestionId),
    #[error("incomplete answer set: {answered} of {expected} questions answered")]
    IncompleteAnswerSet { answered: usize, expected: usize },
    #[error("no completed stage-1 result for assessment '{}'", .0 .0)]
    PrerequisiteMissing(AssessmentId),
    #[error("assessment '{}' is not owned by the requesting subject", .0 .0)]
    NotOwner(AssessmentId),
    #[error("stage-2 assessment requires an active premium entitlement")]
    PaymentRequired,
    #[error("assessment is in stage '{found}', expected '{expected}'")]
    StageViolation {
        found: &'static str,
        expected: &'static str,
    },
    #[error(transparent)]
    Integrity(#[from] MissingArchetypeData),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Entitlement(#[from] EntitlementError),
}
