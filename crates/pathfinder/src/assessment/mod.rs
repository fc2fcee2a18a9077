//! Assessment scoring, classification, assembly, and the two-stage extension.
//!
//! The engine is a pure function of an answer sheet and a question bank; the
//! service facade layers persistence, ownership, and entitlement checks on
//! top and the router exposes it over HTTP.

pub mod assemble;
pub mod bank;
pub mod catalog;
pub mod classify;
pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod stage2;

#[cfg(test)]
mod tests;

pub use assemble::{assemble_result, Entitlement, FullResult, MissingArchetypeData};
pub use bank::stage1_bank;
pub use catalog::{ArchetypeCatalog, ArchetypeProfile, FreeContent, PremiumContent};
pub use classify::{classify, rank, Classification, FacetClassification};
pub use domain::{
    AnswerSheet, AnswerValue, Archetype, AssessmentId, AssessmentStage, InvalidAnswerValue,
    Question, QuestionBank, QuestionId, SubjectId,
};
pub use repository::{
    AssessmentRecord, AssessmentRepository, AssessmentStatusView, EntitlementChecker,
    EntitlementError, RepositoryError,
};
pub use router::assessment_router;
pub use scoring::{
    confidence_tier, reliability, score_answers, Facet, FacetScores, Reliability, ScoreVector,
};
pub use service::{AssessmentResultView, AssessmentService, ServiceError};
pub use stage2::{
    compute_detailed_result, stage2_bank, AiAdaptationStyle, DetailedResult, LearningDriver,
    Stage2Bank, Stage2Question,
};
