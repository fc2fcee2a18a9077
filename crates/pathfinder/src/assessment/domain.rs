use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::scoring::Facet;

/// The six career archetypes measured by the assessment.
///
/// Declaration order doubles as the documented tie-break priority: when two
/// archetypes accumulate the same score, the one listed first wins. This keeps
/// classification independent of any map iteration order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Archetype {
    FV,
    AT,
    VA,
    HC,
    MB,
    GS,
}

impl Archetype {
    pub const ORDERED: [Self; 6] = [
        Self::FV,
        Self::AT,
        Self::VA,
        Self::HC,
        Self::MB,
        Self::GS,
    ];
}

impl Facet for Archetype {
    const ORDERED: &'static [Self] = &Archetype::ORDERED;

    fn code(self) -> &'static str {
        match self {
            Self::FV => "FV",
            Self::AT => "AT",
            Self::VA => "VA",
            Self::HC => "HC",
            Self::MB => "MB",
            Self::GS => "GS",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Facet::code(*self))
    }
}

/// Raised when an answer arrives outside the 1-5 Likert scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("answer value {0} is outside the Likert scale 1-5")]
pub struct InvalidAnswerValue(pub u8);

/// A validated Likert response (1 = strongly disagree, 5 = strongly agree).
///
/// "Unanswered" is represented by the absence of an [`AnswerSheet`] entry, never
/// by a sentinel value; a zero cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct AnswerValue(u8);

impl AnswerValue {
    pub fn new(raw: u8) -> Result<Self, InvalidAnswerValue> {
        if (1..=5).contains(&raw) {
            Ok(Self(raw))
        } else {
            Err(InvalidAnswerValue(raw))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Whether the response sits at a scale extreme (1 or 5).
    pub const fn is_extreme(self) -> bool {
        self.0 == 1 || self.0 == 5
    }
}

impl TryFrom<u8> for AnswerValue {
    type Error = InvalidAnswerValue;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<AnswerValue> for u8 {
    fn from(value: AnswerValue) -> Self {
        value.0
    }
}

/// Identifier wrapper for bank questions.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct QuestionId(pub String);

impl QuestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// A respondent's answers keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    answers: BTreeMap<QuestionId, AnswerValue>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sheet from raw `(id, value)` pairs, validating every value.
    pub fn from_values<I, S>(pairs: I) -> Result<Self, InvalidAnswerValue>
    where
        I: IntoIterator<Item = (S, u8)>,
        S: Into<String>,
    {
        let mut sheet = Self::new();
        for (id, raw) in pairs {
            sheet.record(QuestionId::new(id), AnswerValue::new(raw)?);
        }
        Ok(sheet)
    }

    /// Record an answer, replacing any earlier response to the same question.
    pub fn record(&mut self, id: QuestionId, value: AnswerValue) {
        self.answers.insert(id, value);
    }

    pub fn value(&self, id: &QuestionId) -> Option<AnswerValue> {
        self.answers.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn question_ids(&self) -> impl Iterator<Item = &QuestionId> {
        self.answers.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = AnswerValue> + '_ {
        self.answers.values().copied()
    }

    /// Count of responses at the scale extremes, used by the reliability metric.
    pub fn extreme_count(&self) -> usize {
        self.values().filter(|value| value.is_extreme()).count()
    }
}

/// A scored question: prompt metadata plus its per-archetype weight row.
///
/// `category` and `measurement` are descriptive only; scoring reads nothing but
/// `weights`. Absent archetypes imply a weight of zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub category: String,
    pub measurement: String,
    pub weights: Vec<(Archetype, i32)>,
}

/// The immutable, ordered Stage-1 question bank loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn contains(&self, id: &QuestionId) -> bool {
        self.questions.iter().any(|question| &question.id == id)
    }

    /// Weight rows in bank order, the shape the scoring engine consumes.
    pub fn weight_rows(&self) -> impl Iterator<Item = (&QuestionId, &[(Archetype, i32)])> {
        self.questions
            .iter()
            .map(|question| (&question.id, question.weights.as_slice()))
    }
}

/// Identifier wrapper for persisted assessments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

/// Identifier for the person (or anonymous session) taking the assessment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubjectId(pub String);

/// Progress of an assessment through its two stages.
///
/// "Not started" has no representation here: it is the absence of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStage {
    Stage1InProgress,
    Stage1Complete,
    Stage2InProgress,
    Stage2Complete,
}

impl AssessmentStage {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stage1InProgress => "stage1_in_progress",
            Self::Stage1Complete => "stage1_complete",
            Self::Stage2InProgress => "stage2_in_progress",
            Self::Stage2Complete => "stage2_complete",
        }
    }

    /// Whether `next` is a legal forward transition from this stage.
    pub const fn can_transition(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Stage1InProgress, Self::Stage1Complete)
                | (Self::Stage1Complete, Self::Stage2InProgress)
                | (Self::Stage2InProgress, Self::Stage2Complete)
        )
    }

    /// Stages from which a Stage-2 submission is acceptable.
    pub const fn accepts_stage2_submission(self) -> bool {
        matches!(self, Self::Stage1Complete | Self::Stage2InProgress)
    }
}
