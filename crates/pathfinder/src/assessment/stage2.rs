//! The Stage-2 extension: a deeper, gated follow-up assessment.
//!
//! Stage-2 questions carry three independent weight columns. The same scoring
//! engine and resolver run once per column, yielding a refined archetype plus
//! two sub-dimension classifications (AI adaptation style and learning
//! driver) layered on top of the Stage-1 primary type, never replacing it.

use serde::{Deserialize, Serialize};

use super::classify::{rank, FacetClassification};
use super::domain::Archetype::{AT, FV, GS, HC, MB, VA};
use super::domain::{AnswerSheet, Archetype, QuestionId};
use super::scoring::{reliability, score_answers, Facet};

/// How a respondent folds AI into their working style.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum AiAdaptationStyle {
    /// Treats AI as a creative partner in open-ended work.
    #[serde(rename = "CC")]
    CoCreator,
    /// Delegates routine work to AI and engineers the handoff.
    #[serde(rename = "AM")]
    Automator,
    /// Uses AI as an instrument for exploration and sensemaking.
    #[serde(rename = "NV")]
    Navigator,
    /// Focuses on oversight, quality, and the human side of AI output.
    #[serde(rename = "GD")]
    Guardian,
}

impl Facet for AiAdaptationStyle {
    const ORDERED: &'static [Self] = &[
        Self::CoCreator,
        Self::Automator,
        Self::Navigator,
        Self::Guardian,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::CoCreator => "CC",
            Self::Automator => "AM",
            Self::Navigator => "NV",
            Self::Guardian => "GD",
        }
    }
}

/// What keeps a respondent learning.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum LearningDriver {
    #[serde(rename = "CU")]
    Curiosity,
    #[serde(rename = "MA")]
    Mastery,
    #[serde(rename = "IM")]
    Impact,
    #[serde(rename = "CN")]
    Connection,
}

impl Facet for LearningDriver {
    const ORDERED: &'static [Self] = &[
        Self::Curiosity,
        Self::Mastery,
        Self::Impact,
        Self::Connection,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::Curiosity => "CU",
            Self::Mastery => "MA",
            Self::Impact => "IM",
            Self::Connection => "CN",
        }
    }
}

/// One Stage-2 statement with its three weight columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage2Question {
    pub id: QuestionId,
    pub text: String,
    pub archetype_weights: Vec<(Archetype, i32)>,
    pub adaptation_weights: Vec<(AiAdaptationStyle, i32)>,
    pub driver_weights: Vec<(LearningDriver, i32)>,
}

/// The immutable Stage-2 question bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage2Bank {
    questions: Vec<Stage2Question>,
}

impl Stage2Bank {
    pub fn new(questions: Vec<Stage2Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Stage2Question] {
        &self.questions
    }

    pub fn contains(&self, id: &QuestionId) -> bool {
        self.questions.iter().any(|question| &question.id == id)
    }

    pub fn archetype_rows(&self) -> impl Iterator<Item = (&QuestionId, &[(Archetype, i32)])> {
        self.questions
            .iter()
            .map(|question| (&question.id, question.archetype_weights.as_slice()))
    }

    pub fn adaptation_rows(
        &self,
    ) -> impl Iterator<Item = (&QuestionId, &[(AiAdaptationStyle, i32)])> {
        self.questions
            .iter()
            .map(|question| (&question.id, question.adaptation_weights.as_slice()))
    }

    pub fn driver_rows(&self) -> impl Iterator<Item = (&QuestionId, &[(LearningDriver, i32)])> {
        self.questions
            .iter()
            .map(|question| (&question.id, question.driver_weights.as_slice()))
    }
}

/// The granular result attached to a record on Stage-2 completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedResult {
    pub final_archetype: FacetClassification<Archetype>,
    pub ai_adaptation_style: FacetClassification<AiAdaptationStyle>,
    pub learning_driver: FacetClassification<LearningDriver>,
    pub reliability_score: u8,
    pub confidence: f64,
}

/// Score a Stage-2 answer sheet against all three weight columns.
///
/// Pure and deterministic, exactly like Stage-1 scoring; the reliability
/// formula is shared with Stage-1 as well.
pub fn compute_detailed_result(answers: &AnswerSheet, bank: &Stage2Bank) -> DetailedResult {
    let final_archetype = rank(score_answers(answers, bank.archetype_rows()));
    let ai_adaptation_style = rank(score_answers(answers, bank.adaptation_rows()));
    let learning_driver = rank(score_answers(answers, bank.driver_rows()));
    let reliability = reliability(answers, bank.len());

    DetailedResult {
        final_archetype,
        ai_adaptation_style,
        learning_driver,
        reliability_score: reliability.score,
        confidence: reliability.confidence,
    }
}

fn s2(
    id: &str,
    text: &str,
    archetype_weights: &[(Archetype, i32)],
    adaptation_weights: &[(AiAdaptationStyle, i32)],
    driver_weights: &[(LearningDriver, i32)],
) -> Stage2Question {
    Stage2Question {
        id: QuestionId::new(id),
        text: text.to_string(),
        archetype_weights: archetype_weights.to_vec(),
        adaptation_weights: adaptation_weights.to_vec(),
        driver_weights: driver_weights.to_vec(),
    }
}

/// Build the shipped Stage-2 bank.
pub fn stage2_bank() -> Stage2Bank {
    use AiAdaptationStyle::{Automator, CoCreator, Guardian, Navigator};
    use LearningDriver::{Connection, Curiosity, Impact, Mastery};

    Stage2Bank::new(vec![
        s2(
            "S2Q1",
            "Given an open brief, I start by generating many directions with AI before \
             committing to one.",
            &[(FV, 3), (AT, 1)],
            &[(CoCreator, 3), (Navigator, 1)],
            &[(Curiosity, 2)],
        ),
        s2(
            "S2Q2",
            "I map my recurring tasks and hand every stable one to automation.",
            &[(MB, 3), (GS, 1)],
            &[(Automator, 3)],
            &[(Mastery, 2)],
        ),
        s2(
            "S2Q3",
            "Before trusting an AI answer I trace how it could be wrong.",
            &[(VA, 3), (MB, 1)],
            &[(Guardian, 3), (Navigator, 1)],
            &[(Mastery, 2)],
        ),
        s2(
            "S2Q4",
            "I use AI mostly to survey unfamiliar territory quickly and build a mental map.",
            &[(AT, 3), (FV, 1)],
            &[(Navigator, 3)],
            &[(Curiosity, 3)],
        ),
        s2(
            "S2Q5",
            "My best work happens in live back-and-forth with a model, shaping output \
             iteratively.",
            &[(FV, 3), (HC, 1)],
            &[(CoCreator, 3)],
            &[(Curiosity, 1), (Impact, 1)],
        ),
        s2(
            "S2Q6",
            "I measure an AI rollout by the hours it returns to the team.",
            &[(MB, 2), (GS, 2)],
            &[(Automator, 3)],
            &[(Impact, 3)],
        ),
        s2(
            "S2Q7",
            "I keep a personal checklist for reviewing machine-produced work before it ships.",
            &[(VA, 2), (MB, 2)],
            &[(Guardian, 3)],
            &[(Mastery, 3)],
        ),
        s2(
            "S2Q8",
            "When a field is new to me, I would rather interview its experts than read its \
             textbook.",
            &[(HC, 2), (AT, 2)],
            &[(Navigator, 2)],
            &[(Connection, 3)],
        ),
        s2(
            "S2Q9",
            "I am energized when a prototype I sketched becomes something a real user touches.",
            &[(FV, 2), (MB, 2)],
            &[(CoCreator, 2), (Automator, 1)],
            &[(Impact, 3)],
        ),
        s2(
            "S2Q10",
            "Rules for acceptable AI use should exist before the first experiment, not after.",
            &[(HC, 2), (VA, 1), (GS, 1)],
            &[(Guardian, 3)],
            &[(Connection, 1), (Mastery, 1)],
        ),
        s2(
            "S2Q11",
            "I follow model releases and papers the way others follow sports seasons.",
            &[(AT, 3), (VA, 1)],
            &[(Navigator, 2), (CoCreator, 1)],
            &[(Curiosity, 3)],
        ),
        s2(
            "S2Q12",
            "Half-automated workflows annoy me; I keep refining until the seams disappear.",
            &[(MB, 3), (VA, 1)],
            &[(Automator, 3)],
            &[(Mastery, 3)],
        ),
        s2(
            "S2Q13",
            "I would trade some personal output for a measurable lift in the whole team's \
             output.",
            &[(HC, 3), (GS, 2)],
            &[(Guardian, 1), (Automator, 1)],
            &[(Connection, 3), (Impact, 1)],
        ),
        s2(
            "S2Q14",
            "Long-range bets interest me more than this quarter's wins.",
            &[(GS, 3), (FV, 2)],
            &[(Navigator, 2)],
            &[(Impact, 2)],
        ),
        s2(
            "S2Q15",
            "I enjoy writing the prompt more than reading the answer.",
            &[(FV, 2), (AT, 1)],
            &[(CoCreator, 3)],
            &[(Curiosity, 2)],
        ),
        s2(
            "S2Q16",
            "Data quality problems bother me more than missed deadlines.",
            &[(VA, 3)],
            &[(Guardian, 2), (Automator, 1)],
            &[(Mastery, 2)],
        ),
        s2(
            "S2Q17",
            "I learn a tool best by wiring it into a workflow I actually depend on.",
            &[(MB, 2), (AT, 1), (FV, 1)],
            &[(Automator, 2), (CoCreator, 1)],
            &[(Mastery, 2), (Impact, 1)],
        ),
        s2(
            "S2Q18",
            "I read widely outside my field on the theory that the best ideas immigrate.",
            &[(AT, 3), (FV, 2)],
            &[(Navigator, 3)],
            &[(Curiosity, 3)],
        ),
        s2(
            "S2Q19",
            "Mentoring someone through their first AI project is more satisfying than \
             finishing my own.",
            &[(HC, 3), (AT, 1)],
            &[(Guardian, 1), (CoCreator, 1)],
            &[(Connection, 3)],
        ),
        s2(
            "S2Q20",
            "I instinctively translate a vague goal into milestones before doing anything else.",
            &[(GS, 3), (MB, 2)],
            &[(Automator, 1), (Navigator, 1)],
            &[(Impact, 2), (Mastery, 1)],
        ),
        s2(
            "S2Q21",
            "An unexplained model answer is a prompt for investigation, not acceptance.",
            &[(VA, 3), (AT, 1)],
            &[(Navigator, 2), (Guardian, 2)],
            &[(Curiosity, 2), (Mastery, 1)],
        ),
        s2(
            "S2Q22",
            "I would rather own the roadmap than the implementation.",
            &[(GS, 3), (HC, 1)],
            &[(Navigator, 2)],
            &[(Impact, 3)],
        ),
        s2(
            "S2Q23",
            "Work feels meaningful when someone tells me it changed how they do theirs.",
            &[(HC, 2), (FV, 1), (GS, 1)],
            &[(CoCreator, 1), (Guardian, 1)],
            &[(Connection, 3), (Impact, 2)],
        ),
        s2(
            "S2Q24",
            "I keep a running log of experiments, including the failures, and reread it.",
            &[(VA, 2), (AT, 2), (MB, 1)],
            &[(Guardian, 2), (Navigator, 1)],
            &[(Mastery, 3), (Curiosity, 1)],
        ),
    ])
}
