//! The weighted scoring engine.
//!
//! Scoring is a pure function of an answer sheet and a set of weight rows:
//! every answered question contributes `value x weight` to each facet its row
//! names. Unanswered questions are skipped entirely, never treated as a zero
//! response. The engine is generic over the [`Facet`] being measured so the
//! Stage-2 extension can reuse it against different weight columns.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::domain::{AnswerSheet, Archetype, QuestionId};

/// A classification dimension: a closed set of mutually exclusive codes.
///
/// `ORDERED` lists every variant in tie-break priority order and must hold at
/// least three entries so a ranking always yields a primary and two runners-up.
pub trait Facet: Copy + Ord + fmt::Debug + Serialize + DeserializeOwned + 'static {
    const ORDERED: &'static [Self];

    /// Short stable code used in serialized payloads ("FV", "AT", ...).
    fn code(self) -> &'static str;

    fn from_code(code: &str) -> Option<Self> {
        Self::ORDERED.iter().copied().find(|f| f.code() == code)
    }
}

/// Accumulated scores per facet. Every facet key is always present, even when
/// nothing contributed to it, so sparse answer sets still produce a complete
/// vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct FacetScores<F: Facet>(BTreeMap<F, i32>);

/// Stage-1 scores over the six archetypes.
pub type ScoreVector = FacetScores<Archetype>;

impl<F: Facet> FacetScores<F> {
    /// A vector with every facet initialized to zero.
    pub fn zeroed() -> Self {
        Self(F::ORDERED.iter().map(|facet| (*facet, 0)).collect())
    }

    pub fn get(&self, facet: F) -> i32 {
        self.0.get(&facet).copied().unwrap_or(0)
    }

    pub fn add(&mut self, facet: F, delta: i32) {
        *self.0.entry(facet).or_insert(0) += delta;
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, i32)> + '_ {
        self.0.iter().map(|(facet, score)| (*facet, *score))
    }

    pub fn is_all_zero(&self) -> bool {
        self.0.values().all(|score| *score == 0)
    }

    /// Sum of absolute scores, the normalization base for percentages.
    pub fn total_magnitude(&self) -> i64 {
        self.0.values().map(|score| i64::from(score.abs())).sum()
    }

    /// Facets ordered by score descending; ties resolve to the facet listed
    /// earlier in `F::ORDERED`.
    pub fn ranked(&self) -> Vec<(F, i32)> {
        let mut entries: Vec<(F, i32)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }

    /// Distribution view for display: each facet's share of the positive mass.
    ///
    /// Negative scores contribute magnitude to the base but display as zero.
    /// An all-zero vector splits evenly rather than dividing by zero.
    pub fn percentages(&self) -> BTreeMap<F, f64> {
        let total = self.total_magnitude();
        if total == 0 {
            let share = 100.0 / F::ORDERED.len() as f64;
            return F::ORDERED.iter().map(|facet| (*facet, share)).collect();
        }

        self.iter()
            .map(|(facet, score)| {
                let positive = i64::from(score.max(0));
                (facet, positive as f64 / total as f64 * 100.0)
            })
            .collect()
    }
}

impl<F: Facet> Default for FacetScores<F> {
    fn default() -> Self {
        Self::zeroed()
    }
}

/// Score an answer sheet against weight rows.
///
/// Deterministic and idempotent: the output is a function of the inputs alone,
/// recomputed from scratch on every call.
pub fn score_answers<'a, F, I>(answers: &AnswerSheet, rows: I) -> FacetScores<F>
where
    F: Facet + 'a,
    I: IntoIterator<Item = (&'a QuestionId, &'a [(F, i32)])>,
{
    let mut scores = FacetScores::zeroed();

    for (question_id, weights) in rows {
        let Some(value) = answers.value(question_id) else {
            continue;
        };

        for (facet, weight) in weights {
            scores.add(*facet, i32::from(value.get()) * weight);
        }
    }

    scores
}

/// Heuristic trustworthiness of a classification.
///
/// Not a statistical confidence interval: `score` blends answer completeness
/// (70%) with response-pattern consistency (30%), and `confidence` maps that
/// through a discrete tier table. Both stages use this same formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reliability {
    /// 0-100 blend of completion rate and non-extreme response share.
    pub score: u8,
    /// Tiered confidence in 0..=1 derived from `score`.
    pub confidence: f64,
}

/// Compute the reliability of an answer sheet against a bank of
/// `expected_questions` prompts.
pub fn reliability(answers: &AnswerSheet, expected_questions: usize) -> Reliability {
    let answered = answers.len();

    let completion_rate = if expected_questions == 0 {
        0.0
    } else {
        (answered as f64 / expected_questions as f64).min(1.0)
    };

    let consistency = if answered == 0 {
        0.0
    } else {
        1.0 - answers.extreme_count() as f64 / answered as f64
    };

    let score = ((completion_rate * 0.7 + consistency * 0.3) * 100.0).round() as u8;

    Reliability {
        score,
        confidence: confidence_tier(score),
    }
}

/// Discrete confidence tiers over the reliability score.
pub const fn confidence_tier(score: u8) -> f64 {
    if score >= 90 {
        0.95
    } else if score >= 80 {
        0.85
    } else if score >= 70 {
        0.75
    } else if score >= 60 {
        0.65
    } else {
        0.55
    }
}
