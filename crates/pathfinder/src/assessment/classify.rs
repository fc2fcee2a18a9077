//! The classification resolver: ranks a score vector and derives the primary
//! and secondary types together with the reliability-tier confidence.

use serde::{Deserialize, Serialize};

use super::domain::Archetype;
use super::scoring::{Facet, FacetScores, Reliability, ScoreVector};

/// Ranking of one facet dimension: the winner, the next two runners-up, and
/// the full vector they were drawn from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct FacetClassification<F: Facet> {
    pub primary: F,
    pub secondary: [F; 2],
    pub scores: FacetScores<F>,
}

/// Rank a facet vector.
///
/// The primary is the facet with the highest score; equal scores resolve to
/// whichever facet appears first in `F::ORDERED`, never to map iteration
/// order. Exactly two secondary facets are returned even when their scores are
/// zero or negative.
pub fn rank<F: Facet>(scores: FacetScores<F>) -> FacetClassification<F> {
    let ranked = scores.ranked();

    FacetClassification {
        primary: ranked[0].0,
        secondary: [ranked[1].0, ranked[2].0],
        scores,
    }
}

/// The Stage-1 classification attached to an assessment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub primary_type: Archetype,
    pub secondary_types: [Archetype; 2],
    pub scores: ScoreVector,
    pub reliability_score: u8,
    pub confidence: f64,
}

/// Resolve a score vector and its reliability into a classification.
pub fn classify(scores: ScoreVector, reliability: Reliability) -> Classification {
    let ranking = rank(scores);

    Classification {
        primary_type: ranking.primary,
        secondary_types: ranking.secondary,
        scores: ranking.scores,
        reliability_score: reliability.score,
        confidence: reliability.confidence,
    }
}
