//! The result assembler: merges a classification with catalog display content,
//! gating premium blocks on the externally supplied entitlement.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::{ArchetypeCatalog, FreeContent, PremiumContent};
use super::classify::Classification;
use super::domain::Archetype;
use super::scoring::ScoreVector;

/// Externally determined premium access. The engine never computes this; the
/// payment gateway does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entitlement {
    Locked,
    Unlocked,
}

impl Entitlement {
    pub const fn is_unlocked(self) -> bool {
        matches!(self, Self::Unlocked)
    }

    pub fn from_unlocked(unlocked: bool) -> Self {
        if unlocked {
            Self::Unlocked
        } else {
            Self::Locked
        }
    }
}

/// Fatal integrity error: the engine produced an archetype the catalog does
/// not know. Signals a catalog/engine mismatch, never recoverable by
/// defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no catalog profile for archetype {archetype}; catalog and engine disagree")]
pub struct MissingArchetypeData {
    pub archetype: Archetype,
}

/// The assembled, display-ready result.
///
/// `premium_content` is `None` until the entitlement is confirmed; a locked
/// result therefore serializes without any premium field at all. Premium text
/// is never placed in a payload and hidden client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullResult {
    pub primary_type: Archetype,
    pub secondary_types: [Archetype; 2],
    pub scores: ScoreVector,
    pub percentages: BTreeMap<Archetype, f64>,
    pub reliability_score: u8,
    pub confidence: f64,
    pub name: String,
    pub english_name: String,
    pub subtitle: String,
    pub top_traits: Vec<String>,
    pub free_content: FreeContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_content: Option<PremiumContent>,
}

/// Merge a classification with its catalog profile.
pub fn assemble_result(
    classification: &Classification,
    catalog: &ArchetypeCatalog,
    entitlement: Entitlement,
) -> Result<FullResult, MissingArchetypeData> {
    let profile = catalog
        .profile(classification.primary_type)
        .ok_or(MissingArchetypeData {
            archetype: classification.primary_type,
        })?;

    let premium_content = if entitlement.is_unlocked() {
        Some(profile.premium_content.clone())
    } else {
        None
    };

    Ok(FullResult {
        primary_type: classification.primary_type,
        secondary_types: classification.secondary_types,
        scores: classification.scores.clone(),
        percentages: classification.scores.percentages(),
        reliability_score: classification.reliability_score,
        confidence: classification.confidence,
        name: profile.name.clone(),
        english_name: profile.english_name.clone(),
        subtitle: profile.subtitle.clone(),
        top_traits: profile.traits.iter().take(3).cloned().collect(),
        free_content: profile.free_content.clone(),
        premium_content,
    })
}
