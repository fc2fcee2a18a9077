use std::collections::HashSet;

use super::common::*;
use crate::assessment::assemble::{assemble_result, Entitlement};
use crate::assessment::bank::stage1_bank;
use crate::assessment::catalog::ArchetypeCatalog;
use crate::assessment::classify::{classify, Classification};
use crate::assessment::domain::Archetype;
use crate::assessment::scoring::{reliability, score_answers, FacetScores, ScoreVector};

fn stage1_classification(value: u8) -> Classification {
    let bank = stage1_bank();
    let sheet = complete_stage1_sheet(value);
    classify(
        score_answers(&sheet, bank.weight_rows()),
        reliability(&sheet, bank.len()),
    )
}

#[test]
fn locked_result_serializes_without_any_premium_key() {
    let classification = stage1_classification(4);
    let catalog = ArchetypeCatalog::builtin();

    let result = assemble_result(&classification, &catalog, Entitlement::Locked)
        .expect("builtin catalog covers every archetype");
    assert!(result.premium_content.is_none());

    let payload = serde_json::to_value(&result).expect("result serializes");
    let mut keys = HashSet::new();
    collect_keys(&payload, &mut keys);
    for premium_key in PREMIUM_KEYS {
        assert!(
            !keys.contains(premium_key),
            "locked payload leaked key '{premium_key}'"
        );
    }
    assert!(keys.contains("free_content"));
    assert!(keys.contains("type_characteristics"));
}

#[test]
fn unlocked_result_includes_the_premium_blocks() {
    let classification = stage1_classification(4);
    let catalog = ArchetypeCatalog::builtin();

    let result = assemble_result(&classification, &catalog, Entitlement::Unlocked)
        .expect("builtin catalog covers every archetype");
    let premium = result.premium_content.as_ref().expect("premium unlocked");
    assert!(!premium.ai_era_strengths.is_empty());
    assert!(!premium.career_paths.is_empty());

    let payload = serde_json::to_value(&result).expect("result serializes");
    let mut keys = HashSet::new();
    collect_keys(&payload, &mut keys);
    for premium_key in PREMIUM_KEYS {
        assert!(keys.contains(premium_key), "missing key '{premium_key}'");
    }
}

#[test]
fn missing_catalog_entry_is_a_fatal_integrity_error() {
    let classification = stage1_classification(4);
    let empty = ArchetypeCatalog::from_profiles(Vec::new());

    let err = assemble_result(&classification, &empty, Entitlement::Unlocked)
        .expect_err("no profile can match");
    assert_eq!(err.archetype, classification.primary_type);
}

#[test]
fn assembled_result_mirrors_the_classification() {
    let classification = stage1_classification(2);
    let catalog = ArchetypeCatalog::builtin();

    let result = assemble_result(&classification, &catalog, Entitlement::Locked)
        .expect("builtin catalog covers every archetype");

    assert_eq!(result.primary_type, classification.primary_type);
    assert_eq!(result.secondary_types, classification.secondary_types);
    assert_eq!(result.reliability_score, classification.reliability_score);
    assert_eq!(result.confidence, classification.confidence);
    assert!(result.top_traits.len() <= 3);
    assert!(!result.name.is_empty());
    assert!(!result.subtitle.is_empty());
}

#[test]
fn percentages_split_evenly_when_nothing_scored() {
    let shares = ScoreVector::zeroed().percentages();
    assert_eq!(shares.len(), 6);
    let total: f64 = shares.values().sum();
    assert!((total - 100.0).abs() < 1e-9);
    for share in shares.values() {
        assert!((share - 100.0 / 6.0).abs() < 1e-9);
    }
}

#[test]
fn percentages_share_the_positive_mass() {
    let mut scores: ScoreVector = FacetScores::zeroed();
    scores.add(Archetype::FV, 30);
    scores.add(Archetype::AT, 10);
    scores.add(Archetype::VA, -10);

    let shares = scores.percentages();
    // Base is |30| + |10| + |-10| = 50.
    assert!((shares[&Archetype::FV] - 60.0).abs() < 1e-9);
    assert!((shares[&Archetype::AT] - 20.0).abs() < 1e-9);
    assert_eq!(shares[&Archetype::VA], 0.0);
    assert_eq!(shares[&Archetype::GS], 0.0);
}

#[test]
fn builtin_catalog_covers_all_six_archetypes() {
    let catalog = ArchetypeCatalog::builtin();
    assert_eq!(catalog.len(), 6);
    for archetype in Archetype::ORDERED {
        let profile = catalog.profile(archetype).expect("profile present");
        assert_eq!(profile.archetype, archetype);
        assert!(!profile.traits.is_empty());
        assert!(!profile.free_content.growth_triggers.is_empty());
        assert!(!profile.premium_content.industries.is_empty());
    }
}
