use super::common::*;
use crate::assessment::bank::stage1_bank;
use crate::assessment::classify::{classify, rank};
use crate::assessment::domain::Archetype;
use crate::assessment::scoring::{reliability, score_answers, FacetScores, ScoreVector};

fn vector_from(entries: &[(Archetype, i32)]) -> ScoreVector {
    let mut scores = FacetScores::zeroed();
    for (archetype, delta) in entries {
        scores.add(*archetype, *delta);
    }
    scores
}

#[test]
fn primary_is_the_highest_scoring_archetype() {
    let scores = vector_from(&[
        (Archetype::FV, 12),
        (Archetype::AT, 30),
        (Archetype::VA, 7),
        (Archetype::GS, 29),
    ]);

    let ranking = rank(scores);
    assert_eq!(ranking.primary, Archetype::AT);
}

#[test]
fn ties_resolve_to_the_earlier_declared_archetype() {
    // GS and VA tie for first; VA is declared earlier so it wins.
    let scores = vector_from(&[(Archetype::GS, 20), (Archetype::VA, 20), (Archetype::MB, 5)]);
    let ranking = rank(scores);
    assert_eq!(ranking.primary, Archetype::VA);
    assert_eq!(ranking.secondary[0], Archetype::GS);

    // All six tie at zero; FV leads the declaration order.
    let flat = rank(ScoreVector::zeroed());
    assert_eq!(flat.primary, Archetype::FV);
    assert_eq!(flat.secondary, [Archetype::AT, Archetype::VA]);
}

#[test]
fn exactly_two_secondaries_even_with_negative_scores() {
    let scores = vector_from(&[
        (Archetype::HC, 10),
        (Archetype::FV, -4),
        (Archetype::AT, -9),
        (Archetype::VA, -9),
        (Archetype::MB, -9),
        (Archetype::GS, -9),
    ]);

    let ranking = rank(scores);
    assert_eq!(ranking.primary, Archetype::HC);
    // FV is the least negative; the remaining four tie and AT is declared
    // first among them.
    assert_eq!(ranking.secondary, [Archetype::FV, Archetype::AT]);
}

#[test]
fn classification_carries_reliability_and_confidence() {
    let bank = stage1_bank();
    let sheet = complete_stage1_sheet(4);

    let scores = score_answers(&sheet, bank.weight_rows());
    let classification = classify(scores, reliability(&sheet, bank.len()));

    assert_eq!(classification.reliability_score, 100);
    assert_eq!(classification.confidence, 0.95);
    assert_ne!(
        classification.secondary_types[0],
        classification.primary_type
    );
    assert_ne!(
        classification.secondary_types[1],
        classification.secondary_types[0]
    );
}

#[test]
fn identical_sheets_classify_identically() {
    let bank = stage1_bank();
    let sheet = sheet_from(&[("Q1", 5), ("Q7", 2), ("Q20", 4), ("Q33", 1)]);

    let first = classify(
        score_answers(&sheet, bank.weight_rows()),
        reliability(&sheet, bank.len()),
    );
    let second = classify(
        score_answers(&sheet, bank.weight_rows()),
        reliability(&sheet, bank.len()),
    );

    assert_eq!(first, second);
}
