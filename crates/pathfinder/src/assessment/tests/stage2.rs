use super::common::*;
use crate::assessment::domain::{AnswerValue, Archetype};
use crate::assessment::scoring::reliability;
use crate::assessment::stage2::{
    compute_detailed_result, AiAdaptationStyle, LearningDriver,
};

#[test]
fn stage2_bank_rows_are_well_formed() {
    let bank = stage2_fixture();
    assert_eq!(bank.len(), 24);

    let mut seen = std::collections::HashSet::new();
    for question in bank.questions() {
        assert!(seen.insert(question.id.clone()), "duplicate question id");
        assert!(!question.archetype_weights.is_empty());
        assert!(!question.adaptation_weights.is_empty());
        assert!(!question.driver_weights.is_empty());
    }
}

#[test]
fn detailed_result_classifies_all_three_dimensions() {
    let bank = stage2_fixture();
    let sheet = complete_stage2_sheet(3);

    let detailed = compute_detailed_result(&sheet, &bank);

    // Uniform answers leave the bank's own weight mass in charge.
    assert_eq!(
        detailed.ai_adaptation_style.primary,
        AiAdaptationStyle::Navigator
    );
    assert_eq!(detailed.learning_driver.primary, LearningDriver::Mastery);
    assert_eq!(detailed.final_archetype.secondary.len(), 2);
    assert_eq!(detailed.reliability_score, 100);
    assert_eq!(detailed.confidence, 0.95);
}

#[test]
fn automation_leaning_answers_resolve_to_the_automator_style() {
    let bank = stage2_fixture();
    let mut sheet = complete_stage2_sheet(3);
    for id in ["S2Q2", "S2Q6", "S2Q12"] {
        let question = bank
            .questions()
            .iter()
            .find(|question| question.id.0 == id)
            .expect("bank question present");
        sheet.record(
            question.id.clone(),
            AnswerValue::new(5).expect("fixture value valid"),
        );
    }

    let detailed = compute_detailed_result(&sheet, &bank);

    assert_eq!(
        detailed.ai_adaptation_style.primary,
        AiAdaptationStyle::Automator
    );
    assert_eq!(detailed.final_archetype.primary, Archetype::MB);
    assert_eq!(detailed.learning_driver.primary, LearningDriver::Mastery);
}

#[test]
fn stage2_reliability_uses_the_shared_formula() {
    let bank = stage2_fixture();
    let sheet = complete_stage2_sheet(3);

    let detailed = compute_detailed_result(&sheet, &bank);
    let direct = reliability(&sheet, stage2_len());

    assert_eq!(detailed.reliability_score, direct.score);
    assert_eq!(detailed.confidence, direct.confidence);

    // All-extreme answers drop into a lower tier, same as Stage 1.
    let extreme = compute_detailed_result(&complete_stage2_sheet(5), &bank);
    assert_eq!(extreme.reliability_score, 70);
    assert_eq!(extreme.confidence, 0.75);
}

#[test]
fn detailed_result_serializes_with_short_codes() {
    let bank = stage2_fixture();
    let detailed = compute_detailed_result(&complete_stage2_sheet(3), &bank);

    let payload = serde_json::to_value(&detailed).expect("detailed result serializes");
    assert_eq!(payload["ai_adaptation_style"]["primary"], "NV");
    assert_eq!(payload["learning_driver"]["primary"], "MA");
    assert!(payload["final_archetype"]["scores"].is_object());
}
