use std::sync::Arc;

use chrono::Local;
use clap::Args;

use pathfinder::assessment::{
    AnswerSheet, AnswerValue, AssessmentService, QuestionBank, ServiceError, Stage2Bank,
    SubjectId,
};
use pathfinder::error::AppError;

use crate::infra::{ConfiguredEntitlements, InMemoryAssessmentRepository};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Subject id used for the scripted run
    #[arg(long, default_value = "demo-subject")]
    pub(crate) subject: String,
    /// Stop after Stage 1 and skip the premium walkthrough
    #[arg(long)]
    pub(crate) skip_stage2: bool,
}

/// Deterministic response pattern so repeated demo runs print the same result.
const RESPONSE_PATTERN: [u8; 8] = [4, 3, 5, 2, 4, 3, 1, 5];

fn scripted_sheet(ids: impl Iterator<Item = pathfinder::assessment::QuestionId>, offset: usize) -> AnswerSheet {
    let mut sheet = AnswerSheet::new();
    for (index, id) in ids.enumerate() {
        let value = RESPONSE_PATTERN[(index + offset) % RESPONSE_PATTERN.len()];
        if let Ok(value) = AnswerValue::new(value) {
            sheet.record(id, value);
        }
    }
    sheet
}

fn scripted_stage1_sheet(bank: &QuestionBank) -> AnswerSheet {
    scripted_sheet(bank.questions().iter().map(|question| question.id.clone()), 0)
}

fn scripted_stage2_sheet(bank: &Stage2Bank) -> AnswerSheet {
    scripted_sheet(bank.questions().iter().map(|question| question.id.clone()), 3)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        subject,
        skip_stage2,
    } = args;

    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let entitlements = Arc::new(ConfiguredEntitlements::default());
    let service = AssessmentService::new(repository, entitlements.clone());

    let subject = SubjectId(subject);
    println!(
        "Pathfinder assessment demo ({})",
        Local::now().date_naive()
    );

    let answers = scripted_stage1_sheet(service.stage1_bank());
    let record = service.submit_stage1(subject.clone(), answers)?;
    let classification = record.stage1_result.as_ref().ok_or_else(|| {
        AppError::Assessment(ServiceError::PrerequisiteMissing(
            record.assessment_id.clone(),
        ))
    })?;

    println!(
        "\nStage 1 ({} questions answered)",
        record.stage1_answers.len()
    );
    println!("  assessment:  {}", record.assessment_id.0);
    println!("  primary:     {}", classification.primary_type);
    println!(
        "  secondary:   {} / {}",
        classification.secondary_types[0], classification.secondary_types[1]
    );
    println!(
        "  reliability: {} (confidence {:.2})",
        classification.reliability_score, classification.confidence
    );
    println!("  score distribution:");
    for (archetype, share) in classification.scores.percentages() {
        println!("    {archetype}  {share:>5.1}%");
    }

    let view = service.result(&subject, &record.assessment_id)?;
    println!(
        "\nLocked result: {} ({})",
        view.result.name, view.result.subtitle
    );
    println!(
        "  premium content present: {}",
        view.result.premium_content.is_some()
    );

    if skip_stage2 {
        return Ok(());
    }

    // Simulate the purchase, then walk the premium path.
    entitlements.unlock(&subject);
    service.begin_stage2(&subject, &record.assessment_id)?;
    let answers = scripted_stage2_sheet(service.stage2_bank());
    let completed = service.submit_stage2(&subject, &record.assessment_id, answers)?;
    let detailed = completed.detailed_result.as_ref().ok_or_else(|| {
        AppError::Assessment(ServiceError::PrerequisiteMissing(
            record.assessment_id.clone(),
        ))
    })?;

    println!("\nStage 2 (after unlock)");
    println!("  refined archetype:   {}", detailed.final_archetype.primary);
    println!(
        "  adaptation style:    {:?}",
        detailed.ai_adaptation_style.primary
    );
    println!(
        "  learning driver:     {:?}",
        detailed.learning_driver.primary
    );
    println!(
        "  reliability:         {} (confidence {:.2})",
        detailed.reliability_score, detailed.confidence
    );

    let final_view = service.result(&subject, &record.assessment_id)?;
    println!(
        "\nUnlocked result now carries premium content: {}",
        final_view.result.premium_content.is_some()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathfinder::assessment::{stage1_bank, stage2_bank};

    #[test]
    fn scripted_sheets_cover_their_banks() {
        let stage1 = stage1_bank();
        let sheet = scripted_stage1_sheet(&stage1);
        assert_eq!(sheet.len(), stage1.len());

        let stage2 = stage2_bank();
        let sheet = scripted_stage2_sheet(&stage2);
        assert_eq!(sheet.len(), stage2.len());
    }

    #[test]
    fn demo_run_completes_both_stages() {
        let args = DemoArgs {
            subject: "demo-test-subject".to_string(),
            skip_stage2: false,
        };
        run_demo(args).expect("demo completes");
    }
}
