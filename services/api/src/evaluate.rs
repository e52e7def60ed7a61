use crate::infra::read_parameters;
use crate::render::{render_patient, render_pillars};
use chrono::{DateTime, Utc};
use clap::Args;
use hf_therapy::error::AppError;
use hf_therapy::therapy::{
    evaluate_cohort, grade_label, recommend, CohortImporter, CohortOutcome, GdmtPlan,
    Recommendation, RiskLevel, SafetyReport,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// JSON file holding one patient's clinical parameters
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the evaluation as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CohortArgs {
    /// Worklist CSV with one patient per row
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EvaluationReport {
    pub(crate) evaluated_at: DateTime<Utc>,
    pub(crate) recommendation: Recommendation,
    pub(crate) safety: SafetyReport,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let params = read_parameters(&args.input)?.validate()?;
    let report = EvaluationReport {
        evaluated_at: Utc::now(),
        recommendation: recommend(&params),
        safety: SafetyReport::for_parameters(&params),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Evaluation for {}", args.input.display());
        print!("{}", render_patient(&report.recommendation, &report.safety));
        let plan = GdmtPlan::default().reconcile(&report.safety.alerts());
        print!("{}", render_pillars(&plan));
    }

    Ok(())
}

pub(crate) fn run_cohort(args: CohortArgs) -> Result<(), AppError> {
    let entries = CohortImporter::from_path(&args.csv)?;
    let outcomes = evaluate_cohort(entries);

    println!(
        "Cohort {} ({} patients)",
        args.csv.display(),
        outcomes.len()
    );
    for outcome in &outcomes {
        println!("{}", cohort_line(outcome));
    }

    let rejected = outcomes
        .iter()
        .filter(|outcome| outcome.result.is_err())
        .count();
    if rejected > 0 {
        println!("{rejected} row(s) rejected; correct the values above and re-run");
    }

    Ok(())
}

pub(crate) fn cohort_line(outcome: &CohortOutcome) -> String {
    match &outcome.result {
        Ok(recommendation) => {
            let risk = RiskLevel::from_alerts(&recommendation.contraindications);
            format!(
                "- {}: {} ({}) | GDMT risk {} | {} alert(s)",
                outcome.patient_id,
                recommendation.primary.label(),
                grade_label(
                    recommendation.class_of_evidence,
                    recommendation.evidence_level
                ),
                risk.label(),
                recommendation.contraindications.len()
            )
        }
        Err(err) => format!("- {}: rejected ({err})", outcome.patient_id),
    }
}
