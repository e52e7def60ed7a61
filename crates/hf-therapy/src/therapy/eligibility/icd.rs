use super::super::parameters::ValidatedParameters;
use super::{ClassOfEvidence, EligibilityResult, EvidenceLevel};

const PRIMARY_PREVENTION_EF_MAX: f64 = 35.0;
const ISCHEMIC_EF_MAX: f64 = 30.0;

const SECONDARY_PREVENTION: &str = "Secondary prevention indication (prior VT/VF/SCD)";
const ISCHEMIC_PRIMARY_PREVENTION: &str =
    "Primary prevention: Ischemic cardiomyopathy, EF ≤30%";
const NON_ISCHEMIC_PRIMARY_PREVENTION: &str =
    "Primary prevention: Non-ischemic cardiomyopathy, EF ≤35%";

/// ICD eligibility. Secondary prevention is checked first and ends evaluation.
///
/// An ischemic patient with EF between 30 and 35 meets neither primary-prevention
/// branch and is reported as not eligible.
pub fn evaluate_icd(params: &ValidatedParameters) -> EligibilityResult {
    if params.prior_scd_or_vt_vf {
        return EligibilityResult::indicated(
            ClassOfEvidence::ClassI,
            EvidenceLevel::A,
            vec![SECONDARY_PREVENTION.to_string()],
        );
    }

    let unmet = primary_prevention_gate(params);
    if !unmet.is_empty() {
        return EligibilityResult::not_indicated(unmet);
    }

    let ef = params.ejection_fraction;
    if params.ischemic_cardiomyopathy && ef <= ISCHEMIC_EF_MAX {
        EligibilityResult::indicated(
            ClassOfEvidence::ClassI,
            EvidenceLevel::A,
            vec![ISCHEMIC_PRIMARY_PREVENTION.to_string()],
        )
    } else if !params.ischemic_cardiomyopathy && ef <= PRIMARY_PREVENTION_EF_MAX {
        EligibilityResult::indicated(
            ClassOfEvidence::ClassI,
            EvidenceLevel::B,
            vec![NON_ISCHEMIC_PRIMARY_PREVENTION.to_string()],
        )
    } else {
        EligibilityResult::not_indicated(vec![format!(
            "Ischemic cardiomyopathy with EF {ef}% above the 30% primary-prevention threshold"
        )])
    }
}

fn primary_prevention_gate(params: &ValidatedParameters) -> Vec<String> {
    let mut unmet = Vec::new();
    if params.ejection_fraction > PRIMARY_PREVENTION_EF_MAX {
        unmet.push(format!(
            "EF {}% above the 35% primary-prevention threshold",
            params.ejection_fraction
        ));
    }
    if !params.on_optimal_medical_therapy {
        unmet.push("Not on optimal medical therapy".to_string());
    }
    if !params.life_expectancy_over_1_year {
        unmet.push("Life expectancy under 1 year".to_string());
    }
    unmet
}
