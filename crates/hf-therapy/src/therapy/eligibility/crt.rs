use super::super::parameters::{QrsMorphology, ValidatedParameters};
use super::icd::evaluate_icd;
use super::{ClassOfEvidence, EligibilityResult, EvidenceLevel};

const CRT_EF_MAX: f64 = 35.0;
const QRS_WIDE_MS: f64 = 150.0;
const QRS_INTERMEDIATE_MS: f64 = 120.0;

/// CRT eligibility.
///
/// EF ≤35%, optimal medical therapy, and NYHA II-IV are a joint precondition. QRS
/// 120-149 ms without LBBB and QRS under 120 ms are not eligible.
pub fn evaluate_crt(params: &ValidatedParameters) -> EligibilityResult {
    let mut unmet = Vec::new();
    if params.ejection_fraction > CRT_EF_MAX {
        unmet.push(format!(
            "EF {}% above the 35% CRT threshold",
            params.ejection_fraction
        ));
    }
    if !params.on_optimal_medical_therapy {
        unmet.push("Not on optimal medical therapy".to_string());
    }
    if !params.nyha_class.is_symptomatic() {
        unmet.push(format!(
            "NYHA class {} outside II-IV",
            params.nyha_class.label()
        ));
    }
    if !unmet.is_empty() {
        return EligibilityResult::not_indicated(unmet);
    }

    let qrs = params.qrs_duration_ms;
    let lbbb = params.qrs_morphology == QrsMorphology::Lbbb;

    if qrs >= QRS_WIDE_MS && lbbb {
        EligibilityResult::indicated(
            ClassOfEvidence::ClassI,
            EvidenceLevel::A,
            vec![format!("QRS {qrs} ms (≥150) with LBBB morphology")],
        )
    } else if (QRS_INTERMEDIATE_MS..QRS_WIDE_MS).contains(&qrs) && lbbb {
        EligibilityResult::indicated(
            ClassOfEvidence::ClassIIa,
            EvidenceLevel::B,
            vec![format!("QRS {qrs} ms (120-149) with LBBB morphology")],
        )
    } else if qrs >= QRS_WIDE_MS {
        EligibilityResult::indicated(
            ClassOfEvidence::ClassIIa,
            EvidenceLevel::B,
            vec![format!(
                "QRS {qrs} ms (≥150) with {} morphology",
                params.qrs_morphology.label()
            )],
        )
    } else if qrs < QRS_INTERMEDIATE_MS {
        EligibilityResult::not_indicated(vec![format!("QRS {qrs} ms below 120 ms")])
    } else {
        EligibilityResult::not_indicated(vec![format!(
            "QRS {qrs} ms (120-149) without LBBB morphology"
        )])
    }
}

/// CRT-D requires independent CRT and ICD eligibility; the grade is taken from CRT.
pub fn combine_crtd(crt: &EligibilityResult, icd: &EligibilityResult) -> EligibilityResult {
    if crt.eligible && icd.eligible {
        let mut rationale = vec!["CRT and ICD criteria both met".to_string()];
        rationale.extend(crt.rationale.iter().cloned());
        rationale.extend(icd.rationale.iter().cloned());
        return EligibilityResult {
            eligible: true,
            class_of_evidence: crt.class_of_evidence,
            evidence_level: crt.evidence_level,
            rationale,
        };
    }

    let mut rationale = Vec::new();
    if !crt.eligible {
        rationale.push("CRT criteria not met".to_string());
    }
    if !icd.eligible {
        rationale.push("ICD criteria not met".to_string());
    }
    EligibilityResult::not_indicated(rationale)
}

pub fn evaluate_crtd(params: &ValidatedParameters) -> EligibilityResult {
    combine_crtd(&evaluate_crt(params), &evaluate_icd(params))
}
