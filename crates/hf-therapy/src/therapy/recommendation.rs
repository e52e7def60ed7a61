use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::eligibility::{
    combine_crtd, evaluate_crt, evaluate_icd, ClassOfEvidence, DeviceTherapy, EligibilityResult,
    EvidenceLevel,
};
use super::parameters::{ClinicalParameters, KidneyFunction, ParameterError, ValidatedParameters};
use super::safety::{check_all, ContraindicationAlert};

/// Device recommendation, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimaryTherapy {
    #[serde(rename = "CRT-D")]
    CrtD,
    #[serde(rename = "CRT-P")]
    CrtP,
    #[serde(rename = "ICD")]
    Icd,
    #[serde(rename = "No device therapy indicated")]
    NoDevice,
}

impl PrimaryTherapy {
    pub const fn label(self) -> &'static str {
        match self {
            Self::CrtD => "CRT-D",
            Self::CrtP => "CRT-P",
            Self::Icd => "ICD",
            Self::NoDevice => "No device therapy indicated",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub primary: PrimaryTherapy,
    pub class_of_evidence: ClassOfEvidence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_level: Option<EvidenceLevel>,
    pub all_eligibility: BTreeMap<DeviceTherapy, EligibilityResult>,
    pub contraindications: Vec<ContraindicationAlert>,
    pub considerations: Vec<String>,
}

impl Recommendation {
    pub fn eligibility(&self, therapy: DeviceTherapy) -> Option<&EligibilityResult> {
        self.all_eligibility.get(&therapy)
    }
}

/// Validate raw inputs, then synthesize the recommendation.
pub fn evaluate_patient(params: ClinicalParameters) -> Result<Recommendation, ParameterError> {
    let params = params.validate()?;
    Ok(recommend(&params))
}

pub fn recommend(params: &ValidatedParameters) -> Recommendation {
    let icd = evaluate_icd(params);
    let crt = evaluate_crt(params);
    let crtd = combine_crtd(&crt, &icd);

    let (primary, binding) = if crtd.eligible {
        (PrimaryTherapy::CrtD, &crtd)
    } else if crt.eligible {
        (PrimaryTherapy::CrtP, &crt)
    } else if icd.eligible {
        (PrimaryTherapy::Icd, &icd)
    } else {
        (PrimaryTherapy::NoDevice, &crtd)
    };
    let class_of_evidence = binding.class_of_evidence;
    let evidence_level = binding.evidence_level;

    let contraindications = check_all(params);
    let considerations = considerations(params);

    debug!(
        primary = primary.label(),
        class_of_evidence = class_of_evidence.label(),
        alerts = contraindications.len(),
        considerations = considerations.len(),
        "therapy recommendation synthesized"
    );

    let mut all_eligibility = BTreeMap::new();
    all_eligibility.insert(DeviceTherapy::Icd, icd);
    all_eligibility.insert(DeviceTherapy::Crt, crt);
    all_eligibility.insert(DeviceTherapy::CrtD, crtd);

    Recommendation {
        primary,
        class_of_evidence,
        evidence_level,
        all_eligibility,
        contraindications,
        considerations,
    }
}

fn considerations(params: &ValidatedParameters) -> Vec<String> {
    let mut notes = Vec::new();
    if !params.on_optimal_medical_therapy {
        notes.push("Optimal medical therapy not achieved".to_string());
    }
    if !params.life_expectancy_over_1_year {
        notes.push("Limited life expectancy (<1 year)".to_string());
    }
    if params.kidney_function == KidneyFunction::Severe {
        notes.push("Severe kidney dysfunction may affect outcomes".to_string());
    }
    notes
}
