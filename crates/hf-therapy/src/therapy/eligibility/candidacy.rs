use serde::{Deserialize, Serialize};

use super::super::parameters::{NyhaClass, ValidatedParameters};

/// Quick-look device candidacy used by implant-planning panels.
///
/// The NYHA gates here differ from [`super::evaluate_crt`]: the 120-149 ms tier only
/// admits NYHA III-IV and the ICD tier only NYHA II-III. The two rule sets are kept
/// apart on purpose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidacyScore {
    pub eligible: bool,
    pub tier: CandidacyTier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framing: Option<CandidacyFraming>,
    pub rationale: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidacyTier {
    Strong,
    Moderate,
    #[serde(rename = "none")]
    Ineligible,
}

impl CandidacyTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Moderate => "Moderate",
            Self::Ineligible => "None",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidacyFraming {
    Resynchronization,
    IcdPrimaryPrevention,
}

pub fn score_candidacy(params: &ValidatedParameters) -> CandidacyScore {
    let ef = params.ejection_fraction;
    let qrs = params.qrs_duration_ms;
    let nyha = params.nyha_class;

    if ef <= 35.0 && qrs >= 150.0 && nyha.is_symptomatic() {
        return CandidacyScore {
            eligible: true,
            tier: CandidacyTier::Strong,
            framing: Some(CandidacyFraming::Resynchronization),
            rationale: "EF ≤35%, QRS ≥150 ms, NYHA II-IV".to_string(),
        };
    }

    if ef <= 35.0
        && (120.0..150.0).contains(&qrs)
        && matches!(nyha, NyhaClass::Three | NyhaClass::Four)
    {
        return CandidacyScore {
            eligible: true,
            tier: CandidacyTier::Moderate,
            framing: Some(CandidacyFraming::Resynchronization),
            rationale: "EF ≤35%, QRS 120-149 ms, NYHA III-IV".to_string(),
        };
    }

    if ef <= 30.0 && matches!(nyha, NyhaClass::Two | NyhaClass::Three) {
        return CandidacyScore {
            eligible: true,
            tier: CandidacyTier::Strong,
            framing: Some(CandidacyFraming::IcdPrimaryPrevention),
            rationale: "EF ≤30%, NYHA II-III: ICD primary prevention".to_string(),
        };
    }

    CandidacyScore {
        eligible: false,
        tier: CandidacyTier::Ineligible,
        framing: None,
        rationale: "Device criteria not met".to_string(),
    }
}
