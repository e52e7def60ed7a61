//! Device-therapy eligibility evaluators.
//!
//! Each evaluator is a pure function of a validated parameter snapshot. Only the CRT-D
//! composite reads the results of other evaluators.

mod candidacy;
mod crt;
mod icd;

pub use candidacy::{score_candidacy, CandidacyFraming, CandidacyScore, CandidacyTier};
pub use crt::{combine_crtd, evaluate_crt, evaluate_crtd};
pub use icd::evaluate_icd;

use serde::{Deserialize, Serialize};

/// Guideline recommendation class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassOfEvidence {
    ClassI,
    ClassIIa,
    ClassIIb,
    ClassIII,
    NotIndicated,
}

impl ClassOfEvidence {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ClassI => "Class I",
            Self::ClassIIa => "Class IIa",
            Self::ClassIIb => "Class IIb",
            Self::ClassIII => "Class III",
            Self::NotIndicated => "Not indicated",
        }
    }
}

/// Quality of the evidence behind a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvidenceLevel {
    A,
    B,
    C,
}

impl EvidenceLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "Level A",
            Self::B => "Level B",
            Self::C => "Level C",
        }
    }
}

/// Device pathways reported in a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DeviceTherapy {
    #[serde(rename = "ICD")]
    Icd,
    #[serde(rename = "CRT")]
    Crt,
    #[serde(rename = "CRT-D")]
    CrtD,
}

impl DeviceTherapy {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Icd => "ICD",
            Self::Crt => "CRT",
            Self::CrtD => "CRT-D",
        }
    }
}

/// Output of one evaluator with the trail of reasons that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResult {
    pub eligible: bool,
    pub class_of_evidence: ClassOfEvidence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_level: Option<EvidenceLevel>,
    pub rationale: Vec<String>,
}

impl EligibilityResult {
    pub(crate) fn indicated(
        class_of_evidence: ClassOfEvidence,
        evidence_level: EvidenceLevel,
        rationale: Vec<String>,
    ) -> Self {
        Self {
            eligible: true,
            class_of_evidence,
            evidence_level: Some(evidence_level),
            rationale,
        }
    }

    pub(crate) fn not_indicated(rationale: Vec<String>) -> Self {
        Self {
            eligible: false,
            class_of_evidence: ClassOfEvidence::NotIndicated,
            evidence_level: None,
            rationale,
        }
    }

    pub fn grade_label(&self) -> String {
        grade_label(self.class_of_evidence, self.evidence_level)
    }
}

/// "Class I, Level A" style summary for display; the level is omitted when absent.
pub fn grade_label(class: ClassOfEvidence, level: Option<EvidenceLevel>) -> String {
    match level {
        Some(level) => format!("{}, {}", class.label(), level.label()),
        None => class.label().to_string(),
    }
}
