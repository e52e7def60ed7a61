//! Heart-failure therapy rules: device eligibility, GDMT safety checks, and the
//! synthesized recommendation.
//!
//! Everything here is a pure function of one [`ValidatedParameters`] snapshot. The router
//! and cohort importer are thin adapters over those functions.

pub mod cohort;
pub mod eligibility;
pub mod gdmt;
pub mod parameters;
pub mod recommendation;
pub mod router;
pub mod safety;

#[cfg(test)]
mod tests;

pub use cohort::{evaluate_cohort, CohortEntry, CohortImportError, CohortImporter, CohortOutcome};
pub use eligibility::{
    combine_crtd, evaluate_crt, evaluate_crtd, evaluate_icd, grade_label, score_candidacy,
    CandidacyFraming, CandidacyScore, CandidacyTier, ClassOfEvidence, DeviceTherapy,
    EligibilityResult, EvidenceLevel,
};
pub use gdmt::{GdmtPlan, PillarRecord, PillarStatus};
pub use parameters::{
    ClinicalParameters, KidneyFunction, NyhaClass, ParameterError, QrsMorphology,
    ValidatedParameters,
};
pub use recommendation::{evaluate_patient, recommend, PrimaryTherapy, Recommendation};
pub use router::therapy_router;
pub use safety::{
    check_all, check_arni, check_beta_blocker, check_mra, check_sglt2i, AlertSeverity,
    ContraindicationAlert, RiskLevel, SafetyReport, TherapyAlerts, TherapyClass,
};
