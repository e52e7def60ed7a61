use super::super::parameters::ValidatedParameters;
use super::{AlertSeverity, ContraindicationAlert, TherapyClass};

const LOW_SBP: f64 = 90.0;
const HYPERKALEMIA_K: f64 = 5.0;
const ELEVATED_K: f64 = 4.5;
const SEVERE_RENAL_EGFR: f64 = 30.0;
const SGLT2I_EGFR_FLOOR: f64 = 25.0;
const SEVERE_BRADYCARDIA_HR: f64 = 50.0;
const BRADYCARDIA_HR: f64 = 60.0;
const ELDERLY_AGE: f64 = 75.0;

// Every rule reads one optional value and is skipped when it is absent.

pub fn check_arni(params: &ValidatedParameters) -> Vec<ContraindicationAlert> {
    let mut alerts = Vec::new();
    let alert = |severity, message: &str| {
        ContraindicationAlert::new(TherapyClass::Arni, severity, message)
    };

    if params.systolic_bp.is_some_and(|sbp| sbp < LOW_SBP) {
        alerts.push(alert(
            AlertSeverity::Warning,
            "Low SBP (<90 mmHg) — monitor closely during titration",
        ));
    }
    if params.potassium.is_some_and(|k| k > HYPERKALEMIA_K) {
        alerts.push(alert(
            AlertSeverity::Caution,
            "Hyperkalemia (K+ >5.0) — consider dose reduction",
        ));
    }
    if params.egfr.is_some_and(|egfr| egfr < SEVERE_RENAL_EGFR) {
        alerts.push(alert(
            AlertSeverity::Caution,
            "Severe renal impairment — nephrology consultation",
        ));
    }

    alerts
}

pub fn check_beta_blocker(params: &ValidatedParameters) -> Vec<ContraindicationAlert> {
    let mut alerts = Vec::new();
    let alert = |severity, message: &str| {
        ContraindicationAlert::new(TherapyClass::BetaBlocker, severity, message)
    };

    match params.heart_rate {
        Some(hr) if hr < SEVERE_BRADYCARDIA_HR => alerts.push(alert(
            AlertSeverity::Contraindication,
            "Severe bradycardia (HR <50) — avoid beta-blockers",
        )),
        Some(hr) if hr < BRADYCARDIA_HR => alerts.push(alert(
            AlertSeverity::Warning,
            "Bradycardia (HR <60) — use lower starting dose",
        )),
        _ => {}
    }
    if params.systolic_bp.is_some_and(|sbp| sbp < LOW_SBP) {
        alerts.push(alert(
            AlertSeverity::Warning,
            "Hypotension — monitor BP closely",
        ));
    }

    alerts
}

pub fn check_sglt2i(params: &ValidatedParameters) -> Vec<ContraindicationAlert> {
    let mut alerts = Vec::new();
    let alert = |severity, message: &str| {
        ContraindicationAlert::new(TherapyClass::Sglt2i, severity, message)
    };

    match params.egfr {
        Some(egfr) if egfr < SGLT2I_EGFR_FLOOR => alerts.push(alert(
            AlertSeverity::Contraindication,
            "eGFR <25 — do not initiate SGLT2i",
        )),
        Some(egfr) if egfr < SEVERE_RENAL_EGFR => alerts.push(alert(
            AlertSeverity::Caution,
            "Reduced renal function (eGFR <30) — monitor renal function",
        )),
        _ => {}
    }
    if params.age.is_some_and(|age| age > ELDERLY_AGE) {
        alerts.push(alert(
            AlertSeverity::Warning,
            "Age >75 — monitor volume status and risk of dehydration",
        ));
    }

    alerts
}

pub fn check_mra(params: &ValidatedParameters) -> Vec<ContraindicationAlert> {
    let mut alerts = Vec::new();
    let alert = |severity, message: &str| {
        ContraindicationAlert::new(TherapyClass::Mra, severity, message)
    };

    match params.potassium {
        Some(k) if k > HYPERKALEMIA_K => alerts.push(alert(
            AlertSeverity::Contraindication,
            "Hyperkalemia (K+ >5.0) — do not initiate MRA",
        )),
        Some(k) if k > ELEVATED_K => alerts.push(alert(
            AlertSeverity::Caution,
            "Elevated potassium (K+ >4.5) — monitor potassium closely",
        )),
        _ => {}
    }
    if params.egfr.is_some_and(|egfr| egfr < SEVERE_RENAL_EGFR) {
        alerts.push(alert(
            AlertSeverity::Contraindication,
            "Severe renal impairment (eGFR <30) — MRA contraindicated",
        ));
    }

    alerts
}
