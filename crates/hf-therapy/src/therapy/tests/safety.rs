use super::common::*;
use crate::therapy::parameters::ClinicalParameters;
use crate::therapy::safety::{
    check_all, check_arni, check_beta_blocker, check_mra, check_sglt2i, AlertSeverity,
    ContraindicationAlert, RiskLevel, SafetyReport, TherapyClass,
};

fn severities(alerts: &[ContraindicationAlert]) -> Vec<AlertSeverity> {
    alerts.iter().map(|alert| alert.severity).collect()
}

#[test]
fn checkers_skip_rules_without_labs() {
    let params = validated(params());

    assert!(check_arni(&params).is_empty());
    assert!(check_beta_blocker(&params).is_empty());
    assert!(check_sglt2i(&params).is_empty());
    assert!(check_mra(&params).is_empty());
    assert!(check_all(&params).is_empty());
}

#[test]
fn arni_alerts_fire_independently_in_rule_order() {
    let params = validated(ClinicalParameters {
        systolic_bp: Some(85.0),
        potassium: Some(5.3),
        egfr: Some(22.0),
        ..params()
    });

    let alerts = check_arni(&params);

    let messages: Vec<&str> = alerts.iter().map(|alert| alert.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Low SBP (<90 mmHg) — monitor closely during titration",
            "Hyperkalemia (K+ >5.0) — consider dose reduction",
            "Severe renal impairment — nephrology consultation",
        ]
    );
    assert_eq!(
        severities(&alerts),
        vec![
            AlertSeverity::Warning,
            AlertSeverity::Caution,
            AlertSeverity::Caution
        ]
    );
    assert!(alerts
        .iter()
        .all(|alert| alert.therapy_class == TherapyClass::Arni));
}

#[test]
fn arni_thresholds_are_strict() {
    let params = validated(ClinicalParameters {
        systolic_bp: Some(90.0),
        potassium: Some(5.0),
        egfr: Some(30.0),
        ..params()
    });

    assert!(check_arni(&params).is_empty());
}

#[test]
fn severe_bradycardia_suppresses_the_lower_dose_warning() {
    let params = validated(ClinicalParameters {
        heart_rate: Some(45.0),
        ..params()
    });

    let alerts = check_beta_blocker(&params);

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].severity, AlertSeverity::Contraindication);
    assert_eq!(
        alerts[0].message,
        "Severe bradycardia (HR <50) — avoid beta-blockers"
    );
}

#[test]
fn bradycardia_and_hypotension_warnings_co_occur() {
    let params = validated(ClinicalParameters {
        heart_rate: Some(55.0),
        systolic_bp: Some(85.0),
        ..params()
    });

    let alerts = check_beta_blocker(&params);

    assert_eq!(
        severities(&alerts),
        vec![AlertSeverity::Warning, AlertSeverity::Warning]
    );
    assert!(alerts[0].message.starts_with("Bradycardia (HR <60)"));
    assert!(alerts[1].message.starts_with("Hypotension"));
}

#[test]
fn sglt2i_renal_rules_are_exclusive_and_age_is_independent() {
    let severe = validated(ClinicalParameters {
        egfr: Some(20.0),
        age: Some(80.0),
        ..params()
    });
    let borderline = validated(ClinicalParameters {
        egfr: Some(27.0),
        ..params()
    });

    assert_eq!(
        severities(&check_sglt2i(&severe)),
        vec![AlertSeverity::Contraindication, AlertSeverity::Warning]
    );
    assert_eq!(
        severities(&check_sglt2i(&borderline)),
        vec![AlertSeverity::Caution]
    );
}

#[test]
fn mra_potassium_and_renal_contraindications_both_fire() {
    let params = validated(ClinicalParameters {
        potassium: Some(5.5),
        egfr: Some(28.0),
        ..params()
    });

    let alerts = check_mra(&params);

    assert_eq!(
        severities(&alerts),
        vec![
            AlertSeverity::Contraindication,
            AlertSeverity::Contraindication
        ]
    );
    assert_eq!(RiskLevel::from_alerts(&alerts), RiskLevel::High);
}

#[test]
fn mra_borderline_potassium_is_a_caution() {
    let params = validated(ClinicalParameters {
        potassium: Some(4.8),
        ..params()
    });

    let alerts = check_mra(&params);

    assert_eq!(severities(&alerts), vec![AlertSeverity::Caution]);
    assert_eq!(RiskLevel::from_alerts(&alerts), RiskLevel::Medium);
}

#[test]
fn risk_rollup_ignores_warnings_and_escalates_on_three_cautions() {
    let warning = ContraindicationAlert::new(TherapyClass::Arni, AlertSeverity::Warning, "w");
    let caution = ContraindicationAlert::new(TherapyClass::Arni, AlertSeverity::Caution, "c");

    assert_eq!(RiskLevel::from_alerts(&[]), RiskLevel::Low);
    assert_eq!(
        RiskLevel::from_alerts(&[warning.clone(), warning.clone(), warning.clone()]),
        RiskLevel::Low
    );
    assert_eq!(
        RiskLevel::from_alerts(&[caution.clone(), caution.clone()]),
        RiskLevel::Medium
    );
    assert_eq!(
        RiskLevel::from_alerts(&[caution.clone(), caution.clone(), caution]),
        RiskLevel::High
    );
}

#[test]
fn safety_report_groups_alerts_in_checker_order() {
    let params = validated(ClinicalParameters {
        systolic_bp: Some(85.0),
        heart_rate: Some(58.0),
        potassium: Some(4.7),
        egfr: Some(27.0),
        ..params()
    });

    let report = SafetyReport::for_parameters(&params);

    let order: Vec<TherapyClass> = report
        .by_therapy
        .iter()
        .map(|group| group.therapy_class)
        .collect();
    assert_eq!(order, TherapyClass::ordered().to_vec());
    assert_eq!(report.alerts(), check_all(&params));
    // eGFR 27 is an MRA contraindication on its own.
    assert_eq!(report.overall_risk, RiskLevel::High);
}
