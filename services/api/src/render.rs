use hf_therapy::therapy::{grade_label, DeviceTherapy, GdmtPlan, Recommendation, SafetyReport};
use std::fmt::Write;

/// Plain-text summary of one patient: primary pathway, per-device trail, alerts.
pub(crate) fn render_patient(recommendation: &Recommendation, safety: &SafetyReport) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Primary therapy: {} ({})",
        recommendation.primary.label(),
        grade_label(
            recommendation.class_of_evidence,
            recommendation.evidence_level
        )
    );

    let _ = writeln!(out, "Device pathways:");
    for device in [DeviceTherapy::Icd, DeviceTherapy::Crt, DeviceTherapy::CrtD] {
        let Some(result) = recommendation.eligibility(device) else {
            continue;
        };
        let verdict = if result.eligible {
            "eligible"
        } else {
            "not eligible"
        };
        let _ = writeln!(
            out,
            "  - {}: {} ({})",
            device.label(),
            verdict,
            result.grade_label()
        );
        for reason in &result.rationale {
            let _ = writeln!(out, "      {reason}");
        }
    }

    let _ = writeln!(
        out,
        "GDMT safety (overall risk: {}):",
        safety.overall_risk.label()
    );
    let alerts = safety.alerts();
    if alerts.is_empty() {
        let _ = writeln!(out, "  - no alerts");
    }
    for alert in &alerts {
        let _ = writeln!(
            out,
            "  - [{}] {}: {}",
            alert.severity.label(),
            alert.therapy_class.label(),
            alert.message
        );
    }

    if !recommendation.considerations.is_empty() {
        let _ = writeln!(out, "Considerations:");
        for note in &recommendation.considerations {
            let _ = writeln!(out, "  - {note}");
        }
    }

    out
}

/// One line per GDMT pillar, in checker order.
pub(crate) fn render_pillars(plan: &GdmtPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "GDMT pillars ({} of {} optimal):",
        plan.optimal_count(),
        plan.pillars.len()
    );
    for record in &plan.pillars {
        let _ = write!(
            out,
            "  - {}: {}",
            record.pillar.pillar_label(),
            record.status.label()
        );
        if let Some(rationale) = &record.rationale {
            let _ = write!(out, " ({rationale})");
        }
        let _ = writeln!(out);
    }
    out
}
