use serde::{Deserialize, Serialize};

use super::safety::{AlertSeverity, ContraindicationAlert, TherapyClass};

/// Titration status of one GDMT pillar.
///
/// `Optimal` and `Suboptimal` are always supplied by the caller; no dose threshold is
/// derived here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PillarStatus {
    Optimal,
    Suboptimal,
    Contraindicated,
    NotStarted,
}

impl PillarStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Optimal => "Optimal",
            Self::Suboptimal => "Suboptimal",
            Self::Contraindicated => "Contraindicated",
            Self::NotStarted => "Not started",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarRecord {
    pub pillar: TherapyClass,
    pub status: PillarStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_dose: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_dose: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}

impl PillarRecord {
    fn not_started(pillar: TherapyClass) -> Self {
        Self {
            pillar,
            status: PillarStatus::NotStarted,
            current_dose: None,
            target_dose: None,
            rationale: Some("No therapy recorded".to_string()),
        }
    }
}

/// The four-pillar GDMT picture for one patient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GdmtPlan {
    pub pillars: Vec<PillarRecord>,
}

impl GdmtPlan {
    pub fn new(pillars: Vec<PillarRecord>) -> Self {
        Self { pillars }
    }

    pub fn pillar(&self, pillar: TherapyClass) -> Option<&PillarRecord> {
        self.pillars.iter().find(|record| record.pillar == pillar)
    }

    /// Cross-reference the plan with safety alerts.
    ///
    /// Returns one record per pillar in checker order. Pillars missing from the plan come
    /// back as not started; a pillar with a contraindication alert comes back as
    /// contraindicated. Every other supplied status is kept as-is.
    pub fn reconcile(&self, alerts: &[ContraindicationAlert]) -> GdmtPlan {
        let pillars = TherapyClass::ordered()
            .into_iter()
            .map(|pillar| {
                let mut record = self
                    .pillar(pillar)
                    .cloned()
                    .unwrap_or_else(|| PillarRecord::not_started(pillar));

                let blocking: Vec<&str> = alerts
                    .iter()
                    .filter(|alert| {
                        alert.therapy_class == pillar
                            && alert.severity == AlertSeverity::Contraindication
                    })
                    .map(|alert| alert.message.as_str())
                    .collect();

                if !blocking.is_empty() {
                    record.status = PillarStatus::Contraindicated;
                    record.rationale = Some(blocking.join("; "));
                }

                record
            })
            .collect();

        GdmtPlan { pillars }
    }

    pub fn optimal_count(&self) -> usize {
        self.pillars
            .iter()
            .filter(|record| record.status == PillarStatus::Optimal)
            .count()
    }
}
