//! Medication-class safety checks producing graded alerts.

mod checks;

pub use checks::{check_arni, check_beta_blocker, check_mra, check_sglt2i};

use serde::{Deserialize, Serialize};

use super::parameters::ValidatedParameters;

/// GDMT medication classes; also the four GDMT pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TherapyClass {
    #[serde(rename = "ARNi")]
    Arni,
    #[serde(rename = "Beta-Blocker")]
    BetaBlocker,
    #[serde(rename = "SGLT2i")]
    Sglt2i,
    #[serde(rename = "MRA")]
    Mra,
}

impl TherapyClass {
    /// Checker order used when alerts are concatenated.
    pub const fn ordered() -> [Self; 4] {
        [Self::Arni, Self::BetaBlocker, Self::Sglt2i, Self::Mra]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Arni => "ARNi",
            Self::BetaBlocker => "Beta-Blocker",
            Self::Sglt2i => "SGLT2i",
            Self::Mra => "MRA",
        }
    }

    pub const fn pillar_label(self) -> &'static str {
        match self {
            Self::Arni => "ARNi/ACE/ARB",
            Self::BetaBlocker => "Beta-Blocker",
            Self::Sglt2i => "SGLT2i",
            Self::Mra => "MRA",
        }
    }

    pub fn check(self, params: &ValidatedParameters) -> Vec<ContraindicationAlert> {
        match self {
            Self::Arni => check_arni(params),
            Self::BetaBlocker => check_beta_blocker(params),
            Self::Sglt2i => check_sglt2i(params),
            Self::Mra => check_mra(params),
        }
    }
}

/// Contraindication is absolute, Caution needs monitoring, Warning is informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertSeverity {
    Contraindication,
    Caution,
    Warning,
}

impl AlertSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Contraindication => "Contraindication",
            Self::Caution => "Caution",
            Self::Warning => "Warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContraindicationAlert {
    pub therapy_class: TherapyClass,
    pub severity: AlertSeverity,
    pub message: String,
}

impl ContraindicationAlert {
    pub(crate) fn new(
        therapy_class: TherapyClass,
        severity: AlertSeverity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            therapy_class,
            severity,
            message: message.into(),
        }
    }
}

/// Aggregate risk across a set of alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Any contraindication or more than two cautions is high; warnings never count.
    pub fn from_alerts(alerts: &[ContraindicationAlert]) -> Self {
        let contraindications = alerts
            .iter()
            .filter(|alert| alert.severity == AlertSeverity::Contraindication)
            .count();
        let cautions = alerts
            .iter()
            .filter(|alert| alert.severity == AlertSeverity::Caution)
            .count();

        if contraindications > 0 || cautions > 2 {
            Self::High
        } else if cautions > 0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Alerts emitted by one checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TherapyAlerts {
    pub therapy_class: TherapyClass,
    pub alerts: Vec<ContraindicationAlert>,
}

/// Result of running every checker against one patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyReport {
    pub by_therapy: Vec<TherapyAlerts>,
    pub overall_risk: RiskLevel,
}

impl SafetyReport {
    pub fn for_parameters(params: &ValidatedParameters) -> Self {
        let by_therapy: Vec<TherapyAlerts> = TherapyClass::ordered()
            .into_iter()
            .map(|therapy_class| TherapyAlerts {
                therapy_class,
                alerts: therapy_class.check(params),
            })
            .collect();

        let overall_risk = RiskLevel::from_alerts(&flatten(&by_therapy));

        Self {
            by_therapy,
            overall_risk,
        }
    }

    /// All alerts in checker order.
    pub fn alerts(&self) -> Vec<ContraindicationAlert> {
        flatten(&self.by_therapy)
    }
}

fn flatten(groups: &[TherapyAlerts]) -> Vec<ContraindicationAlert> {
    groups
        .iter()
        .flat_map(|group| group.alerts.iter().cloned())
        .collect()
}

/// Run the four checkers and concatenate their alerts in checker order.
pub fn check_all(params: &ValidatedParameters) -> Vec<ContraindicationAlert> {
    TherapyClass::ordered()
        .into_iter()
        .flat_map(|therapy_class| therapy_class.check(params))
        .collect()
}
