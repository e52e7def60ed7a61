use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// NYHA functional class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NyhaClass {
    #[serde(rename = "I")]
    One,
    #[serde(rename = "II")]
    Two,
    #[serde(rename = "III")]
    Three,
    #[serde(rename = "IV")]
    Four,
}

impl NyhaClass {
    pub const fn label(self) -> &'static str {
        match self {
            Self::One => "I",
            Self::Two => "II",
            Self::Three => "III",
            Self::Four => "IV",
        }
    }

    /// Classes II through IV.
    pub const fn is_symptomatic(self) -> bool {
        !matches!(self, Self::One)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QrsMorphology {
    #[serde(rename = "LBBB")]
    Lbbb,
    #[serde(rename = "RBBB")]
    Rbbb,
    #[serde(rename = "IVCD")]
    Ivcd,
    Normal,
}

impl QrsMorphology {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lbbb => "LBBB",
            Self::Rbbb => "RBBB",
            Self::Ivcd => "IVCD",
            Self::Normal => "Normal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KidneyFunction {
    Normal,
    Mild,
    Moderate,
    Severe,
}

/// Snapshot of the clinical inputs for one evaluation call.
///
/// Labs and vitals are optional. A missing value means the rules that read it are
/// skipped, never that a default is assumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalParameters {
    /// Left-ventricular ejection fraction in percent (0-100).
    pub ejection_fraction: f64,
    pub nyha_class: NyhaClass,
    pub qrs_duration_ms: f64,
    pub qrs_morphology: QrsMorphology,
    pub on_optimal_medical_therapy: bool,
    pub life_expectancy_over_1_year: bool,
    #[serde(rename = "priorSuddenCardiacDeathOrVTVF")]
    pub prior_scd_or_vt_vf: bool,
    pub ischemic_cardiomyopathy: bool,
    pub atrial_fibrillation: bool,
    pub kidney_function: KidneyFunction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potassium: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creatinine: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub egfr: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<f64>,
    #[serde(
        rename = "systolicBP",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub systolic_bp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
}

/// Raised when a numeric input falls outside its physiological range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} must be between {min} and {max}, found {found}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        found: f64,
    },
    #[error("{field} must not be negative, found {found}")]
    Negative { field: &'static str, found: f64 },
}

impl ParameterError {
    pub fn field(&self) -> &'static str {
        match self {
            ParameterError::NotFinite { field }
            | ParameterError::OutOfRange { field, .. }
            | ParameterError::Negative { field, .. } => field,
        }
    }
}

impl ClinicalParameters {
    /// Check numeric ranges and seal the snapshot for evaluation.
    pub fn validate(self) -> Result<ValidatedParameters, ParameterError> {
        within("ejectionFraction", self.ejection_fraction, 0.0, 100.0)?;
        non_negative("qrsDurationMs", self.qrs_duration_ms)?;

        let optional = [
            ("potassium", self.potassium),
            ("creatinine", self.creatinine),
            ("egfr", self.egfr),
            ("heartRate", self.heart_rate),
            ("systolicBP", self.systolic_bp),
            ("age", self.age),
        ];
        for (field, value) in optional {
            if let Some(value) = value {
                non_negative(field, value)?;
            }
        }

        Ok(ValidatedParameters(self))
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ParameterError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::NotFinite { field })
    }
}

fn within(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ParameterError> {
    finite(field, value)?;
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ParameterError::OutOfRange {
            field,
            min,
            max,
            found: value,
        })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ParameterError> {
    finite(field, value)?;
    if value < 0.0 {
        Err(ParameterError::Negative {
            field,
            found: value,
        })
    } else {
        Ok(())
    }
}

/// Parameters that passed [`ClinicalParameters::validate`].
///
/// Every evaluator and checker takes this type, so range checks cannot be skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ClinicalParameters", into = "ClinicalParameters")]
pub struct ValidatedParameters(ClinicalParameters);

impl ValidatedParameters {
    pub fn into_inner(self) -> ClinicalParameters {
        self.0
    }
}

impl Deref for ValidatedParameters {
    type Target = ClinicalParameters;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<ClinicalParameters> for ValidatedParameters {
    type Error = ParameterError;

    fn try_from(value: ClinicalParameters) -> Result<Self, Self::Error> {
        value.validate()
    }
}

impl From<ValidatedParameters> for ClinicalParameters {
    fn from(value: ValidatedParameters) -> Self {
        value.0
    }
}
