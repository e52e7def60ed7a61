//! Worklist import: one CSV row per patient, evaluated in a batch.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::parameters::{
    ClinicalParameters, KidneyFunction, NyhaClass, ParameterError, QrsMorphology,
};
use super::recommendation::{evaluate_patient, Recommendation};

#[derive(Debug, thiserror::Error)]
pub enum CohortImportError {
    #[error("failed to open cohort file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse cohort csv: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CohortEntry {
    pub patient_id: String,
    pub parameters: ClinicalParameters,
}

/// Per-patient outcome; rows that fail validation keep their error.
#[derive(Debug, Clone, PartialEq)]
pub struct CohortOutcome {
    pub patient_id: String,
    pub result: Result<Recommendation, ParameterError>,
}

pub struct CohortImporter;

impl CohortImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<CohortEntry>, CohortImportError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<CohortEntry>, CohortImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = Vec::new();
        for record in csv_reader.deserialize::<CohortRow>() {
            entries.push(record?.into_entry());
        }
        Ok(entries)
    }
}

pub fn evaluate_cohort(entries: Vec<CohortEntry>) -> Vec<CohortOutcome> {
    entries
        .into_iter()
        .map(|entry| CohortOutcome {
            patient_id: entry.patient_id,
            result: evaluate_patient(entry.parameters),
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct CohortRow {
    patient_id: String,
    ejection_fraction: f64,
    nyha_class: NyhaClass,
    qrs_duration_ms: f64,
    qrs_morphology: QrsMorphology,
    #[serde(deserialize_with = "flag")]
    on_optimal_medical_therapy: bool,
    #[serde(deserialize_with = "flag")]
    life_expectancy_over_1_year: bool,
    #[serde(deserialize_with = "flag")]
    prior_scd_or_vt_vf: bool,
    #[serde(deserialize_with = "flag")]
    ischemic_cardiomyopathy: bool,
    #[serde(deserialize_with = "flag")]
    atrial_fibrillation: bool,
    kidney_function: KidneyFunction,
    #[serde(default)]
    potassium: Option<f64>,
    #[serde(default)]
    creatinine: Option<f64>,
    #[serde(default)]
    egfr: Option<f64>,
    #[serde(default)]
    heart_rate: Option<f64>,
    #[serde(default)]
    systolic_bp: Option<f64>,
    #[serde(default)]
    age: Option<f64>,
}

impl CohortRow {
    fn into_entry(self) -> CohortEntry {
        CohortEntry {
            patient_id: self.patient_id,
            parameters: ClinicalParameters {
                ejection_fraction: self.ejection_fraction,
                nyha_class: self.nyha_class,
                qrs_duration_ms: self.qrs_duration_ms,
                qrs_morphology: self.qrs_morphology,
                on_optimal_medical_therapy: self.on_optimal_medical_therapy,
                life_expectancy_over_1_year: self.life_expectancy_over_1_year,
                prior_scd_or_vt_vf: self.prior_scd_or_vt_vf,
                ischemic_cardiomyopathy: self.ischemic_cardiomyopathy,
                atrial_fibrillation: self.atrial_fibrillation,
                kidney_function: self.kidney_function,
                potassium: self.potassium,
                creatinine: self.creatinine,
                egfr: self.egfr,
                heart_rate: self.heart_rate,
                systolic_bp: self.systolic_bp,
                age: self.age,
            },
        }
    }
}

fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected a yes/no flag, found '{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::therapy::recommendation::PrimaryTherapy;

    const WORKLIST: &str = "\
patient_id,ejection_fraction,nyha_class,qrs_duration_ms,qrs_morphology,on_optimal_medical_therapy,life_expectancy_over_1_year,prior_scd_or_vt_vf,ischemic_cardiomyopathy,atrial_fibrillation,kidney_function,potassium,creatinine,egfr,heart_rate,systolic_bp,age
HF-001,25,III,155,LBBB,yes,yes,no,yes,no,Normal,4.2,1.1,62,72,118,68
HF-002,40,I,90,Normal,true,true,false,false,false,Mild,,,,,,
HF-003,130,II,100,Normal,1,1,0,0,0,Normal,,,,,,
";

    #[test]
    fn parses_rows_and_treats_empty_cells_as_absent() {
        let entries = CohortImporter::from_reader(WORKLIST.as_bytes()).expect("csv parses");
        assert_eq!(entries.len(), 3);

        let first = &entries[0].parameters;
        assert_eq!(entries[0].patient_id, "HF-001");
        assert_eq!(first.nyha_class, NyhaClass::Three);
        assert!(first.ischemic_cardiomyopathy);
        assert_eq!(first.potassium, Some(4.2));

        let second = &entries[1].parameters;
        assert_eq!(second.kidney_function, KidneyFunction::Mild);
        assert_eq!(second.potassium, None);
        assert_eq!(second.systolic_bp, None);
    }

    #[test]
    fn evaluation_keeps_invalid_rows_as_errors() {
        let entries = CohortImporter::from_reader(WORKLIST.as_bytes()).expect("csv parses");
        let outcomes = evaluate_cohort(entries);

        let primary: Vec<_> = outcomes
            .iter()
            .map(|outcome| outcome.result.as_ref().map(|rec| rec.primary))
            .collect();
        assert_eq!(primary[0], Ok(PrimaryTherapy::CrtD));
        assert_eq!(primary[1], Ok(PrimaryTherapy::NoDevice));
        match &outcomes[2].result {
            Err(err) => assert_eq!(err.field(), "ejectionFraction"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_blank_required_flag() {
        // Blank prior-arrhythmia cell on HF-001.
        let csv = WORKLIST.replace(
            "HF-001,25,III,155,LBBB,yes,yes,no,",
            "HF-001,25,III,155,LBBB,yes,yes,,",
        );
        assert!(matches!(
            CohortImporter::from_reader(csv.as_bytes()),
            Err(CohortImportError::Csv(_))
        ));
    }

    #[test]
    fn rejects_unknown_nyha_class() {
        let csv = WORKLIST.replace("HF-002,40,I,", "HF-002,40,V,");
        assert!(matches!(
            CohortImporter::from_reader(csv.as_bytes()),
            Err(CohortImportError::Csv(_))
        ));
    }
}
