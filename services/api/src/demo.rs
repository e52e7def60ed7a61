use crate::render::{render_patient, render_pillars};
use hf_therapy::error::AppError;
use hf_therapy::therapy::{
    recommend, ClinicalParameters, GdmtPlan, KidneyFunction, NyhaClass, QrsMorphology,
    SafetyReport,
};

pub(crate) struct DemoScenario {
    pub(crate) title: &'static str,
    pub(crate) params: ClinicalParameters,
}

/// Symptomatic non-ischemic patient on OMT with a narrow QRS and no labs recorded.
pub(crate) fn reference_patient() -> ClinicalParameters {
    ClinicalParameters {
        ejection_fraction: 30.0,
        nyha_class: NyhaClass::Two,
        qrs_duration_ms: 100.0,
        qrs_morphology: QrsMorphology::Normal,
        on_optimal_medical_therapy: true,
        life_expectancy_over_1_year: true,
        prior_scd_or_vt_vf: false,
        ischemic_cardiomyopathy: false,
        atrial_fibrillation: false,
        kidney_function: KidneyFunction::Normal,
        potassium: None,
        creatinine: None,
        egfr: None,
        heart_rate: None,
        systolic_bp: None,
        age: None,
    }
}

pub(crate) fn demo_scenarios() -> Vec<DemoScenario> {
    vec![
        DemoScenario {
            title: "Ischemic cardiomyopathy, EF 25%, NYHA III, QRS 155 ms LBBB",
            params: ClinicalParameters {
                ejection_fraction: 25.0,
                nyha_class: NyhaClass::Three,
                qrs_duration_ms: 155.0,
                qrs_morphology: QrsMorphology::Lbbb,
                ischemic_cardiomyopathy: true,
                ..reference_patient()
            },
        },
        DemoScenario {
            title: "Mildly reduced EF 40%, NYHA I, QRS 90 ms",
            params: ClinicalParameters {
                ejection_fraction: 40.0,
                nyha_class: NyhaClass::One,
                qrs_duration_ms: 90.0,
                ..reference_patient()
            },
        },
        DemoScenario {
            title: "Hyperkalemia (K+ 5.5) with eGFR 28",
            params: ClinicalParameters {
                potassium: Some(5.5),
                egfr: Some(28.0),
                kidney_function: KidneyFunction::Severe,
                ..reference_patient()
            },
        },
        DemoScenario {
            title: "Resting HR 55 with SBP 95 (above the 90 mmHg hypotension cut-off)",
            params: ClinicalParameters {
                heart_rate: Some(55.0),
                systolic_bp: Some(95.0),
                ..reference_patient()
            },
        },
    ]
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    println!("Heart-failure therapy advisor demo");

    for (index, scenario) in demo_scenarios().into_iter().enumerate() {
        let params = scenario.params.validate()?;
        let recommendation = recommend(&params);
        let safety = SafetyReport::for_parameters(&params);

        println!("\n{}. {}", index + 1, scenario.title);
        print!("{}", render_patient(&recommendation, &safety));
        print!(
            "{}",
            render_pillars(&GdmtPlan::default().reconcile(&safety.alerts()))
        );
    }

    Ok(())
}
