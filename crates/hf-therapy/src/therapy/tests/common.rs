use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use serde_json::Value;

use crate::therapy::parameters::{
    ClinicalParameters, KidneyFunction, NyhaClass, QrsMorphology, ValidatedParameters,
};

/// Symptomatic non-ischemic patient on OMT with a narrow QRS and no labs on file.
pub(super) fn params() -> ClinicalParameters {
    ClinicalParameters {
        ejection_fraction: 30.0,
        nyha_class: NyhaClass::Two,
        qrs_duration_ms: 110.0,
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

pub(super) fn validated(params: ClinicalParameters) -> ValidatedParameters {
    params.validate().expect("fixture parameters are valid")
}

/// EF 25, NYHA III, QRS 155 LBBB, ischemic, OMT and life expectancy met.
pub(super) fn crtd_candidate() -> ClinicalParameters {
    ClinicalParameters {
        ejection_fraction: 25.0,
        nyha_class: NyhaClass::Three,
        qrs_duration_ms: 155.0,
        qrs_morphology: QrsMorphology::Lbbb,
        ischemic_cardiomyopathy: true,
        ..params()
    }
}

/// EF 40, NYHA I, QRS 90.
pub(super) fn preserved_ef() -> ClinicalParameters {
    ClinicalParameters {
        ejection_fraction: 40.0,
        nyha_class: NyhaClass::One,
        qrs_duration_ms: 90.0,
        ..params()
    }
}

pub(super) fn json_request(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::to_vec(body).expect("request body serializes"),
        ))
        .expect("request builds")
}

pub(super) async fn read_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body readable");
    let value = serde_json::from_slice(&bytes).expect("response is json");
    (status, value)
}
