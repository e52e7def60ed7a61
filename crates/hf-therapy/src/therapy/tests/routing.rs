use super::common::*;
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use tower::ServiceExt;

use crate::config::CalculatorFlags;
use crate::error::AppError;
use crate::therapy::parameters::ClinicalParameters;
use crate::therapy::recommendation::PrimaryTherapy;
use crate::therapy::router::{
    recommendation_handler, therapy_router, ELIGIBILITY_PATH, GDMT_PATH, RECOMMENDATION_PATH,
    SAFETY_PATH,
};
use crate::therapy::safety::RiskLevel;

#[tokio::test]
async fn recommendation_handler_returns_crtd_for_candidate() {
    let Json(body) = recommendation_handler(Json(crtd_candidate()))
        .await
        .expect("recommendation builds");

    assert_eq!(body.recommendation.primary, PrimaryTherapy::CrtD);
    assert_eq!(body.overall_risk, RiskLevel::Low);
}

#[tokio::test]
async fn recommendation_handler_rejects_out_of_range_ef() {
    let result = recommendation_handler(Json(ClinicalParameters {
        ejection_fraction: 120.0,
        ..params()
    }))
    .await;

    match result {
        Err(AppError::Parameter(err)) => assert_eq!(err.field(), "ejectionFraction"),
        other => panic!("expected parameter error, got {other:?}"),
    }
}

#[tokio::test]
async fn recommendation_route_serves_json_contract() {
    let router = therapy_router(CalculatorFlags::all());
    let body = serde_json::to_value(crtd_candidate()).expect("params serialize");

    let response = router
        .oneshot(json_request(RECOMMENDATION_PATH, &body))
        .await
        .expect("router responds");
    let (status, payload) = read_json(response).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["recommendation"]["primary"], "CRT-D");
    assert_eq!(payload["overallRisk"], "Low");
    assert!(payload["evaluatedAt"].is_string());
}

#[tokio::test]
async fn invalid_parameters_map_to_unprocessable_entity() {
    let router = therapy_router(CalculatorFlags::all());
    let mut body = serde_json::to_value(params()).expect("params serialize");
    body["qrsDurationMs"] = json!(-10);

    let response = router
        .oneshot(json_request(SAFETY_PATH, &body))
        .await
        .expect("router responds");
    let (status, payload) = read_json(response).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(payload["field"], "qrsDurationMs");
}

#[tokio::test]
async fn unknown_enum_value_is_rejected_by_extractor() {
    let router = therapy_router(CalculatorFlags::all());
    let mut body = serde_json::to_value(params()).expect("params serialize");
    body["qrsMorphology"] = json!("LAFB");

    let response = router
        .oneshot(json_request(ELIGIBILITY_PATH, &body))
        .await
        .expect("router responds");

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn eligibility_route_reports_candidacy_alongside_evaluators() {
    let router = therapy_router(CalculatorFlags::all());
    let body = serde_json::to_value(crtd_candidate()).expect("params serialize");

    let response = router
        .oneshot(json_request(ELIGIBILITY_PATH, &body))
        .await
        .expect("router responds");
    let (status, payload) = read_json(response).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["icd"]["eligible"], true);
    assert_eq!(payload["crt"]["classOfEvidence"], "ClassI");
    assert_eq!(payload["crtd"]["eligible"], true);
    assert_eq!(payload["candidacy"]["tier"], "strong");
}

#[tokio::test]
async fn gdmt_route_reconciles_pillars() {
    let router = therapy_router(CalculatorFlags::all());
    let mut parameters = serde_json::to_value(params()).expect("params serialize");
    parameters["heartRate"] = json!(44);
    let body = json!({
        "parameters": parameters,
        "pillars": [
            { "pillar": "Beta-Blocker", "status": "suboptimal", "currentDose": "metoprolol 25 mg" },
            { "pillar": "ARNi", "status": "optimal" }
        ]
    });

    let response = router
        .oneshot(json_request(GDMT_PATH, &body))
        .await
        .expect("router responds");
    let (status, payload) = read_json(response).await;

    assert_eq!(status, StatusCode::OK);
    let pillars = payload["pillars"].as_array().expect("pillars array");
    assert_eq!(pillars.len(), 4);
    assert_eq!(pillars[0]["status"], "optimal");
    assert_eq!(pillars[1]["status"], "contraindicated");
    assert_eq!(pillars[2]["status"], "not_started");
    assert_eq!(payload["optimalPillars"], 1);
    assert_eq!(payload["overallRisk"], "High");
}

#[tokio::test]
async fn disabled_calculators_are_not_routed() {
    let flags = CalculatorFlags {
        gdmt_optimizer: false,
        safety_checker: false,
        ..CalculatorFlags::all()
    };
    let body = serde_json::to_value(params()).expect("params serialize");

    for (path, expected) in [
        (GDMT_PATH, StatusCode::NOT_FOUND),
        (SAFETY_PATH, StatusCode::NOT_FOUND),
        (RECOMMENDATION_PATH, StatusCode::NOT_FOUND),
        (ELIGIBILITY_PATH, StatusCode::OK),
    ] {
        let response = therapy_router(flags)
            .oneshot(json_request(path, &body))
            .await
            .expect("router responds");
        assert_eq!(response.status(), expected, "unexpected status for {path}");
    }
}
