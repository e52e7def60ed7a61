use axum::routing::post;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::eligibility::{
    combine_crtd, evaluate_crt, evaluate_icd, score_candidacy, CandidacyScore, EligibilityResult,
};
use super::gdmt::{GdmtPlan, PillarRecord};
use super::parameters::{ClinicalParameters, ValidatedParameters};
use super::recommendation::{recommend, Recommendation};
use super::safety::{ContraindicationAlert, RiskLevel, SafetyReport, TherapyAlerts};
use crate::config::CalculatorFlags;
use crate::error::AppError;

pub const RECOMMENDATION_PATH: &str = "/api/v1/therapy/recommendation";
pub const ELIGIBILITY_PATH: &str = "/api/v1/therapy/eligibility";
pub const SAFETY_PATH: &str = "/api/v1/therapy/safety";
pub const GDMT_PATH: &str = "/api/v1/therapy/gdmt";

/// Router exposing the calculators enabled in `flags`.
///
/// Disabled calculators are not registered at all, so their paths answer 404.
pub fn therapy_router(flags: CalculatorFlags) -> Router {
    let mut router = Router::new();
    if flags.recommendation() {
        router = router.route(RECOMMENDATION_PATH, post(recommendation_handler));
    }
    if flags.device_eligibility {
        router = router.route(ELIGIBILITY_PATH, post(eligibility_handler));
    }
    if flags.safety_checker {
        router = router.route(SAFETY_PATH, post(safety_handler));
    }
    if flags.gdmt_optimizer {
        router = router.route(GDMT_PATH, post(gdmt_handler));
    }
    router
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub evaluated_at: DateTime<Utc>,
    pub recommendation: Recommendation,
    pub overall_risk: RiskLevel,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResponse {
    pub evaluated_at: DateTime<Utc>,
    pub icd: EligibilityResult,
    pub crt: EligibilityResult,
    pub crtd: EligibilityResult,
    pub candidacy: CandidacyScore,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyResponse {
    pub evaluated_at: DateTime<Utc>,
    pub by_therapy: Vec<TherapyAlerts>,
    pub alerts: Vec<ContraindicationAlert>,
    pub overall_risk: RiskLevel,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GdmtRequest {
    pub parameters: ClinicalParameters,
    #[serde(default)]
    pub pillars: Vec<PillarRecord>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GdmtResponse {
    pub evaluated_at: DateTime<Utc>,
    pub pillars: Vec<PillarRecord>,
    pub optimal_pillars: usize,
    pub overall_risk: RiskLevel,
}

fn admit(params: ClinicalParameters) -> Result<ValidatedParameters, AppError> {
    params.validate().map_err(|err| {
        warn!(field = err.field(), error = %err, "clinical parameters rejected");
        AppError::from(err)
    })
}

pub(crate) async fn recommendation_handler(
    Json(params): Json<ClinicalParameters>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let params = admit(params)?;
    let recommendation = recommend(&params);
    let overall_risk = RiskLevel::from_alerts(&recommendation.contraindications);

    Ok(Json(RecommendationResponse {
        evaluated_at: Utc::now(),
        recommendation,
        overall_risk,
    }))
}

pub(crate) async fn eligibility_handler(
    Json(params): Json<ClinicalParameters>,
) -> Result<Json<EligibilityResponse>, AppError> {
    let params = admit(params)?;
    let icd = evaluate_icd(&params);
    let crt = evaluate_crt(&params);
    let crtd = combine_crtd(&crt, &icd);

    Ok(Json(EligibilityResponse {
        evaluated_at: Utc::now(),
        icd,
        crt,
        crtd,
        candidacy: score_candidacy(&params),
    }))
}

pub(crate) async fn safety_handler(
    Json(params): Json<ClinicalParameters>,
) -> Result<Json<SafetyResponse>, AppError> {
    let params = admit(params)?;
    let report = SafetyReport::for_parameters(&params);
    let alerts = report.alerts();

    Ok(Json(SafetyResponse {
        evaluated_at: Utc::now(),
        by_therapy: report.by_therapy,
        alerts,
        overall_risk: report.overall_risk,
    }))
}

pub(crate) async fn gdmt_handler(
    Json(request): Json<GdmtRequest>,
) -> Result<Json<GdmtResponse>, AppError> {
    let params = admit(request.parameters)?;
    let report = SafetyReport::for_parameters(&params);
    let plan = GdmtPlan::new(request.pillars).reconcile(&report.alerts());
    let optimal_pillars = plan.optimal_count();

    Ok(Json(GdmtResponse {
        evaluated_at: Utc::now(),
        pillars: plan.pillars,
        optimal_pillars,
        overall_risk: report.overall_risk,
    }))
}
