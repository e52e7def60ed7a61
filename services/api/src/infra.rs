use hf_therapy::error::AppError;
use hf_therapy::therapy::ClinicalParameters;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Read one patient's parameters from a JSON document on disk.
pub(crate) fn read_parameters(path: &Path) -> Result<ClinicalParameters, AppError> {
    let raw = std::fs::read_to_string(path)?;
    parse_parameters(&raw)
}

pub(crate) fn parse_parameters(raw: &str) -> Result<ClinicalParameters, AppError> {
    Ok(serde_json::from_str(raw)?)
}
