use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::therapy::{CohortImportError, ParameterError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Parameter(ParameterError),
    Cohort(CohortImportError),
    Serialization(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Parameter(err) => write!(f, "invalid parameter: {}", err),
            AppError::Cohort(err) => write!(f, "cohort import error: {}", err),
            AppError::Serialization(err) => write!(f, "serialization error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Parameter(err) => Some(err),
            AppError::Cohort(err) => Some(err),
            AppError::Serialization(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Parameter(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": self.to_string(), "field": err.field() }),
            ),
            AppError::Cohort(_) | AppError::Serialization(_) => {
                (StatusCode::BAD_REQUEST, json!({ "error": self.to_string() }))
            }
            AppError::Config(_) | AppError::Telemetry(_) | AppError::Io(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": self.to_string() }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ParameterError> for AppError {
    fn from(value: ParameterError) -> Self {
        Self::Parameter(value)
    }
}

impl From<CohortImportError> for AppError {
    fn from(value: CohortImportError) -> Self {
        Self::Cohort(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::therapy::ClinicalParameters;

    async fn status_and_body(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[tokio::test]
    async fn parameter_errors_name_the_field() {
        let err = serde_json::from_value::<ClinicalParameters>(serde_json::json!({
            "ejectionFraction": 120,
            "nyhaClass": "II",
            "qrsDurationMs": 100,
            "qrsMorphology": "Normal",
            "onOptimalMedicalTherapy": true,
            "lifeExpectancyOver1Year": true,
            "priorSuddenCardiacDeathOrVTVF": false,
            "ischemicCardiomyopathy": false,
            "atrialFibrillation": false,
            "kidneyFunction": "Normal"
        }))
        .expect("parameters parse")
        .validate()
        .expect_err("ejection fraction out of range");

        let (status, body) = status_and_body(AppError::from(err)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["field"], "ejectionFraction");
    }

    #[tokio::test]
    async fn io_and_serialization_errors_map_to_server_and_client_status() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing worklist");
        let (status, _) = status_and_body(AppError::from(io)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let decode = serde_json::from_str::<serde_json::Value>("{").expect_err("truncated json");
        let (status, body) = status_and_body(AppError::from(decode)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]
            .as_str()
            .is_some_and(|message| message.starts_with("serialization error")));
    }
}
