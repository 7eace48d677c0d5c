use crate::config::ConfigError;
use crate::language::{ScoreValidationError, UnknownLanguageTest};
use crate::tables::TableLoadError;
use crate::telemetry::TelemetryError;
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
    Server(axum::Error),
    Tables(TableLoadError),
    Input(serde_json::Error),
    UnknownTest(UnknownLanguageTest),
    Validation(ScoreValidationError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Tables(err) => write!(f, "reference table error: {}", err),
            AppError::Input(err) => write!(f, "invalid input: {}", err),
            AppError::UnknownTest(err) => write!(f, "{}", err),
            AppError::Validation(err) => write!(f, "invalid score: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Tables(err) => Some(err),
            AppError::Input(err) => Some(err),
            AppError::UnknownTest(err) => Some(err),
            AppError::Validation(err) => Some(err),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::UnknownTest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Tables(_) | AppError::Input(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
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

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<TableLoadError> for AppError {
    fn from(value: TableLoadError) -> Self {
        Self::Tables(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Input(value)
    }
}

impl From<UnknownLanguageTest> for AppError {
    fn from(value: UnknownLanguageTest) -> Self {
        Self::UnknownTest(value)
    }
}

impl From<ScoreValidationError> for AppError {
    fn from(value: ScoreValidationError) -> Self {
        Self::Validation(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{LanguageSkill, LanguageTest};

    #[test]
    fn rejected_scores_map_to_unprocessable_entity() {
        let error = AppError::from(ScoreValidationError::OffStep {
            test: LanguageTest::IeltsGeneral,
            skill: LanguageSkill::Reading,
            score: 6.25,
            step: 0.5,
        });
        assert_eq!(error.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(error.to_string().contains("6.25"));
    }

    #[test]
    fn bad_reference_tables_are_client_errors() {
        let error = AppError::from(TableLoadError::UnsupportedFormat {
            extension: "xlsx".to_string(),
        });
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::from(std::io::Error::other("disk")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
