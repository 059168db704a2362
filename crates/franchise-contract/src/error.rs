use crate::config::ConfigError;
use crate::contract::RecordError;
use crate::document::ExportError;
use crate::postal::PostalLookupError;
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
    Record(RecordError),
    Postal(PostalLookupError),
    Export(ExportError),
    InvalidInput(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Record(_) | AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Postal(PostalLookupError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Postal(_) => StatusCode::BAD_GATEWAY,
            AppError::Export(ExportError::InvalidNationalId) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Export(ExportError::Integrity(_)) => StatusCode::BAD_REQUEST,
            AppError::Export(ExportError::Target(_))
            | AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Record(err) => write!(f, "record error: {}", err),
            AppError::Postal(err) => write!(f, "postal lookup error: {}", err),
            AppError::Export(ExportError::InvalidNationalId) => {
                write!(f, "{}", ExportError::InvalidNationalId)
            }
            AppError::Export(err) => write!(f, "export error: {}", err),
            AppError::InvalidInput(message) => write!(f, "invalid input: {}", message),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Record(err) => Some(err),
            AppError::Postal(err) => Some(err),
            AppError::Export(err) => Some(err),
            AppError::InvalidInput(_) => None,
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

impl From<RecordError> for AppError {
    fn from(value: RecordError) -> Self {
        Self::Record(value)
    }
}

impl From<PostalLookupError> for AppError {
    fn from(value: PostalLookupError) -> Self {
        Self::Postal(value)
    }
}

impl From<ExportError> for AppError {
    fn from(value: ExportError) -> Self {
        Self::Export(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::MoneyField;
    use crate::postal::PostalCode;

    #[test]
    fn maps_domain_errors_to_statuses() {
        assert_eq!(
            AppError::from(RecordError::UnknownWitness("9".to_string())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(ExportError::InvalidNationalId).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        let code = PostalCode::parse("01001000").expect("valid code");
        assert_eq!(
            AppError::from(PostalLookupError::NotFound(code)).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(PostalLookupError::Transport("timeout".to_string())).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::from(ExportError::Integrity(RecordError::UnformattedAmount(
                MoneyField::FranchiseFee
            )))
            .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(std::io::Error::other("listener closed")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn blocked_export_message_is_passed_through() {
        assert_eq!(
            AppError::from(ExportError::InvalidNationalId).to_string(),
            "O CPF informado é inválido. Por favor, corrija antes de baixar o documento."
        );
    }
}
