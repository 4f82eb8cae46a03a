use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use consent_core::error::CoreError;
use consent_possum::all_catalogs;
use consent_possum::error::PossumError;

/// Errors surfaced to the wizard. Selection problems name the variable by
/// its display title and also return its id so the form can highlight it.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{title}: {detail}")]
    Selection {
        variable: String,
        title: String,
        detail: String,
    },

    #[error("{0}")]
    Unprocessable(String),

    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    variable: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, message, variable) = match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, message, None),
            ApiError::Selection { variable, .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, message, Some(variable))
            }
            ApiError::Unprocessable(_) => (StatusCode::UNPROCESSABLE_ENTITY, message, None),
            ApiError::Internal(_) => {
                tracing::error!("internal error: {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    None,
                )
            }
        };

        (status, Json(ErrorBody { error: message, variable })).into_response()
    }
}

/// Display title for a variable id, falling back to the id itself.
fn variable_title(id: &str) -> String {
    all_catalogs()
        .into_iter()
        .find_map(|catalog| catalog.variable(id))
        .map(|v| v.name.clone())
        .unwrap_or_else(|| id.to_string())
}

impl From<PossumError> for ApiError {
    fn from(e: PossumError) -> Self {
        match e {
            PossumError::InvalidSelection { variable, option } => ApiError::Selection {
                title: variable_title(&variable),
                detail: format!("'{option}' is not one of the listed options"),
                variable,
            },
            PossumError::IncompleteSelection { variable, .. } => ApiError::Selection {
                title: variable_title(&variable),
                detail: "no option chosen".to_string(),
                variable,
            },
            PossumError::InvalidScore { .. } => ApiError::Internal(e.to_string()),
            PossumError::UnknownVariable { .. } => ApiError::Unprocessable(e.to_string()),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Serialization(_) => ApiError::Internal(e.to_string()),
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}
