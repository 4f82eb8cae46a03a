use axum::Json;
use serde::Deserialize;

use consent_core::models::consent::{ConsentRequest, RiskFigures};
use consent_core::models::intake::PatientIntake;
use consent_possum::score;
use consent_possum::summary::to_structured_input;

use super::possum::ScoreRequest;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct DraftRequest {
    pub intake: PatientIntake,
    /// Optional POSSUM selections; when present the risks are scored and
    /// embedded in the outgoing request.
    #[serde(default)]
    pub possum: Option<ScoreRequest>,
}

/// Assemble the payload for the external consent generator.
///
/// Nothing is sent or stored here; the wizard forwards the returned
/// request itself.
pub async fn build_request(
    Json(draft): Json<DraftRequest>,
) -> Result<Json<ConsentRequest>, ApiError> {
    let (risk, summary) = match &draft.possum {
        Some(selections) => {
            let result = score(&selections.physiological, &selections.operative)?;
            let summary =
                to_structured_input(&selections.physiological, &selections.operative, &result);
            (Some(RiskFigures::from(result)), Some(summary))
        }
        None => (None, None),
    };

    let request = ConsentRequest::new(draft.intake, risk, summary)?;

    tracing::info!(
        request_id = %request.id,
        has_risk = request.risk.is_some(),
        "consent_request_built"
    );

    Ok(Json(request))
}
