use axum::Json;
use axum::extract::Path;
use serde::{Deserialize, Serialize};

use consent_possum::scoring::{Catalog, CatalogKind, ScoreBounds, ScoreResult, Selection};
use consent_possum::{all_catalogs, score};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct CatalogView {
    kind: CatalogKind,
    bounds: ScoreBounds,
    variables: Vec<VariableView>,
}

#[derive(Serialize)]
pub struct VariableView {
    id: String,
    name: String,
    options: Vec<OptionView>,
}

#[derive(Serialize)]
pub struct OptionView {
    label: String,
    score: u32,
    display: String,
}

impl From<&Catalog> for CatalogView {
    fn from(catalog: &Catalog) -> Self {
        Self {
            kind: catalog.kind,
            bounds: catalog.attainable_bounds(),
            variables: catalog
                .variables
                .iter()
                .map(|v| VariableView {
                    id: v.id.clone(),
                    name: v.name.clone(),
                    options: v
                        .options
                        .iter()
                        .map(|o| OptionView {
                            label: o.label.clone(),
                            score: o.score,
                            display: o.display_label(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// One selection per catalog, as submitted by the wizard.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreRequest {
    pub physiological: Selection,
    pub operative: Selection,
}

#[derive(Serialize)]
pub struct ScoreResponse {
    #[serde(flatten)]
    result: ScoreResult,
    mortality_percent: f64,
    morbidity_percent: f64,
}

pub async fn list_catalogs() -> Json<Vec<CatalogView>> {
    Json(all_catalogs().into_iter().map(CatalogView::from).collect())
}

pub async fn get_catalog(Path(kind): Path<CatalogKind>) -> Json<CatalogView> {
    Json(CatalogView::from(consent_possum::get_catalog(kind)))
}

pub async fn score_selection(
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, ApiError> {
    let result = score(&request.physiological, &request.operative)?;

    tracing::info!(
        physiological_score = result.physiological_score,
        operative_score = result.operative_score,
        "possum_scored"
    );

    Ok(Json(ScoreResponse {
        mortality_percent: result.mortality_percent(),
        morbidity_percent: result.morbidity_percent(),
        result,
    }))
}
