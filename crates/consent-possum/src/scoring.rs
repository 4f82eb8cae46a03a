use std::collections::BTreeMap;
use std::fmt;

use consent_core::models::consent::RiskFigures;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalogs;
use crate::error::PossumError;

/// Scores an option may carry. Every table starts at 1 and only climbs.
pub const SCORE_ALPHABET: [u32; 4] = [1, 2, 4, 8];

/// Which half of the POSSUM score a catalog feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CatalogKind {
    /// Preoperative patient state, 12 variables.
    Physiological,
    /// Characteristics of the surgery itself, 6 variables.
    Operative,
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogKind::Physiological => f.write_str("physiological"),
            CatalogKind::Operative => f.write_str("operative"),
        }
    }
}

/// One row of a score table: the option text shown to the clinician and
/// the ordinal score it contributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreOption {
    pub label: String,
    pub score: u32,
}

impl ScoreOption {
    /// Radio-button rendering, e.g. `"61-70 (2)"`.
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.label, self.score)
    }
}

/// A single clinical variable and its ordered score table.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Variable {
    /// Stable selection key, e.g. `"pulse_rate"`.
    pub id: String,
    /// Display title, e.g. `"Pulse rate (bpm)"`.
    pub name: String,
    /// Options in increasing order of clinical severity.
    pub options: Vec<ScoreOption>,
}

impl Variable {
    pub fn new(id: &str, name: &str, options: &[(&str, u32)]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            options: options
                .iter()
                .map(|(label, score)| ScoreOption {
                    label: label.to_string(),
                    score: *score,
                })
                .collect(),
        }
    }

    /// Option whose label is exactly `label` (case-sensitive).
    pub fn option_for(&self, label: &str) -> Option<&ScoreOption> {
        self.options.iter().find(|o| o.label == label)
    }

    /// Score paired with `label`.
    pub fn score_for(&self, label: &str) -> Option<u32> {
        self.option_for(label).map(|o| o.score)
    }

    pub fn first_option(&self) -> Option<&ScoreOption> {
        self.options.first()
    }

    pub fn last_option(&self) -> Option<&ScoreOption> {
        self.options.last()
    }
}

/// Inclusive range of an aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreBounds {
    pub min: u32,
    pub max: u32,
}

impl ScoreBounds {
    pub fn contains(&self, score: u32) -> bool {
        (self.min..=self.max).contains(&score)
    }
}

/// A named, ordered collection of score tables.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Catalog {
    pub kind: CatalogKind,
    pub variables: Vec<Variable>,
}

impl Catalog {
    pub fn new(kind: CatalogKind, variables: Vec<Variable>) -> Self {
        Self { kind, variables }
    }

    pub fn variable(&self, id: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.variables.iter().map(|v| v.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Lowest and highest aggregate a complete selection can actually reach.
    pub fn attainable_bounds(&self) -> ScoreBounds {
        let sum_by = |pick: fn(&Variable) -> Option<&ScoreOption>| -> u32 {
            self.variables
                .iter()
                .filter_map(pick)
                .map(|o| o.score)
                .sum()
        };
        ScoreBounds {
            min: sum_by(Variable::first_option),
            max: sum_by(Variable::last_option),
        }
    }

    /// Envelope of any aggregate over this many variables drawn from
    /// [`SCORE_ALPHABET`]. Totals outside it are rejected before evaluation.
    pub fn score_domain(&self) -> ScoreBounds {
        let n = self.variables.len() as u32;
        ScoreBounds {
            min: n * SCORE_ALPHABET[0],
            max: n * SCORE_ALPHABET[SCORE_ALPHABET.len() - 1],
        }
    }
}

/// The option chosen for each variable of one catalog, keyed by variable id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(BTreeMap<String, String>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn set(mut self, variable: impl Into<String>, option: impl Into<String>) -> Self {
        self.insert(variable, option);
        self
    }

    pub fn insert(&mut self, variable: impl Into<String>, option: impl Into<String>) {
        self.0.insert(variable.into(), option.into());
    }

    pub fn get(&self, variable: &str) -> Option<&str> {
        self.0.get(variable).map(String::as_str)
    }

    pub fn remove(&mut self, variable: &str) -> Option<String> {
        self.0.remove(variable)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every variable of `catalog` has a chosen option.
    pub fn is_complete(&self, catalog: &Catalog) -> bool {
        catalog.ids().all(|id| self.0.contains_key(id))
    }

    /// Every variable set to its least severe option.
    pub fn first_options(catalog: &Catalog) -> Self {
        Self::pick(catalog, Variable::first_option)
    }

    /// Every variable set to its most severe option.
    pub fn last_options(catalog: &Catalog) -> Self {
        Self::pick(catalog, Variable::last_option)
    }

    fn pick(catalog: &Catalog, choose: fn(&Variable) -> Option<&ScoreOption>) -> Self {
        catalog
            .variables
            .iter()
            .filter_map(|v| choose(v).map(|o| (v.id.clone(), o.label.clone())))
            .collect()
    }
}

impl FromIterator<(String, String)> for Selection {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Aggregate scores and predicted risks for one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub physiological_score: u32,
    pub operative_score: u32,
    /// Probability in [0, 1].
    pub mortality_risk: f64,
    /// Probability in [0, 1].
    pub morbidity_risk: f64,
}

impl ScoreResult {
    /// Mortality risk as a percentage rounded to two decimals.
    pub fn mortality_percent(&self) -> f64 {
        round_percent(self.mortality_risk)
    }

    /// Morbidity risk as a percentage rounded to two decimals.
    pub fn morbidity_percent(&self) -> f64 {
        round_percent(self.morbidity_risk)
    }
}

impl From<ScoreResult> for RiskFigures {
    fn from(result: ScoreResult) -> Self {
        RiskFigures {
            mortality_risk: result.mortality_risk,
            morbidity_risk: result.morbidity_risk,
        }
    }
}

fn round_percent(probability: f64) -> f64 {
    (probability * 10_000.0).round() / 100.0
}

/// Look up the score for `chosen_option` in the table of `variable_name`.
pub fn score_variable(
    catalog: &Catalog,
    variable_name: &str,
    chosen_option: &str,
) -> Result<u32, PossumError> {
    let variable = catalog
        .variable(variable_name)
        .ok_or_else(|| PossumError::UnknownVariable {
            catalog: catalog.kind,
            variable: variable_name.to_string(),
        })?;

    variable
        .score_for(chosen_option)
        .ok_or_else(|| PossumError::InvalidSelection {
            variable: variable.id.clone(),
            option: chosen_option.to_string(),
        })
}

/// Sum the scores of every catalog variable. Keys in `selection` that the
/// catalog does not define are ignored.
pub fn aggregate_score(catalog: &Catalog, selection: &Selection) -> Result<u32, PossumError> {
    let mut total = 0;
    for variable in &catalog.variables {
        let chosen = selection
            .get(&variable.id)
            .ok_or_else(|| PossumError::IncompleteSelection {
                catalog: catalog.kind,
                variable: variable.id.clone(),
            })?;
        total += score_variable(catalog, &variable.id, chosen)?;
    }
    Ok(total)
}

/// Evaluate the POSSUM logistic equations for totals taken from the
/// standard catalogs.
pub fn compute_risk(
    physiological_score: u32,
    operative_score: u32,
) -> Result<ScoreResult, PossumError> {
    check_domain(catalogs::physiological(), physiological_score)?;
    check_domain(catalogs::operative(), operative_score)?;
    Ok(evaluate(physiological_score, operative_score))
}

/// Reject a total that `catalog` could not have produced.
pub(crate) fn check_domain(catalog: &Catalog, score: u32) -> Result<(), PossumError> {
    let domain = catalog.score_domain();
    if domain.contains(score) {
        Ok(())
    } else {
        Err(PossumError::InvalidScore {
            catalog: catalog.kind,
            score,
            min: domain.min,
            max: domain.max,
        })
    }
}

/// Mortality: `ln(R1/(1-R1)) = -9.065 + 0.1692 * physiological + 0.1550 * operative`
/// Morbidity: `ln(R2/(1-R2)) = -5.91 + 0.16 * physiological + 0.19 * operative`
pub(crate) fn evaluate(physiological_score: u32, operative_score: u32) -> ScoreResult {
    let physiological = f64::from(physiological_score);
    let operative = f64::from(operative_score);

    let logit_mortality = -9.065 + 0.1692 * physiological + 0.1550 * operative;
    let logit_morbidity = -5.91 + 0.16 * physiological + 0.19 * operative;

    ScoreResult {
        physiological_score,
        operative_score,
        mortality_risk: logistic(logit_mortality),
        morbidity_risk: logistic(logit_morbidity),
    }
}

fn logistic(logit: f64) -> f64 {
    1.0 / (1.0 + (-logit).exp())
}
