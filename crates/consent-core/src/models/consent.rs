use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::intake::PatientIntake;
use crate::error::CoreError;

/// Predicted surgical risks forwarded to the consent generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskFigures {
    /// Probability in [0, 1].
    pub mortality_risk: f64,
    /// Probability in [0, 1].
    pub morbidity_risk: f64,
}

impl RiskFigures {
    pub fn validate(&self) -> Result<(), CoreError> {
        for (field, value) in [
            ("mortality_risk", self.mortality_risk),
            ("morbidity_risk", self.morbidity_risk),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(CoreError::InvalidRisk { field, value });
            }
        }
        Ok(())
    }
}

/// Payload sent to the external consent-generation service.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConsentRequest {
    pub id: Uuid,
    pub intake: PatientIntake,
    pub risk: Option<RiskFigures>,
    /// Structured POSSUM breakdown for the generator prompt.
    pub possum_summary: Option<String>,
    pub created_at: jiff::Timestamp,
}

impl ConsentRequest {
    /// Validate the parts and stamp a new request.
    pub fn new(
        intake: PatientIntake,
        risk: Option<RiskFigures>,
        possum_summary: Option<String>,
    ) -> Result<Self, CoreError> {
        intake.validate()?;
        if let Some(risk) = &risk {
            risk.validate()?;
        }
        Ok(Self {
            id: Uuid::new_v4(),
            intake,
            risk,
            possum_summary,
            created_at: jiff::Timestamp::now(),
        })
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
