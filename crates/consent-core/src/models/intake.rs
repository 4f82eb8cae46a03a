use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Surgeons the intake form collects rows for.
pub const MAX_SURGICAL_TEAM: usize = 3;

/// Patient and procedure details entered on the first wizard step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientIntake {
    pub registration_number: String,
    pub patient_name: String,
    pub surgery_name: String,
    #[serde(default)]
    pub scheduled_date: Option<jiff::civil::Date>,
    /// Free text as entered, e.g. "67/M".
    #[serde(default)]
    pub age_gender: String,
    pub diagnosis: String,
    #[serde(default)]
    pub surgery_site: SurgerySite,
    /// Free-text location, e.g. "left lower abdomen".
    #[serde(default)]
    pub surgery_site_detail: String,
    #[serde(default)]
    pub surgical_team: Vec<SurgicalTeamMember>,
    #[serde(default)]
    pub history: MedicalHistory,
    #[serde(default)]
    pub notes: Option<String>,
}

impl PatientIntake {
    /// Check the fields the consent generator cannot work without.
    pub fn validate(&self) -> Result<(), CoreError> {
        let required = [
            ("registration_number", &self.registration_number),
            ("patient_name", &self.patient_name),
            ("surgery_name", &self.surgery_name),
            ("diagnosis", &self.diagnosis),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(CoreError::MissingField(field.to_string()));
        }

        let count = self.surgical_team().count();
        if count > MAX_SURGICAL_TEAM {
            return Err(CoreError::TooManySurgeons {
                count,
                max: MAX_SURGICAL_TEAM,
            });
        }
        Ok(())
    }

    /// Team rows that actually name a surgeon. Blank rows are skipped.
    pub fn surgical_team(&self) -> impl Iterator<Item = &SurgicalTeamMember> {
        self.surgical_team
            .iter()
            .filter(|m| !m.name.trim().is_empty())
    }
}

/// Laterality marking for the operative site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SurgerySite {
    Right,
    Left,
    Both,
    #[default]
    NotApplicable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SurgicalTeamMember {
    pub name: String,
    /// Board-certified specialist, as opposed to a general practitioner.
    pub specialist: bool,
    #[serde(default)]
    pub department: String,
}

/// Yes/no patient history checklist. Absent flags read as "no".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct MedicalHistory {
    pub past_history: bool,
    pub diabetes: bool,
    pub smoking: bool,
    pub hypertension: bool,
    pub allergy: bool,
    pub hypotension: bool,
    pub airway_abnormality: bool,
    pub cardiovascular: bool,
    pub respiratory: bool,
    pub coagulation: bool,
    pub medication: bool,
    pub kidney: bool,
    pub drug_abuse: bool,
}

impl MedicalHistory {
    /// Display names of the conditions marked present, in checklist order.
    pub fn flagged(&self) -> Vec<&'static str> {
        [
            (self.past_history, "Past illness, injury or surgery"),
            (self.diabetes, "Diabetes"),
            (self.smoking, "Smoking"),
            (self.hypertension, "Hypertension"),
            (self.allergy, "Allergy or idiosyncrasy"),
            (self.hypotension, "Hypotension"),
            (self.airway_abnormality, "Airway abnormality"),
            (self.cardiovascular, "Cardiovascular disease"),
            (self.respiratory, "Respiratory disease"),
            (self.coagulation, "Coagulation disorder"),
            (self.medication, "Current medication"),
            (self.kidney, "Kidney disease"),
            (self.drug_abuse, "Narcotic use or drug incident"),
        ]
        .into_iter()
        .filter_map(|(present, name)| present.then_some(name))
        .collect()
    }
}
