use std::sync::LazyLock;

use crate::scoring::{Catalog, CatalogKind, Variable};

/// Physiological score tables: 12 preoperative variables.
///
/// Labels are part of the selection contract and are matched verbatim,
/// including the `≤` / `≥` comparison signs.
pub fn physiological() -> &'static Catalog {
    static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
        Catalog::new(
            CatalogKind::Physiological,
            vec![
                Variable::new(
                    "age",
                    "Age",
                    &[("≤ 60", 1), ("61-70", 2), ("≥ 71", 4)],
                ),
                Variable::new(
                    "cardiac_signs",
                    "Cardiac signs | Chest X-ray",
                    &[
                        ("Normal", 1),
                        ("Cardiac drugs or steroids", 2),
                        ("Oedema; warfarin | Borderline cardiomegaly", 4),
                        ("Jugular venous pressure | Cardiomegaly", 8),
                    ],
                ),
                Variable::new(
                    "respiratory_signs",
                    "Respiratory signs | Chest X-ray",
                    &[
                        ("Normal", 1),
                        (
                            "Shortness of breath on exertion | Mild chronic obstructive airway disease",
                            2,
                        ),
                        (
                            "Shortness of breath on stairs | Moderate chronic obstructive airway disease",
                            4,
                        ),
                        ("Shortness of breath at rest | Any other change", 8),
                    ],
                ),
                Variable::new(
                    "systolic_bp",
                    "Systolic blood pressure (mmHg)",
                    &[
                        ("110-130", 1),
                        ("131-170 or 100-109", 2),
                        ("≥ 171 or 90-99", 4),
                        ("≤ 89", 8),
                    ],
                ),
                Variable::new(
                    "pulse_rate",
                    "Pulse rate (bpm)",
                    &[
                        ("50-80", 1),
                        ("81-100 or 40-49", 2),
                        ("101-120 or ≤ 39", 4),
                        ("≥ 121", 8),
                    ],
                ),
                Variable::new(
                    "glasgow_coma_scale",
                    "Glasgow Coma Scale",
                    &[("15", 1), ("12-14", 2), ("9-11", 4), ("≤ 8", 8)],
                ),
                Variable::new(
                    "hemoglobin",
                    "Hemoglobin (g/dL)",
                    &[
                        ("13-16 (male), 11.5-14.5 (female)", 1),
                        ("10-12.9 or 16.1-17", 2),
                        ("8-9.9 or 17.1-18", 4),
                        ("≤ 7.9 or ≥ 18.1", 8),
                    ],
                ),
                // "N/A" scores as the worst band. Kept as-is.
                Variable::new(
                    "white_cell_count",
                    "White cell count (×10⁹/L)",
                    &[
                        ("4-10", 1),
                        ("10.1-20 or 3.1-3.9", 2),
                        ("≥ 20.1 or ≤ 3", 4),
                        ("N/A", 8),
                    ],
                ),
                Variable::new(
                    "urea",
                    "Urea (mmol/L)",
                    &[("≤ 7.5", 1), ("7.6-10", 2), ("10.1-15", 4), ("≥ 15.1", 8)],
                ),
                Variable::new(
                    "sodium",
                    "Sodium (mmol/L)",
                    &[("≥ 136", 1), ("131-135", 2), ("126-130", 4), ("≤ 125", 8)],
                ),
                Variable::new(
                    "potassium",
                    "Potassium (mmol/L)",
                    &[
                        ("3.5-5", 1),
                        ("3.2-3.4 or 5.1-5.3", 2),
                        ("2.9-3.1 or 5.4-5.9", 4),
                        ("≤ 2.8 or ≥ 6", 8),
                    ],
                ),
                Variable::new(
                    "ecg",
                    "ECG",
                    &[
                        ("Normal", 1),
                        ("Atrial fibrillation (rate 60-90)", 2),
                        ("Other arrhythmia or minor abnormality", 4),
                        ("Ventricular arrhythmia or multiple abnormalities", 8),
                    ],
                ),
            ],
        )
    });
    &CATALOG
}
