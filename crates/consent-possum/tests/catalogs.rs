use consent_possum::catalogs::{operative, physiological};
use consent_possum::scoring::{CatalogKind, SCORE_ALPHABET, ScoreBounds};
use consent_possum::{all_catalogs, get_catalog};

#[test]
fn catalogs_have_expected_variable_counts() {
    assert_eq!(physiological().len(), 12);
    assert_eq!(operative().len(), 6);
    assert_eq!(physiological().kind, CatalogKind::Physiological);
    assert_eq!(operative().kind, CatalogKind::Operative);
}

#[test]
fn physiological_variables_in_declared_order() {
    let ids: Vec<_> = physiological().ids().collect();
    assert_eq!(
        ids,
        [
            "age",
            "cardiac_signs",
            "respiratory_signs",
            "systolic_bp",
            "pulse_rate",
            "glasgow_coma_scale",
            "hemoglobin",
            "white_cell_count",
            "urea",
            "sodium",
            "potassium",
            "ecg",
        ]
    );
}

#[test]
fn operative_variables_in_declared_order() {
    let ids: Vec<_> = operative().ids().collect();
    assert_eq!(
        ids,
        [
            "operative_severity",
            "multiple_procedures",
            "blood_loss",
            "peritoneal_soiling",
            "malignancy",
            "timing",
        ]
    );
}

#[test]
fn every_table_starts_at_one_and_never_decreases() {
    for catalog in all_catalogs() {
        for variable in &catalog.variables {
            let scores: Vec<u32> = variable.options.iter().map(|o| o.score).collect();
            assert!(
                (3..=4).contains(&scores.len()),
                "{} has {} options",
                variable.id,
                scores.len()
            );
            assert_eq!(scores[0], 1, "{} does not start at 1", variable.id);
            assert!(
                scores.windows(2).all(|w| w[0] <= w[1]),
                "{} scores decrease: {scores:?}",
                variable.id
            );
            assert!(
                scores.iter().all(|s| SCORE_ALPHABET.contains(s)),
                "{} uses a score outside the alphabet: {scores:?}",
                variable.id
            );
        }
    }
}

#[test]
fn labels_are_unique_within_each_table() {
    for catalog in all_catalogs() {
        for variable in &catalog.variables {
            let mut labels: Vec<_> = variable.options.iter().map(|o| &o.label).collect();
            labels.sort();
            labels.dedup();
            assert_eq!(labels.len(), variable.options.len(), "{}", variable.id);
        }
    }
}

#[test]
fn age_table_tops_out_at_four() {
    let age = physiological().variable("age").unwrap();
    assert_eq!(age.options.len(), 3);
    assert_eq!(age.last_option().unwrap().score, 4);
}

#[test]
fn attainable_bounds_follow_tables() {
    assert_eq!(physiological().attainable_bounds(), ScoreBounds { min: 12, max: 92 });
    assert_eq!(operative().attainable_bounds(), ScoreBounds { min: 6, max: 48 });
}

#[test]
fn score_domain_spans_alphabet_envelope() {
    assert_eq!(physiological().score_domain(), ScoreBounds { min: 12, max: 96 });
    assert_eq!(operative().score_domain(), ScoreBounds { min: 6, max: 48 });
}

#[test]
fn labels_keep_comparison_signs_verbatim() {
    let pulse = physiological().variable("pulse_rate").unwrap();
    assert_eq!(pulse.score_for("101-120 or ≤ 39"), Some(4));
    assert_eq!(pulse.score_for("≥ 121"), Some(8));

    let wcc = physiological().variable("white_cell_count").unwrap();
    assert_eq!(wcc.name, "White cell count (×10⁹/L)");
}

#[test]
fn get_catalog_returns_static_instances() {
    assert!(std::ptr::eq(get_catalog(CatalogKind::Physiological), physiological()));
    assert!(std::ptr::eq(get_catalog(CatalogKind::Operative), operative()));
}

#[test]
fn display_label_appends_score() {
    let age = physiological().variable("age").unwrap();
    let labels: Vec<_> = age.options.iter().map(|o| o.display_label()).collect();
    assert_eq!(labels, ["≤ 60 (1)", "61-70 (2)", "≥ 71 (4)"]);
}

#[test]
fn option_for_matches_score_for() {
    let blood_loss = operative().variable("blood_loss").unwrap();
    let option = blood_loss.option_for("501-999").unwrap();
    assert_eq!(option.score, 4);
    assert_eq!(blood_loss.score_for("501-999"), Some(option.score));
    assert!(blood_loss.option_for("501 - 999").is_none());
    assert!(blood_loss.score_for("501 - 999").is_none());
}
