use consent_possum::catalogs::{operative, physiological};
use consent_possum::scoring::Selection;
use consent_possum::score;
use consent_possum::summary::to_structured_input;

#[test]
fn summary_lists_choices_totals_and_risks() {
    let physio = Selection::first_options(physiological()).set("age", "61-70");
    let op = Selection::first_options(operative());
    let result = score(&physio, &op).unwrap();

    let text = to_structured_input(&physio, &op, &result);
    assert!(text.starts_with("## POSSUM\n\n"));
    assert!(text.contains("### Physiological score: 13\n"));
    assert!(text.contains("- Age: 61-70 (2)\n"));
    assert!(text.contains("### Operative score: 6\n"));
    assert!(text.contains("- Timing of surgery: Elective (1)\n"));
    assert!(text.contains(&format!("- Mortality: {:.2}%", result.mortality_percent())));
    assert!(text.contains(&format!("- Morbidity: {:.2}%", result.morbidity_percent())));
}

#[test]
fn summary_keeps_catalog_order() {
    let physio = Selection::first_options(physiological());
    let op = Selection::first_options(operative());
    let result = score(&physio, &op).unwrap();

    let text = to_structured_input(&physio, &op, &result);
    let age = text.find("- Age:").unwrap();
    let ecg = text.find("- ECG:").unwrap();
    let severity = text.find("- Operative severity:").unwrap();
    assert!(age < ecg);
    assert!(ecg < severity);
}
