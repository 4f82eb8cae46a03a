use crate::catalogs;
use crate::scoring::{Catalog, ScoreResult, Selection};

/// Format a scored POSSUM calculation as structured text for inclusion in
/// the consent-generation prompt.
///
/// Variables without a selection are skipped; callers normally pass the
/// same selections that produced `result`.
pub fn to_structured_input(
    physiological: &Selection,
    operative: &Selection,
    result: &ScoreResult,
) -> String {
    let mut output = String::from("## POSSUM\n\n");
    push_catalog(
        &mut output,
        "Physiological score",
        catalogs::physiological(),
        physiological,
        result.physiological_score,
    );
    push_catalog(
        &mut output,
        "Operative score",
        catalogs::operative(),
        operative,
        result.operative_score,
    );
    output.push_str("### Predicted risk\n");
    output.push_str(&format!("- Mortality: {:.2}%\n", result.mortality_percent()));
    output.push_str(&format!("- Morbidity: {:.2}%\n", result.morbidity_percent()));
    output
}

fn push_catalog(
    output: &mut String,
    heading: &str,
    catalog: &Catalog,
    selection: &Selection,
    total: u32,
) {
    output.push_str(&format!("### {heading}: {total}\n"));
    for variable in &catalog.variables {
        let Some(label) = selection.get(&variable.id) else {
            continue;
        };
        match variable.option_for(label) {
            Some(option) => {
                output.push_str(&format!("- {}: {}\n", variable.name, option.display_label()))
            }
            None => output.push_str(&format!("- {}: {label}\n", variable.name)),
        }
    }
    output.push('\n');
}
