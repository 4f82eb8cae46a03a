//! consent-possum
//!
//! POSSUM risk scoring. Pure data and arithmetic, no I/O.
//! Holds the physiological and operative score tables, maps a caller's
//! option selections to ordinal scores, and evaluates the two published
//! logistic equations for mortality and morbidity.

pub mod catalogs;
pub mod error;
pub mod scoring;
pub mod summary;

use error::PossumError;
use scoring::{
    Catalog, CatalogKind, ScoreResult, Selection, aggregate_score, check_domain, evaluate,
};

/// Both catalogs, physiological first.
pub fn all_catalogs() -> [&'static Catalog; 2] {
    [catalogs::physiological(), catalogs::operative()]
}

/// Look up a catalog by kind.
pub fn get_catalog(kind: CatalogKind) -> &'static Catalog {
    match kind {
        CatalogKind::Physiological => catalogs::physiological(),
        CatalogKind::Operative => catalogs::operative(),
    }
}

/// Score a complete pair of selections against the standard catalogs.
///
/// Both selections must name an option for every variable of their
/// catalog. Nothing is defaulted: a missing or unrecognised option fails
/// the whole calculation.
pub fn score(physiological: &Selection, operative: &Selection) -> Result<ScoreResult, PossumError> {
    score_with(
        (catalogs::physiological(), catalogs::operative()),
        (physiological, operative),
    )
}

/// Score a selection pair against an explicit catalog pair. Totals are
/// checked against the domains of the catalogs passed in.
pub fn score_with(
    (physiological_catalog, operative_catalog): (&Catalog, &Catalog),
    (physiological, operative): (&Selection, &Selection),
) -> Result<ScoreResult, PossumError> {
    let physiological_score = aggregate_score(physiological_catalog, physiological)?;
    let operative_score = aggregate_score(operative_catalog, operative)?;
    check_domain(physiological_catalog, physiological_score)?;
    check_domain(operative_catalog, operative_score)?;
    Ok(evaluate(physiological_score, operative_score))
}
