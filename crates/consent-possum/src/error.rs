use thiserror::Error;

use crate::scoring::CatalogKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PossumError {
    #[error("invalid selection for '{variable}': '{option}' is not a defined option")]
    InvalidSelection { variable: String, option: String },

    #[error("incomplete {catalog} selection: no option chosen for '{variable}'")]
    IncompleteSelection {
        catalog: CatalogKind,
        variable: String,
    },

    #[error("{catalog} score {score} is outside [{min}, {max}]")]
    InvalidScore {
        catalog: CatalogKind,
        score: u32,
        min: u32,
        max: u32,
    },

    #[error("unknown {catalog} variable: {variable}")]
    UnknownVariable {
        catalog: CatalogKind,
        variable: String,
    },
}
