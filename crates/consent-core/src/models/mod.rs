pub mod consent;
pub mod intake;
