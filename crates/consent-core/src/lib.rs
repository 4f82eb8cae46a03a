//! consent-core
//!
//! Pure domain types for surgical-consent drafting: the patient intake
//! record collected by the wizard and the payload handed to the external
//! consent generator. No I/O.

pub mod error;
pub mod models;
