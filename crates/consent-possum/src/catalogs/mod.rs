//! The two POSSUM score catalogs, built once on first use.

mod operative;
mod physiological;

pub use operative::operative;
pub use physiological::physiological;
