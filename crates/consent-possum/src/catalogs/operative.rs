use std::sync::LazyLock;

use crate::scoring::{Catalog, CatalogKind, Variable};

/// Operative score tables: 6 surgery-characteristic variables.
pub fn operative() -> &'static Catalog {
    static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
        Catalog::new(
            CatalogKind::Operative,
            vec![
                Variable::new(
                    "operative_severity",
                    "Operative severity",
                    &[("Minor", 1), ("Intermediate", 2), ("Major", 4), ("Major+", 8)],
                ),
                Variable::new(
                    "multiple_procedures",
                    "Multiple procedures",
                    &[
                        ("No", 1),
                        ("Yes, 2 procedures", 2),
                        ("Yes, major procedure", 4),
                        ("Yes, >1 major procedure", 8),
                    ],
                ),
                Variable::new(
                    "blood_loss",
                    "Total blood loss (ml)",
                    &[("< 100", 1), ("100-500", 2), ("501-999", 4), ("≥ 1000", 8)],
                ),
                Variable::new(
                    "peritoneal_soiling",
                    "Peritoneal soiling",
                    &[
                        ("None", 1),
                        ("Minor (serous fluid)", 2),
                        ("Local pus", 4),
                        ("Free pus or blood or feces", 8),
                    ],
                ),
                Variable::new(
                    "malignancy",
                    "Presence of malignancy",
                    &[
                        ("None", 1),
                        ("Primary only", 2),
                        ("Nodal mets", 4),
                        ("Distant mets", 8),
                    ],
                ),
                Variable::new(
                    "timing",
                    "Timing of surgery",
                    &[
                        ("Elective", 1),
                        ("Emergency (within 24h)", 2),
                        ("Emergency (within 6h)", 4),
                        ("Emergency (immediate)", 8),
                    ],
                ),
            ],
        )
    });
    &CATALOG
}
