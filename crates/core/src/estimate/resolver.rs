//! Maps free-text event names to ceremony templates.
//!
//! Matching is a best-effort keyword heuristic. The keyword table is walked
//! in order and the first hit wins, so reordering entries changes results.

use crate::pricing::CeremonyCatalog;

/// Reserved ceremony id for receptions.
pub const RECEPTION_ID: &str = "reception";

/// Ordered `(ceremony id, keywords)` pairs.
pub const KEYWORD_TABLE: &[(&str, &[&str])] = &[
    ("haldi", &["haldi", "pithi", "mayian", "maiyan"]),
    ("mehndi", &["mehndi", "mehendi", "henna"]),
    ("sangeet", &["sangeet", "sangeeth", "garba", "dandiya", "raas"]),
    ("baraat", &["baraat", "barat"]),
    (
        "engagement",
        &["engagement", "roka", "sagai", "mangni", "ring ceremony"],
    ),
    ("nikah", &["nikah", "nikkah"]),
    ("walima", &["walima", "valima"]),
    ("anand_karaj", &["anand karaj", "anand kaaraj", "gurdwara"]),
    (
        "wedding_ceremony",
        &[
            "wedding ceremony",
            "pheras",
            "phere",
            "shaadi",
            "vivah",
            "ceremony",
        ],
    ),
];

/// Resolves events to ceremony template ids.
#[derive(Debug, Clone, Copy)]
pub struct CeremonyResolver {
    table: &'static [(&'static str, &'static [&'static str])],
}

impl Default for CeremonyResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CeremonyResolver {
    /// Creates a resolver over the built-in keyword table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            table: KEYWORD_TABLE,
        }
    }

    /// Creates a resolver over a custom keyword table.
    #[must_use]
    pub const fn with_table(table: &'static [(&'static str, &'static [&'static str])]) -> Self {
        Self { table }
    }

    /// Resolves an event to a ceremony id.
    ///
    /// Order of precedence:
    /// 1. First keyword-table entry whose keyword appears in the name
    /// 2. [`RECEPTION_ID`] when the name mentions "reception"
    /// 3. The literal event type, if the catalog has a breakdown for it
    ///
    /// Returns `None` when nothing matches; callers fall back to a generic
    /// per-guest estimate.
    #[must_use]
    pub fn resolve(
        &self,
        name: &str,
        event_type: Option<&str>,
        catalog: &CeremonyCatalog,
    ) -> Option<String> {
        let normalized = name.trim().to_lowercase();

        if !normalized.is_empty() {
            for (ceremony_id, keywords) in self.table {
                if keywords.iter().any(|k| normalized.contains(k)) {
                    return Some((*ceremony_id).to_string());
                }
            }

            if normalized.contains("reception") {
                return Some(RECEPTION_ID.to_string());
            }
        }

        event_type
            .filter(|t| catalog.has_breakdown(t))
            .map(str::to_string)
    }
}
