//! Ceremony template catalog.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::error::PricingError;
use super::types::{CeremonyTemplate, CostUnit, LineItem};

static BUILTIN: Lazy<CeremonyCatalog> = Lazy::new(|| CeremonyCatalog {
    templates: builtin_templates(),
    default_line_items: Vec::new(),
});

fn item(category: &str, unit: CostUnit, low: i64, high: i64) -> LineItem {
    LineItem::new(category, unit, Decimal::from(low), Decimal::from(high))
}

fn template(
    id: &str,
    name: &str,
    tradition: &str,
    default_guest_count: u32,
    line_items: Vec<LineItem>,
) -> CeremonyTemplate {
    CeremonyTemplate {
        id: id.to_string(),
        name: name.to_string(),
        tradition: tradition.to_string(),
        default_guest_count,
        line_items,
    }
}

#[allow(clippy::too_many_lines)]
fn builtin_templates() -> Vec<CeremonyTemplate> {
    use CostUnit::{Fixed, PerHour, PerPerson};

    vec![
        template(
            "haldi",
            "Haldi",
            "hindu",
            60,
            vec![
                item("Decor", Fixed, 800, 2_000),
                item("Catering", PerPerson, 25, 45),
                item("Photography", PerHour, 150, 300).with_hours(2, 3),
                item("Turmeric & Supplies", Fixed, 100, 250),
            ],
        ),
        template(
            "mehndi",
            "Mehndi",
            "south_asian",
            100,
            vec![
                item("Henna Artists", PerHour, 100, 200)
                    .with_hours(3, 5)
                    .with_notes("Plan one artist per 25 guests"),
                item("Decor", Fixed, 1_500, 4_000),
                item("Catering", PerPerson, 30, 55),
                item("DJ", PerHour, 150, 350),
            ],
        ),
        template(
            "sangeet",
            "Sangeet",
            "south_asian",
            200,
            vec![
                item("Venue", Fixed, 3_000, 8_000),
                item("Catering", PerPerson, 45, 85),
                item("DJ & Sound", PerHour, 200, 450).with_hours(4, 6),
                item("Choreographer", Fixed, 800, 2_500),
                item("Decor", Fixed, 2_500, 7_000),
            ],
        ),
        template(
            "baraat",
            "Baraat",
            "hindu",
            150,
            vec![
                item("Horse or Car", Fixed, 800, 2_500),
                item("Dhol Players", PerHour, 150, 300).with_hours(2, 3),
                item("Mobile Sound System", Fixed, 500, 1_200),
            ],
        ),
        template(
            "engagement",
            "Engagement",
            "south_asian",
            80,
            vec![
                item("Venue", Fixed, 1_000, 3_500),
                item("Catering", PerPerson, 35, 65),
                item("Photography", PerHour, 150, 300),
                item("Decor", Fixed, 700, 2_000),
            ],
        ),
        template(
            "nikah",
            "Nikah",
            "muslim",
            150,
            vec![
                item("Officiant", Fixed, 300, 800),
                item("Venue", Fixed, 1_500, 5_000),
                item("Catering", PerPerson, 35, 70),
                item("Decor", Fixed, 1_500, 4_500),
                item("Photography", PerHour, 200, 400),
            ],
        ),
        template(
            "walima",
            "Walima",
            "muslim",
            250,
            vec![
                item("Venue", Fixed, 4_000, 12_000),
                item("Catering", PerPerson, 50, 95),
                item("Decor", Fixed, 3_000, 9_000),
                item("Photography", PerHour, 250, 450).with_hours(4, 5),
            ],
        ),
        template(
            "anand_karaj",
            "Anand Karaj",
            "sikh",
            200,
            vec![
                item("Gurdwara Donation", Fixed, 500, 2_000),
                item("Langar Catering", PerPerson, 15, 30),
                item("Ragi Jatha", Fixed, 300, 900),
                item("Photography", PerHour, 200, 400).with_hours(3, 5),
            ],
        ),
        template(
            "wedding_ceremony",
            "Wedding Ceremony",
            "hindu",
            250,
            vec![
                item("Mandap", Fixed, 3_000, 10_000),
                item("Officiant", Fixed, 500, 1_500),
                item("Catering", PerPerson, 40, 75),
                item("Photography", PerHour, 250, 500).with_hours(6, 8),
                item("Florals", Fixed, 2_000, 6_000),
            ],
        ),
        template(
            "reception",
            "Reception",
            "south_asian",
            300,
            vec![
                item("Venue", Fixed, 5_000, 15_000),
                item("Catering", PerPerson, 65, 120),
                item("Bar Service", PerPerson, 20, 45),
                item("DJ", PerHour, 250, 500).with_hours(5, 6),
                item("Decor", Fixed, 4_000, 12_000),
                item("Photography", PerHour, 250, 500).with_hours(5, 6),
            ],
        ),
    ]
}

/// Id used in validation errors for the default line items.
pub const DEFAULT_ITEMS_ID: &str = "default";

/// Ordered collection of ceremony templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CeremonyCatalog {
    /// Templates in catalog order.
    pub templates: Vec<CeremonyTemplate>,
    /// Line items priced for events without a template breakdown.
    ///
    /// Empty in the built-in catalog, in which case such events get the
    /// generic per-guest estimate.
    #[serde(default)]
    pub default_line_items: Vec<LineItem>,
}

impl Default for CeremonyCatalog {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

impl CeremonyCatalog {
    /// Returns the built-in catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Creates a catalog from templates without validating it.
    #[must_use]
    pub fn new(templates: Vec<CeremonyTemplate>) -> Self {
        Self {
            templates,
            default_line_items: Vec::new(),
        }
    }

    /// Sets the line items used for events without a breakdown.
    #[must_use]
    pub fn with_default_line_items(mut self, items: Vec<LineItem>) -> Self {
        self.default_line_items = items;
        self
    }

    /// Parses and validates a catalog from JSON.
    ///
    /// Accepts either `{"templates": [...], "default_line_items": [...]}` or
    /// a bare array of templates.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::Parse` for malformed JSON, or a validation error.
    pub fn from_json(json: &str) -> Result<Self, PricingError> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum CatalogJson {
            Wrapped(CeremonyCatalog),
            Bare(Vec<CeremonyTemplate>),
        }

        let catalog = match serde_json::from_str::<CatalogJson>(json)? {
            CatalogJson::Wrapped(catalog) => catalog,
            CatalogJson::Bare(templates) => Self::new(templates),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Looks up a template by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CeremonyTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Returns true if a template with this id exists and has line items.
    #[must_use]
    pub fn has_breakdown(&self, id: &str) -> bool {
        self.get(id).is_some_and(|t| !t.line_items.is_empty())
    }

    /// Validates ids are unique and every line item has a sane cost range.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found.
    pub fn validate(&self) -> Result<(), PricingError> {
        let mut seen = HashSet::new();

        for template in &self.templates {
            if !seen.insert(template.id.as_str()) {
                return Err(PricingError::DuplicateCeremony(template.id.clone()));
            }
            validate_line_items(&template.id, &template.line_items)?;
        }

        validate_line_items(DEFAULT_ITEMS_ID, &self.default_line_items)
    }
}

fn validate_line_items(ceremony_id: &str, items: &[LineItem]) -> Result<(), PricingError> {
    for line in items {
        let invalid = |reason: &str| PricingError::InvalidLineItem {
            ceremony_id: ceremony_id.to_string(),
            category: line.category.clone(),
            reason: reason.to_string(),
        };

        if line.low_cost < Decimal::ZERO || line.high_cost < Decimal::ZERO {
            return Err(invalid("costs must not be negative"));
        }
        if line.low_cost > line.high_cost {
            return Err(invalid("low cost exceeds high cost"));
        }
        let (hours_low, hours_high) = line.hours();
        if line.unit == CostUnit::PerHour && hours_low > hours_high {
            return Err(invalid("low hours exceed high hours"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = CeremonyCatalog::builtin();
        assert!(catalog.validate().is_ok());
        assert!(catalog.has_breakdown("reception"));
        assert!(catalog.has_breakdown("mehndi"));
        assert!(!catalog.has_breakdown("cocktail"));
    }

    #[test]
    fn test_has_breakdown_requires_line_items() {
        let catalog = CeremonyCatalog::new(vec![CeremonyTemplate {
            id: "tea_party".to_string(),
            name: "Tea Party".to_string(),
            tradition: "custom".to_string(),
            default_guest_count: 30,
            line_items: vec![],
        }]);
        assert!(catalog.get("tea_party").is_some());
        assert!(!catalog.has_breakdown("tea_party"));
    }

    #[test]
    fn test_from_json_accepts_wrapped_and_bare() {
        let bare = r#"[{"id":"x","name":"X","tradition":"t","default_guest_count":10,
            "line_items":[{"category":"Decor","unit":"fixed","low_cost":"100","high_cost":"200"}]}]"#;
        let catalog = CeremonyCatalog::from_json(bare).unwrap();
        assert_eq!(catalog.templates.len(), 1);
        assert_eq!(catalog.templates[0].line_items[0].high_cost, dec!(200));

        let wrapped = format!(r#"{{"templates": {bare}}}"#);
        assert_eq!(CeremonyCatalog::from_json(&wrapped).unwrap(), catalog);
    }

    #[test]
    fn test_from_json_rejects_inverted_range() {
        let json = r#"[{"id":"x","name":"X","tradition":"t","default_guest_count":10,
            "line_items":[{"category":"Decor","unit":"fixed","low_cost":"300","high_cost":"200"}]}]"#;
        assert!(matches!(
            CeremonyCatalog::from_json(json),
            Err(PricingError::InvalidLineItem { .. })
        ));
    }

    #[test]
    fn test_from_json_reads_default_line_items() {
        let json = r#"{"templates": [],
            "default_line_items": [{"category":"Catering","unit":"per_person","low_cost":"40","high_cost":"70"}]}"#;
        let catalog = CeremonyCatalog::from_json(json).unwrap();
        assert_eq!(catalog.default_line_items.len(), 1);
        assert_eq!(catalog.default_line_items[0].unit, CostUnit::PerPerson);

        let invalid = r#"{"templates": [],
            "default_line_items": [{"category":"Catering","unit":"per_person","low_cost":"-1","high_cost":"70"}]}"#;
        assert!(matches!(
            CeremonyCatalog::from_json(invalid),
            Err(PricingError::InvalidLineItem { ceremony_id, .. }) if ceremony_id == DEFAULT_ITEMS_ID
        ));
    }

    #[test]
    fn test_from_json_rejects_duplicates_and_garbage() {
        let json = r#"[{"id":"x","name":"X","tradition":"t","default_guest_count":10},
                       {"id":"x","name":"X2","tradition":"t","default_guest_count":10}]"#;
        assert!(matches!(
            CeremonyCatalog::from_json(json),
            Err(PricingError::DuplicateCeremony(id)) if id == "x"
        ));
        assert!(matches!(
            CeremonyCatalog::from_json("{not json"),
            Err(PricingError::Parse(_))
        ));
    }
}
