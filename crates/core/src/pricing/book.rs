//! Immutable pricing snapshot used by one calculation pass.

use serde::{Deserialize, Serialize};

use super::catalog::CeremonyCatalog;
use super::error::PricingError;
use super::multipliers::MultiplierTable;

/// Multiplier tables and ceremony catalog as of one point in time.
///
/// A calculation reads everything it needs from a single book and never
/// observes a table update halfway through. Updates produce a new book with
/// a higher `revision`, which also invalidates memoized summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingBook {
    /// Monotonic revision number, bumped on every update.
    pub revision: u64,
    /// Multiplier tables.
    pub tables: MultiplierTable,
    /// Ceremony templates.
    pub catalog: CeremonyCatalog,
}

impl Default for PricingBook {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PricingBook {
    /// The built-in tables and catalog at revision 1.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            revision: 1,
            tables: MultiplierTable::builtin(),
            catalog: CeremonyCatalog::builtin(),
        }
    }

    /// Creates a validated book.
    ///
    /// # Errors
    ///
    /// Returns a `PricingError` if the tables or catalog fail validation.
    pub fn new(
        revision: u64,
        tables: MultiplierTable,
        catalog: CeremonyCatalog,
    ) -> Result<Self, PricingError> {
        tables.validate()?;
        catalog.validate()?;
        Ok(Self {
            revision,
            tables,
            catalog,
        })
    }

    /// Returns the next revision with the catalog replaced.
    ///
    /// # Errors
    ///
    /// Returns a `PricingError` if the catalog fails validation.
    pub fn with_catalog(&self, catalog: CeremonyCatalog) -> Result<Self, PricingError> {
        Self::new(self.revision + 1, self.tables.clone(), catalog)
    }

    /// Returns the next revision with the multiplier tables replaced.
    ///
    /// # Errors
    ///
    /// Returns a `PricingError` if the tables fail validation.
    pub fn with_tables(&self, tables: MultiplierTable) -> Result<Self, PricingError> {
        Self::new(self.revision + 1, tables, self.catalog.clone())
    }
}
