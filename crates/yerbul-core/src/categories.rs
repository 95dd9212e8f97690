//! The fixed set of searchable point-of-interest categories.
//!
//! Declaration order is significant: it is the menu display order.

use crate::error::{Result, YerbulError};

/// Pin glyph used when a category has no dedicated glyph. Unreachable
/// through the normal flow, where input is validated against the fixed set.
pub const DEFAULT_GLYPH: &str = "📍";

/// One searchable category: the menu label (also the lookup key), the
/// Geoapify category code, and the glyph shown next to each result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDefinition {
    pub display_name: &'static str,
    pub provider_code: &'static str,
    pub glyph: &'static str,
}

static CATEGORIES: [CategoryDefinition; 7] = [
    CategoryDefinition {
        display_name: "Hastaneler",
        provider_code: "healthcare.hospital",
        glyph: "🏥",
    },
    CategoryDefinition {
        display_name: "Okullar",
        provider_code: "education.school",
        glyph: "🏫",
    },
    CategoryDefinition {
        display_name: "AVM",
        provider_code: "commercial.shopping_mall",
        glyph: "🛍️",
    },
    CategoryDefinition {
        display_name: "Restoranlar",
        provider_code: "catering.restaurant",
        glyph: "🍽️",
    },
    CategoryDefinition {
        display_name: "Camiler",
        provider_code: "religion.place_of_worship",
        glyph: "🕌",
    },
    CategoryDefinition {
        display_name: "Benzin İstasyonları",
        provider_code: "service.vehicle.fuel",
        glyph: "⛽",
    },
    CategoryDefinition {
        display_name: "Oteller",
        provider_code: "accommodation.hotel",
        glyph: "🏨",
    },
];

/// Lookup over the fixed category set.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryRegistry;

impl CategoryRegistry {
    pub fn new() -> Self {
        Self
    }

    /// All categories in display order.
    pub fn all(&self) -> &'static [CategoryDefinition] {
        &CATEGORIES
    }

    /// Menu labels in display order.
    pub fn display_names(&self) -> Vec<String> {
        CATEGORIES.iter().map(|c| c.display_name.to_string()).collect()
    }

    pub fn lookup(&self, display_name: &str) -> Result<&'static CategoryDefinition> {
        CATEGORIES
            .iter()
            .find(|c| c.display_name == display_name)
            .ok_or_else(|| YerbulError::UnknownCategory {
                name: display_name.to_string(),
            })
    }

    pub fn contains(&self, display_name: &str) -> bool {
        CATEGORIES.iter().any(|c| c.display_name == display_name)
    }

    /// Glyph for a label, falling back to [`DEFAULT_GLYPH`].
    pub fn glyph(&self, display_name: &str) -> &'static str {
        self.lookup(display_name).map(|c| c.glyph).unwrap_or(DEFAULT_GLYPH)
    }
}
