//! Per-category preferred verification sources.
//!
//! Data, not code: the table annotates evidence reports with where a human
//! reviewer should look, keyed by category display name.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceGroup {
    pub category: String,
    pub sources: Vec<String>,
}

/// Category-keyed preferred source domains.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceTable {
    pub entries: Vec<SourceGroup>,
}

impl SourceTable {
    /// Preferred sources for a category display name; empty when none are
    /// registered.
    pub fn for_category(&self, display_name: &str) -> &[String] {
        self.entries
            .iter()
            .find(|g| g.category == display_name)
            .map(|g| g.sources.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for SourceTable {
    fn default() -> Self {
        let group = |category: &str, sources: &[&str]| SourceGroup {
            category: category.to_string(),
            sources: sources.iter().map(|s| s.to_string()).collect(),
        };
        Self {
            entries: vec![
                group("Astronomy & Space", &["nasa.gov", "wikipedia"]),
                group("Animal Behavior", &["wikipedia", "nationalgeographic"]),
                group("Chemistry Around Us", &["wikipedia", "sciencedirect"]),
                group("Earth Science", &["wikipedia", "usgs.gov"]),
                group("Human Biology", &["nih.gov", "wikipedia", "mayoclinic"]),
                group(
                    "Health & Medicine",
                    &["nih.gov", "cdc.gov", "mayoclinic", "wikipedia"],
                ),
                group("Physics in Daily Life", &["wikipedia", "physics.org"]),
                group("Plant Science", &["wikipedia", "britannica"]),
                group("Weather & Climate", &["wikipedia", "noaa.gov"]),
                group("Technology", &["wikipedia"]),
                group("Psychology & Behavior", &["wikipedia", "apa.org"]),
                group("Food & Nutrition", &["nih.gov", "wikipedia"]),
                group("Economics & Money", &["wikipedia", "investopedia"]),
                group("Marine Life", &["wikipedia", "noaa.gov"]),
                group("Insects", &["wikipedia"]),
                group("Household Science", &["wikipedia"]),
                group("Sports & Exercise", &["wikipedia", "nih.gov"]),
                group("Music & Sound", &["wikipedia"]),
                group("Transportation", &["wikipedia"]),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_category_lists_its_sources() {
        let table = SourceTable::default();
        let sources = table.for_category("Astronomy & Space");
        assert_eq!(sources, ["nasa.gov", "wikipedia"]);
    }

    #[test]
    fn unknown_category_has_no_sources() {
        let table = SourceTable::default();
        assert!(table.for_category("Cryptozoology").is_empty());
    }
}
