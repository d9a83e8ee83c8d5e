//! The shared category bijection.
//!
//! Name, ID prefix, filename, and ledger display name for every category
//! live in one injected table. The identifier allocator, the ledger
//! reconciler, and the misconception scan all resolve categories through
//! the same instance; duplicated literal tables are how spellings drift.

use serde::{Deserialize, Serialize};

/// One category's fixed identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpec {
    /// Canonical machine name used in drafts and CLI arguments ("Animals").
    pub name: String,
    /// Short token used in question IDs ("anim" -> `anim_001`).
    pub prefix: String,
    /// On-disk document filename ("animals.json").
    pub filename: String,
    /// Display name, also the ledger section heading ("Animal Behavior").
    pub display_name: String,
}

/// The full category table. Invariant: name, prefix, filename, and
/// display name are each unique across the table (a bijection).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTable {
    pub categories: Vec<CategorySpec>,
}

impl CategoryTable {
    /// Parse a table from TOML, e.g. an operator-provided override file.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn get(&self, name: &str) -> Option<&CategorySpec> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn by_display_name(&self, display_name: &str) -> Option<&CategorySpec> {
        self.categories
            .iter()
            .find(|c| c.display_name == display_name)
    }

    pub fn by_filename(&self, filename: &str) -> Option<&CategorySpec> {
        self.categories.iter().find(|c| c.filename == filename)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        let spec = |name: &str, prefix: &str, filename: &str, display: &str| CategorySpec {
            name: name.to_string(),
            prefix: prefix.to_string(),
            filename: filename.to_string(),
            display_name: display.to_string(),
        };
        Self {
            categories: vec![
                spec("Animals", "anim", "animals.json", "Animal Behavior"),
                spec("Astronomy", "astro", "astronomy.json", "Astronomy & Space"),
                spec("Chemistry", "chem", "chemistry.json", "Chemistry Around Us"),
                spec("Economics", "econ", "economics.json", "Economics & Money"),
                spec("Human Biology", "bio", "human-biology.json", "Human Biology"),
                spec("Physics", "phys", "physics.json", "Physics in Daily Life"),
                spec("Plants", "plant", "plants.json", "Plant Science"),
                spec(
                    "Psychology",
                    "psych",
                    "psychology.json",
                    "Psychology & Behavior",
                ),
                spec("Technology", "tech", "technology.json", "Technology"),
                spec("Weather", "weather", "weather.json", "Weather & Climate"),
                spec(
                    "Food & Nutrition",
                    "food",
                    "food-nutrition.json",
                    "Food & Nutrition",
                ),
                spec("Earth Science", "earth", "earth-science.json", "Earth Science"),
                spec("Marine Life", "marine", "marine-life.json", "Marine Life"),
                spec("Insects", "insect", "insects.json", "Insects"),
                spec(
                    "Household Science",
                    "house",
                    "household-science.json",
                    "Household Science",
                ),
                spec(
                    "Sports & Exercise",
                    "sport",
                    "sports-exercise.json",
                    "Sports & Exercise",
                ),
                spec(
                    "Health & Medicine",
                    "health",
                    "health-medicine.json",
                    "Health & Medicine",
                ),
                spec("Music & Sound", "music", "music-sound.json", "Music & Sound"),
                spec(
                    "Transportation",
                    "transport",
                    "transportation.json",
                    "Transportation",
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_table_is_bijective() {
        let table = CategoryTable::default();
        let n = table.categories.len();
        let names: HashSet<_> = table.categories.iter().map(|c| &c.name).collect();
        let prefixes: HashSet<_> = table.categories.iter().map(|c| &c.prefix).collect();
        let files: HashSet<_> = table.categories.iter().map(|c| &c.filename).collect();
        let displays: HashSet<_> = table.categories.iter().map(|c| &c.display_name).collect();
        assert_eq!(names.len(), n);
        assert_eq!(prefixes.len(), n);
        assert_eq!(files.len(), n);
        assert_eq!(displays.len(), n);
    }

    #[test]
    fn lookup_by_each_key() {
        let table = CategoryTable::default();
        assert_eq!(table.get("Animals").unwrap().prefix, "anim");
        assert_eq!(
            table.by_display_name("Astronomy & Space").unwrap().name,
            "Astronomy"
        );
        assert_eq!(table.by_filename("physics.json").unwrap().prefix, "phys");
        assert!(table.get("Geology").is_none());
    }

    #[test]
    fn parses_from_toml() {
        let text = r#"
            [[categories]]
            name = "Animals"
            prefix = "anim"
            filename = "animals.json"
            display_name = "Animal Behavior"
        "#;
        let table = CategoryTable::from_toml(text).unwrap();
        assert_eq!(table.categories.len(), 1);
        assert_eq!(table.get("Animals").unwrap().display_name, "Animal Behavior");
    }
}
