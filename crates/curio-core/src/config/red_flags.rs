//! Lexical red-flag tables.
//!
//! Both tables are data, not code: new tokens, categories, and
//! misconceptions are added through configuration without touching the
//! checkers. Matching is heuristic keyword scanning over explanation text,
//! not proof of inaccuracy.

use serde::{Deserialize, Serialize};

/// One overgeneralization token and its canned corrective note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedFlag {
    pub token: String,
    pub note: String,
}

/// Tokens statistically associated with oversimplified scientific claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedFlagTable {
    pub flags: Vec<RedFlag>,
}

impl RedFlagTable {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

impl Default for RedFlagTable {
    fn default() -> Self {
        let flag = |token: &str, note: &str| RedFlag {
            token: token.to_string(),
            note: note.to_string(),
        };
        Self {
            flags: vec![
                flag(
                    "always",
                    "Absolute statements like \"always\" are often oversimplifications",
                ),
                flag(
                    "never",
                    "Absolute statements like \"never\" may not be accurate",
                ),
                flag("all ", "Be careful with universal claims (\"all X do Y\")"),
                flag("100%", "Absolute percentages are rarely accurate in science"),
                flag(
                    "proven",
                    "Science uses \"evidence supports\" rather than \"proven\"",
                ),
            ],
        }
    }
}

/// A known misconception phrase within one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Misconception {
    pub phrase: String,
    pub note: String,
}

/// Category-keyed misconception phrases. Keys are category display names,
/// matching the `category_en` field of corpus documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MisconceptionTable {
    pub entries: Vec<MisconceptionGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MisconceptionGroup {
    pub category: String,
    pub misconceptions: Vec<Misconception>,
}

impl MisconceptionTable {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Misconceptions registered for a category display name, if any.
    pub fn for_category(&self, display_name: &str) -> &[Misconception] {
        self.entries
            .iter()
            .find(|g| g.category == display_name)
            .map(|g| g.misconceptions.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for MisconceptionTable {
    fn default() -> Self {
        let m = |phrase: &str, note: &str| Misconception {
            phrase: phrase.to_string(),
            note: note.to_string(),
        };
        Self {
            entries: vec![
                MisconceptionGroup {
                    category: "Chemistry Around Us".to_string(),
                    misconceptions: vec![
                        m(
                            "soap kills",
                            "Soap removes germs; antibacterial soap is needed to kill them",
                        ),
                        m(
                            "heavier objects fall faster",
                            "All objects fall at the same rate in vacuum",
                        ),
                    ],
                },
                MisconceptionGroup {
                    category: "Physics in Daily Life".to_string(),
                    misconceptions: vec![
                        m(
                            "heavier objects fall faster",
                            "Galileo showed this is wrong; air resistance varies",
                        ),
                        m("cold is a thing", "Cold is absence of heat, not a substance"),
                    ],
                },
                MisconceptionGroup {
                    category: "Astronomy & Space".to_string(),
                    misconceptions: vec![
                        m(
                            "dark side of the moon",
                            "It's the \"far side\"; it gets sunlight too",
                        ),
                        m(
                            "summer because closer to sun",
                            "Earth's tilt causes seasons, not distance",
                        ),
                    ],
                },
                MisconceptionGroup {
                    category: "Human Biology".to_string(),
                    misconceptions: vec![
                        m("we only use 10%", "Myth; we use all parts of our brain"),
                        m(
                            "sugar makes hyperactive",
                            "Studies show this is largely a myth",
                        ),
                    ],
                },
            ],
        }
    }
}
