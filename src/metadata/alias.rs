use std::fmt;

use serde::{Deserialize, Serialize};

/// What kind of name an alias is
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AliasKind {
    /// Any name without a more specific meaning
    #[default]
    Generic,
    /// Short acronym, e.g. "CFC-11"
    Acronym,
    /// CAS registry number
    Cas,
    /// Any other tag used by the database
    #[serde(untagged)]
    Other(String),
}

/// An alternative natural-key name for a molecule, source or isotopologue
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Alias {
    /// Row identity
    pub id: Option<i64>,
    /// The alias string
    pub alias: String,
    /// Alias kind
    #[serde(rename = "type", default)]
    pub kind: AliasKind,
}

impl Alias {
    /// Create a generic alias
    pub fn new(alias: &str) -> Self {
        Self::with_kind(alias, AliasKind::Generic)
    }

    /// Create an alias of the given kind
    pub fn with_kind(alias: &str, kind: AliasKind) -> Self {
        Self {
            id: None,
            alias: alias.to_string(),
            kind,
        }
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.alias)
    }
}
