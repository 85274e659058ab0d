use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Alias, AliasKind, Aliased};
use crate::record::RecordError;

/// A molecule and its alternative names
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Molecule {
    /// Row identity
    pub id: Option<i64>,
    /// Common name, used as the natural key
    pub common_name: String,
    /// Formula as usually written, e.g. "CH3Cl"
    pub ordinary_formula: Option<String>,
    /// Formula with HTML subscripts
    pub ordinary_formula_html: Option<String>,
    /// Stoichiometric formula, e.g. "C1H3Cl1"
    pub stoichiometric_formula: Option<String>,
    /// IUPAC InChI
    pub inchi: Option<String>,
    /// Hashed InChI key
    pub inchikey: Option<String>,
    /// Alternative names
    #[serde(default)]
    pub aliases: Vec<Alias>,
}

impl Molecule {
    /// Create a molecule with the given common name
    pub fn new(common_name: &str) -> Self {
        Self {
            common_name: common_name.to_string(),
            ..Default::default()
        }
    }

    /// Add an alias of the given kind
    pub fn with_alias(mut self, alias: &str, kind: AliasKind) -> Self {
        self.aliases.push(Alias::with_kind(alias, kind));
        self
    }

    /// First alias tagged as an acronym
    pub fn acronym(&self) -> Option<&Alias> {
        self.aliases.iter().find(|a| a.kind == AliasKind::Acronym)
    }

    /// First alias tagged as a CAS number
    pub fn cas(&self) -> Option<&Alias> {
        self.aliases.iter().find(|a| a.kind == AliasKind::Cas)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Aliased for Molecule {
    fn name(&self) -> &str {
        &self.common_name
    }

    fn aliases(&self) -> &[Alias] {
        &self.aliases
    }

    fn from_alias(name: &str) -> Self {
        Self::new(name).with_alias(name, AliasKind::Generic)
    }
}

impl fmt::Display for Molecule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.common_name)
    }
}
