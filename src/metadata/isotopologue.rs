use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Alias, AliasKind, Aliased};

/// A single isotopic variant of a molecule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Isotopologue {
    /// Row identity
    pub id: Option<i64>,
    /// Foreign key of the parent molecule's alias
    pub molecule_alias_id: Option<i64>,
    /// Local isotopologue number within the molecule
    pub isoid: Option<i64>,
    /// IUPAC InChI
    pub inchi: Option<String>,
    /// Hashed InChI key
    pub inchikey: Option<String>,
    /// Isotopologue name, used as the natural key (e.g. "(12C)(16O)2")
    pub iso_name: String,
    /// Name with HTML superscripts
    pub iso_name_html: Option<String>,
    /// Natural terrestrial abundance
    pub abundance: Option<f64>,
    /// Molar mass (g/mol)
    pub mass: Option<f64>,
    /// AFGL code
    pub afgl_code: Option<String>,
    /// Alternative names
    #[serde(default)]
    pub aliases: Vec<Alias>,
}

impl Isotopologue {
    /// Create an isotopologue with the given name
    pub fn new(iso_name: &str) -> Self {
        Self {
            iso_name: iso_name.to_string(),
            ..Default::default()
        }
    }
}

impl Aliased for Isotopologue {
    fn name(&self) -> &str {
        &self.iso_name
    }

    fn aliases(&self) -> &[Alias] {
        &self.aliases
    }

    fn from_alias(name: &str) -> Self {
        let mut iso = Self::new(name);
        iso.aliases.push(Alias::with_kind(name, AliasKind::Generic));
        iso
    }
}

impl fmt::Display for Isotopologue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso_name)
    }
}
