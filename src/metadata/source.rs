use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

use super::{Alias, AliasKind, Aliased};
use crate::record::RecordError;

/// A literature or data source a cross-section was taken from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Source {
    /// Row identity
    pub id: Option<i64>,
    /// Source type, e.g. "article"
    #[serde(rename = "type")]
    pub source_type: Option<String>,
    /// Comma-separated author list
    pub authors: Option<String>,
    /// Title
    pub title: Option<String>,
    /// Journal name
    pub journal: Option<String>,
    /// Journal volume
    pub volume: Option<String>,
    /// First page
    pub page_start: Option<String>,
    /// Last page
    pub page_end: Option<String>,
    /// Publication year
    pub year: Option<i32>,
    /// Publishing institution
    pub institution: Option<String>,
    /// Free-text note
    pub note: Option<String>,
    /// DOI
    pub doi: Option<String>,
    /// ADS bibcode
    pub bibcode: Option<String>,
    /// URL
    pub url: Option<String>,
    /// Short alias, used as the natural key
    pub short_alias: String,
    /// Alternative names
    #[serde(default)]
    pub aliases: Vec<Alias>,
}

impl Source {
    /// Create a source with the given short alias
    pub fn new(short_alias: &str) -> Self {
        Self {
            short_alias: short_alias.to_string(),
            ..Default::default()
        }
    }

    /// One-line summary: authors, title, journal and year
    ///
    /// Authors and title are cut to 35 characters.
    pub fn display(&self) -> String {
        format!(
            "{} // {} // {} // {}",
            truncated(self.authors.as_deref(), 35),
            truncated(self.title.as_deref(), 35),
            self.journal.as_deref().unwrap_or("None"),
            self.year.map_or_else(|| "None".to_string(), |y| y.to_string())
        )
    }

    /// Full citation string
    ///
    /// Missing fields are skipped, e.g.
    /// `"Smith J, Doe A. Title. J Quant Spectrosc 2020;100:1-10. doi:10.1/x. "`.
    pub fn citation(&self) -> String {
        let mut buf = String::new();
        // Writing into a String cannot fail
        if let Some(authors) = non_empty(&self.authors) {
            let _ = write!(buf, "{}. ", authors);
        }
        if let Some(title) = non_empty(&self.title) {
            let _ = write!(buf, "{}. ", title);
        }
        if let Some(journal) = non_empty(&self.journal) {
            let _ = write!(buf, "{} ", journal);
        }
        if let Some(year) = self.year {
            let _ = write!(buf, "{};", year);
        }
        if let Some(volume) = non_empty(&self.volume) {
            let _ = write!(buf, "{}:", volume);
        }
        if let Some(page_start) = non_empty(&self.page_start) {
            buf.push_str(page_start);
        }
        if let Some(page_end) = non_empty(&self.page_end) {
            let _ = write!(buf, "-{}. ", page_end);
        }
        if let Some(doi) = non_empty(&self.doi) {
            let _ = write!(buf, "doi:{}. ", doi);
        }
        buf
    }

    /// Short form such as `"Article 12: Smith et al. (2020)"`
    pub fn short_citation(&self) -> String {
        let kind = capitalize(self.source_type.as_deref().unwrap_or("source"));
        let mut result = match self.id {
            Some(id) => format!("{} {}", kind, id),
            None => kind,
        };

        if let Some(authors) = non_empty(&self.authors) {
            let mut split = authors.split(',');
            if let Some(first) = split.next() {
                let _ = write!(result, ": {}", first.trim());
            }
            if split.next().is_some() {
                result.push_str(" et al.");
            }
        }
        if let Some(year) = self.year {
            let _ = write!(result, " ({})", year);
        }
        result
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

impl Aliased for Source {
    fn name(&self) -> &str {
        &self.short_alias
    }

    fn aliases(&self) -> &[Alias] {
        &self.aliases
    }

    fn from_alias(name: &str) -> Self {
        let mut source = Self::new(name);
        source.aliases.push(Alias::with_kind(name, AliasKind::Generic));
        source
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_alias)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn truncated(value: Option<&str>, max_chars: usize) -> String {
    match value {
        Some(s) => s.chars().take(max_chars).collect(),
        None => "None".to_string(),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
