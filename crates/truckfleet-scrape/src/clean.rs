//! Text cleanup for scraped brand and company names

use regex::Regex;
use truckfleet_types::{Error, Result};

/// Qualifiers that leak into link titles and list text
const STRIP_PATTERNS: [&str; 3] = [
    r" \(.*\b(?:motor[cyles]+|lorry|truck[s]+|vehicle[s]+|automobile[s]+|manufacturer)\b.*\)",
    r" \(.*\b(?:UK|Russia|Warrington|Turkey|Germany|France|Serbia|Czech)\b.*\)",
    r" \(page does not exist\)",
];

/// Text nodes between a brand link and its country that carry no data
const FILLER: [&str; 3] = ["  (", " (", ")"];

pub struct CleaningRules {
    patterns: Vec<Regex>,
}

impl CleaningRules {
    pub fn standard() -> Result<Self> {
        Self::from_patterns(&STRIP_PATTERNS)
    }

    pub fn from_patterns(patterns: &[&str]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| Regex::new(p).map_err(|e| Error::InvalidPattern(e.to_string())))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Apply every pattern in order
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for re in &self.patterns {
            out = re.replace_all(&out, "").into_owned();
        }
        out
    }
}

pub fn is_filler(text: &str) -> bool {
    FILLER.contains(&text)
}
