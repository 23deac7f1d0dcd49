//! Severity Catalog

use serde::{Deserialize, Serialize};
use std::fmt;

/// Known severity levels and the weight each contributes to a priority score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Critical,
    Warning,
    Info,
}

impl SeverityLevel {
    /// Every level in the catalog
    pub const ALL: [SeverityLevel; 3] = [
        SeverityLevel::Critical,
        SeverityLevel::Warning,
        SeverityLevel::Info,
    ];

    /// Stable lowercase label
    pub fn label(self) -> &'static str {
        match self {
            SeverityLevel::Critical => "critical",
            SeverityLevel::Warning => "warning",
            SeverityLevel::Info => "info",
        }
    }

    /// Scoring weight
    pub fn weight(self) -> u32 {
        match self {
            SeverityLevel::Critical => 10,
            SeverityLevel::Warning => 5,
            SeverityLevel::Info => 1,
        }
    }

    /// Look up a level by its exact (case-sensitive) label.
    ///
    /// Unknown labels are not an error; they simply have no level.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.label() == label)
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_weights() {
        assert_eq!(SeverityLevel::Critical.weight(), 10);
        assert_eq!(SeverityLevel::Warning.weight(), 5);
        assert_eq!(SeverityLevel::Info.weight(), 1);
    }

    #[test]
    fn test_labels_unique() {
        let labels: HashSet<_> = SeverityLevel::ALL.iter().map(|l| l.label()).collect();
        assert_eq!(labels.len(), SeverityLevel::ALL.len());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(SeverityLevel::from_label("warning"), Some(SeverityLevel::Warning));
        assert_eq!(SeverityLevel::from_label("WARNING"), None);
        assert_eq!(SeverityLevel::from_label("emergency"), None);
    }
}
