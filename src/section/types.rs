//! Section identifiers and the fixed dashboard menu

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::SectionError;

/// One of the six presentation panels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Recommendations,
    Overview,
    Insurance,
    Demographics,
    Regional,
    Prevalence,
}

impl SectionId {
    /// All sections in menu order
    pub const ALL: [SectionId; 6] = [
        SectionId::Recommendations,
        SectionId::Overview,
        SectionId::Insurance,
        SectionId::Demographics,
        SectionId::Regional,
        SectionId::Prevalence,
    ];

    /// Section shown when nothing else has been selected
    pub const DEFAULT: SectionId = SectionId::Overview;

    pub const fn as_str(&self) -> &'static str {
        match self {
            SectionId::Recommendations => "recommendations",
            SectionId::Overview => "overview",
            SectionId::Insurance => "insurance",
            SectionId::Demographics => "demographics",
            SectionId::Regional => "regional",
            SectionId::Prevalence => "prevalence",
        }
    }

    /// Menu label for the section's control
    pub const fn label(&self) -> &'static str {
        match self {
            SectionId::Recommendations => "Final Recommendations",
            SectionId::Overview => "Dataset Overview",
            SectionId::Insurance => "Insurance Factors",
            SectionId::Demographics => "Demographic Factors",
            SectionId::Regional => "Regional Factors",
            SectionId::Prevalence => "BP Screening Prevalence",
        }
    }

    pub const fn section(&self) -> Section {
        Section {
            id: *self,
            label: self.label(),
        }
    }
}

impl Default for SectionId {
    fn default() -> Self {
        SectionId::DEFAULT
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| SectionError::Unknown(s.to_string()))
    }
}

/// A menu entry: section id plus its display label
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub label: &'static str,
}

/// The ordered dashboard menu
pub const SECTIONS: [Section; 6] = menu();

const fn menu() -> [Section; 6] {
    let mut sections = [SectionId::DEFAULT.section(); 6];
    let mut i = 0;
    while i < SectionId::ALL.len() {
        sections[i] = SectionId::ALL[i].section();
        i += 1;
    }
    sections
}
