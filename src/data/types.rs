//! Record types for the survey dataset tables
//!
//! Every record is a literal, pre-aggregated value from the 2023 NHIS
//! analysis. Rates are percentages in `0.0..=100.0`; counts are numbers of
//! adults in the analytic sample.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::error::DataError;

/// Named dataset tables held by the registry
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DatasetId {
    /// Headline sample statistics and regional sample shares
    Overview,
    /// Screening rate by insurance status
    Insurance,
    /// Screening rate by sex
    Sex,
    /// Screening rate by age group
    AgeGroups,
    /// Screening rate by census region
    Regions,
    /// Screened vs not screened split
    Prevalence,
    /// Key findings and policy actions
    Recommendations,
}

impl DatasetId {
    /// All dataset ids in registry order
    pub const ALL: [DatasetId; 7] = [
        DatasetId::Overview,
        DatasetId::Insurance,
        DatasetId::Sex,
        DatasetId::AgeGroups,
        DatasetId::Regions,
        DatasetId::Prevalence,
        DatasetId::Recommendations,
    ];

    /// Stable string name used in URLs and CLI arguments
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetId::Overview => "overview",
            DatasetId::Insurance => "insurance",
            DatasetId::Sex => "sex",
            DatasetId::AgeGroups => "age_groups",
            DatasetId::Regions => "regions",
            DatasetId::Prevalence => "prevalence",
            DatasetId::Recommendations => "recommendations",
        }
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for DatasetId {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DatasetId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| DataError::UnknownDataset(s.to_string()))
    }
}

/// Reported p-value of a significance test
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(tag = "relation", content = "value", rename_all = "snake_case")]
pub enum PValue {
    /// Reported as an upper bound, e.g. `p < 0.001`
    LessThan(f64),
    /// Reported as an exact value, e.g. `p = 0.008`
    Equals(f64),
}

impl fmt::Display for PValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PValue::LessThan(v) => write!(f, "p < {}", v),
            PValue::Equals(v) => write!(f, "p = {}", v),
        }
    }
}

/// Outcome of a chi-square test attached to a breakdown table
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Significance {
    /// χ² statistic, when reported
    pub chi_square: Option<f64>,
    pub p_value: PValue,
}

impl fmt::Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.chi_square {
            Some(chi) => write!(f, "χ² = {}, {}", chi, self.p_value),
            None => write!(f, "{}", self.p_value),
        }
    }
}

/// Share of the sample by sex and census region (percent)
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct SampleShares {
    pub female: f64,
    pub northeast: f64,
    pub midwest: f64,
    pub south: f64,
    pub west: f64,
}

impl SampleShares {
    /// Regional shares in the order the overview pie draws them
    pub fn regions(&self) -> [(&'static str, f64); 4] {
        [
            ("Northeast", self.northeast),
            ("Midwest", self.midwest),
            ("South", self.south),
            ("West", self.west),
        ]
    }
}

/// Headline statistics of the analytic sample
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    pub total_records: u32,
    pub mean_age: f64,
    pub insured_rate: f64,
    pub screening_rate: f64,
    pub demographics: SampleShares,
}

/// Screening rate for one insurance status
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceRow {
    pub status: &'static str,
    pub screening_rate: f64,
    pub count: u32,
}

/// Screening rate for one sex group
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SexRow {
    pub group: &'static str,
    pub screening_rate: f64,
}

/// Screening rate for one age band
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgeGroupRow {
    pub age_group: &'static str,
    pub screening_rate: f64,
}

/// Screening rate for one census region, with its share of the sample
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegionRow {
    pub region: &'static str,
    pub screening_rate: f64,
    /// Percent of the sample living in the region
    pub percentage: f64,
}

/// One slice of the overall screening split
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrevalenceRow {
    pub category: &'static str,
    pub value: f64,
    pub count: u32,
}

/// Visual emphasis of a narrative card
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Critical,
    Info,
    Action,
}

/// A titled narrative statement (finding or policy action)
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Statement {
    pub title: &'static str,
    pub body: &'static str,
    pub tone: Tone,
}

/// Key findings followed by the recommended policy actions
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Recommendations {
    pub findings: &'static [Statement],
    pub actions: &'static [Statement],
}

/// Provenance note shown beneath every panel
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    pub survey: &'static str,
    pub year: u16,
    pub provider: &'static str,
    pub sample_size: u32,
    pub population: &'static str,
    pub methods: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_id_round_trip_names() {
        for id in DatasetId::ALL {
            assert_eq!(id.as_str().parse::<DatasetId>().unwrap(), id);
        }
        assert!("age-groups".parse::<DatasetId>().is_err());
        assert_eq!(format!("{:<12}|", DatasetId::AgeGroups), "age_groups  |");
    }

    #[test]
    fn test_p_value_display() {
        assert_eq!(PValue::LessThan(0.001).to_string(), "p < 0.001");
        assert_eq!(PValue::Equals(0.008).to_string(), "p = 0.008");

        let sig = Significance {
            chi_square: Some(245.31),
            p_value: PValue::LessThan(0.001),
        };
        assert_eq!(sig.to_string(), "χ² = 245.31, p < 0.001");
    }

    #[test]
    fn test_overview_serializes_camel_case() {
        let row = InsuranceRow {
            status: "Insured",
            screening_rate: 87.3,
            count: 9938,
        };
        let json = serde_json::to_value(row).unwrap();
        assert_eq!(json["screeningRate"], 87.3);
        assert_eq!(json["count"], 9938);
    }
}
