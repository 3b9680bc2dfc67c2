//! Dataset Registry
//!
//! Holds the literal survey tables for the lifetime of the process. Nothing
//! here computes or transforms values; accessors hand out borrowed views so
//! every render sees exactly the figures written below.

use serde::Serialize;

use super::error::{DataError, DataResult};
use super::types::*;

/// Tolerance for percentage totals that are rounded to one decimal
pub const PERCENT_TOLERANCE: f64 = 0.05;

const OVERVIEW: OverviewStats = OverviewStats {
    total_records: 11018,
    mean_age: 46.3,
    insured_rate: 90.2,
    screening_rate: 84.7,
    demographics: SampleShares {
        female: 51.4,
        northeast: 17.8,
        midwest: 23.1,
        south: 37.6,
        west: 21.5,
    },
};

const INSURANCE: &[InsuranceRow] = &[
    InsuranceRow {
        status: "Insured",
        screening_rate: 87.3,
        count: 9938,
    },
    InsuranceRow {
        status: "Uninsured",
        screening_rate: 62.1,
        count: 1080,
    },
];

const INSURANCE_TEST: Significance = Significance {
    chi_square: Some(245.31),
    p_value: PValue::LessThan(0.001),
};

const SEX: &[SexRow] = &[
    SexRow {
        group: "Female",
        screening_rate: 86.9,
    },
    SexRow {
        group: "Male",
        screening_rate: 82.3,
    },
];

const SEX_TEST: Significance = Significance {
    chi_square: None,
    p_value: PValue::LessThan(0.01),
};

const AGE_GROUPS: &[AgeGroupRow] = &[
    AgeGroupRow {
        age_group: "18-30",
        screening_rate: 75.2,
    },
    AgeGroupRow {
        age_group: "31-45",
        screening_rate: 82.1,
    },
    AgeGroupRow {
        age_group: "46-60",
        screening_rate: 87.8,
    },
    AgeGroupRow {
        age_group: "61 and older",
        screening_rate: 91.4,
    },
];

// Display order, highest screening rate first
const REGIONS: &[RegionRow] = &[
    RegionRow {
        region: "South",
        screening_rate: 86.2,
        percentage: 37.6,
    },
    RegionRow {
        region: "Midwest",
        screening_rate: 85.1,
        percentage: 23.1,
    },
    RegionRow {
        region: "Northeast",
        screening_rate: 84.3,
        percentage: 17.8,
    },
    RegionRow {
        region: "West",
        screening_rate: 82.7,
        percentage: 21.5,
    },
];

const REGION_TEST: Significance = Significance {
    chi_square: None,
    p_value: PValue::Equals(0.008),
};

const PREVALENCE: &[PrevalenceRow] = &[
    PrevalenceRow {
        category: "Screened (2+ visits)",
        value: 84.7,
        count: 9332,
    },
    PrevalenceRow {
        category: "Not Screened",
        value: 15.3,
        count: 1686,
    },
];

const FINDINGS: &[Statement] = &[
    Statement {
        title: "Critical Finding",
        body: "Uninsured adults are 25% less likely to receive blood pressure screening (62.1% vs 87.3%)",
        tone: Tone::Critical,
    },
    Statement {
        title: "Statistical Significance",
        body: "Insurance status strongly predicts screening access (χ² = 245.31, p < 0.001)",
        tone: Tone::Info,
    },
];

const ACTIONS: &[Statement] = &[
    Statement {
        title: "Policy Action 1",
        body: "Expand Medicaid and CHIP coverage to reach more uninsured adults",
        tone: Tone::Action,
    },
    Statement {
        title: "Policy Action 2",
        body: "Target interventions for younger uninsured populations (18-30 age group)",
        tone: Tone::Action,
    },
    Statement {
        title: "Policy Action 3",
        body: "Enhance outreach in lower-screening regions, particularly the West",
        tone: Tone::Action,
    },
];

const SOURCE: DataSource = DataSource {
    survey: "National Health Interview Survey (NHIS)",
    year: 2023,
    provider: "IPUMS",
    sample_size: 11018,
    population: "adults aged 18+",
    methods: "Statistical significance tested using chi-square tests and XGBoost modeling.",
};

/// Borrowed, read-only view of one registered table
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Dataset<'a> {
    Overview(&'a OverviewStats),
    Insurance(&'a [InsuranceRow]),
    Sex(&'a [SexRow]),
    AgeGroups(&'a [AgeGroupRow]),
    Regions(&'a [RegionRow]),
    Prevalence(&'a [PrevalenceRow]),
    Recommendations(&'a Recommendations),
}

impl Dataset<'_> {
    /// Registry id of this view
    pub fn id(&self) -> DatasetId {
        match self {
            Dataset::Overview(_) => DatasetId::Overview,
            Dataset::Insurance(_) => DatasetId::Insurance,
            Dataset::Sex(_) => DatasetId::Sex,
            Dataset::AgeGroups(_) => DatasetId::AgeGroups,
            Dataset::Regions(_) => DatasetId::Regions,
            Dataset::Prevalence(_) => DatasetId::Prevalence,
            Dataset::Recommendations(_) => DatasetId::Recommendations,
        }
    }
}

/// Fixed collection of named survey tables
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetRegistry {
    pub(crate) overview: OverviewStats,
    pub(crate) insurance: &'static [InsuranceRow],
    pub(crate) insurance_test: Significance,
    pub(crate) sex: &'static [SexRow],
    pub(crate) sex_test: Significance,
    pub(crate) age_groups: &'static [AgeGroupRow],
    pub(crate) regions: &'static [RegionRow],
    pub(crate) region_test: Significance,
    pub(crate) prevalence: &'static [PrevalenceRow],
    pub(crate) recommendations: Recommendations,
    pub(crate) source: DataSource,
}

impl DatasetRegistry {
    /// Registry for the 2023 NHIS blood pressure screening analysis
    pub fn national_2023() -> Self {
        Self {
            overview: OVERVIEW,
            insurance: INSURANCE,
            insurance_test: INSURANCE_TEST,
            sex: SEX,
            sex_test: SEX_TEST,
            age_groups: AGE_GROUPS,
            regions: REGIONS,
            region_test: REGION_TEST,
            prevalence: PREVALENCE,
            recommendations: Recommendations {
                findings: FINDINGS,
                actions: ACTIONS,
            },
            source: SOURCE,
        }
    }

    pub fn overview(&self) -> &OverviewStats {
        &self.overview
    }

    pub fn insurance(&self) -> &[InsuranceRow] {
        self.insurance
    }

    pub fn insurance_significance(&self) -> &Significance {
        &self.insurance_test
    }

    pub fn sex(&self) -> &[SexRow] {
        self.sex
    }

    pub fn sex_significance(&self) -> &Significance {
        &self.sex_test
    }

    pub fn age_groups(&self) -> &[AgeGroupRow] {
        self.age_groups
    }

    pub fn regions(&self) -> &[RegionRow] {
        self.regions
    }

    pub fn region_significance(&self) -> &Significance {
        &self.region_test
    }

    pub fn prevalence(&self) -> &[PrevalenceRow] {
        self.prevalence
    }

    pub fn recommendations(&self) -> &Recommendations {
        &self.recommendations
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// Look up a table by id
    pub fn get(&self, id: DatasetId) -> Dataset<'_> {
        match id {
            DatasetId::Overview => Dataset::Overview(&self.overview),
            DatasetId::Insurance => Dataset::Insurance(self.insurance),
            DatasetId::Sex => Dataset::Sex(self.sex),
            DatasetId::AgeGroups => Dataset::AgeGroups(self.age_groups),
            DatasetId::Regions => Dataset::Regions(self.regions),
            DatasetId::Prevalence => Dataset::Prevalence(self.prevalence),
            DatasetId::Recommendations => Dataset::Recommendations(&self.recommendations),
        }
    }

    /// Look up a table by its string name
    pub fn get_by_name(&self, name: &str) -> DataResult<Dataset<'_>> {
        let id: DatasetId = name.parse()?;
        Ok(self.get(id))
    }

    /// Names of all registered tables, in registry order
    pub fn names(&self) -> Vec<&'static str> {
        DatasetId::ALL.iter().map(|id| id.as_str()).collect()
    }

    /// Check the consistency rules every table must satisfy
    ///
    /// Rates must be percentages, count breakdowns must add up to the
    /// sample size, and percentage splits must total 100 within
    /// [`PERCENT_TOLERANCE`].
    pub fn validate(&self) -> DataResult<()> {
        let total = self.overview.total_records;

        if !(self.overview.mean_age.is_finite() && self.overview.mean_age > 0.0) {
            return Err(invalid(
                DatasetId::Overview,
                format!("meanAge = {} is not a valid age", self.overview.mean_age),
            ));
        }
        check_rate(DatasetId::Overview, "insuredRate", self.overview.insured_rate)?;
        check_rate(DatasetId::Overview, "screeningRate", self.overview.screening_rate)?;
        check_rate(DatasetId::Overview, "female", self.overview.demographics.female)?;
        let shares = self.overview.demographics.regions();
        for (name, share) in shares {
            check_rate(DatasetId::Overview, name, share)?;
        }
        check_total(
            DatasetId::Overview,
            "regional shares",
            shares.iter().map(|(_, v)| *v).sum(),
        )?;

        check_non_empty(DatasetId::Insurance, self.insurance.len())?;
        for row in self.insurance {
            check_rate(DatasetId::Insurance, row.status, row.screening_rate)?;
        }
        check_count(
            DatasetId::Insurance,
            self.insurance.iter().map(|r| r.count).sum(),
            total,
        )?;

        check_non_empty(DatasetId::Sex, self.sex.len())?;
        for row in self.sex {
            check_rate(DatasetId::Sex, row.group, row.screening_rate)?;
        }

        check_non_empty(DatasetId::AgeGroups, self.age_groups.len())?;
        for row in self.age_groups {
            check_rate(DatasetId::AgeGroups, row.age_group, row.screening_rate)?;
        }

        check_non_empty(DatasetId::Regions, self.regions.len())?;
        for row in self.regions {
            check_rate(DatasetId::Regions, row.region, row.screening_rate)?;
            check_rate(DatasetId::Regions, row.region, row.percentage)?;
        }
        check_total(
            DatasetId::Regions,
            "sample percentages",
            self.regions.iter().map(|r| r.percentage).sum(),
        )?;

        check_non_empty(DatasetId::Prevalence, self.prevalence.len())?;
        for row in self.prevalence {
            check_rate(DatasetId::Prevalence, row.category, row.value)?;
        }
        check_total(
            DatasetId::Prevalence,
            "slices",
            self.prevalence.iter().map(|r| r.value).sum(),
        )?;
        check_count(
            DatasetId::Prevalence,
            self.prevalence.iter().map(|r| r.count).sum(),
            total,
        )?;

        Ok(())
    }
}

impl Default for DatasetRegistry {
    fn default() -> Self {
        Self::national_2023()
    }
}

fn invalid(dataset: DatasetId, reason: String) -> DataError {
    DataError::InvalidDataset {
        dataset: dataset.to_string(),
        reason,
    }
}

fn check_rate(dataset: DatasetId, field: &str, value: f64) -> DataResult<()> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(
            dataset,
            format!("{} = {} is not a percentage", field, value),
        ))
    }
}

fn check_total(dataset: DatasetId, what: &str, sum: f64) -> DataResult<()> {
    if (sum - 100.0).abs() <= PERCENT_TOLERANCE {
        Ok(())
    } else {
        Err(invalid(dataset, format!("{} sum to {:.2}, expected 100", what, sum)))
    }
}

fn check_count(dataset: DatasetId, sum: u32, total: u32) -> DataResult<()> {
    if sum == total {
        Ok(())
    } else {
        Err(invalid(
            dataset,
            format!("counts sum to {}, expected {}", sum, total),
        ))
    }
}

fn check_non_empty(dataset: DatasetId, len: usize) -> DataResult<()> {
    if len == 0 {
        Err(invalid(dataset, "table is empty".to_string()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_national_registry_is_valid() {
        DatasetRegistry::national_2023().validate().unwrap();
    }

    #[test]
    fn test_literal_values() {
        let registry = DatasetRegistry::default();

        let overview = registry.overview();
        assert_eq!(overview.total_records, 11018);
        assert_eq!(overview.mean_age, 46.3);
        assert_eq!(overview.insured_rate, 90.2);
        assert_eq!(overview.screening_rate, 84.7);

        let insurance = registry.insurance();
        assert_eq!(insurance.len(), 2);
        assert_eq!(insurance[0].status, "Insured");
        assert_eq!(insurance[0].screening_rate, 87.3);
        assert_eq!(insurance[1].count, 1080);

        let regions: Vec<&str> = registry.regions().iter().map(|r| r.region).collect();
        assert_eq!(regions, vec!["South", "Midwest", "Northeast", "West"]);
    }

    #[test]
    fn test_get_returns_matching_view() {
        let registry = DatasetRegistry::default();
        for id in DatasetId::ALL {
            assert_eq!(registry.get(id).id(), id);
        }

        match registry.get_by_name("age_groups").unwrap() {
            Dataset::AgeGroups(rows) => assert_eq!(rows[3].screening_rate, 91.4),
            other => panic!("unexpected dataset {:?}", other),
        }
    }

    #[test]
    fn test_get_by_unknown_name() {
        let registry = DatasetRegistry::default();
        let err = registry.get_by_name("income").unwrap_err();
        assert_eq!(err, DataError::UnknownDataset("income".to_string()));
    }

    #[test]
    fn test_names_follow_registry_order() {
        let names = DatasetRegistry::default().names();
        assert_eq!(names.first(), Some(&"overview"));
        assert_eq!(names.len(), DatasetId::ALL.len());
    }

    #[test]
    fn test_validate_rejects_bad_prevalence_split() {
        let mut registry = DatasetRegistry::default();
        registry.prevalence = &[
            PrevalenceRow {
                category: "Screened (2+ visits)",
                value: 80.0,
                count: 9332,
            },
            PrevalenceRow {
                category: "Not Screened",
                value: 15.3,
                count: 1686,
            },
        ];

        let err = registry.validate().unwrap_err();
        assert!(matches!(
            err,
            DataError::InvalidDataset { ref dataset, .. } if dataset == "prevalence"
        ));
    }

    #[test]
    fn test_validate_rejects_count_mismatch() {
        let mut registry = DatasetRegistry::default();
        registry.overview.total_records = 12000;

        let err = registry.validate().unwrap_err();
        assert_eq!(
            err,
            DataError::InvalidDataset {
                dataset: "insurance".to_string(),
                reason: "counts sum to 11018, expected 12000".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_rejects_out_of_range_rate() {
        let mut registry = DatasetRegistry::default();
        registry.sex = &[SexRow {
            group: "Female",
            screening_rate: 186.9,
        }];

        assert!(registry.validate().is_err());
    }

    #[test]
    fn test_dataset_serializes_as_raw_table() {
        let registry = DatasetRegistry::default();
        let json = serde_json::to_value(registry.get(DatasetId::Prevalence)).unwrap();
        assert_eq!(json[0]["value"], 84.7);
        assert_eq!(json[1]["count"], 1686);
    }
}
