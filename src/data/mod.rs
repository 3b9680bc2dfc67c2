//! Survey Dataset Registry
//!
//! Immutable statistical tables from the 2023 NHIS blood pressure screening
//! analysis:
//!
//! - **types**: Record shapes (insurance rows, age groups, regions, ...)
//! - **registry**: The literal tables and lookup by [`DatasetId`]
//! - **error**: Registry errors
//!
//! All values are pre-aggregated constants created once at startup and shared
//! read-only by every render.

pub mod error;
pub mod registry;
pub mod types;

pub use error::{DataError, DataResult};
pub use registry::{Dataset, DatasetRegistry, PERCENT_TOLERANCE};
pub use types::{
    AgeGroupRow, DataSource, DatasetId, InsuranceRow, OverviewStats, PValue, PrevalenceRow,
    Recommendations, RegionRow, SampleShares, SexRow, Significance, Statement, Tone,
};
