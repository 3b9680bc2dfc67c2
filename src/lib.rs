//! # Screening Dashboard
//!
//! Blood pressure screening dashboard for the 2023 National Health Interview
//! Survey analysis: how insurance status, sex, age and region relate to
//! blood pressure screening rates among U.S. adults.
//!
//! ## Features
//!
//! - **Literal datasets**: Pre-aggregated survey tables with consistency checks
//! - **Six sections**: One active at a time, switched by id
//! - **Data-driven dispatch**: Section → template → datasets route table
//! - **Multiple surfaces**: Server-rendered HTML with SVG charts, JSON, terminal text
//!
//! ## Modules
//!
//! - [`data`]: Dataset registry
//! - [`section`]: Section menu and router
//! - [`render`]: Templates, view model and output surfaces
//! - [`export`]: Static site export
//! - [`api`]: HTTP server with Axum
//!
//! ## Quick Start
//!
//! ```rust
//! use screening_dashboard::data::DatasetRegistry;
//! use screening_dashboard::render::{render_text, Renderer};
//! use screening_dashboard::section::SectionRouter;
//!
//! let registry = DatasetRegistry::national_2023();
//! registry.validate().unwrap();
//!
//! let mut router = SectionRouter::new();
//! let selection = router.select("regional");
//! assert!(!selection.fallback);
//!
//! let panel = Renderer::new(&registry).render(&router);
//! println!("{}", render_text(&panel));
//! ```

pub mod api;
pub mod config;
pub mod data;
pub mod export;
pub mod logging;
pub mod render;
pub mod section;

// Re-export top-level types for convenience
pub use data::{DataError, DataResult, Dataset, DatasetId, DatasetRegistry};

pub use section::{Section, SectionError, SectionId, SectionRouter, Selection, SECTIONS};

pub use render::{
    chart_svg, render_page, render_text, Chart, ChartKind, OutputFormat, PageOptions, Panel,
    Renderer, TemplateId,
};

pub use export::{export_site, ExportError, ExportManifest};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{
    Config, ConfigError, ConfigLoad, DashboardConfig, LoggingConfig, ServerConfig,
};
