//! Application State
//!
//! Shared state accessible by all handlers. The dataset registry is shared
//! read-only; the section router is the single writable cell for this
//! dashboard session.

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::data::DatasetRegistry;
use crate::render::PageOptions;
use crate::section::{SectionId, SectionRouter};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Literal survey tables
    pub registry: Arc<DatasetRegistry>,
    /// Active-section cell, written only through `SectionRouter::select`
    pub router: Arc<RwLock<SectionRouter>>,
    /// Page header text and menu mode
    pub page: Arc<PageOptions>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state with the national registry and default page settings
    pub fn new(registry: DatasetRegistry, default_section: SectionId) -> Self {
        Self::with_page(registry, default_section, PageOptions::default())
    }

    pub fn with_page(
        registry: DatasetRegistry,
        default_section: SectionId,
        page: PageOptions,
    ) -> Self {
        Self {
            registry: Arc::new(registry),
            router: Arc::new(RwLock::new(SectionRouter::with_default(default_section))),
            page: Arc::new(page),
            start_time: Instant::now(),
        }
    }

    /// Build state from loaded configuration
    pub fn from_config(config: &Config) -> Self {
        let page = PageOptions {
            title: config.dashboard.title.clone(),
            subtitle: config.dashboard.subtitle.clone(),
            ..PageOptions::default()
        };
        Self::with_page(
            DatasetRegistry::national_2023(),
            config.dashboard.default_section_id(),
            page,
        )
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
