//! Section Router
//!
//! Owns the single piece of mutable dashboard state: which section is
//! active. The router is the only writer; renderers borrow it to read the
//! current selection.

use serde::Serialize;

use super::types::{Section, SectionId, SECTIONS};

/// Result of a selection request
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Selection {
    /// Section that is now active
    pub active: SectionId,
    /// True when the requested id was unknown and the default was used
    pub fallback: bool,
    /// Router revision after the selection
    pub revision: u64,
}

/// Single-writer cell holding the active section
#[derive(Debug, Clone)]
pub struct SectionRouter {
    active: SectionId,
    default: SectionId,
    revision: u64,
}

impl SectionRouter {
    /// Router starting on the overview section
    pub fn new() -> Self {
        Self::with_default(SectionId::DEFAULT)
    }

    /// Router whose initial and fallback section is `default`
    pub fn with_default(default: SectionId) -> Self {
        Self {
            active: default,
            default,
            revision: 0,
        }
    }

    /// Select a section by its string id
    ///
    /// Unknown ids are not an error: they are logged and resolve to the
    /// default section, so the router always holds a valid selection.
    pub fn select(&mut self, id: &str) -> Selection {
        match id.parse::<SectionId>() {
            Ok(section) => self.select_section(section),
            Err(e) => {
                tracing::warn!(
                    requested = %id,
                    fallback = %self.default,
                    "{}, falling back to default section",
                    e
                );
                let mut selection = self.select_section(self.default);
                selection.fallback = true;
                selection
            }
        }
    }

    /// Select a section by typed id
    pub fn select_section(&mut self, section: SectionId) -> Selection {
        self.active = section;
        self.revision += 1;

        tracing::debug!(section = %section, revision = self.revision, "Section selected");

        Selection {
            active: section,
            fallback: false,
            revision: self.revision,
        }
    }

    /// The currently active section
    pub fn active_section(&self) -> Section {
        self.active.section()
    }

    pub fn active_id(&self) -> SectionId {
        self.active
    }

    pub fn default_section(&self) -> SectionId {
        self.default
    }

    /// Number of selections applied since creation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The ordered menu of selectable sections
    pub fn sections(&self) -> &'static [Section] {
        &SECTIONS
    }

    pub fn is_active(&self, section: SectionId) -> bool {
        self.active == section
    }
}

impl Default for SectionRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_section_is_overview() {
        let router = SectionRouter::new();
        assert_eq!(router.active_section().id, SectionId::Overview);
        assert_eq!(router.active_section().label, "Dataset Overview");
        assert_eq!(router.revision(), 0);
    }

    #[test]
    fn test_select_every_known_section() {
        let mut router = SectionRouter::new();

        for id in SectionId::ALL {
            let selection = router.select(id.as_str());
            assert!(!selection.fallback);
            assert_eq!(selection.active, id);
            assert_eq!(router.active_section().id, id);
        }
    }

    #[test]
    fn test_unknown_id_falls_back_to_default() {
        let mut router = SectionRouter::new();
        router.select("insurance");

        let selection = router.select("not-a-section");
        assert!(selection.fallback);
        assert_eq!(selection.active, SectionId::Overview);
        assert_eq!(router.active_section().id, SectionId::Overview);
    }

    #[test]
    fn test_empty_id_falls_back() {
        let mut router = SectionRouter::with_default(SectionId::Prevalence);
        router.select("regional");

        let selection = router.select("");
        assert!(selection.fallback);
        assert_eq!(router.active_id(), SectionId::Prevalence);
    }

    #[test]
    fn test_custom_default_is_initial_section() {
        let router = SectionRouter::with_default(SectionId::Recommendations);
        assert_eq!(router.active_id(), SectionId::Recommendations);
        assert_eq!(router.default_section(), SectionId::Recommendations);
    }

    #[test]
    fn test_last_write_wins() {
        let mut router = SectionRouter::new();
        router.select("insurance");
        router.select("regional");
        let last = router.select("demographics");

        assert_eq!(router.active_id(), SectionId::Demographics);
        assert_eq!(last.revision, 3);
        assert_eq!(router.revision(), 3);
    }

    #[test]
    fn test_menu_has_six_sections_in_order() {
        let router = SectionRouter::new();
        let ids: Vec<&str> = router.sections().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "recommendations",
                "overview",
                "insurance",
                "demographics",
                "regional",
                "prevalence"
            ]
        );
    }
}
