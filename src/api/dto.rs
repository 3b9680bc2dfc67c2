//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.

use serde::{Deserialize, Deserializer, Serialize};

use crate::render::Panel;
use crate::section::{Section, SectionId, Selection};

// ============================================
// SECTION DTOs
// ============================================

/// Selection request; the id is a raw string so unknown ids can fall back
///
/// A missing, null or non-string `section` deserializes to an empty id,
/// which the router resolves to its default section.
#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    #[serde(default, deserialize_with = "lenient_section_id")]
    pub section: String,
}

fn lenient_section_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(id) => id,
        _ => String::new(),
    })
}

/// One menu entry
#[derive(Debug, Serialize)]
pub struct SectionDto {
    pub id: SectionId,
    pub label: &'static str,
    pub active: bool,
}

/// Menu listing
#[derive(Debug, Serialize)]
pub struct SectionListResponse {
    pub sections: Vec<SectionDto>,
    pub active: SectionId,
    pub revision: u64,
}

/// Active section
#[derive(Debug, Serialize)]
pub struct ActiveSectionResponse {
    pub section: Section,
    pub revision: u64,
}

/// Outcome of a selection
#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    pub active: Section,
    /// True when the requested id was unknown
    pub fallback: bool,
    pub revision: u64,
}

impl From<Selection> for SelectionResponse {
    fn from(selection: Selection) -> Self {
        Self {
            active: selection.active.section(),
            fallback: selection.fallback,
            revision: selection.revision,
        }
    }
}

// ============================================
// PANEL DTOs
// ============================================

/// Panel rendered for an explicit id
#[derive(Debug, Serialize)]
pub struct PanelResponse {
    pub requested: String,
    /// True when the id was unknown and the overview template was used
    pub fallback: bool,
    pub panel: Panel,
}

// ============================================
// DATASET DTOs
// ============================================

/// Registered dataset names
#[derive(Debug, Serialize)]
pub struct DatasetListResponse {
    pub datasets: Vec<&'static str>,
    pub total: usize,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Dataset validation status
    pub datasets: String,
    /// Validation failure, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datasets_error: Option<String>,
    /// Currently active section
    pub active_section: SectionId,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_request_accepts_any_section_value() {
        let parse = |body: &str| serde_json::from_str::<SelectRequest>(body).unwrap().section;

        assert_eq!(parse(r#"{"section": "insurance"}"#), "insurance");
        assert_eq!(parse("{}"), "");
        assert_eq!(parse(r#"{"section": 3}"#), "");
        assert_eq!(parse(r#"{"section": null}"#), "");
    }
}
