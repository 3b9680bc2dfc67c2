//! Section Rendering
//!
//! Turns the active section into visual output:
//!
//! - **dispatch**: Route table (section → template → datasets) and [`Renderer`]
//! - **templates**: One pure template per section
//! - **model**: The [`Panel`] view model shared by every output surface
//! - **svg**: Bar, line and pie chart drawing
//! - **html**: Full dashboard page
//! - **text**: Terminal output
//!
//! # Example
//!
//! ```rust
//! use screening_dashboard::data::DatasetRegistry;
//! use screening_dashboard::render::{ChartKind, Renderer};
//! use screening_dashboard::section::SectionRouter;
//!
//! let registry = DatasetRegistry::national_2023();
//! let mut router = SectionRouter::new();
//! router.select("insurance");
//!
//! let panel = Renderer::new(&registry).render(&router);
//! let bars = panel.chart(ChartKind::Bar).unwrap();
//! assert_eq!(bars.values(), vec![87.3, 62.1]);
//! ```

pub mod dispatch;
pub mod html;
pub mod model;
pub mod svg;
pub mod templates;
pub mod text;

pub use dispatch::{route_for, template_for_id, Renderer, Route, TemplateId, ROUTES};
pub use html::{render_page, NavMode, PageOptions};
pub use model::{
    format_count, format_percent, Accent, Annotation, Callout, Chart, ChartKind, ChartPoint,
    Panel, StatTile, PALETTE,
};
pub use svg::chart_svg;
pub use text::render_text;

use std::fmt;
use std::str::FromStr;

/// Output surface for a rendered panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Json,
    Text,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" | "htm" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            "text" | "txt" => Ok(OutputFormat::Text),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}

/// Escape text for HTML and SVG content and attribute values
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
