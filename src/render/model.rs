//! Panel view model
//!
//! Framework-independent description of what a section shows. Templates
//! build a [`Panel`]; the HTML, SVG and text surfaces draw it. Chart values
//! are copied verbatim from the dataset tables.

use serde::Serialize;

use crate::data::{DatasetId, Tone};
use crate::section::SectionId;

use super::dispatch::TemplateId;

/// Category colors shared by pie charts and legends
pub const PALETTE: [&str; 4] = ["#3b82f6", "#ef4444", "#10b981", "#f59e0b"];

/// Chart primitive used to draw a dataset
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

/// Extra labelled value shown when inspecting a point
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Annotation {
    pub name: String,
    pub text: String,
}

/// One category and its value
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            annotations: Vec::new(),
        }
    }

    /// Builder method: attach an annotation
    pub fn annotate(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.annotations.push(Annotation {
            name: name.into(),
            text: text.into(),
        });
        self
    }
}

/// A chart over an ordered sequence of records
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Chart {
    pub kind: ChartKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Record field that supplies the categories
    pub category_key: &'static str,
    /// Record field that supplies the values
    pub value_key: &'static str,
    /// Human name of the value series, used in tooltips
    pub value_label: &'static str,
    /// Fixed value-axis range; `None` for pies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_domain: Option<(f64, f64)>,
    pub points: Vec<ChartPoint>,
    /// Series color for bar/line, per-slice colors for pies
    pub colors: Vec<&'static str>,
}

impl Chart {
    pub fn new(kind: ChartKind, category_key: &'static str, value_key: &'static str) -> Self {
        Self {
            kind,
            title: None,
            category_key,
            value_key,
            value_label: "Screening Rate",
            y_domain: None,
            points: Vec::new(),
            colors: Vec::new(),
        }
    }

    /// Builder method: set the chart heading
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder method: set the tooltip name of the value series
    pub fn value_label(mut self, label: &'static str) -> Self {
        self.value_label = label;
        self
    }

    /// Builder method: fix the value axis to `[min, max]`
    pub fn y_domain(mut self, min: f64, max: f64) -> Self {
        self.y_domain = Some((min, max));
        self
    }

    /// Builder method: single series color
    pub fn color(mut self, color: &'static str) -> Self {
        self.colors = vec![color];
        self
    }

    /// Builder method: one color per category, cycling
    pub fn palette(mut self, colors: &[&'static str]) -> Self {
        self.colors = colors.to_vec();
        self
    }

    /// Builder method: append a point
    pub fn point(mut self, point: ChartPoint) -> Self {
        self.points.push(point);
        self
    }

    /// Series values in category order
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.label.as_str()).collect()
    }

    /// Sum of all values (meaningful for pies)
    pub fn total(&self) -> f64 {
        self.points.iter().map(|p| p.value).sum()
    }

    /// Color of the category at `index`
    pub fn color_at(&self, index: usize) -> &'static str {
        if self.colors.is_empty() {
            PALETTE[index % PALETTE.len()]
        } else {
            self.colors[index % self.colors.len()]
        }
    }

    /// Hover text for a point: value, series name and annotations
    pub fn tooltip(&self, point: &ChartPoint) -> String {
        let mut text = format!("{}: {}% {}", point.label, point.value, self.value_label);
        for annotation in &point.annotations {
            text.push('\n');
            text.push_str(&annotation.name);
            text.push_str(": ");
            text.push_str(&annotation.text);
        }
        text
    }
}

/// Color accent of a headline tile
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Green,
    Purple,
    Orange,
    Red,
}

impl Accent {
    pub fn hex(&self) -> &'static str {
        match self {
            Accent::Blue => "#2563eb",
            Accent::Green => "#16a34a",
            Accent::Purple => "#9333ea",
            Accent::Orange => "#ea580c",
            Accent::Red => "#dc2626",
        }
    }
}

/// Headline figure with a short label
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatTile {
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub accent: Accent,
}

impl StatTile {
    pub fn new(label: impl Into<String>, value: impl Into<String>, accent: Accent) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            detail: None,
            accent,
        }
    }

    /// Builder method: add a supporting line
    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Narrative card: a finding or a policy action
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Callout {
    pub title: String,
    pub body: String,
    pub tone: Tone,
}

/// Everything one section renders
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Panel {
    pub section: SectionId,
    pub template: TemplateId,
    /// Datasets the template was fed
    pub datasets: Vec<DatasetId>,
    pub title: String,
    pub tiles: Vec<StatTile>,
    pub callouts: Vec<Callout>,
    pub charts: Vec<Chart>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<String>,
}

impl Panel {
    pub fn new(section: SectionId, template: TemplateId, title: impl Into<String>) -> Self {
        Self {
            section,
            template,
            datasets: Vec::new(),
            title: title.into(),
            tiles: Vec::new(),
            callouts: Vec::new(),
            charts: Vec::new(),
            caption: None,
            interpretation: None,
        }
    }

    /// First chart of the given kind, if any
    pub fn chart(&self, kind: ChartKind) -> Option<&Chart> {
        self.charts.iter().find(|c| c.kind == kind)
    }

    pub fn tile(&self, label: &str) -> Option<&StatTile> {
        self.tiles.iter().find(|t| t.label == label)
    }
}

/// Format a count with thousands separators (`11018` → `11,018`)
pub fn format_count(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a percentage exactly as stored (`87.3` → `87.3%`)
pub fn format_percent(value: f64) -> String {
    format!("{}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1080), "1,080");
        assert_eq!(format_count(11018), "11,018");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_format_percent_keeps_literal() {
        assert_eq!(format_percent(87.3), "87.3%");
        assert_eq!(format_percent(90.0), "90%");
    }

    #[test]
    fn test_tooltip_includes_annotations() {
        let chart = Chart::new(ChartKind::Bar, "region", "screeningRate");
        let point = ChartPoint::new("South", 86.2).annotate("Sample Size", "37.6% of sample");

        assert_eq!(
            chart.tooltip(&point),
            "South: 86.2% Screening Rate\nSample Size: 37.6% of sample"
        );
    }

    #[test]
    fn test_color_cycles() {
        let chart = Chart::new(ChartKind::Pie, "name", "value").palette(&PALETTE);
        assert_eq!(chart.color_at(0), "#3b82f6");
        assert_eq!(chart.color_at(5), "#ef4444");

        let bar = Chart::new(ChartKind::Bar, "status", "screeningRate").color("#10b981");
        assert_eq!(bar.color_at(3), "#10b981");
    }
}
