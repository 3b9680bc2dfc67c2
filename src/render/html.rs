//! HTML page rendering
//!
//! Produces a complete, self-contained dashboard page: header, the six-button
//! section menu, the active panel and the data-source footer. Styling is a
//! small inline stylesheet; charts are inline SVG.

use std::fmt::Write;

use crate::data::{DataSource, Tone};
use crate::section::SECTIONS;

use super::escape;
use super::model::{format_count, Callout, ChartKind, Panel, StatTile};
use super::svg::chart_svg;

/// How the section menu controls reach the router
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavMode {
    /// Each button posts `section=<id>` to the given path
    Form { action: String },
    /// Each button links to `<id>.html` (static export)
    Links,
}

/// Page-level text and navigation settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    pub title: String,
    pub subtitle: String,
    pub nav: NavMode,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Blood Pressure Screening Dashboard".to_string(),
            subtitle: "2023 NHIS Analysis: Insurance Status and Health Equity in Preventive Care"
                .to_string(),
            nav: NavMode::Form {
                action: "/select".to_string(),
            },
        }
    }
}

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #f9fafb; color: #111827; }
header { background: #fff; border-bottom: 1px solid #e5e7eb; padding: 16px 24px; }
header h1 { margin: 0; font-size: 28px; }
header p { margin: 8px 0 0; color: #4b5563; }
main { max-width: 1200px; margin: 0 auto; padding: 24px; }
nav.sections { display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 24px; }
nav.sections form { margin: 0; }
.tab { display: inline-block; padding: 8px 16px; border-radius: 8px; font-size: 14px; border: 1px solid #e5e7eb; background: #fff; color: #374151; text-decoration: none; cursor: pointer; }
.tab.active { background: #2563eb; border-color: #2563eb; color: #fff; }
.card { background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; box-shadow: 0 1px 2px rgba(0,0,0,.05); padding: 16px 24px; }
.tiles, .callouts, .charts { display: grid; gap: 16px; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); margin-bottom: 16px; }
.tile { text-align: center; padding: 16px; border-radius: 8px; background: #f3f4f6; }
.tile .value { font-size: 24px; font-weight: 700; }
.tile .label, .tile .detail { font-size: 14px; color: #4b5563; }
.callout { padding: 16px; border-radius: 8px; border-left: 4px solid; }
.callout.critical { background: #fef2f2; border-color: #ef4444; }
.callout.info { background: #eff6ff; border-color: #3b82f6; }
.callout.action { background: #f0fdf4; border-color: #10b981; }
.callout h3 { margin: 0 0 8px; font-size: 16px; }
.callout p, .caption, .interpretation { font-size: 14px; margin: 8px 0; }
.caption { color: #4b5563; }
footer { margin-top: 32px; background: #f3f4f6; padding: 16px; border-radius: 8px; font-size: 14px; color: #4b5563; }
"#;

/// Render a full HTML document for one panel
pub fn render_page(panel: &Panel, source: &DataSource, options: &PageOptions) -> String {
    let mut out = String::with_capacity(16 * 1024);

    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{} · {}</title>\n<style>{}</style>\n</head>\n<body>\n",
        escape(&options.title),
        escape(panel.section.label()),
        STYLE
    );

    let _ = write!(
        out,
        "<header><h1>{}</h1><p>{}</p></header>\n<main>\n",
        escape(&options.title),
        escape(&options.subtitle)
    );

    out.push_str(&render_nav(panel, &options.nav));
    out.push_str(&render_panel(panel));
    out.push_str(&render_footer(source));

    out.push_str("</main>\n</body>\n</html>\n");
    out
}

/// The six section controls, with the panel's section highlighted
pub fn render_nav(panel: &Panel, mode: &NavMode) -> String {
    let mut out = String::from("<nav class=\"sections\">\n");

    for section in &SECTIONS {
        let active = section.id == panel.section;
        let class = if active { "tab active" } else { "tab" };
        let current = if active { " aria-current=\"page\"" } else { "" };

        match mode {
            NavMode::Form { action } => {
                let _ = writeln!(
                    out,
                    "<form method=\"post\" action=\"{}\"><button class=\"{}\" name=\"section\" value=\"{}\"{}>{}</button></form>",
                    escape(action),
                    class,
                    section.id,
                    current,
                    escape(section.label)
                );
            }
            NavMode::Links => {
                let _ = writeln!(
                    out,
                    "<a class=\"{}\" href=\"{}.html\"{}>{}</a>",
                    class,
                    section.id,
                    current,
                    escape(section.label)
                );
            }
        }
    }

    out.push_str("</nav>\n");
    out
}

/// The panel card: tiles, callouts, charts, caption and interpretation
pub fn render_panel(panel: &Panel) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "<section class=\"card\" id=\"panel-{}\" data-section=\"{}\">\n<h2>{}</h2>\n",
        panel.section,
        panel.section,
        escape(&panel.title)
    );

    if !panel.tiles.is_empty() {
        out.push_str("<div class=\"tiles\">\n");
        for tile in &panel.tiles {
            out.push_str(&render_tile(tile));
        }
        out.push_str("</div>\n");
    }

    if !panel.callouts.is_empty() {
        out.push_str("<div class=\"callouts\">\n");
        for callout in &panel.callouts {
            out.push_str(&render_callout(callout));
        }
        out.push_str("</div>\n");
    }

    if !panel.charts.is_empty() {
        out.push_str("<div class=\"charts\">\n");
        for chart in &panel.charts {
            let (width, height) = match chart.kind {
                ChartKind::Pie => (420, 260),
                _ if panel.charts.len() > 1 => (420, 200),
                _ => (720, 260),
            };
            out.push_str("<figure>");
            if let Some(title) = &chart.title {
                let _ = write!(out, "<figcaption><strong>{}</strong></figcaption>", escape(title));
            }
            out.push_str(&chart_svg(chart, width, height));
            out.push_str("</figure>\n");
        }
        out.push_str("</div>\n");
    }

    if let Some(caption) = &panel.caption {
        let _ = writeln!(
            out,
            "<p class=\"caption\"><strong>Caption:</strong> {}</p>",
            escape(caption)
        );
    }
    if let Some(interpretation) = &panel.interpretation {
        let _ = writeln!(
            out,
            "<p class=\"interpretation\"><strong>Interpretation:</strong> {}</p>",
            escape(interpretation)
        );
    }

    out.push_str("</section>\n");
    out
}

fn render_tile(tile: &StatTile) -> String {
    let mut out = format!(
        "<div class=\"tile\"><div class=\"value\" style=\"color: {}\">{}</div><div class=\"label\">{}</div>",
        tile.accent.hex(),
        escape(&tile.value),
        escape(&tile.label)
    );
    if let Some(detail) = &tile.detail {
        let _ = write!(out, "<div class=\"detail\">{}</div>", escape(detail));
    }
    out.push_str("</div>\n");
    out
}

fn render_callout(callout: &Callout) -> String {
    let class = match callout.tone {
        Tone::Critical => "critical",
        Tone::Info => "info",
        Tone::Action => "action",
    };
    format!(
        "<div class=\"callout {}\"><h3>{}</h3><p>{}</p></div>\n",
        class,
        escape(&callout.title),
        escape(&callout.body)
    )
}

fn render_footer(source: &DataSource) -> String {
    format!(
        "<footer><strong>Data Source:</strong> {} {} via {}, n={} {}. {}</footer>\n",
        source.year,
        escape(source.survey),
        escape(source.provider),
        format_count(source.sample_size),
        escape(source.population),
        escape(source.methods)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DatasetRegistry;
    use crate::render::Renderer;
    use crate::section::SectionId;

    fn page_for(section: SectionId, options: &PageOptions) -> String {
        let registry = DatasetRegistry::default();
        let panel = Renderer::new(&registry).render_section(section);
        render_page(&panel, registry.source(), options)
    }

    #[test]
    fn test_page_has_six_controls_and_one_active() {
        let html = page_for(SectionId::Insurance, &PageOptions::default());

        assert_eq!(html.matches("name=\"section\"").count(), 6);
        assert_eq!(html.matches("class=\"tab active\"").count(), 1);
        assert!(html.contains(
            "<button class=\"tab active\" name=\"section\" value=\"insurance\" aria-current=\"page\">Insurance Factors</button>"
        ));
    }

    #[test]
    fn test_static_links_mode() {
        let options = PageOptions {
            nav: NavMode::Links,
            ..PageOptions::default()
        };
        let html = page_for(SectionId::Regional, &options);

        assert!(html.contains("href=\"overview.html\""));
        assert!(html.contains("<a class=\"tab active\" href=\"regional.html\""));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn test_overview_page_shows_headline_figures() {
        let html = page_for(SectionId::Overview, &PageOptions::default());

        assert!(html.contains(">11,018</div>"));
        assert!(html.contains(">46.3</div>"));
        assert!(html.contains(">90.2%</div>"));
        assert!(html.contains(">84.7%</div>"));
        assert!(html.contains("South: 37.6%"));
    }

    #[test]
    fn test_footer_names_source() {
        let html = page_for(SectionId::Prevalence, &PageOptions::default());
        assert!(html.contains(
            "2023 National Health Interview Survey (NHIS) via IPUMS, n=11,018 adults aged 18+."
        ));
    }

    #[test]
    fn test_recommendations_callouts() {
        let html = page_for(SectionId::Recommendations, &PageOptions::default());
        assert_eq!(html.matches("class=\"callout action\"").count(), 3);
        assert!(html.contains("class=\"callout critical\""));
        assert!(!html.contains("<svg"));
    }
}
