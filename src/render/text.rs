//! Plain-text panel rendering for terminals

use std::fmt::Write;

use super::model::{ChartKind, Panel};

const BAR_WIDTH: f64 = 40.0;

/// Render a panel as plain text with ASCII bars
pub fn render_text(panel: &Panel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", panel.title);
    let _ = writeln!(out, "{}", "=".repeat(panel.title.chars().count()));

    if !panel.tiles.is_empty() {
        out.push('\n');
        for tile in &panel.tiles {
            match &tile.detail {
                Some(detail) => {
                    let _ = writeln!(out, "  {:<24} {} ({})", tile.label, tile.value, detail);
                }
                None => {
                    let _ = writeln!(out, "  {:<24} {}", tile.label, tile.value);
                }
            }
        }
    }

    for callout in &panel.callouts {
        let _ = write!(out, "\n[{}]\n  {}\n", callout.title, callout.body);
    }

    for chart in &panel.charts {
        out.push('\n');
        if let Some(title) = &chart.title {
            let _ = writeln!(out, "{}", title);
        }

        let label_width = chart
            .points
            .iter()
            .map(|p| p.label.chars().count())
            .max()
            .unwrap_or(0);

        for point in &chart.points {
            let notes: Vec<&str> = point.annotations.iter().map(|a| a.text.as_str()).collect();
            let suffix = if notes.is_empty() {
                String::new()
            } else {
                format!("  ({})", notes.join(", "))
            };

            match chart.kind {
                ChartKind::Bar | ChartKind::Line => {
                    let marks = (point.value.clamp(0.0, 100.0) / 100.0 * BAR_WIDTH).round() as usize;
                    let mark = if chart.kind == ChartKind::Bar { '#' } else { '*' };
                    let _ = writeln!(
                        out,
                        "  {:<width$}  {:<bar$}  {}%{}",
                        point.label,
                        mark.to_string().repeat(marks),
                        point.value,
                        suffix,
                        width = label_width,
                        bar = BAR_WIDTH as usize
                    );
                }
                ChartKind::Pie => {
                    let _ = writeln!(
                        out,
                        "  {:<width$}  {}%{}",
                        point.label,
                        point.value,
                        suffix,
                        width = label_width
                    );
                }
            }
        }
    }

    if let Some(caption) = &panel.caption {
        let _ = write!(out, "\nCaption: {}\n", caption);
    }
    if let Some(interpretation) = &panel.interpretation {
        let _ = writeln!(out, "Interpretation: {}", interpretation);
    }

    out
}
