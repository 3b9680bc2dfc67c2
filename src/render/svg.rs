//! SVG chart drawing
//!
//! Draws bar, line and pie charts from a [`Chart`] inside a fixed box.
//! Every mark carries a `<title>` child so hovering shows the exact value.

use std::f64::consts::PI;
use std::fmt::Write;

use super::escape;
use super::model::{Chart, ChartKind};

const MARGIN_LEFT: f64 = 48.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 36.0;
const Y_TICKS: usize = 5;

const GRID: &str = "#e5e7eb";
const AXIS_TEXT: &str = "#6b7280";

/// Draw a chart as a standalone `<svg>` element
pub fn chart_svg(chart: &Chart, width: u32, height: u32) -> String {
    if chart.points.is_empty() {
        return format!(
            r##"<svg class="chart" viewBox="0 0 {w} {h}" width="{w}" height="{h}" role="img"><text x="{x}" y="{y}" text-anchor="middle" font-size="14" fill="{c}">No data</text></svg>"##,
            w = width,
            h = height,
            x = width / 2,
            y = height / 2,
            c = AXIS_TEXT
        );
    }

    let body = match chart.kind {
        ChartKind::Bar => bar_body(chart, width as f64, height as f64),
        ChartKind::Line => line_body(chart, width as f64, height as f64),
        ChartKind::Pie => pie_body(chart, width as f64, height as f64),
    };

    format!(
        r##"<svg class="chart chart-{kind}" viewBox="0 0 {w} {h}" width="{w}" height="{h}" role="img" xmlns="http://www.w3.org/2000/svg">{body}</svg>"##,
        kind = kind_name(chart.kind),
        w = width,
        h = height,
        body = body
    )
}

fn kind_name(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Bar => "bar",
        ChartKind::Line => "line",
        ChartKind::Pie => "pie",
    }
}

/// Value range of the y axis: the fixed domain, or zero to 110% of the max
fn domain(chart: &Chart) -> (f64, f64) {
    match chart.y_domain {
        Some((lo, hi)) if hi > lo => (lo, hi),
        _ => {
            let max = chart.values().into_iter().fold(0.0_f64, f64::max);
            if max > 0.0 {
                (0.0, max * 1.1)
            } else {
                (0.0, 1.0)
            }
        }
    }
}

fn tick_label(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

struct Plot {
    width: f64,
    height: f64,
    lo: f64,
    hi: f64,
}

impl Plot {
    fn new(chart: &Chart, width: f64, height: f64) -> Self {
        let (lo, hi) = domain(chart);
        Self {
            width,
            height,
            lo,
            hi,
        }
    }

    fn plot_width(&self) -> f64 {
        self.width - MARGIN_LEFT - MARGIN_RIGHT
    }

    fn plot_height(&self) -> f64 {
        self.height - MARGIN_TOP - MARGIN_BOTTOM
    }

    fn baseline(&self) -> f64 {
        MARGIN_TOP + self.plot_height()
    }

    /// Screen y for a value, clamped into the axis range
    fn y(&self, value: f64) -> f64 {
        let v = value.clamp(self.lo, self.hi);
        MARGIN_TOP + (self.hi - v) / (self.hi - self.lo) * self.plot_height()
    }

    fn band(&self, count: usize) -> f64 {
        self.plot_width() / count.max(1) as f64
    }

    fn band_center(&self, index: usize, count: usize) -> f64 {
        MARGIN_LEFT + self.band(count) * (index as f64 + 0.5)
    }

    /// Dashed grid, y tick labels and category labels
    fn axes(&self, chart: &Chart) -> String {
        let mut out = String::new();

        for i in 0..Y_TICKS {
            let value = self.lo + (self.hi - self.lo) * i as f64 / (Y_TICKS - 1) as f64;
            let y = self.y(value);
            let _ = write!(
                out,
                r##"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-dasharray="3 3"/><text x="{:.1}" y="{:.1}" text-anchor="end" font-size="11" fill="{}">{}</text>"##,
                MARGIN_LEFT,
                y,
                self.width - MARGIN_RIGHT,
                y,
                GRID,
                MARGIN_LEFT - 6.0,
                y + 4.0,
                AXIS_TEXT,
                tick_label(value)
            );
        }

        let count = chart.points.len();
        for (i, point) in chart.points.iter().enumerate() {
            let _ = write!(
                out,
                r##"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="12" fill="{}">{}</text>"##,
                self.band_center(i, count),
                self.baseline() + 18.0,
                AXIS_TEXT,
                escape(&point.label)
            );
        }

        let _ = write!(
            out,
            r##"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}"/>"##,
            MARGIN_LEFT,
            self.baseline(),
            self.width - MARGIN_RIGHT,
            self.baseline(),
            AXIS_TEXT
        );

        out
    }
}

fn bar_body(chart: &Chart, width: f64, height: f64) -> String {
    let plot = Plot::new(chart, width, height);
    let count = chart.points.len();
    let band = plot.band(count);
    let bar_width = band * 0.6;

    let mut out = plot.axes(chart);
    for (i, point) in chart.points.iter().enumerate() {
        let top = plot.y(point.value);
        let x = plot.band_center(i, count) - bar_width / 2.0;
        let _ = write!(
            out,
            r##"<rect class="bar" data-category="{}" data-value="{}" x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"><title>{}</title></rect>"##,
            escape(&point.label),
            point.value,
            x,
            top,
            bar_width,
            plot.baseline() - top,
            chart.color_at(0),
            escape(&chart.tooltip(point))
        );
    }
    out
}

fn line_body(chart: &Chart, width: f64, height: f64) -> String {
    let plot = Plot::new(chart, width, height);
    let count = chart.points.len();
    let color = chart.color_at(0);

    let coords: Vec<(f64, f64)> = chart
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| (plot.band_center(i, count), plot.y(p.value)))
        .collect();

    let mut path = String::new();
    for (i, (x, y)) in coords.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(path, "{}{:.1},{:.1} ", cmd, x, y);
    }

    let mut out = plot.axes(chart);
    let _ = write!(
        out,
        r##"<path d="{}" fill="none" stroke="{}" stroke-width="3"/>"##,
        path.trim_end(),
        color
    );
    for (point, (x, y)) in chart.points.iter().zip(&coords) {
        let _ = write!(
            out,
            r##"<circle class="dot" data-category="{}" data-value="{}" cx="{:.1}" cy="{:.1}" r="4" fill="{}"><title>{}</title></circle>"##,
            escape(&point.label),
            point.value,
            x,
            y,
            color,
            escape(&chart.tooltip(point))
        );
    }
    out
}

fn pie_body(chart: &Chart, width: f64, height: f64) -> String {
    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = (width.min(height) / 2.0 - 40.0).clamp(20.0, 80.0);
    let total = chart.total();

    let mut out = String::new();
    if total <= 0.0 {
        return out;
    }

    let mut start = -PI / 2.0;
    for (i, point) in chart.points.iter().enumerate() {
        let sweep = point.value / total * 2.0 * PI;
        let end = start + sweep;
        let color = chart.color_at(i);
        let tooltip = escape(&chart.tooltip(point));
        let label = escape(&point.label);

        if sweep >= 2.0 * PI - 1e-9 {
            let _ = write!(
                out,
                r##"<circle class="slice" data-category="{}" data-value="{}" cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"><title>{}</title></circle>"##,
                label, point.value, cx, cy, radius, color, tooltip
            );
        } else if sweep > 0.0 {
            let (x0, y0) = (cx + radius * start.cos(), cy + radius * start.sin());
            let (x1, y1) = (cx + radius * end.cos(), cy + radius * end.sin());
            let large_arc = if sweep > PI { 1 } else { 0 };
            let _ = write!(
                out,
                r##"<path class="slice" data-category="{}" data-value="{}" d="M{:.1},{:.1} L{:.1},{:.1} A{:.1},{:.1} 0 {},1 {:.1},{:.1} Z" fill="{}" stroke="#ffffff"><title>{}</title></path>"##,
                label, point.value, cx, cy, x0, y0, radius, radius, large_arc, x1, y1, color, tooltip
            );
        }

        let mid = start + sweep / 2.0;
        let (lx, ly) = (
            cx + (radius + 14.0) * mid.cos(),
            cy + (radius + 14.0) * mid.sin(),
        );
        let anchor = if mid.cos() >= 0.0 { "start" } else { "end" };
        let _ = write!(
            out,
            r##"<text x="{:.1}" y="{:.1}" text-anchor="{}" font-size="12" fill="{}">{}: {}%</text>"##,
            lx, ly, anchor, color, label, point.value
        );

        start = end;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::model::{ChartPoint, PALETTE};

    fn insurance_chart() -> Chart {
        Chart::new(ChartKind::Bar, "status", "screeningRate")
            .y_domain(0.0, 100.0)
            .color(PALETTE[0])
            .point(ChartPoint::new("Insured", 87.3).annotate("Adults", "n=9938"))
            .point(ChartPoint::new("Uninsured", 62.1).annotate("Adults", "n=1080"))
    }

    #[test]
    fn test_bar_chart_has_one_rect_per_point() {
        let svg = chart_svg(&insurance_chart(), 480, 240);

        assert_eq!(svg.matches(r#"class="bar""#).count(), 2);
        assert!(svg.contains(r#"data-category="Insured" data-value="87.3""#));
        assert!(svg.contains(r#"data-category="Uninsured" data-value="62.1""#));
        assert!(svg.contains("<title>Insured: 87.3% Screening Rate\nAdults: n=9938</title>"));
    }

    #[test]
    fn test_values_below_domain_are_clamped() {
        let chart = Chart::new(ChartKind::Bar, "group", "screeningRate")
            .y_domain(80.0, 90.0)
            .point(ChartPoint::new("Low", 70.0));
        let plot = Plot::new(&chart, 400.0, 200.0);

        assert_eq!(plot.y(70.0), plot.baseline());
        assert_eq!(plot.y(90.0), MARGIN_TOP);
    }

    #[test]
    fn test_line_chart_draws_path_and_dots() {
        let chart = Chart::new(ChartKind::Line, "ageGroup", "screeningRate")
            .y_domain(70.0, 95.0)
            .point(ChartPoint::new("18-30", 75.2))
            .point(ChartPoint::new("31-45", 82.1))
            .point(ChartPoint::new("46-60", 87.8));
        let svg = chart_svg(&chart, 400, 200);

        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains("<path d=\"M"));
        assert_eq!(svg.matches(" L").count(), 2);
    }

    #[test]
    fn test_pie_labels_and_slices() {
        let chart = Chart::new(ChartKind::Pie, "category", "value")
            .palette(&PALETTE[..2])
            .point(ChartPoint::new("Screened (2+ visits)", 84.7))
            .point(ChartPoint::new("Not Screened", 15.3));
        let svg = chart_svg(&chart, 320, 260);

        assert_eq!(svg.matches(r#"class="slice""#).count(), 2);
        assert!(svg.contains("Screened (2+ visits): 84.7%"));
        assert!(svg.contains("Not Screened: 15.3%"));
        // the larger slice needs the large-arc flag
        assert!(svg.contains(" 0 1,1 "));
    }

    #[test]
    fn test_single_full_slice_is_a_circle() {
        let chart = Chart::new(ChartKind::Pie, "category", "value")
            .point(ChartPoint::new("Everyone", 100.0));
        let svg = chart_svg(&chart, 200, 200);
        assert!(svg.contains(r#"<circle class="slice""#));
    }

    #[test]
    fn test_empty_chart_says_no_data() {
        let chart = Chart::new(ChartKind::Bar, "status", "screeningRate");
        assert!(chart_svg(&chart, 200, 100).contains("No data"));
    }

    #[test]
    fn test_labels_are_escaped() {
        let chart = Chart::new(ChartKind::Bar, "group", "screeningRate")
            .point(ChartPoint::new("<script>", 10.0));
        let svg = chart_svg(&chart, 200, 100);
        assert!(!svg.contains("<script>"));
        assert!(svg.contains("&lt;script&gt;"));
    }
}
