//! SVG renderer for a [`ChartSpec`]
//!
//! Output is a deterministic function of the chart description and the canvas size:
//! coordinates are written with fixed precision and elements in a fixed
//! order, so the same chart always serializes to the same bytes.

use std::fmt::Write;

use crate::markup::escape;

use super::scale::format_tick;
use super::types::{Axis, ChartSpec, GridLines, Mark};

const FONT: &str = "Arial, Helvetica, sans-serif";
const INK: &str = "#1a1a1a";
const GRID: &str = "#b0b0b0";

// Margins around the plot area
const MARGIN_LEFT: f64 = 84.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 56.0;
const MARGIN_BOTTOM: f64 = 64.0;

/// Pixel mapping for the plot area
struct Frame<'a> {
    x_axis: &'a Axis,
    y_axis: &'a Axis,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Frame<'_> {
    fn x(&self, value: f64) -> f64 {
        self.left + self.x_axis.project(value) * self.width
    }

    fn y(&self, value: f64) -> f64 {
        let fraction = self.y_axis.project(value).clamp(0.0, 1.0);
        self.top + (1.0 - fraction) * self.height
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }

    fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Render a chart to a standalone SVG document
pub fn render(chart: &ChartSpec, width: u32, height: u32) -> String {
    let (w, h) = (width as f64, height as f64);
    let frame = Frame {
        x_axis: &chart.x_axis,
        y_axis: &chart.y_axis,
        left: MARGIN_LEFT,
        top: MARGIN_TOP,
        width: (w - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
        height: (h - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
    };

    let mut svg = String::new();

    let _ = writeln!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{width}' height='{height}' viewBox='0 0 {width} {height}' role='img' aria-label='{}'>",
        escape(&chart.title)
    );
    let _ = writeln!(svg, "  <rect width='{width}' height='{height}' fill='#FFFFFF'/>");
    let _ = writeln!(
        svg,
        "  <text x='{:.2}' y='30' text-anchor='middle' fill='{INK}' font-family='{FONT}' font-size='16' font-weight='bold'>{}</text>",
        w / 2.0,
        escape(&chart.title)
    );

    write_grid(&mut svg, chart, &frame);

    let _ = writeln!(
        svg,
        "  <rect x='{:.2}' y='{:.2}' width='{:.2}' height='{:.2}' fill='none' stroke='{INK}' stroke-width='1'/>",
        frame.left, frame.top, frame.width, frame.height
    );

    match chart.mark {
        Mark::Line {
            stroke_width,
            marker_radius,
        } => write_line(&mut svg, chart, &frame, stroke_width, marker_radius),
        Mark::Bar {
            width: bar_width,
            outline_width,
        } => write_bars(&mut svg, chart, &frame, bar_width, outline_width),
    }

    write_tick_labels(&mut svg, &frame);
    write_axis_labels(&mut svg, &frame);

    svg.push_str("</svg>\n");
    svg
}

fn write_grid(svg: &mut String, chart: &ChartSpec, frame: &Frame<'_>) {
    let _ = writeln!(svg, "  <g class='grid'>");

    if let Some(minor) = chart.minor_grid {
        for tick in &frame.y_axis.minor_ticks {
            horizontal_line(svg, frame, frame.y(*tick), &minor, 0.6);
        }
    }

    let major = chart.major_grid;
    for tick in &frame.y_axis.major_ticks {
        horizontal_line(svg, frame, frame.y(*tick), &major, 0.8);
    }
    for tick in &frame.x_axis.major_ticks {
        let x = frame.x(*tick);
        let _ = writeln!(
            svg,
            "    <line x1='{x:.2}' y1='{:.2}' x2='{x:.2}' y2='{:.2}' stroke='{GRID}' stroke-width='0.8' stroke-opacity='{:.2}'{}/>",
            frame.top,
            frame.bottom(),
            major.opacity,
            dash_attr(&major)
        );
    }

    let _ = writeln!(svg, "  </g>");
}

fn horizontal_line(svg: &mut String, frame: &Frame<'_>, y: f64, lines: &GridLines, stroke: f64) {
    let _ = writeln!(
        svg,
        "    <line x1='{:.2}' y1='{y:.2}' x2='{:.2}' y2='{y:.2}' stroke='{GRID}' stroke-width='{stroke}' stroke-opacity='{:.2}'{}/>",
        frame.left,
        frame.right(),
        lines.opacity,
        dash_attr(lines)
    );
}

fn dash_attr(lines: &GridLines) -> String {
    lines
        .style
        .dasharray()
        .map(|d| format!(" stroke-dasharray='{d}'"))
        .unwrap_or_default()
}

fn write_line(
    svg: &mut String,
    chart: &ChartSpec,
    frame: &Frame<'_>,
    stroke_width: f64,
    marker_radius: f64,
) {
    let path: Vec<String> = chart
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let cmd = if i == 0 { 'M' } else { 'L' };
            format!("{cmd}{:.2},{:.2}", frame.x(p.year as f64), frame.y(p.value))
        })
        .collect();

    let _ = writeln!(svg, "  <g class='series'>");
    let _ = writeln!(
        svg,
        "    <path d='{}' fill='none' stroke='{}' stroke-width='{stroke_width}' stroke-linejoin='round'/>",
        path.join(" "),
        chart.color
    );
    for p in &chart.points {
        let _ = writeln!(
            svg,
            "    <circle cx='{:.2}' cy='{:.2}' r='{marker_radius}' fill='{}'><title>{}: {}</title></circle>",
            frame.x(p.year as f64),
            frame.y(p.value),
            chart.color,
            p.year,
            format_tick(p.value)
        );
    }
    let _ = writeln!(svg, "  </g>");
}

fn write_bars(
    svg: &mut String,
    chart: &ChartSpec,
    frame: &Frame<'_>,
    bar_width: f64,
    outline_width: f64,
) {
    let half = bar_width / 2.0;
    let base = frame.bottom();

    let _ = writeln!(svg, "  <g class='series'>");
    for p in &chart.points {
        let x0 = frame.x(p.year as f64 - half);
        let x1 = frame.x(p.year as f64 + half);
        let top = frame.y(p.value);
        let _ = writeln!(
            svg,
            "    <rect x='{x0:.2}' y='{top:.2}' width='{:.2}' height='{:.2}' fill='{}' stroke='#000000' stroke-width='{outline_width}'><title>{}: {}</title></rect>",
            x1 - x0,
            base - top,
            chart.color,
            p.year,
            format_tick(p.value)
        );
    }
    let _ = writeln!(svg, "  </g>");
}

fn write_tick_labels(svg: &mut String, frame: &Frame<'_>) {
    let _ = writeln!(svg, "  <g class='ticks' fill='{INK}' font-family='{FONT}' font-size='12'>");

    for tick in &frame.x_axis.major_ticks {
        let _ = writeln!(
            svg,
            "    <text x='{:.2}' y='{:.2}' text-anchor='middle'>{}</text>",
            frame.x(*tick),
            frame.bottom() + 18.0,
            format_tick(*tick)
        );
    }
    for tick in &frame.y_axis.major_ticks {
        let _ = writeln!(
            svg,
            "    <text x='{:.2}' y='{:.2}' text-anchor='end'>{}</text>",
            frame.left - 8.0,
            frame.y(*tick) + 4.0,
            format_tick(*tick)
        );
    }

    let _ = writeln!(svg, "  </g>");
}

fn write_axis_labels(svg: &mut String, frame: &Frame<'_>) {
    let _ = writeln!(
        svg,
        "  <text x='{:.2}' y='{:.2}' text-anchor='middle' fill='{INK}' font-family='{FONT}' font-size='13' font-weight='bold'>{}</text>",
        frame.left + frame.width / 2.0,
        frame.bottom() + 44.0,
        escape(&frame.x_axis.label)
    );

    let cx = 22.0;
    let cy = frame.top + frame.height / 2.0;
    let _ = writeln!(
        svg,
        "  <text x='{cx:.2}' y='{cy:.2}' transform='rotate(-90 {cx:.2} {cy:.2})' text-anchor='middle' fill='{INK}' font-family='{FONT}' font-size='13' font-weight='bold'>{}</text>",
        escape(&frame.y_axis.label)
    );
}
