//! Page Composer
//!
//! Lays out title, raw data table, both charts side by side, and the key
//! insights card as one HTML document. Content placement only; all numbers
//! come from the dataset or the chart renderer.

use std::fmt::Write;

use crate::chart::{self, ChartError};
use crate::data::{Dataset, COMPUTE_COLUMN, ELECTRICITY_COLUMN, YEAR_COLUMN};
use crate::markup::escape;

use super::theme::Theme;

pub const PAGE_TITLE: &str = "AI & Energy Visualization";
pub const PAGE_ICON: &str = "\u{26a1}";
pub const HEADLINE: &str = "\u{26a1} AI Growth & Data Center Energy Analysis";

pub const TABLE_HEADING: &str = "\u{1f4ca} Raw Data Table";
pub const ENERGY_HEADING: &str = "\u{1f4c8} Energy Consumption Trend";
pub const ENERGY_NOTE: &str = "\u{1f4cc} Note: 2025\u{2013}2026 values are projections";
pub const COMPUTE_HEADING: &str = "\u{1f4ca} AI Compute Growth";
pub const COMPUTE_NOTE: &str = "\u{1f4cc} Log scale used due to exponential AI growth";
pub const INSIGHTS_HEADING: &str = "\u{1f4a1} Key Insights";

/// The three commentary statements: (lead, body)
pub const INSIGHTS: [(&str, &str); 3] = [
    (
        "1. Energy Consumption:",
        "Data center electricity usage is projected to grow from 331 TWh (2022) to 520.6 TWh (2026) \u{2014} a ~57% increase.",
    ),
    (
        "2. AI Compute Growth:",
        "AI training compute is growing exponentially at 5\u{d7} per year, reaching 625\u{d7} the 2022 baseline by 2026.",
    ),
    (
        "3. Correlation:",
        "While AI compute grows exponentially, energy consumption grows more linearly, suggesting efficiency improvements are partially offsetting raw compute demands.",
    ),
];

/// Chart canvas size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartSize {
    fn default() -> Self {
        Self {
            width: 640,
            height: 400,
        }
    }
}

/// Composes the full page
#[derive(Debug, Clone, Default)]
pub struct Page {
    theme: Theme,
    chart_size: ChartSize,
}

impl Page {
    pub fn new(theme: Theme, chart_size: ChartSize) -> Self {
        Self { theme, chart_size }
    }

    pub fn chart_size(&self) -> ChartSize {
        self.chart_size
    }

    /// Render the line chart alone as SVG
    pub fn electricity_svg(&self, dataset: &Dataset) -> Result<String, ChartError> {
        let spec = chart::electricity_chart(dataset)?;
        Ok(chart::svg::render(&spec, self.chart_size.width, self.chart_size.height))
    }

    /// Render the bar chart alone as SVG
    pub fn compute_svg(&self, dataset: &Dataset) -> Result<String, ChartError> {
        let spec = chart::compute_chart(dataset)?;
        Ok(chart::svg::render(&spec, self.chart_size.width, self.chart_size.height))
    }

    /// Render the whole page: load has already happened, so this is
    /// table, chart 1, chart 2, then static text
    pub fn compose(&self, dataset: &Dataset) -> Result<String, ChartError> {
        let table = render_table(dataset);
        let electricity = self.electricity_svg(dataset)?;
        let compute = self.compute_svg(dataset)?;

        let mut html = String::new();

        let _ = writeln!(html, "<!DOCTYPE html>");
        let _ = writeln!(html, "<html lang='en'>");
        let _ = writeln!(html, "<head>");
        let _ = writeln!(html, "  <meta charset='utf-8'>");
        let _ = writeln!(
            html,
            "  <meta name='viewport' content='width=device-width, initial-scale=1'>"
        );
        let _ = writeln!(html, "  <title>{}</title>", escape(PAGE_TITLE));
        let _ = writeln!(
            html,
            "  <link rel='icon' href=\"data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>{PAGE_ICON}</text></svg>\">"
        );
        let _ = writeln!(html, "  <style>{}</style>", self.theme.stylesheet());
        let _ = writeln!(html, "</head>");
        let _ = writeln!(html, "<body>");

        let _ = writeln!(html, "<div class='neu-title'>{}</div>", escape(HEADLINE));

        subtitle(&mut html, TABLE_HEADING);
        let _ = writeln!(html, "<div class='dataframe-container'>");
        html.push_str(&table);
        let _ = writeln!(html, "</div>");

        let _ = writeln!(html, "<div class='columns'>");
        chart_column(&mut html, "electricity", ENERGY_HEADING, ENERGY_NOTE, &electricity);
        chart_column(&mut html, "compute", COMPUTE_HEADING, COMPUTE_NOTE, &compute);
        let _ = writeln!(html, "</div>");

        let _ = writeln!(html, "<hr>");
        subtitle(&mut html, INSIGHTS_HEADING);
        let _ = writeln!(html, "<div class='neu-card'>");
        for (lead, body) in INSIGHTS {
            let _ = writeln!(
                html,
                "  <p><strong>{}</strong> {}</p>",
                escape(lead),
                escape(body)
            );
        }
        let _ = writeln!(html, "</div>");

        let _ = writeln!(html, "</body>");
        let _ = writeln!(html, "</html>");

        Ok(html)
    }
}

/// Raw data table with the CSV header names and no index column
///
/// Cells use the shortest round-trip form of each value, so the table shows
/// exactly what was loaded.
pub fn render_table(dataset: &Dataset) -> String {
    let mut table = String::new();

    let _ = writeln!(table, "<table>");
    let _ = writeln!(
        table,
        "  <thead><tr><th>{}</th><th>{}</th><th>{}</th></tr></thead>",
        YEAR_COLUMN, ELECTRICITY_COLUMN, COMPUTE_COLUMN
    );
    let _ = writeln!(table, "  <tbody>");
    for r in dataset.records() {
        let _ = writeln!(
            table,
            "    <tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            r.year, r.electricity_twh, r.ai_compute_index
        );
    }
    let _ = writeln!(table, "  </tbody>");
    let _ = writeln!(table, "</table>");

    table
}

fn subtitle(html: &mut String, text: &str) {
    let _ = writeln!(html, "<div class='neu-subtitle'>{}</div>", escape(text));
}

fn chart_column(html: &mut String, id: &str, heading: &str, note: &str, svg: &str) {
    let _ = writeln!(html, "<section id='{id}'>");
    subtitle(html, heading);
    let _ = writeln!(html, "<div class='neu-note'>{}</div>", escape(note));
    let _ = writeln!(html, "<div class='chart-container'>");
    html.push_str(svg);
    let _ = writeln!(html, "</div>");
    let _ = writeln!(html, "</section>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::load_str;

    fn fixture() -> Dataset {
        load_str(
            "year,DataCenter_Electricity_Twh,Ai_Compute_Index
2022,331,1
2023,372.4,5
2024,415.2,25
2025,466.8,125
2026,520.6,625",
        )
        .unwrap()
    }

    #[test]
    fn test_table_rows() {
        let table = render_table(&fixture());
        assert_eq!(table.matches("<tr>").count(), 6);
        assert!(table.contains("<th>DataCenter_Electricity_Twh</th>"));
        assert!(table.contains("<tr><td>2022</td><td>331</td><td>1</td></tr>"));
        assert!(table.contains("<tr><td>2026</td><td>520.6</td><td>625</td></tr>"));
    }

    #[test]
    fn test_table_keeps_full_precision() {
        let ds = load_str(
            "year,DataCenter_Electricity_Twh,Ai_Compute_Index
2022,0.0000001,1
2023,0.1234567,5",
        )
        .unwrap();
        let table = render_table(&ds);

        assert!(table.contains("<tr><td>2022</td><td>0.0000001</td><td>1</td></tr>"));
        assert!(table.contains("<td>0.1234567</td>"));
    }

    #[test]
    fn test_compose_contains_all_sections() {
        let html = Page::default().compose(&fixture()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>AI &amp; Energy Visualization</title>"));
        assert!(html.contains("AI Growth &amp; Data Center Energy Analysis"));
        assert_eq!(html.matches("<svg xmlns='http://www.w3.org/2000/svg' width=").count(), 2);
        assert!(html.contains("Log scale used due to exponential AI growth"));
        assert_eq!(html.matches("<p><strong>").count(), 3);
        assert!(html.contains("Energy Consumption:"));
        assert!(html.contains("Correlation:"));
    }

    #[test]
    fn test_charts_appear_after_table() {
        let html = Page::default().compose(&fixture()).unwrap();

        let table = html.find("<table>").unwrap();
        let line = html.find("id='electricity'").unwrap();
        let bars = html.find("id='compute'").unwrap();
        let insights = html.find("Key Insights").unwrap();
        assert!(table < line && line < bars && bars < insights);
    }

    #[test]
    fn test_compose_is_idempotent() {
        let page = Page::default();
        let ds = fixture();
        assert_eq!(page.compose(&ds).unwrap(), page.compose(&ds).unwrap());
    }

    #[test]
    fn test_custom_chart_size() {
        let page = Page::new(
            Theme::default(),
            ChartSize {
                width: 800,
                height: 500,
            },
        );
        let svg = page.electricity_svg(&fixture()).unwrap();
        assert!(svg.contains("viewBox='0 0 800 500'"));
    }
}
