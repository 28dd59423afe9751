//! Neubrutalism theme
//!
//! Flat pastel blocks, thick black borders, hard offset shadows.

/// Page palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: &'static str,
    pub surface: &'static str,
    pub ink: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub note: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::neubrutalism()
    }
}

impl Theme {
    pub fn neubrutalism() -> Self {
        Self {
            background: "#FFFEF0",
            surface: "#FFFFFF",
            ink: "#1a1a1a",
            title: "#FFE156",
            subtitle: "#A8E6CF",
            note: "#FFB6C1",
        }
    }

    /// Stylesheet for the page, with the palette substituted in
    pub fn stylesheet(&self) -> String {
        let Theme {
            background,
            surface,
            ink,
            title,
            subtitle,
            note,
        } = self;

        format!(
            r#"
    * {{ box-sizing: border-box; }}
    body {{
        margin: 0;
        padding: 2rem 3rem;
        background-color: {background};
        color: {ink};
        font-family: Arial, Helvetica, sans-serif;
    }}
    .neu-title {{
        font-family: 'Arial Black', sans-serif;
        font-size: 2.5rem;
        font-weight: 900;
        text-transform: uppercase;
        letter-spacing: 2px;
        padding: 1rem;
        background-color: {title};
        border: 3px solid {ink};
        box-shadow: 6px 6px 0px {ink};
        margin-bottom: 2rem;
        text-align: center;
    }}
    .neu-subtitle {{
        font-family: 'Arial Black', sans-serif;
        font-size: 1.3rem;
        font-weight: 800;
        background-color: {subtitle};
        border: 3px solid {ink};
        padding: 0.8rem 1.2rem;
        box-shadow: 4px 4px 0px {ink};
        margin: 1rem 0;
        display: inline-block;
    }}
    .dataframe-container {{
        border: 3px solid {ink};
        box-shadow: 6px 6px 0px {ink};
        background-color: {surface};
        overflow-x: auto;
    }}
    .dataframe-container table {{
        width: 100%;
        border-collapse: collapse;
    }}
    .dataframe-container th, .dataframe-container td {{
        padding: 0.5rem 1rem;
        border-bottom: 1px solid {ink};
        text-align: right;
    }}
    .dataframe-container th {{
        background-color: {background};
        font-weight: 800;
    }}
    .columns {{
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 2rem;
    }}
    @media (max-width: 900px) {{
        .columns {{ grid-template-columns: 1fr; }}
    }}
    .neu-note {{
        background-color: {note};
        border: 2px solid {ink};
        padding: 0.8rem;
        box-shadow: 4px 4px 0px {ink};
        font-weight: 600;
        margin: 1rem 0;
    }}
    .chart-container {{
        background-color: {surface};
        border: 3px solid {ink};
        box-shadow: 8px 8px 0px {ink};
        padding: 1rem;
        margin: 1.5rem 0;
    }}
    .chart-container svg {{
        width: 100%;
        height: auto;
    }}
    .neu-card {{
        background-color: {surface};
        border: 3px solid {ink};
        padding: 1.5rem;
        margin: 1rem 0;
        box-shadow: 6px 6px 0px {ink};
    }}
    .neu-card p {{
        font-size: 1rem;
        line-height: 1.6;
        margin-bottom: 0.8rem;
    }}
    hr {{
        border: none;
        border-top: 3px solid {ink};
        margin: 2rem 0;
    }}
"#
        )
    }
}
