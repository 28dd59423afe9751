//! Markup helpers shared by the SVG and HTML writers

/// Escape text for use in HTML/SVG element content or quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("AI & Energy"), "AI &amp; Energy");
        assert_eq!(escape("<b>'x'</b>"), "&lt;b&gt;&#39;x&#39;&lt;/b&gt;");
        assert_eq!(escape("2022\u{2013}2026"), "2022\u{2013}2026");
    }
}
