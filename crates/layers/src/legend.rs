use foundation::Rgb;

use crate::symbology::LandUseCategory;

/// CSS selector of the container legend fragments are appended to.
pub const LEGEND_CONTAINER: &str = ".legend";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub code: u8,
    pub color: Rgb,
    pub label: &'static str,
}

impl LegendEntry {
    pub fn from_category(category: &LandUseCategory) -> Self {
        Self {
            code: category.code,
            color: category.color,
            label: category.label,
        }
    }

    /// Swatch plus label, as a detached HTML fragment.
    pub fn to_html(&self) -> String {
        format!(
            "<div><div class=\"legend-color-box\" style=\"background-color:{};\"></div>{}</div>",
            self.color,
            escape_html(self.label)
        )
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
