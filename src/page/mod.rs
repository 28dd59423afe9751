//! Page Composer
//!
//! Static title, data table, both charts, and commentary, in the fixed
//! neubrutalism theme.

mod composer;
mod theme;

pub use composer::{render_table, ChartSize, Page, HEADLINE, INSIGHTS, PAGE_TITLE};
pub use theme::Theme;
