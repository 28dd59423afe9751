//! # energy-viz
//!
//! AI Growth vs Data Center Energy - renders a small yearly dataset
//! (data-center electricity consumption and an AI-compute growth index)
//! as a themed web page with a data table, a line chart, and a log-scale
//! bar chart.
//!
//! ## Modules
//!
//! - [`data`]: CSV loader and the immutable [`Dataset`]
//! - [`chart`]: chart descriptions, scales, and SVG rendering
//! - [`page`]: page composition and theme
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use energy_viz::data;
//! use energy_viz::page::Page;
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = data::load_path(Path::new("data.csv"))?;
//!     let html = Page::default().compose(&dataset)?;
//!     std::fs::write("page.html", html)?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod data;
pub mod markup;
pub mod page;

// Re-export top-level types for convenience
pub use data::{DataError, DataResult, Dataset, YearlyRecord};

pub use chart::{compute_chart, electricity_chart, Axis, ChartError, ChartSpec, Scale};

pub use page::{ChartSize, Page, Theme};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError, DataConfig, LoggingConfig, Resolved, ServerConfig};
