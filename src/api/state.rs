//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::api::error::ApiResult;
use crate::config::{Config, DataConfig};
use crate::data::{self, Dataset};
use crate::page::{ChartSize, Page, Theme};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Table loaded at startup; never mutated
    pub dataset: Arc<Dataset>,
    /// Page composer with theme and chart size
    pub page: Arc<Page>,
    /// Where the data came from and whether to re-read it per request
    pub source: Arc<DataConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state from an already-loaded dataset
    pub fn new(dataset: Dataset, page: Page, source: DataConfig) -> Self {
        Self {
            dataset: Arc::new(dataset),
            page: Arc::new(page),
            source: Arc::new(source),
            start_time: Instant::now(),
        }
    }

    /// Load the dataset named in `config` and build state around it
    ///
    /// A load failure is returned to the caller; the server must not start
    /// without data.
    pub fn from_config(config: &Config) -> data::DataResult<Self> {
        let dataset = data::load_path(&config.data.path)?;
        let page = Page::new(
            Theme::default(),
            ChartSize {
                width: config.server.chart_width,
                height: config.server.chart_height,
            },
        );
        Ok(Self::new(dataset, page, config.data.clone()))
    }

    /// Dataset for one page view
    ///
    /// With `reload_per_request` each call reads a private copy from disk;
    /// otherwise the startup table is shared.
    pub async fn current_dataset(&self) -> ApiResult<Arc<Dataset>> {
        if !self.source.reload_per_request {
            return Ok(Arc::clone(&self.dataset));
        }

        let path = self.source.path.clone();
        let dataset = tokio::task::spawn_blocking(move || data::load_path(&path)).await??;
        Ok(Arc::new(dataset))
    }

    pub fn data_path(&self) -> &PathBuf {
        &self.source.path
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FIXTURE: &str = "year,DataCenter_Electricity_Twh,Ai_Compute_Index
2022,331,1
2023,372.4,5";

    #[test]
    fn test_from_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.data.path = dir.path().join("absent.csv");

        let err = AppState::from_config(&config).err().unwrap();
        assert!(matches!(err, data::DataError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_shared_dataset_without_reload() {
        let dataset = data::load_str(FIXTURE).unwrap();
        let state = AppState::new(dataset, Page::default(), DataConfig::default());

        let a = state.current_dataset().await.unwrap();
        let b = state.current_dataset().await.unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[tokio::test]
    async fn test_reload_reads_file_each_time() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FIXTURE.as_bytes()).unwrap();

        let mut config = Config::default();
        config.data.path = file.path().to_path_buf();
        config.data.reload_per_request = true;

        let state = AppState::from_config(&config).unwrap();
        let a = state.current_dataset().await.unwrap();
        let b = state.current_dataset().await.unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(*a, *b);
    }
}
