//! Shared application state

use std::sync::Arc;

use crate::config::Config;
use crate::manifest::ManifestBuilder;

/// Immutable state shared by every handler
#[derive(Debug, Clone)]
pub struct AppState {
    config: Arc<Config>,
    builder: Arc<ManifestBuilder>,
}

impl AppState {
    /// Build state from config; the manifest builder takes `config.manifest`.
    pub fn new(config: Config) -> Self {
        let builder = ManifestBuilder::new(config.manifest.clone());
        Self {
            config: Arc::new(config),
            builder: Arc::new(builder),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn builder(&self) -> &ManifestBuilder {
        &self.builder
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
