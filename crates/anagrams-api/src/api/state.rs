//! API State Definition

use std::sync::Arc;

use anagrams::WordService;

use crate::config::Config;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Word service
  ///
  /// - Production: `Arc::new(WordService::init(&config.engine)?)`
  /// - Test: `Arc::new(WordService::new(stub_repository, stub_processor))`
  pub service: Arc<WordService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<WordService>) -> Self {
    Self { config, service }
  }
}
