//! anagrams-api server entry point

use std::sync::Arc;

use anagrams::WordService;

use anagrams_api::ApiError;
use anagrams_api::api::{AppState, run_server};
use anagrams_api::config::Config;
use anagrams_api::init_tracing;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // Load configuration
  let config = Config::from_env()?;

  // Initialize logging
  init_tracing(config.engine.log_level().as_str());
  tracing::info!(
    bind_addr = %config.bind_addr,
    index_dir = %config.engine.index_dir().display(),
    "Configuration loaded"
  );

  // Initialize service
  let service = Arc::new(WordService::init(&config.engine)?);
  tracing::info!("Word service initialized");

  // Create application state
  let state = AppState::new(config, service);

  // Start server
  run_server(state).await
}
