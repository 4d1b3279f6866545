//! Router definition

use axum::{
  Router,
  routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use super::handlers::{
  check_anagrams, create_words, delete_all_words, delete_analytics_word, delete_word,
  get_anagrams, get_anagrams_of_words, health_check, words_analytics,
};
use super::state::AppState;
use crate::errors::ApiError;

/// Creates the API router
///
/// Literal `*.json` routes take precedence over the `{word}` captures, so
/// `/anagrams/words.json` and `/words/analytics.json` carry both the literal
/// endpoint and the captured-word method.
///
/// # Arguments
/// * `state` - Application state
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route("/words.json", post(create_words).delete(delete_all_words))
    .route(
      "/words/analytics.json",
      get(words_analytics).delete(delete_analytics_word),
    )
    .route("/words/{word}", delete(delete_word))
    .route(
      "/anagrams/words.json",
      put(check_anagrams).get(get_anagrams_of_words),
    )
    .route("/anagrams/{word}", get(get_anagrams))
    .route("/health", get(health_check))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// Starts the server
///
/// # Arguments
/// * `state` - Application state
///
/// # Errors
/// Returns an error if the server fails to start
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr.clone();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .map_err(|e| ApiError::config(format!("failed to bind {addr}: {e}")))?;

  tracing::info!("Starting server: http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("server error: {e}")))?;

  Ok(())
}
