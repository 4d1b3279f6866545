//! HTTP handler definitions
//!
//! Path parameters arrive with their `.json` suffix (`/words/{word}` matches
//! `/words/cat.json`); handlers strip it and answer 404 when it is missing.

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
};
use tracing::{debug, error, info};

use anagrams::{AggregatedWordsData, AnagramsResult, Word, WordService};

use crate::errors::ApiError;
use crate::models::{AnagramsQuery, AnagramsResponse, CheckAnagramsResponse, WordsRequest};

use super::state::AppState;

/// Suffix every resource path carries
const JSON_SUFFIX: &str = ".json";

/// Word captured by the literal `/anagrams/words.json` route
const WORDS_LITERAL: &str = "words";

/// Word captured by the literal `/words/analytics.json` route
const ANALYTICS_LITERAL: &str = "analytics";

/// Strips `.json` from a path segment
fn strip_json_suffix(segment: &str) -> Result<&str, ApiError> {
  segment
    .strip_suffix(JSON_SUFFIX)
    .filter(|word| !word.is_empty())
    .ok_or_else(|| ApiError::not_found(format!("{segment} not found")))
}

/// Runs blocking word-store work on the blocking thread pool
///
/// Index and lexicon access is synchronous; keep it off the async runtime.
async fn run_blocking<T, F>(state: &AppState, f: F) -> Result<T, ApiError>
where
  T: Send + 'static,
  F: FnOnce(&WordService) -> AnagramsResult<T> + Send + 'static,
{
  let service = state.service.clone();

  let result = tokio::task::spawn_blocking(move || f(service.as_ref())).await.map_err(|e| {
    error!(error = %e, "spawn_blocking error");
    ApiError::internal("failed to run blocking task")
  })?;

  Ok(result?)
}

/// POST /words.json endpoint
///
/// Stores the English words of the body.
///
/// # Response
/// - 201 Created: stored records (non-English words are left out)
pub async fn create_words(
  State(state): State<AppState>,
  Json(request): Json<WordsRequest>,
) -> Result<(StatusCode, Json<Vec<Word>>), ApiError> {
  debug!(count = request.words.len(), "Create words request received");

  let created = run_blocking(&state, move |service| service.create_words(&request.words)).await?;

  info!(created = created.len(), "Words created");
  Ok((StatusCode::CREATED, Json(created)))
}

/// GET /anagrams/{word}.json endpoint
///
/// # Response
/// - 200 OK: `{"anagrams": [...]}`
/// - 404 Not Found: word was never stored
pub async fn get_anagrams(
  State(state): State<AppState>,
  Path(segment): Path<String>,
  Query(query): Query<AnagramsQuery>,
) -> Result<Json<AnagramsResponse>, ApiError> {
  let word = strip_json_suffix(&segment)?.to_string();
  list_anagrams(state, word, query).await
}

/// GET /anagrams/words.json endpoint
///
/// The literal route shadows `{word}` for the word "words".
pub async fn get_anagrams_of_words(
  State(state): State<AppState>,
  Query(query): Query<AnagramsQuery>,
) -> Result<Json<AnagramsResponse>, ApiError> {
  list_anagrams(state, WORDS_LITERAL.to_string(), query).await
}

async fn list_anagrams(
  state: AppState,
  word: String,
  query: AnagramsQuery,
) -> Result<Json<AnagramsResponse>, ApiError> {
  debug!(word = %word, nouns = ?query.nouns, limit = ?query.limit, "Anagrams request received");

  let anagrams = run_blocking(&state, move |service| {
    service.list_anagrams_by_word(
      &word,
      query.include_word_type(),
      query.exclude_word_type(),
      query.limit,
    )
  })
  .await?;

  Ok(Json(AnagramsResponse { anagrams }))
}

/// PUT /anagrams/words.json endpoint
///
/// # Response
/// - 200 OK: `{"is_anagrams": bool, "words": [...]}`
/// - 400 Bad Request: fewer than two distinct words, or a non-English word
pub async fn check_anagrams(
  State(state): State<AppState>,
  Json(request): Json<WordsRequest>,
) -> Result<Json<CheckAnagramsResponse>, ApiError> {
  let words = request.words;

  let (is_anagrams, words) = run_blocking(&state, move |service| {
    let is_anagrams = service.check_all_anagrams(&words)?;
    Ok((is_anagrams, words))
  })
  .await?;

  Ok(Json(CheckAnagramsResponse { is_anagrams, words }))
}

/// DELETE /words/{word}.json endpoint
///
/// # Response
/// - 204 No Content
/// - 404 Not Found: word is not stored
pub async fn delete_word(
  State(state): State<AppState>,
  Path(segment): Path<String>,
) -> Result<StatusCode, ApiError> {
  let word = strip_json_suffix(&segment)?.to_string();
  remove_word(state, word).await
}

/// DELETE /words/analytics.json endpoint
///
/// The literal route shadows `{word}` for the word "analytics".
pub async fn delete_analytics_word(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
  remove_word(state, ANALYTICS_LITERAL.to_string()).await
}

async fn remove_word(state: AppState, word: String) -> Result<StatusCode, ApiError> {
  let deleted = word.clone();
  run_blocking(&state, move |service| service.delete_word(&word)).await?;

  info!(word = %deleted, "Word deleted");
  Ok(StatusCode::NO_CONTENT)
}

/// DELETE /words.json endpoint
///
/// # Response
/// - 204 No Content
/// - 404 Not Found: nothing was stored
pub async fn delete_all_words(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
  run_blocking(&state, |service| service.delete_all_words()).await?;

  info!("All words deleted");
  Ok(StatusCode::NO_CONTENT)
}

/// GET /words/analytics.json endpoint
///
/// Word count and min / max / average / median word length.
pub async fn words_analytics(
  State(state): State<AppState>,
) -> Result<Json<AggregatedWordsData>, ApiError> {
  let data = run_blocking(&state, |service| service.words_analytics()).await?;
  Ok(Json(data))
}

/// Health check endpoint
///
/// Checks if the server is running.
pub async fn health_check() -> &'static str {
  "OK"
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn strip_json_suffix_accepts_json_paths() {
    assert_eq!(strip_json_suffix("listen.json").unwrap(), "listen");
    assert_eq!(strip_json_suffix("a.b.json").unwrap(), "a.b");
  }

  #[test]
  fn strip_json_suffix_rejects_other_paths() {
    assert_eq!(strip_json_suffix("listen").unwrap_err().code(), "not_found");
    assert_eq!(strip_json_suffix(".json").unwrap_err().code(), "not_found");
  }
}
