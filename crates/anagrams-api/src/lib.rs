//! anagrams-api crate
//!
//! Web server exposing the anagrams word store as an HTTP API.
//!
//! ## Endpoints
//! - `POST /words.json` - Store English words
//! - `GET /anagrams/{word}.json?nouns=&limit=` - Anagrams of a stored word
//! - `PUT /anagrams/words.json` - Check whether words are anagrams of each other
//! - `DELETE /words/{word}.json` - Delete one word
//! - `DELETE /words.json` - Delete every word
//! - `GET /words/analytics.json` - Word count and length statistics
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:8000/words.json \
//!   -H "Content-Type: application/json" \
//!   -d '{"words": ["read", "dear", "dare"]}'
//!
//! curl "http://127.0.0.1:8000/anagrams/read.json?limit=1"
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{AnagramsQuery, AnagramsResponse, CheckAnagramsResponse, WordsRequest};

/// Installs the global tracing subscriber
///
/// `RUST_LOG` wins over `default_level` when set.
pub fn init_tracing(default_level: &str) {
  use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  tracing_subscriber::registry()
    .with(filter)
    .with(tracing_subscriber::fmt::layer())
    .init();
}
