//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{
  check_anagrams, create_words, delete_all_words, delete_analytics_word, delete_word,
  get_anagrams, get_anagrams_of_words, health_check, words_analytics,
};
pub use routes::{create_router, run_server};
pub use state::AppState;
